//! Account model and persistence contract for sevapass.

mod memory;
mod model;
mod store;

pub use memory::MemoryAccountStore;
pub use model::{Account, AccountInfo, NewAccount};
pub use store::{AccountStore, SharedStore, StoreError};
