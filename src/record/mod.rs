pub mod identifier;
pub mod storage;
pub mod types;

pub use identifier::{Identifier, IdentifierError, IDENTIFIER_LEN};
pub use storage::{get_default_store_path, RecordStore};
pub use types::{Record, StoreError};
