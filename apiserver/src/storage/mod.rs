mod error;
mod traits;

pub use error::StorageError;
pub use traits::StorageFactory;
