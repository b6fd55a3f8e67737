mod error;
mod etcd;
mod flags;

pub use error::{ConfigurationError, ValidationErrors};
pub use etcd::{DEFAULT_STORAGE_MEDIA_TYPE, EtcdOptions};
pub use flags::EtcdFlags;
