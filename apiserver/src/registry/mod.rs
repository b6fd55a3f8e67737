mod error;
mod factory;
mod simple;
mod traits;

#[cfg(test)]
mod tests;

pub use error::ResolutionError;
pub use factory::StorageFactoryRestOptionsFactory;
pub use simple::SimpleRestOptionsFactory;
pub use traits::RestOptionsGetter;
