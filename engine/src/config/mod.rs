mod store;
mod validate;

pub use store::ConfigStore;
pub use validate::Validate;
