pub mod games;
pub mod logger;
pub mod validate;

pub use validate::Validate;
