pub mod endpoint;
pub mod error;
pub mod locale;
