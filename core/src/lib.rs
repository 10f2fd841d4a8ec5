pub mod convert;
pub mod format;
pub mod registry;
pub mod value;
