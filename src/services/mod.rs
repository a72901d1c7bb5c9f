pub mod store;
pub mod validation;
