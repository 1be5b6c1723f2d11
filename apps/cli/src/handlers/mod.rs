pub mod access;
pub mod resolve;
pub mod validate;
