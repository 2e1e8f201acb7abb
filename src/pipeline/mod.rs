pub mod assembler;
pub mod error;
pub mod validate;
