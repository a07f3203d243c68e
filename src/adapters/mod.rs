//! Outbound adapters.

pub mod email_validator;
pub mod memory;

pub use email_validator::EmailValidatorAdapter;
pub use memory::MemoryAccountStore;
