//! These traits define what the sign-up controller needs from the outside
//! world.

pub mod add_account;
pub mod email_validator;
pub mod error;

pub use add_account::*;
pub use email_validator::*;
pub use error::*;
