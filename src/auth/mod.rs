//! Auth*entication*
//!
//! Registration, login and the per-request identity
pub mod authentication;
mod identity;
pub mod password;
pub mod token;

pub use identity::Identity;
