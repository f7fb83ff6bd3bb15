//! Registration and login rules for Monex.
//!
//! Raw form input is normalized, validated against a declarative rule table,
//! hashed and written to a single-slot credential store. Logins are matched
//! against that one stored record.

mod email;
mod field;
mod form;
mod gender;
mod hash;
mod login;
pub mod normalize;
mod registration;
pub mod rules;
mod store;
mod strength;
mod user;

pub use email::*;
pub use field::*;
pub use form::*;
pub use gender::*;
pub use hash::*;
pub use login::*;
pub use registration::*;
pub use store::*;
pub use strength::*;
pub use user::*;
