//! User records and sessions
//!
//! Plain data types shared by the directory, auth and sync components.

pub mod session;
pub mod types;

pub use session::{Session, format_elapsed};
pub use types::*;
