//! OS-level lookups: environmental variables and the user database.

pub mod env;
pub mod user;
