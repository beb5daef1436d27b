//! Application services for sign-in and session management.

mod session;

pub use session::{AuthError, AuthResult, AuthService};
