//! Mock authentication.
//!
//! Any syntactically valid credentials are accepted after a short simulated
//! delay. Nothing is stored or verified.

mod form;
mod mock;

pub use form::{AuthForm, AuthMode, Field, MAX_FIELD_LENGTH};
pub use mock::{
    authenticate, spawn_authentication, validate_email, AuthError, AuthHandle, AuthRequest,
    DEFAULT_AUTH_LATENCY,
};
