//! Events delivered to the controller from background tasks.

use uuid::Uuid;

use crate::auth::AuthError;
use crate::models::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One second elapsed for the session with this id.
    Tick(Uuid),
    /// A mock sign-in or sign-up request finished.
    AuthCompleted {
        request: Uuid,
        outcome: Result<User, AuthError>,
    },
}
