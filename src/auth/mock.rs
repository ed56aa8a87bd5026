use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::event::AppEvent;
use crate::models::User;

/// Simulated round trip of the sign-in call.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a password")]
    EmptyPassword,
    #[error("Please enter your name")]
    EmptyName,
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

/// Credentials collected by the login or signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login {
        email: String,
        password: String,
    },
    Signup {
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    },
}

impl AuthRequest {
    pub fn email(&self) -> &str {
        match self {
            Self::Login { email, .. } | Self::Signup { email, .. } => email,
        }
    }

    /// Check the request without side effects.
    pub fn validate(&self) -> Result<(), AuthError> {
        match self {
            Self::Login { email, password } => {
                validate_email(email)?;
                if password.is_empty() {
                    return Err(AuthError::EmptyPassword);
                }
            }
            Self::Signup {
                name,
                email,
                password,
                confirm_password,
            } => {
                if name.is_empty() {
                    return Err(AuthError::EmptyName);
                }
                validate_email(email)?;
                if password.is_empty() {
                    return Err(AuthError::EmptyPassword);
                }
                if password != confirm_password {
                    return Err(AuthError::PasswordMismatch);
                }
            }
        }
        Ok(())
    }

    fn into_user(self) -> User {
        let id = Uuid::new_v4().to_string();
        match self {
            Self::Login { email, .. } => User {
                id,
                display_name: email.split('@').next().unwrap_or_default().to_string(),
                email,
            },
            Self::Signup { name, email, .. } => User {
                id,
                display_name: name,
                email,
            },
        }
    }
}

/// Syntactic email check: one `@`, a non-empty local part and a dotted
/// domain without empty labels.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(AuthError::InvalidEmail);
    };

    let valid = !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty());

    if valid {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail)
    }
}

/// Accept any valid request after `latency`.
pub async fn authenticate(request: AuthRequest, latency: Duration) -> Result<User, AuthError> {
    request.validate()?;
    tokio::time::sleep(latency).await;
    Ok(request.into_user())
}

/// An in-flight authentication call. Dropping it cancels the call.
#[derive(Debug)]
pub struct AuthHandle {
    id: Uuid,
    task: JoinHandle<()>,
}

impl AuthHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for AuthHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run [`authenticate`] in the background and report through `events`.
pub fn spawn_authentication(
    request: AuthRequest,
    latency: Duration,
    events: mpsc::UnboundedSender<AppEvent>,
) -> AuthHandle {
    let id = Uuid::new_v4();
    tracing::info!(request = %id, email = request.email(), "authentication requested");

    let task = tokio::spawn(async move {
        let outcome = authenticate(request, latency).await;
        let _ = events.send(AppEvent::AuthCompleted {
            request: id,
            outcome,
        });
    });

    AuthHandle { id, task }
}
