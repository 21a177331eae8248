//! Sessions, the admin flag, and the sign-in / sign-up form rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is an explicit value (`SessionState`) handed to pages and to
//! the store constructors; nothing here reads global state. The admin flag
//! is derived from a `user_roles` row rather than trusted from the client.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::query::{Select, Table};
use crate::store::{StoreError, TableStore};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const ADMIN_ROLE: &str = "admin";

/// Identity reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// An authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: AuthUser,
    pub access_token: String,
    /// Re-derived from `user_roles` whenever a session is established.
    #[serde(default)]
    pub is_admin: bool,
}

/// Current session as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the stored session has been restored and checked.
    pub loading: bool,
}

impl SessionState {
    /// Initial state before the browser has restored any session.
    #[must_use]
    pub fn restoring() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { session: None, loading: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin)
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }
}

/// Access decision for the admin route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminGate {
    /// Session still loading; render nothing.
    Pending,
    Granted,
    /// Not signed in or not an admin; send home.
    Redirect,
}

#[must_use]
pub fn admin_gate(state: &SessionState) -> AdminGate {
    if state.loading {
        AdminGate::Pending
    } else if state.is_admin() {
        AdminGate::Granted
    } else {
        AdminGate::Redirect
    }
}

#[must_use]
pub fn admin_role_query(user_id: &str) -> Select {
    Select::from_table(Table::UserRoles)
        .columns(&["role"])
        .eq("user_id", user_id)
        .eq("role", ADMIN_ROLE)
}

/// Whether `user_id` holds the admin role.
///
/// # Errors
///
/// Propagates store errors; callers treat them as "not admin".
pub async fn resolve_admin<S: TableStore + ?Sized>(store: &S, user_id: &str) -> Result<bool, StoreError> {
    Ok(!store.select(&admin_role_query(user_id)).await?.is_empty())
}

/// Error reported by an [`AuthProvider`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Provider rejected the request; carries its message unchanged.
    #[error("{0}")]
    Provider(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("authentication service unavailable")]
    Unavailable,
}

/// Hosted authentication service.
#[async_trait(?Send)]
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new account. Success means a confirmation email is pending;
    /// no session is issued.
    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<(), AuthError>;

    /// Terminate `session` with the provider. Failures are ignored.
    async fn sign_out(&self, session: &Session);
}

/// Which half of the shared auth form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back",
            Self::SignUp => "Create Account",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in to access test series",
            Self::SignUp => "Sign up to get started",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    /// Prompt and link text for switching to the other mode.
    #[must_use]
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::SignIn => ("Don't have an account?", "Sign Up"),
            Self::SignUp => ("Already have an account?", "Sign In"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Enter your email")]
    MissingEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Enter your full name")]
    MissingDisplayName,
}

/// Validated auth form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String, display_name: String },
}

/// Shared sign-in / sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl AuthForm {
    /// # Errors
    ///
    /// The first failing field check; the display name is only checked in
    /// sign-up mode.
    pub fn validate(&self) -> Result<Credentials, AuthFormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AuthFormError::MissingEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthFormError::PasswordTooShort);
        }
        match self.mode {
            AuthMode::SignIn => Ok(Credentials::SignIn { email: email.to_owned(), password: self.password.clone() }),
            AuthMode::SignUp => {
                let display_name = self.display_name.trim();
                if display_name.is_empty() {
                    return Err(AuthFormError::MissingDisplayName);
                }
                Ok(Credentials::SignUp {
                    email: email.to_owned(),
                    password: self.password.clone(),
                    display_name: display_name.to_owned(),
                })
            }
        }
    }
}

/// Result of a successful auth form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Navigate home with this session.
    SignedIn(Session),
    /// Account created; stay on the form until the email is confirmed.
    ConfirmationPending,
}

impl AuthOutcome {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::SignedIn(_) => "Logged in successfully!",
            Self::ConfirmationPending => "Check your email to confirm your account!",
        }
    }
}

/// Send validated credentials to `provider`.
///
/// # Errors
///
/// The provider's error, unchanged.
pub async fn submit<P: AuthProvider + ?Sized>(provider: &P, credentials: &Credentials) -> Result<AuthOutcome, AuthError> {
    match credentials {
        Credentials::SignIn { email, password } => provider.sign_in(email, password).await.map(AuthOutcome::SignedIn),
        Credentials::SignUp { email, password, display_name } => provider
            .sign_up(email, password, display_name)
            .await
            .map(|()| AuthOutcome::ConfirmationPending),
    }
}
