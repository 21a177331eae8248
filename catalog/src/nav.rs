//! Navigation bar entries derived from the current session.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::auth::Session;
use crate::routes;

/// One entry on the right side of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    SignIn,
    Admin,
    /// Action, not a link.
    SignOut,
}

impl NavItem {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Admin => "Admin",
            Self::SignOut => "Sign Out",
        }
    }

    #[must_use]
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::SignIn => Some(routes::AUTH),
            Self::Admin => Some(routes::ADMIN),
            Self::SignOut => None,
        }
    }
}

#[must_use]
pub fn nav_items(session: Option<&Session>) -> Vec<NavItem> {
    match session {
        None => vec![NavItem::SignIn],
        Some(session) if session.is_admin => vec![NavItem::Admin, NavItem::SignOut],
        Some(_) => vec![NavItem::SignOut],
    }
}
