//! Browser session lifecycle: restore, establish, sign out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in a `RwSignal<SessionState>` context and is mirrored to
//! `localStorage` so a reload keeps the user signed in. The admin flag is
//! never trusted from storage; it is re-derived from `user_roles` each time a
//! session is restored or established.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use catalog::auth::{Session, SessionState, resolve_admin};
use catalog::store::{StoreError, TableStore};
use leptos::prelude::*;

pub const STORAGE_KEY: &str = "exam-portal.session";

/// Attach the admin flag to a freshly signed-in session.
///
/// A failed role lookup leaves the user signed in without admin access.
pub async fn with_admin_flag<S: TableStore + ?Sized>(store: &S, mut session: Session) -> Session {
    session.is_admin = match resolve_admin(store, &session.user.id).await {
        Ok(is_admin) => is_admin,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("admin role lookup failed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            false
        }
    };
    session
}

/// State for a session read back from storage.
///
/// A backend rejection (typically an expired token) discards the stored
/// session; transport failures keep it without admin access.
pub async fn restored_state<S: TableStore + ?Sized>(store: &S, mut session: Session) -> SessionState {
    match resolve_admin(store, &session.user.id).await {
        Ok(is_admin) => {
            session.is_admin = is_admin;
            SessionState::signed_in(session)
        }
        Err(StoreError::Service(message)) => {
            #[cfg(feature = "hydrate")]
            log::warn!("stored session rejected: {message}");
            #[cfg(not(feature = "hydrate"))]
            let _ = message;
            SessionState::signed_out()
        }
        Err(_) => {
            session.is_admin = false;
            SessionState::signed_in(session)
        }
    }
}

/// Restore the persisted session into `state`, then clear `loading`.
///
/// On the server this is a no-op so SSR renders the loading state.
pub fn restore(state: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(stored) = crate::util::storage::load_json::<Session>(STORAGE_KEY) else {
            state.set(SessionState::signed_out());
            return;
        };
        let store = crate::net::rest::RestStore::for_session(&SessionState::signed_in(stored.clone()));
        let restored = restored_state(&store, stored).await;
        persist(&restored);
        state.set(restored);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

/// Install a newly signed-in session.
pub async fn establish(state: RwSignal<SessionState>, session: Session) {
    let store = crate::net::rest::RestStore::for_session(&SessionState::signed_in(session.clone()));
    let session = with_admin_flag(&store, session).await;
    let next = SessionState::signed_in(session);
    persist(&next);
    state.set(next);
}

/// End the session with the provider and forget it locally.
pub async fn sign_out(state: RwSignal<SessionState>) {
    let current = state.get_untracked().session;
    state.set(SessionState::signed_out());
    crate::util::storage::remove(STORAGE_KEY);
    if let Some(session) = current {
        use catalog::auth::AuthProvider as _;
        crate::net::auth::AuthClient.sign_out(&session).await;
    }
}

fn persist(state: &SessionState) {
    match &state.session {
        Some(session) => crate::util::storage::save_json(STORAGE_KEY, session),
        None => crate::util::storage::remove(STORAGE_KEY),
    }
}
