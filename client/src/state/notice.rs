//! Toast notifications.
//!
//! DESIGN
//! ======
//! A plain queue model plus two helpers that push onto the context signal.
//! In the browser each toast removes itself after `DISMISS_AFTER_MS`.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

pub const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into() });
        id
    }

    /// Remove toast `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

pub fn notify_success(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    notify(notices, NoticeKind::Success, text.into());
}

pub fn notify_error(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    notify(notices, NoticeKind::Error, text.into());
}

fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, text: String) {
    #[cfg(feature = "hydrate")]
    match kind {
        NoticeKind::Success => log::info!("{text}"),
        NoticeKind::Error => log::warn!("{text}"),
    }
    let mut id = 0;
    notices.update(|state| id = state.push(kind, text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
        notices.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
