//! Top navigation bar.
//!
//! Purely a view of the session context: sign-in link when anonymous, admin
//! link for admins, and a sign-out action for any signed-in user.

use catalog::CourseIcon;
use catalog::auth::SessionState;
use catalog::nav::{NavItem, nav_items};
use catalog::routes;
use leptos::prelude::*;

use crate::components::icon::CourseIconSvg;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::session::sign_out(session));
    };

    let items = move || {
        let state = session.get();
        if state.loading {
            return Vec::new();
        }
        nav_items(state.session.as_ref())
            .into_iter()
            .map(|item| match item.href() {
                Some(href) => {
                    let class = if item == NavItem::SignIn { "btn btn--primary" } else { "btn btn--outline" };
                    view! { <a class=class href=href>{item.label()}</a> }.into_any()
                }
                None => view! {
                    <button class="btn btn--ghost" on:click=on_sign_out>{item.label()}</button>
                }
                .into_any(),
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=routes::HOME>
                <span class="navbar__logo">
                    <CourseIconSvg icon=CourseIcon::BookOpen/>
                </span>
                <span class="navbar__name">"ExamPortal"</span>
            </a>
            <div class="navbar__actions">{items}</div>
        </nav>
    }
}
