//! Root application component with routing and context providers.

use catalog::auth::SessionState;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toasts::Toasts;
use crate::pages::{
    admin::AdminPage, auth::AuthPage, home::HomePage, syllabus::SyllabusPage, test_series::TestSeriesPage,
};
use crate::state::notice::NoticeState;
use crate::state::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notification contexts, restores any stored
/// session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_state = RwSignal::new(SessionState::restoring());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session_state);
    provide_context(notices);

    session::restore(session_state);

    view! {
        <Stylesheet id="leptos" href="/pkg/exam-portal.css"/>
        <Title text="ExamPortal"/>

        <Router>
            <Toasts/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route
                    path=(StaticSegment("course"), ParamSegment("courseId"), StaticSegment("test-series"))
                    view=TestSeriesPage
                />
                <Route
                    path=(StaticSegment("course"), ParamSegment("courseId"), StaticSegment("syllabus"))
                    view=SyllabusPage
                />
            </Routes>
        </Router>
    }
}
