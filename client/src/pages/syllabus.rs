//! Syllabus page for one course.

use catalog::auth::SessionState;
use catalog::listing::{SYLLABUS_PLACEHOLDER, Syllabus};
use catalog::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::Navbar;
use crate::state::notice::NoticeState;
use crate::util::epoch::RequestEpoch;

#[component]
pub fn SyllabusPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let course_id = Memo::new(move |_| params.read().get(routes::COURSE_ID_PARAM).unwrap_or_default());
    let syllabus = RwSignal::new(None::<Syllabus>);

    let epoch = RequestEpoch::default();
    let epoch_cleanup = epoch.clone();
    on_cleanup(move || epoch_cleanup.close());

    let ready = Memo::new(move |_| !session.get().loading);
    Effect::new(move || {
        let id = course_id.get();
        if !ready.get() || id.is_empty() {
            return;
        }
        let ticket = epoch.begin();
        syllabus.set(None);
        #[cfg(feature = "hydrate")]
        {
            let epoch = epoch.clone();
            let store = crate::net::rest::RestStore::for_session(&session.get_untracked());
            leptos::task::spawn_local(async move {
                let result = catalog::listing::load_syllabus(&store, &id).await;
                if !epoch.is_current(ticket) {
                    return;
                }
                let loaded = result.unwrap_or_else(|e| {
                    crate::state::notice::notify_error(notices, e.to_string());
                    Syllabus { title: None, body: SYLLABUS_PLACEHOLDER.to_owned() }
                });
                syllabus.set(Some(loaded));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, notices);
    });

    let heading = move || {
        let title = syllabus.with(|s| s.as_ref().and_then(|s| s.title.clone())).unwrap_or_default();
        format!("{title} - Syllabus")
    };
    let body = move || {
        syllabus.with(|s| s.as_ref().map_or_else(|| SYLLABUS_PLACEHOLDER.to_owned(), |s| s.body.clone()))
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="page__content">
                <a class="btn btn--ghost back-link" href=routes::HOME>"← Back to Courses"</a>
                <h1 class="page__title">{heading}</h1>
                <div class="card syllabus">
                    <p class="syllabus__body">{body}</p>
                </div>
            </div>
        </div>
    }
}
