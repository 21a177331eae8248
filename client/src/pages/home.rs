//! Home page: hero banner and the course grid.

use catalog::Course;
use catalog::auth::SessionState;
use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::navbar::Navbar;
use crate::state::notice::NoticeState;
use crate::util::epoch::RequestEpoch;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(true);

    let epoch = RequestEpoch::default();
    let epoch_cleanup = epoch.clone();
    on_cleanup(move || epoch_cleanup.close());

    // One read per mount, once the stored session has been restored.
    let ready = Memo::new(move |_| !session.get().loading);
    Effect::new(move || {
        if !ready.get() {
            return;
        }
        let ticket = epoch.begin();
        #[cfg(feature = "hydrate")]
        {
            let epoch = epoch.clone();
            let store = crate::net::rest::RestStore::for_session(&session.get_untracked());
            leptos::task::spawn_local(async move {
                let result = catalog::listing::load_courses(&store).await;
                if !epoch.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(items) => courses.set(items),
                    Err(e) => crate::state::notice::notify_error(notices, e.to_string()),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, notices);
    });

    view! {
        <div class="page">
            <Navbar/>
            <section class="hero">
                <h1 class="hero__title">"Our Test Series"</h1>
                <p class="hero__subtitle">"Select a course"</p>
            </section>
            <section class="page__content">
                <Show when=move || !loading.get() fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }>
                    <Show
                        when=move || !courses.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-state">"No courses available yet."</p> }
                    >
                        <div class="course-grid">
                            <For
                                each=move || courses.get()
                                key=|course| course.id.clone()
                                children=|course| view! { <CourseCard course=course/> }
                            />
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
