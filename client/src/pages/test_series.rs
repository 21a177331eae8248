//! Public test series listing for one course.

use catalog::TestSeries;
use catalog::auth::SessionState;
use catalog::listing::TestSeriesListing;
use catalog::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::Navbar;
use crate::state::notice::NoticeState;
use crate::util::epoch::RequestEpoch;

#[component]
pub fn TestSeriesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let course_id = Memo::new(move |_| params.read().get(routes::COURSE_ID_PARAM).unwrap_or_default());
    let listing = RwSignal::new(TestSeriesListing::default());
    let loading = RwSignal::new(true);

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
        loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let epoch = epoch.clone();
            let store = crate::net::rest::RestStore::for_session(&session.get_untracked());
            leptos::task::spawn_local(async move {
                let result = catalog::listing::load_test_series(&store, &id).await;
                if !epoch.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(loaded) => listing.set(loaded),
                    Err(e) => {
                        listing.set(TestSeriesListing::default());
                        crate::state::notice::notify_error(notices, e.to_string());
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, notices);
    });

    let title = move || {
        listing
            .with(|l| l.course.as_ref().map(|c| c.title.clone()))
            .unwrap_or_else(|| "Loading...".to_owned())
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="page__content">
                <a class="btn btn--ghost back-link" href=routes::HOME>"← Back to Courses"</a>
                <h1 class="page__title">{title}</h1>
                <p class="page__subtitle">"Available Test Series"</p>
                <Show when=move || !loading.get() fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }>
                    <Show
                        when=move || !listing.with(|l| l.series.is_empty())
                        fallback=|| {
                            view! {
                                <div class="card empty-state">
                                    <p>"No test series available for this course yet."</p>
                                </div>
                            }
                        }
                    >
                        <div class="series-grid">
                            <For
                                each=move || listing.get().series
                                key=|series| series.id.clone()
                                children=|series| view! { <SeriesCard series=series/> }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn SeriesCard(series: TestSeries) -> impl IntoView {
    let duration = series.duration_label();
    let questions = series.questions_label();
    view! {
        <article class="card series-card">
            <header class="series-card__header">
                <h3 class="series-card__title">{series.title}</h3>
                <span class="badge">"Active"</span>
            </header>
            {series.description.map(|text| view! { <p class="series-card__description">{text}</p> })}
            <div class="series-card__meta">
                <span class="series-card__duration">{duration}</span>
                <span class="series-card__questions">{questions}</span>
            </div>
        </article>
    }
}
