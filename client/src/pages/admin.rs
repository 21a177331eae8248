//! Admin panel: create and delete courses and test series.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated on the session's admin flag: renders nothing while the session is
//! restoring and replaces the route with `/` for anyone else. Every mutation
//! goes through `catalog::admin`, which validates locally, writes, and then
//! re-reads both tables; the returned snapshot replaces the page's lists.
//! The epoch ticket is taken as each re-read is issued, so the most recently
//! issued read is the one that lands, whichever write finishes first.

use catalog::admin::{AdminSnapshot, CourseForm, FormPhase, Mutation, Refreshed, TestSeriesForm};
use catalog::auth::{AdminGate, SessionState, admin_gate};
use catalog::routes;
use catalog::{CourseIcon, StoreError, TestSeries};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::icon::CourseIconSvg;
use crate::components::navbar::Navbar;
use crate::state::notice::NoticeState;
use crate::util::epoch::RequestEpoch;

/// Signals shared by the admin page and its two panels.
#[derive(Clone)]
struct AdminCtx {
    session: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
    snapshot: RwSignal<AdminSnapshot>,
    selected_course: RwSignal<Option<String>>,
    epoch: RequestEpoch,
}

impl AdminCtx {
    /// Apply the outcome of a write. The refresh that followed it carries
    /// the ticket taken when its read was issued.
    ///
    /// Returns whether the write succeeded so the caller can clear its form.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn finish<E: std::fmt::Display>(&self, mutation: Mutation, result: Result<Refreshed<u64>, E>) -> bool {
        if !self.epoch.is_live() {
            return false;
        }
        match result {
            Ok(refreshed) => {
                crate::state::notice::notify_success(self.notices, mutation.success_message());
                self.apply(refreshed.ticket, refreshed.snapshot);
                true
            }
            Err(e) => {
                crate::state::notice::notify_error(self.notices, e.to_string());
                false
            }
        }
    }

    /// Write a snapshot read under `ticket` unless a later read was issued.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn apply(&self, ticket: u64, snapshot: Result<AdminSnapshot, StoreError>) {
        if !self.epoch.is_current(ticket) {
            return;
        }
        match snapshot {
            Ok(snapshot) => {
                let kept = snapshot.retained_selection(self.selected_course.get_untracked().as_deref());
                self.selected_course.set(kept);
                self.snapshot.set(snapshot);
            }
            Err(e) => crate::state::notice::notify_error(self.notices, e.to_string()),
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let ctx = AdminCtx {
        session,
        notices,
        snapshot: RwSignal::new(AdminSnapshot::default()),
        selected_course: RwSignal::new(None),
        epoch: RequestEpoch::default(),
    };
    let epoch_cleanup = ctx.epoch.clone();
    on_cleanup(move || epoch_cleanup.close());

    let gate = Memo::new(move |_| admin_gate(&session.get()));
    let fetched = RwSignal::new(false);
    let fetch_ctx = ctx.clone();
    Effect::new(move || match gate.get() {
        AdminGate::Pending => {}
        AdminGate::Redirect => navigate(routes::HOME, NavigateOptions { replace: true, ..NavigateOptions::default() }),
        AdminGate::Granted => {
            if fetched.get_untracked() {
                return;
            }
            fetched.set(true);
            let ticket = fetch_ctx.epoch.begin();
            #[cfg(feature = "hydrate")]
            {
                let ctx = fetch_ctx.clone();
                let store = crate::net::rest::RestStore::for_session(&session.get_untracked());
                leptos::task::spawn_local(async move {
                    let result = catalog::admin::fetch_snapshot(&store).await;
                    ctx.apply(ticket, result);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = ticket;
        }
    });

    view! {
        <Show when=move || gate.get() == AdminGate::Granted>
            <div class="page">
                <Navbar/>
                <div class="page__content">
                    <h1 class="page__title">"Admin Panel"</h1>
                    <div class="admin-grid">
                        <CoursePanel ctx=ctx.clone()/>
                        <SeriesPanel ctx=ctx.clone()/>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CoursePanel(ctx: AdminCtx) -> impl IntoView {
    let form = RwSignal::new(CourseForm::default());
    let phase = RwSignal::new(FormPhase::Idle);
    let snapshot = ctx.snapshot;

    let add_ctx = ctx.clone();
    let on_add = move |_| {
        if phase.get_untracked() == FormPhase::Submitting {
            return;
        }
        phase.set(FormPhase::Submitting);
        #[cfg(feature = "hydrate")]
        {
            let ctx = add_ctx.clone();
            let fields = form.get_untracked();
            let store = crate::net::rest::RestStore::for_session(&ctx.session.get_untracked());
            leptos::task::spawn_local(async move {
                let result = catalog::admin::add_course(&store, &fields, || ctx.epoch.begin()).await;
                if ctx.finish(Mutation::AddCourse, result) {
                    form.update(CourseForm::clear);
                }
                phase.try_set(FormPhase::Idle);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &add_ctx;
    };

    let delete_ctx = ctx.clone();
    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let ctx = delete_ctx.clone();
            let store = crate::net::rest::RestStore::for_session(&ctx.session.get_untracked());
            leptos::task::spawn_local(async move {
                let result = catalog::admin::delete_course(&store, &id, || ctx.epoch.begin()).await;
                ctx.finish(Mutation::DeleteCourse, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&delete_ctx, id);
    });

    view! {
        <section class="card admin-panel">
            <h2 class="admin-panel__title">
                <CourseIconSvg icon=CourseIcon::BookOpen/>
                "Manage Courses"
            </h2>
            <div class="admin-form">
                <label class="field">
                    <span class="field__label">"Title"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g. CA Final"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="field__input"
                        placeholder="Optional description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    <span class="field__label">"Icon"</span>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.icon.name())
                        on:change=move |ev| {
                            let name = event_target_value(&ev);
                            form.update(|f| f.icon = CourseIcon::from_name(Some(&name)));
                        }
                    >
                        {CourseIcon::ALL
                            .iter()
                            .map(|icon| view! { <option value=icon.name()>{icon.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button
                    class="btn btn--primary btn--block"
                    disabled=move || phase.get() == FormPhase::Submitting
                    on:click=on_add
                >
                    "+ Add Course"
                </button>
            </div>
            <div class="admin-list">
                <h4 class="admin-list__title">"Existing Courses"</h4>
                <For
                    each=move || snapshot.get().courses
                    key=|course| course.id.clone()
                    children=move |course| {
                        let id = course.id.clone();
                        view! {
                            <div class="admin-row">
                                <span class="admin-row__title">{course.title}</span>
                                <DeleteButton on_click=on_delete id=id/>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn SeriesPanel(ctx: AdminCtx) -> impl IntoView {
    let form = RwSignal::new(TestSeriesForm::default());
    let phase = RwSignal::new(FormPhase::Idle);
    let snapshot = ctx.snapshot;
    let selected_course = ctx.selected_course;

    let add_ctx = ctx.clone();
    let on_add = move |_| {
        if phase.get_untracked() == FormPhase::Submitting {
            return;
        }
        phase.set(FormPhase::Submitting);
        #[cfg(feature = "hydrate")]
        {
            let ctx = add_ctx.clone();
            let fields = form.get_untracked();
            let selected = selected_course.get_untracked();
            let store = crate::net::rest::RestStore::for_session(&ctx.session.get_untracked());
            leptos::task::spawn_local(async move {
                let result =
                    catalog::admin::add_test_series(&store, &fields, selected.as_deref(), || ctx.epoch.begin()).await;
                if ctx.finish(Mutation::AddTestSeries, result) {
                    form.update(TestSeriesForm::clear);
                }
                phase.try_set(FormPhase::Idle);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &add_ctx;
    };

    let delete_ctx = ctx.clone();
    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let ctx = delete_ctx.clone();
            let store = crate::net::rest::RestStore::for_session(&ctx.session.get_untracked());
            leptos::task::spawn_local(async move {
                let result = catalog::admin::delete_test_series(&store, &id, || ctx.epoch.begin()).await;
                ctx.finish(Mutation::DeleteTestSeries, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&delete_ctx, id);
    });

    let visible = move || {
        let selected = selected_course.get();
        snapshot.with(|s| s.series_for(selected.as_deref()).into_iter().cloned().collect::<Vec<TestSeries>>())
    };

    view! {
        <section class="card admin-panel">
            <h2 class="admin-panel__title">"Manage Test Series"</h2>
            <div class="admin-form">
                <label class="field">
                    <span class="field__label">"Course"</span>
                    <select
                        class="field__input"
                        prop:value=move || selected_course.get().unwrap_or_default()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            selected_course.set(if value.is_empty() { None } else { Some(value) });
                        }
                    >
                        <option value="">"Select course"</option>
                        <For
                            each=move || snapshot.get().courses
                            key=|course| course.id.clone()
                            children=|course| view! { <option value=course.id>{course.title}</option> }
                        />
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Title"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g. Mock Test 1"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="field__input"
                        placeholder="Optional description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="field-row">
                    <label class="field">
                        <span class="field__label">"Duration (min)"</span>
                        <input
                            class="field__input"
                            type="number"
                            prop:value=move || form.with(|f| f.duration.clone())
                            on:input=move |ev| form.update(|f| f.duration = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Total Questions"</span>
                        <input
                            class="field__input"
                            type="number"
                            prop:value=move || form.with(|f| f.questions.clone())
                            on:input=move |ev| form.update(|f| f.questions = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    <span class="field__label">"Active"</span>
                </label>
                <button
                    class="btn btn--primary btn--block"
                    disabled=move || phase.get() == FormPhase::Submitting
                    on:click=on_add
                >
                    "+ Add Test Series"
                </button>
            </div>
            <div class="admin-list">
                <h4 class="admin-list__title">"Existing Test Series"</h4>
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="empty-state">"No test series yet."</p> }
                >
                    <For
                        each=visible
                        key=|series| series.id.clone()
                        children=move |series| {
                            let id = series.id.clone();
                            let summary = series.admin_summary();
                            let active = series.is_active;
                            view! {
                                <div class="admin-row">
                                    <div>
                                        <span class="admin-row__title">{series.title}</span>
                                        <span class="admin-row__meta">{summary}</span>
                                        <Show when=move || !active>
                                            <span class="badge badge--muted">"Inactive"</span>
                                        </Show>
                                    </div>
                                    <DeleteButton on_click=on_delete id=id/>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </section>
    }
}

#[component]
fn DeleteButton(on_click: Callback<String>, id: String) -> impl IntoView {
    view! {
        <button
            class="btn btn--ghost admin-row__delete"
            title="Delete"
            aria-label="Delete"
            on:click=move |_| on_click.run(id.clone())
        >
            "✕"
        </button>
    }
}
