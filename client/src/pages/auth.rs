//! Sign-in / sign-up page sharing one form.

use catalog::CourseIcon;
use catalog::auth::{AuthForm, AuthMode, MIN_PASSWORD_LEN, SessionState};
use catalog::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::icon::CourseIconSvg;
use crate::state::notice::{NoticeState, notify_error};

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(AuthForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match form.get_untracked().validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                notify_error(notices, e.to_string());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match catalog::auth::submit(&crate::net::auth::AuthClient, &credentials).await {
                    Ok(outcome) => {
                        crate::state::notice::notify_success(notices, outcome.message());
                        if let catalog::auth::AuthOutcome::SignedIn(new_session) = outcome {
                            crate::state::session::establish(session, new_session).await;
                            navigate(routes::HOME, leptos_router::NavigateOptions::default());
                        } else {
                            busy.set(false);
                        }
                    }
                    Err(e) => {
                        notify_error(notices, e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, session, &navigate);
    };

    let mode = move || form.with(|f| f.mode);
    let submit_label = move || if busy.get() { "Please wait..." } else { mode().submit_label() };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <header class="auth-card__header">
                    <span class="auth-card__logo">
                        <CourseIconSvg icon=CourseIcon::BookOpen/>
                    </span>
                    <h1 class="auth-card__title">{move || mode().title()}</h1>
                    <p class="auth-card__subtitle">{move || mode().subtitle()}</p>
                </header>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode() == AuthMode::SignUp>
                        <label class="field">
                            <span class="field__label">"Full Name"</span>
                            <input
                                class="field__input"
                                type="text"
                                required
                                prop:value=move || form.with(|f| f.display_name.clone())
                                on:input=move |ev| form.update(|f| f.display_name = event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            required
                            minlength=MIN_PASSWORD_LEN.to_string()
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </form>
                <p class="auth-card__switch">
                    {move || mode().switch_prompt().0}
                    " "
                    <button
                        class="link-button"
                        type="button"
                        on:click=move |_| form.update(|f| f.mode = f.mode.toggled())
                    >
                        {move || mode().switch_prompt().1}
                    </button>
                </p>
                <a class="auth-card__back" href=routes::HOME>"← Back to Home"</a>
            </div>
        </div>
    }
}
