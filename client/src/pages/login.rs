//! Login page: username + password against the backend, then `/home`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{HOME_PATH, REGISTER_PATH};
use crate::net::api::{AuthApi, HttpApi};
use crate::net::types::Credentials;
use crate::state::form::{InFlight, SubmitOutcome};
use crate::state::notice::NoticeContext;
use crate::state::session::SessionContext;

pub(crate) const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Trim the username and require both fields. The password is sent as typed.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Please input your username!");
    }
    if password.trim().is_empty() {
        return Err("Please input your password!");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Run one login attempt.
///
/// On success the token is stored and `navigate` is called exactly once with
/// [`HOME_PATH`]. On any failure the session is untouched, an error notice is
/// shown, and `navigate` is not called.
pub(crate) async fn submit_login<A, N>(
    api: &A,
    session: SessionContext,
    notices: NoticeContext,
    in_flight: InFlight,
    username: &str,
    password: &str,
    navigate: N,
) -> SubmitOutcome
where
    A: AuthApi,
    N: FnOnce(&str),
{
    let Some(_flight) = in_flight.try_begin() else {
        return SubmitOutcome::Busy;
    };
    let credentials = match validate_login_input(username, password) {
        Ok(credentials) => credentials,
        Err(message) => {
            notices.error(message);
            return SubmitOutcome::Invalid;
        }
    };

    match api.login(&credentials).await {
        Ok(response) => {
            log::info!("login succeeded for {}", credentials.username);
            session.set_token(response.access);
            navigate(HOME_PATH);
            SubmitOutcome::Succeeded
        }
        Err(e) => {
            if e.is_rejection() {
                log::info!("login rejected: {e}");
            } else {
                log::warn!("login request failed: {e}");
            }
            notices.error(LOGIN_FAILED);
            SubmitOutcome::Failed
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<NoticeContext>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let in_flight = InFlight::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        let navigate = navigate.clone();
        let username_value = username.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            submit_login(&api, session, notices, in_flight, &username_value, &password_value, |to| {
                navigate(to, NavigateOptions::default());
            })
            .await;
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Enter your username"
                        autocomplete="off"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        autocomplete="off"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || in_flight.is_active()>
                        "Login"
                    </button>
                </form>
                <p class="login-card__footer">
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
            </div>
        </div>
    }
}
