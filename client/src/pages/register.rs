//! Registration page: creates an account but does not sign in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::LOGIN_PATH;
use crate::net::api::{AuthApi, HttpApi};
use crate::net::types::RegistrationRequest;
use crate::state::form::{InFlight, SubmitOutcome};
use crate::state::notice::NoticeContext;

pub(crate) const REGISTER_FAILED: &str = "Registration failed. Please check your details.";

/// Raw field values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Require every field. Username and email are trimmed; the password is not.
pub(crate) fn validate_register_input(fields: &RegisterFields) -> Result<RegistrationRequest, &'static str> {
    let username = fields.username.trim();
    let email = fields.email.trim();
    if username.is_empty() {
        return Err("Please input your username!");
    }
    if email.is_empty() {
        return Err("Please input your email!");
    }
    if fields.password.trim().is_empty() {
        return Err("Please input your password!");
    }
    Ok(RegistrationRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: fields.password.clone(),
    })
}

/// Run one registration attempt.
///
/// Success shows the backend's message as a success notice. The session is
/// never touched and no navigation happens either way.
pub(crate) async fn submit_register<A>(
    api: &A,
    notices: NoticeContext,
    in_flight: InFlight,
    fields: &RegisterFields,
) -> SubmitOutcome
where
    A: AuthApi,
{
    let Some(_flight) = in_flight.try_begin() else {
        return SubmitOutcome::Busy;
    };
    let request = match validate_register_input(fields) {
        Ok(request) => request,
        Err(message) => {
            notices.error(message);
            return SubmitOutcome::Invalid;
        }
    };

    match api.register(&request).await {
        Ok(response) => {
            log::info!("registered {}", request.username);
            notices.success(response.message);
            SubmitOutcome::Succeeded
        }
        Err(e) => {
            log::warn!("registration failed: {e}");
            notices.error(REGISTER_FAILED);
            SubmitOutcome::Failed
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notices = expect_context::<NoticeContext>();
    let api = expect_context::<HttpApi>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let in_flight = InFlight::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        let fields = RegisterFields {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            submit_register(&api, notices, in_flight, &fields).await;
        });
    };

    view! {
        <div class="register-page">
            <div class="login-card">
                <h2 class="login-card__title">"Register"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || in_flight.is_active()>
                        "Register"
                    </button>
                </form>
                <p class="login-card__footer">
                    <A href=LOGIN_PATH>"Back to login"</A>
                </p>
            </div>
        </div>
    }
}
