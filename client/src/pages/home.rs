//! Home page: shows the backend's protected greeting for the current token.
//!
//! Guarded: an `Anonymous` session is redirected to the login page, which is
//! also how logout leaves this page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::HOME_PATH;
use crate::net::api::{AuthApi, HttpApi};
use crate::state::notice::NoticeContext;
use crate::state::session::SessionContext;
use crate::util::auth::install_route_guard;

pub(crate) const HOME_FAILED: &str = "Failed to fetch data";

/// How a home load ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HomeLoad {
    /// No token, so no request was made.
    Skipped,
    Loaded,
    Failed,
    /// The token changed before the response arrived; result discarded.
    Stale,
}

/// Token to fetch with on this effect run, given the token seen on the
/// previous run (`None` on mount). Unchanged or absent tokens fetch nothing.
pub(crate) fn token_to_fetch<'a>(previous: Option<&Option<String>>, current: &'a Option<String>) -> Option<&'a str> {
    if previous == Some(current) {
        return None;
    }
    current.as_deref()
}

/// Fetch the protected resource once and publish its message.
///
/// The result is dropped if the session no longer holds `token` when the
/// response arrives (token replaced or logged out meanwhile).
pub(crate) async fn load_home<A>(
    api: &A,
    session: SessionContext,
    token: Option<&str>,
    message: RwSignal<String>,
    notices: NoticeContext,
) -> HomeLoad
where
    A: AuthApi,
{
    let Some(token) = token else {
        return HomeLoad::Skipped;
    };
    let result = api.fetch_home(token).await;
    if session.token_untracked().as_deref() != Some(token) {
        log::debug!("dropping home response for a superseded token");
        return HomeLoad::Stale;
    }
    match result {
        Ok(response) => {
            // The page may have been left while the request was out.
            let _ = message.try_set(response.message);
            HomeLoad::Loaded
        }
        Err(e) => {
            log::warn!("home fetch failed: {e}");
            notices.error(HOME_FAILED);
            HomeLoad::Failed
        }
    }
}

/// Fetch on mount and again only when the token value changes.
pub(crate) fn install_home_loader<A>(api: A, session: SessionContext, message: RwSignal<String>, notices: NoticeContext)
where
    A: AuthApi + Clone + 'static,
{
    Effect::new(move |previous: Option<Option<String>>| {
        let current = session.token();
        if let Some(token) = token_to_fetch(previous.as_ref(), &current) {
            let api = api.clone();
            let token = token.to_owned();
            leptos::task::spawn_local(async move {
                load_home(&api, session, Some(&token), message, notices).await;
            });
        }
        current
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<NoticeContext>();
    let api = expect_context::<HttpApi>();

    install_route_guard(HOME_PATH, session, use_navigate());

    let message = RwSignal::new(String::new());
    install_home_loader(api, session, message, notices);

    let on_logout = move |_| session.clear_token();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h2>"Home Page"</h2>
                <Show when=move || session.is_authenticated()>
                    <button class="btn" on:click=on_logout>"Log out"</button>
                </Show>
            </header>
            <p class="home-page__message">{move || message.get()}</p>
        </div>
    }
}
