//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastStack;
use crate::net::api::HttpApi;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::{notice::NoticeContext, session::SessionContext};

pub const LOGIN_PATH: &str = "/";
pub const HOME_PATH: &str = "/home";
pub const REGISTER_PATH: &str = "/register";

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
/// Creates the tab's session, notice list, and backend client and provides
/// them to every page. `/home` guards itself; see [`crate::util::auth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionContext::new());
    provide_context(NoticeContext::new());
    provide_context(HttpApi::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/authdesk.css"/>
        <Title text="Authdesk"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
