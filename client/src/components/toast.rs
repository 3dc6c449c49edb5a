//! Toast stack for transient success/error notices.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeContext, NoticeKind};

/// Renders every visible notice, newest last.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notices = expect_context::<NoticeContext>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || notices.items()
                key=|notice: &Notice| notice.id
                children=move |notice: Notice| view! { <Toast notice=notice notices=notices/> }
            />
        </div>
    }
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--error",
    }
}

/// A single notice. Dismisses itself after the notice TTL, or on click.
#[component]
fn Toast(notice: Notice, notices: NoticeContext) -> impl IntoView {
    let id = notice.id;

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(crate::state::notice::NOTICE_TTL_MS, move || notices.dismiss(id)).forget();
    }

    view! {
        <div class=toast_class(notice.kind) role="status" on:click=move |_| notices.dismiss(id)>
            {notice.text}
        </div>
    }
}
