//! Fallback for paths outside the route table.

use crate::{
    app_lib::{dialog, theme::Theme},
    features::auth::state::use_auth,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

const PRIMARY_LINK: &str = "inline-flex items-center gap-2 px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let auth = use_auth();
    // Signed-in users go back to their own dashboard.
    let destination = move || match auth.role.get() {
        Some(role) => role.dashboard_path().to_string(),
        None => paths::HOME.to_string(),
    };

    view! {
        <section class="min-h-[60vh] flex items-center justify-center px-4">
            <div class="max-w-md w-full text-center space-y-5">
                <span class="material-symbols-outlined text-6xl text-blue-600">"event_busy"</span>
                <p class="text-6xl font-extrabold text-gray-900 dark:text-white">"404"</p>
                <h1 class=Theme::TITLE>"This page isn't booked"</h1>
                <p class=Theme::SUBTITLE>
                    "We couldn't find what you were looking for. It may have moved, or the link is wrong."
                </p>
                <div class="flex flex-wrap justify-center gap-3">
                    <A href=destination {..} class=PRIMARY_LINK>
                        <span class=Theme::ICON_SMALL>"home"</span>
                        "Go Home"
                    </A>
                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| dialog::history_back()>
                        <span class=Theme::ICON_SMALL>"arrow_back"</span>
                        "Go Back"
                    </button>
                </div>
            </div>
        </section>
    }
}
