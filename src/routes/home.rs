//! Public landing page.

use crate::{features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

const PRIMARY_LINK: &str = "inline-flex items-center px-6 py-3 text-base font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition-all shadow-md";
const SECONDARY_LINK: &str = "inline-flex items-center px-6 py-3 text-base font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-200 dark:border-gray-600";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[70vh] text-center px-4">
            <span class="material-symbols-outlined text-6xl text-blue-600 mb-4">"apartment"</span>
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-3">"HallSync"</h1>
            <p class="text-gray-500 dark:text-gray-400 max-w-lg mb-8">
                "Book lecture halls, manage section timetables and coordinate class requests across the faculty."
            </p>
            {move || match auth.role.get() {
                Some(role) => view! {
                    <A href=role.dashboard_path() {..} class=PRIMARY_LINK>
                        <span class="material-symbols-outlined mr-2">"dashboard"</span>
                        "Go to Dashboard"
                    </A>
                }
                .into_any(),
                None => view! {
                    <div class="flex flex-col sm:flex-row gap-4">
                        <A href=paths::LOGIN {..} class=PRIMARY_LINK>
                            "Sign In"
                        </A>
                        <A href=paths::REGISTER {..} class=SECONDARY_LINK>
                            "Create Account"
                        </A>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
