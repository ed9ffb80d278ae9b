use crate::{
    app_lib::theme::Tone,
    components::StatusBadge,
    features::auth::state::use_auth,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

/// Top bar: brand, the signed-in user and the sign-out button.
#[component]
pub fn Navbar(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let home = move || {
        auth.role
            .get()
            .map_or(paths::HOME, |role| role.dashboard_path())
            .to_string()
    };

    let on_logout = move |_| {
        tracing::info!("signing out");
        auth.clear_session();
        set_menu_open.set(false);
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <header class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-800">
            <div class="flex flex-wrap items-center justify-between px-4 py-3">
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="sidebar"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <A href=home {..} class="flex items-center gap-2">
                        <span class="material-symbols-outlined text-3xl text-blue-600">"apartment"</span>
                        <span class="text-xl font-semibold whitespace-nowrap dark:text-white">
                            "HallSync"
                        </span>
                    </A>
                </div>
                <div class="flex items-center gap-4">
                    {move || {
                        auth.session
                            .get()
                            .map(|user| {
                                view! {
                                    <div class="hidden sm:flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                                        <span class="material-symbols-outlined text-xl text-gray-400">"account_circle"</span>
                                        <span class="font-medium">{user.name}</span>
                                        <StatusBadge tone=Tone::Blue label=user.role.label() />
                                    </div>
                                }
                            })
                    }}
                    <button
                        type="button"
                        class="inline-flex items-center gap-1 px-3 py-2 text-sm font-medium text-gray-700 rounded-lg hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800"
                        on:click=on_logout
                    >
                        <span class="material-symbols-outlined text-xl">"logout"</span>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
