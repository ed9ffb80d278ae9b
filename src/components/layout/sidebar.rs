//! Role-specific side navigation. Links come from [`nav_links`]; the footer
//! shows the build version.

use crate::{
    app_lib::build_info,
    features::auth::state::use_auth,
    routes::nav::{NavLink, is_active, nav_links},
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());
    let links = move || {
        auth.role
            .get()
            .map(|role| nav_links(role).to_vec())
            .unwrap_or_default()
    };

    view! {
        <aside
            id="sidebar"
            class="w-64 flex-shrink-0 flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto md:flex"
            class:hidden=move || !menu_open.get()
            class:flex=move || menu_open.get()
        >
            <nav class="flex-1 px-4 py-6 space-y-1">
                <For
                    each=links
                    key=|link| link.path
                    children=move |link| {
                        view! {
                            <SidebarLink
                                link=link
                                active=Signal::derive(move || is_active(&link, &pathname.get()))
                                on_select=move || set_menu_open.set(false)
                            />
                        }
                    }
                />
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {build_info::version_label()}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(link: NavLink, active: Signal<bool>, on_select: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    view! {
        <A
            href=link.path
            {..}
            class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active.get()
            class:bg-blue-50=move || active.get()
            class:dark:bg-blue-900=move || active.get()
            class:dark:text-blue-400=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
            on:click=move |_| on_select()
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-blue-600=move || active.get()
                class:text-gray-400=move || !active.get()
            >
                {link.icon}
            </span>
            {link.label}
        </A>
    }
}
