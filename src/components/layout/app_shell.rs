//! Page chrome. Signed-in users get the navbar and their role's sidebar;
//! everyone else gets bare content. Navigation is client-side only; the API
//! enforces access control.

use super::{Navbar, Sidebar};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

/// Wraps every route with the chrome matching the current session.
#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let (menu_open, set_menu_open) = signal(false);

    move || {
        if auth.is_authenticated.get() {
            view! {
                <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
                    <Navbar menu_open=menu_open set_menu_open=set_menu_open />
                    <div class="flex flex-1 overflow-hidden">
                        <Sidebar menu_open=menu_open set_menu_open=set_menu_open />
                        <main class="flex-1 overflow-y-auto">
                            <div class="container mx-auto p-4 md:p-8">
                                {children()}
                            </div>
                        </main>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <main class="min-h-screen bg-gray-50 dark:bg-gray-900">
                    {children()}
                </main>
            }
            .into_any()
        }
    }
}
