use crate::{
    components::{AppShell, ToastProvider},
    features::auth::state::AuthProvider,
    routes::AppRoutes,
};
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <AuthProvider>
                <Router>
                    <AppShell>
                        <AppRoutes />
                    </AppShell>
                </Router>
            </AuthProvider>
        </ToastProvider>
    }
}
