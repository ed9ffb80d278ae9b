use crate::{
    app_lib::theme::{Theme, Tone},
    components::{PageHeader, StatCard, use_toasts},
    features::admin::{client, types::AdminStats},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

const QUICK_ACTION: &str = "inline-flex items-center justify-center gap-2 px-5 py-3 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition-colors";

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let toasts = use_toasts();
    let stats = LocalResource::new(move || async move {
        client::stats()
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch dashboard stats"))
            .ok()
    });
    let count = move |pick: fn(&AdminStats) -> u32| {
        Signal::derive(move || stats.get().flatten().map(|stats| pick(&stats) as usize))
    };

    view! {
        <div>
            <PageHeader title="Admin Dashboard" subtitle="Faculty-wide overview of accounts and bookings." />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                <StatCard title="Total Lecturers" icon="groups" tone=Tone::Blue value=count(|stats| stats.total_lecturers) />
                <StatCard title="Total Representatives" icon="how_to_reg" tone=Tone::Green value=count(|stats| stats.total_reps) />
                <StatCard title="Pending Approvals" icon="pending_actions" tone=Tone::Yellow value=count(|stats| stats.pending_reps) />
                <StatCard title="Active Bookings" icon="book" tone=Tone::Red value=count(|stats| stats.total_bookings) />
            </div>
            <div class=Theme::CARD>
                <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Quick Actions"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <A href=paths::ADMIN_USERS {..} class=QUICK_ACTION>
                        <span class="material-symbols-outlined">"person_add"</span>
                        "Add Lecturer"
                    </A>
                    <A href=paths::ADMIN_TIMETABLE {..} class=QUICK_ACTION>
                        <span class="material-symbols-outlined">"calendar_month"</span>
                        "Manage Timetables"
                    </A>
                    <A href=paths::ADMIN_BOOKINGS {..} class=QUICK_ACTION>
                        <span class="material-symbols-outlined">"book"</span>
                        "View All Bookings"
                    </A>
                </div>
            </div>
        </div>
    }
}
