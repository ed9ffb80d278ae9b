use crate::{
    app_lib::{dates, theme::{Theme, Tone}},
    components::{PageHeader, StatCard, use_toasts},
    features::{
        bookings::{
            client as bookings_client,
            filters::{LecturerStats, recent},
            types::Booking,
        },
        requests::{client as requests_client, types::pending_count},
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, Default)]
struct DashboardData {
    stats: LecturerStats,
    recent: Vec<Booking>,
}

async fn load() -> Result<DashboardData, crate::app_lib::AppError> {
    let (bookings, requests) =
        futures::try_join!(bookings_client::my_bookings(), requests_client::booking_requests())?;
    Ok(DashboardData {
        stats: LecturerStats::compute(&bookings, pending_count(&requests), dates::today()),
        recent: recent(&bookings).to_vec(),
    })
}

#[component]
pub fn LecturerDashboardPage() -> impl IntoView {
    let toasts = use_toasts();
    let data = LocalResource::new(move || async move {
        load()
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch dashboard data"))
            .ok()
    });
    let count = move |pick: fn(&LecturerStats) -> usize| {
        Signal::derive(move || data.get().flatten().map(|data| pick(&data.stats)))
    };

    view! {
        <div>
            <PageHeader title="Lecturer Dashboard" />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <A href=paths::LECTURER_BOOKINGS>
                    <StatCard title="Active Bookings" icon="book" tone=Tone::Blue value=count(|stats| stats.active_bookings) />
                </A>
                <A href=paths::LECTURER_REQUESTS>
                    <StatCard title="Pending Requests" icon="mail" tone=Tone::Yellow value=count(|stats| stats.pending_requests) />
                </A>
                <A href=paths::LECTURER_BOOKINGS>
                    <StatCard title="Upcoming Bookings" icon="schedule" tone=Tone::Green value=count(|stats| stats.upcoming_bookings) />
                </A>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class=Theme::CARD>
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Recent Bookings"</h2>
                    {move || {
                        let recent = data.get().flatten().map(|data| data.recent).unwrap_or_default();
                        if recent.is_empty() {
                            return view! { <p class="text-gray-600 dark:text-gray-400">"No bookings yet"</p> }.into_any();
                        }
                        view! {
                            <div class="space-y-3">
                                {recent
                                    .into_iter()
                                    .map(|booking| view! {
                                        <div class="border-l-4 border-blue-500 pl-4 py-2">
                                            <p class="font-semibold">{booking.hall_name()}</p>
                                            <p class="text-sm text-gray-600 dark:text-gray-400">
                                                {format!("{} | {}", dates::display_day(&booking.date), booking.time_range())}
                                            </p>
                                            <p class="text-xs text-gray-500">{booking.purpose}</p>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                </div>
                <div class=Theme::CARD>
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Quick Actions"</h2>
                    <div class="flex flex-col gap-3">
                        <A href=paths::LECTURER_BOOK_HALL {..} class="inline-flex justify-center px-5 py-3 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800">
                            "Book a Hall"
                        </A>
                        <A href=paths::LECTURER_HALLS {..} class=Theme::BUTTON_SECONDARY>
                            "View Available Halls"
                        </A>
                        <A href=paths::LECTURER_TIMETABLE {..} class=Theme::BUTTON_SECONDARY>
                            "View Timetables"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
