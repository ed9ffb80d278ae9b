use crate::{
    app_lib::{dates, theme::{Theme, Tone}},
    components::{PageHeader, StatCard, StatusBadge, use_toasts},
    features::{
        bookings::filters::recent,
        refs::person_name,
        requests::{
            client,
            types::{BookingRequest, RequestStats},
        },
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn RepresentativeDashboardPage() -> impl IntoView {
    let toasts = use_toasts();
    let requests = LocalResource::new(move || async move {
        client::my_requests()
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch dashboard data"))
            .ok()
    });
    let stats = Memo::new(move |_| requests.get().flatten().map(|list| RequestStats::compute(&list)));
    let count = move |pick: fn(&RequestStats) -> usize| {
        Signal::derive(move || stats.get().map(|stats| pick(&stats)))
    };

    view! {
        <div>
            <PageHeader title="Representative Dashboard" />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                <StatCard title="Total Requests" icon="mail" tone=Tone::Blue value=count(|stats| stats.total) />
                <StatCard title="Pending" icon="schedule" tone=Tone::Yellow value=count(|stats| stats.pending) />
                <StatCard title="Approved" icon="check_circle" tone=Tone::Green value=count(|stats| stats.approved) />
                <StatCard title="Rejected" icon="cancel" tone=Tone::Red value=count(|stats| stats.rejected) />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class=Theme::CARD>
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Recent Requests"</h2>
                    {move || {
                        let list = requests.get().flatten().unwrap_or_default();
                        if list.is_empty() {
                            return view! { <p class="text-gray-600 dark:text-gray-400">"No requests yet"</p> }.into_any();
                        }
                        view! {
                            <div class="space-y-3">
                                {recent(&list).iter().cloned().map(recent_request).collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                </div>
                <div class=Theme::CARD>
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Quick Actions"</h2>
                    <div class="flex flex-col gap-3">
                        <A href=paths::REP_REQUEST {..} class="inline-flex justify-center px-5 py-3 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800">
                            "Request Hall Booking"
                        </A>
                        <A href=paths::REP_HALLS {..} class=Theme::BUTTON_SECONDARY>
                            "View Available Halls"
                        </A>
                        <A href=paths::REP_REQUESTS {..} class=Theme::BUTTON_SECONDARY>
                            "View My Requests"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn recent_request(request: BookingRequest) -> impl IntoView {
    let hall = request.hall_name();
    view! {
        <div class="border-l-4 border-blue-500 pl-4 py-2 flex justify-between items-start">
            <div>
                <p class="font-semibold">{hall}</p>
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    {format!("To: {}", person_name(request.lecturer.as_ref()))}
                </p>
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    {format!(
                        "{} | {} - {}",
                        dates::display_day(&request.date),
                        request.start_time,
                        request.end_time,
                    )}
                </p>
            </div>
            <StatusBadge tone=request.status.tone() label=request.status.as_str() />
        </div>
    }
}
