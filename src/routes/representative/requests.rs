use crate::{
    app_lib::{dates, dialog, theme::Theme},
    components::{EmptyState, FilterTabs, Loading, PageHeader, Pending, StatusBadge, use_toasts},
    features::{
        catalog,
        refs::person_name,
        requests::{
            client,
            types::{BookingRequest, REPRESENTATIVE_FILTERS, RequestFilter},
        },
    },
};
use leptos::prelude::*;

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    let toasts = use_toasts();
    let filter = RwSignal::new(RequestFilter::All);
    let pending = Pending::default();

    let requests = LocalResource::new(move || async move {
        client::my_requests()
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch requests"))
            .unwrap_or_default()
    });

    let on_cancel = move |id: String| {
        if !dialog::confirm("Cancel this booking request?") {
            return;
        }
        toasts.track(
            pending,
            id.clone(),
            async move { client::cancel_request(&id).await },
            "Booking request cancelled",
            "Failed to cancel request",
            move || requests.refetch(),
        );
    };

    view! {
        <div>
            <PageHeader title="My Booking Requests" />
            <FilterTabs choices=REPRESENTATIVE_FILTERS.to_vec() selected=filter label=RequestFilter::label />
            <Suspense fallback=|| view! { <Loading /> }>
                {move || Suspend::new(async move {
                    let all = requests.await;
                    let current = filter.get();
                    let shown: Vec<BookingRequest> = current.apply(&all).into_iter().cloned().collect();
                    if shown.is_empty() {
                        return view! { <EmptyState icon="inbox" message=current.empty_message() /> }.into_any();
                    }
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {shown
                                .into_iter()
                                .map(|request| {
                                    let busy = pending.busy(request.id.clone());
                                    request_card(request, busy, on_cancel)
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                })}
            </Suspense>
        </div>
    }
}

fn request_card(
    request: BookingRequest,
    busy: Signal<bool>,
    on_cancel: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let hall = request.hall().cloned();
    let hall_name = request.hall_name();
    let building = hall
        .as_ref()
        .map(|hall| catalog::building_label(&hall.building).to_string())
        .filter(|building| !building.is_empty())
        .unwrap_or_else(|| "—".to_string());
    let floor = catalog::floor_label(hall.as_ref().map(|hall| hall.floor.as_str()));
    let requested = request
        .created_at
        .as_deref()
        .map(dates::display_day)
        .unwrap_or_else(|| "—".to_string());
    let response = request.response().map(str::to_string);
    let id = StoredValue::new(request.id.clone());

    view! {
        <div class=Theme::CARD>
            <div class="flex justify-between items-start mb-4">
                <h3 class="text-lg font-bold text-gray-900 dark:text-white">{hall_name}</h3>
                <StatusBadge tone=request.status.tone() label=request.status.as_str() />
            </div>
            <div class="space-y-2 text-sm text-gray-600 dark:text-gray-400 mb-4">
                <p><span class="font-medium">"Lecturer: "</span>{person_name(request.lecturer.as_ref())}</p>
                <p><span class="font-medium">"Building: "</span>{building}</p>
                <p><span class="font-medium">"Floor: "</span>{floor}</p>
                <p><span class="font-medium">"Date: "</span>{dates::display_day(&request.date)}</p>
                <p><span class="font-medium">"Time: "</span>{format!("{} - {}", request.start_time, request.end_time)}</p>
                <p><span class="font-medium">"Purpose: "</span>{request.purpose.clone()}</p>
                <p><span class="font-medium">"Requested: "</span>{requested}</p>
            </div>
            {response.map(|message| view! {
                <div class="p-3 mb-4 rounded-lg bg-gray-50 dark:bg-gray-900/50 border border-gray-200 dark:border-gray-700">
                    <p class="text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">"Lecturer Response:"</p>
                    <p class="text-sm text-gray-600 dark:text-gray-400">{message}</p>
                </div>
            })}
            {request.is_pending().then(|| view! {
                <button
                    type="button"
                    class=format!("{} w-full", Theme::BUTTON_DANGER)
                    disabled=move || busy.get()
                    on:click=move |_| on_cancel(id.get_value())
                >
                    <span class=Theme::ICON_SMALL>"close"</span>
                    "Cancel Request"
                </button>
            })}
        </div>
    }
}
