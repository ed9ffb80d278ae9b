//! The lecturer's inbox of booking requests from class representatives.

use crate::{
    app_lib::{
        dates,
        theme::{Theme, scoped_id},
    },
    components::{
        EmptyState, FilterTabs, Loading, PageHeader, Pending, StatusBadge, TextAreaField, use_toasts,
    },
    features::{
        catalog,
        requests::{
            client,
            types::{BookingRequest, LECTURER_FILTERS, RequestFilter, RequestStatus},
        },
    },
};
use leptos::prelude::*;
use std::collections::HashMap;

#[component]
pub fn BookingRequestsPage() -> impl IntoView {
    let toasts = use_toasts();
    let filter = RwSignal::new(RequestFilter::Status(RequestStatus::Pending));
    // Reply drafts keyed by request id.
    let drafts = RwSignal::new(HashMap::<String, String>::new());
    let pending = Pending::default();

    let requests = LocalResource::new(move || async move {
        client::booking_requests()
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch booking requests"))
            .unwrap_or_default()
    });

    let draft_for = move |id: &str| drafts.with_untracked(|drafts| drafts.get(id).cloned().unwrap_or_default());
    let forget_draft = move |id: &str| drafts.update(|drafts| {
        drafts.remove(id);
    });

    let on_approve = move |id: String| {
        let draft = draft_for(&id);
        toasts.track(
            pending,
            id.clone(),
            {
                let id = id.clone();
                async move { client::approve(&id, &draft).await }
            },
            "Request approved and booking created",
            "Failed to approve request",
            move || {
                forget_draft(&id);
                requests.refetch();
            },
        );
    };
    let on_reject = move |id: String| {
        let draft = draft_for(&id);
        if draft.trim().is_empty() {
            toasts.error("Please provide a reason for rejection");
            return;
        }
        toasts.track(
            pending,
            id.clone(),
            {
                let id = id.clone();
                async move { client::reject(&id, &draft).await }
            },
            "Request rejected",
            "Failed to reject request",
            move || {
                forget_draft(&id);
                requests.refetch();
            },
        );
    };

    view! {
        <div>
            <PageHeader title="Booking Requests" />
            <FilterTabs choices=LECTURER_FILTERS.to_vec() selected=filter label=RequestFilter::label />
            <Suspense fallback=|| view! { <Loading /> }>
                {move || Suspend::new(async move {
                    let all = requests.await;
                    let current = filter.get();
                    let shown: Vec<BookingRequest> = current.apply(&all).into_iter().cloned().collect();
                    if shown.is_empty() {
                        return view! { <EmptyState icon="inbox" message=current.empty_message() /> }.into_any();
                    }
                    view! {
                        <div class="space-y-6">
                            {shown
                                .into_iter()
                                .map(|request| {
                                    let busy = pending.busy(request.id.clone());
                                    view! {
                                        <RequestCard
                                            request=request
                                            drafts=drafts
                                            busy=busy
                                            on_approve=on_approve
                                            on_reject=on_reject
                                        />
                                    }
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

#[component]
fn RequestCard<A, R>(
    request: BookingRequest,
    drafts: RwSignal<HashMap<String, String>>,
    busy: Signal<bool>,
    on_approve: A,
    on_reject: R,
) -> impl IntoView
where
    A: Fn(String) + Copy + Send + Sync + 'static,
    R: Fn(String) + Copy + Send + Sync + 'static,
{
    let hall = request.hall().cloned();
    let hall_name = request.hall_name();
    let building = hall
        .as_ref()
        .map(|hall| catalog::building_label(&hall.building).to_string())
        .filter(|building| !building.is_empty())
        .unwrap_or_else(|| "—".to_string());
    let floor = catalog::floor_label(hall.as_ref().map(|hall| hall.floor.as_str()));
    let requester = request
        .representative
        .as_ref()
        .and_then(|person| person.populated())
        .map(|person| match person.department.as_deref() {
            Some(department) => format!("{} ({department})", person.name),
            None => person.name.clone(),
        })
        .unwrap_or_else(|| "—".to_string());
    let requested = request
        .created_at
        .as_deref()
        .map(dates::display_day)
        .unwrap_or_else(|| "—".to_string());
    let response = request.response().map(str::to_string);
    let response_class = if request.status == RequestStatus::Approved {
        "mt-4 p-3 rounded-lg bg-green-50 border border-green-200 dark:bg-green-900/30 dark:border-green-800"
    } else {
        "mt-4 p-3 rounded-lg bg-red-50 border border-red-200 dark:bg-red-900/30 dark:border-red-800"
    };
    let id = StoredValue::new(request.id.clone());
    let draft = Signal::derive(move || {
        let id = id.get_value();
        drafts.with(|drafts| drafts.get(&id).cloned().unwrap_or_default())
    });

    let actions = request.is_pending().then(|| view! {
        <div class="border-t border-gray-200 dark:border-gray-700 pt-4">
            <div class="mb-4">
                <TextAreaField
                    label="Response Message (Optional for approval, Required for rejection)"
                    id=scoped_id("response-message", &request.id)
                    rows=2
                    placeholder="Enter your response message..."
                    value=draft
                    on_input=move |value: String| drafts.update(|drafts| {
                        drafts.insert(id.get_value(), value);
                    })
                />
            </div>
            <div class="flex gap-4">
                <button
                    type="button"
                    class=format!("{} flex-1", Theme::BUTTON_SUCCESS)
                    disabled=move || busy.get()
                    on:click=move |_| on_approve(id.get_value())
                >
                    <span class=Theme::ICON_SMALL>"check"</span>
                    "Approve & Book"
                </button>
                <button
                    type="button"
                    class=format!("{} flex-1", Theme::BUTTON_DANGER)
                    disabled=move || busy.get()
                    on:click=move |_| on_reject(id.get_value())
                >
                    <span class=Theme::ICON_SMALL>"close"</span>
                    "Reject"
                </button>
            </div>
        </div>
    });

    view! {
        <div class=Theme::CARD>
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white">{hall_name}</h3>
                    <p class="text-sm text-gray-600 dark:text-gray-400">{format!("Requested by: {requester}")}</p>
                </div>
                <StatusBadge tone=request.status.tone() label=request.status.as_str() />
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-4 text-sm">
                <div class="space-y-2">
                    <p><span class="font-medium">"Building: "</span>{building}</p>
                    <p><span class="font-medium">"Floor: "</span>{floor}</p>
                    <p><span class="font-medium">"Date: "</span>{dates::display_day(&request.date)}</p>
                </div>
                <div class="space-y-2">
                    <p><span class="font-medium">"Time: "</span>{format!("{} - {}", request.start_time, request.end_time)}</p>
                    <p><span class="font-medium">"Requested: "</span>{requested}</p>
                </div>
            </div>
            <div class="mb-4">
                <p class="font-medium text-sm text-gray-700 dark:text-gray-300 mb-1">"Purpose:"</p>
                <p class="text-sm text-gray-600 dark:text-gray-400 bg-gray-50 dark:bg-gray-900/50 p-3 rounded">{request.purpose.clone()}</p>
            </div>
            {actions}
            {response.map(|message| view! {
                <div class=response_class>
                    <p class="text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">"Your Response:"</p>
                    <p class="text-sm text-gray-600 dark:text-gray-400">{message}</p>
                </div>
            })}
        </div>
    }
}
