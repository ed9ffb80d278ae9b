use crate::{
    app_lib::{dates, dialog, theme::Theme},
    components::{EmptyState, FilterTabs, Loading, PageHeader, Pending, StatusBadge, use_toasts},
    features::{
        bookings::{
            client,
            filters::{BookingFilter, can_cancel},
            types::Booking,
        },
        catalog,
    },
};
use leptos::prelude::*;

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let toasts = use_toasts();
    let filter = RwSignal::new(BookingFilter::All);
    let pending = Pending::default();

    let bookings = LocalResource::new(move || async move {
        client::my_bookings()
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch bookings"))
            .unwrap_or_default()
    });

    let on_cancel = move |id: String| {
        if !dialog::confirm("Are you sure you want to cancel this booking?") {
            return;
        }
        toasts.track(
            pending,
            id.clone(),
            async move { client::cancel_booking(&id).await },
            "Booking cancelled successfully",
            "Failed to cancel booking",
            move || bookings.refetch(),
        );
    };

    view! {
        <div>
            <PageHeader title="My Bookings" />
            <FilterTabs choices=BookingFilter::ALL.to_vec() selected=filter label=BookingFilter::label />
            <Suspense fallback=|| view! { <Loading /> }>
                {move || Suspend::new(async move {
                    let all = bookings.await;
                    let today = dates::today();
                    let shown: Vec<Booking> = filter
                        .get()
                        .apply(&all, today)
                        .into_iter()
                        .cloned()
                        .collect();
                    if shown.is_empty() {
                        return view! { <EmptyState icon="event_busy" message="No bookings found" /> }.into_any();
                    }
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {shown
                                .into_iter()
                                .map(|booking| {
                                    let cancellable = can_cancel(&booking, today);
                                    let busy = pending.busy(booking.id.clone());
                                    booking_card(booking, cancellable, busy, on_cancel)
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

fn booking_card(
    booking: Booking,
    cancellable: bool,
    busy: Signal<bool>,
    on_cancel: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let hall = booking.hall().cloned();
    let building = hall
        .as_ref()
        .map(|hall| catalog::building_label(&hall.building).to_string())
        .filter(|building| !building.is_empty())
        .unwrap_or_else(|| "—".to_string());
    let floor = catalog::floor_label(hall.as_ref().map(|hall| hall.floor.as_str()));
    let id = StoredValue::new(booking.id.clone());

    view! {
        <div class=Theme::CARD>
            <div class="flex justify-between items-start mb-4">
                <h3 class="text-lg font-bold text-gray-900 dark:text-white">{booking.hall_name()}</h3>
                <StatusBadge tone=booking.status.tone() label=booking.status.as_str() />
            </div>
            <div class="space-y-2 text-sm text-gray-600 dark:text-gray-400 mb-4">
                <p><span class="font-medium">"Building: "</span>{building}</p>
                <p><span class="font-medium">"Floor: "</span>{floor}</p>
                <p><span class="font-medium">"Date: "</span>{dates::display_day(&booking.date)}</p>
                <p><span class="font-medium">"Time: "</span>{booking.time_range()}</p>
                <p><span class="font-medium">"Purpose: "</span>{booking.purpose.clone()}</p>
            </div>
            {cancellable.then(|| view! {
                <button
                    type="button"
                    class=format!("{} w-full", Theme::BUTTON_DANGER)
                    disabled=move || busy.get()
                    on:click=move |_| on_cancel(id.get_value())
                >
                    <span class=Theme::ICON_SMALL>"close"</span>
                    "Cancel Booking"
                </button>
            })}
        </div>
    }
}
