//! Campus-wide booking list for admins.

use crate::{
    app_lib::{dates, theme::Theme},
    components::{EmptyState, Loading, PageHeader, SelectField, SelectOption, StatusBadge, use_toasts},
    features::{
        bookings::{
            client,
            types::{Booking, BookingQuery, BookingStatus},
        },
        refs::person_name,
    },
    routes::options,
};
use leptos::prelude::*;

fn status_options() -> Vec<SelectOption> {
    [BookingStatus::Active, BookingStatus::Cancelled, BookingStatus::Completed]
        .into_iter()
        .map(|status| SelectOption::new(status.as_str(), status.as_str()))
        .collect()
}

fn parse_status(value: &str) -> Option<BookingStatus> {
    match value {
        "active" => Some(BookingStatus::Active),
        "cancelled" => Some(BookingStatus::Cancelled),
        "completed" => Some(BookingStatus::Completed),
        _ => None,
    }
}

#[component]
pub fn AllBookingsPage() -> impl IntoView {
    let toasts = use_toasts();
    let query = RwSignal::new(BookingQuery::default());

    let bookings = LocalResource::new(move || {
        let query = query.get();
        async move {
            client::list_all_bookings(&query)
                .await
                .inspect_err(|err| toasts.failure(err, "Failed to fetch bookings"))
                .unwrap_or_default()
        }
    });

    view! {
        <div>
            <PageHeader title="All Bookings" subtitle="Every hall booking on campus." />
            <div class=format!("{} mb-6", Theme::CARD)>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                    <SelectField
                        label="Status"
                        id="status"
                        placeholder="All Status"
                        options=Signal::derive(status_options)
                        value=Signal::derive(move || {
                            query.with(|query| query.status.map(|status| status.as_str().to_string()).unwrap_or_default())
                        })
                        on_change=move |value: String| query.update(|query| query.status = parse_status(&value))
                    />
                    <div>
                        <label class=Theme::LABEL for="booking-date">"Date"</label>
                        <input
                            id="booking-date"
                            type="date"
                            class=Theme::INPUT
                            prop:value=move || query.with(|query| query.date.clone())
                            on:input=move |event| query.update(|query| query.date = event_target_value(&event))
                        />
                    </div>
                    <SelectField
                        label="Building"
                        id="building"
                        placeholder="All Buildings"
                        options=Signal::derive(options::buildings)
                        value=Signal::derive(move || query.with(|query| query.building.clone()))
                        on_change=move |value: String| query.update(|query| query.building = value)
                    />
                    <button
                        type="button"
                        class=Theme::BUTTON_SECONDARY
                        on:click=move |_| query.set(BookingQuery::default())
                    >
                        "Clear Filters"
                    </button>
                </div>
            </div>

            <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <Suspense fallback=|| view! { <Loading /> }>
                    {move || Suspend::new(async move {
                        let list = bookings.await;
                        if list.is_empty() {
                            return view! { <EmptyState icon="book" message="No bookings found" /> }.into_any();
                        }
                        view! {
                            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                                <thead class="bg-gray-50 dark:bg-gray-900/50">
                                    <tr>
                                        <th class=Theme::TH>"Hall"</th>
                                        <th class=Theme::TH>"Lecturer"</th>
                                        <th class=Theme::TH>"Date"</th>
                                        <th class=Theme::TH>"Time"</th>
                                        <th class=Theme::TH>"Purpose"</th>
                                        <th class=Theme::TH>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                    {list.iter().map(booking_row).collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    })}
                </Suspense>
            </div>
        </div>
    }
}

fn booking_row(booking: &Booking) -> impl IntoView {
    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class=Theme::TD>{booking.hall_name()}</td>
            <td class=Theme::TD>{person_name(booking.lecturer.as_ref())}</td>
            <td class=Theme::TD>{dates::display_day(&booking.date)}</td>
            <td class=Theme::TD>{booking.time_range()}</td>
            <td class=Theme::TD>{booking.purpose.clone()}</td>
            <td class=Theme::TD>
                <StatusBadge tone=booking.status.tone() label=booking.status.as_str() />
            </td>
        </tr>
    }
}
