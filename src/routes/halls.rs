//! Read-only hall browser with per-day availability, shared by lecturers and
//! representatives.

use crate::{
    app_lib::{dates, theme::Theme},
    components::{EmptyState, Loading, PageHeader, SelectField, StatusBadge, use_toasts},
    features::{
        bookings::{
            client as bookings_client,
            types::{AvailabilityQuery, HallAvailability, availability_for, hall_status},
        },
        halls::{
            client,
            types::{Hall, HallQuery},
        },
    },
    routes::options,
};
use leptos::prelude::*;

#[component]
pub fn HallsPage() -> impl IntoView {
    let toasts = use_toasts();
    let query = RwSignal::new(HallQuery::active());
    let date = RwSignal::new(dates::input_value(dates::today()));

    let halls = LocalResource::new(move || {
        let query = query.get();
        async move {
            let result = client::list_halls(&query).await;
            if let Err(err) = &result {
                toasts.failure(err, "Failed to fetch halls");
            }
            result.unwrap_or_default()
        }
    });

    let availability = LocalResource::new(move || {
        let query = query.get();
        let availability_query = AvailabilityQuery {
            date: date.get(),
            building: query.building,
            floor: query.floor,
        };
        async move {
            bookings_client::hall_availability(&availability_query)
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "failed to check availability");
                    Vec::new()
                })
        }
    });

    let has_building = move || query.with(|query| !query.building.is_empty());

    view! {
        <div>
            <PageHeader title="View Halls" subtitle="Check which halls are free on a given day." />
            <div class=format!("{} mb-6", Theme::CARD)>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                    <div>
                        <label class=Theme::LABEL for="date">"Select Date"</label>
                        <input
                            id="date"
                            type="date"
                            class=Theme::INPUT
                            prop:value=move || date.get()
                            on:input=move |event| date.set(event_target_value(&event))
                        />
                    </div>
                    <SelectField
                        label="Building"
                        id="building"
                        placeholder="All Buildings"
                        options=Signal::derive(options::buildings)
                        value=Signal::derive(move || query.with(|query| query.building.clone()))
                        on_change=move |value: String| query.update(|query| query.set_building(&value))
                    />
                    <Show when=has_building>
                        <SelectField
                            label="Floor"
                            id="floor"
                            placeholder="All Floors"
                            options=Signal::derive(move || query.with(|query| options::floors(&query.building)))
                            value=Signal::derive(move || query.with(|query| query.floor.clone()))
                            on_change=move |value: String| query.update(|query| query.floor = value)
                        />
                    </Show>
                    <button
                        type="button"
                        class=Theme::BUTTON_SECONDARY
                        on:click=move |_| query.set(HallQuery::active())
                    >
                        "Clear Filters"
                    </button>
                </div>
            </div>

            <Suspense fallback=|| view! { <Loading /> }>
                {move || Suspend::new(async move {
                    let halls = halls.await;
                    let availability = availability.await;
                    if halls.is_empty() {
                        return view! { <EmptyState icon="meeting_room" message="No halls found" /> }
                            .into_any();
                    }
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {halls
                                .iter()
                                .map(|hall| hall_card(hall, &availability))
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                })}
            </Suspense>
        </div>
    }
}

fn hall_card(hall: &Hall, availability: &[HallAvailability]) -> impl IntoView {
    let status = hall_status(availability, &hall.id);
    let occupied = availability_for(availability, &hall.id)
        .filter(|entry| !entry.is_available)
        .cloned();
    let facilities = (!hall.facilities.is_empty()).then(|| hall.facilities.join(", "));

    view! {
        <div class=Theme::CARD>
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="text-lg font-bold text-gray-900 dark:text-white">{hall.name.clone()}</h3>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{hall.location()}</p>
                </div>
                <StatusBadge tone=status.tone() label=status.label() />
            </div>
            <div class="space-y-1 text-sm text-gray-600 dark:text-gray-300">
                <p>
                    <span class="font-medium">"Capacity: "</span>
                    {format!("{} people", hall.capacity)}
                </p>
                {facilities.map(|list| view! {
                    <p>
                        <span class="font-medium">"Facilities: "</span>
                        {list}
                    </p>
                })}
            </div>
            {occupied.map(|entry| view! {
                <div class="mt-4 pt-4 border-t border-gray-200 dark:border-gray-700">
                    <p class="text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">"Occupied Times:"</p>
                    <div class="space-y-2">
                        {entry
                            .timetable_entries
                            .into_iter()
                            .map(|class| view! {
                                <div class="text-xs bg-blue-50 dark:bg-blue-900/30 p-2 rounded">
                                    <p class="font-medium">{class.subject}</p>
                                    <p class="text-gray-500">{format!("{} - {}", class.start_time, class.end_time)}</p>
                                </div>
                            })
                            .collect_view()}
                        {entry
                            .bookings
                            .into_iter()
                            .map(|slot| view! {
                                <div class="text-xs bg-yellow-50 dark:bg-yellow-900/30 p-2 rounded">
                                    <p class="font-medium">{slot.purpose}</p>
                                    <p class="text-gray-500">{format!("{} - {}", slot.start_time, slot.end_time)}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            })}
        </div>
    }
}
