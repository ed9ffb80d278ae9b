//! Pieces shared by the lecturer's booking page and the representative's
//! request page: hall filters with a date, the booking fields and the
//! availability lookup behind them.

use crate::{
    app_lib::{dates, theme::Theme},
    components::{SelectField, SelectOption, TextAreaField, Toasts},
    features::{
        bookings::{
            client as bookings_client,
            types::{AvailabilityQuery, BookingForm, HallAvailability, HallStatus, hall_status},
        },
        halls::{
            client as halls_client,
            types::{Hall, HallQuery, filter_halls},
        },
    },
    routes::options,
};
use leptos::prelude::*;

/// Building and floor narrowing for the hall picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HallFilter {
    pub building: String,
    pub floor: String,
}

/// Halls open for booking; a failed fetch toasts and leaves the picker empty.
pub fn active_halls(toasts: Toasts) -> LocalResource<Vec<Hall>> {
    LocalResource::new(move || async move {
        halls_client::list_halls(&HallQuery::active())
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch halls"))
            .unwrap_or_default()
    })
}

/// Availability for the chosen date, narrowed like the hall picker. Empty
/// until a date is picked.
pub fn availability(
    form: RwSignal<BookingForm>,
    filter: RwSignal<HallFilter>,
) -> LocalResource<Vec<HallAvailability>> {
    LocalResource::new(move || {
        let date = form.with(|form| form.date.clone());
        let HallFilter { building, floor } = filter.get();
        let query = AvailabilityQuery { date, building, floor };
        async move {
            bookings_client::hall_availability(&query)
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "failed to check availability");
                    Vec::new()
                })
        }
    })
}

/// Hall picker options, suffixed with the hall's status once a date is set.
pub fn hall_choices(
    halls: &[Hall],
    filter: &HallFilter,
    availability: &[HallAvailability],
    date_chosen: bool,
) -> Vec<SelectOption> {
    filter_halls(halls, &filter.building, &filter.floor)
        .into_iter()
        .map(|hall| {
            let mut label = format!("{} - {}", hall.name, hall.location());
            if date_chosen {
                label.push_str(match hall_status(availability, &hall.id) {
                    HallStatus::Available => " ✓ Available",
                    HallStatus::Occupied => " ✗ Occupied",
                    HallStatus::Unknown => "",
                });
            }
            SelectOption::new(hall.id.clone(), label)
        })
        .collect()
}

#[component]
pub fn HallFilters(form: RwSignal<BookingForm>, filter: RwSignal<HallFilter>) -> impl IntoView {
    let min_date = dates::input_value(dates::today());

    view! {
        <div class=Theme::CARD>
            <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Filters"</h2>
            <div class="space-y-4">
                <SelectField
                    label="Building"
                    id="filter-building"
                    placeholder="All Buildings"
                    options=Signal::derive(options::buildings)
                    value=Signal::derive(move || filter.with(|filter| filter.building.clone()))
                    on_change=move |value: String| filter.set(HallFilter { building: value, floor: String::new() })
                />
                <Show when=move || filter.with(|filter| !filter.building.is_empty())>
                    <SelectField
                        label="Floor"
                        id="filter-floor"
                        placeholder="All Floors"
                        options=Signal::derive(move || filter.with(|filter| options::floors(&filter.building)))
                        value=Signal::derive(move || filter.with(|filter| filter.floor.clone()))
                        on_change=move |value: String| filter.update(|filter| filter.floor = value)
                    />
                </Show>
                <div>
                    <label class=Theme::LABEL for="booking-date">"Date"</label>
                    <input
                        id="booking-date"
                        type="date"
                        class=Theme::INPUT
                        min=min_date
                        prop:value=move || form.with(|form| form.date.clone())
                        on:input=move |event| form.update(|form| form.date = event_target_value(&event))
                    />
                </div>
            </div>
        </div>
    }
}

/// Hall, time range and purpose inputs bound to a [`BookingForm`].
#[component]
pub fn BookingFields(
    form: RwSignal<BookingForm>,
    #[prop(into)] halls: Signal<Vec<SelectOption>>,
) -> impl IntoView {
    view! {
        <SelectField
            label="Select Hall *"
            id="booking-hall"
            placeholder="Choose a hall"
            options=halls
            value=Signal::derive(move || form.with(|form| form.hall.clone()))
            on_change=move |value: String| form.update(|form| form.hall = value)
        />
        <div class="grid grid-cols-2 gap-4">
            <SelectField
                label="Start Time *"
                id="booking-start"
                options=Signal::derive(options::time_slots)
                value=Signal::derive(move || form.with(|form| form.start_time.clone()))
                on_change=move |value: String| form.update(|form| form.start_time = value)
            />
            <SelectField
                label="End Time *"
                id="booking-end"
                options=Signal::derive(options::time_slots)
                value=Signal::derive(move || form.with(|form| form.end_time.clone()))
                on_change=move |value: String| form.update(|form| form.end_time = value)
            />
        </div>
        <TextAreaField
            label="Purpose *"
            id="booking-purpose"
            required=true
            placeholder="Enter the purpose of booking"
            value=Signal::derive(move || form.with(|form| form.purpose.clone()))
            on_input=move |value: String| form.update(|form| form.purpose = value)
        />
    }
}
