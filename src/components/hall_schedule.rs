//! A hall's classes and bookings for one day, shown beside the booking and
//! request forms.

use crate::{
    app_lib::{dates, theme::Theme},
    features::bookings::types::HallAvailability,
};
use leptos::prelude::*;

#[component]
pub fn HallSchedule(
    #[prop(into)] date: Signal<String>,
    #[prop(into)] availability: Signal<Option<HallAvailability>>,
) -> impl IntoView {
    view! {
        <div class=Theme::CARD>
            <h3 class="text-lg font-bold text-gray-900 dark:text-white mb-4">
                {move || format!("Hall Schedule for {}", dates::display_day(&date.get()))}
            </h3>
            {move || match availability.get() {
                None => view! {
                    <p class="text-gray-600 dark:text-gray-400">"Loading schedule..."</p>
                }
                .into_any(),
                Some(schedule) => schedule_view(schedule).into_any(),
            }}
        </div>
    }
}

fn schedule_view(schedule: HallAvailability) -> impl IntoView {
    let classes = (!schedule.timetable_entries.is_empty()).then(|| {
        view! {
            <div>
                <h4 class="font-semibold text-sm text-gray-700 dark:text-gray-300 mb-2">"Scheduled Classes:"</h4>
                {schedule
                    .timetable_entries
                    .into_iter()
                    .map(|class| view! {
                        <div class="bg-blue-50 dark:bg-blue-900/30 p-3 mb-2 rounded border-l-4 border-blue-500">
                            <p class="font-medium">{class.subject}</p>
                            <p class="text-sm text-gray-600 dark:text-gray-400">
                                {format!("{} - {}", class.start_time, class.end_time)}
                            </p>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
    });
    let bookings = (!schedule.bookings.is_empty()).then(|| {
        view! {
            <div>
                <h4 class="font-semibold text-sm text-gray-700 dark:text-gray-300 mb-2">"Existing Bookings:"</h4>
                {schedule
                    .bookings
                    .into_iter()
                    .map(|slot| view! {
                        <div class="bg-yellow-50 dark:bg-yellow-900/30 p-3 mb-2 rounded border-l-4 border-yellow-500">
                            <p class="font-medium">{slot.purpose}</p>
                            <p class="text-sm text-gray-600 dark:text-gray-400">
                                {format!("{} - {}", slot.start_time, slot.end_time)}
                            </p>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
    });
    let free = schedule.is_available.then(|| {
        view! {
            <div class="bg-green-50 dark:bg-green-900/30 p-3 rounded border-l-4 border-green-500">
                <p class="text-green-700 dark:text-green-300 font-medium">"Hall is available all day"</p>
            </div>
        }
    });

    view! { <div class="space-y-3">{classes} {bookings} {free}</div> }
}
