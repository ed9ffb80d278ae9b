//! Weekly timetable grid. Layout decisions live in
//! [`build_grid`](crate::features::timetables::grid::build_grid); this only
//! renders them.

use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, EmptyState},
    features::timetables::{
        grid::{Cell, build_grid},
        types::TimetableEntry,
    },
};
use leptos::prelude::*;

#[component]
pub fn TimetableTable(#[prop(into)] entries: Signal<Vec<TimetableEntry>>) -> impl IntoView {
    move || {
        let entries = entries.get();
        if entries.is_empty() {
            return view! { <EmptyState icon="calendar_month" message="No timetable entries" /> }
                .into_any();
        }
        let grid = build_grid(&entries);

        let overlap_notice = (!grid.overlaps.is_empty()).then(|| {
            let names = grid
                .overlaps
                .iter()
                .map(|entry| format!("{} ({} {})", entry.subject_label(), entry.day_of_week, entry.start_time))
                .collect::<Vec<_>>()
                .join(", ");
            view! {
                <div class="mb-4">
                    <Alert
                        kind=AlertKind::Info
                        message=format!("Overlapping entries not shown: {names}")
                    />
                </div>
            }
        });

        let header = grid
            .days
            .iter()
            .map(|day| view! { <th class=Theme::TH>{day.as_str()}</th> })
            .collect_view();

        let rows = grid
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .cells
                    .iter()
                    .filter_map(|cell| match cell {
                        Cell::Start { entry, span } => Some(entry_cell(entry, *span).into_any()),
                        Cell::Covered => None,
                        Cell::Empty => Some(
                            view! { <td class="border border-gray-100 dark:border-gray-800"></td> }
                                .into_any(),
                        ),
                    })
                    .collect_view();
                view! {
                    <tr class="h-10">
                        <td class="px-3 py-2 text-xs font-mono text-gray-500 dark:text-gray-400 border border-gray-100 dark:border-gray-800 whitespace-nowrap">
                            {row.time}
                        </td>
                        {cells}
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div>
                {overlap_notice}
                <div class="overflow-x-auto bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
                    <table class="min-w-full border-collapse">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th class=Theme::TH>"Time"</th>
                                {header}
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        }
        .into_any()
    }
}

fn entry_cell(entry: &TimetableEntry, span: usize) -> impl IntoView {
    let subject = entry.subject_label().to_string();
    let hall = entry.hall_label().to_string();
    let lecturer = entry.lecturer_label().map(str::to_string);
    let time = format!("{} - {}", entry.start_time, entry.end_time);

    view! {
        <td
            rowspan=span.to_string()
            class="align-top p-1 border border-gray-100 dark:border-gray-800"
        >
            <div class="h-full rounded-md bg-blue-50 border-l-4 border-blue-500 p-2 text-xs dark:bg-blue-900/40">
                <p class="font-semibold text-blue-900 dark:text-blue-100">{subject}</p>
                <p class="text-gray-600 dark:text-gray-300">{hall}</p>
                {lecturer.map(|name| view! { <p class="text-gray-500 dark:text-gray-400">{name}</p> })}
                <p class="text-gray-400">{time}</p>
            </div>
        </td>
    }
}
