//! Read-only browser over the section timetables.

use crate::{
    app_lib::theme::Theme,
    components::{EmptyState, Loading, SelectField, SelectOption, TimetableTable, use_toasts},
    features::timetables::{
        client,
        types::{Timetable, TimetableQuery, available_sections, expected_timetables},
    },
    routes::options,
};
use leptos::prelude::*;

fn parse_number(value: &str) -> Option<u8> {
    value.parse().ok()
}

fn number_value(value: Option<u8>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

#[component]
pub fn TimetableViewerPage() -> impl IntoView {
    let toasts = use_toasts();
    let query = RwSignal::new(TimetableQuery::default());
    let selected = RwSignal::<Option<String>>::new(None);

    let sections = LocalResource::new(move || async move {
        client::sections(&TimetableQuery::default())
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to load timetable sections"))
            .unwrap_or_default()
    });
    let timetables = LocalResource::new(move || {
        let query = query.get();
        async move {
            let list = client::list_timetables(&query)
                .await
                .inspect_err(|err| toasts.failure(err, "Could not fetch timetables"))
                .unwrap_or_default();
            selected.set(list.first().map(|timetable| timetable.id.clone()));
            list
        }
    });

    let section_options = Signal::derive(move || {
        let (year, department) = query.with(|query| (query.academic_year, query.department.clone()));
        sections
            .get()
            .map(|sections| {
                available_sections(&sections, year, &department)
                    .into_iter()
                    .map(|section| SelectOption::new(section.section_code.clone(), section.label()))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });
    let timetable_options = Signal::derive(move || {
        timetables
            .get()
            .unwrap_or_default()
            .iter()
            .map(|timetable| SelectOption::new(timetable.id.clone(), timetable.option_label()))
            .collect::<Vec<_>>()
    });
    let active = Memo::new(move |_| {
        let list = timetables.get()?;
        let id = selected.get();
        list.iter()
            .find(|timetable| Some(&timetable.id) == id.as_ref())
            .or_else(|| list.first())
            .cloned()
    });
    let summary = move || {
        let loaded = timetables.get().map_or(0, |list| list.len());
        let expected = sections.get().map_or(expected_timetables(&[]), |list| expected_timetables(&list));
        format!("{loaded} of {expected} timetables loaded. Use filters to pick the section you need.")
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                <div>
                    <p class="text-xs font-semibold uppercase tracking-wide text-blue-600">"Timetable library"</p>
                    <h1 class=Theme::TITLE>"View Semester Timetables"</h1>
                    <p class=Theme::SUBTITLE>{summary}</p>
                </div>
                <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| timetables.refetch()>
                    <span class=Theme::ICON_SMALL>"refresh"</span>
                    "Refresh"
                </button>
            </div>

            <div class=Theme::CARD>
                <div class="grid grid-cols-1 md:grid-cols-5 gap-4 items-end">
                    <SelectField
                        label="Academic Year"
                        id="filter-year"
                        placeholder="All"
                        options=Signal::derive(options::academic_years)
                        value=Signal::derive(move || query.with(|query| number_value(query.academic_year)))
                        on_change=move |value: String| query.update(|query| query.set_academic_year(parse_number(&value)))
                    />
                    <SelectField
                        label="Department"
                        id="filter-department"
                        placeholder="All"
                        options=Signal::derive(options::section_departments)
                        value=Signal::derive(move || query.with(|query| query.department.clone()))
                        on_change=move |value: String| query.update(|query| query.set_department(&value))
                    />
                    <SelectField
                        label="Section"
                        id="filter-section"
                        placeholder="All sections"
                        options=section_options
                        value=Signal::derive(move || query.with(|query| query.section_code.clone()))
                        on_change=move |value: String| query.update(|query| query.section_code = value)
                        disabled=Signal::derive(move || query.with(|query| !query.section_enabled()))
                    />
                    <SelectField
                        label="Term"
                        id="filter-semester"
                        placeholder="All"
                        options=Signal::derive(options::semesters)
                        value=Signal::derive(move || query.with(|query| number_value(query.semester)))
                        on_change=move |value: String| query.update(|query| query.semester = parse_number(&value))
                    />
                    <button
                        type="button"
                        class=Theme::BUTTON_SECONDARY
                        on:click=move |_| query.set(TimetableQuery::default())
                    >
                        "Clear Filters"
                    </button>
                </div>
            </div>

            <div class=format!("{} space-y-4", Theme::CARD)>
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                    <div class="flex items-center gap-2">
                        <span class="material-symbols-outlined text-blue-600">"calendar_month"</span>
                        <div>
                            <p class="font-semibold text-gray-900 dark:text-white">"Selected timetable"</p>
                            <p class="text-sm text-gray-600 dark:text-gray-400">
                                {move || active.get().map_or_else(|| "No timetable selected".to_string(), |timetable| timetable.label())}
                            </p>
                        </div>
                    </div>
                    <div class="w-full md:w-72">
                        <SelectField
                            label="Timetable"
                            id="timetable-picker"
                            options=timetable_options
                            value=Signal::derive(move || active.get().map(|timetable| timetable.id).unwrap_or_default())
                            on_change=move |value: String| selected.set(Some(value))
                        />
                    </div>
                </div>
                <Suspense fallback=|| view! { <Loading label="Loading timetable..." /> }>
                    {move || Suspend::new(async move {
                        timetables.await;
                        match active.get() {
                            Some(timetable) => timetable_view(timetable).into_any(),
                            None => view! {
                                <EmptyState icon="calendar_month" message="Select filters to view a semester timetable." />
                            }
                            .into_any(),
                        }
                    })}
                </Suspense>
            </div>
        </div>
    }
}

fn timetable_view(timetable: Timetable) -> impl IntoView {
    let description = format!(
        "Configured for Year {} {} • Semester {}",
        timetable.academic_year, timetable.department, timetable.semester
    );
    let title = timetable.title().to_string();
    let entries = timetable.entries;
    view! {
        <div>
            <h3 class="font-semibold text-gray-900 dark:text-white">{title}</h3>
            <p class="text-sm text-gray-500 mb-3">{description}</p>
            <TimetableTable entries=Signal::derive(move || entries.clone()) />
        </div>
    }
}
