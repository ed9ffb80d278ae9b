//! Section timetable administration. Admins create one timetable per section
//! and semester, edit its entries, preview the grid and retire old ones.

use crate::{
    app_lib::{
        dialog,
        theme::{Theme, Tone, scoped_id},
    },
    components::{
        Button, ButtonKind, EmptyState, ErrorBanner, Loading, PageHeader, Pending, SelectField,
        SelectOption, StatusBadge, TextField, TimetableTable, use_toasts,
    },
    features::{
        halls::{client as halls_client, types::{Hall, HallQuery}},
        timetables::{
            client,
            types::{
                EntryField, Section, Timetable, TimetableDraft, TimetableQuery,
                available_sections, expected_timetables,
            },
        },
    },
    routes::options,
};
use leptos::{ev::SubmitEvent, prelude::*};

#[derive(Clone)]
struct SaveDraft {
    id: Option<String>,
    draft: TimetableDraft,
}

#[component]
pub fn ManageTimetablesPage() -> impl IntoView {
    let toasts = use_toasts();
    let draft = RwSignal::new(TimetableDraft::default());
    let show_form = RwSignal::new(false);
    let editing_id = RwSignal::<Option<String>>::new(None);
    let expanded_id = RwSignal::<Option<String>>::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let pending = Pending::default();

    let timetables = LocalResource::new(move || async move {
        client::list_timetables(&TimetableQuery::default())
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch timetables"))
            .unwrap_or_default()
    });
    let halls = LocalResource::new(move || async move {
        halls_client::list_halls(&HallQuery::default())
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch halls"))
            .unwrap_or_default()
    });
    let sections = LocalResource::new(move || async move {
        client::sections(&TimetableQuery::default())
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch timetable sections"))
            .unwrap_or_default()
    });

    let reset_form = move || {
        show_form.set(false);
        editing_id.set(None);
        draft.set(TimetableDraft::default());
        set_error.set(None);
    };

    let save_action = Action::new_local(move |input: &SaveDraft| {
        let input = input.clone();
        async move {
            match input.id {
                Some(id) => client::update_timetable(&id, &input.draft).await.map(|_| true),
                None => client::create_timetable(&input.draft).await.map(|_| false),
            }
        }
    });

    Effect::new(move |_| {
        let Some(result) = save_action.value().get() else {
            return;
        };
        match result {
            Ok(updated) => {
                toasts.success(if updated {
                    "Timetable updated successfully"
                } else {
                    "Timetable created successfully"
                });
                reset_form();
                timetables.refetch();
            }
            Err(err) => {
                let fallback = if editing_id.get_untracked().is_some() {
                    "Failed to update timetable"
                } else {
                    "Failed to create timetable"
                };
                toasts.failure(&err, fallback);
                set_error.set(Some(err.user_message(fallback)));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let input = SaveDraft {
            id: editing_id.get_untracked(),
            draft: draft.get_untracked(),
        };
        if let Err(err) = input.draft.validate() {
            toasts.error(err.to_string());
            set_error.set(Some(err.to_string()));
            return;
        }
        save_action.dispatch(input);
    };

    let start_edit = move |timetable: &Timetable| {
        draft.set(TimetableDraft::from_timetable(timetable));
        editing_id.set(Some(timetable.id.clone()));
        show_form.set(true);
        set_error.set(None);
        dialog::scroll_to_top();
    };

    let section_list = Signal::derive(move || sections.get().unwrap_or_default());
    let hall_list = Signal::derive(move || halls.get().unwrap_or_default());

    view! {
        <div>
            <PageHeader title="Manage Timetables">
                <Button on_click=move |_: ()| {
                    if show_form.get_untracked() { reset_form() } else { show_form.set(true) }
                }>
                    <span class="material-symbols-outlined text-base">"add"</span>
                    {move || if show_form.get() { "Hide Form" } else { "Create Timetable" }}
                </Button>
            </PageHeader>

            <div class=format!("{} mb-6", Theme::CARD)>
                <p class="text-gray-700 dark:text-gray-300">
                    "You can maintain up to 37 section timetables (covering all 8 semesters). Edit or create them semester by semester."
                </p>
                <p class="text-sm text-gray-500 mt-2">
                    {move || {
                        let configured = timetables.get().map_or(0, |list| list.len());
                        let expected = section_list.with(|sections| expected_timetables(sections));
                        format!("{configured} of {expected} timetables configured.")
                    }}
                </p>
            </div>

            <Show when=move || show_form.get()>
                <form class=format!("{} mb-8", Theme::CARD) on:submit=on_submit>
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-6">
                        {move || if editing_id.with(Option::is_some) { "Edit Timetable" } else { "Create New Timetable" }}
                    </h2>
                    <ErrorBanner error=error />
                    <SectionFields draft=draft sections=section_list />
                    <EntriesEditor draft=draft halls=hall_list />
                    <div class="flex justify-end gap-2">
                        <Button kind=ButtonKind::Secondary on_click=move |_: ()| reset_form()>"Cancel"</Button>
                        <Button button_type="submit" disabled=save_action.pending()>
                            <span class="material-symbols-outlined text-base">"save"</span>
                            {move || if editing_id.with(Option::is_some) { "Update Timetable" } else { "Save Timetable" }}
                        </Button>
                    </div>
                </form>
            </Show>

            <div class=Theme::CARD>
                <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Existing Timetables"</h2>
                <Suspense fallback=|| view! { <Loading /> }>
                    {move || Suspend::new(async move {
                        let list = timetables.await;
                        if list.is_empty() {
                            return view! { <EmptyState icon="calendar_month" message="No timetables configured yet" /> }
                                .into_any();
                        }
                        view! {
                            <div class="space-y-4">
                                {list
                                    .into_iter()
                                    .map(|timetable| view! {
                                        <TimetableRow
                                            timetable=timetable
                                            expanded_id=expanded_id
                                            pending=pending
                                            on_edit=start_edit
                                            on_changed=move || timetables.refetch()
                                        />
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    })}
                </Suspense>
            </div>
        </div>
    }
}

/// Year, semester, department and section pickers. The section list only
/// opens once a department is chosen.
#[component]
fn SectionFields(draft: RwSignal<TimetableDraft>, sections: Signal<Vec<Section>>) -> impl IntoView {
    let section_options = Signal::derive(move || {
        let (year, department) = draft.with(|draft| (draft.academic_year, draft.department.clone()));
        sections.with(|sections| {
            available_sections(sections, Some(year), &department)
                .into_iter()
                .map(|section| SelectOption::new(section.section_code.clone(), section.label()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6">
            <SelectField
                label="Academic Year"
                id="academic-year"
                options=Signal::derive(options::academic_years)
                value=Signal::derive(move || draft.with(|draft| draft.academic_year.to_string()))
                on_change=move |value: String| {
                    if let Ok(year) = value.parse() {
                        draft.update(|draft| draft.set_academic_year(year));
                    }
                }
            />
            <SelectField
                label="Semester"
                id="semester"
                options=Signal::derive(options::semesters)
                value=Signal::derive(move || draft.with(|draft| draft.semester.to_string()))
                on_change=move |value: String| {
                    if let Ok(semester) = value.parse() {
                        draft.update(|draft| draft.semester = semester);
                    }
                }
            />
            <SelectField
                label="Department"
                id="department"
                placeholder="Select Department"
                options=Signal::derive(options::section_departments)
                value=Signal::derive(move || draft.with(|draft| draft.department.clone()))
                on_change=move |value: String| draft.update(|draft| draft.set_department(&value))
            />
            <SelectField
                label="Section"
                id="section"
                placeholder="Select Section"
                options=section_options
                value=Signal::derive(move || draft.with(|draft| draft.section_code.clone()))
                on_change=move |value: String| draft.update(|draft| draft.section_code = value)
                disabled=Signal::derive(move || draft.with(|draft| draft.department.is_empty()))
            />
        </div>
    }
}

#[component]
fn EntriesEditor(draft: RwSignal<TimetableDraft>, halls: Signal<Vec<Hall>>) -> impl IntoView {
    let hall_options = Signal::derive(move || {
        halls.with(|halls| {
            halls
                .iter()
                .map(|hall| SelectOption::new(hall.id.clone(), hall.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="mb-6">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">"Timetable Entries"</h3>
                <Button kind=ButtonKind::Secondary on_click=move |_: ()| draft.update(TimetableDraft::add_entry)>
                    <span class="material-symbols-outlined text-base">"add"</span>
                    "Add Entry"
                </Button>
            </div>
            <Show when=move || draft.with(|draft| draft.entries.is_empty())>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">"No entries yet. Add the first class."</p>
            </Show>
            <For
                each=move || 0..draft.with(|draft| draft.entries.len())
                key=|index| *index
                children=move |index| view! { <EntryRow draft=draft index=index halls=hall_options /> }
            />
        </div>
    }
}

#[component]
fn EntryRow(
    draft: RwSignal<TimetableDraft>,
    index: usize,
    halls: Signal<Vec<SelectOption>>,
) -> impl IntoView {
    let field = move |field: EntryField| {
        Signal::derive(move || {
            draft.with(|draft| {
                draft
                    .entries
                    .get(index)
                    .map(|entry| match field {
                        EntryField::Subject => entry.subject.clone(),
                        EntryField::Hall => entry.hall.clone(),
                        EntryField::Day => entry.day_of_week.clone(),
                        EntryField::StartTime => entry.start_time.clone(),
                        EntryField::EndTime => entry.end_time.clone(),
                        EntryField::Lecturer => entry.lecturer.clone(),
                    })
                    .unwrap_or_default()
            })
        })
    };
    let set = move |field: EntryField| {
        move |value: String| draft.update(|draft| draft.update_entry(index, field, &value))
    };

    view! {
        <div class="bg-gray-50 dark:bg-gray-900/50 p-4 rounded-lg mb-4">
            <div class="grid grid-cols-1 md:grid-cols-6 gap-4 items-end">
                <TextField label="Subject" id=scoped_id("entry-subject", index) required=true value=field(EntryField::Subject) on_input=set(EntryField::Subject) />
                <SelectField label="Hall" id=scoped_id("entry-hall", index) placeholder="Select Hall" options=halls value=field(EntryField::Hall) on_change=set(EntryField::Hall) />
                <SelectField label="Day" id=scoped_id("entry-day", index) options=Signal::derive(options::days) value=field(EntryField::Day) on_change=set(EntryField::Day) />
                <SelectField label="Start Time" id=scoped_id("entry-start", index) options=Signal::derive(options::time_slots) value=field(EntryField::StartTime) on_change=set(EntryField::StartTime) />
                <SelectField label="End Time" id=scoped_id("entry-end", index) options=Signal::derive(options::time_slots) value=field(EntryField::EndTime) on_change=set(EntryField::EndTime) />
                <TextField label="Lecturer" id=scoped_id("entry-lecturer", index) value=field(EntryField::Lecturer) on_input=set(EntryField::Lecturer) />
            </div>
            <div class="mt-3 flex justify-end">
                <button
                    type="button"
                    class="inline-flex items-center gap-1 text-sm text-red-600 hover:text-red-800"
                    on:click=move |_| draft.update(|draft| draft.remove_entry(index))
                >
                    <span class=Theme::ICON_SMALL>"delete"</span>
                    "Remove"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TimetableRow<E, C>(
    timetable: Timetable,
    expanded_id: RwSignal<Option<String>>,
    pending: Pending,
    on_edit: E,
    on_changed: C,
) -> impl IntoView
where
    E: Fn(&Timetable) + Copy + Send + Sync + 'static,
    C: Fn() + Copy + Send + Sync + 'static,
{
    let toasts = use_toasts();
    let id = timetable.id.clone();
    let busy = pending.busy(id.clone());
    let is_expanded = {
        let id = id.clone();
        move || expanded_id.with(|expanded| expanded.as_deref() == Some(id.as_str()))
    };
    let entries = Signal::derive({
        let entries = timetable.entries.clone();
        move || entries.clone()
    });
    let stored = StoredValue::new(timetable.clone());

    let on_toggle_view = {
        let id = id.clone();
        move |_| {
            expanded_id.update(|expanded| {
                *expanded = if expanded.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id.clone())
                };
            })
        }
    };
    let on_toggle_status = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            toasts.track(
                pending,
                id.clone(),
                async move { client::toggle_status(&id).await },
                "Timetable status updated",
                "Failed to update timetable status",
                on_changed,
            );
        }
    };
    let on_delete = move |_| {
        if !dialog::confirm("Are you sure you want to delete this timetable?") {
            return;
        }
        let id = id.clone();
        toasts.track(
            pending,
            id.clone(),
            async move { client::delete_timetable(&id).await },
            "Timetable deleted successfully",
            "Failed to delete timetable",
            on_changed,
        );
    };

    let (tone, status) = if timetable.is_active {
        (Tone::Green, "Active")
    } else {
        (Tone::Gray, "Inactive")
    };
    let description = format!("Year {} • Semester {}", timetable.academic_year, timetable.semester);
    let summary = format!("{} entries • Semester {}", timetable.entries.len(), timetable.semester);
    let title = timetable.title().to_string();
    let expanded_for_label = is_expanded.clone();

    view! {
        <div class="border border-gray-200 dark:border-gray-700 rounded-lg p-4 hover:bg-gray-50 dark:hover:bg-gray-900/40">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                <div>
                    <h3 class="font-semibold text-lg text-gray-900 dark:text-white">{timetable.option_label()}</h3>
                    <p class="text-gray-600 dark:text-gray-400 flex items-center gap-2">
                        {summary}
                        <StatusBadge tone=tone label=status />
                    </p>
                </div>
                <div class="flex items-center gap-3">
                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=on_toggle_view>
                        <span class=Theme::ICON_SMALL>"visibility"</span>
                        {move || if expanded_for_label() { "Hide" } else { "View" }}
                    </button>
                    <button
                        type="button"
                        class=Theme::BUTTON_SECONDARY
                        on:click=move |_| stored.with_value(|timetable| on_edit(timetable))
                    >
                        <span class=Theme::ICON_SMALL>"edit"</span>
                        "Edit"
                    </button>
                    <button type="button" class=Theme::BUTTON_SECONDARY disabled=move || busy.get() on:click=on_toggle_status>
                        <span class=Theme::ICON_SMALL>"toggle_on"</span>
                        {if timetable.is_active { "Deactivate" } else { "Activate" }}
                    </button>
                    <button type="button" class="text-red-600 hover:text-red-800 disabled:opacity-50" title="Delete" disabled=move || busy.get() on:click=on_delete>
                        <span class="material-symbols-outlined">"delete"</span>
                    </button>
                </div>
            </div>
            <Show when=is_expanded>
                <div class="mt-4">
                    <h4 class="font-semibold text-gray-900 dark:text-white">{title.clone()}</h4>
                    <p class="text-sm text-gray-500 mb-3">{description.clone()}</p>
                    <TimetableTable entries=entries />
                </div>
            </Show>
        </div>
    }
}
