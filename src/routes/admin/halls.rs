//! Hall catalogue administration: create, edit, deactivate and delete halls,
//! and seed the default campus halls on an empty backend.

use crate::{
    app_lib::{AppError, dialog, theme::{Theme, Tone}},
    components::{
        Button, ButtonKind, EmptyState, ErrorBanner, Loading, PageHeader, Pending, SelectField,
        StatusBadge, TextField, use_toasts,
    },
    features::halls::{
        client,
        types::{Hall, HallForm, HallPayload, HallQuery},
    },
    routes::options,
};
use leptos::{ev::SubmitEvent, prelude::*};

/// `None` while creating, the hall id while editing.
type Editing = Option<String>;

#[component]
pub fn ManageHallsPage() -> impl IntoView {
    let toasts = use_toasts();
    let query = RwSignal::new(HallQuery::default());
    let form = RwSignal::new(HallForm::default());
    let editing = RwSignal::<Option<Editing>>::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let pending = Pending::default();

    let halls = LocalResource::new(move || {
        let query = query.get();
        async move {
            client::list_halls(&query)
                .await
                .inspect_err(|err| toasts.failure(err, "Failed to fetch halls"))
                .unwrap_or_default()
        }
    });

    let save_action = Action::new_local(move |input: &(Editing, HallPayload)| {
        let (id, payload) = input.clone();
        async move {
            match id {
                Some(id) => client::update_hall(&id, &payload).await,
                None => client::create_hall(&payload).await,
            }
        }
    });

    Effect::new(move |_| {
        let Some(result) = save_action.value().get() else {
            return;
        };
        match result {
            Ok(hall) => {
                toasts.success(format!("Hall {} saved", hall.name));
                editing.set(None);
                form.set(HallForm::default());
                halls.refetch();
            }
            Err(err) => set_error.set(Some(err.user_message("Failed to save hall"))),
        }
    });

    let initialize_action = Action::new_local(|_: &()| client::initialize_halls());
    Effect::new(move |_| {
        let Some(result) = initialize_action.value().get() else {
            return;
        };
        match result {
            Ok(response) => {
                toasts.success(response.message.unwrap_or_else(|| "Halls initialized".to_string()));
                halls.refetch();
            }
            Err(err) => toasts.failure(&err, "Failed to initialize halls"),
        }
    });

    let on_initialize = move |_: ()| {
        if initialize_action.pending().get_untracked() {
            return;
        }
        if dialog::confirm("Create the default campus halls?") {
            initialize_action.dispatch(());
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let Some(id) = editing.get_untracked() else {
            return;
        };
        match form.with_untracked(HallForm::validate) {
            Ok(payload) => {
                save_action.dispatch((id, payload));
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let start_edit = move |hall: &Hall| {
        form.set(HallForm::from_hall(hall));
        editing.set(Some(Some(hall.id.clone())));
        set_error.set(None);
        dialog::scroll_to_top();
    };

    view! {
        <div>
            <PageHeader title="Manage Halls" subtitle="Lecture halls, labs and auditoriums available for booking.">
                <Button kind=ButtonKind::Secondary disabled=initialize_action.pending() on_click=on_initialize>
                    <span class="material-symbols-outlined text-base">"auto_fix_high"</span>
                    "Initialize Default Halls"
                </Button>
                <Button on_click=move |_: ()| {
                    form.set(HallForm::default());
                    editing.set(Some(None));
                    set_error.set(None);
                }>
                    <span class="material-symbols-outlined text-base">"add"</span>
                    "Add Hall"
                </Button>
            </PageHeader>

            <Show when=move || editing.with(Option::is_some)>
                <form class=format!("{} mb-6", Theme::CARD) on:submit=on_submit>
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                        {move || if editing.with(|editing| matches!(editing, Some(Some(_)))) { "Edit Hall" } else { "New Hall" }}
                    </h2>
                    <ErrorBanner error=error />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <TextField
                            label="Hall Name"
                            id="hall-name"
                            required=true
                            value=Signal::derive(move || form.with(|form| form.name.clone()))
                            on_input=move |value: String| form.update(|form| form.name = value)
                        />
                        <TextField
                            label="Capacity"
                            id="hall-capacity"
                            input_type="number"
                            required=true
                            value=Signal::derive(move || form.with(|form| form.capacity.clone()))
                            on_input=move |value: String| form.update(|form| form.capacity = value)
                        />
                        <SelectField
                            label="Building"
                            id="hall-building"
                            placeholder="Select building"
                            options=Signal::derive(options::buildings)
                            value=Signal::derive(move || form.with(|form| form.building.clone()))
                            on_change=move |value: String| form.update(|form| form.set_building(&value))
                        />
                        <SelectField
                            label="Floor"
                            id="hall-floor"
                            placeholder="Select floor"
                            options=Signal::derive(move || form.with(|form| options::floors(&form.building)))
                            value=Signal::derive(move || form.with(|form| form.floor.clone()))
                            on_change=move |value: String| form.update(|form| form.floor = value)
                            disabled=Signal::derive(move || form.with(|form| form.building.is_empty()))
                        />
                        <TextField
                            label="Facilities (comma separated)"
                            id="hall-facilities"
                            placeholder="Projector, AC, Whiteboard"
                            value=Signal::derive(move || form.with(|form| form.facilities.clone()))
                            on_input=move |value: String| form.update(|form| form.facilities = value)
                        />
                        <TextField
                            label="Description"
                            id="hall-description"
                            value=Signal::derive(move || form.with(|form| form.description.clone()))
                            on_input=move |value: String| form.update(|form| form.description = value)
                        />
                    </div>
                    <label class="mt-4 inline-flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|form| form.is_active)
                            on:change=move |event| form.update(|form| form.is_active = event_target_checked(&event))
                        />
                        "Active (available for booking)"
                    </label>
                    <div class="mt-6 flex justify-end gap-2">
                        <Button kind=ButtonKind::Secondary on_click=move |_: ()| editing.set(None)>
                            "Cancel"
                        </Button>
                        <Button button_type="submit" disabled=save_action.pending()>
                            {move || if save_action.pending().get() { "Saving..." } else { "Save Hall" }}
                        </Button>
                    </div>
                </form>
            </Show>

            <div class=format!("{} mb-6", Theme::CARD)>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                    <SelectField
                        label="Building"
                        id="filter-building"
                        placeholder="All Buildings"
                        options=Signal::derive(options::buildings)
                        value=Signal::derive(move || query.with(|query| query.building.clone()))
                        on_change=move |value: String| query.update(|query| query.set_building(&value))
                    />
                    <SelectField
                        label="Floor"
                        id="filter-floor"
                        placeholder="All Floors"
                        options=Signal::derive(move || query.with(|query| options::floors(&query.building)))
                        value=Signal::derive(move || query.with(|query| query.floor.clone()))
                        on_change=move |value: String| query.update(|query| query.floor = value)
                        disabled=Signal::derive(move || query.with(|query| query.building.is_empty()))
                    />
                    <button
                        type="button"
                        class=Theme::BUTTON_SECONDARY
                        on:click=move |_| query.set(HallQuery::default())
                    >
                        "Clear Filters"
                    </button>
                </div>
            </div>

            <Suspense fallback=|| view! { <Loading /> }>
                {move || Suspend::new(async move {
                    let list = halls.await;
                    if list.is_empty() {
                        return view! {
                            <EmptyState icon="meeting_room" message="No halls yet. Add one or initialize the defaults." />
                        }
                        .into_any();
                    }
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {list
                                .into_iter()
                                .map(|hall| view! {
                                    <HallCard
                                        hall=hall
                                        pending=pending
                                        on_edit=start_edit
                                        on_changed=move || halls.refetch()
                                    />
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
fn HallCard<E, C>(hall: Hall, pending: Pending, on_edit: E, on_changed: C) -> impl IntoView
where
    E: Fn(&Hall) + Copy + Send + Sync + 'static,
    C: Fn() + Copy + Send + Sync + 'static,
{
    let toasts = use_toasts();
    let busy = pending.busy(hall.id.clone());
    let hall = StoredValue::new(hall);

    let on_toggle = move |_| {
        let mut form = hall.with_value(HallForm::from_hall);
        form.is_active = !form.is_active;
        let id = hall.with_value(|hall| hall.id.clone());
        toasts.track(
            pending,
            id.clone(),
            async move {
                let payload = form.validate()?;
                client::update_hall(&id, &payload).await?;
                Ok::<_, AppError>(())
            },
            "Hall status updated",
            "Failed to update hall",
            on_changed,
        );
    };

    let on_delete = move |_| {
        if !dialog::confirm("Are you sure you want to delete this hall?") {
            return;
        }
        let id = hall.with_value(|hall| hall.id.clone());
        toasts.track(
            pending,
            id.clone(),
            async move { client::delete_hall(&id).await },
            "Hall deleted successfully",
            "Failed to delete hall",
            on_changed,
        );
    };

    hall.with_value(|current| {
        let (tone, label) = if current.is_active {
            (Tone::Green, "Active")
        } else {
            (Tone::Gray, "Inactive")
        };
        let facilities = if current.facilities.is_empty() {
            "None listed".to_string()
        } else {
            current.facilities.join(", ")
        };
        view! {
            <div class=Theme::CARD>
                <div class="flex justify-between items-start mb-3">
                    <div>
                        <h3 class="text-lg font-bold text-gray-900 dark:text-white">{current.name.clone()}</h3>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{current.location()}</p>
                    </div>
                    <StatusBadge tone=tone label=label />
                </div>
                <p class="text-sm text-gray-600 dark:text-gray-300">
                    {format!("Capacity: {} people", current.capacity)}
                </p>
                <p class="text-sm text-gray-600 dark:text-gray-300">{format!("Facilities: {facilities}")}</p>
                {current.description.clone().map(|text| view! {
                    <p class="mt-2 text-xs text-gray-500 dark:text-gray-400">{text}</p>
                })}
                <div class="mt-4 flex gap-2">
                    <button type="button" class=Theme::BUTTON_SECONDARY on:click=move |_| hall.with_value(|hall| on_edit(hall))>
                        <span class=Theme::ICON_SMALL>"edit"</span>
                        "Edit"
                    </button>
                    <button type="button" class=Theme::BUTTON_SECONDARY disabled=move || busy.get() on:click=on_toggle>
                        <span class=Theme::ICON_SMALL>"toggle_on"</span>
                        {if current.is_active { "Deactivate" } else { "Activate" }}
                    </button>
                    <button type="button" class=Theme::BUTTON_DANGER disabled=move || busy.get() on:click=on_delete>
                        <span class=Theme::ICON_SMALL>"delete"</span>
                        "Delete"
                    </button>
                </div>
            </div>
        }
    })
}
