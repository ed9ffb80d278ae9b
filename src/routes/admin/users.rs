//! User administration: filter the directory, add staff accounts and act on
//! individual users.

use crate::{
    app_lib::{AppError, dialog, theme::{Theme, Tone}},
    components::{
        Button, ButtonKind, EmptyState, ErrorBanner, Loading, PageHeader, Pending, SelectField,
        SelectOption, StatusBadge, TextField, use_toasts,
    },
    features::{
        admin::{
            client,
            types::{StaffForm, UserActions, UserFilter, parse_role_filter, parse_verified_filter},
        },
        auth::{state::use_auth, types::{Role, User}},
    },
    routes::options,
};
use leptos::{ev::SubmitEvent, prelude::*};

fn role_filter_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("all", "All Roles"),
        SelectOption::new("lecturer", "Lecturers"),
        SelectOption::new("representative", "Representatives"),
        SelectOption::new("admin", "Admins"),
    ]
}

fn status_filter_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("all", "All Status"),
        SelectOption::new("true", "Verified"),
        SelectOption::new("false", "Pending"),
    ]
}

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let toasts = use_toasts();
    let filter = RwSignal::new(UserFilter::default());
    let show_form = RwSignal::new(false);
    let pending = Pending::default();

    let users = LocalResource::new(move || {
        let filter = filter.get();
        async move {
            client::list_users(&filter)
                .await
                .inspect_err(|err| toasts.failure(err, "Failed to fetch users"))
                .unwrap_or_default()
        }
    });

    view! {
        <div>
            <PageHeader title="Manage Users" subtitle="Verify, block or remove accounts and add staff.">
                <Button on_click=move |_: ()| show_form.update(|open| *open = !*open)>
                    <span class="material-symbols-outlined text-base">"person_add"</span>
                    {move || if show_form.get() { "Close" } else { "Add Staff" }}
                </Button>
            </PageHeader>

            <Show when=move || show_form.get()>
                <AddStaffForm on_created=move || {
                    show_form.set(false);
                    users.refetch();
                } />
            </Show>

            <div class=format!("{} mb-6", Theme::CARD)>
                <div class="flex flex-wrap gap-4">
                    <SelectField
                        label="Filter by Role"
                        id="role-filter"
                        options=Signal::derive(role_filter_options)
                        value=Signal::derive(move || {
                            filter.with(|filter| filter.role.map_or("all", Role::as_str).to_string())
                        })
                        on_change=move |value: String| filter.update(|filter| filter.role = parse_role_filter(&value))
                    />
                    <SelectField
                        label="Filter by Status"
                        id="status-filter"
                        options=Signal::derive(status_filter_options)
                        value=Signal::derive(move || {
                            filter.with(|filter| {
                                filter.is_verified.map_or_else(|| "all".to_string(), |verified| verified.to_string())
                            })
                        })
                        on_change=move |value: String| {
                            filter.update(|filter| filter.is_verified = parse_verified_filter(&value))
                        }
                    />
                </div>
            </div>

            <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <Suspense fallback=|| view! { <Loading /> }>
                    {move || Suspend::new(async move {
                        let list = users.await;
                        if list.is_empty() {
                            return view! { <EmptyState icon="group" message="No users found" /> }.into_any();
                        }
                        view! {
                            <UsersTable users=list pending=pending on_changed=move || users.refetch() />
                        }
                        .into_any()
                    })}
                </Suspense>
            </div>
        </div>
    }
}

#[component]
fn UsersTable<F>(users: Vec<User>, pending: Pending, on_changed: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let auth = use_auth();
    let toasts = use_toasts();
    let current_id = auth.session.get_untracked().map(|user| user.id);

    let rows = users
        .into_iter()
        .map(|user| {
            let actions = UserActions::for_user(&user, current_id.as_deref());
            let id = StoredValue::new(user.id.clone());
            let blocked = user.is_blocked;
            let busy = pending.busy(user.id.clone());

            let on_verify = move |_| {
                toasts.track(
                    pending,
                    id.get_value(),
                    async move { client::verify_representative(&id.get_value()).await },
                    "Representative verified successfully",
                    "Failed to verify representative",
                    on_changed,
                );
            };
            let on_toggle_block = move |_| {
                toasts.track(
                    pending,
                    id.get_value(),
                    async move { client::toggle_block(&id.get_value()).await },
                    "User status updated",
                    "Failed to update user status",
                    on_changed,
                );
            };
            let on_remove = move |_| {
                if !dialog::confirm("Are you sure you want to remove this user?") {
                    return;
                }
                toasts.track(
                    pending,
                    id.get_value(),
                    async move { client::remove_user(&id.get_value()).await },
                    "User removed successfully",
                    "Failed to remove user",
                    on_changed,
                );
            };
            let on_remove_admin = move |_| {
                if !dialog::confirm("Are you sure you want to remove this admin?") {
                    return;
                }
                toasts.track(
                    pending,
                    id.get_value(),
                    async move { client::remove_admin(&id.get_value()).await },
                    "Admin removed successfully",
                    "Failed to remove admin",
                    on_changed,
                );
            };

            let (status_tone, status_label) = if user.is_verified {
                (Tone::Green, "Verified")
            } else {
                (Tone::Yellow, "Pending")
            };

            view! {
                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                    <td class=Theme::TD>{user.name}</td>
                    <td class=Theme::TD>{user.email}</td>
                    <td class=format!("{} capitalize", Theme::TD)>{user.role.as_str()}</td>
                    <td class=Theme::TD>{user.department.unwrap_or_else(|| "-".to_string())}</td>
                    <td class=Theme::TD>
                        <div class="flex gap-2">
                            <StatusBadge tone=status_tone label=status_label />
                            {blocked.then(|| view! { <StatusBadge tone=Tone::Red label="Blocked" /> })}
                        </div>
                    </td>
                    <td class=Theme::TD>
                        <div class="flex gap-3">
                            {actions.verify.then(|| view! {
                                <button type="button" class="text-green-600 hover:text-green-800 disabled:opacity-50" title="Verify" disabled=move || busy.get() on:click=on_verify>
                                    <span class=Theme::ICON_SMALL>"check_circle"</span>
                                </button>
                            })}
                            {actions.toggle_block.then(|| view! {
                                <button
                                    type="button"
                                    class="text-yellow-600 hover:text-yellow-800 disabled:opacity-50"
                                    title=if blocked { "Unblock" } else { "Block" }
                                    disabled=move || busy.get()
                                    on:click=on_toggle_block
                                >
                                    <span class=Theme::ICON_SMALL>"block"</span>
                                </button>
                            })}
                            {actions.remove.then(|| view! {
                                <button type="button" class="text-red-600 hover:text-red-800 disabled:opacity-50" title="Remove" disabled=move || busy.get() on:click=on_remove>
                                    <span class=Theme::ICON_SMALL>"delete"</span>
                                </button>
                            })}
                            {actions.remove_admin.then(|| view! {
                                <button type="button" class="text-red-600 hover:text-red-800 disabled:opacity-50" title="Remove admin" disabled=move || busy.get() on:click=on_remove_admin>
                                    <span class=Theme::ICON_SMALL>"person_remove"</span>
                                </button>
                            })}
                        </div>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
            <thead class="bg-gray-50 dark:bg-gray-900/50">
                <tr>
                    <th class=Theme::TH>"Name"</th>
                    <th class=Theme::TH>"Email"</th>
                    <th class=Theme::TH>"Role"</th>
                    <th class=Theme::TH>"Department"</th>
                    <th class=Theme::TH>"Status"</th>
                    <th class=Theme::TH>"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">{rows}</tbody>
        </table>
    }
}

#[derive(Clone)]
struct NewStaff {
    role: Role,
    form: StaffForm,
}

/// Creates lecturer or admin accounts; representatives always self-register.
#[component]
fn AddStaffForm<F>(on_created: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    let toasts = use_toasts();
    let role = RwSignal::new(Role::Lecturer);
    let form = RwSignal::new(StaffForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let create_action = Action::new_local(move |input: &NewStaff| {
        let input = input.clone();
        async move {
            let request = input.form.validate(input.role)?;
            match input.role {
                Role::Admin => client::add_admin(&request).await?,
                _ => client::add_lecturer(&request).await?,
            }
            Ok::<_, AppError>(input.role)
        }
    });

    Effect::new(move |_| {
        let Some(result) = create_action.value().get() else {
            return;
        };
        match result {
            Ok(created) => {
                toasts.success(format!("{} added successfully", created.label()));
                form.set(StaffForm::default());
                on_created();
            }
            Err(err) => set_error.set(Some(err.user_message("Failed to add user"))),
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let input = NewStaff {
            role: role.get_untracked(),
            form: form.get_untracked(),
        };
        if let Err(err) = input.form.validate(input.role) {
            set_error.set(Some(err.to_string()));
            return;
        }
        create_action.dispatch(input);
    };

    view! {
        <form class=format!("{} mb-6", Theme::CARD) on:submit=on_submit>
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">"Add Staff Account"</h2>
            <ErrorBanner error=error />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <SelectField
                    label="Account Type"
                    id="staff-role"
                    options=Signal::derive(|| {
                        vec![
                            SelectOption::new("lecturer", "Lecturer"),
                            SelectOption::new("admin", "Admin"),
                        ]
                    })
                    value=Signal::derive(move || role.get().as_str().to_string())
                    on_change=move |value: String| {
                        role.set(if value == "admin" { Role::Admin } else { Role::Lecturer })
                    }
                />
                <TextField
                    label="Full Name"
                    id="staff-name"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.name.clone()))
                    on_input=move |value: String| form.update(|form| form.name = value)
                />
                <TextField
                    label="Email"
                    id="staff-email"
                    input_type="email"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.email.clone()))
                    on_input=move |value: String| form.update(|form| form.email = value)
                />
                <TextField
                    label="Temporary Password"
                    id="staff-password"
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.password.clone()))
                    on_input=move |value: String| form.update(|form| form.password = value)
                />
                <SelectField
                    label="Department"
                    id="staff-department"
                    placeholder="Select department"
                    options=Signal::derive(options::departments)
                    value=Signal::derive(move || form.with(|form| form.department.clone()))
                    on_change=move |value: String| form.update(|form| form.department = value)
                />
                <TextField
                    label="Phone Number (optional)"
                    id="staff-phone"
                    input_type="tel"
                    value=Signal::derive(move || form.with(|form| form.phone_number.clone()))
                    on_input=move |value: String| form.update(|form| form.phone_number = value)
                />
            </div>
            <div class="mt-6 flex justify-end">
                <Button button_type="submit" kind=ButtonKind::Success disabled=create_action.pending()>
                    {move || if create_action.pending().get() { "Saving..." } else { "Create Account" }}
                </Button>
            </div>
        </form>
    }
}
