use super::AuthCard;
use crate::{
    app_lib::storage,
    components::{Button, ErrorBanner, SelectField, SelectOption, TextField, use_toasts},
    features::{
        admin::types::parse_role_filter,
        auth::{
            access::{landing_path, registration_notice},
            client,
            forms::{LECTURER_EMAIL_DOMAIN, RegisterForm},
            state::use_auth,
            types::{RegisterRequest, Role},
        },
        catalog::DEPARTMENTS,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

fn role_options() -> Vec<SelectOption> {
    RegisterForm::ROLES
        .iter()
        .map(|role| SelectOption::new(role.as_str(), role.label()))
        .collect()
}

fn department_options() -> Vec<SelectOption> {
    DEPARTMENTS
        .iter()
        .map(|dept| SelectOption::new(dept.value, dept.label))
        .collect()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        let Some(result) = register_action.value().get() else {
            return;
        };
        match result.and_then(|response| auth.accept_registration(response)) {
            Ok(user) => {
                let signed_in = auth.is_authenticated.get_untracked();
                if signed_in {
                    toasts.success("Registration successful");
                } else {
                    if user.role == Role::Lecturer {
                        storage::set_pending_email(&user.email);
                    }
                    toasts.info(registration_notice(user.role));
                }
                navigate(landing_path(&user, signed_in), Default::default());
            }
            Err(err) => {
                tracing::info!(error = %err, "registration failed");
                set_error.set(Some(err.user_message("Registration failed")));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match form.with_untracked(RegisterForm::validate) {
            Ok(request) => {
                register_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let is_lecturer = move || form.with(|form| form.role == Role::Lecturer);

    view! {
        <AuthCard title="Create an account" subtitle="Lecturers and student representatives can register here.">
            <form class="space-y-4" on:submit=on_submit>
                <ErrorBanner error=error />
                <TextField
                    label="Full Name"
                    id="name"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.name.clone()))
                    on_input=move |value: String| form.update(|form| form.name = value)
                />
                <SelectField
                    label="Role"
                    id="role"
                    options=Signal::derive(role_options)
                    value=Signal::derive(move || form.with(|form| form.role.as_str().to_string()))
                    on_change=move |value: String| {
                        form.update(|form| form.role = parse_role_filter(&value).unwrap_or(Role::Lecturer))
                    }
                />
                <TextField
                    label="Email"
                    id="email"
                    input_type="email"
                    autocomplete="email"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.email.clone()))
                    on_input=move |value: String| form.update(|form| form.email = value)
                />
                <Show when=is_lecturer>
                    <p class="-mt-2 text-xs text-gray-500 dark:text-gray-400">
                        {format!("Lecturers must register with an {LECTURER_EMAIL_DOMAIN} address to receive the OTP.")}
                    </p>
                </Show>
                <SelectField
                    label="Department"
                    id="department"
                    placeholder="Select department"
                    options=Signal::derive(department_options)
                    value=Signal::derive(move || form.with(|form| form.department.clone()))
                    on_change=move |value: String| form.update(|form| form.department = value)
                />
                <TextField
                    label="Phone Number (optional)"
                    id="phone"
                    input_type="tel"
                    value=Signal::derive(move || form.with(|form| form.phone_number.clone()))
                    on_input=move |value: String| form.update(|form| form.phone_number = value)
                />
                <TextField
                    label="Password"
                    id="password"
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.password.clone()))
                    on_input=move |value: String| form.update(|form| form.password = value)
                />
                <TextField
                    label="Confirm Password"
                    id="confirm-password"
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.confirm_password.clone()))
                    on_input=move |value: String| form.update(|form| form.confirm_password = value)
                />
                <Button button_type="submit" full_width=true disabled=register_action.pending()>
                    {move || if register_action.pending().get() { "Registering..." } else { "Register" }}
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                "Already have an account? "
                <A href=paths::LOGIN {..} class="text-blue-600 hover:underline">"Sign in"</A>
            </p>
        </AuthCard>
    }
}
