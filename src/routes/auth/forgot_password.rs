use super::AuthCard;
use crate::{
    app_lib::AppError,
    components::{Button, ErrorBanner, TextField, use_toasts},
    features::auth::{
        client,
        forms::{RecoveryForm, RecoveryStep},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();
    let form = RwSignal::new(RecoveryForm::default());
    let step = RwSignal::new(RecoveryStep::Request);
    let (error, set_error) = signal::<Option<String>>(None);

    // Both steps share one action; the step at dispatch time decides the call.
    let submit_action = Action::new_local(move |current: &RecoveryStep| {
        let current = *current;
        let form = form.get_untracked();
        async move {
            match current {
                RecoveryStep::Request => {
                    client::forgot_password(&form.validate_request()?).await?;
                }
                RecoveryStep::Reset => {
                    client::reset_password(&form.validate_reset()?).await?;
                }
            }
            Ok::<_, AppError>(current)
        }
    });

    Effect::new(move |_| {
        let Some(result) = submit_action.value().get() else {
            return;
        };
        match result {
            Ok(RecoveryStep::Request) => {
                toasts.success("OTP sent to your email");
                step.set(RecoveryStep::Reset);
            }
            Ok(RecoveryStep::Reset) => {
                toasts.success("Password reset successfully");
                navigate(paths::LOGIN, Default::default());
            }
            Err(err) => {
                tracing::info!(error = %err, "password recovery failed");
                set_error.set(Some(err.user_message("Something went wrong")));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let current = step.get_untracked();
        let check = form.with_untracked(|form| match current {
            RecoveryStep::Request => form.validate_request().map(|_| ()),
            RecoveryStep::Reset => form.validate_reset().map(|_| ()),
        });
        match check {
            Ok(()) => {
                submit_action.dispatch(current);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let resetting = move || step.get() == RecoveryStep::Reset;

    view! {
        <AuthCard title="Reset your password" subtitle="We will email you a one-time code.">
            <form class="space-y-4" on:submit=on_submit>
                <ErrorBanner error=error />
                <TextField
                    label="Registered Email"
                    id="email"
                    input_type="email"
                    autocomplete="email"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.email.clone()))
                    on_input=move |value: String| form.update(|form| form.email = value)
                />
                <Show when=resetting>
                    <TextField
                        label="OTP Code"
                        id="otp"
                        autocomplete="one-time-code"
                        required=true
                        value=Signal::derive(move || form.with(|form| form.code.clone()))
                        on_input=move |value: String| form.update(|form| form.code = value)
                    />
                    <TextField
                        label="New Password"
                        id="new-password"
                        input_type="password"
                        autocomplete="new-password"
                        required=true
                        value=Signal::derive(move || form.with(|form| form.new_password.clone()))
                        on_input=move |value: String| form.update(|form| form.new_password = value)
                    />
                </Show>
                <Button button_type="submit" full_width=true disabled=submit_action.pending()>
                    {move || match (step.get(), submit_action.pending().get()) {
                        (_, true) => "Please wait...",
                        (RecoveryStep::Request, false) => "Send OTP",
                        (RecoveryStep::Reset, false) => "Reset Password",
                    }}
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                <A href=paths::LOGIN {..} class="text-blue-600 hover:underline">"Back to sign in"</A>
            </p>
        </AuthCard>
    }
}
