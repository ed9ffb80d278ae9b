use super::AuthCard;
use crate::{
    app_lib::storage,
    components::{Button, ErrorBanner, Spinner, TextField, use_toasts},
    features::auth::{
        client,
        forms::OtpForm,
        state::use_auth,
        types::VerifyOtpRequest,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

/// Lecturers confirm their Gmail address with the six-digit code emailed at
/// registration; success signs them in.
#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let form = RwSignal::new(OtpForm {
        email: storage::pending_email().unwrap_or_default(),
        code: String::new(),
    });
    let (error, set_error) = signal::<Option<String>>(None);

    let verify_action = Action::new_local(move |request: &VerifyOtpRequest| {
        let request = request.clone();
        async move { client::verify_otp(&request).await }
    });

    Effect::new(move |_| {
        let Some(result) = verify_action.value().get() else {
            return;
        };
        match result.and_then(|response| auth.accept(response)) {
            Ok(user) => {
                storage::clear_pending_email();
                toasts.success("Email verified successfully");
                navigate(user.role.dashboard_path(), Default::default());
            }
            Err(err) => {
                tracing::info!(error = %err, "otp verification failed");
                set_error.set(Some(err.user_message("OTP verification failed")));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match form.with_untracked(OtpForm::validate) {
            Ok(request) => {
                verify_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <AuthCard title="Verify your email" subtitle="Enter the 6-digit code we sent to your inbox.">
            <form class="space-y-4" on:submit=on_submit>
                <ErrorBanner error=error />
                <TextField
                    label="Email"
                    id="email"
                    input_type="email"
                    autocomplete="email"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.email.clone()))
                    on_input=move |value: String| form.update(|form| form.email = value)
                />
                <TextField
                    label="OTP Code"
                    id="otp"
                    placeholder="123456"
                    autocomplete="one-time-code"
                    required=true
                    value=Signal::derive(move || form.with(|form| form.code.clone()))
                    on_input=move |value: String| form.update(|form| form.code = value)
                />
                <Button button_type="submit" full_width=true disabled=verify_action.pending()>
                    <Show when=move || verify_action.pending().get() fallback=|| "Verify">
                        <Spinner small=true />
                        "Verifying..."
                    </Show>
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                <A href=paths::LOGIN {..} class="text-blue-600 hover:underline">"Back to sign in"</A>
            </p>
        </AuthCard>
    }
}
