use super::AuthCard;
use crate::{
    app_lib::{storage, theme::Theme},
    components::{Button, ErrorBanner, use_toasts},
    features::auth::{
        access::landing_path,
        client,
        forms::LoginForm,
        state::use_auth,
        types::{LoginRequest, Role},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        let Some(result) = login_action.value().get() else {
            return;
        };
        match result.and_then(|response| auth.accept(response)) {
            Ok(user) => {
                let verified = !user.needs_verification();
                if verified {
                    toasts.success("Login successful");
                } else {
                    // No access until verification; keep nothing around.
                    auth.clear_session();
                    if user.role == Role::Lecturer {
                        storage::set_pending_email(&user.email);
                        toasts.info("Please verify your email with the OTP we sent.");
                    } else {
                        toasts.info("Your account is awaiting admin approval.");
                    }
                }
                navigate(landing_path(&user, verified), Default::default());
            }
            Err(err) => {
                tracing::info!(error = %err, "login failed");
                set_error.set(Some(err.user_message("Login failed")));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match form.with_untracked(LoginForm::validate) {
            Ok(request) => {
                login_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <AuthCard title="Sign in" subtitle="Use your faculty account to continue.">
            <form on:submit=on_submit>
                <ErrorBanner error=error />
                <div class="mb-5">
                    <label class=Theme::LABEL for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        placeholder="name@gmail.com"
                        required
                        prop:value=move || form.with(|form| form.email.clone())
                        on:input=move |event| form.update(|form| form.email = event_target_value(&event))
                    />
                </div>
                <div class="mb-2">
                    <label class=Theme::LABEL for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        prop:value=move || form.with(|form| form.password.clone())
                        on:input=move |event| form.update(|form| form.password = event_target_value(&event))
                    />
                </div>
                <div class="mb-6 text-right">
                    <A href=paths::FORGOT_PASSWORD {..} class="text-sm text-blue-600 hover:underline">
                        "Forgot password?"
                    </A>
                </div>
                <Button button_type="submit" full_width=true disabled=login_action.pending()>
                    {move || if login_action.pending().get() { "Signing in..." } else { "Sign In" }}
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                "Don't have an account? "
                <A href=paths::REGISTER {..} class="text-blue-600 hover:underline">"Register"</A>
            </p>
        </AuthCard>
    }
}
