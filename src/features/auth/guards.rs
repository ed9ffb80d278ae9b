use crate::{
    components::Spinner,
    features::auth::{
        access::{Access, access_decision},
        state::use_auth,
        types::Role,
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::{A, Redirect};

/// Renders children only for signed-in, verified users holding one of `roles`.
/// UX-only; the API enforces the same rules.
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| {
        let session = auth.session.get();
        access_decision(auth.is_loading.get(), session.as_ref(), roles)
    });

    move || match decision.get() {
        Access::Loading => view! {
            <div class="flex justify-center py-16">
                <Spinner />
            </div>
        }
        .into_any(),
        Access::RedirectLogin => view! { <Redirect path=paths::LOGIN /> }.into_any(),
        Access::RedirectHome => view! { <Redirect path=paths::HOME /> }.into_any(),
        Access::AwaitingOtp => view! {
            <PendingNotice title="Verify Your Email">
                <p class="text-gray-600 mb-4">
                    "We sent an OTP to your email. Please verify to continue."
                </p>
                <A
                    href=paths::VERIFY_OTP
                    {..}
                    class="inline-block px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                >
                    "Go to Verification"
                </A>
            </PendingNotice>
        }
        .into_any(),
        Access::AwaitingApproval => view! {
            <PendingNotice title="Account Pending Verification">
                <p class="text-gray-600">
                    "Your account is awaiting admin approval. You will be able to access the system once verified."
                </p>
            </PendingNotice>
        }
        .into_any(),
        Access::Granted => children().into_any(),
    }
}

/// Sends signed-in users away from login and registration to their dashboard.
#[component]
pub fn RedirectIfSignedIn(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || match auth.role.get() {
        Some(role) if !auth.is_loading.get() => {
            view! { <Redirect path=role.dashboard_path() /> }.into_any()
        }
        _ => children().into_any(),
    }
}

#[component]
fn PendingNotice(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="bg-white rounded-lg shadow p-6 max-w-md text-center">
                <h2 class="text-2xl font-bold text-gray-900 mb-4">{title}</h2>
                {children()}
            </div>
        </div>
    }
}
