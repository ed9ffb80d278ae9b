//! Public authentication pages: sign in, registration, OTP verification and
//! password recovery.

mod forgot_password;
mod login;
mod register;
mod verify_otp;

pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use login::LoginPage;
pub(crate) use register::RegisterPage;
pub(crate) use verify_otp::VerifyOtpPage;

use leptos::prelude::*;

/// Centered card shared by the auth pages.
#[component]
fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen px-4 py-12">
            <div class="w-full max-w-md p-8 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm">
                <div class="mb-6 text-center">
                    <span class="material-symbols-outlined text-5xl text-blue-600">"apartment"</span>
                    <h1 class="mt-2 text-2xl font-bold text-gray-900 dark:text-white">{title}</h1>
                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}
