use crate::app_lib::theme::Tone;
use leptos::prelude::*;

/// Small colored pill for statuses and roles.
#[component]
pub fn StatusBadge(tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=tone.badge_class()>{label}</span> }
}
