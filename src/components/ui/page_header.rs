use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Page title with an optional subtitle and right-aligned actions.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
            <div class="space-y-1">
                <h1 class=Theme::TITLE>{title}</h1>
                {subtitle.map(|text| view! { <p class=Theme::SUBTITLE>{text}</p> })}
            </div>
            {children.map(|children| view! { <div class="flex items-center gap-2">{children()}</div> })}
        </div>
    }
}

/// Placeholder shown when a list has nothing to render.
#[component]
pub fn EmptyState(icon: &'static str, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-2 py-12 text-gray-500 dark:text-gray-400">
            <span class="material-symbols-outlined text-5xl text-gray-300 dark:text-gray-600">{icon}</span>
            <p class="text-sm">{message}</p>
        </div>
    }
}
