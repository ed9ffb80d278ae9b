use leptos::prelude::*;

/// Spinning ring; `small` fits inside buttons and table cells.
#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let size = if small {
        "h-4 w-4 border-2"
    } else {
        "h-8 w-8 border-4"
    };
    view! {
        <span
            class=format!("inline-block animate-spin rounded-full border-blue-200 border-t-blue-600 {size}")
            role="status"
            aria-label="Loading"
        ></span>
    }
}

/// Centered spinner with a caption, used while a page's first fetch runs.
#[component]
pub fn Loading(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-16 text-sm text-gray-500 dark:text-gray-400">
            <Spinner />
            <span aria-live="polite">{label.unwrap_or("Loading...")}</span>
        </div>
    }
}
