//! Pill-style filter tabs over a small set of `Copy` choices.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn FilterTabs<T>(
    choices: Vec<T>,
    selected: RwSignal<T>,
    label: fn(T) -> &'static str,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class=format!("{} mb-6", Theme::CARD)>
            <div class="flex flex-wrap gap-3" role="tablist">
                {choices
                    .into_iter()
                    .map(|choice| {
                        let is_selected = move || selected.get() == choice;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || is_selected().to_string()
                                class=move || if is_selected() { Theme::TAB_ACTIVE } else { Theme::TAB_IDLE }
                                on:click=move |_| selected.set(choice)
                            >
                                {label(choice)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
