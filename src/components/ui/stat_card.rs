use crate::app_lib::theme::{Theme, Tone};
use leptos::prelude::*;

/// Dashboard counter card. `value` is `None` while the numbers load.
#[component]
pub fn StatCard(
    title: &'static str,
    icon: &'static str,
    tone: Tone,
    #[prop(into)] value: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class=Theme::CARD>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{title}</p>
                    <p class="mt-1 text-3xl font-bold text-gray-900 dark:text-white">
                        {move || value.get().map_or_else(|| "—".to_string(), |count| count.to_string())}
                    </p>
                </div>
                <div class=format!("{} p-3 rounded-full text-white", tone.solid_class())>
                    <span class="material-symbols-outlined text-2xl">{icon}</span>
                </div>
            </div>
        </div>
    }
}
