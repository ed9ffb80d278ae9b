//! Labelled form controls bound to a getter and a setter, so pages can point
//! them at one field of a form signal.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for=id.clone()>{label}</label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                class=Theme::INPUT
                placeholder=placeholder
                autocomplete=autocomplete.unwrap_or("off")
                required=required
                prop:value=move || value.get()
                on:input=move |event| on_input.run(event_target_value(&event))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for=id.clone()>{label}</label>
            <textarea
                id=id
                class=Theme::INPUT
                rows=rows
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |event| on_input.run(event_target_value(&event))
            ></textarea>
        </div>
    }
}

/// One `<option>`; `value` is sent, `label` is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)] id: String,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    /// Leading empty option, e.g. "Select hall".
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for=id.clone()>{label}</label>
            <select
                id=id
                class=Theme::INPUT
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |event| on_change.run(event_target_value(&event))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let is_selected = option.value == selected;
                            view! {
                                <option value=option.value selected=is_selected>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
