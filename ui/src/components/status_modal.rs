use yew::prelude::*;

use super::modal::{Modal, PRIMARY_BUTTON, SECONDARY_BUTTON};

/// A status the operator can pick, as `(wire value, label)`.
pub type StatusOption = (String, String);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub current: AttrValue,
    pub options: Vec<StatusOption>,
    /// Emits `(status, note)`; the note may be blank.
    pub on_submit: Callback<(String, String)>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
}

#[function_component]
pub fn StatusModal(props: &Props) -> Html {
    let selected = {
        let current = props.current.to_string();
        let first_other = props
            .options
            .iter()
            .map(|(value, _)| value)
            .find(|value| **value != current)
            .cloned();
        use_state(move || first_other.unwrap_or(current))
    };
    let note = use_state(String::new);

    let unchanged = *selected == props.current.as_str();

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            if let Some(select) =
                e.target_dyn_into::<web_sys::HtmlSelectElement>()
            {
                selected.set(select.value());
            }
        })
    };

    let on_note = {
        let note = note.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            note.set(input.value());
        })
    };

    let on_save = {
        let on_submit = props.on_submit.clone();
        let selected = selected.clone();
        let note = note.clone();
        Callback::from(move |_: MouseEvent| {
            on_submit.emit(((*selected).clone(), (*note).clone()));
        })
    };

    html! {
        <Modal
            on_close={props.on_close.clone()}
            locked={props.is_loading}
        >
            <h3 class="text-lg font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {&props.title}
            </h3>
            <div class="space-y-4">
                <select
                    onchange={on_select}
                    disabled={props.is_loading}
                    class="w-full px-3 py-2 text-sm border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white \
                           dark:bg-neutral-700"
                >
                    {for props.options.iter().map(|(value, label)| html! {
                        <option
                            value={value.clone()}
                            selected={*value == *selected}
                        >
                            {label}
                        </option>
                    })}
                </select>
                <input
                    type="text"
                    value={(*note).clone()}
                    oninput={on_note}
                    disabled={props.is_loading}
                    placeholder="Note (optional)"
                    class="w-full px-3 py-2 text-sm border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white \
                           dark:bg-neutral-700"
                />
                if let Some(error) = &props.error_message {
                    <div class="text-sm text-red-600 dark:text-red-400">
                        {error}
                    </div>
                }
            </div>
            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={props.on_close.reform(|_: MouseEvent| ())}
                    disabled={props.is_loading}
                    class={SECONDARY_BUTTON}
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_save}
                    disabled={unchanged || props.is_loading}
                    class={PRIMARY_BUTTON}
                >
                    {if props.is_loading { "Saving..." } else { "Save" }}
                </button>
            </div>
        </Modal>
    }
}
