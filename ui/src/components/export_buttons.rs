use yew::prelude::*;

use super::modal::SECONDARY_BUTTON;
use crate::download::ExportFormat;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_export: Callback<ExportFormat>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn ExportButtons(props: &Props) -> Html {
    let button = |format: ExportFormat, label: &'static str| {
        html! {
            <button
                onclick={props.on_export.reform(move |_: MouseEvent| format)}
                disabled={props.disabled}
                class={SECONDARY_BUTTON}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="flex gap-2">
            {button(ExportFormat::Excel, "Export Excel")}
            {button(ExportFormat::Pdf, "Export PDF")}
        </div>
    }
}
