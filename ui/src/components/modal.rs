use yew::prelude::*;

/// Dialog shell shared by the review and status modals. A click on the
/// backdrop closes it unless `locked`, which the forms set while their
/// request is in flight.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub locked: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        let locked = props.locked;
        Callback::from(move |_: MouseEvent| {
            if !locked {
                on_close.emit(());
            }
        })
    };
    // Clicks inside the dialog never reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            onclick={on_backdrop}
            class="fixed inset-0 z-40 flex items-center justify-center \
                   bg-neutral-950/60 p-4"
        >
            <div
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
                class="w-full max-w-lg rounded-md bg-white p-6 shadow-2xl \
                       dark:bg-neutral-900"
            >
                {props.children.clone()}
            </div>
        </div>
    }
}

pub const SECONDARY_BUTTON: &str = "px-3 py-1.5 text-sm rounded font-medium \
    border border-neutral-300 dark:border-neutral-600 hover:bg-neutral-100 \
    dark:hover:bg-neutral-800 disabled:opacity-40 disabled:pointer-events-none";

pub const PRIMARY_BUTTON: &str = "px-3 py-1.5 text-sm rounded font-medium \
    text-white bg-emerald-700 hover:bg-emerald-800 \
    disabled:opacity-40 disabled:pointer-events-none";

pub const DANGER_BUTTON: &str = "px-3 py-1.5 text-sm rounded font-medium \
    text-white bg-red-700 hover:bg-red-800 \
    disabled:opacity-40 disabled:pointer-events-none";
