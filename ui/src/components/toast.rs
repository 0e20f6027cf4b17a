use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

/// Fixed stack of live notifications, oldest on top.
#[function_component]
pub fn ToastContainer() -> Html {
    let toasts = use_toast();
    let live = toasts.live();
    if live.is_empty() {
        return html! {};
    }

    html! {
        <ol class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            {for live.into_iter().map(|toast| {
                let id = toast.id;
                let dismiss = {
                    let toasts = toasts.clone();
                    Callback::from(move |_: MouseEvent| toasts.remove(id))
                };
                html! { <li key={id.to_string()}>{notice(&toast, dismiss)}</li> }
            })}
        </ol>
    }
}

fn notice(toast: &Toast, dismiss: Callback<MouseEvent>) -> Html {
    let tone = match toast.toast_type {
        ToastType::Success => "border-l-4 border-green-600 bg-green-50 \
                               text-green-900 dark:bg-green-950 dark:text-green-100",
        ToastType::Error => "border-l-4 border-red-600 bg-red-50 \
                             text-red-900 dark:bg-red-950 dark:text-red-100",
    };

    html! {
        <div role="status" class={classes!("flex", "gap-3", "px-3", "py-2", "rounded", "shadow", tone)}>
            <span class="flex-1 text-sm">{&toast.message}</span>
            <button onclick={dismiss} aria-label="Dismiss" class="text-xs opacity-60 hover:opacity-100">
                {"close"}
            </button>
        </div>
    }
}
