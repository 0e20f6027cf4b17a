use payloads::requests::{
    REJECTION_REASON_MAX_LEN, RejectRequest, validate_reason,
};
use yew::prelude::*;

use super::modal::{DANGER_BUTTON, Modal, PRIMARY_BUTTON, SECONDARY_BUTTON};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    Approve,
    Reject,
}

/// What the operator decided. A rejection always carries a valid reason.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewDecision {
    Approve,
    Reject(RejectRequest),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub review: Review,
    /// e.g. "hospital"
    pub entity_label: AttrValue,
    pub entity_name: AttrValue,
    pub on_confirm: Callback<ReviewDecision>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
}

/// Approve or reject a pending registration. Reject stays disabled until a
/// reason of at most 500 characters is entered.
#[function_component]
pub fn ReviewModal(props: &Props) -> Html {
    let reason = use_state(String::new);
    let touched = use_state(|| false);

    let reason_error = match props.review {
        Review::Approve => None,
        Review::Reject => validate_reason(&reason).err(),
    };
    let can_submit = reason_error.is_none() && !props.is_loading;

    let on_input = {
        let reason = reason.clone();
        let touched = touched.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            reason.set(input.value());
            touched.set(true);
        })
    };

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        let review = props.review;
        let reason = reason.clone();
        Callback::from(move |_: MouseEvent| {
            let decision = match review {
                Review::Approve => ReviewDecision::Approve,
                Review::Reject => match RejectRequest::new(&reason) {
                    Ok(request) => ReviewDecision::Reject(request),
                    Err(_) => return,
                },
            };
            on_confirm.emit(decision);
        })
    };

    let (title, confirm_text, confirm_class) = match props.review {
        Review::Approve => (
            format!("Approve {}", props.entity_label),
            "Approve",
            PRIMARY_BUTTON,
        ),
        Review::Reject => (
            format!("Reject {}", props.entity_label),
            "Reject",
            DANGER_BUTTON,
        ),
    };

    html! {
        <Modal
            on_close={props.on_close.clone()}
            locked={props.is_loading}
        >
            <h3 class="text-lg font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {title}
            </h3>

            <div class="space-y-4">
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {match props.review {
                        Review::Approve => "Approve ",
                        Review::Reject => "Reject ",
                    }}
                    <span class="font-semibold text-neutral-900 \
                                 dark:text-neutral-100">
                        {&props.entity_name}
                    </span>
                    {"?"}
                </p>

                if props.review == Review::Reject {
                    <div>
                        <label class="block text-sm font-medium \
                                      text-neutral-700 dark:text-neutral-300 mb-1">
                            {"Reason"}
                        </label>
                        <textarea
                            value={(*reason).clone()}
                            oninput={on_input}
                            rows="4"
                            disabled={props.is_loading}
                            placeholder="Explain why this registration is rejected"
                            class="w-full px-3 py-2 text-sm border \
                                   border-neutral-300 dark:border-neutral-600 \
                                   rounded-md bg-white dark:bg-neutral-700 \
                                   text-neutral-900 dark:text-neutral-100 \
                                   focus:outline-none focus:ring-2 \
                                   focus:ring-neutral-500"
                        />
                        <div class="flex justify-between text-xs mt-1">
                            <span class="text-red-600 dark:text-red-400">
                                if *touched {
                                    {reason_error.unwrap_or_default()}
                                }
                            </span>
                            <span class="text-neutral-500">
                                {format!(
                                    "{}/{}",
                                    reason.trim().chars().count(),
                                    REJECTION_REASON_MAX_LEN
                                )}
                            </span>
                        </div>
                    </div>
                }

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
                    onclick={on_confirm}
                    disabled={!can_submit}
                    class={confirm_class}
                >
                    {if props.is_loading { "Processing..." } else { confirm_text }}
                </button>
            </div>
        </Modal>
    }
}
