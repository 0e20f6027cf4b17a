use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Wire value, e.g. "in_transit"
    pub status: AttrValue,
    pub label: AttrValue,
}

#[function_component]
pub fn StatusBadge(props: &Props) -> Html {
    let classes = match props.status.as_str() {
        "approved" | "active" | "delivered" => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200"
        }
        "pending" | "assigned" => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 \
             dark:text-yellow-200"
        }
        "picked_up" | "in_transit" => {
            "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200"
        }
        "rejected" | "suspended" | "cancelled" => {
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200"
        }
        _ => {
            "bg-neutral-200 text-neutral-800 dark:bg-neutral-600 \
             dark:text-neutral-200"
        }
    };

    html! {
        <span class={format!(
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium {classes}"
        )}>
            {&props.label}
        </span>
    }
}
