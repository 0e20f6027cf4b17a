use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
    /// Shows a "Try Again" button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component]
pub fn ErrorPanel(props: &Props) -> Html {
    html! {
        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
                    border-red-200 dark:border-red-800 flex items-center \
                    justify-between gap-4">
            <p class="text-sm text-red-700 dark:text-red-400">
                {&props.message}
            </p>
            if let Some(on_retry) = &props.on_retry {
                <button
                    onclick={on_retry.reform(|_: MouseEvent| ())}
                    class="px-3 py-1 text-sm font-medium text-red-700 \
                           dark:text-red-300 border border-red-300 \
                           dark:border-red-700 rounded-md \
                           hover:bg-red-100 dark:hover:bg-red-900/40"
                >
                    {"Try Again"}
                </button>
            }
        </div>
    }
}
