use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
}

#[function_component]
pub fn StatCard(props: &Props) -> Html {
    html! {
        <div class="border border-neutral-200 dark:border-neutral-700 \
                    rounded-lg p-4 bg-white dark:bg-neutral-800">
            <h3 class="text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 uppercase tracking-wide">
                {&props.label}
            </h3>
            <p class="text-2xl font-semibold text-neutral-900 \
                      dark:text-white mt-1">
                {&props.value}
            </p>
            if let Some(detail) = &props.detail {
                <p class="text-xs text-neutral-500 dark:text-neutral-400 mt-1">
                    {detail}
                </p>
            }
        </div>
    }
}
