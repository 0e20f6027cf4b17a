use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
}

#[function_component]
pub fn EmptyState(props: &Props) -> Html {
    html! {
        <div class="text-center py-12">
            <p class="text-neutral-600 dark:text-neutral-400">
                {&props.message}
            </p>
        </div>
    }
}
