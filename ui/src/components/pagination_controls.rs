use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// 1-based page being shown
    pub page: usize,
    pub total_pages: usize,
    /// 1-based inclusive range of items on this page, `None` when empty
    pub range: Option<(usize, usize)>,
    /// Items across all pages
    pub total: usize,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    #[prop_or_default]
    pub is_loading: bool,
}

/// "Showing 11-20 of 42" with previous/next buttons. Renders nothing for
/// an empty list.
#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Some((first, last)) = props.range else {
        return html! {};
    };
    let pages = props.total_pages.max(1);

    let step = |label: &'static str, enabled: bool, emit: &Callback<()>| {
        html! {
            <button
                disabled={!enabled || props.is_loading}
                onclick={emit.reform(|_: MouseEvent| ())}
                class="px-3 py-1 rounded border border-neutral-300 \
                       dark:border-neutral-600 text-sm \
                       enabled:hover:bg-neutral-100 \
                       dark:enabled:hover:bg-neutral-800 disabled:opacity-40"
            >
                {label}
            </button>
        }
    };

    html! {
        <nav class="mt-4 flex items-center justify-between gap-4 text-sm">
            <span class="text-neutral-500">
                {format!("Showing {first}-{last} of {}", props.total)}
            </span>
            <div class="flex items-center gap-2">
                {step("Previous", props.page > 1, &props.on_previous)}
                <span class="tabular-nums">{format!("{} / {pages}", props.page)}</span>
                {step("Next", props.page < pages, &props.on_next)}
            </div>
        </nav>
    }
}
