use dashboard_core::view_model::ALL;
use yew::prelude::*;

/// One dropdown in the filter bar. `"all"` is always offered first.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub name: &'static str,
    pub label: &'static str,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    pub selected: String,
}

impl Facet {
    pub fn new(
        name: &'static str,
        label: &'static str,
        options: Vec<(String, String)>,
        selected: &str,
    ) -> Self {
        Self {
            name,
            label,
            options,
            selected: selected.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub search: AttrValue,
    #[prop_or_else(|| AttrValue::from("Search..."))]
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub facets: Vec<Facet>,
    /// Emits `(facet name, value)`
    pub on_facet: Callback<(String, String)>,
    pub on_clear: Callback<()>,
    #[prop_or_default]
    pub has_filters: bool,
}

const INPUT_CLASS: &str = "px-3 py-2 text-sm border border-neutral-300 \
    dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 \
    text-neutral-900 dark:text-neutral-100 focus:outline-none \
    focus:ring-2 focus:ring-neutral-500";

#[function_component]
pub fn FilterBar(props: &Props) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <div class="flex flex-wrap items-center gap-3 mb-4">
            <input
                type="search"
                value={props.search.clone()}
                oninput={on_input}
                placeholder={props.placeholder.clone()}
                class={classes!(INPUT_CLASS, "flex-1", "min-w-48")}
            />
            {for props.facets.iter().map(|facet| {
                let name = facet.name;
                let on_facet = props.on_facet.clone();
                let onchange = Callback::from(move |e: Event| {
                    if let Some(select) =
                        e.target_dyn_into::<web_sys::HtmlSelectElement>()
                    {
                        on_facet.emit((name.to_string(), select.value()));
                    }
                });
                html! {
                    <select
                        key={name}
                        aria-label={facet.label}
                        {onchange}
                        class={INPUT_CLASS}
                    >
                        <option value={ALL} selected={facet.selected == ALL}>
                            {format!("All {}", facet.label)}
                        </option>
                        {for facet.options.iter().map(|(value, label)| html! {
                            <option
                                value={value.clone()}
                                selected={facet.selected == *value}
                            >
                                {label}
                            </option>
                        })}
                    </select>
                }
            })}
            if props.has_filters {
                <button
                    onclick={props.on_clear.reform(|_: MouseEvent| ())}
                    class="text-sm text-neutral-600 dark:text-neutral-400 \
                           hover:underline"
                >
                    {"Clear filters"}
                </button>
            }
        </div>
    }
}
