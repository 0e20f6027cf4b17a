use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::{use_clock, use_debounce, use_logout};
use crate::{State, config};

#[function_component]
pub fn Header() -> Html {
    let (state, dispatch) = use_store::<State>();
    let search = use_state(String::new);
    let debounced = use_debounce((*search).clone(), config().search_debounce_ms);
    let now = use_clock(config().clock_interval_ms);
    let logout = use_logout();

    // Publish the search only once typing pauses.
    use_effect_with(debounced, move |value| {
        let value = value.trim().to_string();
        dispatch.reduce_mut(|state| state.global_search = value);
    });

    let on_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b \
                       border-neutral-200 dark:border-neutral-700">
            <div class="px-4 sm:px-6 lg:px-8 flex items-center gap-6 h-16">
                <h1 class="text-xl font-semibold text-neutral-900 dark:text-white">
                    {"Operations"}
                </h1>
                <input
                    type="search"
                    value={(*search).clone()}
                    oninput={on_input}
                    placeholder="Search hospitals, centers, riders, orders"
                    class="flex-1 max-w-lg px-3 py-2 text-sm border \
                           border-neutral-300 dark:border-neutral-600 \
                           rounded-md bg-white dark:bg-neutral-700"
                />
                <span class="text-sm tabular-nums text-neutral-600 \
                             dark:text-neutral-400">
                    {now.strftime("%a %d %b %Y %H:%M:%S").to_string()}
                </span>
                if let Some(profile) = state.profile() {
                    <div class="flex items-center gap-3">
                        <span class="text-sm text-neutral-700 dark:text-neutral-300">
                            {&profile.name}
                        </span>
                        <button
                            onclick={logout}
                            class="text-sm text-neutral-600 \
                                   dark:text-neutral-400 hover:underline"
                        >
                            {"Log out"}
                        </button>
                    </div>
                }
            </div>
        </header>
    }
}
