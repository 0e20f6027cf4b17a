use payloads::responses::HospitalFeature;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub features: Vec<HospitalFeature>,
    /// Emits `(feature, enabled)` with the requested new state.
    pub on_toggle: Callback<(String, bool)>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn FeatureToggles(props: &Props) -> Html {
    if props.features.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500">{"No configurable features."}</p>
        };
    }

    html! {
        <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
            {for props.features.iter().map(|feature| {
                let onclick = {
                    let on_toggle = props.on_toggle.clone();
                    let name = feature.name.clone();
                    let enabled = !feature.enabled;
                    Callback::from(move |_: MouseEvent| {
                        on_toggle.emit((name.clone(), enabled));
                    })
                };
                let (track, knob) = if feature.enabled {
                    ("bg-green-600", "translate-x-5")
                } else {
                    ("bg-neutral-300 dark:bg-neutral-600", "translate-x-0")
                };
                html! {
                    <li key={feature.name.clone()}
                        class="flex items-center justify-between py-3">
                        <span class="text-sm text-neutral-900 dark:text-neutral-100">
                            {feature.name.replace('_', " ")}
                        </span>
                        <button
                            {onclick}
                            disabled={props.disabled}
                            role="switch"
                            aria-checked={feature.enabled.to_string()}
                            class={format!(
                                "relative inline-flex h-6 w-11 rounded-full \
                                 transition-colors disabled:opacity-50 {track}"
                            )}
                        >
                            <span class={format!(
                                "inline-block h-5 w-5 mt-0.5 ml-0.5 rounded-full \
                                 bg-white transform transition {knob}"
                            )} />
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}
