use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// `value`, but only after it has stopped changing for `delay_ms`.
#[hook]
pub fn use_debounce<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            let timeout = Timeout::new(delay_ms, move || debounced.set(value));
            // A newer value drops the pending timeout before it fires.
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}
