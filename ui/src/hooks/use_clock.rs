use gloo_timers::callback::Interval;
use jiff::Zoned;
use yew::prelude::*;

/// Current local time, refreshed every `interval_ms`.
#[hook]
pub fn use_clock(interval_ms: u32) -> Zoned {
    let now = use_state(Zoned::now);

    {
        let now = now.clone();
        use_effect_with(interval_ms, move |interval_ms| {
            let interval =
                Interval::new(*interval_ms, move || now.set(Zoned::now()));
            move || drop(interval)
        });
    }

    (*now).clone()
}
