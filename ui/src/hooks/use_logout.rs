use crate::auth::clear_token;
use crate::{Route, State};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        clear_token();
        dispatch.reduce_mut(State::logout);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Dashboard);
        }
    })
}
