use yew::prelude::*;
use yewdux::prelude::*;

use crate::auth::{clear_token, stored_token};
use crate::{State, get_api_client};

/// Restore the session on startup from the stored token.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        let Some(token) = stored_token() else {
            tracing::debug!("no stored session");
            dispatch.reduce_mut(State::logout);
            return;
        };

        yew::platform::spawn_local(async move {
            match get_api_client(Some(&token)).operator_profile().await {
                Ok(profile) => {
                    tracing::info!(operator = %profile.email, "session restored");
                    dispatch.reduce_mut(|state| state.login(token, profile));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "could not restore session");
                    if e.is_unauthorized() {
                        clear_token();
                    }
                    dispatch.reduce_mut(State::logout);
                }
            }
        });
    });
}
