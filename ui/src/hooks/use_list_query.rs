use dashboard_core::view_model::{ListAction, ListQuery};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, config};

#[derive(Debug, Clone, PartialEq)]
struct ListQueryState(ListQuery);

impl Reducible for ListQueryState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(ListQueryState(next))
        }
    }
}

/// Search, facets and page for one client-side list.
#[derive(Clone, PartialEq)]
pub struct ListQueryHandle {
    pub query: ListQuery,
    dispatcher: UseReducerDispatcher<ListQueryState>,
}

impl ListQueryHandle {
    /// Callback that maps its input to an action and dispatches it.
    pub fn callback<IN: 'static>(
        &self,
        to_action: impl Fn(IN) -> ListAction + 'static,
    ) -> Callback<IN> {
        let dispatcher = self.dispatcher.clone();
        Callback::from(move |input| dispatcher.dispatch(to_action(input)))
    }
}

/// List state that also follows the header search box. Every filter
/// change, including one coming from the header, goes back to page 1.
#[hook]
pub fn use_list_query() -> ListQueryHandle {
    let (state, _) = use_store::<State>();
    let reducer =
        use_reducer(|| ListQueryState(ListQuery::new(config().page_size)));

    {
        let dispatcher = reducer.dispatcher();
        use_effect_with(state.global_search.clone(), move |search| {
            dispatcher.dispatch(ListAction::SetSearch(search.clone()));
        });
    }

    ListQueryHandle {
        query: reducer.0.clone(),
        dispatcher: reducer.dispatcher(),
    }
}
