use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::layout::Header;
use crate::{AuthState, Route, State};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

const NAV: [(&str, Route); 5] = [
    ("Dashboard", Route::Dashboard),
    ("Hospitals", Route::Hospitals),
    ("Collection Centers", Route::CollectionCenters),
    ("Riders", Route::Riders),
    ("Orders", Route::Orders),
];

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    let (state, _) = use_store::<State>();
    let current = use_route::<Route>();

    html! {
        <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 \
                    text-neutral-900 dark:text-neutral-100">
            <Header />
            <div class="flex">
                <nav class="w-56 shrink-0 p-4 space-y-1">
                    {for NAV.iter().map(|(label, route)| {
                        let active = current.as_ref() == Some(route);
                        let classes = if active {
                            "block px-3 py-2 rounded-md text-sm font-medium \
                             bg-neutral-900 text-white dark:bg-neutral-100 \
                             dark:text-neutral-900"
                        } else {
                            "block px-3 py-2 rounded-md text-sm font-medium \
                             text-neutral-700 dark:text-neutral-300 \
                             hover:bg-neutral-200 dark:hover:bg-neutral-700"
                        };
                        html! {
                            <Link<Route> to={route.clone()} classes={classes!(classes)}>
                                {*label}
                            </Link<Route>>
                        }
                    })}
                </nav>
                <main class="flex-1 min-w-0 px-4 sm:px-6 lg:px-8 py-8">
                    if state.auth_state == AuthState::LoggedOut {
                        <div class="mb-6 p-4 rounded-md bg-yellow-50 \
                                    dark:bg-yellow-900/20 border \
                                    border-yellow-200 dark:border-yellow-800 \
                                    text-sm text-yellow-800 dark:text-yellow-300">
                            {"No active session. Sign in through the \
                              operations portal to load data."}
                        </div>
                    }
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}
