use dashboard_core::Config;
use payloads::{APIClient, HospitalId};
use std::sync::OnceLock;
use yew::prelude::*;
use yew_router::prelude::*;

mod auth;
mod components;
mod contexts;
mod download;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use logs::init_logging;
pub use state::{AuthState, State};

use components::ToastContainer;
use components::layout::MainLayout;
use contexts::toast::ToastProvider;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Configuration baked in when the bundle is built.
pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let lookup = |key: &str| {
            match key {
                "API_URL" => option_env!("API_URL"),
                "GOOGLE_MAPS_API_KEY" => option_env!("GOOGLE_MAPS_API_KEY"),
                "PAGE_SIZE" => option_env!("PAGE_SIZE"),
                "SEARCH_DEBOUNCE_MS" => option_env!("SEARCH_DEBOUNCE_MS"),
                "CLOCK_INTERVAL_MS" => option_env!("CLOCK_INTERVAL_MS"),
                "PDF_ROW_CAP" => option_env!("PDF_ROW_CAP"),
                _ => None,
            }
            .map(str::to_string)
        };
        Config::from_lookup(lookup).unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid build configuration");
            Config::default()
        })
    })
}

/// API client for the configured backend, or the page's own origin when no
/// address was configured.
pub fn get_api_client(token: Option<&str>) -> APIClient {
    let address = config().api_url.clone().unwrap_or_else(|| {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    });

    let client = APIClient::new(address);
    match token {
        Some(token) => client.with_token(token.to_string().into()),
        None => client,
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/hospitals")]
    Hospitals,
    #[at("/hospitals/:id")]
    HospitalDetail { id: HospitalId },
    #[at("/collection-centers")]
    CollectionCenters,
    #[at("/riders")]
    Riders,
    #[at("/orders")]
    Orders,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <pages::DashboardPage /> },
        Route::Hospitals => html! { <pages::HospitalsPage /> },
        Route::HospitalDetail { id } => {
            html! { <pages::HospitalDetailPage hospital_id={id} /> }
        }
        Route::CollectionCenters => {
            html! { <pages::CollectionCentersPage /> }
        }
        Route::Riders => html! { <pages::RidersPage /> },
        Route::Orders => html! { <pages::OrdersPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Shell />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[function_component]
fn Shell() -> Html {
    hooks::use_authentication();

    html! {
        <>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
            <ToastContainer />
        </>
    }
}
