pub mod mock;

use dashboard_core::telemetry;
use payloads::{APIClient, ApiResponse};
use serde::Serialize;
use std::sync::Once;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-operator-token";

static TRACING: Once = Once::new();

/// Install a tracing subscriber once per test binary. Set `RUST_LOG` to see
/// more than errors.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let subscriber = telemetry::get_subscriber("error".into());
        let _ = telemetry::try_init_subscriber(subscriber);
    });
}

/// A mock operations API plus a client pointed at it.
pub struct MockApi {
    pub server: MockServer,
    /// Client authenticated with [`TEST_TOKEN`].
    pub client: APIClient,
}

/// Start a mock operations API on an os-assigned port.
pub async fn spawn_mock_api() -> MockApi {
    init_tracing();
    let server = MockServer::start().await;
    let client =
        APIClient::new(server.uri()).with_token(TEST_TOKEN.to_string().into());
    MockApi { server, client }
}

impl MockApi {
    /// Client for the same server without any bearer token.
    pub fn anonymous_client(&self) -> APIClient {
        APIClient::new(self.server.uri())
    }

    /// Answer `verb path` with a successful envelope wrapping `data`, but only
    /// for requests carrying the test token.
    pub async fn mount_ok<T: Serialize>(&self, verb: &str, route: &str, data: T) {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(ApiResponse::ok(data)),
            )
            .mount(&self.server)
            .await;
    }

    /// Like [`MockApi::mount_ok`] but the response is held back for `delay`.
    pub async fn mount_ok_delayed<T: Serialize>(
        &self,
        verb: &str,
        route: &str,
        data: T,
        delay: Duration,
    ) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ApiResponse::ok(data))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer with `success: false` and the given message.
    pub async fn mount_rejection(&self, verb: &str, route: &str, message: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ApiResponse::<()>::failure(message)),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer with a bare HTTP status and envelope error message.
    pub async fn mount_status(
        &self,
        verb: &str,
        route: &str,
        status: u16,
        message: &str,
    ) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(ApiResponse::<()>::failure(message)),
            )
            .mount(&self.server)
            .await;
    }

    /// Every request the server has seen so far.
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests whose path equals `route`.
    pub async fn requests_to(&self, route: &str) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.url.path() == route)
            .collect()
    }
}
