use crate::config::RelayConfig;
use crate::create_app;
use crate::state::AppState;
use axum::body::{Body, Bytes};
use axum::Router;
use http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde::Serialize;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers;
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/v1/security/oauth2/token";
pub const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";

/// Test fixture wiring the application to a mock Amadeus server.
///
/// Both the token endpoint and the flight-offers endpoint live on
/// `amadeus_mock`; requests are driven through the router without binding a
/// socket.
///
/// # Examples
///
/// ```rust
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///     fixture.mock_token("token-1", 1).await;
///     fixture
///         .mock_flight_offers(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })), 1)
///         .await;
///
///     let response = fixture
///         .post("/api/search-flights", &json!({
///             "origin": "SOF",
///             "destination": "LON",
///             "departureDate": "2026-12-01",
///         }))
///         .await;
///     response.assert_ok();
/// }
/// ```
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Configuration the state was built from
    pub config: RelayConfig,
    /// Application state shared with the router
    pub state: AppState,
    /// Mock server standing in for the Amadeus API
    pub amadeus_mock: MockServer,
}

impl TestFixture {
    /// Creates a new test fixture with the default test configuration
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Creates a test fixture after letting the caller adjust the configuration
    pub async fn with_config(customize: impl FnOnce(&mut RelayConfig)) -> Self {
        Self::setup_logger(LevelFilter::Debug);

        let amadeus_mock = MockServer::start().await;
        let mut config = RelayConfig::for_test_with_mock(&amadeus_mock);
        customize(&mut config);

        let state = AppState::new(&config).expect("Failed to create test state");
        let app = create_app(state.clone());

        Self {
            app,
            config,
            state,
            amadeus_mock,
        }
    }

    /// Initializes the test logger at the given level
    pub fn setup_logger(level: LevelFilter) {
        let _ = env_logger::builder()
            .filter_level(level)
            .is_test(true)
            .try_init();
    }

    /// Creates a request builder with a JSON content type
    pub fn request_builder(&self, method: Method, uri: impl AsRef<str>) -> http::request::Builder {
        Request::builder()
            .method(method)
            .uri(uri.as_ref())
            .header("Content-Type", "application/json")
    }

    /// Sends a GET request to the specified URI
    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        let request = self
            .request_builder(Method::GET, uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a POST request with a JSON body to the specified URI
    pub async fn post<T: Serialize>(&self, uri: impl AsRef<str>, body: &T) -> TestResponse {
        let json_body = serde_json::to_vec(body).expect("Failed to serialize body to JSON");
        let request = self
            .request_builder(Method::POST, uri)
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a POST request with a body that is passed through untouched
    pub async fn post_raw(&self, uri: impl AsRef<str>, body: &'static str) -> TestResponse {
        let request = self
            .request_builder(Method::POST, uri)
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a request and collects the full response
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Mounts a token endpoint that hands out `access_token`
    pub async fn mock_token(&self, access_token: &str, expected_calls: u64) {
        self.mock_token_response(
            ResponseTemplate::new(200).set_body_json(json!({
                "type": "amadeusOAuth2Token",
                "access_token": access_token,
                "token_type": "Bearer",
                "expires_in": 1799,
                "state": "approved",
            })),
            expected_calls,
        )
        .await;
    }

    /// Mounts a token endpoint with an arbitrary response
    pub async fn mock_token_response(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path(TOKEN_PATH))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.amadeus_mock)
            .await;
    }

    /// Starts a mock for the flight-offers endpoint that callers can refine
    pub fn flight_offers_request(&self) -> MockBuilder {
        Mock::given(matchers::method("GET")).and(matchers::path(FLIGHT_OFFERS_PATH))
    }

    /// Mounts a flight-offers endpoint returning `response`
    pub async fn mock_flight_offers(&self, response: ResponseTemplate, expected_calls: u64) {
        self.flight_offers_request()
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.amadeus_mock)
            .await;
    }

    /// All requests the mock Amadeus server has seen so far
    pub async fn upstream_requests(&self) -> Vec<wiremock::Request> {
        self.amadeus_mock
            .received_requests()
            .await
            .unwrap_or_default()
    }

    /// Number of calls made to the token endpoint so far
    pub async fn token_request_count(&self) -> usize {
        self.upstream_requests()
            .await
            .iter()
            .filter(|request| request.url.path() == TOKEN_PATH)
            .count()
    }
}

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Response body parsed as JSON, or `{}` when it is not JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|_| json!({}))
    }

    /// Response body as UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Value of a response header, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Unexpected status, body: {}",
            self.text()
        );
    }

    pub fn assert_ok(&self) {
        self.assert_status(StatusCode::OK);
    }
}
