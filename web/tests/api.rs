use std::sync::{Arc, Mutex};

use axum::http::{Request, StatusCode};
use dog_core::{ApiError, ClientConfig, DogService, HttpRequest, HttpResponse, Transport};
use dog_web::app;
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Answers every request with the same response and remembers the URLs.
struct StubTransport {
    result: Result<(u16, &'static str), &'static str>,
    urls: Mutex<Vec<String>>,
}

impl StubTransport {
    fn responding(status: u16, body: &'static str) -> Self {
        Self {
            result: Ok((status, body)),
            urls: Mutex::new(Vec::new()),
        }
    }

    fn failing(reason: &'static str) -> Self {
        Self {
            result: Err(reason),
            urls: Mutex::new(Vec::new()),
        }
    }
}

impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.urls.lock().unwrap().push(request.url);
        match self.result {
            Ok((status, body)) => Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            Err(reason) => Err(ApiError::Transport(reason.to_string())),
        }
    }
}

fn service(transport: &Arc<StubTransport>) -> DogService<Arc<StubTransport>> {
    DogService::new(&ClientConfig::default(), transport.clone())
}

fn get_root() -> Request<String> {
    Request::builder().uri("/").body(String::new()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

// --- success ---

#[tokio::test]
async fn root_returns_poodle_images_as_json_array() {
    let transport = Arc::new(StubTransport::responding(
        200,
        r#"{"message":["p1.jpg","p2.jpg","p3.jpg"],"status":"success"}"#,
    ));
    let resp = app(service(&transport)).oneshot(get_root()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let images: Vec<String> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(images, ["p1.jpg", "p2.jpg", "p3.jpg"]);

    assert_eq!(
        *transport.urls.lock().unwrap(),
        ["https://dog.ceo/api/breed/poodle/images/random/3"]
    );
}

// --- failures ---

#[tokio::test]
async fn upstream_error_status_becomes_500() {
    let transport = Arc::new(StubTransport::responding(
        404,
        r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#,
    ));
    let resp = app(service(&transport)).oneshot(get_root()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn malformed_upstream_body_becomes_500() {
    let transport = Arc::new(StubTransport::responding(
        200,
        r#"{"message":"p1.jpg","status":"success"}"#,
    ));
    let resp = app(service(&transport)).oneshot(get_root()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn transport_failure_becomes_500() {
    let transport = Arc::new(StubTransport::failing("connection reset"));
    let resp = app(service(&transport)).oneshot(get_root()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn other_paths_are_not_routed() {
    let transport = Arc::new(StubTransport::responding(200, "{}"));
    let resp = app(service(&transport))
        .oneshot(Request::builder().uri("/breed/poodle").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(transport.urls.lock().unwrap().is_empty());
}

// --- against the mock Dog CEO server ---

#[tokio::test]
async fn serves_images_from_mock_api() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));

    let service = DogService::from_config(&ClientConfig::with_base_url(format!("http://{addr}"))).unwrap();
    let resp = app(service).oneshot(get_root()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let images: Vec<String> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(
        images,
        [
            mock_server::image_url("poodle", 1),
            mock_server::image_url("poodle", 2),
            mock_server::image_url("poodle", 3),
        ]
    );
}
