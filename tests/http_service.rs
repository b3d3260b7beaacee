//! Tests for the HTTP-backed product service against a local one-shot server.

use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use product_form::error::ServiceError;
use product_form::{FieldValues, HttpProductService, ProductService, SaveOutcome};

/// What the mock server saw in the one request it accepted.
struct Received {
    method: String,
    path: String,
    body: serde_json::Value,
}

/// Binds a local server that answers exactly one request with the given
/// status and body, and reports the request it received.
async fn serve_once(status: u16, body: &'static str) -> (String, oneshot::Receiver<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let io = TokioIo::new(stream);

        let tx = Arc::new(Mutex::new(Some(tx)));
        let service = service_fn(move |req: Request<Incoming>| {
            let tx = tx.clone();
            async move {
                let method = req.method().to_string();
                let path = req.uri().path().to_string();
                let bytes = req.into_body().collect().await.unwrap().to_bytes();
                let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

                if let Some(sender) = tx.lock().unwrap().take() {
                    let _ = sender.send(Received {
                        method,
                        path,
                        body: json,
                    });
                }

                Ok::<_, Infallible>(
                    Response::builder()
                        .status(status)
                        .header("content-type", "application/json")
                        .body(Full::new(Bytes::from_static(body.as_bytes())))
                        .unwrap(),
                )
            }
        });

        let _ = http1::Builder::new().serve_connection(io, service).await;
    });

    (base_url, rx)
}

fn filled_values() -> FieldValues {
    FieldValues::new("Desk", "large", "furniture")
}

#[tokio::test]
async fn test_created_response_posts_payload_and_classifies() {
    let (base_url, rx) = serve_once(201, "").await;
    let service = HttpProductService::new(base_url);

    let outcome = service.save_product(&filled_values()).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Created);

    let received = rx.await.unwrap();
    assert_eq!(received.method, "POST");
    assert_eq!(received.path, "/products");
    assert_eq!(received.body["name"], "Desk");
    assert_eq!(received.body["size"], "large");
    assert_eq!(received.body["type"], "furniture");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let (base_url, rx) = serve_once(201, "").await;
    let service = HttpProductService::new(format!("{}/", base_url));

    let outcome = service.save_product(&filled_values()).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Created);
    assert_eq!(rx.await.unwrap().path, "/products");
}

#[tokio::test]
async fn test_server_error_response_is_classified() {
    let (base_url, _rx) = serve_once(500, "").await;
    let service = HttpProductService::new(base_url);

    let outcome = service.save_product(&filled_values()).await.unwrap();
    assert_eq!(outcome, SaveOutcome::ServerError { status: 500 });
}

#[tokio::test]
async fn test_invalid_request_reads_message_from_body() {
    let (base_url, _rx) = serve_once(400, r#"{"message": "The name is already taken"}"#).await;
    let service = HttpProductService::new(base_url);

    let outcome = service.save_product(&filled_values()).await.unwrap();
    assert_eq!(
        outcome,
        SaveOutcome::InvalidRequest {
            message: "The name is already taken".to_string(),
        }
    );
}

#[tokio::test]
async fn test_invalid_request_with_undecodable_body_is_a_parse_error() {
    let (base_url, _rx) = serve_once(400, "not json").await;
    let service = HttpProductService::new(base_url);

    let error = service.save_product(&filled_values()).await.unwrap_err();
    assert!(matches!(error, ServiceError::Parse(_)));
}

#[tokio::test]
async fn test_unknown_status_is_left_unclassified() {
    let (base_url, _rx) = serve_once(418, "").await;
    let service = HttpProductService::new(base_url);

    let outcome = service.save_product(&filled_values()).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Other { status: 418 });
}

#[tokio::test]
async fn test_connection_refusal_is_a_network_error() {
    // Bind to learn a free port, then drop the listener so nothing answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let service = HttpProductService::new(base_url);
    let error = service.save_product(&filled_values()).await.unwrap_err();
    assert!(matches!(error, ServiceError::Network(_)));
}
