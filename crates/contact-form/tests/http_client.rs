/// HttpRelayClient against a local endpoint that speaks the envelope format

use axum::{http::StatusCode, routing::post, Json, Router};
use contact_form::{ContactPayload, Envelope, HttpRelayClient, RelayClient, RelayError, RelayStatus};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/sendEmail", addr)
}

fn payload() -> ContactPayload {
    ContactPayload {
        name: "Ada".to_string(),
        email: "ada@x.com".to_string(),
        message: "hi".to_string(),
    }
}

#[tokio::test]
async fn test_sent_envelope_is_success() {
    let app = Router::new().route(
        "/sendEmail",
        post(|Json(body): Json<Envelope<ContactPayload>>| async move {
            assert_eq!(body.data.name, "Ada");
            Json(Envelope::new(RelayStatus::sent()))
        }),
    );
    let client = HttpRelayClient::new(serve(app).await);

    assert_eq!(client.submit(&payload()).await, Ok(()));
}

#[tokio::test]
async fn test_request_body_is_wrapped_in_data() {
    let app = Router::new().route(
        "/sendEmail",
        post(|Json(body): Json<Value>| async move {
            let expected = json!({ "data": { "name": "Ada", "email": "ada@x.com", "message": "hi" } });
            if body == expected {
                Json(json!({ "data": { "status": 200, "message": "sent" } }))
            } else {
                Json(json!({ "data": { "status": 400, "message": "unexpected body" } }))
            }
        }),
    );
    let client = HttpRelayClient::new(serve(app).await);

    assert_eq!(client.submit(&payload()).await, Ok(()));
}

#[tokio::test]
async fn test_error_envelope_is_rejected() {
    let app = Router::new().route(
        "/sendEmail",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::new(RelayStatus::failed(500, "smtp unavailable"))),
            )
        }),
    );
    let client = HttpRelayClient::new(serve(app).await);

    assert_eq!(
        client.submit(&payload()).await,
        Err(RelayError::Rejected {
            status: 500,
            message: "smtp unavailable".to_string(),
        })
    );
}

#[tokio::test]
async fn test_non_envelope_body_is_decode_error() {
    let app = Router::new().route("/sendEmail", post(|| async { "internal error" }));
    let client = HttpRelayClient::new(serve(app).await);

    let err = client.submit(&payload()).await.unwrap_err();
    assert!(matches!(err, RelayError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpRelayClient::new(format!("http://{}/sendEmail", addr));
    let err = client.submit(&payload()).await.unwrap_err();
    assert!(matches!(err, RelayError::Transport(_)), "got {:?}", err);
}
