use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use velora_contact_relay::{
    router, AppState, ContactPayload, HttpMailer, Mailer, OutboundEmail, RelayConfig, RelayError,
};

/// Records every send; optionally fails in a configured way.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    failure: Option<fn() -> RelayError>,
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), RelayError> {
        if let Some(make_error) = self.failure {
            return Err(make_error());
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

fn app(mailer: Arc<RecordingMailer>) -> axum::Router {
    router(AppState::new(
        mailer,
        RelayConfig::for_tests("http://unused.invalid/emails"),
    ))
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_submission() -> Value {
    json!({
        "nombre": "Ada Lovelace",
        "email": "ada@example.com",
        "tipo_consulta": "demo",
        "mensaje": "Quiero una demo"
    })
}

#[tokio::test]
async fn valid_submission_relays_and_succeeds() {
    let mailer = Arc::new(RecordingMailer::default());
    let response = app(mailer.clone())
        .oneshot(post_json(valid_submission()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Nueva consulta — Agendar Demo — Ada Lovelace");
    assert_eq!(sent[0].reply_to, "ada@example.com");
    assert_eq!(sent[0].to.len(), 3);
}

#[tokio::test]
async fn missing_required_fields_are_rejected_without_sending() {
    let cases = vec![
        json!({ "email": "a@b.c", "mensaje": "hola" }),
        json!({ "nombre": "Ada", "mensaje": "hola" }),
        json!({ "nombre": "Ada", "email": "a@b.c" }),
        json!({ "nombre": "", "email": "a@b.c", "mensaje": "hola" }),
        json!({}),
    ];

    for case in cases {
        let mailer = Arc::new(RecordingMailer::default());
        let response = app(mailer.clone())
            .oneshot(post_json(case.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {case}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Campos requeridos faltantes" })
        );
        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn preflight_gets_cors_headers() {
    let response = app(Arc::new(RecordingMailer::default()))
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

#[tokio::test]
async fn other_methods_are_refused() {
    for verb in ["GET", "PUT", "DELETE"] {
        let response = app(Arc::new(RecordingMailer::default()))
            .oneshot(
                Request::builder()
                    .method(verb)
                    .uri("/contact")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{verb}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Method not allowed" })
        );
    }
}

#[tokio::test]
async fn provider_rejection_maps_to_send_error() {
    let mailer = Arc::new(RecordingMailer {
        failure: Some(|| RelayError::Rejected("422 Unprocessable Entity".to_string())),
        ..Default::default()
    });
    let response = app(mailer).oneshot(post_json(valid_submission())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Error al enviar el mensaje" })
    );
}

#[tokio::test]
async fn transport_failure_maps_to_internal_error() {
    let mailer = Arc::new(RecordingMailer {
        failure: Some(|| RelayError::Transport("connection refused".to_string())),
        ..Default::default()
    });
    let response = app(mailer).oneshot(post_json(valid_submission())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Error interno del servidor" })
    );
}

#[tokio::test]
async fn http_mailer_posts_bearer_authorized_payload() {
    let server = MockServer::start().await;
    let config = RelayConfig::for_tests(format!("{}/emails", server.uri()));

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "from": config.from.clone(),
            "to": config.recipients.clone(),
            "reply_to": "ada@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "msg_1" })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = ContactPayload {
        nombre: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        mensaje: "Quiero una demo".to_string(),
        ..Default::default()
    };
    let email = velora_contact_relay::email::compose(&config, &payload);

    let mailer = HttpMailer::new(&config).unwrap();
    mailer.send(&email).await.unwrap();
}

#[tokio::test]
async fn http_mailer_surfaces_provider_rejection() {
    let server = MockServer::start().await;
    let config = RelayConfig::for_tests(format!("{}/emails", server.uri()));

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "message": "bad from" })))
        .mount(&server)
        .await;

    let payload = ContactPayload {
        nombre: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        mensaje: "hola".to_string(),
        ..Default::default()
    };
    let email = velora_contact_relay::email::compose(&config, &payload);

    let mailer = HttpMailer::new(&config).unwrap();
    let err = mailer.send(&email).await.unwrap_err();
    assert!(matches!(err, RelayError::Rejected(_)));
}
