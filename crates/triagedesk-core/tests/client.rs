//! Integration tests for the REST client.
//!
//! These tests run the client against an in-process HTTP stub that serves
//! canned responses and records every request it receives, so no real
//! classification service is needed.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use triagedesk_core::{
    ApiClient, EmailCategory, EmailId, EmailUpdate, Error, NewEmail, ReviewDraft,
};

/// A request as seen by the stub.
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    body: String,
}

/// HTTP stub answering one canned response per connection, in order.
struct Stub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    async fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let request = read_request(&mut stream).await;
                recorded.lock().unwrap().push(request);
                write_response(&mut stream, status, &body).await;
            }
        });

        Self { addr, requests }
    }

    fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_request(stream: &mut TcpStream) -> Recorded {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();
    Recorded { method, path, body }
}

async fn write_response(stream: &mut TcpStream, status: u16, body: &str) {
    let reason = if status < 400 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.shutdown().await.ok();
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn email_json(id: i64, category: &str, review: bool, draft: &str) -> String {
    serde_json::json!({
        "id": id,
        "from_email": "cliente@example.com",
        "subject": "Assunto",
        "body": "Corpo",
        "category": category,
        "confidence": 0.82,
        "draft_reply": draft,
        "requires_human_review": review,
        "created_at": "2026-01-15T19:31:43",
        "updated_at": "2026-01-15T19:31:43"
    })
    .to_string()
}

#[tokio::test]
async fn test_classify_sends_exactly_one_request_with_exact_fields() {
    let stub = Stub::start(vec![(200, email_json(1, "GARANTIA", true, "Olá"))]).await;
    let client = ApiClient::new(&stub.url()).unwrap();

    let request = NewEmail::new(
        "cliente@example.com",
        "Produto quebrou",
        "O produto quebrou depois de 2 dias.\nO que faço?",
    );
    let email = client.classify(&request).await.unwrap();

    assert_eq!(email.category, EmailCategory::Warranty);
    assert_eq!(email.id, Some(EmailId::new(1)));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/emails/classify");
    let sent: NewEmail = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(sent, request);
}

#[tokio::test]
async fn test_list_decodes_records_and_unknown_categories() {
    let body = format!(
        "[{}, {}]",
        email_json(1, "GARANTIA", true, "a"),
        email_json(2, "CATEGORIA_NOVA", false, "b")
    );
    let stub = Stub::start(vec![(200, body)]).await;
    let client = ApiClient::new(&stub.url()).unwrap();

    let emails = client.list().await.unwrap();

    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0].category, EmailCategory::Warranty);
    assert_eq!(emails[1].category, EmailCategory::Inconclusive);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/emails");
}

#[tokio::test]
async fn test_list_tolerates_null_and_non_string_categories() {
    let mut null_category: serde_json::Value =
        serde_json::from_str(&email_json(2, "GARANTIA", false, "b")).unwrap();
    null_category["category"] = serde_json::Value::Null;
    let mut numeric_category: serde_json::Value =
        serde_json::from_str(&email_json(3, "GARANTIA", false, "c")).unwrap();
    numeric_category["category"] = serde_json::json!(3);

    let body = format!(
        "[{}, {null_category}, {numeric_category}]",
        email_json(1, "FEEDBACK_POSITIVO", false, "a")
    );
    let stub = Stub::start(vec![(200, body)]).await;
    let client = ApiClient::new(&stub.url()).unwrap();

    let emails = client.list().await.unwrap();

    assert_eq!(emails.len(), 3);
    assert_eq!(emails[0].category, EmailCategory::PositiveFeedback);
    assert_eq!(emails[1].category, EmailCategory::Inconclusive);
    assert_eq!(emails[2].category, EmailCategory::Inconclusive);
    assert_eq!(emails[1].id, Some(EmailId::new(2)));
}

#[tokio::test]
async fn test_update_sends_edited_fields_to_record_path() {
    let stub = Stub::start(vec![(
        200,
        email_json(7, "DUVIDAS_GERAIS", false, "Resposta revisada"),
    )])
    .await;
    let client = ApiClient::new(&format!("{}/api", stub.url())).unwrap();

    let draft = ReviewDraft {
        email_id: EmailId::new(7),
        category: EmailCategory::GeneralQuestion,
        draft_reply: "Resposta revisada".to_string(),
        requires_human_review: false,
    };
    let updated = client.update(draft.email_id, &draft.to_update()).await.unwrap();

    assert_eq!(updated.draft_reply, "Resposta revisada");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/emails/7");
    let sent: EmailUpdate = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(sent, draft.to_update());
}

#[tokio::test]
async fn test_error_status_is_reported_without_retry() {
    let stub = Stub::start(vec![
        (500, r#"{"detail": "boom"}"#.to_string()),
        (200, "[]".to_string()),
    ])
    .await;
    let client = ApiClient::new(&stub.url()).unwrap();

    let err = client.list().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, Error::Status { ref body, .. } if body.contains("boom")));
    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}")).unwrap();
    let err = client.list().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_ping_reads_health_status() {
    let stub = Stub::start(vec![(
        200,
        r#"{"ping": "pong", "status": "ok"}"#.to_string(),
    )])
    .await;
    let client = ApiClient::new(&stub.url()).unwrap();

    let health = client.ping().await.unwrap();

    assert!(health.is_ok());
    assert_eq!(stub.requests()[0].path, "/health/ping");
}

#[tokio::test]
async fn test_unexpected_body_is_a_decode_error() {
    let stub = Stub::start(vec![(200, "<html>gateway</html>".to_string())]).await;
    let client = ApiClient::new(&stub.url()).unwrap();

    let err = client.list().await.unwrap_err();

    assert!(matches!(err, Error::Serde(_)));
    assert!(!err.is_transport());
}
