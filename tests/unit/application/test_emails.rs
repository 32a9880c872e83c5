use crate::common::client_for;
use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server};
use serde_json::json;
use unsent::prelude::*;

#[tokio::test]
async fn send_posts_email() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/emails")
        .match_body(Matcher::Json(json!({
            "to": "you@example.com",
            "from": "me@example.com",
            "subject": "Hi",
            "html": "<p>Hello</p>"
        })))
        .with_status(200)
        .with_body(r#"{"emailId":"em_1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let email = EmailCreate::new("me@example.com", "you@example.com", "Hi").with_html("<p>Hello</p>");
    let response = client.emails().send(&email).await.unwrap();

    assert_eq!(response.email_id, "em_1");
    mock.assert_async().await;
}

#[tokio::test]
async fn batch_posts_array() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/emails/batch")
        .match_body(Matcher::Json(json!([
            {"to": "a@example.com", "from": "me@example.com", "subject": "A", "text": "a"},
            {"to": "b@example.com", "from": "me@example.com", "subject": "B", "text": "b"}
        ])))
        .with_status(200)
        .with_body(r#"{"data":[{"emailId":"em_a"},{"emailId":"em_b"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let emails = vec![
        EmailCreate::new("me@example.com", "a@example.com", "A").with_text("a"),
        EmailCreate::new("me@example.com", "b@example.com", "B").with_text("b"),
    ];
    let response = client.emails().batch(&emails).await.unwrap();

    assert_eq!(response.len(), 2);
    assert_eq!(response.data[0].email_id, "em_a");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_returns_email_details() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/emails/em_1")
        .with_status(200)
        .with_body(
            json!({
                "id": "em_1",
                "to": ["you@example.com"],
                "from": "me@example.com",
                "subject": "Hi",
                "latestStatus": "SCHEDULED",
                "scheduledAt": "2025-05-01T08:00:00.000Z",
                "emailEvents": []
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let email = client.emails().get("em_1").await.unwrap();

    assert_eq!(email.id, "em_1");
    assert_eq!(email.latest_status, Some(EmailStatus::Scheduled));
    assert_eq!(
        email.scheduled_at,
        Some(Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn update_and_cancel_scheduled_email() {
    let mut server = Server::new_async().await;
    let update = server
        .mock("PATCH", "/emails/em_1")
        .match_body(Matcher::Json(json!({"scheduledAt": "2025-06-01T12:30:00Z"})))
        .with_status(200)
        .with_body(r#"{"emailId":"em_1"}"#)
        .create_async()
        .await;
    let cancel = server
        .mock("POST", "/emails/em_1/cancel")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(r#"{"emailId":"em_1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let payload = EmailUpdate {
        scheduled_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
    };
    let updated = client.emails().update("em_1", &payload).await.unwrap();
    let cancelled = client.emails().cancel("em_1").await.unwrap();

    assert_eq!(updated.email_id, "em_1");
    assert_eq!(cancelled.email_id, "em_1");
    update.assert_async().await;
    cancel.assert_async().await;
}

#[tokio::test]
async fn send_with_invalid_key_is_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/emails")
        .with_status(401)
        .with_body(r#"{"error":{"code":"UNAUTHORIZED","message":"Invalid API key"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .emails()
        .send(&EmailCreate::new("me@example.com", "you@example.com", "Hi"))
        .await
        .unwrap_err();

    assert!(err.is_client_error());
    assert_eq!(err.code, "UNAUTHORIZED");
}
