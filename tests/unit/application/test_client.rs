use crate::common::{client_for, domain_json};
use mockito::Server;
use serde_json::Value;
use unsent::error::MISSING_API_KEY;
use unsent::prelude::*;

#[test]
fn with_api_key_uses_default_base_url() {
    let client = Client::with_api_key("un_key").unwrap();
    assert_eq!(client.http_client().config().base_url(), DEFAULT_BASE_URL);
    assert_eq!(client.http_client().config().credentials.api_key, "un_key");
}

#[test]
fn blank_api_key_fails_construction() {
    let err = Client::with_api_key("").unwrap_err();
    assert_eq!(err.code, MISSING_API_KEY);
}

#[test]
fn client_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
    assert_send_sync::<Domains>();
    assert_send_sync::<Contacts>();
    assert_send_sync::<Campaigns>();
    assert_send_sync::<Emails>();
}

#[tokio::test]
async fn resource_clients_share_the_transport() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/domains/1")
        .with_status(200)
        .with_body(domain_json(1, "example.com", "SUCCESS").to_string())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let cloned = client.clone();

    let typed = client.domains().get(1).await.unwrap();
    let raw: Value = cloned.http_client().get("/domains/1").await.unwrap();

    assert_eq!(raw["id"], typed.id);
    assert_eq!(raw["name"], typed.name.as_str());
}

#[test]
fn version_matches_package() {
    assert_eq!(unsent::version(), env!("CARGO_PKG_VERSION"));
    assert!(USER_AGENT.ends_with(unsent::VERSION));
}
