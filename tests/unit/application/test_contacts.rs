use crate::common::{client_for, contact_json};
use mockito::{Matcher, Server};
use serde_json::json;
use unsent::application::services::{contact_path, contacts_path};
use unsent::prelude::*;

#[test]
fn contact_paths_are_built_exactly() {
    assert_eq!(contact_path("b1", "c1"), "/contactBooks/b1/contacts/c1");
    assert_eq!(contacts_path("b1"), "/contactBooks/b1/contacts");
}

#[tokio::test]
async fn get_hits_exact_contact_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/contactBooks/b1/contacts/c1")
        .with_status(200)
        .with_body(contact_json("b1", "c1", "ada@example.com").to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let contact = client.contacts().get("b1", "c1").await.unwrap();

    assert_eq!(contact.id, "c1");
    assert_eq!(contact.contact_book_id, "b1");
    assert_eq!(contact.email, "ada@example.com");
    mock.assert_async().await;
}

#[tokio::test]
async fn create_then_get_round_trips_identity() {
    let mut server = Server::new_async().await;
    let created = server
        .mock("POST", "/contactBooks/b1/contacts")
        .match_body(Matcher::Json(json!({
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "properties": {"plan": "pro"}
        })))
        .with_status(200)
        .with_body(r#"{"contactId":"c1"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/contactBooks/b1/contacts/c1")
        .with_status(200)
        .with_body(contact_json("b1", "c1", "ada@example.com").to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let input = ContactCreate::new("ada@example.com")
        .with_first_name("Ada")
        .with_last_name("Lovelace")
        .with_property("plan", "pro");
    let response = client.contacts().create("b1", &input).await.unwrap();
    let contact = client
        .contacts()
        .get("b1", &response.contact_id)
        .await
        .unwrap();

    assert_eq!(contact.id, response.contact_id);
    assert_eq!(contact.email, input.email);
    assert_eq!(contact.first_name, input.first_name);
    created.assert_async().await;
}

#[tokio::test]
async fn update_patches_only_given_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/contactBooks/b1/contacts/c1")
        .match_body(Matcher::Json(json!({"subscribed": false})))
        .with_status(200)
        .with_body(r#"{"contactId":"c1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let update = ContactUpdate {
        subscribed: Some(false),
        ..Default::default()
    };
    let response = client.contacts().update("b1", "c1", &update).await.unwrap();

    assert_eq!(response.contact_id, "c1");
    mock.assert_async().await;
}

#[tokio::test]
async fn upsert_creates_new_and_updates_existing() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("PUT", "/contactBooks/b1/contacts/new_contact")
        .match_body(Matcher::Json(json!({"email": "new@example.com"})))
        .with_status(201)
        .with_body(r#"{"contactId":"new_contact"}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/contactBooks/b1/contacts/c1")
        .match_body(Matcher::Json(json!({"email": "ada@example.com", "firstName": "Augusta"})))
        .with_status(200)
        .with_body(r#"{"contactId":"c1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let created = client
        .contacts()
        .upsert("b1", "new_contact", &ContactUpsert::new("new@example.com"))
        .await
        .unwrap();
    let updated = client
        .contacts()
        .upsert(
            "b1",
            "c1",
            &ContactUpsert::new("ada@example.com").with_first_name("Augusta"),
        )
        .await
        .unwrap();

    assert_eq!(created.contact_id, "new_contact");
    assert_eq!(updated.contact_id, "c1");
    create.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn delete_contact() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/contactBooks/b1/contacts/c1")
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.contacts().delete("b1", "c1").await.unwrap();

    assert!(response.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn list_forwards_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/contactBooks/b1/contacts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(json!([contact_json("b1", "c1", "ada@example.com")]).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ContactListQuery {
        page: Some(2),
        limit: Some(50),
        ..Default::default()
    };
    let contacts = client.contacts().list("b1", &query).await.unwrap();

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id, "c1");
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_contact_returns_error_only() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/contactBooks/b1/contacts/ghost")
        .with_status(404)
        .with_body(r#"{"error":{"code":"NOT_FOUND","message":"Contact not found"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.contacts().get("b1", "ghost").await;

    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path.as_deref(), Some("/contactBooks/b1/contacts/ghost"));
}
