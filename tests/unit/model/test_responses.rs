use serde_json::json;
use unsent::prelude::*;

use crate::common::{campaign_json, contact_json, domain_json};

#[test]
fn domain_deserializes_with_dns_records() {
    let domain: Domain = serde_json::from_value(domain_json(3, "example.com", "PENDING")).unwrap();

    assert_eq!(domain.id, 3);
    assert_eq!(domain.status, DomainStatus::Pending);
    assert!(!domain.is_verified());
    assert_eq!(domain.dns_records.len(), 2);
    assert_eq!(domain.dns_records[0].record_type, "MX");
    assert_eq!(domain.dns_records[0].priority.as_deref(), Some("10"));
    assert_eq!(domain.dns_records[1].ttl.as_deref(), Some("3600"));
    assert_eq!(domain.dns_records[1].priority, None);
    assert!(domain.created_at.is_some());
}

#[test]
fn domain_tolerates_unknown_status_and_missing_fields() {
    let domain: Domain =
        serde_json::from_value(json!({"id": 9, "name": "x.dev", "status": "SOMETHING_NEW"}))
            .unwrap();

    assert_eq!(domain.status, DomainStatus::Unknown);
    assert!(domain.dns_records.is_empty());
    assert_eq!(domain.region, None);
}

#[test]
fn contact_defaults_to_subscribed() {
    let contact: Contact =
        serde_json::from_value(json!({"id": "c1", "email": "ada@example.com"})).unwrap();
    assert!(contact.subscribed);
    assert!(contact.properties.is_empty());

    let full: Contact = serde_json::from_value(contact_json("b1", "c1", "ada@example.com")).unwrap();
    assert_eq!(full.contact_book_id, "b1");
    assert_eq!(full.properties.get("plan"), Some(&json!("pro")));
}

#[test]
fn campaign_counters_and_status() {
    let campaign: Campaign = serde_json::from_value(campaign_json("cmp_1", "RUNNING")).unwrap();

    assert_eq!(campaign.status, CampaignStatus::Running);
    assert_eq!(campaign.total, 120);
    assert_eq!(campaign.delivered, 98);
    assert_eq!(campaign.reply_to, vec!["support@example.com".to_string()]);
    assert_eq!(campaign.scheduled_at, None);
}

#[test]
fn email_with_events() {
    let email: Email = serde_json::from_value(json!({
        "id": "em_1",
        "teamId": 1,
        "to": ["you@example.com"],
        "from": "me@example.com",
        "subject": "Hi",
        "text": "Hello",
        "latestStatus": "DELIVERED",
        "createdAt": "2025-03-01T09:30:00.000Z",
        "emailEvents": [
            {"emailId": "em_1", "status": "SENT", "createdAt": "2025-03-01T09:30:01.000Z"},
            {"emailId": "em_1", "status": "DELIVERED", "createdAt": "2025-03-01T09:30:05.000Z", "data": {"smtp": "250"}}
        ]
    }))
    .unwrap();

    assert_eq!(email.latest_status, Some(EmailStatus::Delivered));
    assert_eq!(email.email_events.len(), 2);
    assert_eq!(email.email_events[0].status, EmailStatus::Sent);
    assert_eq!(email.email_events[1].data, Some(json!({"smtp": "250"})));
}

#[test]
fn batch_response_len() {
    let response: EmailBatchResponse =
        serde_json::from_value(json!({"data": [{"emailId": "a"}, {"emailId": "b"}]})).unwrap();
    assert_eq!(response.len(), 2);
    assert!(!response.is_empty());
    assert_eq!(response.data[1].email_id, "b");
}

#[test]
fn success_response_defaults_to_false() {
    let response: SuccessResponse = serde_json::from_value(json!({})).unwrap();
    assert!(!response.success);
}
