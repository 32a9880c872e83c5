use crate::application::interfaces::contact::ContactService;
use crate::error::UnsentResult;
use crate::model::http::HttpClient;
use crate::model::requests::{ContactCreate, ContactListQuery, ContactUpdate, ContactUpsert};
use crate::model::responses::{
    ContactCreateResponse, ContactDeleteResponse, ContactUpdateResponse, ContactUpsertResponse,
};
use crate::presentation::contact::Contact;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Path of the contact collection of a book
pub fn contacts_path(book_id: &str) -> String {
    format!("/contactBooks/{book_id}/contacts")
}

/// Path of one contact in a book
pub fn contact_path(book_id: &str, contact_id: &str) -> String {
    format!("/contactBooks/{book_id}/contacts/{contact_id}")
}

/// Client for the `/contactBooks/{book_id}/contacts` endpoints
#[derive(Debug, Clone)]
pub struct Contacts {
    http_client: Arc<HttpClient>,
}

impl Contacts {
    /// Creates a contact client on top of a shared transport
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ContactService for Contacts {
    async fn list(&self, book_id: &str, query: &ContactListQuery) -> UnsentResult<Vec<Contact>> {
        info!("Listing contacts of book: {}", book_id);
        let contacts: Vec<Contact> = self
            .http_client
            .get_with_query(&contacts_path(book_id), query)
            .await?;
        debug!("{} contacts obtained", contacts.len());
        Ok(contacts)
    }

    async fn create(
        &self,
        book_id: &str,
        payload: &ContactCreate,
    ) -> UnsentResult<ContactCreateResponse> {
        info!("Creating contact in book: {}", book_id);
        self.http_client.post(&contacts_path(book_id), payload).await
    }

    async fn get(&self, book_id: &str, contact_id: &str) -> UnsentResult<Contact> {
        info!("Getting contact {} of book {}", contact_id, book_id);
        self.http_client.get(&contact_path(book_id, contact_id)).await
    }

    async fn update(
        &self,
        book_id: &str,
        contact_id: &str,
        payload: &ContactUpdate,
    ) -> UnsentResult<ContactUpdateResponse> {
        info!("Updating contact {} of book {}", contact_id, book_id);
        self.http_client
            .patch(&contact_path(book_id, contact_id), payload)
            .await
    }

    async fn upsert(
        &self,
        book_id: &str,
        contact_id: &str,
        payload: &ContactUpsert,
    ) -> UnsentResult<ContactUpsertResponse> {
        info!("Upserting contact {} of book {}", contact_id, book_id);
        self.http_client
            .put(&contact_path(book_id, contact_id), payload)
            .await
    }

    async fn delete(
        &self,
        book_id: &str,
        contact_id: &str,
    ) -> UnsentResult<ContactDeleteResponse> {
        info!("Deleting contact {} of book {}", contact_id, book_id);
        self.http_client
            .delete(&contact_path(book_id, contact_id))
            .await
    }
}
