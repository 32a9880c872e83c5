use crate::error::UnsentResult;
use crate::model::requests::{ContactCreate, ContactListQuery, ContactUpdate, ContactUpsert};
use crate::model::responses::{
    ContactCreateResponse, ContactDeleteResponse, ContactUpdateResponse, ContactUpsertResponse,
};
use crate::presentation::contact::Contact;
use async_trait::async_trait;

/// Interface for the `/contactBooks/{book_id}/contacts` endpoints
///
/// A contact is identified by the pair `(book_id, contact_id)`.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Lists the contacts of a book
    ///
    /// Returns the single page selected by `query`; no further pages are fetched.
    async fn list(&self, book_id: &str, query: &ContactListQuery) -> UnsentResult<Vec<Contact>>;

    /// Adds a contact to a book
    async fn create(
        &self,
        book_id: &str,
        payload: &ContactCreate,
    ) -> UnsentResult<ContactCreateResponse>;

    /// Gets one contact
    async fn get(&self, book_id: &str, contact_id: &str) -> UnsentResult<Contact>;

    /// Partially updates a contact
    async fn update(
        &self,
        book_id: &str,
        contact_id: &str,
        payload: &ContactUpdate,
    ) -> UnsentResult<ContactUpdateResponse>;

    /// Creates the contact if `contact_id` is unknown, updates it otherwise
    async fn upsert(
        &self,
        book_id: &str,
        contact_id: &str,
        payload: &ContactUpsert,
    ) -> UnsentResult<ContactUpsertResponse>;

    /// Removes a contact from a book
    async fn delete(&self, book_id: &str, contact_id: &str)
    -> UnsentResult<ContactDeleteResponse>;
}
