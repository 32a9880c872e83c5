use std::env;
use unsent::prelude::*;

/// Creates a client from the environment, with logging enabled
pub fn create_test_client() -> Client {
    setup_logger();
    Client::from_env().expect("UNSENT_API_KEY must be set for integration tests")
}

/// Contact book used by the contact tests
pub fn test_book_id() -> String {
    env::var("UNSENT_TEST_CONTACT_BOOK_ID")
        .expect("UNSENT_TEST_CONTACT_BOOK_ID must be set for contact tests")
}
