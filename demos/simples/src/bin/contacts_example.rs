use std::env;
use unsent::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let book_id = env::var("UNSENT_CONTACT_BOOK_ID")?;
    let client = Client::from_env()?;

    let payload = ContactCreate::new("ada@example.com")
        .with_first_name("Ada")
        .with_last_name("Lovelace")
        .with_property("plan", "pro");
    let created = client.contacts().create(&book_id, &payload).await?;
    info!("Contact created: {}", created.contact_id);

    let contact = client.contacts().get(&book_id, &created.contact_id).await?;
    info!("Contact: {}", contact);

    let update = ContactUpdate {
        subscribed: Some(false),
        ..Default::default()
    };
    client
        .contacts()
        .update(&book_id, &created.contact_id, &update)
        .await?;

    let deleted = client
        .contacts()
        .delete(&book_id, &created.contact_id)
        .await?;
    info!("Contact deleted: {}", deleted.success);

    Ok(())
}
