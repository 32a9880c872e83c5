use unsent::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Starting domains example");
    let client = Client::from_env()?;

    let domains = client.domains().list().await?;
    info!("{} domains found", domains.len());

    for domain in &domains {
        info!("{} ({}): {:?}", domain.name, domain.id, domain.status);
        if !domain.is_verified() {
            match client.domains().verify(domain.id).await {
                Ok(outcome) => info!("Verification requested: {}", outcome.message),
                Err(e) => error!("Verification failed: {}", e),
            }
        }
    }

    Ok(())
}
