//! Fetch and print today's Spore.com statistics

use spore_rest_client::RestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = RestClient::new()?;

    println!("Fetching daily stats from {}...\n", client.base_url());
    let stats = client.stats().await?;
    println!("{stats:#}");

    Ok(())
}
