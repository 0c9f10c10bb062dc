//! Browse the featured creations feed and print thumbnail URLs

use sporepedia_client::{AssetId, SporepediaClient, ViewType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = SporepediaClient::new()?;

    println!("Fetching featured creations...\n");
    let feed = client.search(ViewType::Featured, 0, 10).await?;
    println!("{feed:#}");

    // Thumbnail and full-size URLs for a known asset.
    let asset = AssetId::new("500327625531")?;
    println!("\nthumb: {}", client.asset_thumb_url(&asset)?);
    println!("image: {}", client.asset_image_url(&asset)?);

    Ok(())
}
