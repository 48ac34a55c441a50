//! Example: Generate images from a prompt
//!
//! ## Usage
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! # optional defaults
//! export OPENAI_DEFAULT_IMAGE_SIZE=512x512
//! export OPENAI_DEFAULT_NUMBER_OF_IMAGES=2
//!
//! RUST_LOG=integrations_openai_images=debug cargo run --example generate_image -- "a red fox in snow"
//! ```

use integrations_openai_images::{ImageRequestClient, ImageResult};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "A watercolor painting of a lighthouse".to_string());

    let client = ImageRequestClient::from_env()?;
    println!("Generating with {:?}\n", client.config());

    match client.generate_images(&prompt, None, None).await? {
        ImageResult::Single(image) => println!("{}", image),
        ImageResult::Multiple(images) => {
            for (i, image) in images.iter().enumerate() {
                println!("[{}] {}", i + 1, image);
            }
        }
    }

    Ok(())
}
