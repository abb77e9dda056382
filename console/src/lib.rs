//! Console runner: fetch hound images once and print them.

use std::io::Write;

use anyhow::Context;
use dog_core::{BreedImageResponse, DogService, Transport};
use tracing::info;

/// Breed the console always asks for.
pub const BREED: &str = "hound";

/// `Images =` header, one URL per line in API order, then the status line.
pub fn render(response: &BreedImageResponse) -> String {
    let mut out = String::from("Images =\n");
    for image in response.images() {
        out.push_str(image);
        out.push('\n');
    }
    out.push_str("Status = ");
    out.push_str(response.status().unwrap_or_default());
    out.push('\n');
    out
}

pub async fn run<T: Transport, W: Write>(service: &DogService<T>, out: &mut W) -> anyhow::Result<()> {
    info!(breed = BREED, base_url = service.client().base_url(), "fetching breed images");
    let response = service
        .get_breed_images(BREED)
        .await
        .with_context(|| format!("failed to fetch images for breed {BREED:?}"))?;
    out.write_all(render(&response).as_bytes())?;
    out.flush()?;
    Ok(())
}
