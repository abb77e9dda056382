//! Local stand-in for the Dog CEO API used by integration tests.
//!
//! Serves `GET /breed/{breed}/images/random/3` with deterministic image URLs
//! for a handful of breeds and the real API's 404 envelope for anything
//! else. The same route nested under `/malformed` answers with a single
//! string `message`, the shape Dog CEO uses for its single-image endpoints.

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// Breeds the mock knows about. Everything else is a 404.
pub const KNOWN_BREEDS: &[&str] = &["hound", "poodle", "beagle", "akita"];

pub const IMAGES_PER_REQUEST: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BreedImages {
    pub message: Vec<String>,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
    pub code: u16,
}

pub fn app() -> Router {
    let malformed = Router::new().route("/breed/{breed}/images/random/3", get(single_image));
    Router::new()
        .route("/breed/{breed}/images/random/3", get(breed_images))
        .nest("/malformed", malformed)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Deterministic URL of the `index`th image for `breed`.
pub fn image_url(breed: &str, index: usize) -> String {
    format!("https://images.dog.ceo/breeds/{breed}/{breed}_{index}.jpg")
}

fn breed_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            status: "error".to_string(),
            message: "Breed not found (main breed does not exist)".to_string(),
            code: 404,
        }),
    )
}

async fn breed_images(
    Path(breed): Path<String>,
) -> Result<Json<BreedImages>, (StatusCode, Json<ErrorBody>)> {
    debug!(%breed, "breed images requested");
    if !KNOWN_BREEDS.contains(&breed.as_str()) {
        return Err(breed_not_found());
    }
    let message = (1..=IMAGES_PER_REQUEST).map(|i| image_url(&breed, i)).collect();
    Ok(Json(BreedImages {
        message,
        status: "success".to_string(),
    }))
}

async fn single_image(Path(breed): Path<String>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": image_url(&breed, 1),
        "status": "success",
    }))
}
