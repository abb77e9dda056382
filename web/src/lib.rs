//! One-route web server over the Dog CEO client.
//!
//! `GET /` fetches three poodle images and returns the URL list as a JSON
//! array. Any client failure becomes a bare `500`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use dog_core::{DogService, Transport};
use tokio::net::TcpListener;
use tracing::error;

/// Breed the `/` route always asks for.
pub const BREED: &str = "poodle";

pub fn app<T: Transport + 'static>(service: DogService<T>) -> Router {
    Router::new()
        .route("/", get(poodle_images::<T>))
        .with_state(Arc::new(service))
}

pub async fn run<T: Transport + 'static>(listener: TcpListener, service: DogService<T>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}

async fn poodle_images<T: Transport>(
    State(service): State<Arc<DogService<T>>>,
) -> Result<Json<Vec<String>>, StatusCode> {
    match service.get_breed_images(BREED).await {
        Ok(response) => Ok(Json(response.into_images())),
        Err(e) => {
            error!(breed = BREED, error = %e, "breed image lookup failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
