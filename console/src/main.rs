use dog_core::{ClientConfig, DogService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let service = DogService::from_config(&config)?;
    dog_console::run(&service, &mut std::io::stdout()).await
}
