use anyhow::Context;
use config::Config;
use givenergy_rs::api::{self, Client, ClientConfig};
use std::time::Duration;

#[derive(Clone, serde::Deserialize)]
pub struct GivEnergyConfig {
    api_url: String,
    token: String,
    serial: String,
    /// Per-request timeout, seconds.
    timeout: u64,
}

pub fn read_settings() -> anyhow::Result<GivEnergyConfig> {
    Config::builder()
        .set_default("api_url", api::DEFAULT_API_URL)?
        .set_default("timeout", api::DEFAULT_TIMEOUT.as_secs())?
        .add_source(config::Environment::with_prefix("GIVENERGY"))
        .build()?
        .try_deserialize()
        .context("GIVENERGY_TOKEN and GIVENERGY_SERIAL must be set")
}

/// Dump what the API knows about one inverter.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = read_settings()?;
    let client = Client::with_config(
        ClientConfig::new(settings.token)
            .with_api_url(settings.api_url)
            .with_timeout(Duration::from_secs(settings.timeout)),
    )?;
    let serial = settings.serial.as_str();

    let system_data = client
        .latest_system_data(serial)
        .await
        .context("failed to read latest system data")?;
    println!("{:#?}", system_data);

    let catalog = client
        .list_settings(serial)
        .await
        .context("failed to list settings")?;
    println!("{:#?}", catalog);

    let events = client
        .events(serial, None)
        .await
        .context("failed to list events")?;
    println!("{:#?}", events);

    if events.has_next_page() {
        log::info!(
            "{} more event page(s) not shown",
            events.meta.last_page - events.meta.current_page
        );
    }

    Ok(())
}
