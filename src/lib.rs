//! Client for the GivEnergy inverter cloud API.
//!
//! ```no_run
//! # async fn run() -> Result<(), givenergy_rs::Error> {
//! use givenergy_rs::api::Client;
//! use givenergy_rs::setting::registry;
//!
//! let client = Client::new("token")?;
//! let limit = client.read_charge_limit("SA1234G567").await?;
//! let value = client.read_setting("SA1234G567", registry::CHARGE_START).await?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate lazy_static;

pub mod api;
pub mod error;
pub mod model;
pub mod setting;

pub use api::{Client, ClientConfig};
pub use error::Error;
