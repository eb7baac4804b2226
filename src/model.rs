use chrono::{DateTime, Utc};
use serde::Deserialize;

type Watts = i64;
type Volts = f64;
type Amps = f64;
type Hertz = f64;
type Celsius = f64;

/// Setting metadata as listed by the inverter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SettingsCatalogEntry {
    pub id: u32,
    pub name: String,
    pub validation: String,
    pub validation_rules: Vec<String>,
}

impl SettingsCatalogEntry {
    /// ID in the string form used by [`SettingDescriptor`](crate::setting::SettingDescriptor).
    pub fn setting_id(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolarArray {
    pub array: u32,
    pub voltage: Volts,
    pub current: Amps,
    pub power: Watts,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Solar {
    pub power: Watts,
    pub arrays: Vec<SolarArray>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Grid {
    pub voltage: Volts,
    pub current: Amps,
    /// Positive when exporting.
    pub power: Watts,
    pub frequency: Hertz,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Battery {
    pub percent: u8,
    /// Negative when charging.
    pub power: Watts,
    pub temperature: Celsius,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Inverter {
    pub temperature: Celsius,
    pub power: Watts,
    pub output_voltage: Volts,
    pub output_frequency: Hertz,
    pub eps_power: Watts,
}

/// Latest point-in-time telemetry of an inverter system.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemData {
    pub time: DateTime<Utc>,
    pub status: String,
    pub solar: Solar,
    pub grid: Grid,
    pub battery: Battery,
    pub inverter: Inverter,
    pub consumption: Watts,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    pub event: String,
    pub start_time: DateTime<Utc>,
    /// `None` while the event is ongoing.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub from: Option<u32>,
    pub last_page: u32,
    pub path: String,
    pub per_page: u32,
    pub to: Option<u32>,
    pub total: u32,
}

/// One page of inverter events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventsPage {
    #[serde(rename = "data")]
    pub events: Vec<Event>,
    pub links: PageLinks,
    pub meta: PageMeta,
}

impl EventsPage {
    pub fn has_next_page(&self) -> bool {
        self.meta.current_page < self.meta.last_page
    }
}
