use crate::model::{EventsPage, SettingsCatalogEntry, SystemData};
pub use crate::setting::codec::Envelope;

pub type ListSettings = Envelope<Vec<SettingsCatalogEntry>>;

pub type SystemDataLatest = Envelope<SystemData>;

/* Events are not enveloped: `data`, `links` and `meta` are siblings */
pub type Events = EventsPage;
