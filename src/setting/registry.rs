use super::{SettingDescriptor, SettingKind};
use std::collections::HashMap;

macro_rules! known_settings {
    ($($(#[$doc:meta])* $konst:ident = ($name:literal, $id:literal, $kind:ident);)*) => {
        $(
            $(#[$doc])*
            pub const $konst: SettingDescriptor<'static> =
                SettingDescriptor::new($id, SettingKind::$kind);
        )*

        /// All well-known settings keyed by their kebab-case name.
        pub const KNOWN_SETTINGS: &[(&str, SettingDescriptor<'static>)] = &[$(($name, $konst)),*];
    };
}

known_settings! {
    /// AC charge start time, `HH:mm`.
    CHARGE_START = ("charge-start", "64", Text);
    /// AC charge end time, `HH:mm`.
    CHARGE_END = ("charge-end", "65", Text);
    CHARGE_ENABLED = ("charge-enabled", "66", Boolean);
    /// AC charge upper limit, percent.
    CHARGE_LIMIT = ("charge-limit", "77", Integer);
    DISCHARGE_ENABLED = ("discharge-enabled", "56", Boolean);
    /// Battery discharge start time, `HH:mm`.
    DISCHARGE_START = ("discharge-start", "53", Text);
    /// Battery discharge end time, `HH:mm`.
    DISCHARGE_END = ("discharge-end", "54", Text);
    ECO_MODE_ENABLED = ("eco-mode-enabled", "24", Boolean);
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, SettingDescriptor<'static>> =
        KNOWN_SETTINGS.iter().copied().collect();
}

/// Looks up a well-known setting by name, e.g. `"charge-limit"`.
pub fn lookup(name: &str) -> Option<SettingDescriptor<'static>> {
    BY_NAME.get(name).copied()
}

/// Reverse lookup: name of a well-known setting ID.
pub fn name_of(id: &str) -> Option<&'static str> {
    KNOWN_SETTINGS
        .iter()
        .find(|(_, descriptor)| descriptor.id == id)
        .map(|(name, _)| *name)
}
