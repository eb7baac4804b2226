//! Typed accessors for the well-known settings.

use super::{Client, Error};
use crate::setting::registry;
use crate::setting::WriteResult;

macro_rules! typed_settings {
    ($($descriptor:ident: $ty:ty => $read:ident, $write:ident;)*) => {
        impl Client {
            $(
                #[doc = concat!("Read [`", stringify!($descriptor), "`](registry::", stringify!($descriptor), ").")]
                pub async fn $read(&self, serial: &str) -> Result<$ty, Error> {
                    self.read_typed(serial, registry::$descriptor).await
                }

                #[doc = concat!("Write [`", stringify!($descriptor), "`](registry::", stringify!($descriptor), ").")]
                pub async fn $write(
                    &self,
                    serial: &str,
                    value: $ty,
                    context: Option<&str>,
                ) -> Result<WriteResult<$ty>, Error> {
                    self.write_typed(serial, registry::$descriptor, value, context).await
                }
            )*
        }
    };
}

typed_settings! {
    CHARGE_START: String => read_charge_start, write_charge_start;
    CHARGE_END: String => read_charge_end, write_charge_end;
    CHARGE_ENABLED: bool => read_charge_enabled, write_charge_enabled;
    CHARGE_LIMIT: i64 => read_charge_limit, write_charge_limit;
    DISCHARGE_ENABLED: bool => read_discharge_enabled, write_discharge_enabled;
    DISCHARGE_START: String => read_discharge_start, write_discharge_start;
    DISCHARGE_END: String => read_discharge_end, write_discharge_end;
    ECO_MODE_ENABLED: bool => read_eco_mode_enabled, write_eco_mode_enabled;
}
