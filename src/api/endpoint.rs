//! Paths relative to the API base URL.

pub type Endpoint = String;

pub fn settings(serial: &str) -> Endpoint {
    format!("/inverter/{}/settings", serial)
}

pub fn setting_read(serial: &str, id: &str) -> Endpoint {
    format!("/inverter/{}/settings/{}/read", serial, id)
}

pub fn setting_write(serial: &str, id: &str) -> Endpoint {
    format!("/inverter/{}/settings/{}/write", serial, id)
}

pub fn system_data_latest(serial: &str) -> Endpoint {
    format!("/inverter/{}/system-data/latest", serial)
}

/// `page` becomes a `page` query parameter; `None` sends no query string at all.
pub fn events(serial: &str, page: Option<u32>) -> Endpoint {
    match page {
        Some(page) => format!("/inverter/{}/events?page={}", serial, page),
        None => format!("/inverter/{}/events", serial),
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn paths() {
        assert_eq!("/inverter/SA1/settings", super::settings("SA1"));
        assert_eq!("/inverter/SA1/settings/64/read", super::setting_read("SA1", "64"));
        assert_eq!("/inverter/SA1/settings/77/write", super::setting_write("SA1", "77"));
        assert_eq!("/inverter/SA1/system-data/latest", super::system_data_latest("SA1"));
    }

    #[test]
    fn events_page_query() {
        assert_eq!("/inverter/SA1/events?page=2", super::events("SA1", Some(2)));
        assert_eq!("/inverter/SA1/events", super::events("SA1", None));
    }
}
