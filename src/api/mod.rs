pub mod endpoint;
pub mod response;
mod settings;
pub mod transport;

pub use crate::error::Error;
use crate::model::{EventsPage, SettingsCatalogEntry, SystemData};
use crate::setting::{codec, SettingDescriptor, SettingType, SettingValue, WriteResult};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use transport::{ReqwestTransport, Transport};

pub const DEFAULT_API_URL: &str = "https://api.givenergy.cloud/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const APPLICATION_JSON: &str = "application/json";

/// Construction parameters of [`Client`].
///
/// Defaults: base URL [`DEFAULT_API_URL`], per-request timeout [`DEFAULT_TIMEOUT`] and a
/// [`ReqwestTransport`]. `timeout` only applies to the default transport.
#[derive(Clone)]
pub struct ClientConfig {
    pub token: String,
    pub api_url: String,
    pub timeout: Duration,
    pub transport: Option<Arc<dyn Transport>>,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        ClientConfig {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("transport", &self.transport.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// GivEnergy inverter API client.
///
/// Holds no mutable state; one instance can serve concurrent calls as long as its transport can.
/// Every operation performs exactly one request. Dropping the returned future cancels it.
#[derive(Clone)]
pub struct Client {
    api_url: String,
    authorization: HeaderValue,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        if config.token.trim().is_empty() {
            return Err(Error::Config("token must not be empty".to_string()));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::Config("token is not a valid header value".to_string()))?;
        authorization.set_sensitive(true);

        let api_url = config.api_url.trim_end_matches('/').to_owned();
        match url::Url::parse(&api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(Error::Config(format!(
                    "unsupported API URL scheme: {}",
                    url.scheme()
                )))
            }
            Err(e) => return Err(Error::Config(format!("invalid API URL {}: {}", api_url, e))),
        }

        let transport = match config.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.timeout)?),
        };

        Ok(Client {
            api_url,
            authorization,
            transport,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Performs one request and returns the body of a 2xx response.
    ///
    /// A non-2xx status becomes [`Error::Remote`] carrying the full body; it is never decoded.
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        let url = format!("{}{}", self.api_url, endpoint);

        let request = http::Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(AUTHORIZATION, self.authorization.clone())
            .body(body.unwrap_or_default())
            .map_err(|e| Error::Transport(Box::new(e)))?;

        log::debug!("{} {}", method, url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response.into_body();

        log::trace!("{} {}: {} ({} bytes)", method, url, status, body.len());

        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Remote {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            })
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        let body = self.send(Method::GET, endpoint, None).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// List settings available on the inverter.
    pub async fn list_settings(&self, serial: &str) -> Result<Vec<SettingsCatalogEntry>, Error> {
        self.get::<response::ListSettings>(&endpoint::settings(serial))
            .await
            .map(|response| response.data)
    }

    /// Read the current value of any setting, decoded per `descriptor.kind`.
    pub async fn read_setting(
        &self,
        serial: &str,
        descriptor: SettingDescriptor<'_>,
    ) -> Result<SettingValue, Error> {
        let body = self
            .send(Method::POST, &endpoint::setting_read(serial, descriptor.id), None)
            .await?;
        codec::decode_read_value(descriptor, &body)
    }

    /// Write `value` to any setting. The value kind is checked before anything is sent.
    ///
    /// A rejected write is returned as `Ok` with `success == false`.
    pub async fn write_setting(
        &self,
        serial: &str,
        descriptor: SettingDescriptor<'_>,
        value: &SettingValue,
        context: Option<&str>,
    ) -> Result<WriteResult, Error> {
        let request_body = codec::encode_write_body(descriptor, value, context)?;
        let body = self
            .send(
                Method::POST,
                &endpoint::setting_write(serial, descriptor.id),
                Some(request_body),
            )
            .await?;
        codec::decode_write_result(descriptor, &body)
    }

    /// Like [`Client::read_setting`] but returns the value as `T`.
    pub async fn read_typed<T: SettingType>(
        &self,
        serial: &str,
        descriptor: SettingDescriptor<'_>,
    ) -> Result<T, Error> {
        descriptor.expect_kind(T::KIND)?;
        let body = self
            .send(Method::POST, &endpoint::setting_read(serial, descriptor.id), None)
            .await?;
        codec::decode_read(&body)
    }

    /// Like [`Client::write_setting`] but takes and returns the value as `T`.
    pub async fn write_typed<T: SettingType>(
        &self,
        serial: &str,
        descriptor: SettingDescriptor<'_>,
        value: T,
        context: Option<&str>,
    ) -> Result<WriteResult<T>, Error> {
        let request_body = codec::encode_typed(descriptor, value, context)?;
        let body = self
            .send(
                Method::POST,
                &endpoint::setting_write(serial, descriptor.id),
                Some(request_body),
            )
            .await?;
        codec::decode_write(&body)
    }

    pub async fn latest_system_data(&self, serial: &str) -> Result<SystemData, Error> {
        self.get::<response::SystemDataLatest>(&endpoint::system_data_latest(serial))
            .await
            .map(|response| response.data)
    }

    /// Fetch one page of events. `None` requests the server's default (first) page.
    pub async fn events(&self, serial: &str, page: Option<u32>) -> Result<EventsPage, Error> {
        self.get::<response::Events>(&endpoint::events(serial, page))
            .await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_empty_token() {
        assert!(matches!(Client::new("  "), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_bad_api_url() {
        let config = ClientConfig::new("toke").with_api_url("api.givenergy.cloud/v1");
        assert!(matches!(Client::with_config(config), Err(Error::Config(_))));

        let config = ClientConfig::new("toke").with_api_url("ftp://api.givenergy.cloud/v1");
        assert!(matches!(Client::with_config(config), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_token_with_newline() {
        assert!(matches!(Client::new("to\nke"), Err(Error::Config(_))));
    }

    #[test]
    fn trims_trailing_slash() {
        let config = ClientConfig::new("toke").with_api_url("https://example.com/v1/");
        let client = Client::with_config(config).unwrap();
        assert_eq!("https://example.com/v1", client.api_url());
    }

    #[test]
    fn defaults() {
        let client = Client::new("toke").unwrap();
        assert_eq!(DEFAULT_API_URL, client.api_url());
        assert_eq!(Duration::from_secs(5), ClientConfig::new("toke").timeout);
    }

    #[test]
    fn debug_hides_token() {
        let config = ClientConfig::new("secret-token");
        assert!(!format!("{:?}", config).contains("secret-token"));
    }
}
