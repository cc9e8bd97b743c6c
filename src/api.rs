// API client module: a small blocking HTTP client that talks to the
// sensor controller. The controller serves and accepts `sensores.json`
// on a single path, gated by the `senha` query parameter.

use crate::config::Config;
use crate::credential::Credential;
use crate::error::TransferError;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Path of the sensors document on the controller.
pub const SENSORS_PATH: &str = "sensores.json";
/// Query parameter the controller reads the password from.
pub const PASSWORD_PARAM: &str = "senha";

/// Holds a reqwest blocking client and the base URL of the controller.
#[derive(Clone)]
pub struct ControllerClient {
    client: Client,
    base_url: String,
}

impl ControllerClient {
    /// Build a client for the host in `config`. The client itself has no
    /// timeout; download sets one per request.
    pub fn new(config: &Config) -> Result<Self, TransferError> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(ControllerClient {
            client,
            base_url: config.host.trim_end_matches('/').to_string(),
        })
    }

    /// `{host}/sensores.json?senha=<password>`, password form-encoded.
    pub fn sensors_url(&self, credential: &Credential) -> Result<Url, TransferError> {
        self.url_with_password(credential.expose())
    }

    /// Same as [`sensors_url`](Self::sensors_url) with the password masked,
    /// for display.
    pub fn redacted_sensors_url(&self) -> Result<Url, TransferError> {
        self.url_with_password("***")
    }

    fn url_with_password(&self, password: &str) -> Result<Url, TransferError> {
        let raw = format!("{}/{}", self.base_url, SENSORS_PATH);
        let mut url = Url::parse(&raw).map_err(|e| TransferError::InvalidHost {
            host: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair(PASSWORD_PARAM, password);
        Ok(url)
    }

    /// GET the sensors document and parse it as JSON.
    pub fn fetch_sensors(
        &self,
        credential: &Credential,
        timeout: Duration,
    ) -> Result<serde_json::Value, TransferError> {
        let url = self.sensors_url(credential)?;
        debug!(url = %self.redacted_sensors_url()?, ?timeout, "fetching sensors");

        let res = self.client.get(url).timeout(timeout).send()?;
        let res = ensure_success(res)?;
        let bytes = res.bytes()?;
        debug!(len = bytes.len(), "sensors received");

        serde_json::from_slice(&bytes).map_err(TransferError::InvalidJson)
    }

    /// POST `body` as-is with a JSON content type. Returns the controller's
    /// reply text on success.
    pub fn push_sensors(
        &self,
        credential: &Credential,
        body: Vec<u8>,
    ) -> Result<String, TransferError> {
        let url = self.sensors_url(credential)?;
        debug!(url = %self.redacted_sensors_url()?, len = body.len(), "pushing sensors");

        let res = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()?;
        let res = ensure_success(res)?;
        Ok(res.text()?)
    }
}

/// Turn a non-2xx response into `TransferError::Status`, keeping whatever
/// body the controller sent.
fn ensure_success(res: Response) -> Result<Response, TransferError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().unwrap_or_default();
    debug!(%status, %body, "controller rejected request");
    Err(TransferError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(host: &str) -> ControllerClient {
        let config = Config {
            host: host.into(),
            ..Config::default()
        };
        ControllerClient::new(&config).unwrap()
    }

    #[test]
    fn builds_sensors_url_with_password() {
        let client = client_for("http://alarme.local");
        let url = client.sensors_url(&Credential::new("presidente")).unwrap();
        assert_eq!(url.as_str(), "http://alarme.local/sensores.json?senha=presidente");
    }

    #[test]
    fn password_is_encoded() {
        let client = client_for("http://192.168.1.100/");
        let url = client.sensors_url(&Credential::new("a&b c=d")).unwrap();
        assert_eq!(
            url.as_str(),
            "http://192.168.1.100/sensores.json?senha=a%26b+c%3Dd"
        );
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("senha".to_string(), "a&b c=d".to_string())]);
    }

    #[test]
    fn redacted_url_hides_password() {
        let client = client_for("http://alarme.local");
        let url = client.redacted_sensors_url().unwrap();
        assert_eq!(url.as_str(), "http://alarme.local/sensores.json?senha=***");
    }

    #[test]
    fn bad_host_is_reported() {
        let client = client_for("alarme.local");
        let err = client.sensors_url(&Credential::new("x")).unwrap_err();
        assert!(matches!(err, TransferError::InvalidHost { .. }));
    }
}
