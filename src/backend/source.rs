//! Telemetry sources
//!
//! [`TelemetrySource`] is the seam between the poll worker and the network.
//! [`HttpTelemetrySource`] talks to the real backend; tests substitute their
//! own implementations.

use crate::error::{DashboardError, Result};
use crate::types::{Notification, SensorReading};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Endpoint returning the latest [`SensorReading`]
pub const DATA_ENDPOINT: &str = "/data";

/// Endpoint returning the full notification log
pub const NOTIFICATIONS_ENDPOINT: &str = "/notifications";

/// Something that can produce readings and notifications
pub trait TelemetrySource: Send + Sync + 'static {
    /// Fetch the latest sensor reading
    fn fetch_reading(&self) -> impl Future<Output = Result<SensorReading>> + Send;

    /// Fetch the complete notification log
    fn fetch_notifications(&self) -> impl Future<Output = Result<Vec<Notification>>> + Send;
}

/// HTTP client for the telemetry backend
#[derive(Debug, Clone)]
pub struct HttpTelemetrySource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTelemetrySource {
    /// Create a client; `timeout` bounds each request
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.endpoint_url(endpoint);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        parse_payload(endpoint, &body)
    }
}

impl TelemetrySource for HttpTelemetrySource {
    async fn fetch_reading(&self) -> Result<SensorReading> {
        self.get_json(DATA_ENDPOINT).await
    }

    async fn fetch_notifications(&self) -> Result<Vec<Notification>> {
        self.get_json(NOTIFICATIONS_ENDPOINT).await
    }
}

/// Decode a JSON body, attributing failures to `endpoint`
pub fn parse_payload<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| DashboardError::MalformedResponse {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_trims_slash() {
        let source =
            HttpTelemetrySource::new("http://127.0.0.1:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.base_url(), "http://127.0.0.1:5000");
        assert_eq!(
            source.endpoint_url(DATA_ENDPOINT),
            "http://127.0.0.1:5000/data"
        );
    }

    #[test]
    fn test_parse_reading() {
        let body = br#"{"soil":650,"smoke":120,"ldr":450,"flame":1,"timestamp":"2024-05-01 12:00:00"}"#;
        let reading: SensorReading = parse_payload(DATA_ENDPOINT, body).unwrap();
        assert_eq!(reading.ldr, 450.0);
    }

    #[test]
    fn test_parse_non_json_is_malformed() {
        let err = parse_payload::<SensorReading>(DATA_ENDPOINT, b"<html>oops</html>").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("/data"));
    }

    #[test]
    fn test_parse_wrong_shape_is_malformed() {
        let err =
            parse_payload::<Vec<Notification>>(NOTIFICATIONS_ENDPOINT, br#"{"title":"x"}"#)
                .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_parse_empty_notifications() {
        let list: Vec<Notification> = parse_payload(NOTIFICATIONS_ENDPOINT, b"[]").unwrap();
        assert!(list.is_empty());
    }
}
