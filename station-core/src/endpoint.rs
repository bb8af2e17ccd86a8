use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use std::fmt::Debug;

use crate::{
    Config, SubmitError,
    model::{CityQuery, ErrorReply, StationReply},
};

/// Something that can answer "what is the temperature in `city`".
#[async_trait]
pub trait WeatherEndpoint: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<StationReply, SubmitError>;
}

/// The backend reached over HTTP: `POST {"city": ..}` and a JSON reply.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    url: String,
    http: Client,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WeatherEndpoint for HttpEndpoint {
    async fn fetch(&self, city: &str) -> Result<StationReply, SubmitError> {
        debug!("requesting weather for {city:?} from {}", self.url);

        let res = self
            .http
            .post(&self.url)
            .json(&CityQuery { city })
            .send()
            .await
            .inspect_err(|e| error!("Error fetching weather data: {e}"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .inspect_err(|e| error!("Error reading weather reply: {e}"))?;

        if !status.is_success() {
            error!("weather request failed with status {status}: {}", truncate_body(&body));

            // The body must be JSON even on failure; `null` has no `error` to read.
            let value: Value = serde_json::from_str(&body)?;
            let reply: ErrorReply = match value {
                Value::Object(_) | Value::Null => serde_json::from_value(value)?,
                _ => ErrorReply::default(),
            };
            return Err(SubmitError::Rejected(reply.message()));
        }

        let reply: StationReply = serde_json::from_str(&body).inspect_err(|e| {
            error!("Error parsing weather reply ({e}): {}", truncate_body(&body))
        })?;

        debug!("received {reply:?}");
        Ok(reply)
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Temperature;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    fn endpoint_for(server: &MockServer) -> HttpEndpoint {
        HttpEndpoint::new(format!("{}/weather", server.uri()))
    }

    #[tokio::test]
    async fn posts_city_as_json_and_parses_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/weather"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "city": "Tokyo" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "temperature": 24,
                "city": "Tokyo",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = endpoint_for(&server)
            .fetch("Tokyo")
            .await
            .expect("fetch should succeed");

        assert_eq!(reply.temperature, Temperature::Number(24.0));
        assert_eq!(reply.city, "Tokyo");
    }

    #[tokio::test]
    async fn any_success_status_counts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "temperature": "3",
                "city": "Oslo",
            })))
            .mount(&server)
            .await;

        let reply = endpoint_for(&server)
            .fetch("Oslo")
            .await
            .expect("201 is a success");
        assert_eq!(reply.city, "Oslo");
    }

    #[tokio::test]
    async fn error_status_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "error": "City not found" })),
            )
            .mount(&server)
            .await;

        let err = endpoint_for(&server).fetch("Atlantis").await.unwrap_err();

        assert!(matches!(err, SubmitError::Rejected(Some(_))));
        assert_eq!(err.to_string(), "City not found");
    }

    #[tokio::test]
    async fn error_status_with_empty_message_uses_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "" })))
            .mount(&server)
            .await;

        let err = endpoint_for(&server).fetch("Paris").await.unwrap_err();

        assert!(matches!(err, SubmitError::Rejected(None)));
        assert_eq!(err.to_string(), "Failed to get weather data");
    }

    #[tokio::test]
    async fn error_status_without_message_uses_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "boom" })))
            .mount(&server)
            .await;

        let err = endpoint_for(&server).fetch("Paris").await.unwrap_err();

        assert!(matches!(err, SubmitError::Rejected(None)));
        assert_eq!(err.to_string(), "Failed to get weather data");
    }

    #[tokio::test]
    async fn error_status_with_numeric_message_prints_it() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "error": 42 })))
            .mount(&server)
            .await;

        let err = endpoint_for(&server).fetch("Paris").await.unwrap_err();

        assert_eq!(err.to_string(), "42");
    }

    #[tokio::test]
    async fn error_status_with_non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = endpoint_for(&server).fetch("Paris").await.unwrap_err();

        assert!(matches!(err, SubmitError::Malformed(_)));
        assert_eq!(err.to_string(), "Failed to fetch weather data");
    }

    #[tokio::test]
    async fn error_status_with_null_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("null"))
            .mount(&server)
            .await;

        let err = endpoint_for(&server).fetch("Paris").await.unwrap_err();

        assert!(matches!(err, SubmitError::Malformed(_)));
    }

    #[tokio::test]
    async fn city_is_sent_as_typed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({ "city": "  London " })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "temperature": 11,
                "city": "London",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = endpoint_for(&server)
            .fetch("  London ")
            .await
            .expect("fetch should succeed");
        assert_eq!(reply.city, "London");
    }

    #[tokio::test]
    async fn success_with_bad_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "temp": 10 })))
            .mount(&server)
            .await;

        let err = endpoint_for(&server).fetch("Rome").await.unwrap_err();

        assert!(matches!(err, SubmitError::Malformed(_)));
        assert_eq!(err.to_string(), "Failed to fetch weather data");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        // Nothing listens on port 9 locally.
        let endpoint = HttpEndpoint::new("http://127.0.0.1:9/weather");

        let err = endpoint.fetch("Berlin").await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(err.to_string(), "Failed to fetch weather data");
    }

    #[test]
    fn from_config_uses_configured_url() {
        let cfg = Config {
            endpoint: "http://example.test/weather".into(),
        };
        assert_eq!(
            HttpEndpoint::from_config(&cfg).url(),
            "http://example.test/weather"
        );
    }

    #[test]
    fn truncate_body_keeps_char_boundaries() {
        let long = "°".repeat(300);
        assert_eq!(truncate_body(&long).chars().count(), 200);
        assert_eq!(truncate_body("short"), "short");
    }
}
