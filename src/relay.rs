//! Contact-form delivery.
//!
//! The desktop webview never navigates away from the app page, so a form
//! that passes validation is sent to the relay from Rust, with the same
//! fields and encoding a native submission would use.

use std::time::Duration;

use portfolio_core::{FormConfig, PortfolioError, PortfolioResult};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Method, Request, Url};

#[derive(Debug, Clone)]
pub struct Relay {
    client: Client,
    action: Url,
    method: Method,
}

impl Relay {
    pub fn new(config: &FormConfig) -> PortfolioResult<Self> {
        let action = Url::parse(&config.action).map_err(|e| {
            PortfolioError::InvalidConfig(format!("form action {}: {e}", config.action))
        })?;
        let method = match config.method.to_ascii_uppercase().as_str() {
            "POST" => Method::POST,
            "GET" => Method::GET,
            other => {
                return Err(PortfolioError::InvalidConfig(format!(
                    "unsupported form method: {other}"
                )))
            }
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| Client::new());
        Ok(Self {
            client,
            action,
            method,
        })
    }

    /// Build the request for `payload`: urlencoded body for POST, query
    /// string for GET
    pub fn request(&self, payload: &[(String, String)]) -> PortfolioResult<Request> {
        let builder = self
            .client
            .request(self.method.clone(), self.action.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        let builder = if self.method == Method::GET {
            builder.query(payload)
        } else {
            builder.form(payload)
        };
        builder
            .build()
            .map_err(|e| PortfolioError::Relay(e.to_string()))
    }

    /// Send `payload` and require a 2xx answer
    pub async fn deliver(&self, payload: &[(String, String)]) -> PortfolioResult<()> {
        let request = self.request(payload)?;
        tracing::debug!(url = %request.url(), fields = payload.len(), "posting contact form");
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| PortfolioError::Relay(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(PortfolioError::Relay(format!("relay answered {status}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use portfolio_core::{FieldName, FormController};

    use super::*;

    fn filled_form() -> FormController {
        let mut form = FormController::new();
        for (field, value) in [
            (FieldName::Name, "Ada Lovelace"),
            (FieldName::Email, "ada@example.com"),
            (FieldName::Subject, "Hi"),
            (FieldName::Message, "Hello there"),
        ] {
            form.on_input(field, value);
        }
        form
    }

    #[test]
    fn post_body_holds_hidden_then_fields_in_order() {
        let mut config = FormConfig::default();
        config.hidden = BTreeMap::from([("access_key".to_string(), "k-123".to_string())]);
        let relay = Relay::new(&config).unwrap();

        let payload = filled_form().relay_payload(&config.hidden);
        let request = relay.request(&payload).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().as_str(), "https://api.web3forms.com/submit");
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            std::str::from_utf8(body).unwrap(),
            "access_key=k-123&name=Ada+Lovelace&email=ada%40example.com&subject=Hi&message=Hello+there"
        );
    }

    #[test]
    fn get_method_uses_query_string() {
        let config = FormConfig {
            method: "get".to_string(),
            ..FormConfig::default()
        };
        let relay = Relay::new(&config).unwrap();
        let payload = filled_form().relay_payload(&config.hidden);
        let request = relay.request(&payload).unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.url().query(),
            Some("name=Ada+Lovelace&email=ada%40example.com&subject=Hi&message=Hello+there")
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn rejects_bad_config() {
        let bad_url = FormConfig {
            action: "not a url".to_string(),
            ..FormConfig::default()
        };
        assert!(matches!(Relay::new(&bad_url), Err(PortfolioError::InvalidConfig(_))));

        let bad_method = FormConfig {
            method: "DELETE".to_string(),
            ..FormConfig::default()
        };
        assert!(matches!(Relay::new(&bad_method), Err(PortfolioError::InvalidConfig(_))));
    }
}
