use serde::Serialize;

use crate::{config::MailerConfig, contact::EmailParams};

#[cfg(feature = "ssr")]
use crate::contact::{Mailer, MailerError};

/// JSON body of an EmailJS send request.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
    pub template_params: &'a EmailParams,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a MailerConfig, params: &'a EmailParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: params,
        }
    }
}

/// Delivers contact messages through the EmailJS REST API.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    config: std::sync::Arc<MailerConfig>,
    client: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl EmailJsMailer {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            config: std::sync::Arc::new(config),
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "ssr")]
impl Mailer for EmailJsMailer {
    async fn send(&self, params: EmailParams) -> Result<(), MailerError> {
        let body = SendRequest::new(&self.config, &params);
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            tracing::info!(to = %params.to_name, "contact message delivered");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        tracing::warn!(status = %status, body = %body, "mail service rejected contact message");
        Err(MailerError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EMAILJS_ENDPOINT;

    fn config(private_key: Option<&str>) -> MailerConfig {
        MailerConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            private_key: private_key.map(str::to_string),
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
        }
    }

    fn params() -> EmailParams {
        EmailParams {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            to_name: "Site Owner".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let config = config(None);
        let params = params();
        let body = serde_json::to_value(SendRequest::new(&config, &params)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "subject": "Hi",
                    "message": "Hello",
                    "to_name": "Site Owner",
                }
            })
        );
    }

    #[test]
    fn test_private_key_sent_as_access_token() {
        let config = config(Some("sk_456"));
        let params = params();
        let body = serde_json::to_value(SendRequest::new(&config, &params)).unwrap();
        assert_eq!(body["accessToken"], "sk_456");
    }
}
