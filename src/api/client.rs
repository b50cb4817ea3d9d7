use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::api::models::{DmReply, DmRequest};
use crate::error::SendError;

#[derive(Debug, Clone)]
pub struct DmClient {
    pub http: HttpClient,
    pub endpoint: Url,
}

impl DmClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint,
        }
    }

    /// Submit one message to the relay and return its status text.
    ///
    /// The body is parsed before the HTTP status is looked at, so a failing
    /// response that is not JSON surfaces as [`SendError::Decode`].
    pub async fn send_dm(&self, req: &DmRequest) -> Result<String, SendError> {
        log::info!("Sending DM to '{}' via {}", req.username, self.endpoint);
        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(req)
            .send()
            .await?;

        let code = resp.status();
        let reply: DmReply = resp.json().await?;
        if !code.is_success() {
            log::warn!("Relay answered HTTP {code}: {:?}", reply.failure_text());
            return Err(SendError::Http {
                code: code.as_u16(),
                status: reply.failure_text(),
            });
        }
        Ok(reply.status.unwrap_or_default())
    }
}
