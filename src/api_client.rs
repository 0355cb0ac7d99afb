use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::errors::SynapseError;
use crate::settings::{SynapseApiMode, SynapseSettings};

/// The node endpoints of the SynapsePay service, as consumed by the mapping
/// layer. Implementations own request dispatch and error surfacing; callers
/// get the parsed JSON document back or a typed error.
#[async_trait]
pub trait NodesApi: Send + Sync {
    /// POST `/users/{user_id}/nodes`
    async fn create_node(&self, user_id: &str, payload: &Value) -> Result<Value, SynapseError>;

    /// GET `/users/{user_id}/nodes`
    async fn get_nodes(&self, user_id: &str) -> Result<Value, SynapseError>;

    /// GET `/users/{user_id}/nodes/{node_id}`
    async fn get_node(&self, user_id: &str, node_id: &str) -> Result<Value, SynapseError>;

    /// PATCH `/users/{user_id}/nodes/{node_id}`
    async fn patch_node(&self, user_id: &str, node_id: &str, payload: &Value) -> Result<Value, SynapseError>;

    /// DELETE `/users/{user_id}/nodes/{node_id}`
    async fn delete_node(&self, user_id: &str, node_id: &str) -> Result<Value, SynapseError>;
}

/// HTTP client for the SynapsePay REST API.
///
/// Gateway credentials are baked into the default headers at construction.
/// Each call is a single attempt; transport and status failures surface to the
/// caller untranslated.
pub struct SynapseClient {
    pub client: Arc<Client>,
    pub base_endpoint: String,
}

impl SynapseClient {
    pub fn new(settings: SynapseSettings) -> Result<SynapseClient, SynapseError> {
        let client = Client::builder()
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    "X-SP-GATEWAY",
                    reqwest::header::HeaderValue::from_str(&format!("{}|{}", settings.client_id, settings.client_secret)).unwrap(),
                );
                // No oauth key at gateway scope, the fingerprint stands alone.
                headers.insert(
                    "X-SP-USER",
                    reqwest::header::HeaderValue::from_str(&format!("|{}", settings.fingerprint)).unwrap(),
                );
                headers.insert(
                    "X-SP-USER-IP",
                    reqwest::header::HeaderValue::from_str(&settings.user_ip).unwrap(),
                );
                headers
            })
            .build()?;

        let base_endpoint = match settings.mode {
            SynapseApiMode::Sandbox => "https://sandbox.synapsepay.com/api/3",
            SynapseApiMode::Production => "https://synapsepay.com/api/3",
        }.to_string();

        Ok(SynapseClient {
            client: Arc::new(client),
            base_endpoint,
        })
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, SynapseError> {
        let status = response.status();
        let content = response.text().await?;

        if !status.is_success() {
            eprintln!("Synapse API request failed: HTTP {}", status);
            return Err(SynapseError::Api {
                status: status.as_u16(),
                body: content,
            });
        }

        // v3.1.0 deletes return success with no body at all.
        if content.is_empty() {
            return Ok(Value::Null);
        }

        let json: Value = serde_json::from_str(&content)?;
        Ok(json)
    }
}

#[async_trait]
impl NodesApi for SynapseClient {
    async fn create_node(&self, user_id: &str, payload: &Value) -> Result<Value, SynapseError> {
        let url = format!("{}/users/{}/nodes", self.base_endpoint, user_id);
        let response = self.client.post(&url).json(payload).send().await?;
        SynapseClient::read_json(response).await
    }

    async fn get_nodes(&self, user_id: &str) -> Result<Value, SynapseError> {
        let url = format!("{}/users/{}/nodes", self.base_endpoint, user_id);
        let response = self.client.get(&url).send().await?;
        SynapseClient::read_json(response).await
    }

    async fn get_node(&self, user_id: &str, node_id: &str) -> Result<Value, SynapseError> {
        let url = format!("{}/users/{}/nodes/{}", self.base_endpoint, user_id, node_id);
        let response = self.client.get(&url).send().await?;
        SynapseClient::read_json(response).await
    }

    async fn patch_node(&self, user_id: &str, node_id: &str, payload: &Value) -> Result<Value, SynapseError> {
        let url = format!("{}/users/{}/nodes/{}", self.base_endpoint, user_id, node_id);
        let response = self.client.patch(&url).json(payload).send().await?;
        SynapseClient::read_json(response).await
    }

    async fn delete_node(&self, user_id: &str, node_id: &str) -> Result<Value, SynapseError> {
        let url = format!("{}/users/{}/nodes/{}", self.base_endpoint, user_id, node_id);
        let response = self.client.delete(&url).send().await?;
        SynapseClient::read_json(response).await
    }
}
