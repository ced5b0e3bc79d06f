use serde::Serialize;
use thiserror::Error;

use crate::config::JiraConfig;
use crate::models::CreatedIssue;
use crate::payload::CreateIssueRequest;

#[derive(Error, Debug)]
pub enum JiraError {
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Failed to parse response: {body}")]
    Parse { body: String },
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub struct JiraClient {
    client: reqwest::Client,
    config: JiraConfig,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    async fn _post<T, B>(&self, path: &str, body: &B) -> Result<T, JiraError>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|_| JiraError::Parse { body: text })
        } else {
            Err(JiraError::Api {
                status: status.as_u16(),
                body: text,
            })
        }
    }

    pub async fn create_issue(
        &self,
        request: &CreateIssueRequest,
    ) -> Result<CreatedIssue, JiraError> {
        self._post("/rest/api/3/issue", request).await
    }
}
