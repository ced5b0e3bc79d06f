use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
}

/// Numeric issue type ids as configured in the target Jira project.
#[derive(Debug, Clone)]
pub struct IssueTypeIds {
    pub epic: String,
    pub story: String,
    pub task: String,
    pub subtask: String,
}

#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub domain: String,
    pub base_url: String,
    pub email: String,
    pub api_token: String,
    pub project_key: String,
    pub issue_types: IssueTypeIds,
    /// Field id for story points. Deployment-specific, so configurable.
    pub story_points_field: String,
}

impl JiraConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let email = lookup("JIRA_EMAIL").ok_or(ConfigError::Missing("JIRA_EMAIL"))?;
        let api_token = lookup("JIRA_API_TOKEN").ok_or(ConfigError::Missing("JIRA_API_TOKEN"))?;

        let domain =
            lookup("JIRA_DOMAIN").unwrap_or_else(|| "wrrk-ai.atlassian.net".to_string());
        let base_url =
            lookup("JIRA_BASE_URL").unwrap_or_else(|| format!("https://{}", domain));

        Ok(Self {
            domain,
            base_url,
            email,
            api_token,
            project_key: lookup("JIRA_PROJECT_KEY").unwrap_or_else(|| "SCRUM".to_string()),
            issue_types: IssueTypeIds {
                epic: lookup("JIRA_ISSUE_TYPE_EPIC").unwrap_or_else(|| "10001".to_string()),
                story: lookup("JIRA_ISSUE_TYPE_STORY").unwrap_or_else(|| "10004".to_string()),
                task: lookup("JIRA_ISSUE_TYPE_TASK").unwrap_or_else(|| "10003".to_string()),
                subtask: lookup("JIRA_ISSUE_TYPE_SUBTASK")
                    .unwrap_or_else(|| "10002".to_string()),
            },
            story_points_field: lookup("JIRA_STORY_POINTS_FIELD")
                .unwrap_or_else(|| "customfield_10016".to_string()),
        })
    }

    pub fn board_url(&self) -> String {
        format!(
            "{}/jira/software/c/projects/{}/boards",
            self.base_url, self.project_key
        )
    }
}
