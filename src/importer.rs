use std::time::Duration;

use tokio::time::sleep;

use crate::jira_client::{JiraClient, JiraError};
use crate::models::{CreatedIssue, Epic, Story, Task};
use crate::payload;

/// Rate-limit pacing between creation calls. Jira Cloud throttles bursts,
/// so the walk waits after every successful parent and after every task.
#[derive(Debug, Clone)]
pub struct Pacing {
    pub after_epic: Duration,
    pub after_story: Duration,
    pub after_task: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            after_epic: Duration::from_millis(500),
            after_story: Duration::from_millis(300),
            after_task: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub epics_attempted: usize,
    pub epics_created: usize,
    pub stories_attempted: usize,
    pub stories_created: usize,
    pub tasks_attempted: usize,
    pub tasks_created: usize,
}

/// Walks the backlog depth-first and creates every item in declaration
/// order. A failed epic skips its whole subtree; a failed story skips its
/// tasks; a failed task only skips itself. The run never aborts on a
/// per-item failure.
pub async fn run_import(client: &JiraClient, epics: &[Epic], pacing: &Pacing) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for (i, epic) in epics.iter().enumerate() {
        summary.epics_attempted += 1;
        let epic_issue = match create_epic(client, epic, i, epics.len()).await {
            Ok(issue) => issue,
            Err(_) => continue,
        };
        summary.epics_created += 1;
        sleep(pacing.after_epic).await;

        for (j, story) in epic.stories.iter().enumerate() {
            summary.stories_attempted += 1;
            let story_issue =
                match create_story(client, story, &epic_issue.key, j, epic.stories.len()).await {
                    Ok(issue) => issue,
                    Err(_) => continue,
                };
            summary.stories_created += 1;
            sleep(pacing.after_story).await;

            for (k, task) in story.tasks.iter().enumerate() {
                summary.tasks_attempted += 1;
                if create_subtask(client, task, &story_issue.key, k, story.tasks.len())
                    .await
                    .is_ok()
                {
                    summary.tasks_created += 1;
                }
                sleep(pacing.after_task).await;
            }
        }

        println!("\n✅ Completed Epic {}/{}: {}\n", i + 1, epics.len(), epic.name);
    }

    summary
}

async fn create_epic(
    client: &JiraClient,
    epic: &Epic,
    index: usize,
    total: usize,
) -> Result<CreatedIssue, JiraError> {
    println!("\n📦 Creating Epic {}/{}: {}", index + 1, total, epic.name);

    let request = payload::epic_request(client.config(), epic);
    match client.create_issue(&request).await {
        Ok(issue) => {
            println!("✅ Created Epic: {} - {}", issue.key, epic.name);
            Ok(issue)
        }
        Err(e) => {
            eprintln!("❌ Failed to create epic: {}", e);
            Err(e)
        }
    }
}

async fn create_story(
    client: &JiraClient,
    story: &Story,
    epic_key: &str,
    index: usize,
    total: usize,
) -> Result<CreatedIssue, JiraError> {
    println!("  📝 Creating Story {}/{}: {}", index + 1, total, story.name);

    let request = payload::story_request(client.config(), story, epic_key);
    match client.create_issue(&request).await {
        Ok(issue) => {
            println!("    ✅ Created Story: {} - {}", issue.key, story.name);
            Ok(issue)
        }
        Err(e) => {
            eprintln!("    ❌ Failed to create story: {}", e);
            Err(e)
        }
    }
}

async fn create_subtask(
    client: &JiraClient,
    task: &Task,
    story_key: &str,
    index: usize,
    total: usize,
) -> Result<CreatedIssue, JiraError> {
    println!("      ⚙️  Creating Task {}/{}: {}", index + 1, total, task.name);

    let request = payload::subtask_request(client.config(), task, story_key);
    match client.create_issue(&request).await {
        Ok(issue) => {
            println!("        ✅ Created Task: {}", issue.key);
            Ok(issue)
        }
        Err(e) => {
            eprintln!("        ❌ Failed to create task: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JiraConfig;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn config(base_url: String) -> JiraConfig {
        JiraConfig::from_lookup(|name| match name {
            "JIRA_EMAIL" => Some("dev@example.com".to_string()),
            "JIRA_API_TOKEN" => Some("secret".to_string()),
            "JIRA_BASE_URL" => Some(base_url.clone()),
            _ => None,
        })
        .unwrap()
    }

    fn no_pacing() -> Pacing {
        Pacing {
            after_epic: Duration::ZERO,
            after_story: Duration::ZERO,
            after_task: Duration::ZERO,
        }
    }

    fn task(name: &'static str) -> Task {
        Task {
            name,
            estimate: "1h",
            assignee: None,
        }
    }

    fn story(name: &'static str, tasks: Vec<Task>) -> Story {
        Story {
            name,
            description: "desc",
            story_points: Some(3),
            assignee: "Dev 1",
            priority: "High",
            acceptance_criteria: vec!["done"],
            tasks,
        }
    }

    fn epic(name: &'static str, stories: Vec<Story>) -> Epic {
        Epic {
            name,
            description: "desc",
            story_points: 8,
            owner: "Dev 1",
            stories,
        }
    }

    /// Mounts a mock answering issue creation for a given summary.
    async fn mock_create(server: &MockServer, summary: &str, status: u16, key: &str) {
        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue"))
            .and(body_partial_json(json!({ "fields": { "summary": summary } })))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "id": "1", "key": key })),
            )
            .mount(server)
            .await;
    }

    fn summaries(requests: &[Request]) -> Vec<String> {
        requests
            .iter()
            .map(|r| {
                let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
                body["fields"]["summary"].as_str().unwrap().to_string()
            })
            .collect()
    }

    fn parent_of(requests: &[Request], summary: &str) -> Option<String> {
        requests.iter().find_map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            if body["fields"]["summary"] == summary {
                body["fields"]["parent"]["key"].as_str().map(String::from)
            } else {
                None
            }
        })
    }

    #[tokio::test]
    async fn happy_path_creates_everything_in_declaration_order() {
        let server = MockServer::start().await;
        mock_create(&server, "Epic One", 201, "EPIC-1").await;
        mock_create(&server, "Story One", 201, "SCRUM-10").await;
        mock_create(&server, "Task One", 201, "SCRUM-11").await;
        mock_create(&server, "Task Two", 201, "SCRUM-12").await;

        let client = JiraClient::new(config(server.uri()));
        let backlog = vec![epic(
            "Epic One",
            vec![story("Story One", vec![task("Task One"), task("Task Two")])],
        )];

        let summary = run_import(&client, &backlog, &no_pacing()).await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            summaries(&requests),
            vec!["Epic One", "Story One", "Task One", "Task Two"]
        );
        assert_eq!(parent_of(&requests, "Story One").as_deref(), Some("EPIC-1"));
        assert_eq!(parent_of(&requests, "Task One").as_deref(), Some("SCRUM-10"));
        assert_eq!(parent_of(&requests, "Task Two").as_deref(), Some("SCRUM-10"));

        assert_eq!(
            summary,
            ImportSummary {
                epics_attempted: 1,
                epics_created: 1,
                stories_attempted: 1,
                stories_created: 1,
                tasks_attempted: 2,
                tasks_created: 2,
            }
        );
    }

    #[tokio::test]
    async fn default_pacing_waits_between_calls() {
        let server = MockServer::start().await;
        mock_create(&server, "Epic One", 201, "EPIC-1").await;
        mock_create(&server, "Story One", 201, "SCRUM-10").await;
        mock_create(&server, "Task One", 201, "SCRUM-11").await;
        mock_create(&server, "Task Two", 201, "SCRUM-12").await;

        let client = JiraClient::new(config(server.uri()));
        let backlog = vec![epic(
            "Epic One",
            vec![story("Story One", vec![task("Task One"), task("Task Two")])],
        )];

        let started = std::time::Instant::now();
        run_import(&client, &backlog, &Pacing::default()).await;

        // 500ms after the epic, 300ms after the story, 200ms per task.
        assert!(started.elapsed() >= Duration::from_millis(500 + 300 + 200 + 200));
    }

    #[tokio::test]
    async fn failed_story_skips_its_tasks_but_not_its_siblings() {
        let server = MockServer::start().await;
        mock_create(&server, "Epic One", 201, "EPIC-1").await;
        mock_create(&server, "Bad Story", 400, "unused").await;
        mock_create(&server, "Good Story", 201, "SCRUM-20").await;
        mock_create(&server, "Task B", 201, "SCRUM-21").await;

        let client = JiraClient::new(config(server.uri()));
        let backlog = vec![epic(
            "Epic One",
            vec![
                story("Bad Story", vec![task("Task A")]),
                story("Good Story", vec![task("Task B")]),
            ],
        )];

        let summary = run_import(&client, &backlog, &no_pacing()).await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            summaries(&requests),
            vec!["Epic One", "Bad Story", "Good Story", "Task B"]
        );
        assert_eq!(summary.stories_attempted, 2);
        assert_eq!(summary.stories_created, 1);
        assert_eq!(summary.tasks_attempted, 1);
        assert_eq!(summary.tasks_created, 1);
    }

    #[tokio::test]
    async fn failed_epic_skips_its_subtree_and_continues() {
        let server = MockServer::start().await;
        mock_create(&server, "Epic A", 500, "unused").await;
        mock_create(&server, "Epic B", 201, "EPIC-2").await;
        mock_create(&server, "Story B", 201, "SCRUM-30").await;
        mock_create(&server, "Task B", 201, "SCRUM-31").await;

        let client = JiraClient::new(config(server.uri()));
        let backlog = vec![
            epic("Epic A", vec![story("Story A", vec![task("Task A")])]),
            epic("Epic B", vec![story("Story B", vec![task("Task B")])]),
        ];

        let summary = run_import(&client, &backlog, &no_pacing()).await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(summaries(&requests), vec!["Epic A", "Epic B", "Story B", "Task B"]);
        assert_eq!(summary.epics_attempted, 2);
        assert_eq!(summary.epics_created, 1);
        assert_eq!(summary.stories_attempted, 1);
        assert_eq!(summary.tasks_attempted, 1);
    }

    #[tokio::test]
    async fn failed_task_does_not_stop_the_next_task() {
        let server = MockServer::start().await;
        mock_create(&server, "Epic One", 201, "EPIC-1").await;
        mock_create(&server, "Story One", 201, "SCRUM-10").await;
        mock_create(&server, "Task One", 500, "unused").await;
        mock_create(&server, "Task Two", 201, "SCRUM-12").await;

        let client = JiraClient::new(config(server.uri()));
        let backlog = vec![epic(
            "Epic One",
            vec![story("Story One", vec![task("Task One"), task("Task Two")])],
        )];

        let summary = run_import(&client, &backlog, &no_pacing()).await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            summaries(&requests),
            vec!["Epic One", "Story One", "Task One", "Task Two"]
        );
        assert_eq!(summary.tasks_attempted, 2);
        assert_eq!(summary.tasks_created, 1);
    }
}
