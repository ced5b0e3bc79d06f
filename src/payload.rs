//! Builders from backlog records to issue-creation request bodies.
//!
//! Pure data transformations; the client sends the result unchanged.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::JiraConfig;
use crate::document::{Doc, Node};
use crate::models::{Epic, Story, Task};

#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: Doc,
    pub issuetype: IssueTypeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
    /// Deployment-specific custom fields, keyed by field id.
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueTypeRef {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParentRef {
    pub key: String,
}

pub fn epic_request(config: &JiraConfig, epic: &Epic) -> CreateIssueRequest {
    CreateIssueRequest {
        fields: IssueFields {
            project: ProjectRef {
                key: config.project_key.clone(),
            },
            summary: epic.name.to_string(),
            description: Doc::new(vec![
                Node::paragraph(epic.description),
                Node::paragraph(format!("\n\nOwner: {}", epic.owner)),
                Node::paragraph(format!("Story Points: {}", epic.story_points)),
            ]),
            issuetype: IssueTypeRef {
                id: config.issue_types.epic.clone(),
            },
            parent: None,
            custom: Map::new(),
        },
    }
}

pub fn story_request(config: &JiraConfig, story: &Story, epic_key: &str) -> CreateIssueRequest {
    let mut custom = Map::new();
    if let Some(points) = story.story_points {
        custom.insert(config.story_points_field.clone(), Value::from(points));
    }

    CreateIssueRequest {
        fields: IssueFields {
            project: ProjectRef {
                key: config.project_key.clone(),
            },
            summary: story.name.to_string(),
            description: Doc::new(vec![
                Node::paragraph(story.description),
                Node::heading(3, "Acceptance Criteria:"),
                Node::bullet_list(story.acceptance_criteria.iter().copied()),
                Node::paragraph(format!("\n\nAssignee: {}", story.assignee)),
                Node::paragraph(format!("Priority: {}", story.priority)),
            ]),
            issuetype: IssueTypeRef {
                id: config.issue_types.story.clone(),
            },
            parent: Some(ParentRef {
                key: epic_key.to_string(),
            }),
            custom,
        },
    }
}

pub fn subtask_request(config: &JiraConfig, task: &Task, story_key: &str) -> CreateIssueRequest {
    let mut content = vec![Node::paragraph(format!("Estimate: {}", task.estimate))];
    if let Some(assignee) = task.assignee {
        content.push(Node::paragraph(format!("Assignee: {}", assignee)));
    }

    CreateIssueRequest {
        fields: IssueFields {
            project: ProjectRef {
                key: config.project_key.clone(),
            },
            summary: task.name.to_string(),
            description: Doc::new(content),
            issuetype: IssueTypeRef {
                id: config.issue_types.subtask.clone(),
            },
            parent: Some(ParentRef {
                key: story_key.to_string(),
            }),
            custom: Map::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> JiraConfig {
        JiraConfig::from_lookup(|name| match name {
            "JIRA_EMAIL" => Some("dev@example.com".to_string()),
            "JIRA_API_TOKEN" => Some("secret".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn epic_payload_has_no_parent_and_uses_epic_type() {
        let epic = Epic {
            name: "Canvas & Drag-Drop 🎨",
            description: "Users can drag nodes onto a canvas",
            story_points: 21,
            owner: "Dev 1",
            stories: vec![],
        };

        let value = serde_json::to_value(epic_request(&config(), &epic)).unwrap();
        assert_eq!(
            value,
            json!({
                "fields": {
                    "project": { "key": "SCRUM" },
                    "summary": "Canvas & Drag-Drop 🎨",
                    "description": {
                        "type": "doc",
                        "version": 1,
                        "content": [
                            { "type": "paragraph", "content": [{ "type": "text", "text": "Users can drag nodes onto a canvas" }] },
                            { "type": "paragraph", "content": [{ "type": "text", "text": "\n\nOwner: Dev 1" }] },
                            { "type": "paragraph", "content": [{ "type": "text", "text": "Story Points: 21" }] }
                        ]
                    },
                    "issuetype": { "id": "10001" }
                }
            })
        );
    }

    #[test]
    fn story_payload_links_epic_and_carries_story_points() {
        let story = Story {
            name: "Setup React Flow Canvas",
            description: "As a developer, I want a canvas",
            story_points: Some(5),
            assignee: "Dev 1",
            priority: "Highest",
            acceptance_criteria: vec!["Canvas renders", "Pan/zoom works"],
            tasks: vec![],
        };

        let value = serde_json::to_value(story_request(&config(), &story, "SCRUM-1")).unwrap();
        let fields = &value["fields"];

        assert_eq!(fields["parent"], json!({ "key": "SCRUM-1" }));
        assert_eq!(fields["issuetype"], json!({ "id": "10004" }));
        assert_eq!(fields["customfield_10016"], json!(5));
        assert_eq!(
            fields["description"]["content"][1],
            json!({
                "type": "heading",
                "attrs": { "level": 3 },
                "content": [{ "type": "text", "text": "Acceptance Criteria:" }]
            })
        );
        assert_eq!(
            fields["description"]["content"][2]["content"]
                .as_array()
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn story_without_points_sends_no_custom_field() {
        let story = Story {
            name: "Unsized story",
            description: "No estimate yet",
            story_points: None,
            assignee: "Dev 2",
            priority: "Low",
            acceptance_criteria: vec!["Done"],
            tasks: vec![],
        };

        let value = serde_json::to_value(story_request(&config(), &story, "SCRUM-1")).unwrap();
        assert!(value["fields"].get("customfield_10016").is_none());
    }

    #[test]
    fn subtask_payload_links_story_and_embeds_estimate() {
        let task = Task {
            name: "Install @xyflow/react package",
            estimate: "1h",
            assignee: None,
        };

        let value = serde_json::to_value(subtask_request(&config(), &task, "SCRUM-2")).unwrap();
        let fields = &value["fields"];

        assert_eq!(fields["parent"], json!({ "key": "SCRUM-2" }));
        assert_eq!(fields["issuetype"], json!({ "id": "10002" }));
        assert_eq!(
            fields["description"]["content"],
            json!([
                { "type": "paragraph", "content": [{ "type": "text", "text": "Estimate: 1h" }] }
            ])
        );
    }

    #[test]
    fn subtask_assignee_override_adds_a_paragraph() {
        let task = Task {
            name: "Review schema with team",
            estimate: "0.5h",
            assignee: Some("Dev 1"),
        };

        let value = serde_json::to_value(subtask_request(&config(), &task, "SCRUM-2")).unwrap();
        assert_eq!(
            value["fields"]["description"]["content"][1],
            json!({ "type": "paragraph", "content": [{ "type": "text", "text": "Assignee: Dev 1" }] })
        );
    }
}
