use serde::Deserialize;

/// Top-level backlog grouping. Created without a parent.
#[derive(Debug, Clone)]
pub struct Epic {
    pub name: &'static str,
    pub description: &'static str,
    pub story_points: u32,
    pub owner: &'static str,
    pub stories: Vec<Story>,
}

/// A user-facing requirement, created as a child of its epic.
#[derive(Debug, Clone)]
pub struct Story {
    pub name: &'static str,
    pub description: &'static str,
    pub story_points: Option<u32>,
    pub assignee: &'static str,
    pub priority: &'static str,
    pub acceptance_criteria: Vec<&'static str>,
    pub tasks: Vec<Task>,
}

/// A unit of work, created as a sub-task of its story.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: &'static str,
    pub estimate: &'static str,
    /// Overrides the story assignee when set.
    pub assignee: Option<&'static str>,
}

/// The slice of Jira's issue-creation response we depend on: the new
/// issue's key, threaded onward as the parent reference for children.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
}
