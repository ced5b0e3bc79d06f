//! The Atlassian Document Format subset used for issue descriptions.
//!
//! Jira Cloud rejects plain-string descriptions on the v3 API; formatted
//! text has to be a `doc` node tree.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Doc {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u8,
    content: Vec<Node>,
}

impl Doc {
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            kind: "doc",
            version: 1,
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph { content: Vec<Node> },
    Heading { attrs: HeadingAttrs, content: Vec<Node> },
    BulletList { content: Vec<Node> },
    ListItem { content: Vec<Node> },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

impl Node {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph {
            content: vec![Node::Text { text: text.into() }],
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            attrs: HeadingAttrs { level },
            content: vec![Node::Text { text: text.into() }],
        }
    }

    /// One list item per entry, each wrapping a single paragraph.
    pub fn bullet_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::BulletList {
            content: items
                .into_iter()
                .map(|item| Node::ListItem {
                    content: vec![Node::paragraph(item)],
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn doc_wraps_content_with_type_and_version() {
        let doc = Doc::new(vec![Node::paragraph("hello")]);
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "type": "doc",
                "version": 1,
                "content": [
                    { "type": "paragraph", "content": [{ "type": "text", "text": "hello" }] }
                ]
            })
        );
    }

    #[test]
    fn heading_carries_level_attr() {
        assert_eq!(
            serde_json::to_value(Node::heading(3, "Acceptance Criteria:")).unwrap(),
            json!({
                "type": "heading",
                "attrs": { "level": 3 },
                "content": [{ "type": "text", "text": "Acceptance Criteria:" }]
            })
        );
    }

    #[test]
    fn bullet_list_wraps_each_item_in_a_paragraph() {
        assert_eq!(
            serde_json::to_value(Node::bullet_list(["one", "two"])).unwrap(),
            json!({
                "type": "bulletList",
                "content": [
                    {
                        "type": "listItem",
                        "content": [
                            { "type": "paragraph", "content": [{ "type": "text", "text": "one" }] }
                        ]
                    },
                    {
                        "type": "listItem",
                        "content": [
                            { "type": "paragraph", "content": [{ "type": "text", "text": "two" }] }
                        ]
                    }
                ]
            })
        );
    }
}
