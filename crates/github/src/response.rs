//! Wire shapes of the GraphQL responses.
//!
//! The response envelope is decoded into nested structs mirroring the
//! query selections. The two polymorphic selections are decoded into
//! explicit variants:
//!
//! - [`FieldValue`]: decided by which value key is present (`text`, `date`
//!   or `name`), with [`FieldValue::Unrecognized`] for anything else.
//! - [`ItemContent`]: decided by the `__typename` discriminator, with
//!   [`ItemContent::Unrecognized`] for other content types.
//!
//! The `errors` array of the envelope is not inspected; a response without
//! the expected `data` fails to decode.

use chrono::NaiveDate;
use projboard_protocol::ProjectSummary;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// The GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    /// The `data` member of the response.
    pub data: T,
}

/// A GraphQL connection, reduced to its `nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connection<T> {
    /// The nodes of the first page.
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// `data` of the projects query.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationData {
    /// The requested organization.
    pub organization: Organization,
}

/// An organization and its projects.
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    /// First page of Projects v2.
    #[serde(rename = "projectsV2")]
    pub projects_v2: Connection<ProjectSummary>,
}

/// `data` of the project items query.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeData {
    /// The requested project node.
    pub node: ProjectNode,
}

/// A Projects v2 node and its items.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectNode {
    /// First page of project items.
    pub items: Connection<RawItem>,
}

/// A project item as returned by the API, before projection into a task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Node ID of the project item.
    pub id: String,
    /// First page of the item's field values.
    #[serde(default)]
    pub field_values: Connection<FieldValue>,
    /// The issue, pull request or draft behind the item.
    #[serde(default)]
    pub content: Option<ItemContent>,
}

/// The name of the project field a value belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldRef {
    /// Field name, e.g. `"Title"` or `"Status"`.
    #[serde(default)]
    pub name: String,
}

/// Flat shape shared by every field value fragment.
#[derive(Debug, Default, Deserialize)]
struct RawFieldValue {
    text: Option<String>,
    date: Option<NaiveDate>,
    name: Option<String>,
    field: Option<FieldRef>,
}

/// A single field value of a project item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFieldValue")]
pub enum FieldValue {
    /// A text field, such as the built-in "Title".
    Text {
        /// Name of the field.
        field: String,
        /// The text value.
        text: String,
    },
    /// A date field.
    Date {
        /// Name of the field.
        field: String,
        /// The date value.
        date: NaiveDate,
    },
    /// A single-select field, such as "Status".
    SingleSelect {
        /// Name of the field.
        field: String,
        /// Label of the selected option.
        name: String,
    },
    /// A field value shape this client does not select.
    Unrecognized,
}

impl From<RawFieldValue> for FieldValue {
    fn from(raw: RawFieldValue) -> Self {
        let field = raw.field.map(|f| f.name).unwrap_or_default();
        match (raw.text, raw.date, raw.name) {
            (Some(text), _, _) => Self::Text { field, text },
            (None, Some(date), _) => Self::Date { field, date },
            (None, None, Some(name)) => Self::SingleSelect { field, name },
            (None, None, None) => Self::Unrecognized,
        }
    }
}

impl FieldValue {
    /// Returns the name of the field this value belongs to.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Text { field, .. } | Self::Date { field, .. } | Self::SingleSelect { field, .. } => {
                Some(field)
            }
            Self::Unrecognized => None,
        }
    }

    /// Returns the text of a text value.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Returns the selected option label of a single-select value.
    #[must_use]
    pub fn option_name(&self) -> Option<&str> {
        match self {
            Self::SingleSelect { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// A user assigned to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Assignee {
    /// GitHub login.
    pub login: String,
}

/// The content behind a project item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum ItemContent {
    /// A draft issue that only exists in the project.
    DraftIssue {
        /// Draft title.
        #[serde(default)]
        title: String,
        /// Draft body.
        #[serde(default)]
        body: String,
    },
    /// A repository issue.
    Issue {
        /// Issue title.
        #[serde(default)]
        title: String,
        /// First page of assignees.
        #[serde(default)]
        assignees: Connection<Assignee>,
    },
    /// A pull request.
    PullRequest {
        /// Pull request title.
        #[serde(default)]
        title: String,
        /// First page of assignees.
        #[serde(default)]
        assignees: Connection<Assignee>,
    },
    /// Any other content type (e.g. a redacted item).
    #[serde(other)]
    Unrecognized,
}

impl ItemContent {
    /// Returns the content title, if the content has one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::DraftIssue { title, .. }
            | Self::Issue { title, .. }
            | Self::PullRequest { title, .. } => Some(title),
            Self::Unrecognized => None,
        }
    }

    /// Returns the logins of the assignees, in response order.
    #[must_use]
    pub fn assignee_logins(&self) -> Vec<String> {
        match self {
            Self::Issue { assignees, .. } | Self::PullRequest { assignees, .. } => assignees
                .nodes
                .iter()
                .map(|assignee| assignee.login.clone())
                .collect(),
            Self::DraftIssue { .. } | Self::Unrecognized => Vec::new(),
        }
    }
}

/// Decodes the projects query response into summaries, in server order.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::Error::Decode) if the body does not
/// contain `data.organization.projectsV2.nodes`.
pub fn decode_projects(body: Value) -> Result<Vec<ProjectSummary>> {
    let response: GraphQlResponse<OrganizationData> = serde_json::from_value(body)?;
    Ok(response.data.organization.projects_v2.nodes)
}

/// Decodes the project items query response into raw items, in server order.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::Error::Decode) if the body does not
/// contain `data.node.items.nodes`.
pub fn decode_project_items(body: Value) -> Result<Vec<RawItem>> {
    let response: GraphQlResponse<NodeData> = serde_json::from_value(body)?;
    Ok(response.data.node.items.nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn decode_projects_preserves_order() {
        let body = json!({
            "data": {
                "organization": {
                    "projectsV2": {
                        "nodes": [
                            { "id": "PVT_2", "title": "Roadmap" },
                            { "id": "PVT_1", "title": "Bugs" },
                            { "id": "PVT_3", "title": "Docs" }
                        ]
                    }
                }
            }
        });

        let projects = decode_projects(body).unwrap();
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Roadmap", "Bugs", "Docs"]);
        assert_eq!(projects[0].id, "PVT_2");
    }

    #[test]
    fn decode_projects_rejects_error_envelope() {
        let body = json!({
            "data": { "organization": null },
            "errors": [{ "message": "Could not resolve to an Organization" }]
        });
        assert!(matches!(decode_projects(body), Err(Error::Decode(_))));
    }

    #[test]
    fn decode_projects_rejects_missing_data() {
        let body = json!({ "message": "Bad credentials" });
        assert!(matches!(decode_projects(body), Err(Error::Decode(_))));
    }

    #[test]
    fn field_value_variants_follow_present_key() {
        let values: Vec<FieldValue> = serde_json::from_value(json!([
            { "text": "Write spec", "field": { "name": "Title" } },
            { "date": "2024-03-01", "field": { "name": "Due" } },
            { "name": "In Progress", "field": { "name": "Status" } },
            {}
        ]))
        .unwrap();

        assert_eq!(
            values[0],
            FieldValue::Text {
                field: "Title".to_string(),
                text: "Write spec".to_string(),
            }
        );
        assert_eq!(
            values[1],
            FieldValue::Date {
                field: "Due".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            }
        );
        assert_eq!(values[2].option_name(), Some("In Progress"));
        assert_eq!(values[2].field_name(), Some("Status"));
        assert_eq!(values[3], FieldValue::Unrecognized);
        assert_eq!(values[3].field_name(), None);
    }

    #[test]
    fn field_value_without_field_has_empty_name() {
        let value: FieldValue = serde_json::from_value(json!({ "text": "orphan" })).unwrap();
        assert_eq!(value.field_name(), Some(""));
        assert_eq!(value.text(), Some("orphan"));
    }

    #[test]
    fn content_variants_follow_typename() {
        let contents: Vec<ItemContent> = serde_json::from_value(json!([
            { "__typename": "DraftIssue", "title": "Draft", "body": "notes" },
            { "__typename": "Issue", "title": "Bug", "assignees": { "nodes": [{ "login": "octocat" }] } },
            { "__typename": "PullRequest", "title": "Fix", "assignees": { "nodes": [] } },
            { "__typename": "RedactedItem" }
        ]))
        .unwrap();

        assert_eq!(contents[0].title(), Some("Draft"));
        assert!(contents[0].assignee_logins().is_empty());
        assert_eq!(contents[1].assignee_logins(), vec!["octocat"]);
        assert_eq!(contents[2].title(), Some("Fix"));
        assert_eq!(contents[3], ItemContent::Unrecognized);
    }

    #[test]
    fn decode_project_items_full_shape() {
        let body = json!({
            "data": {
                "node": {
                    "items": {
                        "nodes": [
                            {
                                "id": "PVTI_1",
                                "fieldValues": {
                                    "nodes": [
                                        { "text": "Write spec", "field": { "name": "Title" } },
                                        { "name": "Done", "field": { "name": "Status" } }
                                    ]
                                },
                                "content": {
                                    "__typename": "Issue",
                                    "title": "Write spec",
                                    "assignees": { "nodes": [{ "login": "hubot" }] }
                                }
                            },
                            {
                                "id": "PVTI_2",
                                "fieldValues": { "nodes": [] },
                                "content": null
                            }
                        ]
                    }
                }
            }
        });

        let items = decode_project_items(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "PVTI_1");
        assert_eq!(items[0].field_values.nodes.len(), 2);
        assert!(items[1].content.is_none());
    }
}
