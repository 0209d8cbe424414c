//! Fixed GraphQL query documents.
//!
//! Both queries are plain strings with the organization login or project
//! ID spliced in as a string literal; no GraphQL variables are used. Page
//! sizes are fixed and only the first page is ever requested.

use std::fmt::Write;

use serde_json::{Value, json};

/// Number of projects requested for the picker.
pub const PROJECTS_PAGE_SIZE: u8 = 20;

/// Number of items requested for a board.
pub const ITEMS_PAGE_SIZE: u8 = 20;

/// Number of field values requested per item.
pub const FIELD_VALUES_PAGE_SIZE: u8 = 8;

/// Number of assignees requested per issue or pull request.
pub const ASSIGNEES_PAGE_SIZE: u8 = 10;

/// Returns the query listing the first projects of an organization.
///
/// # Examples
///
/// ```
/// use projboard_github::query::projects_query;
///
/// let query = projects_query("rust-lang");
/// assert!(query.contains(r#"organization(login: "rust-lang")"#));
/// ```
#[must_use]
pub fn projects_query(organization: &str) -> String {
    format!(
        "{{organization(login: {login}) {{projectsV2(first: {PROJECTS_PAGE_SIZE}) {{nodes {{id title}}}}}}}}",
        login = quote(organization),
    )
}

/// Returns the query loading the items of a single project.
///
/// Each item carries its field values (text, date and single-select
/// shapes) and its content, tagged with `__typename` so the content union
/// can be decoded explicitly.
#[must_use]
pub fn project_items_query(project_id: &str) -> String {
    format!(
        "query{{ node(id: {id}) {{ ... on ProjectV2 {{ items(first: {ITEMS_PAGE_SIZE}) {{ nodes{{ id \
         fieldValues(first: {FIELD_VALUES_PAGE_SIZE}) {{ nodes{{ \
         ... on ProjectV2ItemFieldTextValue {{ text field {{ ... on ProjectV2FieldCommon {{ name }}}}}} \
         ... on ProjectV2ItemFieldDateValue {{ date field {{ ... on ProjectV2FieldCommon {{ name }}}}}} \
         ... on ProjectV2ItemFieldSingleSelectValue {{ name field {{ ... on ProjectV2FieldCommon {{ name }}}}}}}}}} \
         content{{ __typename \
         ... on DraftIssue {{ title body }} \
         ... on Issue {{ title assignees(first: {ASSIGNEES_PAGE_SIZE}) {{ nodes{{ login }}}}}} \
         ... on PullRequest {{ title assignees(first: {ASSIGNEES_PAGE_SIZE}) {{ nodes{{ login }}}}}}}}}}}}}}}}}}",
        id = quote(project_id),
    )
}

/// Wraps a query document in the JSON request body GitHub expects.
///
/// # Examples
///
/// ```
/// use projboard_github::query::request_body;
///
/// let body = request_body("{viewer {login}}".to_string());
/// assert_eq!(body["query"], "{viewer {login}}");
/// ```
#[must_use]
pub fn request_body(query: String) -> Value {
    json!({ "query": query })
}

/// Renders `value` as a GraphQL string literal.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            c if c < '\u{20}' => {
                let _ = write!(quoted, "\\u{:04X}", u32::from(c));
            }
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
