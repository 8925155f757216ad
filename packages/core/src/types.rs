use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Raised when text or a stored discriminant does not name a known enum member
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    #[error("Unknown issue type: {0}")]
    IssueType(String),
    #[error("Unknown status: {0}")]
    Status(String),
}

/// Kind of work item an issue represents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IssueType {
    Story = 1,
    Bug = 2,
}

impl IssueType {
    pub const ALL: [IssueType; 2] = [IssueType::Story, IssueType::Bug];

    /// Attempt to parse caller-supplied text; `None` when absent or unknown.
    pub fn parse_input(text: Option<&str>) -> Option<Self> {
        text.and_then(|t| t.parse().ok())
    }

    pub fn as_i64(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for IssueType {
    type Error = ParseEnumError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        IssueType::ALL
            .into_iter()
            .find(|t| t.as_i64() == value)
            .ok_or_else(|| ParseEnumError::IssueType(value.to_string()))
    }
}

/// Accepts member names (case-sensitive) or their numeric values.
impl FromStr for IssueType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "Story" => Ok(IssueType::Story),
            "Bug" => Ok(IssueType::Bug),
            _ => trimmed
                .parse::<i64>()
                .ok()
                .and_then(|n| IssueType::try_from(n).ok())
                .ok_or_else(|| ParseEnumError::IssueType(s.to_string())),
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::Story => write!(f, "Story"),
            IssueType::Bug => write!(f, "Bug"),
        }
    }
}

/// Workflow status of an issue. Ordered from not started to done.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    ToDo = 0,
    InProgress = 1,
    InTest = 2,
    Complete = 3,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::ToDo,
        Status::InProgress,
        Status::InTest,
        Status::Complete,
    ];

    /// Attempt to parse caller-supplied text; `None` when absent or unknown.
    pub fn parse_input(text: Option<&str>) -> Option<Self> {
        text.and_then(|t| t.parse().ok())
    }

    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// Status of an epic given the lowest and highest status among its issues.
    ///
    /// An epic with no issues has not started. Once any issue has moved past
    /// `ToDo` the epic counts as in progress until every issue reaches at
    /// least the same stage.
    pub fn rollup(issue_count: i64, lowest: Option<Status>, highest: Option<Status>) -> Status {
        match (issue_count, lowest, highest) {
            (0, _, _) | (_, None, _) | (_, _, None) => Status::ToDo,
            (_, Some(low), Some(high)) if low == high => low,
            (_, Some(Status::ToDo), Some(_)) => Status::InProgress,
            (_, Some(low), Some(_)) => low,
        }
    }
}

impl TryFrom<i64> for Status {
    type Error = ParseEnumError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Status::ALL
            .into_iter()
            .find(|s| s.as_i64() == value)
            .ok_or_else(|| ParseEnumError::Status(value.to_string()))
    }
}

/// Accepts member names (case-sensitive) or their numeric values.
impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "ToDo" => Ok(Status::ToDo),
            "InProgress" => Ok(Status::InProgress),
            "InTest" => Ok(Status::InTest),
            "Complete" => Ok(Status::Complete),
            _ => trimmed
                .parse::<i64>()
                .ok()
                .and_then(|n| Status::try_from(n).ok())
                .ok_or_else(|| ParseEnumError::Status(s.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::ToDo => write!(f, "ToDo"),
            Status::InProgress => write!(f, "InProgress"),
            Status::InTest => write!(f, "InTest"),
            Status::Complete => write!(f, "Complete"),
        }
    }
}

/// A top-level project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A group of issues inside a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Epic {
    pub id: i64,
    pub public_id: Uuid,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Derived from the epic's issues when read
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// A story or bug
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: i64,
    pub public_id: Uuid,
    pub project_id: i64,
    pub epic_id: Option<i64>,
    pub epic_public_id: Option<Uuid>,
    pub issue_type: IssueType,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub estimate: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counts of a project's children
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProjectCounts {
    pub epic_count: i64,
    pub story_count: i64,
    pub bug_count: i64,
}

/// Input for creating a project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCreateInput {
    pub name: String,
    pub description: Option<String>,
}

/// Input for updating a project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectUpdateInput {
    pub name: String,
    pub description: Option<String>,
}

/// Input for creating an epic under a resolved project
#[derive(Debug, Clone, PartialEq)]
pub struct EpicCreateInput {
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Input for updating an epic
#[derive(Debug, Clone, PartialEq)]
pub struct EpicUpdateInput {
    pub name: String,
    pub description: Option<String>,
}

/// Input for creating an issue with parents already resolved to internal IDs
#[derive(Debug, Clone, PartialEq)]
pub struct IssueCreateInput {
    pub project_id: i64,
    pub epic_id: Option<i64>,
    pub issue_type: IssueType,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub estimate: Option<i32>,
}

/// Input for a full issue update
#[derive(Debug, Clone, PartialEq)]
pub struct IssueUpdateInput {
    pub epic_id: Option<i64>,
    pub issue_type: IssueType,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub estimate: Option<i32>,
}

/// An epic joined with the project that owns it
#[derive(Debug, Clone, PartialEq)]
pub struct EpicView {
    pub epic: Epic,
    pub project: Project,
}

/// An issue joined with its project and, when loaded, its epic
#[derive(Debug, Clone, PartialEq)]
pub struct IssueView {
    pub issue: Issue,
    pub project: Project,
    pub epic: Option<Epic>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Story", IssueType::Story)]
    #[case("Bug", IssueType::Bug)]
    #[case("1", IssueType::Story)]
    #[case(" 2 ", IssueType::Bug)]
    fn test_issue_type_parses_names_and_values(#[case] text: &str, #[case] expected: IssueType) {
        assert_eq!(text.parse::<IssueType>().unwrap(), expected);
    }

    #[rstest]
    #[case("story")]
    #[case("Epic")]
    #[case("0")]
    #[case("3")]
    #[case("")]
    fn test_issue_type_rejects_unknown(#[case] text: &str) {
        assert!(text.parse::<IssueType>().is_err());
        assert_eq!(IssueType::parse_input(Some(text)), None);
    }

    #[test]
    fn test_parse_input_absent() {
        assert_eq!(IssueType::parse_input(None), None);
        assert_eq!(Status::parse_input(None), None);
    }

    #[rstest]
    #[case("ToDo", Status::ToDo)]
    #[case("InProgress", Status::InProgress)]
    #[case("InTest", Status::InTest)]
    #[case("Complete", Status::Complete)]
    #[case("0", Status::ToDo)]
    #[case("3", Status::Complete)]
    fn test_status_parses_names_and_values(#[case] text: &str, #[case] expected: Status) {
        assert_eq!(Status::parse_input(Some(text)), Some(expected));
    }

    #[rstest]
    #[case("todo")]
    #[case("Done")]
    #[case("4")]
    #[case("-1")]
    fn test_status_rejects_unknown(#[case] text: &str) {
        assert_eq!(Status::parse_input(Some(text)), None);
    }

    #[test]
    fn test_display_matches_parse() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        for issue_type in IssueType::ALL {
            assert_eq!(issue_type.to_string().parse::<IssueType>().unwrap(), issue_type);
        }
    }

    #[test]
    fn test_stored_discriminants() {
        assert_eq!(Status::try_from(2).unwrap(), Status::InTest);
        assert_eq!(IssueType::try_from(2).unwrap(), IssueType::Bug);
        assert!(Status::try_from(9).is_err());
        assert!(IssueType::try_from(0).is_err());
    }

    #[test]
    fn test_serializes_by_name() {
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"InProgress\"");
        assert_eq!(serde_json::to_string(&IssueType::Bug).unwrap(), "\"Bug\"");
    }

    #[rstest]
    #[case(0, None, None, Status::ToDo)]
    #[case(2, Some(Status::ToDo), Some(Status::ToDo), Status::ToDo)]
    #[case(2, Some(Status::ToDo), Some(Status::Complete), Status::InProgress)]
    #[case(3, Some(Status::InProgress), Some(Status::Complete), Status::InProgress)]
    #[case(2, Some(Status::InTest), Some(Status::Complete), Status::InTest)]
    #[case(4, Some(Status::Complete), Some(Status::Complete), Status::Complete)]
    fn test_epic_status_rollup(
        #[case] count: i64,
        #[case] lowest: Option<Status>,
        #[case] highest: Option<Status>,
        #[case] expected: Status,
    ) {
        assert_eq!(Status::rollup(count, lowest, highest), expected);
    }
}
