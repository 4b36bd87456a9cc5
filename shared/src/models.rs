//! Core domain enumerations for the placement tracker
//!
//! These are the closed vocabularies shared by the API surface and the
//! storage layer. Each enum serializes to the exact string stored in the
//! database, so `Display` and `FromStr` must stay in lockstep with serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role
///
/// Canonical names are PascalCase; input from clients is parsed leniently
/// (case-insensitive, spaces and underscores ignored) and normalized at the
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Mentor,
    Recruiter,
    PlacementCell,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::Student,
        Role::Mentor,
        Role::Recruiter,
        Role::PlacementCell,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Mentor => "Mentor",
            Role::Recruiter => "Recruiter",
            Role::PlacementCell => "PlacementCell",
        }
    }

    /// Parse a client-supplied role, defaulting to `Student` for anything
    /// unrecognized. Registration is the only caller; stored roles always
    /// round-trip through the strict `FromStr` impl instead.
    pub fn parse_lenient(input: &str) -> Role {
        let normalized: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "student" => Role::Student,
            "mentor" => Role::Mentor,
            "recruiter" => Role::Recruiter,
            "placementcell" => Role::PlacementCell,
            _ => Role::Student,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Student" => Ok(Role::Student),
            "Mentor" => Ok(Role::Mentor),
            "Recruiter" => Ok(Role::Recruiter),
            "PlacementCell" => Ok(Role::PlacementCell),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Job posting status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(JobStatus::Open),
            "Closed" => Ok(JobStatus::Closed),
            other => Err(format!("unknown job status: {other}")),
        }
    }
}

/// Application tracking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Interview,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ApplicationStatus::Pending),
            "Reviewed" => Ok(ApplicationStatus::Reviewed),
            "Interview" => Ok(ApplicationStatus::Interview),
            "Rejected" => Ok(ApplicationStatus::Rejected),
            "Hired" => Ok(ApplicationStatus::Hired),
            other => Err(format!("unknown application status: {other}")),
        }
    }
}

/// Feedback topic
///
/// Serialized with the human-readable labels the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackTopic {
    #[serde(rename = "Interview Performance")]
    InterviewPerformance,
    #[serde(rename = "Internship Review")]
    InternshipReview,
    #[serde(rename = "Technical Assessment")]
    TechnicalAssessment,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
}

impl FeedbackTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackTopic::InterviewPerformance => "Interview Performance",
            FeedbackTopic::InternshipReview => "Internship Review",
            FeedbackTopic::TechnicalAssessment => "Technical Assessment",
            FeedbackTopic::SoftSkills => "Soft Skills",
        }
    }
}

impl fmt::Display for FeedbackTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Interview Performance" => Ok(FeedbackTopic::InterviewPerformance),
            "Internship Review" => Ok(FeedbackTopic::InternshipReview),
            "Technical Assessment" => Ok(FeedbackTopic::TechnicalAssessment),
            "Soft Skills" => Ok(FeedbackTopic::SoftSkills),
            other => Err(format!("unknown feedback topic: {other}")),
        }
    }
}

/// Work log entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkLogKind {
    Work,
    Meeting,
    Research,
    Review,
}

impl WorkLogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkLogKind::Work => "Work",
            WorkLogKind::Meeting => "Meeting",
            WorkLogKind::Research => "Research",
            WorkLogKind::Review => "Review",
        }
    }
}

impl fmt::Display for WorkLogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkLogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Work" => Ok(WorkLogKind::Work),
            "Meeting" => Ok(WorkLogKind::Meeting),
            "Research" => Ok(WorkLogKind::Research),
            "Review" => Ok(WorkLogKind::Review),
            other => Err(format!("unknown work log kind: {other}")),
        }
    }
}
