use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// Type aliases for clarity
pub type RollNumber = String;
pub type PreferenceRank = u32;
pub type AllocationScore = i32;

/// A student requesting supervision, as collected by the surrounding system.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub roll_number: RollNumber,
    pub name: String,
    pub email: Option<String>,
    pub cgpa: f64,
    /// Declared research domain, free text.
    pub domain: String,
    /// Professor names ranked from most to least preferred. Records that
    /// omit the list are treated as having no preferences.
    #[serde(default)]
    pub preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A supervising professor with a fixed number of seats.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    /// Display name; matching happens on its normalized form.
    pub name: String,
    pub department: String,
    /// Area of expertise, free text.
    pub expertise: String,
    /// Seats available. Zero is legitimate and simply never fills.
    pub capacity: u32,
    pub created_at: DateTime<Utc>,
}

/// A single student-professor pairing produced by an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub student_name: String,
    pub student_email: Option<String>,
    pub roll_number: RollNumber,
    pub cgpa: f64,
    pub domain: String,
    /// The assigned professor's display name, never the normalized key.
    pub professor_name: String,
    /// 1-based position in the student's preference list, or 0 for a
    /// placement made outside the list by the fallback policy.
    pub preference_rank: PreferenceRank,
    pub allocation_score: AllocationScore,
    pub created_at: DateTime<Utc>,
}

/// Describes a data-quality problem noticed while preparing a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityWarning {
    pub warning_type: String,
    pub description: String,
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.warning_type, self.description)
    }
}

/// The final output of the allocator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationOutcome {
    /// Assignments in the order they were made, i.e. by student priority.
    pub assignments: Vec<Assignment>,
    /// Roll numbers of students left without a seat, in priority order.
    pub unassigned: Vec<RollNumber>,
    pub warnings: Vec<DataQualityWarning>,
    /// Seats available across the deduplicated professor table.
    pub total_capacity: usize,
}
