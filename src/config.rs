use serde::{Deserialize, Serialize};

/// Selects which of the two supported matching policies a run uses.
///
/// Both policies share the same ordered pass: students sorted by descending
/// CGPA (stable on ties) each claim the first professor on their preference
/// list with a free seat. They differ in what happens to a student whose
/// preferences are exhausted and in how the allocation score is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AllocationPolicy {
    /// Students are placed only with professors from their own preference
    /// list, and every assignment is scored purely on CGPA
    /// (`round(cgpa * 10)`). A student whose preferences are all full,
    /// unknown, or missing stays unassigned.
    #[default]
    PreferenceOnly,

    /// Preference placement first, exactly as above; a student whose
    /// preferences are exhausted falls back to the first professor in input
    /// order with a free seat, recorded with rank 0. Scores blend
    /// preference rank, CGPA, and expertise overlap.
    CompositeFallback,
}

/// Run-level configuration for [`allocate`](crate::allocator::allocate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllocatorConfig {
    #[serde(default)]
    pub policy: AllocationPolicy,
}
