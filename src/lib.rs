//! Capacity-constrained matching of students to supervising professors.
//!
//! The surrounding collector supplies consistent snapshots of student and
//! professor records; [`allocate`] turns one snapshot into a conflict-free
//! assignment list in a single deterministic pass, prioritized by CGPA and
//! steered by each student's ranked preferences. [`RecordStore`] is the
//! seam that collector implements to feed records in and have the result
//! stored wholesale; [`AllocationPolicy`] names the matching policy a run
//! uses.

pub mod allocator;
pub mod config;
pub mod data;
pub mod error;
pub mod store;

pub use allocator::{allocate, normalize_name};
pub use config::{AllocationPolicy, AllocatorConfig};
pub use data::{AllocationOutcome, Assignment, DataQualityWarning, Professor, Student};
pub use error::AllocationError;
pub use store::{MemoryStore, RecordStore, run_allocation};
