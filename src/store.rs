use crate::allocator::allocate;
use crate::config::AllocatorConfig;
use crate::data::{AllocationOutcome, Assignment, Professor, Student};
use anyhow::Result;
use log::info;

/// The contract the surrounding collector implements: bulk snapshots of the
/// student and professor records, and replace-style storage for the
/// assignment set produced from them. Snapshot consistency and the
/// serialization of concurrent runs are the implementor's responsibility.
pub trait RecordStore {
    /// Every student record as of a consistent point in time.
    fn load_students(&self) -> Result<Vec<Student>>;

    /// Every professor record as of the same point in time.
    fn load_professors(&self) -> Result<Vec<Professor>>;

    /// Replaces the previously stored assignment set wholesale. There is no
    /// incremental merge.
    fn replace_assignments(&mut self, assignments: Vec<Assignment>) -> Result<()>;
}

/// Loads a snapshot, runs one allocation pass, and stores the result.
///
/// If the allocator rejects its input the store is left untouched, so a
/// failed run never clobbers the previously stored assignments.
pub fn run_allocation(
    store: &mut impl RecordStore,
    config: &AllocatorConfig,
) -> Result<AllocationOutcome> {
    let students = store.load_students()?;
    let professors = store.load_professors()?;
    let outcome = allocate(&students, &professors, config)?;
    store.replace_assignments(outcome.assignments.clone())?;
    info!(
        "Stored {} assignments ({} students unassigned)",
        outcome.assignments.len(),
        outcome.unassigned.len()
    );
    Ok(outcome)
}

/// Vec-backed store, the reference implementation and the test harness.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub students: Vec<Student>,
    pub professors: Vec<Professor>,
    pub assignments: Vec<Assignment>,
}

impl RecordStore for MemoryStore {
    fn load_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn load_professors(&self) -> Result<Vec<Professor>> {
        Ok(self.professors.clone())
    }

    fn replace_assignments(&mut self, assignments: Vec<Assignment>) -> Result<()> {
        self.assignments = assignments;
        Ok(())
    }
}
