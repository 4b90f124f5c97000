use thiserror::Error;

/// Errors raised by input validation before any matching work starts.
///
/// These are the only errors an allocation run produces. Everything else
/// the inputs can throw at the allocator (unmatched students, names nobody
/// on staff carries, zero-capacity professors, duplicate display names) is
/// absorbed by the matching policy and reported through the outcome, not
/// through an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocationError {
    /// The student collection was empty.
    #[error("no students supplied")]
    NoStudents,

    /// The professor collection was empty.
    #[error("no professors supplied")]
    NoProfessors,
}
