use crate::config::{AllocationPolicy, AllocatorConfig};
use crate::data::{
    AllocationOutcome, Assignment, DataQualityWarning, PreferenceRank, Professor, RollNumber,
    Student,
};
use crate::error::AllocationError;
use chrono::Utc;
use itertools::Itertools;
use log::{info, trace, warn};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Instant;

// composite scoring weights
const RANK_POINTS_BASE: i32 = 50;
const RANK_POINTS_STEP: i32 = 10;
const RANK_POINTS_FLOOR: i32 = 10;
const EXPERTISE_BONUS: i32 = 20;

/// Normalizes a professor or preference name into its lookup key:
/// surrounding whitespace trimmed, case folded. The key is only ever used
/// for matching; display names pass through to the output untouched.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Per-professor working state for a single run.
#[derive(Debug)]
struct SeatState {
    display_name: String,
    expertise: String,
    capacity: u32,
    used: u32,
}

impl SeatState {
    fn has_room(&self) -> bool {
        self.used < self.capacity
    }
}

/// A seat successfully claimed for one student.
struct ClaimedSeat {
    display_name: String,
    expertise: String,
    /// 1-based preference rank, or 0 for a fallback placement.
    rank: PreferenceRank,
}

/// Seats keyed by normalized professor name, scoped to one allocation call.
///
/// When several records share a normalized name, the last record's state
/// wins but the name keeps its first-seen position in the scan order.
struct SeatTable {
    seats: HashMap<String, SeatState>,
    scan_order: Vec<String>,
}

impl SeatTable {
    fn total_capacity(&self) -> usize {
        self.seats.values().map(|s| s.capacity as usize).sum()
    }

    /// Claims a seat with the first professor on the preference list that
    /// still has room. Names nobody on staff carries and professors whose
    /// seats are full are passed over, not errors.
    fn claim_preferred(&mut self, preferences: &[String]) -> Option<ClaimedSeat> {
        for (position, preferred) in preferences.iter().enumerate() {
            let key = normalize_name(preferred);
            if let Some(state) = self.seats.get_mut(&key) {
                if state.has_room() {
                    state.used += 1;
                    return Some(ClaimedSeat {
                        display_name: state.display_name.clone(),
                        expertise: state.expertise.clone(),
                        rank: (position + 1) as PreferenceRank,
                    });
                }
            }
        }
        None
    }

    /// Claims a seat with the first professor in input order that still has
    /// room, recorded with rank 0.
    fn claim_fallback(&mut self) -> Option<ClaimedSeat> {
        for key in &self.scan_order {
            if let Some(state) = self.seats.get_mut(key) {
                if state.has_room() {
                    state.used += 1;
                    return Some(ClaimedSeat {
                        display_name: state.display_name.clone(),
                        expertise: state.expertise.clone(),
                        rank: 0,
                    });
                }
            }
        }
        None
    }
}

fn build_seat_table(professors: &[Professor]) -> (SeatTable, Vec<DataQualityWarning>) {
    let mut seats: HashMap<String, SeatState> = HashMap::new();
    let mut scan_order: Vec<String> = Vec::new();

    for professor in professors {
        let key = normalize_name(&professor.name);
        if !seats.contains_key(&key) {
            scan_order.push(key.clone());
        }
        // last record with a given normalized name wins
        seats.insert(
            key,
            SeatState {
                display_name: professor.name.clone(),
                expertise: professor.expertise.clone(),
                capacity: professor.capacity,
                used: 0,
            },
        );
    }

    // report every normalized name that more than one record mapped to
    let by_key: HashMap<String, Vec<&str>> = professors
        .iter()
        .map(|p| (normalize_name(&p.name), p.name.as_str()))
        .into_group_map();
    let mut warnings = Vec::new();
    for key in &scan_order {
        let names = &by_key[key];
        if names.len() > 1 {
            let warning = DataQualityWarning {
                warning_type: "Duplicate Professor Name".to_string(),
                description: format!(
                    "{} professor records share the normalized name \"{}\" ({}); only the last record's capacity is in effect",
                    names.len(),
                    key,
                    names.join(", ")
                ),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }
    }

    (SeatTable { seats, scan_order }, warnings)
}

/// Pure-CGPA score used by the preference-only policy.
fn cgpa_score(cgpa: f64) -> i32 {
    (cgpa * 10.0).round() as i32
}

/// Preference component of the composite score: rank 1 earns the most and
/// each further rank loses a step, down to a floor. Fallback placements
/// (rank 0) earn nothing from this component.
fn rank_points(rank: PreferenceRank) -> i32 {
    if rank == 0 {
        return 0;
    }
    (RANK_POINTS_BASE - RANK_POINTS_STEP * (rank as i32 - 1)).max(RANK_POINTS_FLOOR)
}

/// Flat bonus when the student's declared domain and the professor's
/// expertise contain each other in normalized form.
fn expertise_bonus(domain: &str, expertise: &str) -> i32 {
    let domain = normalize_name(domain);
    let expertise = normalize_name(expertise);
    if domain.is_empty() || expertise.is_empty() {
        return 0;
    }
    if expertise.contains(&domain) || domain.contains(&expertise) {
        EXPERTISE_BONUS
    } else {
        0
    }
}

fn score_assignment(student: &Student, seat: &ClaimedSeat, policy: AllocationPolicy) -> i32 {
    match policy {
        AllocationPolicy::PreferenceOnly => cgpa_score(student.cgpa),
        AllocationPolicy::CompositeFallback => {
            rank_points(seat.rank)
                + cgpa_score(student.cgpa)
                + expertise_bonus(&student.domain, &seat.expertise)
        }
    }
}

/// Runs one allocation pass over a snapshot of students and professors.
///
/// Students are prioritized by descending CGPA, ties keeping input order,
/// and each claims the first professor on their preference list with a free
/// seat. What happens when a preference list is exhausted, and how the
/// score is computed, follow the configured [`AllocationPolicy`]. The
/// returned assignment list is complete and consistent; the caller replaces
/// any previously stored result with it wholesale.
pub fn allocate(
    students: &[Student],
    professors: &[Professor],
    config: &AllocatorConfig,
) -> Result<AllocationOutcome, AllocationError> {
    if students.is_empty() {
        return Err(AllocationError::NoStudents);
    }
    if professors.is_empty() {
        return Err(AllocationError::NoProfessors);
    }

    let start_time = Instant::now();
    info!(
        "Allocating {} students across {} professor records with the {:?} policy...",
        students.len(),
        professors.len(),
        config.policy
    );

    // priority order: descending CGPA; the sort is stable, so students with
    // equal CGPA keep their input order
    let mut ordered: Vec<&Student> = students.iter().collect();
    ordered.sort_by(|a, b| b.cgpa.partial_cmp(&a.cgpa).unwrap_or(Ordering::Equal));

    let (mut table, warnings) = build_seat_table(professors);
    let total_capacity = table.total_capacity();

    let mut assignments: Vec<Assignment> = Vec::new();
    let mut unassigned: Vec<RollNumber> = Vec::new();

    let mut queue = ordered.into_iter();
    for student in queue.by_ref() {
        if assignments.len() == total_capacity {
            // every seat is taken; stop matching
            unassigned.push(student.roll_number.clone());
            break;
        }

        let claimed = table.claim_preferred(&student.preferences).or_else(|| {
            match config.policy {
                AllocationPolicy::PreferenceOnly => None,
                AllocationPolicy::CompositeFallback => table.claim_fallback(),
            }
        });

        match claimed {
            Some(seat) => {
                trace!(
                    "{} -> {} (rank {})",
                    student.roll_number, seat.display_name, seat.rank
                );
                let allocation_score = score_assignment(student, &seat, config.policy);
                assignments.push(Assignment {
                    student_name: student.name.clone(),
                    student_email: student.email.clone(),
                    roll_number: student.roll_number.clone(),
                    cgpa: student.cgpa,
                    domain: student.domain.clone(),
                    professor_name: seat.display_name,
                    preference_rank: seat.rank,
                    allocation_score,
                    created_at: Utc::now(),
                });
            }
            None => {
                trace!("{} left unassigned: no viable seat", student.roll_number);
                unassigned.push(student.roll_number.clone());
            }
        }
    }
    // anyone still queued after an early stop stays unassigned
    unassigned.extend(queue.map(|s| s.roll_number.clone()));

    info!(
        "Placed {} of {} students across {} seats in {:.2?}",
        assignments.len(),
        students.len(),
        total_capacity,
        start_time.elapsed()
    );

    Ok(AllocationOutcome {
        assignments,
        unassigned,
        warnings,
        total_capacity,
    })
}
