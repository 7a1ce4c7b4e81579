use fnv::FnvHashSet;

use super::AssignmentsPropositional;
use crate::engine::variables::Literal;

/// Computes the Literal Block Distance of `clause`: the number of distinct non-root decision levels
/// among its literals. Unassigned literals are ignored.
pub(crate) fn calculate_lbd(clause: &[Literal], assignments: &AssignmentsPropositional) -> usize {
    clause
        .iter()
        .filter(|&&literal| !assignments.is_literal_unassigned(literal))
        .map(|&literal| assignments.get_literal_assignment_level(literal))
        .filter(|&level| level > 0)
        .collect::<FnvHashSet<_>>()
        .len()
}
