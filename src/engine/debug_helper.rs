use fnv::FnvHashSet;
use log::warn;

use super::sat::AssignmentsPropositional;
use super::sat::ClauseAllocator;
use crate::basic_types::ClauseReference;
use crate::engine::variables::Literal;

/// Expensive consistency checks, only meant to be called from within assertions.
#[derive(Debug, Copy, Clone)]
pub(crate) struct DebugHelper {}

impl DebugHelper {
    /// Checks a first UIP clause before backjumping: its variables are distinct, every literal is
    /// false, and exactly one literal is assigned at the current decision level.
    pub(crate) fn debug_check_learned_clause(
        learned_literals: &[Literal],
        assignments: &AssignmentsPropositional,
    ) -> bool {
        let distinct_variables = learned_literals
            .iter()
            .map(|literal| literal.get_propositional_variable())
            .collect::<FnvHashSet<_>>();
        if distinct_variables.len() != learned_literals.len() {
            warn!("Learned clause {learned_literals:?} contains a variable more than once");
            return false;
        }

        if let Some(literal) = learned_literals
            .iter()
            .find(|&&literal| !assignments.is_literal_assigned_false(literal))
        {
            warn!("Learned clause literal {literal} is not falsified");
            return false;
        }

        let current_level = assignments.get_decision_level();
        let num_at_current_level = learned_literals
            .iter()
            .filter(|&&literal| assignments.get_literal_assignment_level(literal) == current_level)
            .count();
        if num_at_current_level != 1 {
            warn!(
                "Learned clause {learned_literals:?} has {num_at_current_level} literals at the current level"
            );
            return false;
        }

        true
    }

    /// Checks that `reason` contains the literal it propagates and that all its other literals are
    /// false.
    pub(crate) fn debug_check_reason(
        propagated_literal: Literal,
        reason: ClauseReference,
        clause_allocator: &ClauseAllocator,
        assignments: &AssignmentsPropositional,
    ) -> bool {
        let literals = clause_allocator[reason].get_literal_slice();
        if !literals.contains(&propagated_literal) {
            warn!("Reason {reason} does not contain the propagated literal {propagated_literal}");
            return false;
        }

        literals
            .iter()
            .filter(|&&literal| literal != propagated_literal)
            .all(|&literal| assignments.is_literal_assigned_false(literal))
    }
}
