use crate::basic_types::KeyedVec;
use crate::engine::conflict_analysis::DecisionLevels;
use crate::engine::conflict_analysis::VariableFlags;
use crate::engine::sat::AssignmentsPropositional;
use crate::engine::sat::ClauseAllocator;
use crate::engine::variables::Literal;
use crate::engine::variables::PropositionalVariable;

/// The view on the solver available during clause minimisation. The per-variable flags are shared
/// with conflict analysis: minimisation reads `seen` and owns `poison` and `removable`.
#[derive(Debug)]
pub(crate) struct MinimisationContext<'a> {
    pub(crate) assignments: &'a AssignmentsPropositional,
    pub(crate) clause_allocator: &'a ClauseAllocator,
    pub(crate) decision_levels: &'a DecisionLevels,
    pub(crate) flags: &'a mut KeyedVec<PropositionalVariable, VariableFlags>,
    pub(crate) max_depth: usize,
}

impl<'a> MinimisationContext<'a> {
    /// Returns the reason of the provided true literal, excluding the literal itself. Decisions
    /// have no reason.
    pub(crate) fn get_reason(&self, literal: Literal) -> Option<&'a [Literal]> {
        let clause_allocator = self.clause_allocator;
        self.assignments
            .get_variable_reason(literal.get_propositional_variable())
            .map(|reference| clause_allocator[reference].get_literal_slice())
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.assignments.get_decision_level()
    }

    pub(crate) fn flags(&self, variable: PropositionalVariable) -> VariableFlags {
        self.flags[variable]
    }
}
