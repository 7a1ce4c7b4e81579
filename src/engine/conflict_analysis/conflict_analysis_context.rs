use log::debug;
use log::warn;

use crate::basic_types::ClauseReference;
use crate::branching::VariableScores;
use crate::branching::Vmtf;
use crate::engine::sat::AssignmentsPropositional;
use crate::engine::sat::ClauseAllocator;
use crate::engine::variables::Literal;
use crate::engine::Counters;
use crate::engine::SolverOptions;
use crate::engine::SolverState;
use crate::learnsat_assert_simple;
use crate::proof::Proof;

/// Used during conflict analysis to provide the necessary information.
/// All fields are made public for the time being for simplicity. In the future that may change.
#[derive(Debug)]
pub(crate) struct ConflictAnalysisContext<'a> {
    pub(crate) assignments: &'a mut AssignmentsPropositional,
    pub(crate) clause_allocator: &'a mut ClauseAllocator,
    pub(crate) vmtf: &'a mut Vmtf,
    pub(crate) scores: &'a mut VariableScores,
    pub(crate) proof: &'a mut Proof,
    pub(crate) counters: &'a mut Counters,
    pub(crate) solver_state: &'a mut SolverState,
    pub(crate) options: &'a SolverOptions,
}

impl ConflictAnalysisContext<'_> {
    // Returns the current decision level
    pub(crate) fn get_decision_level(&self) -> usize {
        self.assignments.get_decision_level()
    }

    /// Backtrack to the provided decision level
    pub(crate) fn backtrack(&mut self, backtrack_level: usize) {
        learnsat_assert_simple!(backtrack_level <= self.get_decision_level());

        let unassigned_literals = self.assignments.synchronise(backtrack_level);

        unassigned_literals.for_each(|literal| {
            self.vmtf.on_unassign(literal.get_propositional_variable());
        });
    }

    /// Assign `literal` as implied by `reason`. An assignment at the root level is a learned unit.
    pub(crate) fn assign(&mut self, literal: Literal, reason: Option<ClauseReference>) {
        self.assignments.enqueue_propagated_literal(literal, reason);
        if self.get_decision_level() == 0 {
            self.learn_unit_clause(literal);
        }
    }

    /// Store a learned clause of at least two literals; the first two are the watched ones.
    pub(crate) fn install_learned_clause(
        &mut self,
        literals: Vec<Literal>,
        glue: u32,
    ) -> ClauseReference {
        learnsat_assert_simple!(literals.len() > 1);

        if let Err(e) = self.proof.trace_derived_clause(&literals) {
            warn!("Failed to log learned clause to the proof: {e}");
        }

        let is_extended = self.options.is_stamp_eligible(literals.len(), glue);
        let reference = self
            .clause_allocator
            .create_learned_clause(literals, glue, is_extended);
        debug!(
            "learned clause {} with glue {glue}",
            self.clause_allocator[reference]
        );
        reference
    }

    pub(crate) fn learn_empty_clause(&mut self) {
        learnsat_assert_simple!(!self.solver_state.is_infeasible());
        debug!("learned empty clause");

        if let Err(e) = self.proof.trace_empty_clause() {
            warn!("Failed to log the empty clause to the proof: {e}");
        }
        self.solver_state.declare_infeasible();
    }

    /// Every root-level assignment goes through here, whether it comes from analysis or from
    /// propagation at the root.
    pub(crate) fn learn_unit_clause(&mut self, literal: Literal) {
        debug!("learned unit clause {literal}");

        if let Err(e) = self.proof.trace_unit_clause(literal) {
            warn!("Failed to log unit clause to the proof: {e}");
        }
        self.solver_state.declare_iterating();
        self.counters.num_fixed += 1;
    }
}
