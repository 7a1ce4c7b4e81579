//! Houses the solver which owns the trail, the clause store and the decision heuristic, and
//! learns a clause from every conflict it is handed.
use log::debug;
use log::info;

use super::conflict_analysis::AnalysisOutcome;
use super::conflict_analysis::ConflictAnalysisContext;
use super::conflict_analysis::ResolutionConflictAnalyser;
use super::sat::AssignmentsPropositional;
use super::sat::ClauseAllocator;
use super::variables::Literal;
use super::variables::PropositionalVariable;
use super::Counters;
use super::DebugHelper;
use super::SolverOptions;
use super::SolverState;
use crate::basic_types::statistic_logging::log_statistic;
use crate::basic_types::statistic_logging::should_log_statistics;
use crate::basic_types::ClauseReference;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::SolverOptionsError;
use crate::branching::VariableScores;
use crate::branching::Vmtf;
use crate::learnsat_assert_extreme;
use crate::learnsat_assert_moderate;
use crate::learnsat_assert_simple;
use crate::proof::Proof;

/// A conflict-driven clause learning core.
///
/// The solver does not propagate by itself. The caller decides with [`Self::decide`] (typically
/// on [`Self::next_decision`]), assigns implied literals with [`Self::assign`] and reports a
/// falsified clause with [`Self::declare_conflict`]. [`Self::analyse`] then learns a clause,
/// backjumps and assigns the asserting literal, after which propagation continues.
///
/// # Example
/// ```
/// # use learnsat::ClauseLearningSolver;
/// # use learnsat::SolverOptions;
/// # use learnsat::AnalysisOutcome;
/// let mut solver = ClauseLearningSolver::new(SolverOptions::default()).unwrap();
/// let a = solver.new_literal();
/// let b = solver.new_literal();
/// let conflict = solver.add_clause([!a, !b]).unwrap().unwrap();
/// let reason = solver.add_clause([!a, b]).unwrap().unwrap();
///
/// solver.decide(a);
/// solver.assign(b, Some(reason));
/// solver.declare_conflict(conflict);
///
/// let outcome = solver.analyse();
/// assert!(matches!(outcome, AnalysisOutcome::Learned { backjump_level: 0, size: 1, .. }));
/// assert_eq!(solver.get_literal_value(!a), Some(true));
/// ```
#[derive(Debug)]
pub struct ClauseLearningSolver {
    state: SolverState,
    assignments: AssignmentsPropositional,
    clause_allocator: ClauseAllocator,
    vmtf: Vmtf,
    scores: VariableScores,
    conflict_analyser: ResolutionConflictAnalyser,
    proof: Proof,
    counters: Counters,
    options: SolverOptions,
}

impl ClauseLearningSolver {
    pub fn new(options: SolverOptions) -> Result<Self, SolverOptionsError> {
        options.validate()?;

        Ok(ClauseLearningSolver {
            state: SolverState::default(),
            assignments: AssignmentsPropositional::default(),
            clause_allocator: ClauseAllocator::default(),
            vmtf: Vmtf::default(),
            scores: VariableScores::new(options.decay),
            conflict_analyser: ResolutionConflictAnalyser::default(),
            proof: Proof::default(),
            counters: Counters::new(&options),
            options,
        })
    }

    /// Log every derived clause to `proof`.
    pub fn with_proof(mut self, proof: Proof) -> Self {
        self.proof = proof;
        self
    }

    pub fn new_variable(&mut self) -> PropositionalVariable {
        let variable = self.assignments.grow();
        self.vmtf.grow(variable);
        self.scores.grow(variable);
        self.conflict_analyser.grow(variable);
        variable
    }

    /// Creates a new variable and returns its positive literal.
    pub fn new_literal(&mut self) -> Literal {
        Literal::new(self.new_variable(), true)
    }

    /// Add a clause of the input formula. This is only allowed at the root level.
    ///
    /// The clause is simplified with the root assignments first. A satisfied clause is dropped and
    /// a unit is assigned directly; in both cases no clause is stored and `None` is returned. If
    /// the simplified clause is empty the formula is unsatisfiable.
    pub fn add_clause(
        &mut self,
        literals: impl IntoIterator<Item = Literal>,
    ) -> Result<Option<ClauseReference>, ConstraintOperationError> {
        learnsat_assert_simple!(
            self.get_decision_level() == 0,
            "Clauses can only be added at the root level"
        );

        if self.state.is_infeasible() {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        let mut literals = literals.into_iter().collect::<Vec<_>>();
        literals.sort_by_key(|literal| literal.to_u32());
        literals.dedup();

        let is_tautology = literals
            .windows(2)
            .any(|pair| pair[0].get_propositional_variable() == pair[1].get_propositional_variable());
        let is_satisfied = literals
            .iter()
            .any(|&literal| self.assignments.is_literal_assigned_true(literal));
        if is_tautology || is_satisfied {
            return Ok(None);
        }

        literals.retain(|&literal| !self.assignments.is_literal_assigned_false(literal));

        match literals.len() {
            0 => {
                self.context().learn_empty_clause();
                Err(ConstraintOperationError::InfeasibleClause)
            }
            1 => {
                self.assign(literals[0], None);
                Ok(None)
            }
            _ => Ok(Some(self.clause_allocator.create_original_clause(literals))),
        }
    }

    /// Open a new decision level and assign `decision_literal` on it.
    pub fn decide(&mut self, decision_literal: Literal) {
        learnsat_assert_simple!(self.state.is_ready());

        self.assignments.increase_decision_level();
        debug!(
            "deciding {decision_literal} at level {}",
            self.get_decision_level()
        );
        self.assignments.enqueue_decision_literal(decision_literal);
    }

    /// The positive literal of the most recently bumped unassigned variable, or `None` when every
    /// queued variable is assigned.
    pub fn next_decision(&mut self) -> Option<Literal> {
        self.vmtf
            .next_unassigned(&self.assignments)
            .map(|variable| Literal::new(variable, true))
    }

    /// Assign `literal` as implied by `reason`. Without a reason the literal acts as an
    /// unexplained assignment; at the root level that makes it a learned unit.
    pub fn assign(&mut self, literal: Literal, reason: Option<ClauseReference>) {
        learnsat_assert_moderate!(reason.map_or(true, |reason| {
            DebugHelper::debug_check_reason(
                literal,
                reason,
                &self.clause_allocator,
                &self.assignments,
            )
        }));

        self.context().assign(literal, reason);
    }

    /// Report that `conflict` is falsified by the current assignment. Ignored once the formula is
    /// known to be unsatisfiable.
    pub fn declare_conflict(&mut self, conflict: ClauseReference) {
        if self.state.is_infeasible() {
            return;
        }
        learnsat_assert_moderate!(self.clause_allocator[conflict]
            .get_literal_slice()
            .iter()
            .all(|&literal| self.assignments.is_literal_assigned_false(literal)));

        self.state.declare_conflict(conflict);
    }

    /// Learn from the declared conflict. Afterwards the solver is ready to propagate again, or it
    /// has proven unsatisfiability.
    pub fn analyse(&mut self) -> AnalysisOutcome {
        if self.state.is_infeasible() {
            return AnalysisOutcome::Unsatisfiable;
        }
        let Some(conflict) = self.state.get_conflict() else {
            panic!("Conflict analysis requires a declared conflict");
        };
        self.counters.num_conflicts += 1;

        let mut context = ConflictAnalysisContext {
            assignments: &mut self.assignments,
            clause_allocator: &mut self.clause_allocator,
            vmtf: &mut self.vmtf,
            scores: &mut self.scores,
            proof: &mut self.proof,
            counters: &mut self.counters,
            solver_state: &mut self.state,
            options: &self.options,
        };
        let outcome = self.conflict_analyser.analyse(conflict, &mut context);

        if !self.state.is_infeasible() {
            self.state.declare_ready();
        }
        learnsat_assert_extreme!(self.vmtf.debug_check_cursor(&self.assignments));
        outcome
    }

    fn context(&mut self) -> ConflictAnalysisContext<'_> {
        ConflictAnalysisContext {
            assignments: &mut self.assignments,
            clause_allocator: &mut self.clause_allocator,
            vmtf: &mut self.vmtf,
            scores: &mut self.scores,
            proof: &mut self.proof,
            counters: &mut self.counters,
            solver_state: &mut self.state,
            options: &self.options,
        }
    }

    /// Undo all assignments above `backtrack_level`.
    pub fn backtrack(&mut self, backtrack_level: usize) {
        self.context().backtrack(backtrack_level);
        learnsat_assert_extreme!(self.vmtf.debug_check_cursor(&self.assignments));
    }

    /// Permanently take `variable` out of the decision queue.
    pub fn remove_from_decision_queue(&mut self, variable: PropositionalVariable) {
        self.vmtf.remove(variable);
    }

    pub fn is_unsatisfiable(&self) -> bool {
        self.state.is_infeasible()
    }

    pub fn is_conflicting(&self) -> bool {
        self.state.conflicting()
    }

    /// Whether a unit was learned since the last [`Self::iterate`].
    pub fn is_iterating(&self) -> bool {
        self.state.is_iterating()
    }

    /// To be called once the propagation of newly learned units completed; reports the updated
    /// number of remaining variables.
    pub fn iterate(&mut self) {
        self.state.stop_iterating();
        self.report('i');
    }

    /// Log a one-line progress report, marked with `tag`.
    pub fn report(&self, tag: char) {
        info!(
            "{tag} {:>8} conflicts {:>8} learned {:>6} fixed {:>6} remaining glue {:.1}/{:.1} jump {:.1}",
            self.counters.num_conflicts,
            self.clause_allocator.num_learned_clauses(),
            self.counters.num_fixed,
            self.num_remaining_variables(),
            self.counters.fast_glue.value(),
            self.counters.slow_glue.value(),
            self.counters.jump.value(),
        );
    }

    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }
        self.counters.log_statistics();
        log_statistic("numberOfVariables", self.num_variables());
        log_statistic("numberOfClauses", self.clause_allocator.num_clauses());
        log_statistic(
            "numberOfLearnedClauses",
            self.clause_allocator.num_learned_clauses(),
        );
        log_statistic("numberOfBumps", self.vmtf.num_bumps());
        log_statistic("numberOfRescores", self.scores.num_rescales());
        log_statistic("scoreIncrement", self.scores.increment());
        log_statistic(
            "numberOfResolvedClauseStamps",
            self.conflict_analyser.num_resolved(),
        );
    }
}

// Queries.
impl ClauseLearningSolver {
    pub fn num_variables(&self) -> u32 {
        self.assignments.num_propositional_variables()
    }

    /// The number of variables which are not fixed at the root level.
    pub fn num_remaining_variables(&self) -> usize {
        self.num_variables() as usize - self.assignments.num_root_assignments()
    }

    pub fn get_decision_level(&self) -> usize {
        self.assignments.get_decision_level()
    }

    pub fn get_literal_value(&self, literal: Literal) -> Option<bool> {
        self.assignments.get_literal_value(literal)
    }

    pub fn get_assignment_level(&self, literal: Literal) -> usize {
        self.assignments.get_literal_assignment_level(literal)
    }

    pub fn get_reason(&self, literal: Literal) -> Option<ClauseReference> {
        self.assignments
            .get_variable_reason(literal.get_propositional_variable())
    }

    pub fn num_trail_entries(&self) -> usize {
        self.assignments.num_trail_entries()
    }

    pub fn get_trail_entry(&self, index: usize) -> Literal {
        self.assignments.get_trail_entry(index)
    }

    pub fn get_clause_literals(&self, clause: ClauseReference) -> &[Literal] {
        self.clause_allocator[clause].get_literal_slice()
    }

    pub fn num_learned_clauses(&self) -> usize {
        self.clause_allocator.num_learned_clauses()
    }

    pub fn num_conflicts(&self) -> u64 {
        self.counters.num_conflicts
    }

    pub fn fast_glue_average(&self) -> f64 {
        self.counters.fast_glue.value()
    }

    pub fn slow_glue_average(&self) -> f64 {
        self.counters.slow_glue.value()
    }
}

#[cfg(test)]
impl ClauseLearningSolver {
    pub(crate) fn assignments(&self) -> &AssignmentsPropositional {
        &self.assignments
    }

    pub(crate) fn clause_allocator(&self) -> &ClauseAllocator {
        &self.clause_allocator
    }

    pub(crate) fn vmtf(&self) -> &Vmtf {
        &self.vmtf
    }

    pub(crate) fn scores(&self) -> &VariableScores {
        &self.scores
    }

    pub(crate) fn conflict_analyser(&self) -> &ResolutionConflictAnalyser {
        &self.conflict_analyser
    }

    pub(crate) fn counters(&self) -> &Counters {
        &self.counters
    }
}
