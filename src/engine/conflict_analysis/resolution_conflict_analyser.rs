use std::time::Instant;

use log::debug;
use log::trace;

use super::AnalysisOutcome;
use super::ClauseActivityTracker;
use super::ConflictAnalysisContext;
use super::DecisionLevels;
use crate::basic_types::ClauseReference;
use crate::basic_types::KeyedVec;
use crate::branching::sort_seen;
use crate::engine::minimisation::MinimisationContext;
use crate::engine::minimisation::RecursiveMinimiser;
use crate::engine::sat::calculate_lbd;
use crate::engine::sat::AssignmentsPropositional;
use crate::engine::variables::Literal;
use crate::engine::variables::PropositionalVariable;
use crate::engine::DebugHelper;
use crate::learnsat_assert_eq_moderate;
use crate::learnsat_assert_extreme;
use crate::learnsat_assert_moderate;
use crate::learnsat_assert_simple;

/// Per-variable marks used during a single conflict analysis. All of them are cleared before
/// the analysis returns.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct VariableFlags {
    /// The variable occurs in the conflict or in one of the resolved reasons.
    pub(crate) seen: bool,
    /// Minimisation showed the literal cannot be removed.
    pub(crate) poison: bool,
    /// Minimisation showed the literal is implied by the rest of the clause.
    pub(crate) removable: bool,
}

#[derive(Debug, Default)]
pub(crate) struct ResolutionConflictAnalyser {
    flags: KeyedVec<PropositionalVariable, VariableFlags>,
    /// The literals of all seen variables, in the order in which they were seen.
    seen: Vec<Literal>,
    /// The decision levels with at least one seen variable, in the order in which they were found.
    levels: Vec<usize>,
    /// The clause under construction.
    learned_literals: Vec<Literal>,
    decision_levels: DecisionLevels,
    clause_activity: ClauseActivityTracker,
    minimiser: RecursiveMinimiser,
}

impl ResolutionConflictAnalyser {
    pub(crate) fn grow(&mut self, variable: PropositionalVariable) {
        self.flags.accomodate(variable, VariableFlags::default());
    }

    /// The number of clause activity stamps handed out so far.
    pub(crate) fn num_resolved(&self) -> u64 {
        self.clause_activity.num_resolved()
    }

    /// Whether all working sets and marks are in their resting state.
    pub(crate) fn is_clear(&self) -> bool {
        self.seen.is_empty()
            && self.levels.is_empty()
            && self.learned_literals.is_empty()
            && self.clause_activity.is_empty()
            && self.decision_levels.is_clear()
            && self
                .flags
                .iter()
                .all(|flags| !flags.seen && !flags.poison && !flags.removable)
    }

    /// Analyse the falsified clause `conflict`.
    ///
    /// At the root level this learns the empty clause. Otherwise the conflict is resolved with the
    /// reasons of the current-level literals, in reverse trail order, until a single literal of
    /// the current level remains: the first unique implication point (UIP). The resulting clause
    /// is minimised and stored (unless it is a unit), the solver backjumps to the second highest
    /// level in the clause and the negated UIP is assigned with the clause as its reason. Finally
    /// all seen variables are bumped.
    ///
    /// # Bibliography
    /// \[1\] J. Marques-Silva, I. Lynce, and S. Malik, ‘Conflict-driven clause learning SAT
    /// solvers’, in Handbook of satisfiability, IOS press, 2021
    pub(crate) fn analyse(
        &mut self,
        conflict: ClauseReference,
        context: &mut ConflictAnalysisContext,
    ) -> AnalysisOutcome {
        if context.get_decision_level() == 0 {
            context.learn_empty_clause();
            return AnalysisOutcome::Unsatisfiable;
        }

        let start = Instant::now();
        learnsat_assert_extreme!(self.is_clear());

        debug!(
            "analysing conflict {} at level {}",
            context.clause_allocator[conflict],
            context.get_decision_level()
        );

        let uip = self.compute_first_uip(conflict, context);
        trace!("first UIP {uip}");
        self.learned_literals.push(!uip);
        learnsat_assert_extreme!(DebugHelper::debug_check_learned_clause(
            &self.learned_literals,
            context.assignments
        ));

        self.clause_activity.flush(context.clause_allocator);

        let glue = self.levels.len() as u32;
        learnsat_assert_eq_moderate!(
            glue as usize,
            calculate_lbd(&self.learned_literals, context.assignments)
        );
        debug!(
            "first UIP clause of size {} and glue {glue}",
            self.learned_literals.len()
        );
        context.counters.record_glue(glue);

        if context.options.minimise {
            let mut minimisation_context = MinimisationContext {
                assignments: context.assignments,
                clause_allocator: context.clause_allocator,
                decision_levels: &self.decision_levels,
                flags: &mut self.flags,
                max_depth: context.options.minimise_depth,
            };
            let num_removed = self
                .minimiser
                .minimise(&mut minimisation_context, &mut self.learned_literals);
            context.counters.num_minimised_literals += num_removed as u64;
        }

        let size = self.learned_literals.len();
        context.counters.num_learned_units += (size == 1) as u64;
        context.counters.num_learned_binaries += (size == 2) as u64;
        context
            .counters
            .average_learned_clause_length
            .add_term(size as u64);

        let (backjump_level, learned_clause) = if size > 1 {
            // The first two literals are the watched ones: the UIP, then the highest literal of a
            // lower level.
            let assignments = &*context.assignments;
            self.learned_literals.sort_by(|lhs, rhs| {
                assignments
                    .get_literal_trail_position(*rhs)
                    .cmp(&assignments.get_literal_trail_position(*lhs))
            });
            learnsat_assert_simple!(self.learned_literals[0] == !uip);

            let backjump_level = assignments.get_literal_assignment_level(self.learned_literals[1]);
            let reference = context.install_learned_clause(self.learned_literals.clone(), glue);
            (backjump_level, Some(reference))
        } else {
            (0, None)
        };
        context.counters.jump.add_term(backjump_level as f64);

        context.backtrack(backjump_level);
        context.assign(!uip, learned_clause);

        self.bump_and_clear_seen_variables(context);
        self.learned_literals.clear();
        self.clear_levels();

        context.counters.time_spent_in_analysis += start.elapsed();

        AnalysisOutcome::Learned {
            asserting_literal: !uip,
            backjump_level,
            glue,
            size,
            learned_clause,
        }
    }

    /// Resolve backwards along the trail until one open literal of the current level remains.
    fn compute_first_uip(
        &mut self,
        conflict: ClauseReference,
        context: &ConflictAnalysisContext,
    ) -> Literal {
        let conflict_level = context.get_decision_level();
        let mut reason = conflict;
        let mut num_open = 0;
        let mut trail_index = context.assignments.num_trail_entries();

        loop {
            let clause = &context.clause_allocator[reason];
            self.clause_activity
                .mark_resolved(reason, clause, context.options);
            for &literal in clause.get_literal_slice() {
                if self.analyse_literal(literal, conflict_level, context.assignments) {
                    num_open += 1;
                }
            }
            learnsat_assert_simple!(
                num_open > 0,
                "The conflict must contain a literal of the current decision level"
            );

            let uip = loop {
                trail_index -= 1;
                let literal = context.assignments.get_trail_entry(trail_index);
                if self.flags[literal.get_propositional_variable()].seen {
                    break literal;
                }
            };

            num_open -= 1;
            if num_open == 0 {
                return uip;
            }

            reason = context
                .assignments
                .get_variable_reason(uip.get_propositional_variable())
                .expect("Only the first UIP can be a decision");
            trace!("analysing reason {} of {uip}", context.clause_allocator[reason]);
        }
    }

    /// Mark a literal of a resolved clause as seen. Literals of lower levels go into the learned
    /// clause, root-level literals are dropped. Returns whether the literal is at the conflict
    /// level, i.e. still has to be resolved away.
    fn analyse_literal(
        &mut self,
        literal: Literal,
        conflict_level: usize,
        assignments: &AssignmentsPropositional,
    ) -> bool {
        let variable = literal.get_propositional_variable();
        if self.flags[variable].seen {
            return false;
        }
        let level = assignments.get_variable_assignment_level(variable);
        if level == 0 {
            return false;
        }
        learnsat_assert_moderate!(assignments.is_literal_assigned_false(literal));

        if level < conflict_level {
            self.learned_literals.push(literal);
        }

        let record = self.decision_levels.get_mut_or_create(level);
        if record.seen_count == 0 {
            trace!("found new level {level} contributing to conflict");
            self.levels.push(level);
        }
        record.seen_count += 1;
        record.min_trail_position = record
            .min_trail_position
            .min(assignments.get_variable_trail_position(variable));

        self.flags[variable].seen = true;
        self.seen.push(literal);
        trace!("analysed literal {literal} assigned at level {level}");

        level == conflict_level
    }

    fn bump_and_clear_seen_variables(&mut self, context: &mut ConflictAnalysisContext) {
        let start = Instant::now();

        sort_seen(
            &mut self.seen,
            context.options.bump_sort,
            context.vmtf,
            context.scores,
            context.assignments,
        );
        for literal in self.seen.drain(..) {
            let variable = literal.get_propositional_variable();
            learnsat_assert_moderate!(self.flags[variable].seen);
            self.flags[variable].seen = false;
            context.vmtf.bump(
                variable,
                context.assignments.is_variable_assigned(variable),
                context.scores,
            );
        }
        context.scores.decay();

        context.counters.time_spent_bumping += start.elapsed();
    }

    fn clear_levels(&mut self) {
        for level in self.levels.drain(..) {
            self.decision_levels.reset(level);
        }
    }
}
