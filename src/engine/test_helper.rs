#![cfg(test)]
//! This module exposes helpers that aid testing of conflict analysis. The [`TestSolver`] allows
//! setting up specific trails and conflicts, and solving small formulas with a naive CDCL loop.
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use super::sat::AssignmentsPropositional;
use crate::basic_types::ClauseReference;
use crate::engine::variables::Literal;
use crate::engine::variables::PropositionalVariable;
use crate::engine::AnalysisOutcome;
use crate::engine::ClauseLearningSolver;
use crate::engine::SolverOptions;

/// Wraps a [`ClauseLearningSolver`] with the propagation and search it leaves to its caller.
#[derive(Debug)]
pub(crate) struct TestSolver {
    pub(crate) solver: ClauseLearningSolver,
}

impl Default for TestSolver {
    fn default() -> Self {
        TestSolver::with_options(SolverOptions::default())
    }
}

#[allow(unused, reason = "not every test uses every helper")]
impl TestSolver {
    pub(crate) fn with_options(options: SolverOptions) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        TestSolver {
            solver: ClauseLearningSolver::new(options).expect("valid test options"),
        }
    }

    pub(crate) fn new_literal(&mut self) -> Literal {
        self.solver.new_literal()
    }

    pub(crate) fn new_literals(&mut self, num_literals: usize) -> Vec<Literal> {
        (0..num_literals).map(|_| self.new_literal()).collect()
    }

    /// Store an original clause, which must be neither a unit nor satisfied at the root.
    pub(crate) fn add_clause(&mut self, literals: Vec<Literal>) -> ClauseReference {
        self.solver
            .add_clause(literals)
            .expect("the formula is not unsatisfiable yet")
            .expect("test clauses are not units or satisfied at the root")
    }

    /// Opens a new decision level and decides `literal` on it.
    pub(crate) fn set_decision(&mut self, literal: Literal) {
        self.solver.decide(literal);
    }

    pub(crate) fn set_propagation(&mut self, literal: Literal, reason: Option<ClauseReference>) {
        self.solver.assign(literal, reason);
    }

    pub(crate) fn assignments(&self) -> &AssignmentsPropositional {
        self.solver.assignments()
    }

    pub(crate) fn is_true(&self, literal: Literal) -> bool {
        self.solver.get_literal_value(literal) == Some(true)
    }

    pub(crate) fn is_variable_assigned(&self, variable: PropositionalVariable) -> bool {
        self.assignments().is_variable_assigned(variable)
    }

    pub(crate) fn is_false(&self, literal: Literal) -> bool {
        self.solver.get_literal_value(literal) == Some(false)
    }

    pub(crate) fn analyse_conflict(&mut self, conflict: ClauseReference) -> AnalysisOutcome {
        self.solver.declare_conflict(conflict);
        self.solver.analyse()
    }

    /// Propagate every clause until a fixed point is reached. Returns a falsified clause if one
    /// is found.
    pub(crate) fn propagate(&mut self) -> Option<ClauseReference> {
        loop {
            let mut has_propagated = false;
            let references = self
                .solver
                .clause_allocator()
                .references()
                .collect::<Vec<_>>();

            for reference in references {
                let literals = self.solver.get_clause_literals(reference);
                if literals.iter().any(|&literal| self.is_true(literal)) {
                    continue;
                }
                let mut unassigned = literals
                    .iter()
                    .copied()
                    .filter(|&literal| !self.is_false(literal));

                match (unassigned.next(), unassigned.next()) {
                    (None, _) => return Some(reference),
                    (Some(unit), None) => {
                        self.solver.assign(unit, Some(reference));
                        has_propagated = true;
                    }
                    _ => {}
                }
            }

            if !has_propagated {
                return None;
            }
        }
    }

    /// A plain CDCL loop. `on_learned` is called after every analysis. Returns whether the
    /// formula is satisfiable.
    pub(crate) fn solve(
        &mut self,
        mut on_learned: impl FnMut(&ClauseLearningSolver, &AnalysisOutcome),
    ) -> bool {
        loop {
            if self.solver.is_unsatisfiable() {
                return false;
            }

            if let Some(conflict) = self.propagate() {
                let outcome = self.analyse_conflict(conflict);
                on_learned(&self.solver, &outcome);
                continue;
            }

            if self.solver.is_iterating() {
                self.solver.iterate();
            }

            match self.solver.next_decision() {
                Some(decision) => self.solver.decide(decision),
                None => return true,
            }
        }
    }

    /// Whether the current assignment is total and satisfies every stored clause.
    pub(crate) fn is_model(&self) -> bool {
        let is_total = (0..self.solver.num_variables())
            .all(|index| self.is_variable_assigned(PropositionalVariable::new(index)));

        is_total
            && self.solver.clause_allocator().references().all(|reference| {
                self.solver
                    .get_clause_literals(reference)
                    .iter()
                    .any(|&literal| self.is_true(literal))
            })
    }
}

/// An in-memory writer whose contents can be inspected after it was handed to a
/// [`crate::Proof`].
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("proofs are ASCII")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
