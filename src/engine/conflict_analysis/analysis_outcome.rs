use crate::basic_types::ClauseReference;
use crate::engine::variables::Literal;
#[cfg(doc)]
use crate::ClauseLearningSolver;

/// The outcome of analysing a conflict with [`ClauseLearningSolver::analyse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The conflict occurred at the root level; the empty clause has been learned.
    Unsatisfiable,
    /// A clause was learned, the solver backjumped and the asserting literal is assigned.
    Learned {
        /// The negation of the first unique implication point, now true at `backjump_level`.
        asserting_literal: Literal,
        /// The second highest decision level in the learned clause, or 0 for a unit.
        backjump_level: usize,
        /// The number of distinct decision levels of the first UIP clause.
        glue: u32,
        /// The number of literals of the clause after minimisation.
        size: usize,
        /// The stored clause; units are not stored but assigned at the root.
        learned_clause: Option<ClauseReference>,
    },
}

impl AnalysisOutcome {
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, AnalysisOutcome::Unsatisfiable)
    }
}
