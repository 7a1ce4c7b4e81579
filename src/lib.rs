//! # learnsat
//! The conflict analysis core of a conflict-driven clause learning (CDCL) SAT solver.
//!
//! Given a clause falsified by the current assignment, [`ClauseLearningSolver::analyse`] derives
//! the first unique implication point clause, minimises it, backjumps, assigns the asserting
//! literal and bumps the involved variables in a variable move-to-front (VMTF) decision queue.
//! Unit propagation and the search loop are left to the caller.
pub mod asserts;
pub(crate) mod basic_types;
pub(crate) mod branching;
pub(crate) mod engine;
pub(crate) mod proof;
#[cfg(test)]
mod tests;

pub use basic_types::ClauseReference;
pub use basic_types::ConstraintOperationError;
pub use basic_types::SolverOptionsError;
pub use branching::BumpSort;
pub use engine::variables::Literal;
pub use engine::variables::PropositionalVariable;
pub use engine::AnalysisOutcome;
pub use engine::ClauseLearningSolver;
pub use engine::SolverOptions;
pub use proof::Proof;

pub mod statistics {
    //! Configuration of the `name=value` statistic output.
    pub use crate::basic_types::statistic_logging::configure;
}
