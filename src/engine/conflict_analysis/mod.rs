//! First unique implication point (1UIP) clause learning together with the bookkeeping it feeds:
//! per-level records for minimisation, clause activity stamps and the variable bumping order.
mod analysis_outcome;
mod clause_activity;
mod conflict_analysis_context;
mod decision_levels;
mod resolution_conflict_analyser;

pub use analysis_outcome::AnalysisOutcome;
pub(crate) use clause_activity::ClauseActivityTracker;
pub(crate) use conflict_analysis_context::ConflictAnalysisContext;
pub(crate) use decision_levels::DecisionLevels;
pub(crate) use resolution_conflict_analyser::ResolutionConflictAnalyser;
pub(crate) use resolution_conflict_analyser::VariableFlags;
