pub(crate) mod clause_learning_solver;
pub(crate) mod conflict_analysis;
pub(crate) mod minimisation;
pub(crate) mod sat;
pub(crate) mod test_helper;
pub(crate) mod variables;

mod counters;
mod debug_helper;
mod solver_options;
mod solver_state;

pub use clause_learning_solver::ClauseLearningSolver;
pub use conflict_analysis::AnalysisOutcome;
pub(crate) use counters::Counters;
pub(crate) use debug_helper::DebugHelper;
pub use solver_options::SolverOptions;
pub(crate) use solver_state::SolverState;
