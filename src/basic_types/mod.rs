mod clause_reference;
mod constraint_operation_error;
mod keyed_vec;
mod moving_averages;
mod solver_options_error;
pub(crate) mod statistic_logging;

pub use clause_reference::ClauseReference;
pub use constraint_operation_error::ConstraintOperationError;
pub(crate) use keyed_vec::KeyedVec;
pub(crate) use keyed_vec::StorageKey;
pub(crate) use moving_averages::CumulativeMovingAverage;
pub(crate) use moving_averages::ExponentialMovingAverage;
pub use solver_options_error::SolverOptionsError;
