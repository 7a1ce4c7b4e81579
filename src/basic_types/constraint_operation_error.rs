use thiserror::Error;

/// Errors related to adding clauses to the solver.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("Adding the clause failed because the solver is in an infeasible state")]
    InfeasibleState,
    #[error("Adding the clause makes the formula unsatisfiable at the root")]
    InfeasibleClause,
}
