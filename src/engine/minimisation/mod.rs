//! Shrinking of learned clauses by removing literals implied by the rest of the clause.
mod minimisation_context;
mod recursive_minimisation;

pub(crate) use minimisation_context::MinimisationContext;
pub(crate) use recursive_minimisation::RecursiveMinimiser;
