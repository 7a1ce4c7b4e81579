//! Clausal proof output. Every clause the solver derives is written as a DRAT addition line, so an
//! unsatisfiability claim can be verified by an external checker.
mod logging;

pub use logging::Proof;
