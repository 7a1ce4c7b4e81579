//! Decision heuristics maintained by conflict analysis: the VMTF queue from which decisions are
//! taken, the additive variable scores and the order in which the variables seen in a conflict
//! are bumped.
mod bump_sort;
mod variable_scores;
mod variable_selection;

pub use bump_sort::BumpSort;
pub(crate) use bump_sort::sort_seen;
pub(crate) use variable_scores::VariableScores;
pub(crate) use variable_selection::Vmtf;
