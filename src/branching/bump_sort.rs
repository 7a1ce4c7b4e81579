use std::fmt::Display;

use super::VariableScores;
use super::Vmtf;
use crate::basic_types::SolverOptionsError;
use crate::engine::sat::AssignmentsPropositional;
use crate::engine::variables::Literal;

/// The order in which the variables seen during conflict analysis are bumped.
///
/// Since every bump moves a variable to the front of the queue, the variable bumped last ends up
/// frontmost. The order therefore decides which of the variables of a conflict are decided on
/// first afterwards. Bumping in the order of the previous bump stamps keeps the relative queue
/// order of the seen variables; adding the trail position focuses on recently assigned
/// variables, which on some instances greatly reduces the number of propagations per second.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BumpSort {
    /// Bump in the order in which the variables were seen.
    Unsorted,
    /// By ascending previous bump stamp.
    BumpedEarlier,
    /// By ascending trail position.
    TrailSmaller,
    /// By ascending sum of the previous bump stamp and the trail position.
    #[default]
    BumpedPlusTrail,
    /// By ascending score.
    ScoreSmaller,
    /// In the reverse of the order in which the variables were seen.
    Reverse,
}

impl TryFrom<u8> for BumpSort {
    type Error = SolverOptionsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BumpSort::Unsorted),
            1 => Ok(BumpSort::BumpedEarlier),
            2 => Ok(BumpSort::TrailSmaller),
            3 => Ok(BumpSort::BumpedPlusTrail),
            4 => Ok(BumpSort::ScoreSmaller),
            5 => Ok(BumpSort::Reverse),
            _ => Err(SolverOptionsError::InvalidBumpSort(value)),
        }
    }
}

impl From<BumpSort> for u8 {
    fn from(value: BumpSort) -> Self {
        match value {
            BumpSort::Unsorted => 0,
            BumpSort::BumpedEarlier => 1,
            BumpSort::TrailSmaller => 2,
            BumpSort::BumpedPlusTrail => 3,
            BumpSort::ScoreSmaller => 4,
            BumpSort::Reverse => 5,
        }
    }
}

impl Display for BumpSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BumpSort::Unsorted => write!(f, "unsorted"),
            BumpSort::BumpedEarlier => write!(f, "bumped-earlier"),
            BumpSort::TrailSmaller => write!(f, "trail-smaller"),
            BumpSort::BumpedPlusTrail => write!(f, "bumped-plus-trail"),
            BumpSort::ScoreSmaller => write!(f, "score-smaller"),
            BumpSort::Reverse => write!(f, "reverse"),
        }
    }
}

/// Reorder the seen literals according to `strategy` before they are bumped in that order.
pub(crate) fn sort_seen(
    seen: &mut [Literal],
    strategy: BumpSort,
    vmtf: &Vmtf,
    scores: &VariableScores,
    assignments: &AssignmentsPropositional,
) {
    match strategy {
        BumpSort::Unsorted => {}
        BumpSort::BumpedEarlier => {
            seen.sort_by_key(|literal| vmtf.bumped(literal.get_propositional_variable()))
        }
        BumpSort::TrailSmaller => seen.sort_by_key(|literal| {
            assignments.get_variable_trail_position(literal.get_propositional_variable())
        }),
        BumpSort::BumpedPlusTrail => seen.sort_by_key(|literal| {
            let variable = literal.get_propositional_variable();
            vmtf.bumped(variable) + assignments.get_variable_trail_position(variable) as u64
        }),
        BumpSort::ScoreSmaller => seen.sort_by(|lhs, rhs| {
            scores
                .score(lhs.get_propositional_variable())
                .total_cmp(&scores.score(rhs.get_propositional_variable()))
        }),
        BumpSort::Reverse => seen.reverse(),
    }
}
