use log::debug;

use crate::basic_types::KeyedVec;
use crate::engine::variables::PropositionalVariable;
use crate::learnsat_assert_simple;

/// Scores and the increment are rescaled as soon as either exceeds this value.
pub(crate) const MAX_SCORE: f64 = 1e100;

/// Activity scores of the variables. A bump adds the current increment to a score and every
/// conflict grows the increment by dividing it by the decay factor, so recent bumps weigh more.
///
/// Whenever the increment or a score passes [`MAX_SCORE`], every score and the increment are divided
/// by the increment. This is a division by a common positive value and thus keeps the relative
/// order of all scores.
#[derive(Debug)]
pub(crate) struct VariableScores {
    scores: KeyedVec<PropositionalVariable, f64>,
    increment: f64,
    decay_factor: f64,
    num_rescales: u64,
}

impl VariableScores {
    pub(crate) fn new(decay_factor: f64) -> Self {
        learnsat_assert_simple!(decay_factor > 0.0 && decay_factor < 1.0);
        VariableScores {
            scores: KeyedVec::default(),
            increment: 1.0,
            decay_factor,
            num_rescales: 0,
        }
    }

    pub(crate) fn grow(&mut self, variable: PropositionalVariable) {
        self.scores.accomodate(variable, 0.0);
    }

    pub(crate) fn score(&self, variable: PropositionalVariable) -> f64 {
        self.scores[variable]
    }

    pub(crate) fn increment(&self) -> f64 {
        self.increment
    }

    pub(crate) fn num_rescales(&self) -> u64 {
        self.num_rescales
    }

    pub(crate) fn bump(&mut self, variable: PropositionalVariable) {
        self.scores[variable] += self.increment;
        if self.scores[variable] > MAX_SCORE {
            self.rescale();
        }
    }

    /// Called once per conflict, after every bump of that conflict.
    pub(crate) fn decay(&mut self) {
        self.increment /= self.decay_factor;
        if self.increment > MAX_SCORE {
            self.rescale();
        }
    }

    fn rescale(&mut self) {
        let divisor = self.increment;
        self.scores.iter_mut().for_each(|score| *score /= divisor);
        self.increment = 1.0;

        self.num_rescales += 1;
        debug!("rescore {}", self.num_rescales);
    }
}
