use crate::basic_types::SolverOptionsError;
use crate::branching::BumpSort;
#[cfg(doc)]
use crate::ClauseLearningSolver;

/// Options which determine how the [`ClauseLearningSolver`] analyses conflicts and maintains its
/// heuristics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Whether learned clauses are shrunk by recursive minimisation.
    pub minimise: bool,
    /// The recursion depth after which minimisation gives up on a literal.
    pub minimise_depth: usize,
    /// Every conflict the score increment is divided by this factor, which must lie in (0, 1).
    pub decay: f64,
    /// Learned clauses with at most this many literals are never activity stamped.
    pub keep_size: usize,
    /// Learned clauses with at most this glue are never activity stamped.
    pub keep_glue: u32,
    /// The order in which seen variables are bumped.
    pub bump_sort: BumpSort,
    /// Weight of a new glue value in the fast moving average.
    pub ema_glue_fast: f64,
    /// Weight of a new glue value in the slow moving average.
    pub ema_glue_slow: f64,
    /// Weight of a new backjump level in its moving average.
    pub ema_jump: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            minimise: true,
            minimise_depth: 1000,
            decay: 0.95,
            keep_size: 3,
            keep_glue: 2,
            bump_sort: BumpSort::default(),
            ema_glue_fast: 3e-2,
            ema_glue_slow: 1e-5,
            ema_jump: 1e-6,
        }
    }
}

impl SolverOptions {
    pub fn validate(&self) -> Result<(), SolverOptionsError> {
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(SolverOptionsError::InvalidDecay(self.decay));
        }

        [self.ema_glue_fast, self.ema_glue_slow, self.ema_jump]
            .into_iter()
            .find(|weight| !(*weight > 0.0 && *weight <= 1.0))
            .map_or(Ok(()), |weight| {
                Err(SolverOptionsError::InvalidEmaWeight(weight))
            })
    }

    /// Whether a learned clause of this size and glue takes part in activity stamping. All other
    /// learned clauses are kept regardless of activity.
    pub(crate) fn is_stamp_eligible(&self, size: usize, glue: u32) -> bool {
        size > self.keep_size && glue > self.keep_glue
    }
}

#[cfg(test)]
mod tests {
    use super::SolverOptions;
    use crate::basic_types::SolverOptionsError;

    #[test]
    fn default_options_are_valid() {
        assert_eq!(SolverOptions::default().validate(), Ok(()));
    }

    #[test]
    fn decay_must_be_strictly_between_zero_and_one() {
        for decay in [0.0, 1.0, -0.5, f64::NAN] {
            let options = SolverOptions {
                decay,
                ..Default::default()
            };
            assert!(matches!(
                options.validate(),
                Err(SolverOptionsError::InvalidDecay(_))
            ));
        }
    }

    #[test]
    fn moving_average_weights_are_checked() {
        let options = SolverOptions {
            ema_glue_slow: 0.0,
            ..Default::default()
        };

        assert_eq!(
            options.validate(),
            Err(SolverOptionsError::InvalidEmaWeight(0.0))
        );
    }

    #[test]
    fn only_long_high_glue_clauses_are_stamp_eligible() {
        let options = SolverOptions::default();

        assert!(options.is_stamp_eligible(4, 3));
        assert!(!options.is_stamp_eligible(3, 10));
        assert!(!options.is_stamp_eligible(10, 2));
    }
}
