use std::time::Duration;

use crate::basic_types::statistic_logging::log_statistic;
use crate::basic_types::CumulativeMovingAverage;
use crate::basic_types::ExponentialMovingAverage;
use crate::engine::SolverOptions;

/// Statistics of the conflict analysis. Apart from the glue averages, which are read by restart
/// policies, none of these influence the search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Counters {
    pub(crate) num_conflicts: u64,
    /// Units learned through any path, i.e. variables fixed at the root.
    pub(crate) num_fixed: u64,
    pub(crate) num_learned_units: u64,
    pub(crate) num_learned_binaries: u64,
    pub(crate) num_minimised_literals: u64,
    pub(crate) fast_glue: ExponentialMovingAverage,
    pub(crate) slow_glue: ExponentialMovingAverage,
    pub(crate) jump: ExponentialMovingAverage,
    pub(crate) average_learned_clause_length: CumulativeMovingAverage,
    pub(crate) time_spent_in_analysis: Duration,
    pub(crate) time_spent_bumping: Duration,
}

impl Counters {
    pub(crate) fn new(options: &SolverOptions) -> Self {
        Counters {
            num_conflicts: 0,
            num_fixed: 0,
            num_learned_units: 0,
            num_learned_binaries: 0,
            num_minimised_literals: 0,
            fast_glue: ExponentialMovingAverage::new(options.ema_glue_fast),
            slow_glue: ExponentialMovingAverage::new(options.ema_glue_slow),
            jump: ExponentialMovingAverage::new(options.ema_jump),
            average_learned_clause_length: CumulativeMovingAverage::default(),
            time_spent_in_analysis: Duration::ZERO,
            time_spent_bumping: Duration::ZERO,
        }
    }

    pub(crate) fn record_glue(&mut self, glue: u32) {
        self.fast_glue.add_term(glue as f64);
        self.slow_glue.add_term(glue as f64);
    }

    pub(crate) fn log_statistics(&self) {
        log_statistic("numberOfConflicts", self.num_conflicts);
        log_statistic("numberOfFixedVariables", self.num_fixed);
        log_statistic("numberOfLearnedUnitClauses", self.num_learned_units);
        log_statistic("numberOfLearnedBinaryClauses", self.num_learned_binaries);
        log_statistic("numberOfMinimisedLiterals", self.num_minimised_literals);
        log_statistic(
            "averageLearnedClauseLength",
            self.average_learned_clause_length.value(),
        );
        log_statistic("fastGlueAverage", self.fast_glue.value());
        log_statistic("slowGlueAverage", self.slow_glue.value());
        log_statistic("backjumpLevelAverage", self.jump.value());
        log_statistic(
            "timeSpentInAnalysisInMilliseconds",
            self.time_spent_in_analysis.as_millis(),
        );
        log_statistic(
            "timeSpentBumpingInMilliseconds",
            self.time_spent_bumping.as_millis(),
        );
    }
}
