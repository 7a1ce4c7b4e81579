use crate::basic_types::KeyedVec;

/// What conflict analysis has seen of a single decision level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LevelRecord {
    /// The number of seen variables assigned at this level.
    pub(crate) seen_count: usize,
    /// The smallest trail position among the seen variables of this level.
    pub(crate) min_trail_position: usize,
}

impl Default for LevelRecord {
    fn default() -> Self {
        LevelRecord {
            seen_count: 0,
            min_trail_position: usize::MAX,
        }
    }
}

/// Per-decision-level bookkeeping of conflict analysis, indexed by the level. Records are created
/// the first time a level is touched; only the records of levels which contributed to a conflict
/// are ever dirty, and those are reset once the conflict has been handled.
#[derive(Debug, Default)]
pub(crate) struct DecisionLevels {
    records: KeyedVec<usize, LevelRecord>,
}

impl DecisionLevels {
    pub(crate) fn get(&self, level: usize) -> LevelRecord {
        if level < self.records.len() {
            self.records[level]
        } else {
            LevelRecord::default()
        }
    }

    pub(crate) fn get_mut_or_create(&mut self, level: usize) -> &mut LevelRecord {
        self.records.accomodate(level, LevelRecord::default());
        &mut self.records[level]
    }

    pub(crate) fn reset(&mut self, level: usize) {
        if level < self.records.len() {
            self.records[level] = LevelRecord::default();
        }
    }

    /// Whether every record is in its reset state.
    pub(crate) fn is_clear(&self) -> bool {
        self.records
            .iter()
            .all(|record| *record == LevelRecord::default())
    }
}

#[cfg(test)]
mod tests {
    use super::DecisionLevels;
    use super::LevelRecord;

    #[test]
    fn untouched_levels_read_as_reset() {
        let levels = DecisionLevels::default();

        assert_eq!(levels.get(12), LevelRecord::default());
        assert_eq!(levels.get(12).min_trail_position, usize::MAX);
    }

    #[test]
    fn reset_restores_the_initial_record() {
        let mut levels = DecisionLevels::default();
        let record = levels.get_mut_or_create(3);
        record.seen_count = 2;
        record.min_trail_position = 7;
        assert!(!levels.is_clear());

        levels.reset(3);

        assert!(levels.is_clear());
        assert_eq!(levels.get(3), LevelRecord::default());
    }
}
