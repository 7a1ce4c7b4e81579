use crate::basic_types::ClauseReference;
use crate::engine::sat::Clause;
use crate::engine::sat::ClauseAllocator;
use crate::engine::SolverOptions;
use crate::learnsat_assert_moderate;

/// Clause activity as a move-to-front scheme: every eligible learned clause used as a reason in a
/// conflict receives a fresh `resolved` stamp. Clauses which are small or have a low glue are kept
/// anyway and are never stamped.
#[derive(Debug, Default)]
pub(crate) struct ClauseActivityTracker {
    resolved: Vec<ClauseReference>,
    num_resolved: u64,
}

impl ClauseActivityTracker {
    /// Remember `clause` for stamping if it is eligible.
    pub(crate) fn mark_resolved(
        &mut self,
        clause_reference: ClauseReference,
        clause: &Clause,
        options: &SolverOptions,
    ) {
        if !clause.is_learned() || !options.is_stamp_eligible(clause.len(), clause.glue()) {
            return;
        }
        learnsat_assert_moderate!(clause.is_extended());
        self.resolved.push(clause_reference);
    }

    /// Stamp the remembered clauses. They are sorted by their previous stamp first so their
    /// relative order is kept.
    pub(crate) fn flush(&mut self, clause_allocator: &mut ClauseAllocator) {
        self.resolved
            .sort_by_key(|&reference| clause_allocator[reference].resolved());
        for reference in self.resolved.drain(..) {
            self.num_resolved += 1;
            clause_allocator[reference].set_resolved(self.num_resolved);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub(crate) fn num_resolved(&self) -> u64 {
        self.num_resolved
    }
}
