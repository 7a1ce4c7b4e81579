use crate::basic_types::ClauseReference;

#[derive(Default, Debug, Clone, Copy)]
enum SolverStateInternal {
    #[default]
    Ready,
    Conflict {
        conflict: ClauseReference,
    },
    /// The empty clause has been learned. This state is never left.
    Infeasible,
}

/// Tracks whether there is a pending conflict, whether the formula is known to be unsatisfiable
/// and whether a report is owed once the propagation of a learned unit completes.
#[derive(Default, Debug, Clone, Copy)]
pub(crate) struct SolverState {
    internal_state: SolverStateInternal,
    iterating: bool,
}

impl SolverState {
    pub(crate) fn is_ready(&self) -> bool {
        matches!(self.internal_state, SolverStateInternal::Ready)
    }

    pub(crate) fn conflicting(&self) -> bool {
        matches!(self.internal_state, SolverStateInternal::Conflict { .. })
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        matches!(self.internal_state, SolverStateInternal::Infeasible)
    }

    pub(crate) fn get_conflict(&self) -> Option<ClauseReference> {
        match self.internal_state {
            SolverStateInternal::Conflict { conflict } => Some(conflict),
            _ => None,
        }
    }

    pub(crate) fn is_iterating(&self) -> bool {
        self.iterating
    }

    pub(crate) fn declare_ready(&mut self) {
        self.internal_state = SolverStateInternal::Ready;
    }

    pub(crate) fn declare_conflict(&mut self, conflict: ClauseReference) {
        self.internal_state = SolverStateInternal::Conflict { conflict };
    }

    pub(crate) fn declare_infeasible(&mut self) {
        self.internal_state = SolverStateInternal::Infeasible;
    }

    pub(crate) fn declare_iterating(&mut self) {
        self.iterating = true;
    }

    pub(crate) fn stop_iterating(&mut self) {
        self.iterating = false;
    }
}
