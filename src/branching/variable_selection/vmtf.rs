use log::trace;

use crate::basic_types::KeyedVec;
use crate::branching::VariableScores;
use crate::engine::sat::AssignmentsPropositional;
use crate::engine::variables::PropositionalVariable;

#[derive(Debug, Clone, Copy, Default)]
struct QueueLinks {
    /// Towards less recently bumped variables.
    prev: Option<PropositionalVariable>,
    /// Towards more recently bumped variables.
    next: Option<PropositionalVariable>,
}

/// The variable move-to-front (VMTF) decision queue.
///
/// The queue is a doubly linked list over the variables, stored as links in an arena indexed by
/// the variable. Its front (`last`) is the variable which was bumped most recently. Bumping a
/// variable unlinks it and relinks it at the front in constant time.
///
/// The `unassigned` cursor makes decisions cheap: every variable in front of the cursor is
/// assigned, so the next decision is found by walking from the cursor towards the back.
#[derive(Debug, Default)]
pub(crate) struct Vmtf {
    links: KeyedVec<PropositionalVariable, QueueLinks>,
    /// Time stamp of the last move to the front, strictly increasing over all variables.
    bumped: KeyedVec<PropositionalVariable, u64>,
    last: Option<PropositionalVariable>,
    unassigned: Option<PropositionalVariable>,
    num_bumps: u64,
}

impl Vmtf {
    /// Register a new (unassigned) variable and put it at the front of the queue.
    pub(crate) fn grow(&mut self, variable: PropositionalVariable) {
        self.links.accomodate(variable, QueueLinks::default());
        self.bumped.accomodate(variable, 0);

        self.enqueue(variable);
        self.num_bumps += 1;
        self.bumped[variable] = self.num_bumps;
        self.unassigned = Some(variable);
    }

    /// Whether the variable takes part in the heuristic. Only the front of the queue has no
    /// forward link while still being queued.
    pub(crate) fn contains(&self, variable: PropositionalVariable) -> bool {
        self.links[variable].next.is_some() || self.last == Some(variable)
    }

    /// Permanently take a variable out of the queue; it is neither bumped nor decided afterwards.
    pub(crate) fn remove(&mut self, variable: PropositionalVariable) {
        if !self.contains(variable) {
            return;
        }
        self.move_cursor_away_from(variable);
        self.dequeue(variable);
    }

    /// Move the variable to the front of the queue and add to its score.
    ///
    /// Bumping an unassigned variable makes it the next decision candidate. Bumping an assigned
    /// one leaves the cursor at (or behind) its previous position.
    pub(crate) fn bump(
        &mut self,
        variable: PropositionalVariable,
        is_assigned: bool,
        scores: &mut VariableScores,
    ) {
        if !self.contains(variable) {
            return;
        }

        self.move_cursor_away_from(variable);
        if self.last != Some(variable) {
            self.dequeue(variable);
            self.enqueue(variable);
        }
        self.num_bumps += 1;
        self.bumped[variable] = self.num_bumps;

        scores.bump(variable);

        if !is_assigned {
            self.unassigned = Some(variable);
        }
        trace!("VMTF bumped and moved to front {variable}");
    }

    /// Keep the cursor invariant when backtracking unassigns `variable`.
    pub(crate) fn on_unassign(&mut self, variable: PropositionalVariable) {
        if !self.contains(variable) {
            return;
        }
        let is_more_recent = self
            .unassigned
            .map_or(true, |cursor| self.bumped[variable] > self.bumped[cursor]);
        if is_more_recent {
            self.unassigned = Some(variable);
        }
    }

    /// The most recently bumped unassigned variable, if any. The search result is cached in the
    /// cursor.
    pub(crate) fn next_unassigned(
        &mut self,
        assignments: &AssignmentsPropositional,
    ) -> Option<PropositionalVariable> {
        let mut candidate = self.unassigned;
        while let Some(variable) = candidate {
            if !assignments.is_variable_assigned(variable) {
                break;
            }
            candidate = self.links[variable].prev;
        }
        self.unassigned = candidate;
        candidate
    }

    pub(crate) fn bumped(&self, variable: PropositionalVariable) -> u64 {
        self.bumped[variable]
    }

    pub(crate) fn num_bumps(&self) -> u64 {
        self.num_bumps
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> Option<PropositionalVariable> {
        self.unassigned
    }

    /// Whether every variable in front of the cursor is assigned.
    pub(crate) fn debug_check_cursor(&self, assignments: &AssignmentsPropositional) -> bool {
        self.iter_from_front()
            .take_while(|&variable| Some(variable) != self.unassigned)
            .all(|variable| assignments.is_variable_assigned(variable))
    }

    /// The queued variables, starting at the front (most recently bumped).
    pub(crate) fn iter_from_front(&self) -> impl Iterator<Item = PropositionalVariable> + '_ {
        std::iter::successors(self.last, move |&variable| self.links[variable].prev)
    }

    fn move_cursor_away_from(&mut self, variable: PropositionalVariable) {
        if self.unassigned == Some(variable) {
            let links = self.links[variable];
            self.unassigned = links.prev.or(links.next);
        }
    }

    fn dequeue(&mut self, variable: PropositionalVariable) {
        let QueueLinks { prev, next } = self.links[variable];
        if let Some(prev) = prev {
            self.links[prev].next = next;
        }
        match next {
            Some(next) => self.links[next].prev = prev,
            None => self.last = prev,
        }
        self.links[variable] = QueueLinks::default();
    }

    fn enqueue(&mut self, variable: PropositionalVariable) {
        self.links[variable] = QueueLinks {
            prev: self.last,
            next: None,
        };
        if let Some(last) = self.last {
            self.links[last].next = Some(variable);
        }
        self.last = Some(variable);
    }
}
