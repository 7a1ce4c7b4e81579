use super::Clause;
use crate::basic_types::ClauseReference;
use crate::basic_types::KeyedVec;
use crate::engine::variables::Literal;

/// Owns every clause of the solver. Clauses are never freed here; reclaiming learned clauses is
/// left to a reduction policy that reads the `resolved` stamps.
#[derive(Default, Debug)]
pub(crate) struct ClauseAllocator {
    allocated_clauses: KeyedVec<ClauseReference, Clause>,
    num_learned_clauses: usize,
}

impl ClauseAllocator {
    pub(crate) fn create_original_clause(&mut self, literals: Vec<Literal>) -> ClauseReference {
        self.allocated_clauses.push(Clause::new_original(literals))
    }

    /// Takes ownership of the learned literals; `is_extended` decides whether the clause
    /// participates in activity stamping.
    pub(crate) fn create_learned_clause(
        &mut self,
        literals: Vec<Literal>,
        glue: u32,
        is_extended: bool,
    ) -> ClauseReference {
        self.num_learned_clauses += 1;
        self.allocated_clauses
            .push(Clause::new_learned(literals, glue, is_extended))
    }

    pub(crate) fn num_clauses(&self) -> usize {
        self.allocated_clauses.len()
    }

    pub(crate) fn num_learned_clauses(&self) -> usize {
        self.num_learned_clauses
    }

    #[cfg(test)]
    pub(crate) fn references(&self) -> impl Iterator<Item = ClauseReference> {
        self.allocated_clauses.keys()
    }
}

impl std::ops::Index<ClauseReference> for ClauseAllocator {
    type Output = Clause;
    fn index(&self, clause_reference: ClauseReference) -> &Clause {
        &self.allocated_clauses[clause_reference]
    }
}

impl std::ops::IndexMut<ClauseReference> for ClauseAllocator {
    fn index_mut(&mut self, clause_reference: ClauseReference) -> &mut Clause {
        &mut self.allocated_clauses[clause_reference]
    }
}
