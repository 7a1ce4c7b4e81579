mod assignments_propositional;
mod clause;
mod clause_allocator;
mod lbd_calculator;

pub(crate) use assignments_propositional::AssignmentsPropositional;
pub(crate) use clause::Clause;
pub(crate) use clause_allocator::ClauseAllocator;
pub(crate) use lbd_calculator::calculate_lbd;
