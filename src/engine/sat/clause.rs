use bitfield::bitfield;

use crate::engine::variables::Literal;
use crate::learnsat_assert_simple;

/// Glue values are stored in 30 bits; larger values carry no extra information.
const MAX_STORED_GLUE: u32 = (1 << 30) - 1;

bitfield! {
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct ClauseHeader(u32);
    impl Debug;
    pub is_learned, set_is_learned: 0;
    pub is_extended, set_is_extended: 1;
    pub u32, glue, set_glue: 31, 2;
}

/// A clause owned by the [`super::ClauseAllocator`].
///
/// Only learned clauses that are both long and of high glue are "extended"; for those the
/// `resolved` stamp records when the clause last took part in conflict analysis. For every other
/// clause the stamp is never written.
#[allow(clippy::len_without_is_empty)] // The clause will always have at least one literal.
#[derive(Debug)]
pub(crate) struct Clause {
    literals: Vec<Literal>,
    header: ClauseHeader,
    resolved: u64,
}

impl Clause {
    pub(crate) fn new_original(literals: Vec<Literal>) -> Clause {
        learnsat_assert_simple!(!literals.is_empty());

        let mut header = ClauseHeader(0);
        header.set_glue((literals.len() as u32).min(MAX_STORED_GLUE)); // pessimistic glue
        Clause {
            literals,
            header,
            resolved: 0,
        }
    }

    pub(crate) fn new_learned(literals: Vec<Literal>, glue: u32, is_extended: bool) -> Clause {
        learnsat_assert_simple!(literals.len() >= 2);

        let mut header = ClauseHeader(0);
        header.set_is_learned(true);
        header.set_is_extended(is_extended);
        header.set_glue(glue.min(MAX_STORED_GLUE));
        Clause {
            literals,
            header,
            resolved: 0,
        }
    }
}

impl Clause {
    pub(crate) fn len(&self) -> usize {
        self.literals.len()
    }

    pub(crate) fn is_learned(&self) -> bool {
        self.header.is_learned()
    }

    pub(crate) fn is_extended(&self) -> bool {
        self.header.is_extended()
    }

    pub(crate) fn glue(&self) -> u32 {
        self.header.glue()
    }

    pub(crate) fn resolved(&self) -> u64 {
        learnsat_assert_simple!(self.is_extended());
        self.resolved
    }

    pub(crate) fn set_resolved(&mut self, stamp: u64) {
        learnsat_assert_simple!(self.is_extended());
        self.resolved = stamp;
    }

    pub(crate) fn get_literal_slice(&self) -> &[Literal] {
        &self.literals
    }
}

impl std::ops::Index<usize> for Clause {
    type Output = Literal;
    fn index(&self, index: usize) -> &Literal {
        self.literals.index(index)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clause_string = &self
            .literals
            .iter()
            .fold(String::new(), |acc, lit| format!("{acc}{lit},"));

        write!(
            f,
            "({clause_string})[learned:{}, glue:{}]",
            self.is_learned(),
            self.glue()
        )
    }
}
