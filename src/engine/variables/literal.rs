use std::ops::Not;

use super::PropositionalVariable;
use crate::basic_types::StorageKey;

/// A variable or its negation, packed as `2 * variable + (negative as u32)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    code: u32,
}

impl Literal {
    pub fn new(propositional_variable: PropositionalVariable, is_positive: bool) -> Literal {
        Literal {
            code: propositional_variable.get_index() * 2 + (!is_positive as u32),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.code & 1 == 0
    }

    pub fn is_negative(&self) -> bool {
        !self.is_positive()
    }

    pub fn get_propositional_variable(&self) -> PropositionalVariable {
        PropositionalVariable::new(self.code >> 1)
    }

    pub fn to_u32(&self) -> u32 {
        self.code
    }

    /// The signed DIMACS representation, e.g. `-3` for the negation of the third variable.
    pub fn to_dimacs(&self) -> i64 {
        let index = self.get_propositional_variable().get_index() as i64 + 1;
        if self.is_positive() {
            index
        } else {
            -index
        }
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            code: self.code ^ 1,
        }
    }
}

impl StorageKey for Literal {
    fn index(&self) -> usize {
        self.code as usize
    }

    fn create_from_index(index: usize) -> Self {
        Literal { code: index as u32 }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

impl std::fmt::Debug for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}
