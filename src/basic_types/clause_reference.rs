use crate::basic_types::StorageKey;

/// A handle to a clause owned by the [`crate::engine::sat::ClauseAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseReference {
    id: u32,
}

impl ClauseReference {
    pub(crate) fn new(id: u32) -> ClauseReference {
        ClauseReference { id }
    }

    pub fn get_id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for ClauseReference {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ClauseReference::new(index as u32)
    }
}

impl std::fmt::Display for ClauseReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}
