use serde::{Deserialize, Serialize};

/// Opaque positional id into the shared corpus snapshot.
///
/// The vector index, the lexical index, and the document store all index
/// the same corpus in the same order, so one position addresses the same
/// chunk in all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub usize);

impl CandidateId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for CandidateId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
