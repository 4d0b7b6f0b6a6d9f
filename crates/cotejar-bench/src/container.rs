//! The four container variants under comparison.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::hint::black_box;

/// The closed set of container kinds under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Unordered hash map.
    Hashed,
    /// Ordered tree map.
    Ordered,
    /// Loosely-typed hash table with type-erased values.
    Untyped,
    /// Ordered association list.
    AssocList,
}

impl ContainerKind {
    /// All kinds, in report order.
    pub const ALL: [ContainerKind; 4] =
        [Self::Hashed, Self::Ordered, Self::Untyped, Self::AssocList];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hashed => "HashMap",
            Self::Ordered => "BTreeMap",
            Self::Untyped => "UntypedMap",
            Self::AssocList => "SortedPairList",
        }
    }

    /// Position in `ALL`; accumulators are indexed by it.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps a bounded draw to a kind. The draw must come from
    /// `[0, ALL.len())` — the range and the array stay in lock-step.
    pub fn from_draw(draw: usize) -> ContainerKind {
        Self::ALL[draw]
    }
}

/// A container under test.
///
/// Enum dispatch, not trait objects: the match arms inline, so the
/// dispatch cost stays out of the timed loops.
pub enum Container {
    Hashed(HashMap<String, String>),
    Ordered(BTreeMap<String, String>),
    Untyped(HashMap<String, Box<dyn Any>>),
    AssocList(SortedPairs),
}

impl Container {
    /// Fresh empty container of the given kind.
    pub fn empty(kind: ContainerKind) -> Container {
        match kind {
            ContainerKind::Hashed => Self::Hashed(HashMap::new()),
            ContainerKind::Ordered => Self::Ordered(BTreeMap::new()),
            ContainerKind::Untyped => Self::Untyped(HashMap::new()),
            ContainerKind::AssocList => Self::AssocList(SortedPairs::new()),
        }
    }

    pub fn kind(&self) -> ContainerKind {
        match self {
            Self::Hashed(_) => ContainerKind::Hashed,
            Self::Ordered(_) => ContainerKind::Ordered,
            Self::Untyped(_) => ContainerKind::Untyped,
            Self::AssocList(_) => ContainerKind::AssocList,
        }
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self {
            Self::Hashed(map) => {
                map.insert(key, value);
            }
            Self::Ordered(map) => {
                map.insert(key, value);
            }
            Self::Untyped(map) => {
                map.insert(key, Box::new(value));
            }
            Self::AssocList(list) => list.insert(key, value),
        }
    }

    /// Indexed lookup. Absence is `None`, never a panic.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Self::Hashed(map) => map.get(key).map(String::as_str),
            Self::Ordered(map) => map.get(key).map(String::as_str),
            Self::Untyped(map) => map
                .get(key)
                .and_then(|value| value.downcast_ref::<String>())
                .map(String::as_str),
            Self::AssocList(list) => list.get(key),
        }
    }

    /// Forward traversal over every entry, values discarded. Returns the
    /// number of entries visited.
    pub fn traverse(&self) -> usize {
        let mut visited = 0;
        match self {
            Self::Hashed(map) => {
                for entry in map {
                    black_box(entry);
                    visited += 1;
                }
            }
            Self::Ordered(map) => {
                for entry in map {
                    black_box(entry);
                    visited += 1;
                }
            }
            Self::Untyped(map) => {
                for entry in map {
                    black_box(entry);
                    visited += 1;
                }
            }
            Self::AssocList(list) => {
                for entry in list.iter() {
                    black_box(entry);
                    visited += 1;
                }
            }
        }
        visited
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Hashed(map) => map.len(),
            Self::Ordered(map) => map.len(),
            Self::Untyped(map) => map.len(),
            Self::AssocList(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Key-sorted `(key, value)` pairs with binary-search insertion — the
/// ordered association list variant.
#[derive(Debug, Default)]
pub struct SortedPairs {
    pairs: Vec<(String, String)>,
}

impl SortedPairs {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Inserts in key order; an existing key has its value replaced.
    pub fn insert(&mut self, key: String, value: String) {
        match self.pairs.binary_search_by(|(k, _)| k.as_str().cmp(key.as_str())) {
            Ok(pos) => self.pairs[pos].1 = value,
            Err(pos) => self.pairs.insert(pos, (key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .ok()
            .map(|pos| self.pairs[pos].1.as_str())
    }

    /// Forward iteration in key order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
