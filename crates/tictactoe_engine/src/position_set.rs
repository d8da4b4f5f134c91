//! Small ordered set of board positions.

use crate::position::Position;

/// Set of positions stored as a 9-bit mask.
///
/// Iteration is always in ascending index order, which keeps every
/// "first match" decision in the engine deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet(u16);

impl PositionSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Builds a set from a fixed list of positions.
    pub const fn of(positions: &[Position]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < positions.len() {
            bits |= 1 << positions[i] as u16;
            i += 1;
        }
        Self(bits)
    }

    /// Adds a position.
    pub fn insert(&mut self, position: Position) {
        self.0 |= 1 << position.to_index();
    }

    /// True if `position` is in the set.
    pub fn contains(self, position: Position) -> bool {
        self.0 & (1 << position.to_index()) != 0
    }

    /// Number of positions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if the set holds no positions.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Positions in `self` that are not in `other`.
    pub fn difference(self, other: PositionSet) -> PositionSet {
        Self(self.0 & !other.0)
    }

    /// True if every position in `self` is also in `other`.
    pub fn is_subset(self, other: PositionSet) -> bool {
        self.difference(other).is_empty()
    }

    /// Lowest-indexed position, if any.
    pub fn first(self) -> Option<Position> {
        self.iter().next()
    }

    /// Positions in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |pos| self.contains(*pos))
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}
