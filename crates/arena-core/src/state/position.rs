use core::fmt;

use super::Heading;

/// Grid coordinate. `y` grows southwards, so North is `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `distance` steps away along `heading`.
    pub fn step(self, heading: Heading, distance: u32) -> Self {
        let (dx, dy) = heading.delta();
        let distance = i32::try_from(distance).unwrap_or(i32::MAX);
        Self::new(
            self.x.saturating_add(dx.saturating_mul(distance)),
            self.y.saturating_add(dy.saturating_mul(distance)),
        )
    }

    /// True when both cells share a row or column and lie at most `range`
    /// steps apart along it.
    pub fn in_line_within(self, other: Self, range: u32) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 0 && dy <= range) || (dy == 0 && dx <= range)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Arena extent. Valid coordinates are `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaDimensions {
    pub width: u32,
    pub height: u32,
}

impl ArenaDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// True when the next cell along `heading` is off the grid.
    pub fn faces_wall(&self, position: Position, heading: Heading) -> bool {
        !self.contains(position.step(heading, 1))
    }
}

impl fmt::Display for ArenaDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
