//! Compass headings and their rotation table.

/// Absolute compass direction a player faces.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    #[strum(serialize = "N")]
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    North,
    #[strum(serialize = "E")]
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    East,
    #[strum(serialize = "S")]
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    South,
    #[strum(serialize = "W")]
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    West,
}

/// Neighbours of one heading in the rotation group.
struct Rotation {
    opposite: Heading,
    left: Heading,
    right: Heading,
    delta: (i32, i32),
}

/// Indexed by [`Heading::index`].
const ROTATIONS: [Rotation; 4] = [
    Rotation {
        opposite: Heading::South,
        left: Heading::West,
        right: Heading::East,
        delta: (0, -1),
    },
    Rotation {
        opposite: Heading::West,
        left: Heading::North,
        right: Heading::South,
        delta: (1, 0),
    },
    Rotation {
        opposite: Heading::North,
        left: Heading::East,
        right: Heading::West,
        delta: (0, 1),
    },
    Rotation {
        opposite: Heading::East,
        left: Heading::South,
        right: Heading::North,
        delta: (-1, 0),
    },
];

impl Heading {
    /// Scan order: North, East, South, West.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub const fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    fn rotation(self) -> &'static Rotation {
        &ROTATIONS[self.index()]
    }

    /// The heading a shooter must face to hit someone looking this way from
    /// the front.
    pub fn opposite(self) -> Heading {
        self.rotation().opposite
    }

    pub fn left(self) -> Heading {
        self.rotation().left
    }

    pub fn right(self) -> Heading {
        self.rotation().right
    }

    /// Unit step `(dx, dy)` along this heading.
    pub fn delta(self) -> (i32, i32) {
        self.rotation().delta
    }

    /// Absolute heading for a direction relative to this one.
    pub fn towards(self, bearing: Bearing) -> Heading {
        match bearing {
            Bearing::Forward => self,
            Bearing::Left => self.left(),
            Bearing::Right => self.right(),
            Bearing::Back => self.opposite(),
        }
    }
}

/// Direction relative to a player's own heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Bearing {
    Forward,
    Left,
    Right,
    Back,
}
