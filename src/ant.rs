//! Ant data and the four-way heading it moves in.

/// Direction an ant is facing.
///
/// The four variants form a fixed cyclic order (Up=0, Right=1, Down=2,
/// Left=3). Turning right advances the index by 1 mod 4, turning left by
/// 3 mod 4. Coordinates follow the screen convention: y grows downward,
/// so `Up` decrements y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Heading {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Heading {
    /// All headings in cyclic order.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Heading for a cyclic index (wraps mod 4).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Heading::Up,
            1 => Heading::Right,
            2 => Heading::Down,
            _ => Heading::Left,
        }
    }

    /// Position of this heading in the cyclic order (0..4).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Heading after a clockwise quarter turn.
    #[inline]
    pub fn turned_right(self) -> Self {
        Self::from_index(self as u8 + 1)
    }

    /// Heading after a counter-clockwise quarter turn.
    #[inline]
    pub fn turned_left(self) -> Self {
        Self::from_index(self as u8 + 3)
    }

    /// Unit move offset `(dx, dy)` for this heading.
    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Heading::Up => (0, -1),
            Heading::Right => (1, 0),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
        }
    }
}

/// A single ant: grid position plus facing direction.
///
/// Pure data. The turn/flip/move rule lives in
/// [`Simulation`](crate::simulation::Simulation); independent ants may
/// occupy the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ant {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

impl Ant {
    /// Create an ant at the given cell.
    pub fn new(x: i64, y: i64, heading: Heading) -> Self {
        Self { x, y, heading }
    }
}
