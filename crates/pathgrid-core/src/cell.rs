//! The [`CellStatus`] type: the role a single board cell plays.

/// Occupancy role of a board cell.
///
/// The numeric [`code`](CellStatus::code) is the value written into an
/// [`OccupancyMatrix`](crate::OccupancyMatrix).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    #[default]
    Free,
    Wall,
    Start,
    End,
}

impl CellStatus {
    /// Matrix code: Free = 0, Wall = 1, Start = 2, End = 3.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::End => 3,
        }
    }

    /// Reverse of [`code`](CellStatus::code).
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Free),
            1 => Some(Self::Wall),
            2 => Some(Self::Start),
            3 => Some(Self::End),
            _ => None,
        }
    }

    /// Start and End cells are protected from wall edits and bulk clears.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}
