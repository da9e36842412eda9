use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Region struct, one validated track on the sensor Y axis.
///
/// Rows `offset..offset + size` are read out and combined `binning` rows
/// at a time. A validated region always has `size % binning == 0`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub offset: usize,
    pub size: usize,
    pub binning: usize,
}

impl Region {
    pub fn new(offset: usize, size: usize, binning: usize) -> Self {
        Region {
            offset,
            size,
            binning,
        }
    }

    ///
    /// Last row included in the region (inclusive)
    ///
    pub fn end(&self) -> usize {
        (self.offset + self.size).saturating_sub(1)
    }

    ///
    /// First row past the region, i.e. the earliest start for the next track
    ///
    pub fn next_free_row(&self) -> usize {
        self.offset + self.size
    }

    /// Number of output rows after binning.
    pub fn data_height(&self) -> usize {
        match self.binning {
            0 => 0,
            bin => self.size / bin,
        }
    }

    /// Check whether two regions share any row.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.offset < other.next_free_row() && other.offset < self.next_free_row()
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}/{}", self.offset, self.end(), self.binning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(Region::new(0, 10, 10), 9, 1)]
    #[case(Region::new(5, 8, 4), 12, 2)]
    #[case(Region::new(20, 1, 1), 20, 1)]
    fn test_end_and_data_height(#[case] region: Region, #[case] end: usize, #[case] height: usize) {
        assert_eq!(region.end(), end);
        assert_eq!(region.data_height(), height);
    }

    #[rstest]
    fn test_overlaps() {
        let a = Region::new(0, 10, 1);
        assert!(a.overlaps(&Region::new(9, 2, 1)));
        assert!(!a.overlaps(&Region::new(10, 2, 1)));
        assert!(Region::new(3, 1, 1).overlaps(&a));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Region::new(5, 8, 4).to_string(), "5..=12/4");
    }
}
