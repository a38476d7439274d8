use core::fmt;

/// Size of a coordinate grid in pixels.
///
/// Handed to [`TouchRotation::apply`] this is the sensor-native grid, i.e. the
/// display size before rotation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// The grid as seen after `rotation`: width and height swap for 90° and 270°.
    pub fn rotated(self, rotation: TouchRotation) -> Self {
        if rotation.swaps_axes() {
            Self::new(self.height, self.width)
        } else {
            self
        }
    }

    fn max_x(self) -> u16 {
        self.width.saturating_sub(1)
    }

    fn max_y(self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Pins a coordinate onto the last column/row of the grid.
    pub fn clamp(self, x: u16, y: u16) -> (u16, u16) {
        (x.min(self.max_x()), y.min(self.max_y()))
    }

    /// Mirrors `x` around the vertical axis of the grid.
    pub fn mirror_x(self, x: u16) -> u16 {
        self.max_x() - x.min(self.max_x())
    }
}

/// Clockwise offset between the sensor's native orientation and the display.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchRotation {
    #[default]
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl TouchRotation {
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        use TouchRotation::*;
        match degrees {
            0 => Rotate0,
            90 => Rotate90,
            180 => Rotate180,
            270 => Rotate270,
            _ => return None,
        }
        .into()
    }

    pub fn degrees(self) -> u16 {
        match self {
            TouchRotation::Rotate0 => 0,
            TouchRotation::Rotate90 => 90,
            TouchRotation::Rotate180 => 180,
            TouchRotation::Rotate270 => 270,
        }
    }

    pub fn swaps_axes(self) -> bool {
        matches!(self, TouchRotation::Rotate90 | TouchRotation::Rotate270)
    }

    /// The rotation that undoes this one.
    ///
    /// `r.inverse().apply(x, y, dims.rotated(r))` recovers the input of
    /// `r.apply(x, y, dims)` for every point of `dims`.
    pub fn inverse(self) -> Self {
        match self {
            TouchRotation::Rotate0 => TouchRotation::Rotate0,
            TouchRotation::Rotate90 => TouchRotation::Rotate270,
            TouchRotation::Rotate180 => TouchRotation::Rotate180,
            TouchRotation::Rotate270 => TouchRotation::Rotate90,
        }
    }

    /// Maps a sensor-native point of `dims` into the rotated grid.
    ///
    /// Points outside `dims` are clamped first, so the result always lies
    /// within `dims.rotated(self)`.
    pub fn apply(self, x: u16, y: u16, dims: Dimensions) -> (u16, u16) {
        let (x, y) = dims.clamp(x, y);
        match self {
            TouchRotation::Rotate0 => (x, y),
            TouchRotation::Rotate90 => (dims.max_y() - y, x),
            TouchRotation::Rotate180 => (dims.max_x() - x, dims.max_y() - y),
            TouchRotation::Rotate270 => (y, dims.max_x() - x),
        }
    }
}

impl fmt::Display for TouchRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TouchRotation; 4] = [
        TouchRotation::Rotate0,
        TouchRotation::Rotate90,
        TouchRotation::Rotate180,
        TouchRotation::Rotate270,
    ];

    #[test]
    fn ninety_degrees_maps_onto_swapped_grid() {
        let dims = Dimensions::new(320, 240);
        assert_eq!(TouchRotation::Rotate90.apply(100, 50, dims), (189, 100));
        assert_eq!(TouchRotation::Rotate90.apply(10, 200, dims), (39, 10));
    }

    #[test]
    fn corners_follow_each_rotation() {
        let dims = Dimensions::new(320, 240);
        assert_eq!(TouchRotation::Rotate0.apply(0, 0, dims), (0, 0));
        assert_eq!(TouchRotation::Rotate90.apply(0, 0, dims), (239, 0));
        assert_eq!(TouchRotation::Rotate180.apply(0, 0, dims), (319, 239));
        assert_eq!(TouchRotation::Rotate270.apply(0, 0, dims), (0, 319));
        assert_eq!(TouchRotation::Rotate180.apply(319, 239, dims), (0, 0));
    }

    #[test]
    fn rotation_is_a_bijection_undone_by_its_inverse() {
        let dims = Dimensions::new(13, 7);
        for rotation in ALL {
            let rotated = dims.rotated(rotation);
            let mut seen = std::collections::HashSet::new();
            for x in 0..dims.width {
                for y in 0..dims.height {
                    let (rx, ry) = rotation.apply(x, y, dims);
                    assert!(rx < rotated.width && ry < rotated.height, "{rotation} ({x}, {y})");
                    assert!(seen.insert((rx, ry)), "{rotation} collides at ({rx}, {ry})");
                    assert_eq!(rotation.inverse().apply(rx, ry, rotated), (x, y));
                }
            }
            assert_eq!(seen.len(), usize::from(dims.width) * usize::from(dims.height));
        }
    }

    #[test]
    fn out_of_grid_points_are_clamped() {
        let dims = Dimensions::new(172, 320);
        assert_eq!(TouchRotation::Rotate0.apply(4095, 4095, dims), (171, 319));
        assert_eq!(TouchRotation::Rotate180.apply(500, 10, dims), (0, 309));
        assert_eq!(TouchRotation::Rotate90.apply(0, 1000, dims), (0, 0));
    }

    #[test]
    fn degenerate_grid_does_not_underflow() {
        let dims = Dimensions::new(0, 0);
        for rotation in ALL {
            assert_eq!(rotation.apply(12, 34, dims), (0, 0));
        }
    }

    #[test]
    fn degrees_round_trip() {
        for rotation in ALL {
            assert_eq!(TouchRotation::from_degrees(rotation.degrees()), Some(rotation));
        }
        assert_eq!(TouchRotation::from_degrees(45), None);
    }

    #[test]
    fn mirror_x_flips_within_grid() {
        let dims = Dimensions::new(240, 320);
        assert_eq!(dims.mirror_x(0), 239);
        assert_eq!(dims.mirror_x(239), 0);
        assert_eq!(dims.mirror_x(1000), 0);
    }
}
