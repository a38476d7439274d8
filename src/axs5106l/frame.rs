//! Decoding of the touch register block.

use core::fmt;

use heapless::Vec;

use super::registers::{FRAME_LEN, MAX_TOUCH_POINTS, SLOTS_OFFSET, SLOT_LEN, TOUCH_COUNT_OFFSET};
use super::rotation::{Dimensions, TouchRotation};

/// One finger contact, in display coordinates.
///
/// `id` tells simultaneous contacts of the same frame apart. It carries no
/// meaning across frames.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub id: u8,
    pub x: u16,
    pub y: u16,
}

impl fmt::Display for TouchPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({}, {})", self.id, self.x, self.y)
    }
}

#[cfg(feature = "embedded-graphics")]
impl From<TouchPoint> for embedded_graphics::geometry::Point {
    fn from(point: TouchPoint) -> Self {
        embedded_graphics::geometry::Point::new(i32::from(point.x), i32::from(point.y))
    }
}

pub type TouchPoints = Vec<TouchPoint, MAX_TOUCH_POINTS>;

/// A slice handed to [`RawFrame`] was not [`FRAME_LEN`] bytes long.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameLengthError {
    pub len: usize,
}

impl fmt::Display for FrameLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "touch frame is {} bytes, expected {}", self.len, FRAME_LEN)
    }
}

/// One snapshot of the touch registers, starting at
/// [`Register::TouchData`](super::registers::Register::TouchData).
///
/// Byte 1 holds the touch count. Slot `i` follows at `2 + 6 * i`:
/// `[x_hi, x_lo, y_hi, y_lo, weight, area]`, the low nibble of each `_hi`
/// byte carrying bits 11..8 of the coordinate.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame {
    bytes: [u8; FRAME_LEN],
}

impl RawFrame {
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// Touch count exactly as reported by the chip.
    pub fn reported_count(&self) -> u8 {
        self.bytes[TOUCH_COUNT_OFFSET]
    }

    /// Touch count capped at [`MAX_TOUCH_POINTS`].
    pub fn touch_count(&self) -> u8 {
        self.reported_count().min(MAX_TOUCH_POINTS as u8)
    }

    /// The chip reported more contacts than it has slots.
    pub fn is_malformed(&self) -> bool {
        usize::from(self.reported_count()) > MAX_TOUCH_POINTS
    }

    /// Unrotated 12-bit coordinates of `slot`.
    pub fn raw_point(&self, slot: usize) -> Option<(u16, u16)> {
        if slot >= MAX_TOUCH_POINTS {
            return None;
        }
        let s = &self.bytes[SLOTS_OFFSET + slot * SLOT_LEN..][..SLOT_LEN];
        let x = (u16::from(s[0] & 0x0F) << 8) | u16::from(s[1]);
        let y = (u16::from(s[2] & 0x0F) << 8) | u16::from(s[3]);
        Some((x, y))
    }
}

impl From<[u8; FRAME_LEN]> for RawFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for RawFrame {
    type Error = FrameLengthError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; FRAME_LEN] = bytes
            .try_into()
            .map_err(|_| FrameLengthError { len: bytes.len() })?;
        Ok(Self::new(bytes))
    }
}

/// Extracts the active contacts of `raw` and rotates them into the display frame.
///
/// `dims` is the sensor-native grid. Counts above [`MAX_TOUCH_POINTS`] are
/// clamped, never rejected.
pub fn decode(raw: &RawFrame, rotation: TouchRotation, dims: Dimensions) -> TouchPoints {
    decode_with(raw, |x, y| rotation.apply(x, y, dims))
}

/// Like [`decode`], with an arbitrary coordinate transform.
pub fn decode_with(raw: &RawFrame, transform: impl Fn(u16, u16) -> (u16, u16)) -> TouchPoints {
    let mut points = TouchPoints::new();

    if raw.is_malformed() {
        warn!(
            "Touch count {} exceeds {} slots, clamping",
            raw.reported_count(),
            MAX_TOUCH_POINTS
        );
    }

    for slot in 0..usize::from(raw.touch_count()) {
        let Some((raw_x, raw_y)) = raw.raw_point(slot) else {
            break;
        };
        let (x, y) = transform(raw_x, raw_y);
        trace!("Touch {}: raw ({}, {}) -> ({}, {})", slot, raw_x, raw_y, x, y);
        // capacity equals the slot count
        let _ = points.push(TouchPoint {
            id: slot as u8,
            x,
            y,
        });
    }

    points
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a frame the way the chip lays it out.
    pub(crate) fn frame(count: u8, slots: &[(u16, u16)]) -> RawFrame {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[TOUCH_COUNT_OFFSET] = count;
        for (i, &(x, y)) in slots.iter().enumerate() {
            let s = &mut bytes[SLOTS_OFFSET + i * SLOT_LEN..][..SLOT_LEN];
            // event flags in the high nibble must be masked off
            s[0] = 0x80 | (x >> 8) as u8;
            s[1] = x as u8;
            s[2] = 0x10 | (y >> 8) as u8;
            s[3] = y as u8;
            s[4] = 0x2A;
            s[5] = 0x05;
        }
        RawFrame::new(bytes)
    }

    const DIMS: Dimensions = Dimensions::new(320, 240);

    #[test]
    fn zero_count_is_not_touched() {
        let raw = frame(0, &[(100, 50), (10, 200)]);
        assert!(decode(&raw, TouchRotation::Rotate0, DIMS).is_empty());
    }

    #[test]
    fn count_selects_number_of_points() {
        let slots = [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)];
        for k in 1..=5u8 {
            let points = decode(&frame(k, &slots), TouchRotation::Rotate0, DIMS);
            assert_eq!(points.len(), usize::from(k));
        }
    }

    #[test]
    fn out_of_range_count_is_clamped() {
        let slots = [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)];
        let raw = frame(7, &slots);
        assert!(raw.is_malformed());
        assert_eq!(raw.reported_count(), 7);
        assert_eq!(raw.touch_count(), 5);
        assert_eq!(decode(&raw, TouchRotation::Rotate0, DIMS).len(), 5);
        assert_eq!(decode(&frame(0xFF, &slots), TouchRotation::Rotate0, DIMS).len(), 5);
    }

    #[test]
    fn unrotated_points_are_raw_coordinates() {
        let raw = frame(3, &[(0, 0), (319, 239), (0x0AB, 0x0CD)]);
        let points = decode(&raw, TouchRotation::Rotate0, DIMS);
        assert_eq!(
            points.as_slice(),
            &[
                TouchPoint { id: 0, x: 0, y: 0 },
                TouchPoint { id: 1, x: 319, y: 239 },
                TouchPoint { id: 2, x: 0x0AB, y: 0x0CD },
            ]
        );
    }

    #[test]
    fn two_touches_rotated_ninety_degrees() {
        let raw = frame(2, &[(100, 50), (10, 200)]);
        let points = decode(&raw, TouchRotation::Rotate90, DIMS);
        assert_eq!(
            points.as_slice(),
            &[
                TouchPoint { id: 0, x: 189, y: 100 },
                TouchPoint { id: 1, x: 39, y: 10 },
            ]
        );
    }

    #[test]
    fn twelve_bit_fields_ignore_high_nibble() {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[1] = 1;
        bytes[2..6].copy_from_slice(&[0xF1, 0x23, 0xE4, 0x56]);
        let raw = RawFrame::new(bytes);
        assert_eq!(raw.raw_point(0), Some((0x123, 0x456)));
        assert_eq!(raw.raw_point(MAX_TOUCH_POINTS), None);
    }

    #[test]
    fn slots_past_the_first_two_continue_the_layout() {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[1] = 5;
        // slot 4 starts at 2 + 4 * 6
        bytes[26..30].copy_from_slice(&[0x01, 0x2C, 0x00, 0xC8]);
        let raw = RawFrame::new(bytes);
        assert_eq!(FRAME_LEN, 32);
        assert_eq!(raw.raw_point(4), Some((300, 200)));
        let points = decode(&raw, TouchRotation::Rotate0, DIMS);
        assert_eq!(points[4], TouchPoint { id: 4, x: 300, y: 200 });
    }

    #[test]
    fn slice_of_wrong_length_is_rejected() {
        let short = [0u8; FRAME_LEN - 1];
        assert_eq!(
            RawFrame::try_from(&short[..]),
            Err(FrameLengthError { len: FRAME_LEN - 1 })
        );
        let exact = [0u8; FRAME_LEN];
        assert!(RawFrame::try_from(&exact[..]).is_ok());
    }

    #[test]
    fn custom_transform_is_applied_per_point() {
        let raw = frame(2, &[(1, 2), (3, 4)]);
        let points = decode_with(&raw, |x, y| (y, x));
        assert_eq!((points[0].x, points[0].y), (2, 1));
        assert_eq!((points[1].x, points[1].y), (4, 3));
    }
}
