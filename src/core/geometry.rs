//! Screen-space rectangles and window placement math.
//!
//! Everything in here is pure so the placement properties can be tested
//! without a display. Coordinates are virtual-desktop pixels; monitors to
//! the left of or above the primary have negative origins.

/// A rectangle in virtual-desktop coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle at the origin with the given size
    pub fn of_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Whether `other` lies entirely within this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Center a box of `width`×`height` within `bounds`.
///
/// When the box is larger than `bounds` on an axis, the origin clamps to the
/// bounds origin on that axis so the window never starts above or left of
/// the target monitor.
pub fn center_within(width: i32, height: i32, bounds: Rect) -> Rect {
    let x = bounds.x + (bounds.width - width) / 2;
    let y = bounds.y + (bounds.height - height) / 2;
    Rect {
        x: x.max(bounds.x),
        y: y.max(bounds.y),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center_within_fits() {
        let bounds = Rect::new(0, 0, 1920, 1080);
        let rect = center_within(800, 600, bounds);
        assert_eq!(rect, Rect::new(560, 240, 800, 600));
    }

    #[test]
    fn test_center_within_secondary_monitor() {
        // Monitor B sits to the right of a 1920-wide primary
        let bounds = Rect::new(1920, 0, 1280, 1024);
        let rect = center_within(800, 600, bounds);
        assert_eq!(rect.x, 1920 + (1280 - 800) / 2);
        assert_eq!(rect.y, (1024 - 600) / 2);
        assert!(bounds.contains_rect(&rect));
    }

    #[test]
    fn test_center_within_oversized_clamps_to_origin() {
        let bounds = Rect::new(0, 0, 1280, 720);
        let rect = center_within(1920, 1080, bounds);
        assert_eq!((rect.x, rect.y), (0, 0));
        assert_eq!(rect.size(), (1920, 1080));
    }

    #[test]
    fn test_center_within_oversized_on_offset_monitor() {
        let bounds = Rect::new(1920, 200, 1024, 768);
        let rect = center_within(2000, 1000, bounds);
        // Clamped to the monitor origin, not the desktop origin
        assert_eq!((rect.x, rect.y), (1920, 200));
    }

    proptest! {
        /// For any box that fits, the centered rect lies entirely within the
        /// bounds and is centered to within integer-division rounding.
        #[test]
        fn centered_rect_stays_in_bounds(
            bx in -5000i32..5000,
            by in -5000i32..5000,
            bw in 100i32..4000,
            bh in 100i32..4000,
            w in 1i32..4000,
            h in 1i32..4000,
        ) {
            prop_assume!(w <= bw && h <= bh);
            let bounds = Rect::new(bx, by, bw, bh);
            let rect = center_within(w, h, bounds);

            prop_assert!(bounds.contains_rect(&rect));
            prop_assert!((rect.x - bounds.x) - (bounds.right() - rect.right()) <= 1);
            prop_assert!((rect.y - bounds.y) - (bounds.bottom() - rect.bottom()) <= 1);
        }

        /// Centering never changes the requested size, and the origin never
        /// falls above or left of the bounds origin.
        #[test]
        fn centered_origin_never_precedes_bounds(
            bx in -5000i32..5000,
            by in -5000i32..5000,
            bw in 100i32..4000,
            bh in 100i32..4000,
            w in 1i32..8000,
            h in 1i32..8000,
        ) {
            let bounds = Rect::new(bx, by, bw, bh);
            let rect = center_within(w, h, bounds);

            prop_assert_eq!(rect.size(), (w, h));
            prop_assert!(rect.x >= bounds.x);
            prop_assert!(rect.y >= bounds.y);
        }

        /// Centering is idempotent over repeated application with the same
        /// inputs.
        #[test]
        fn centering_is_deterministic(
            bw in 100i32..4000,
            bh in 100i32..4000,
            w in 1i32..4000,
            h in 1i32..4000,
        ) {
            let bounds = Rect::new(0, 0, bw, bh);
            prop_assert_eq!(center_within(w, h, bounds), center_within(w, h, bounds));
        }
    }
}
