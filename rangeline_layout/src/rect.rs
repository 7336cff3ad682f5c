// Copyright 2026 the Rangeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The anchored rectangle record stored in a [`LayoutTable`](crate::LayoutTable).

use kurbo::{Point, Size, Vec2};

/// A retained-mode layout record with anchor/pivot semantics.
///
/// The conventions follow the usual retained-mode UI layout model:
///
/// - `anchor_min`/`anchor_max` are normalized positions within the parent
///   rect. When they coincide on an axis the rect is *point anchored* on that
///   axis and has a fixed pixel extent there; when they differ the rect
///   stretches with the parent.
/// - `pivot` is the normalized point within the rect that
///   `anchored_position` positions relative to the anchors.
/// - `offset_min`/`offset_max` are pixel-space insets of the rect's edges
///   from the anchor region. For a full-stretch child, `offset_min.x` moves
///   the left edge right and a negative `offset_max.x` moves the right edge
///   left.
/// - `size` is the resolved pixel extent; `screen_center` is where the host's
///   layout pass placed the rect's center in screen space.
///
/// The host owns layout resolution. Widgets only read measurements and write
/// the offset/position fields; they never recompute `size` or
/// `screen_center` themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchoredRect {
    /// Normalized lower-left anchor in the parent.
    pub anchor_min: Point,
    /// Normalized upper-right anchor in the parent.
    pub anchor_max: Point,
    /// Normalized pivot within the rect.
    pub pivot: Point,
    /// Pixel inset of the min (left/bottom) edges from the anchor region.
    pub offset_min: Vec2,
    /// Pixel inset of the max (right/top) edges from the anchor region.
    pub offset_max: Vec2,
    /// Pixel position of the pivot relative to the anchors.
    pub anchored_position: Point,
    /// Resolved pixel size, as measured by the host's layout pass.
    pub size: Size,
    /// Screen-space center of the rect, as resolved by the host's layout pass.
    pub screen_center: Point,
}

impl Default for AnchoredRect {
    fn default() -> Self {
        Self {
            anchor_min: Point::new(0.5, 0.5),
            anchor_max: Point::new(0.5, 0.5),
            pivot: Point::new(0.5, 0.5),
            offset_min: Vec2::ZERO,
            offset_max: Vec2::ZERO,
            anchored_position: Point::ORIGIN,
            size: Size::ZERO,
            screen_center: Point::ORIGIN,
        }
    }
}

impl AnchoredRect {
    /// Creates a point-anchored rect of the given size, centered at the origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Returns the rect's pixel width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Returns the rect's pixel height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Returns `true` if the rect stretches with its parent on the X axis.
    #[must_use]
    pub fn is_stretch_x(&self) -> bool {
        self.anchor_min.x != self.anchor_max.x
    }

    /// Returns `true` if the rect stretches with its parent on the Y axis.
    #[must_use]
    pub fn is_stretch_y(&self) -> bool {
        self.anchor_min.y != self.anchor_max.y
    }

    /// Collapses `anchor_max` onto `anchor_min` on every stretch axis,
    /// leaving point-anchored axes untouched.
    ///
    /// Returns `true` if any axis was changed.
    pub fn collapse_to_point_anchors(&mut self) -> bool {
        let prev = self.anchor_max;
        if self.is_stretch_x() {
            self.anchor_max.x = self.anchor_min.x;
        }
        if self.is_stretch_y() {
            self.anchor_max.y = self.anchor_min.y;
        }
        self.anchor_max != prev
    }

    /// Sets both anchors and the pivot in one call.
    pub fn set_anchoring(&mut self, anchor_min: Point, anchor_max: Point, pivot: Point) {
        self.anchor_min = anchor_min;
        self.anchor_max = anchor_max;
        self.pivot = pivot;
    }
}
