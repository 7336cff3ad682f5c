// Copyright 2026 the Rangeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-handle range slider widget.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use rangeline_layout::{AnchoredRect, LayoutTable, RectId};

#[cfg(not(feature = "std"))]
#[allow(unused_imports, reason = "provides float math on no_std builds")]
use kurbo::common::FloatFuncs as _;

/// Which of the two selected values the current drag gesture adjusts.
///
/// Selected once at drag begin and held for the whole gesture; later pointer
/// movement never reselects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ActiveHandle {
    /// No gesture has selected a handle yet.
    #[default]
    None,
    /// The gesture adjusts the first value.
    First,
    /// The gesture adjusts the second value.
    Second,
}

/// A listener invoked with `(low, high)` after every recompute.
type ValueListener = Box<dyn FnMut(f64, f64)>;

/// A two-handle range slider over rectangles in a host-owned [`LayoutTable`].
///
/// The slider owns its numeric state and holds [`RectId`] handles to the
/// geometry it drives: its own *track* rectangle (read for width), a *fill*
/// rectangle whose horizontal edge offsets visualize the selected sub-range,
/// and two optional handle rectangles positioned at the range edges. The two
/// selected values are stored unordered; the effective range is always
/// `(min(value1, value2), max(value1, value2))`.
///
/// The host drives the widget through explicit lifecycle calls:
///
/// - [`initialize`](Self::initialize) on attach,
/// - [`on_configuration_changed`](Self::on_configuration_changed) after
///   editing configuration fields,
/// - [`begin_drag`](Self::begin_drag) / [`drag`](Self::drag) /
///   [`end_drag`](Self::end_drag) for pointer gestures, in screen space.
///
/// All calls run synchronously on the host's layout/input thread; the slider
/// is the only writer of the rectangles it references while attached.
pub struct RangeSlider {
    track: RectId,
    fill: Option<RectId>,
    left_handle: Option<RectId>,
    right_handle: Option<RectId>,

    min_value: f64,
    max_value: f64,
    value1: f64,
    value2: f64,
    round_to_int: bool,

    active_handle: ActiveHandle,
    on_value_changed: Vec<ValueListener>,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("track", &self.track)
            .field("fill", &self.fill)
            .field("left_handle", &self.left_handle)
            .field("right_handle", &self.right_handle)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("value1", &self.value1)
            .field("value2", &self.value2)
            .field("round_to_int", &self.round_to_int)
            .field("active_handle", &self.active_handle)
            .finish_non_exhaustive()
    }
}

impl RangeSlider {
    /// Creates a slider over the given track rectangle.
    ///
    /// The fill rectangle is unset; [`initialize`](Self::initialize) reports
    /// an error and performs no geometry updates until
    /// [`set_fill`](Self::set_fill) is called. Bounds default to `[0, 1]`
    /// with the full range selected.
    #[must_use]
    pub fn new(track: RectId) -> Self {
        Self {
            track,
            fill: None,
            left_handle: None,
            right_handle: None,
            min_value: 0.0,
            max_value: 1.0,
            value1: 0.0,
            value2: 1.0,
            round_to_int: false,
            active_handle: ActiveHandle::None,
            on_value_changed: Vec::new(),
        }
    }

    /// Sets the fill rectangle whose horizontal offsets visualize the range.
    pub fn set_fill(&mut self, fill: RectId) {
        self.fill = Some(fill);
    }

    /// Sets the optional handle rectangle positioned at the low edge.
    pub fn set_left_handle(&mut self, handle: RectId) {
        self.left_handle = Some(handle);
    }

    /// Sets the optional handle rectangle positioned at the high edge.
    pub fn set_right_handle(&mut self, handle: RectId) {
        self.right_handle = Some(handle);
    }

    /// Sets whether both values round to the nearest integer at drag end.
    pub fn set_round_to_int(&mut self, round_to_int: bool) {
        self.round_to_int = round_to_int;
    }

    /// Returns whether values round to the nearest integer at drag end.
    #[must_use]
    pub fn round_to_int(&self) -> bool {
        self.round_to_int
    }

    /// Lower bound of the addressable range.
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Upper bound of the addressable range.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// The two selected values, in storage order.
    #[must_use]
    pub fn values(&self) -> (f64, f64) {
        (self.value1, self.value2)
    }

    /// The selected range as an ordered `(low, high)` pair.
    #[must_use]
    pub fn selected_range(&self) -> (f64, f64) {
        (
            self.value1.min(self.value2),
            self.value1.max(self.value2),
        )
    }

    /// The handle selected by the current or most recent drag gesture.
    #[must_use]
    pub fn active_handle(&self) -> ActiveHandle {
        self.active_handle
    }

    /// Registers a listener invoked with `(low, high)` after every recompute.
    ///
    /// Listeners fire on every successful recompute, even when the values did
    /// not change from the previous one.
    pub fn on_value_changed(&mut self, listener: impl FnMut(f64, f64) + 'static) {
        self.on_value_changed.push(Box::new(listener));
    }

    /// (Re)initializes the slider against the layout table.
    ///
    /// Called by the host on attach and as the tail of
    /// [`on_configuration_changed`](Self::on_configuration_changed):
    ///
    /// 1. Coerces the track to point anchors, warning if it was configured
    ///    for stretch layout.
    /// 2. Requires the fill rectangle; logs an error and aborts without
    ///    touching geometry when it is unset.
    /// 3. Normalizes anchoring of the fill (full stretch, centered pivot)
    ///    and of each present handle (left/right edge, centered pivot).
    /// 4. Enforces `min_value < max_value`.
    /// 5. Recomputes geometry and notifies listeners.
    pub fn initialize(&mut self, layout: &mut LayoutTable) {
        if let Some(track) = layout.get_mut(self.track) {
            if track.collapse_to_point_anchors() {
                log::warn!("range slider does not support stretch layout; collapsing track anchors");
            }
        }

        let Some(fill) = self.fill else {
            log::error!("range slider fill rectangle is not set");
            return;
        };

        if let Some(rect) = layout.get_mut(fill) {
            rect.set_anchoring(Point::ZERO, Point::new(1.0, 1.0), Point::new(0.5, 0.5));
        }
        if let Some(id) = self.left_handle {
            if let Some(rect) = layout.get_mut(id) {
                rect.set_anchoring(Point::new(0.0, 0.5), Point::new(0.0, 0.5), Point::new(0.5, 0.5));
            }
        }
        if let Some(id) = self.right_handle {
            if let Some(rect) = layout.get_mut(id) {
                rect.set_anchoring(Point::new(1.0, 0.5), Point::new(1.0, 0.5), Point::new(0.5, 0.5));
            }
        }

        self.clamp_bounds();
        self.update_slider(layout);
    }

    /// Revalidates the selected values, then re-runs the full
    /// [`initialize`](Self::initialize) sequence.
    ///
    /// The host calls this after editing any configuration field (bounds,
    /// values, rectangle assignments, rounding flag).
    pub fn on_configuration_changed(&mut self, layout: &mut LayoutTable) {
        self.validate_values();
        self.initialize(layout);
    }

    /// Overwrites the range bounds and recomputes.
    ///
    /// Bounds ordering is re-enforced, but the selected values are *not*
    /// revalidated against the new bounds; callers that need reclamping must
    /// follow up with [`set_value`](Self::set_value) or
    /// [`on_configuration_changed`](Self::on_configuration_changed).
    pub fn set_min_max_value(&mut self, layout: &mut LayoutTable, min_value: f64, max_value: f64) {
        self.min_value = min_value;
        self.max_value = max_value;
        self.clamp_bounds();
        self.update_slider(layout);
    }

    /// Overwrites both selected values verbatim and recomputes.
    ///
    /// No clamping or validation is applied here; out-of-range values only
    /// affect the notified pair, never the geometry (which is normalized with
    /// clamping).
    pub fn set_value(&mut self, layout: &mut LayoutTable, value1: f64, value2: f64) {
        self.value1 = value1;
        self.value2 = value2;
        self.update_slider(layout);
    }

    /// Begins a drag gesture at a screen-space pointer position.
    ///
    /// Maps the pointer to a value on the track and selects the handle whose
    /// value is nearest; a tie selects the first handle. The selection is
    /// held for the whole gesture.
    pub fn begin_drag(&mut self, layout: &LayoutTable, pointer: Point) {
        let Some(local) = layout.screen_to_local(self.track, pointer) else {
            return;
        };
        let Some(value) = self.pointer_value(layout, local.x) else {
            return;
        };

        let diff1 = (value - self.value1).abs();
        let diff2 = (value - self.value2).abs();
        self.active_handle = if diff1 <= diff2 {
            ActiveHandle::First
        } else {
            ActiveHandle::Second
        };
    }

    /// Processes a pointer move during a drag gesture.
    ///
    /// Assigns the pointer-mapped value to the active handle's value
    /// unclamped, then validates both values and recomputes. May fire many
    /// times per gesture.
    pub fn drag(&mut self, layout: &mut LayoutTable, pointer: Point) {
        if let Some(local) = layout.screen_to_local(self.track, pointer) {
            if let Some(value) = self.pointer_value(layout, local.x) {
                match self.active_handle {
                    ActiveHandle::First => self.value1 = value,
                    ActiveHandle::Second => self.value2 = value,
                    ActiveHandle::None => {}
                }
            }
        }

        self.validate_values();
        self.update_slider(layout);
    }

    /// Ends a drag gesture.
    ///
    /// When [`round_to_int`](Self::round_to_int) is set, rounds both values
    /// to the nearest integer and recomputes once more; otherwise this is a
    /// no-op. The active handle is left as-is since the next
    /// [`begin_drag`](Self::begin_drag) always reselects.
    pub fn end_drag(&mut self, layout: &mut LayoutTable) {
        if self.round_to_int {
            self.value1 = self.value1.round();
            self.value2 = self.value2.round();
            self.update_slider(layout);
        }
    }

    fn clamp_bounds(&mut self) {
        if self.min_value >= self.max_value {
            self.min_value = self.max_value - 1.0;
        }
    }

    fn validate_values(&mut self) {
        // The larger-positioned value snaps to the max bound when out of
        // range instead of clamping; hosts depend on this exact shape.
        if self.value1 < self.value2 {
            self.value1 = self.value1.clamp(self.min_value, self.max_value);
            if self.value2 < self.min_value || self.value2 > self.max_value {
                self.value2 = self.max_value;
            }
        } else {
            self.value2 = self.value2.clamp(self.min_value, self.max_value);
            if self.value1 < self.min_value || self.value1 > self.max_value {
                self.value1 = self.max_value;
            }
        }
    }

    /// Maps a local-space X coordinate on the track to a value.
    ///
    /// Local X spans `[-width/2, width/2]` across the track, so the left edge
    /// maps to `min_value` and the right edge to `max_value`.
    fn pointer_value(&self, layout: &LayoutTable, local_x: f64) -> Option<f64> {
        let width = layout.get(self.track)?.width();
        let normalized = (local_x + width / 2.0) / width;
        Some(normalized * (self.max_value - self.min_value) + self.min_value)
    }

    /// Recomputes fill offsets and handle positions from the current state,
    /// then notifies listeners with the ordered `(low, high)` pair.
    ///
    /// Skips silently when the fill is unset, the track is stale, or the
    /// range is degenerate (`max_value ≈ min_value`).
    fn update_slider(&mut self, layout: &mut LayoutTable) {
        let Some(fill_id) = self.fill else {
            return;
        };
        let Some(width) = layout.get(self.track).map(AnchoredRect::width) else {
            return;
        };

        let diff = self.max_value - self.min_value;
        if diff.abs() <= f64::EPSILON {
            return;
        }

        let (low, high) = self.selected_range();

        let normalized_min = ((low - self.min_value) / diff).clamp(0.0, 1.0);
        let normalized_max = ((self.max_value - high) / diff).clamp(0.0, 1.0);

        let offset_min_x = width * normalized_min;
        let offset_max_x = -(width * normalized_max);

        let Some(fill) = layout.get_mut(fill_id) else {
            return;
        };
        fill.offset_min.x = offset_min_x;
        fill.offset_max.x = offset_max_x;

        if let Some(id) = self.left_handle {
            if let Some(handle) = layout.get_mut(id) {
                handle.anchored_position.x = offset_min_x;
            }
        }
        if let Some(id) = self.right_handle {
            if let Some(handle) = layout.get_mut(id) {
                handle.anchored_position.x = offset_max_x;
            }
        }

        for listener in &mut self.on_value_changed {
            listener(low, high);
        }
    }
}
