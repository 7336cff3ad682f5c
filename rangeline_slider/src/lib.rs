// Copyright 2026 the Rangeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rangeline Slider: a two-handle range slider widget.
//!
//! This crate implements the interaction and geometry logic of a range
//! slider: a control that lets a user pick a `[low, high]` sub-range within
//! configured `[min_value, max_value]` bounds by dragging either of two
//! handles, with a fill bar stretched between them.
//!
//! The slider is a plain, synchronous object. It holds handles into a
//! host-owned [`rangeline_layout::LayoutTable`] and never owns the
//! rectangles it drives: the host resolves layout (sizes, screen positions),
//! delivers lifecycle and pointer callbacks in order on one thread, and the
//! slider writes fill offsets and handle positions back through the table.
//! There is no rendering, no event dispatch, and no persistence here.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use rangeline_layout::{AnchoredRect, LayoutTable};
//! use rangeline_slider::RangeSlider;
//!
//! let mut layout = LayoutTable::new();
//! let track = layout.insert(AnchoredRect::from_size(Size::new(200.0, 24.0)));
//! let fill = layout.insert(AnchoredRect::default());
//!
//! let mut slider = RangeSlider::new(track);
//! slider.set_fill(fill);
//! slider.set_min_max_value(&mut layout, 0.0, 100.0);
//! slider.set_value(&mut layout, 20.0, 80.0);
//! slider.initialize(&mut layout);
//!
//! // Fill insets reflect the selected range over the 200px track.
//! let rect = layout.get(fill).unwrap();
//! assert_eq!(rect.offset_min.x, 40.0);
//! assert_eq!(rect.offset_max.x, -40.0);
//!
//! // A drag gesture adjusts whichever value is nearest to the pointer.
//! slider.begin_drag(&layout, Point::new(-60.0, 0.0)); // maps to value 20
//! slider.drag(&mut layout, Point::new(-80.0, 0.0)); // maps to value 10
//! slider.end_drag(&mut layout);
//! assert_eq!(slider.values(), (10.0, 80.0));
//! ```
//!
//! ## Lifecycle
//!
//! The host drives the slider through explicit calls at the equivalent
//! points a retained-mode framework would invoke hooks:
//!
//! - [`RangeSlider::initialize`] on attach;
//! - [`RangeSlider::on_configuration_changed`] after editing any
//!   configuration field;
//! - [`RangeSlider::begin_drag`] → [`RangeSlider::drag`]\* →
//!   [`RangeSlider::end_drag`] for each pointer gesture, with screen-space
//!   positions. There is no cancellation path; a gesture only ends when the
//!   host delivers the end event.
//!
//! Every successful recompute invokes the listeners registered with
//! [`RangeSlider::on_value_changed`], passing the ordered `(low, high)`
//! pair. Notifications are not deduplicated.
//!
//! ## Diagnostics
//!
//! Configuration problems are advisory and never halt the host. They are
//! reported through the [`log`] facade: a missing fill rectangle logs an
//! error and aborts initialization; a stretch-anchored track logs a warning
//! and is coerced to point anchors. Inverted bounds are corrected silently.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod slider;

pub use slider::{ActiveHandle, RangeSlider};
