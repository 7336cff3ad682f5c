// Copyright 2026 the Rangeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rangeline Layout: anchored rectangle records behind generational handles.
//!
//! This crate is the host-side geometry store for Rangeline widgets. The host
//! owns a [`LayoutTable`] of [`AnchoredRect`] records; widgets hold copyable
//! [`RectId`] handles into it and never own the rectangles they read and
//! write. This keeps widget types plain data, lets the host tear rectangles
//! down without coordinating with widgets, and makes stale references cheap
//! to detect instead of dangling.
//!
//! - [`AnchoredRect`]: one layout record — normalized anchors and pivot,
//!   pixel edge offsets, anchored position, resolved size, and the
//!   host-resolved screen-space center.
//! - [`LayoutTable`]: a slot arena of records. Handles are generational:
//!   removing a record invalidates its handles, and a reused slot produces a
//!   new, distinct [`RectId`] that old handles never alias.
//! - [`LayoutTable::screen_to_local`]: the host-provided conversion from
//!   screen space into a rect's local space (origin at the rect's center),
//!   which pointer-driven widgets use to interpret drag positions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use rangeline_layout::{AnchoredRect, LayoutTable};
//!
//! let mut layout = LayoutTable::new();
//! let track = layout.insert(AnchoredRect::from_size(Size::new(200.0, 24.0)));
//!
//! // A pointer over the rect's center maps to local (0, 0).
//! let local = layout.screen_to_local(track, Point::new(0.0, 0.0)).unwrap();
//! assert_eq!(local, Point::new(0.0, 0.0));
//!
//! // Removing the record leaves the handle stale.
//! assert!(layout.remove(track).is_some());
//! assert!(!layout.is_alive(track));
//! assert!(layout.get(track).is_none());
//! ```
//!
//! This crate does not perform layout. The host computes sizes and
//! screen-space positions with whatever layout system it uses and writes the
//! results into the records; widgets only consume them.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod rect;

pub use rect::AnchoredRect;

use alloc::vec::Vec;

use kurbo::Point;

/// Generational handle of a rectangle record in a [`LayoutTable`].
///
/// A `RectId` stays valid until its record is removed. Reusing the freed slot
/// bumps the slot's generation, so stale handles never resolve to a
/// different live record.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RectId(u32, u32);

impl RectId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    rect: Option<AnchoredRect>,
}

/// A host-owned table of [`AnchoredRect`] records.
///
/// Records are stored in a slot arena and addressed by generational
/// [`RectId`] handles. There is exactly one logical writer: the host and the
/// widgets it drives all run on the thread that delivers layout and input
/// callbacks, so no interior synchronization is needed.
#[derive(Clone, Debug, Default)]
pub struct LayoutTable {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl LayoutTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning its handle.
    pub fn insert(&mut self, rect: AnchoredRect) -> RectId {
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.rect = Some(rect);
            RectId(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).expect("layout table slot count overflow");
            self.slots.push(Slot {
                generation: 1,
                rect: Some(rect),
            });
            RectId(idx, 1)
        }
    }

    /// Removes a record, returning it if the handle was live.
    pub fn remove(&mut self, id: RectId) -> Option<AnchoredRect> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let rect = slot.rect.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(rect)
    }

    /// Returns the record for a live handle.
    #[must_use]
    pub fn get(&self, id: RectId) -> Option<&AnchoredRect> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.rect.as_ref()
    }

    /// Returns the record for a live handle, mutably.
    pub fn get_mut(&mut self, id: RectId) -> Option<&mut AnchoredRect> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.rect.as_mut()
    }

    /// Returns `true` if the handle still refers to a live record.
    #[must_use]
    pub fn is_alive(&self, id: RectId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no live records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Converts a screen-space point into a rect's local space.
    ///
    /// Local space has its origin at the rect's [`screen_center`], so for a
    /// centered pivot the local X coordinate spans `[-width/2, width/2]`
    /// across the rect. The conversion is a pure translation; ancestor
    /// scaling is resolved by the host before positions reach this table.
    ///
    /// Returns `None` for a stale handle.
    ///
    /// [`screen_center`]: AnchoredRect::screen_center
    #[must_use]
    pub fn screen_to_local(&self, id: RectId, screen: Point) -> Option<Point> {
        let rect = self.get(id)?;
        Some(Point::new(
            screen.x - rect.screen_center.x,
            screen.y - rect.screen_center.y,
        ))
    }
}
