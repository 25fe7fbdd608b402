//! Three-slot window projection.

use super::models::GalleryItem;
use super::variant::{PageDirection, SlidePosition, SlideVariant};

/// Offsets projected around the current index, in priority order
const WINDOW_OFFSETS: [isize; 3] = [0, -1, 1];

/// A slide as it should be drawn this frame
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSlide<'a> {
    /// Index into the item list; unique within one projection
    pub index: usize,
    pub position: SlidePosition,
    pub item: &'a GalleryItem,
    /// Pose to start from when the slide is newly revealed
    pub initial: Option<SlideVariant>,
    /// Pose to animate towards
    pub animate: SlideVariant,
    /// Pose to leave with if it drops out of the window on the next move
    pub exit: Option<SlideVariant>,
    pub z_index: u8,
    pub draggable: bool,
}

impl VisibleSlide<'_> {
    pub fn is_center(&self) -> bool {
        self.position == SlidePosition::Center
    }
}

/// Wrap `current + offset` into `[0, len)`
pub(crate) fn wrap_index(current: usize, offset: isize, len: usize) -> usize {
    (current as isize + offset).rem_euclid(len as isize) as usize
}

/// Indices and slots visible around `current`, duplicates removed.
///
/// With fewer than three items the same index would land in several slots;
/// only the first occurrence in `[center, left, right]` order is kept.
pub fn window(current: usize, len: usize) -> Vec<(usize, SlidePosition)> {
    if len == 0 {
        return Vec::new();
    }

    let mut slots: Vec<(usize, SlidePosition)> = Vec::with_capacity(3);
    for offset in WINDOW_OFFSETS {
        let index = wrap_index(current, offset, len);
        if slots.iter().any(|(seen, _)| *seen == index) {
            continue;
        }
        slots.push((index, SlidePosition::from_offset(offset)));
    }
    slots
}

/// Index of the slide that enters on this frame, if any.
///
/// That is the neighbour in the direction of travel, but only when it is
/// actually projected on the matching side.
pub fn entering_index(current: usize, len: usize, direction: PageDirection) -> Option<usize> {
    let side = direction.active_side()?;
    if len == 0 {
        return None;
    }
    let candidate = wrap_index(current, direction.signum() as isize, len);
    window(current, len)
        .into_iter()
        .any(|(index, position)| index == candidate && position == side)
        .then_some(candidate)
}

/// Project the items around `current` into renderable slides
pub fn project(items: &[GalleryItem], current: usize, direction: PageDirection) -> Vec<VisibleSlide<'_>> {
    let entering = entering_index(current, items.len(), direction);
    let active_side = direction.active_side();

    window(current, items.len())
        .into_iter()
        .map(|(index, position)| {
            let initial = if entering == Some(index) {
                direction.entering_variant()
            } else {
                None
            };
            let z_index = if position == SlidePosition::Center {
                30
            } else if Some(position) == active_side {
                20
            } else {
                10
            };

            VisibleSlide {
                index,
                position,
                item: &items[index],
                initial,
                animate: SlideVariant::Rest(position),
                exit: direction.exiting_variant(),
                z_index,
                draggable: position == SlidePosition::Center,
            }
        })
        .collect()
}
