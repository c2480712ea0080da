//! The scrolling track spatial index
//!
//! The track is an immutable stack of fixed-height element bands, built once
//! from a template sequence and queried every frame. Rather than tracking a
//! "current element" pointer per character, collaborators re-derive the
//! relevant slice from a Y-interval each frame - stateless, and trivially
//! correct under teleports (respawn), fast movement and multiple characters.
//!
//! Element `i` occupies exactly the band
//! `[start_y - (i + 1) * ELEMENT_HEIGHT, start_y - i * ELEMENT_HEIGHT)`;
//! bands are contiguous and non-overlapping, and Y decreases moving forward
//! along the track.

use glam::Vec2;

use super::area::{Area, Rect, overlap};
use super::element::{ElementKind, TrackElement, TrackTemplate};
use crate::consts::ELEMENT_HEIGHT;

/// Inclusive element-index bounds returned by a Y-range query.
///
/// `max_i < min_i` encodes an empty range (possible at the track
/// extremities). The iteration helpers yield nothing for an empty range, so
/// callers that stick to them can never index out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub min_i: i32,
    pub max_i: i32,
}

impl IndexRange {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_i < self.min_i
    }

    /// Element indices, ascending
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (self.min_i.max(0)..=self.max_i).map(|i| i as usize)
    }

    /// Element indices, descending
    pub fn indices_rev(self) -> impl Iterator<Item = usize> {
        (self.min_i.max(0)..=self.max_i).rev().map(|i| i as usize)
    }
}

#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    /// Bottom edge of the checkpoint element's band
    y: f32,
    /// Index into the element sequence
    element: usize,
}

/// Immutable, precomputed scrolling segment index
#[derive(Debug, Clone)]
pub struct Track {
    elements: Vec<TrackElement>,
    start_y: f32,
    checkpoints: Vec<Checkpoint>,

    /// Bottom edge of the last element's band
    pub finish_y: f32,

    pub width: f32,
    pub height: f32,
    min_x: f32,
}

impl Track {
    /// Expand `templates` into elements stacked downward from `start_y`.
    ///
    /// Panics on an empty template slice: a zero-length track has no
    /// width/height and no start checkpoint.
    pub fn new(templates: &[TrackTemplate], start_y: f32) -> Self {
        assert!(
            !templates.is_empty(),
            "track must have at least one element"
        );

        let mut next_obstacle_id = 0;
        let elements: Vec<TrackElement> = templates
            .iter()
            .enumerate()
            .map(|(i, t)| t.expand(start_y - (i + 1) as f32 * ELEMENT_HEIGHT, &mut next_obstacle_id))
            .collect();

        let finish_y = start_y - (elements.len() - 1) as f32 * ELEMENT_HEIGHT;

        let min_x = elements.iter().map(|e| e.min_x).fold(f32::INFINITY, f32::min);
        let max_x = elements.iter().map(|e| e.max_x).fold(f32::NEG_INFINITY, f32::max);

        // The first element is an implicit start checkpoint.
        let checkpoints = elements
            .iter()
            .enumerate()
            .filter(|(i, e)| e.kind == ElementKind::Checkpoint || *i == 0)
            .map(|(i, e)| Checkpoint { y: e.y + e.height, element: i })
            .collect();

        Self {
            start_y,
            finish_y,
            width: max_x - min_x,
            height: elements.len() as f32 * ELEMENT_HEIGHT,
            min_x,
            checkpoints,
            elements,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    /// Direct index access. The index must come from a prior range query;
    /// anything out of range is a caller bug and panics.
    #[inline]
    pub fn get(&self, i: usize) -> &TrackElement {
        &self.elements[i]
    }

    pub fn get_checkpoint(&self, checkpoint_index: usize) -> &TrackElement {
        &self.elements[self.checkpoints[checkpoint_index].element]
    }

    /// Index of the most recent checkpoint passed at `y`, scanning from the
    /// latest checkpoint backward; 0 (the implicit start checkpoint) when
    /// none matches.
    pub fn find_latest_checkpoint(&self, y: f32) -> usize {
        for (i, checkpoint) in self.checkpoints.iter().enumerate().rev() {
            let element = &self.elements[checkpoint.element];
            if y < checkpoint.y + element.height {
                return i;
            }
        }

        0
    }

    /// Map a world Y-interval (`top_y <= bottom_y`) to the inclusive band of
    /// element indices intersecting it.
    ///
    /// Asymmetric rounding (ceil toward the top bound, floor toward the
    /// bottom) keeps the range over-inclusive: an element partially
    /// overlapping the interval is always covered, and the exact rectangle
    /// tests downstream filter any false positive. Results are clamped into
    /// `0..len`, except that a query entirely off the track yields an
    /// inverted (empty) range.
    pub fn get_between(&self, top_y: f32, bottom_y: f32) -> IndexRange {
        let count_to_top = ((self.start_y - top_y).max(0.0) / ELEMENT_HEIGHT).ceil() as i32;
        let count_to_bottom = ((self.start_y - bottom_y).max(0.0) / ELEMENT_HEIGHT).floor() as i32;

        IndexRange {
            min_i: (count_to_bottom - 1).max(0),
            max_i: count_to_top.min(self.elements.len() as i32) - 1,
        }
    }

    /// The element following the band that contains `position`, toward the
    /// finish; `None` at the track's end or off the track.
    pub fn get_next_element(&self, position: Vec2) -> Option<&TrackElement> {
        for i in 0..self.elements.len() {
            let top = self.start_y - (i + 1) as f32 * ELEMENT_HEIGHT;
            let bottom = self.start_y - i as f32 * ELEMENT_HEIGHT;

            if top <= position.y && position.y < bottom {
                return self.elements.get(i + 1);
            }
        }

        None
    }

    /// Does `area` rest on any surface of any element in `range`?
    pub fn is_on_platform(&self, range: IndexRange, area: &impl Area) -> bool {
        for e in range.indices_rev() {
            let element = self.get(e);

            for surface in &element.surfaces {
                if overlap(area, surface) {
                    return true;
                }
            }
        }

        false
    }
}

impl Area for Track {
    fn bounds(&self) -> Rect {
        Rect::new(self.min_x, self.start_y - self.height, self.width, self.height)
    }
}
