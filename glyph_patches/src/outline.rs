// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph outlines in font design space.

use hashbrown::HashMap;

use crate::kurbo::{Line, PathSeg, Point};

/// One closed sub-path of a glyph outline.
///
/// Segment order defines the winding direction and is preserved from the font.
pub type Contour = Vec<PathSeg>;

/// The outline of a single character.
///
/// Coordinates are in em units with the baseline at `y = 0` and y pointing up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Glyph {
    /// Closed contours, in font order.
    pub contours: Vec<Contour>,
    /// Horizontal distance from this glyph's origin to the next glyph's origin.
    pub advance: f64,
}

impl Glyph {
    /// The glyph with no contours and no advance.
    pub const EMPTY: Self = Self {
        contours: Vec::new(),
        advance: 0.0,
    };

    /// Creates a glyph from its contours and advance.
    pub fn new(contours: Vec<Contour>, advance: f64) -> Self {
        Self { contours, advance }
    }

    /// Returns `true` if the glyph has no contours and no advance.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty() && self.advance == 0.0
    }

    /// Iterates over every segment of every contour, in order.
    pub fn segments(&self) -> impl Iterator<Item = &PathSeg> + '_ {
        self.contours.iter().flatten()
    }

    /// Total number of segments across all contours.
    pub fn segment_count(&self) -> usize {
        self.contours.iter().map(Vec::len).sum()
    }
}

/// Builds a closed polygon contour from its corner points.
///
/// Returns an empty contour for fewer than two points.
pub fn polygon(points: &[Point]) -> Contour {
    if points.len() < 2 {
        return Vec::new();
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&p0, &p1)| PathSeg::Line(Line::new(p0, p1)))
        .collect()
}

/// A supplier of glyph outlines, keyed by character.
pub trait OutlineSource {
    /// Returns the glyph for `ch`, or `None` if the source does not map it.
    fn glyph(&self, ch: char) -> Option<Glyph>;

    /// Returns the glyph drawn in place of unmapped characters, if the source has one.
    fn placeholder(&self) -> Option<Glyph> {
        None
    }
}

impl<T: OutlineSource + ?Sized> OutlineSource for &T {
    fn glyph(&self, ch: char) -> Option<Glyph> {
        (**self).glyph(ch)
    }

    fn placeholder(&self) -> Option<Glyph> {
        (**self).placeholder()
    }
}

/// An in-memory outline source.
///
/// Useful for synthetic fonts and for driving layout without a font file.
#[derive(Clone, Debug, Default)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
    placeholder: Option<Glyph>,
}

impl GlyphTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the glyph for `ch`.
    pub fn insert(&mut self, ch: char, glyph: Glyph) -> &mut Self {
        self.glyphs.insert(ch, glyph);
        self
    }

    /// Sets the glyph returned by [`OutlineSource::placeholder`].
    pub fn set_placeholder(&mut self, glyph: Glyph) -> &mut Self {
        self.placeholder = Some(glyph);
        self
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if no characters are mapped.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl OutlineSource for GlyphTable {
    fn glyph(&self, ch: char) -> Option<Glyph> {
        self.glyphs.get(&ch).cloned()
    }

    fn placeholder(&self) -> Option<Glyph> {
        self.placeholder.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_closes_back_to_start() {
        let square = polygon(&[
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(1., 1.),
            Point::new(0., 1.),
        ]);
        assert_eq!(square.len(), 4, "one edge per corner");
        let PathSeg::Line(last) = square[3] else {
            panic!("polygon edges are lines");
        };
        assert_eq!(last.p1, Point::new(0., 0.), "last edge returns to the start");
        assert!(polygon(&[Point::ORIGIN]).is_empty(), "degenerate polygon");
    }

    #[test]
    fn table_lookup() {
        let mut table = GlyphTable::new();
        table.insert('a', Glyph::new(vec![], 0.5));
        assert_eq!(table.glyph('a').map(|g| g.advance), Some(0.5), "mapped");
        assert!(table.glyph('b').is_none(), "unmapped");
        assert!(table.placeholder().is_none(), "no placeholder by default");
        table.set_placeholder(Glyph::new(vec![], 0.6));
        assert_eq!(table.placeholder().map(|g| g.advance), Some(0.6), "placeholder");
    }

    #[test]
    fn empty_glyph() {
        assert!(Glyph::EMPTY.is_empty(), "EMPTY is empty");
        assert!(!Glyph::new(vec![], 0.5).is_empty(), "advance makes it non-empty");
        assert_eq!(Glyph::EMPTY.segment_count(), 0, "no segments");
    }
}
