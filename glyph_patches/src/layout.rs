// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Laying out strings as tessellation patches.

use log::{debug, warn};
use smallvec::SmallVec;
use thiserror::Error;

use crate::batch::Vertex;
use crate::kurbo::{Affine, PathSeg, Point, Vec2};
use crate::outline::{Glyph, OutlineSource};

/// Accuracy, in em units, of the quadratic approximation of cubic segments.
pub const QUAD_APPROXIMATION_ACCURACY: f64 = 1e-3;

/// The kind of Bezier the tessellation stage evaluates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// Quadratic Beziers, 3 control points per patch.
    #[default]
    Quadratic,
    /// Cubic Beziers, 4 control points per patch.
    Cubic,
}

impl CurveType {
    /// Number of control points in one patch.
    pub fn patch_size(self) -> usize {
        match self {
            Self::Quadratic => 3,
            Self::Cubic => 4,
        }
    }
}

/// What to do with characters the outline source does not map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MissingGlyphPolicy {
    /// Emit nothing and do not advance.
    #[default]
    Skip,
    /// Draw the source's placeholder glyph, or skip if it has none.
    Placeholder,
    /// Stop with [`LayoutError::MissingGlyph`].
    Fail,
}

/// What to do with segments whose degree differs from the curve type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DegreeMismatch {
    /// Emit the segment's control points as they are.
    ///
    /// A quadratic in cubic mode contributes 3 points and a cubic in
    /// quadratic mode 4, so the patches that follow are misaligned.
    #[default]
    Unchanged,
    /// Raise quadratics to cubics exactly and approximate cubics by
    /// quadratics, so every patch has the curve type's size.
    Convert,
}

/// Errors that can occur during layout.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The outline source has no glyph for this character.
    #[error("no glyph for character {0:?}")]
    MissingGlyph(char),
}

/// Parameters of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Patch shape to emit.
    pub curve_type: CurveType,
    /// Horizontal offset added to every glyph before scaling.
    pub origin_shift: f64,
    /// Vertical offset added to every glyph before scaling.
    pub vertical_shift: f64,
    /// Uniform scale applied after the shifts.
    pub glyph_scale: f64,
    /// Handling of unmapped characters.
    pub missing_glyph: MissingGlyphPolicy,
    /// Handling of quadratics in cubic mode and cubics in quadratic mode.
    pub degree_mismatch: DegreeMismatch,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            curve_type: CurveType::default(),
            origin_shift: 0.0,
            vertical_shift: 0.0,
            glyph_scale: 1.0,
            missing_glyph: MissingGlyphPolicy::default(),
            degree_mismatch: DegreeMismatch::default(),
        }
    }
}

impl LayoutConfig {
    /// Transform for a glyph whose origin is `cursor` units along the baseline.
    ///
    /// Maps `(x, y)` to `((x + cursor + origin_shift) * scale, (y + vertical_shift) * scale)`.
    pub fn glyph_transform(&self, cursor: f64) -> Affine {
        Affine::scale(self.glyph_scale)
            * Affine::translate(Vec2::new(cursor + self.origin_shift, self.vertical_shift))
    }
}

/// Lays out `text` and returns the control points of every patch.
pub fn layout<S: OutlineSource + ?Sized>(
    source: &S,
    text: &str,
    config: &LayoutConfig,
) -> Result<Vec<Vertex>, LayoutError> {
    let mut points = Vec::new();
    layout_into(source, text, config, &mut points)?;
    Ok(points)
}

/// Lays out `text`, appending the control points of every patch to `out`.
///
/// Glyphs are placed left to right; each glyph's advance moves the cursor in
/// unscaled units. On error `out` is restored to its original length.
pub fn layout_into<S: OutlineSource + ?Sized>(
    source: &S,
    text: &str,
    config: &LayoutConfig,
    out: &mut Vec<Vertex>,
) -> Result<(), LayoutError> {
    let initial_len = out.len();
    let mut cursor = 0.0;
    for ch in text.chars() {
        let Some(glyph) = resolve(source, ch, config.missing_glyph) else {
            out.truncate(initial_len);
            return Err(LayoutError::MissingGlyph(ch));
        };
        let transform = config.glyph_transform(cursor);
        for segment in glyph.segments() {
            for point in segment_patches(segment, config.curve_type, config.degree_mismatch) {
                out.push(Vertex::from(transform * point));
            }
        }
        cursor += glyph.advance;
    }
    debug!(
        "laid out {} chars as {} points",
        text.chars().count(),
        out.len() - initial_len
    );
    Ok(())
}

// `None` only under `MissingGlyphPolicy::Fail`.
fn resolve<S: OutlineSource + ?Sized>(
    source: &S,
    ch: char,
    policy: MissingGlyphPolicy,
) -> Option<Glyph> {
    if let Some(glyph) = source.glyph(ch) {
        return Some(glyph);
    }
    match policy {
        MissingGlyphPolicy::Skip => {
            warn!("skipping unmapped character {ch:?}");
            Some(Glyph::EMPTY)
        }
        MissingGlyphPolicy::Placeholder => Some(source.placeholder().unwrap_or_else(|| {
            warn!("no placeholder glyph, skipping unmapped character {ch:?}");
            Glyph::EMPTY
        })),
        MissingGlyphPolicy::Fail => None,
    }
}

/// Control points emitted for `segment` in `curve_type` mode.
///
/// Lines are padded to a patch, `p0 p0 p1` for quadratics and `p0 p0 p1 p1`
/// for cubics. Segments of the matching degree are emitted unchanged, and so
/// are the others unless `mismatch` is [`DegreeMismatch::Convert`].
pub fn segment_patches(
    segment: &PathSeg,
    curve_type: CurveType,
    mismatch: DegreeMismatch,
) -> SmallVec<[Point; 4]> {
    let mut points = SmallVec::new();
    match (segment, curve_type, mismatch) {
        (PathSeg::Line(line), CurveType::Quadratic, _) => {
            points.extend([line.p0, line.p0, line.p1]);
        }
        (PathSeg::Line(line), CurveType::Cubic, _) => {
            points.extend([line.p0, line.p0, line.p1, line.p1]);
        }
        (PathSeg::Quad(quad), CurveType::Cubic, DegreeMismatch::Convert) => {
            let cubic = quad.raise();
            points.extend([cubic.p0, cubic.p1, cubic.p2, cubic.p3]);
        }
        (PathSeg::Quad(quad), _, _) => {
            points.extend([quad.p0, quad.p1, quad.p2]);
        }
        (PathSeg::Cubic(cubic), CurveType::Quadratic, DegreeMismatch::Convert) => {
            for (_, _, quad) in cubic.to_quads(QUAD_APPROXIMATION_ACCURACY) {
                points.extend([quad.p0, quad.p1, quad.p2]);
            }
        }
        (PathSeg::Cubic(cubic), _, _) => {
            points.extend([cubic.p0, cubic.p1, cubic.p2, cubic.p3]);
        }
    }
    points
}
