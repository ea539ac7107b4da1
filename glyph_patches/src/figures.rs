// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed demonstration curves.
//!
//! These are drawn without a font, with their control points and control
//! polygon visible, to show how the tessellation stage evaluates a patch.

use crate::batch::Vertex;
use crate::kurbo::{CubicBez, PathSeg, QuadBez};
use crate::layout::{CurveType, DegreeMismatch, segment_patches};
use crate::outline::Contour;

const CUP: [[(f64, f64); 3]; 4] = [
    [(1.0, 1.0), (2.0, -1.0), (0.0, -1.0)],
    [(0.0, -1.0), (-2.0, -1.0), (-1.0, 1.0)],
    [(-1.0, 1.0), (0.0, 1.0), (1.0, 1.0)],
    [(1.2, 0.5), (2.5, 1.0), (1.3, -0.4)],
];

const FISH: [[(f64, f64); 4]; 5] = [
    [(1.0, 1.0), (4.0, 0.0), (6.0, 2.0), (9.0, 1.0)],
    [(8.0, 2.0), (0.0, 8.0), (0.0, -2.0), (8.0, 4.0)],
    [(5.0, 3.0), (3.0, 2.0), (3.0, 3.0), (5.0, 2.0)],
    [(3.0, 2.2), (3.5, 2.7), (3.5, 3.3), (3.0, 3.8)],
    [(2.8, 3.5), (2.4, 3.8), (2.4, 3.2), (2.8, 3.5)],
];

/// A teacup with a handle, as four quadratic segments.
pub fn cup() -> Contour {
    CUP.iter()
        .map(|&[p0, p1, p2]| PathSeg::Quad(QuadBez::new(p0, p1, p2)))
        .collect()
}

/// A fish with a fin and an eye, as five cubic segments.
pub fn fish() -> Contour {
    FISH.iter()
        .map(|&[p0, p1, p2, p3]| PathSeg::Cubic(CubicBez::new(p0, p1, p2, p3)))
        .collect()
}

/// Control points of `figure` as untransformed patches of `curve_type`.
///
/// Figures are placed on screen by the global scale and shift uniforms rather
/// than in the vertex data.
pub fn figure_points(figure: &Contour, curve_type: CurveType) -> Vec<Vertex> {
    figure
        .iter()
        .flat_map(|segment| segment_patches(segment, curve_type, DegreeMismatch::Unchanged))
        .map(Vertex::from)
        .collect()
}
