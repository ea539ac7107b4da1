// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertex and colour arrays handed to the GPU.

use bytemuck::{Pod, Zeroable};
use peniko::Color;
use peniko::color::palette::css::{BLUE, LIME, RED, WHITE};

use crate::kurbo::Point;
use crate::layout::CurveType;

/// A control point, as uploaded to the vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl From<Point> for Vertex {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "GPU vertices are single precision"
    )]
    fn from(point: Point) -> Self {
        Self {
            x: point.x as f32,
            y: point.y as f32,
        }
    }
}

/// An RGB vertex colour, as uploaded to the colour buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VertexColour {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl From<Color> for VertexColour {
    fn from(color: Color) -> Self {
        let [r, g, b, _] = color.components;
        Self { r, g, b }
    }
}

/// How colours are assigned to control points.
#[derive(Debug, Clone, Copy)]
pub enum ColourScheme {
    /// Red, green, blue, red, ... starting at index 0.
    ///
    /// Independent of curve structure; makes control points easy to tell apart.
    Cycle,
    /// The same colour for every point.
    Uniform(Color),
}

impl ColourScheme {
    /// Colours of the [`ColourScheme::Cycle`] scheme, in order.
    pub const CYCLE: [Color; 3] = [RED, LIME, BLUE];

    /// Every point in white.
    pub const WHITE: Self = Self::Uniform(WHITE);

    /// The colour of the point at `index`.
    pub fn colour(&self, index: usize) -> VertexColour {
        match self {
            Self::Cycle => Self::CYCLE[index % Self::CYCLE.len()].into(),
            Self::Uniform(color) => (*color).into(),
        }
    }
}

/// Control points paired index for index with their colours.
///
/// The batch is refilled wholesale on every layout pass; data borrowed from it
/// is only valid until the next [`VertexBatch::replace`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBatch {
    points: Vec<Vertex>,
    colours: Vec<VertexColour>,
}

impl VertexBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch from `points`, coloured with `scheme`.
    pub fn assemble(points: Vec<Vertex>, scheme: ColourScheme) -> Self {
        let mut batch = Self::new();
        batch.replace(points, scheme);
        batch
    }

    /// Replaces the contents of the batch with `points`, coloured with `scheme`.
    pub fn replace(&mut self, points: Vec<Vertex>, scheme: ColourScheme) {
        self.points = points;
        self.recolour(scheme);
    }

    fn recolour(&mut self, scheme: ColourScheme) {
        self.colours.clear();
        self.colours
            .extend((0..self.points.len()).map(|index| scheme.colour(index)));
    }

    /// Empties the batch, keeping its allocations.
    pub fn clear(&mut self) {
        self.points.clear();
        self.colours.clear();
    }

    /// Control points, in emission order.
    pub fn points(&self) -> &[Vertex] {
        &self.points
    }

    /// Colours, one per control point.
    pub fn colours(&self) -> &[VertexColour] {
        &self.colours
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the batch has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of complete patches of `curve_type` in the batch.
    pub fn patch_count(&self, curve_type: CurveType) -> usize {
        self.points.len() / curve_type.patch_size()
    }

    /// The point array as raw bytes, for a vertex buffer upload.
    pub fn points_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// The colour array as raw bytes, for a vertex buffer upload.
    pub fn colours_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colours)
    }
}
