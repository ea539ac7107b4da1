// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Patches turns font outlines into control points for GPU tessellation.
//!
//! A string is laid out along a baseline, glyph by glyph, and every outline
//! segment is emitted as a fixed-size patch: 3 points when tessellating
//! quadratic Beziers, 4 points when tessellating cubics. Straight lines are
//! padded so that a single tessellation configuration can draw the whole run;
//! curves of the other degree can optionally be converted as well.
//!
//! The pipeline, leaf to root:
//!
//! - [`extract`]: loads a font with `skrifa` and returns per-character [`Glyph`]s.
//! - [`layout`]: positions glyphs and emits patches as [`Vertex`] points.
//! - [`batch`]: pairs points with colours in flat, GPU-ready arrays.
//! - [`scroll`]: the per-frame marquee offset.
//! - [`session`]: ties everything together behind discrete [`Command`]s.
//!
//! ```ignore
//! use glyph_patches::{Command, FontFace, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default());
//! session.apply(Command::ScrollingText(FontFace::AlexBrush));
//! loop {
//!     session.frame();
//!     let batch = session.batch();
//!     upload(batch.points_bytes(), batch.colours_bytes(), session.uniforms());
//! }
//! ```
//!
//! [`Glyph`]: outline::Glyph
//! [`Vertex`]: batch::Vertex
//! [`Command`]: mode::Command

pub mod batch;
pub mod extract;
pub mod figures;
pub mod layout;
pub mod mode;
pub mod outline;
pub mod scroll;
pub mod session;

pub use peniko;
pub use peniko::color;
pub use peniko::kurbo;

pub use batch::{ColourScheme, Vertex, VertexBatch, VertexColour};
pub use extract::{FontError, GlyphExtractor};
pub use layout::{
    CurveType, DegreeMismatch, LayoutConfig, LayoutError, MissingGlyphPolicy, layout, layout_into,
};
pub use mode::{Command, FontFace, Mode};
pub use outline::{Contour, Glyph, GlyphTable, OutlineSource};
pub use scroll::{ScrollConfig, ScrollState};
pub use session::{Session, SessionConfig, Uniforms};
