// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extracting glyph outlines from font files.

use std::path::{Path, PathBuf};

use log::debug;
use peniko::{Blob, FontData};
use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::ReadError;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use thiserror::Error;

use crate::kurbo::{CubicBez, Line, PathSeg, Point, QuadBez};
use crate::outline::{Contour, Glyph, OutlineSource};

/// Errors that can occur when loading a font.
#[derive(Error, Debug)]
pub enum FontError {
    /// The font file could not be read.
    #[error("failed to read font file {}: {source}", path.display())]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The data is not a font skrifa can read.
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),
}

/// Loads fonts and extracts per-character outlines from them.
///
/// Outlines are unhinted, at the default variation location, and normalized
/// to em units so that a glyph's advance is usually somewhere around `0.5`.
/// They are drawn in font units and divided by the units per em afterwards,
/// since scaled TrueType outlines are rounded to 1/64 of the size.
#[derive(Clone, Debug, Default)]
pub struct GlyphExtractor {
    font: Option<FontData>,
    path: Option<PathBuf>,
}

impl GlyphExtractor {
    /// Creates an extractor with no font loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the font file at `path`, replacing the active font.
    ///
    /// On failure the previously loaded font stays active. Loading the path
    /// that is already active does nothing.
    pub fn load_font(&mut self, path: impl AsRef<Path>) -> Result<(), FontError> {
        let path = path.as_ref();
        if self.font.is_some() && self.path.as_deref() == Some(path) {
            debug!("font {} already loaded", path.display());
            return Ok(());
        }
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_font_data(bytes)?;
        self.path = Some(path.to_path_buf());
        debug!("loaded font {}", path.display());
        Ok(())
    }

    /// Loads a font from memory, replacing the active font.
    ///
    /// On failure the previously loaded font stays active.
    pub fn load_font_data(&mut self, bytes: Vec<u8>) -> Result<(), FontError> {
        FontRef::new(&bytes)?;
        self.font = Some(FontData::new(Blob::from(bytes), 0));
        self.path = None;
        Ok(())
    }

    /// Returns `true` if a font has been loaded successfully.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Path of the active font, if it was loaded from a file.
    pub fn font_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the outline of `ch`.
    ///
    /// The empty glyph is returned when no font is loaded or the font does not
    /// map `ch`.
    pub fn extract(&self, ch: char) -> Glyph {
        self.glyph(ch).unwrap_or(Glyph::EMPTY)
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        let font = self.font.as_ref()?;
        FontRef::from_index(font.data.as_ref(), font.index).ok()
    }

    fn outline(font: &FontRef<'_>, glyph_id: GlyphId) -> Option<Glyph> {
        let size = Size::unscaled();
        let location = LocationRef::default();
        let units_per_em = font.metrics(size, location).units_per_em;
        if units_per_em == 0 {
            return None;
        }
        let em = 1.0 / f64::from(units_per_em);
        let outlines = font.outline_glyphs();
        let outline = outlines.get(glyph_id)?;
        let mut pen = ContourPen::new(em);
        outline
            .draw(DrawSettings::unhinted(size, location), &mut pen)
            .ok()?;
        let advance = GlyphMetrics::new(font, size, location)
            .advance_width(glyph_id)
            .unwrap_or(0.0);
        Some(Glyph::new(pen.finish(), f64::from(advance) * em))
    }
}

impl OutlineSource for GlyphExtractor {
    fn glyph(&self, ch: char) -> Option<Glyph> {
        let font = self.font_ref()?;
        let glyph_id = font.charmap().map(ch)?;
        Self::outline(&font, glyph_id)
    }

    fn placeholder(&self) -> Option<Glyph> {
        let font = self.font_ref()?;
        Self::outline(&font, GlyphId::NOTDEF)
    }
}

/// Collects pen commands into closed contours of segments, multiplying every
/// coordinate by `scale`.
#[derive(Debug)]
struct ContourPen {
    scale: f64,
    contours: Vec<Contour>,
    current: Contour,
    start: Point,
    last: Point,
}

impl ContourPen {
    fn new(scale: f64) -> Self {
        Self {
            scale,
            contours: Vec::new(),
            current: Contour::new(),
            start: Point::ORIGIN,
            last: Point::ORIGIN,
        }
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(f64::from(x) * self.scale, f64::from(y) * self.scale)
    }

    fn finish(mut self) -> Vec<Contour> {
        self.close_contour();
        self.contours
    }

    fn close_contour(&mut self) {
        if self.current.is_empty() {
            return;
        }
        if self.last != self.start {
            self.current
                .push(PathSeg::Line(Line::new(self.last, self.start)));
        }
        self.contours.push(core::mem::take(&mut self.current));
        self.last = self.start;
    }

    fn push(&mut self, segment: PathSeg, end: Point) {
        self.current.push(segment);
        self.last = end;
    }
}

impl OutlinePen for ContourPen {
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        self.close_contour();
        self.start = self.point(x, y);
        self.last = self.start;
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        let end = self.point(x, y);
        self.push(PathSeg::Line(Line::new(self.last, end)), end);
    }

    #[inline]
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        let end = self.point(x, y);
        self.push(
            PathSeg::Quad(QuadBez::new(self.last, self.point(cx, cy), end)),
            end,
        );
    }

    #[inline]
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let end = self.point(x, y);
        self.push(
            PathSeg::Cubic(CubicBez::new(
                self.last,
                self.point(cx0, cy0),
                self.point(cx1, cy1),
                end,
            )),
            end,
        );
    }

    #[inline]
    fn close(&mut self) {
        self.close_contour();
    }
}
