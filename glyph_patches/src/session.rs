// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame-driven state that feeds the GPU collaborator.
//!
//! A [`Session`] owns the glyph extractor, the current layout and scroll state,
//! the uniforms and the vertex batch. Commands switch modes atomically; every
//! frame advances the scroll driver and lays the marquee out again.

use bytemuck::{Pod, Zeroable};
use log::{debug, info, warn};

use crate::batch::{ColourScheme, VertexBatch};
use crate::extract::GlyphExtractor;
use crate::figures;
use crate::layout::{
    CurveType, DegreeMismatch, LayoutConfig, LayoutError, MissingGlyphPolicy, layout_into,
};
use crate::mode::{Command, FontCatalog, Mode, TextKind};
use crate::scroll::ScrollConfig;

/// Settings that outlive mode switches.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where the font files live.
    pub fonts: FontCatalog,
    /// String shown by the static text modes.
    pub static_text: String,
    /// String shown by the scrolling text modes.
    pub scrolling_text: String,
    /// Scroll speed at startup.
    pub initial_speed: f64,
    /// Handling of characters the font does not map.
    pub missing_glyph: MissingGlyphPolicy,
    /// Handling of outline segments whose degree differs from the mode's.
    pub degree_mismatch: DegreeMismatch,
}

impl SessionConfig {
    /// Layout policies every mode starts from.
    fn base_layout(&self) -> LayoutConfig {
        LayoutConfig {
            missing_glyph: self.missing_glyph,
            degree_mismatch: self.degree_mismatch,
            ..LayoutConfig::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fonts: FontCatalog::default(),
            static_text: "Glyph Patches".to_owned(),
            scrolling_text: "The quick brown fox jumps over the lazy dog.".to_owned(),
            initial_speed: ScrollConfig::DEFAULT_SPEED,
            missing_glyph: MissingGlyphPolicy::Skip,
            degree_mismatch: DegreeMismatch::Unchanged,
        }
    }
}

/// Uniform block for the tessellation shaders.
///
/// Flags are `0.0` or `1.0`; `cubic` and `quadratic` are mutually exclusive.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    /// Tessellate patches as cubic Beziers.
    pub cubic: f32,
    /// Tessellate patches as quadratic Beziers.
    pub quadratic: f32,
    /// Draw control points and the control polygon.
    pub draw_control_points: f32,
    /// Global scale applied in the vertex shader.
    pub scale_by: f32,
    /// Global horizontal shift applied in the vertex shader.
    pub shift_by: f32,
}

impl Uniforms {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "uniforms are single precision"
    )]
    fn new(curve_type: CurveType, show_control_points: bool, scale_by: f64, shift_by: f64) -> Self {
        let flag = |on: bool| if on { 1.0 } else { 0.0 };
        Self {
            cubic: flag(curve_type == CurveType::Cubic),
            quadratic: flag(curve_type == CurveType::Quadratic),
            draw_control_points: flag(show_control_points),
            scale_by: scale_by as f32,
            shift_by: shift_by as f32,
        }
    }

    /// The curve type selected by the flags.
    pub fn curve_type(&self) -> CurveType {
        if self.cubic != 0.0 {
            CurveType::Cubic
        } else {
            CurveType::Quadratic
        }
    }

    /// Control points per patch for the draw call.
    pub fn patch_vertices(&self) -> u32 {
        match self.curve_type() {
            CurveType::Quadratic => 3,
            CurveType::Cubic => 4,
        }
    }
}

/// Render state driven by commands and frames.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    extractor: GlyphExtractor,
    mode: Mode,
    layout: LayoutConfig,
    scroll: ScrollConfig,
    text: Option<TextKind>,
    colours: ColourScheme,
    uniforms: Uniforms,
    batch: VertexBatch,
}

impl Session {
    /// Creates an idle session with no font loaded.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_extractor(config, GlyphExtractor::new())
    }

    /// Creates an idle session that starts from an already loaded extractor.
    pub fn with_extractor(config: SessionConfig, extractor: GlyphExtractor) -> Self {
        let preset = Mode::Idle.preset(config.initial_speed, config.base_layout());
        Self {
            config,
            extractor,
            mode: Mode::Idle,
            layout: preset.layout,
            scroll: preset.scroll,
            text: preset.text,
            colours: preset.colours,
            uniforms: Uniforms::new(
                preset.layout.curve_type,
                preset.show_control_points,
                preset.scale_by,
                preset.shift_by,
            ),
            batch: VertexBatch::new(),
        }
    }

    /// Applies an input command.
    ///
    /// Mode commands reset layout, scroll position and uniforms together, load
    /// the mode's font and lay it out once. A font that fails to load is
    /// logged and the previous font stays active. Speed commands only change
    /// the scroll speed.
    pub fn apply(&mut self, command: Command) -> Result<(), LayoutError> {
        match command {
            Command::SpeedUp => {
                self.scroll = self.scroll.speed_up();
                debug!("scroll speed {}", self.scroll.speed);
                Ok(())
            }
            Command::SlowDown => {
                self.scroll = self.scroll.slow_down();
                debug!("scroll speed {}", self.scroll.speed);
                Ok(())
            }
            _ => match command.mode() {
                Some(mode) => self.switch(mode),
                None => Ok(()),
            },
        }
    }

    fn switch(&mut self, mode: Mode) -> Result<(), LayoutError> {
        let preset = mode.preset(self.scroll.speed, self.config.base_layout());
        info!("switching to {mode:?}");
        if let Some(face) = preset.face {
            let path = self.config.fonts.path(face);
            if let Err(err) = self.extractor.load_font(&path) {
                warn!("keeping previous font: {err}");
            }
        }
        self.mode = mode;
        self.layout = preset.layout;
        self.scroll = preset.scroll;
        self.text = preset.text;
        self.colours = preset.colours;
        self.uniforms = Uniforms::new(
            preset.layout.curve_type,
            preset.show_control_points,
            preset.scale_by,
            preset.shift_by,
        );
        self.relayout()
    }

    /// Advances one frame.
    ///
    /// While scrolling, the origin shift moves and the whole string is laid
    /// out again; otherwise the batch is left as is.
    pub fn frame(&mut self) -> Result<(), LayoutError> {
        if !self.scroll.is_scrolling() {
            return Ok(());
        }
        self.scroll = self.scroll.advance();
        self.layout.origin_shift = self.scroll.offset;
        self.relayout()
    }

    fn relayout(&mut self) -> Result<(), LayoutError> {
        let points = match self.mode {
            Mode::Idle => Vec::new(),
            Mode::FigureQuadratic => figures::figure_points(&figures::cup(), CurveType::Quadratic),
            Mode::FigureCubic => figures::figure_points(&figures::fish(), CurveType::Cubic),
            Mode::StaticText(_) | Mode::ScrollingText(_) => {
                let text = match self.text {
                    Some(TextKind::Scrolling) => self.config.scrolling_text.as_str(),
                    Some(TextKind::Static) | None => self.config.static_text.as_str(),
                };
                let mut points = Vec::with_capacity(self.batch.len());
                if let Err(err) = layout_into(&self.extractor, text, &self.layout, &mut points) {
                    self.batch.clear();
                    return Err(err);
                }
                points
            }
        };
        self.batch.replace(points, self.colours);
        Ok(())
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The batch produced by the last layout pass.
    ///
    /// Only valid until the next [`Session::apply`] or [`Session::frame`].
    pub fn batch(&self) -> &VertexBatch {
        &self.batch
    }

    /// The uniforms for the current mode.
    pub fn uniforms(&self) -> &Uniforms {
        &self.uniforms
    }

    /// The layout parameters of the last pass.
    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout
    }

    /// The scroll state.
    pub fn scroll(&self) -> &ScrollConfig {
        &self.scroll
    }

    /// The glyph extractor and its active font.
    pub fn extractor(&self) -> &GlyphExtractor {
        &self.extractor
    }

    /// The session settings.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
