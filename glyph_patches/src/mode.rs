// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering modes and the commands that select them.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use crate::batch::ColourScheme;
use crate::layout::{CurveType, LayoutConfig};
use crate::scroll::ScrollConfig;

/// The fonts the demonstration modes draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Lora Bold Italic, TrueType outlines.
    LoraBoldItalic,
    /// Source Sans Pro Semibold Italic, CFF outlines.
    SourceSansSemiboldItalic,
    /// Qarmic Sans (abridged), TrueType outlines.
    QarmicSans,
    /// Alex Brush, TrueType outlines.
    AlexBrush,
}

impl FontFace {
    /// Default location of the font file, relative to the font directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::LoraBoldItalic => "lora/Lora-BoldItalic.ttf",
            Self::SourceSansSemiboldItalic => "source-sans-pro/SourceSansPro-SemiboldIt.otf",
            Self::QarmicSans => "Qarmic_sans_Abridged.ttf",
            Self::AlexBrush => "alex-brush/AlexBrush-Regular.ttf",
        }
    }

    /// Native outline degree: cubic for CFF fonts, quadratic for TrueType.
    pub fn curve_type(self) -> CurveType {
        match self {
            Self::SourceSansSemiboldItalic => CurveType::Cubic,
            Self::LoraBoldItalic | Self::QarmicSans | Self::AlexBrush => CurveType::Quadratic,
        }
    }
}

/// Where to find the font file for each face.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    root: PathBuf,
    overrides: HashMap<FontFace, PathBuf>,
}

impl FontCatalog {
    /// A catalog that looks for every face under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overrides: HashMap::new(),
        }
    }

    /// Uses `path` for `face` instead of its default location.
    pub fn with_override(mut self, face: FontFace, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(face, path.into());
        self
    }

    /// The font directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the font file for `face`.
    pub fn path(&self, face: FontFace) -> PathBuf {
        self.overrides
            .get(&face)
            .cloned()
            .unwrap_or_else(|| self.root.join(face.file_name()))
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::new("fonts")
    }
}

/// A discrete input command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Show the quadratic demonstration figure.
    FigureQuadratic,
    /// Show the cubic demonstration figure.
    FigureCubic,
    /// Show the static string in a font.
    StaticText(FontFace),
    /// Scroll the marquee string in a font.
    ScrollingText(FontFace),
    /// Scroll faster.
    SpeedUp,
    /// Scroll slower.
    SlowDown,
}

impl Command {
    /// The mode this command switches to, if it switches modes at all.
    pub fn mode(self) -> Option<Mode> {
        match self {
            Self::FigureQuadratic => Some(Mode::FigureQuadratic),
            Self::FigureCubic => Some(Mode::FigureCubic),
            Self::StaticText(face) => Some(Mode::StaticText(face)),
            Self::ScrollingText(face) => Some(Mode::ScrollingText(face)),
            Self::SpeedUp | Self::SlowDown => None,
        }
    }
}

/// What is being drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// The quadratic demonstration figure.
    FigureQuadratic,
    /// The cubic demonstration figure.
    FigureCubic,
    /// A fixed string in a font.
    StaticText(FontFace),
    /// The marquee string in a font.
    ScrollingText(FontFace),
}

/// Which string a text mode lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// The static string.
    Static,
    /// The marquee string.
    Scrolling,
}

/// Everything a mode switch resets, derived from the mode alone.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Layout parameters for text modes.
    pub layout: LayoutConfig,
    /// Scroll state; its speed is the caller's.
    pub scroll: ScrollConfig,
    /// Global scale uniform.
    pub scale_by: f64,
    /// Global shift uniform.
    pub shift_by: f64,
    /// Whether to draw control points and the control polygon.
    pub show_control_points: bool,
    /// Point colours.
    pub colours: ColourScheme,
    /// Font to load, if any.
    pub face: Option<FontFace>,
    /// String to lay out, if any.
    pub text: Option<TextKind>,
}

/// Vertical shift of the static string.
const STATIC_VERTICAL_SHIFT: f64 = -0.4;
/// Origin shift the marquee starts from.
const SCROLL_START: f64 = -0.4;

impl Mode {
    /// The reset values for this mode, keeping the current scroll `speed`.
    ///
    /// The mode's placement overrides `base`; its policies for missing glyphs
    /// and mismatched degrees are kept.
    pub fn preset(self, speed: f64, base: LayoutConfig) -> Preset {
        match self {
            Self::Idle => Preset {
                layout: base,
                scroll: ScrollConfig::fixed(0.0, speed),
                scale_by: 1.0,
                shift_by: 0.0,
                show_control_points: false,
                colours: ColourScheme::WHITE,
                face: None,
                text: None,
            },
            Self::FigureQuadratic => figure(CurveType::Quadratic, 0.35, 0.0, speed, base),
            Self::FigureCubic => figure(CurveType::Cubic, 0.125, -4.5, speed, base),
            Self::StaticText(face) => {
                let (origin_shift, glyph_scale) = match face {
                    FontFace::LoraBoldItalic => (-3.0, 0.25),
                    FontFace::SourceSansSemiboldItalic => (-2.7, 0.30),
                    FontFace::QarmicSans => (-3.3, 0.25),
                    FontFace::AlexBrush => (-2.5, 0.30),
                };
                text(
                    face,
                    LayoutConfig {
                        curve_type: face.curve_type(),
                        origin_shift,
                        vertical_shift: STATIC_VERTICAL_SHIFT,
                        glyph_scale,
                        ..base
                    },
                    ScrollConfig::fixed(origin_shift, speed),
                    TextKind::Static,
                )
            }
            Self::ScrollingText(face) => {
                let (vertical_shift, glyph_scale, reset_threshold) = match face {
                    FontFace::AlexBrush => (-0.3, 1.2, -14.9499),
                    FontFace::SourceSansSemiboldItalic => (-0.3, 1.1, -19.965),
                    FontFace::QarmicSans => (-0.4, 0.9, -25.0238),
                    FontFace::LoraBoldItalic => (-0.3, 1.1, -19.965),
                };
                text(
                    face,
                    LayoutConfig {
                        curve_type: face.curve_type(),
                        origin_shift: SCROLL_START,
                        vertical_shift,
                        glyph_scale,
                        ..base
                    },
                    ScrollConfig::scrolling(SCROLL_START, speed, reset_threshold),
                    TextKind::Scrolling,
                )
            }
        }
    }
}

fn figure(
    curve_type: CurveType,
    scale_by: f64,
    shift_by: f64,
    speed: f64,
    base: LayoutConfig,
) -> Preset {
    Preset {
        layout: LayoutConfig {
            curve_type,
            origin_shift: 0.0,
            vertical_shift: 0.0,
            glyph_scale: 1.0,
            ..base
        },
        scroll: ScrollConfig::fixed(0.0, speed),
        scale_by,
        shift_by,
        show_control_points: true,
        colours: ColourScheme::Cycle,
        face: None,
        text: None,
    }
}

fn text(face: FontFace, layout: LayoutConfig, scroll: ScrollConfig, kind: TextKind) -> Preset {
    Preset {
        layout,
        scroll,
        scale_by: 1.0,
        shift_by: 0.0,
        show_control_points: false,
        colours: ColourScheme::WHITE,
        face: Some(face),
        text: Some(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DegreeMismatch, MissingGlyphPolicy};
    use crate::scroll::ScrollState;

    #[test]
    fn catalog_paths() {
        let catalog = FontCatalog::new("assets")
            .with_override(FontFace::QarmicSans, "/tmp/qarmic.ttf");
        assert_eq!(
            catalog.path(FontFace::AlexBrush),
            Path::new("assets/alex-brush/AlexBrush-Regular.ttf"),
            "default location"
        );
        assert_eq!(
            catalog.path(FontFace::QarmicSans),
            Path::new("/tmp/qarmic.ttf"),
            "override"
        );
    }

    #[test]
    fn figure_presets() {
        let cup = Mode::FigureQuadratic.preset(0.05, LayoutConfig::default());
        assert_eq!(cup.layout.curve_type, CurveType::Quadratic, "cup is quadratic");
        assert_eq!(cup.scale_by, 0.35, "cup scale");
        assert!(cup.show_control_points, "control points visible");
        assert!(matches!(cup.colours, ColourScheme::Cycle), "cycled colours");
        assert!(cup.face.is_none(), "no font");

        let fish = Mode::FigureCubic.preset(0.05, LayoutConfig::default());
        assert_eq!(fish.layout.curve_type, CurveType::Cubic, "fish is cubic");
        assert_eq!(fish.shift_by, -4.5, "fish shift");
    }

    #[test]
    fn static_text_presets() {
        let preset = Mode::StaticText(FontFace::SourceSansSemiboldItalic)
            .preset(0.05, LayoutConfig::default());
        assert_eq!(preset.layout.curve_type, CurveType::Cubic, "CFF outlines");
        assert_eq!(preset.layout.origin_shift, -2.7, "origin shift");
        assert_eq!(preset.layout.vertical_shift, -0.4, "vertical shift");
        assert_eq!(preset.scroll.state, ScrollState::Static, "static");
        assert_eq!(preset.text, Some(TextKind::Static), "static string");
    }

    #[test]
    fn scrolling_text_presets() {
        let base = LayoutConfig {
            missing_glyph: MissingGlyphPolicy::Fail,
            degree_mismatch: DegreeMismatch::Convert,
            ..LayoutConfig::default()
        };
        let preset = Mode::ScrollingText(FontFace::AlexBrush).preset(0.07, base);
        assert_eq!(preset.layout.curve_type, CurveType::Quadratic, "TrueType outlines");
        assert_eq!(preset.layout.glyph_scale, 1.2, "scale");
        assert_eq!(preset.layout.missing_glyph, MissingGlyphPolicy::Fail, "policy kept");
        assert_eq!(preset.layout.degree_mismatch, DegreeMismatch::Convert, "conversion kept");
        assert_eq!(preset.scroll.state, ScrollState::Scrolling, "scrolling");
        assert_eq!(preset.scroll.offset, -0.4, "start offset");
        assert_eq!(preset.scroll.reset_threshold, -14.9499, "threshold");
        assert_eq!(preset.scroll.speed, 0.07, "speed carried over");
    }

    #[test]
    fn speed_commands_do_not_switch_modes() {
        assert!(Command::SpeedUp.mode().is_none(), "speed up");
        assert!(Command::SlowDown.mode().is_none(), "slow down");
        assert_eq!(
            Command::StaticText(FontFace::QarmicSans).mode(),
            Some(Mode::StaticText(FontFace::QarmicSans)),
            "text mode"
        );
    }
}
