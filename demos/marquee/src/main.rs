// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless marquee driver.
//!
//! Replays a sequence of key presses against a [`Session`], runs a number of
//! frames and prints, as JSON, what a render loop would upload each frame.
//!
//! Key bindings:
//!
//! - `q` / `w`: quadratic / cubic demonstration figure
//! - `a` / `s` / `d`: static text in Source Sans / Lora / Qarmic Sans
//! - `z` / `x` / `c`: scrolling text in Alex Brush / Source Sans / Qarmic Sans
//! - `o` / `p`: slower / faster scrolling

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use glyph_patches::mode::FontCatalog;
use glyph_patches::{
    Command, DegreeMismatch, FontFace, MissingGlyphPolicy, Session, SessionConfig,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Directory containing the font files.
    #[arg(long, default_value = "fonts")]
    fonts: PathBuf,
    /// Key presses to replay before running frames.
    #[arg(long, default_value = "q")]
    keys: String,
    /// Number of frames to run after the key presses.
    #[arg(long, default_value_t = 1)]
    frames: u32,
    /// Print a report every this many frames; the last frame is always reported.
    #[arg(long, default_value_t = 0)]
    every: u32,
    /// String for the static text modes.
    #[arg(long)]
    text: Option<String>,
    /// String for the scrolling text modes.
    #[arg(long)]
    marquee: Option<String>,
    /// What to do with characters the font does not map.
    #[arg(long, value_enum, default_value_t = Missing::Skip)]
    missing: Missing,
    /// Convert curves whose degree differs from the mode's into whole patches.
    #[arg(long)]
    convert_degrees: bool,
    /// Number of leading control points to include in each report.
    #[arg(long, default_value_t = 8)]
    sample: usize,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Missing {
    Skip,
    Placeholder,
    Fail,
}

impl From<Missing> for MissingGlyphPolicy {
    fn from(missing: Missing) -> Self {
        match missing {
            Missing::Skip => Self::Skip,
            Missing::Placeholder => Self::Placeholder,
            Missing::Fail => Self::Fail,
        }
    }
}

fn command_for_key(key: char) -> Option<Command> {
    Some(match key.to_ascii_lowercase() {
        'q' => Command::FigureQuadratic,
        'w' => Command::FigureCubic,
        'a' => Command::StaticText(FontFace::SourceSansSemiboldItalic),
        's' => Command::StaticText(FontFace::LoraBoldItalic),
        'd' => Command::StaticText(FontFace::QarmicSans),
        'z' => Command::ScrollingText(FontFace::AlexBrush),
        'x' => Command::ScrollingText(FontFace::SourceSansSemiboldItalic),
        'c' => Command::ScrollingText(FontFace::QarmicSans),
        'o' => Command::SlowDown,
        'p' => Command::SpeedUp,
        _ => return None,
    })
}

#[derive(Serialize, Debug)]
struct FrameReport {
    frame: u32,
    mode: String,
    font: Option<String>,
    points: usize,
    patches: usize,
    patch_vertices: u32,
    origin_shift: f64,
    scroll_speed: f64,
    uniforms: [f32; 5],
    sample: Vec<[f32; 2]>,
}

impl FrameReport {
    fn new(frame: u32, session: &Session, sample: usize) -> Self {
        let batch = session.batch();
        let uniforms = session.uniforms();
        Self {
            frame,
            mode: format!("{:?}", session.mode()),
            font: session
                .extractor()
                .font_path()
                .map(|path| path.display().to_string()),
            points: batch.len(),
            patches: batch.patch_count(uniforms.curve_type()),
            patch_vertices: uniforms.patch_vertices(),
            origin_shift: session.layout_config().origin_shift,
            scroll_speed: session.scroll().speed,
            uniforms: [
                uniforms.cubic,
                uniforms.quadratic,
                uniforms.draw_control_points,
                uniforms.scale_by,
                uniforms.shift_by,
            ],
            sample: batch
                .points()
                .iter()
                .take(sample)
                .map(|p| [p.x, p.y])
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let defaults = SessionConfig::default();
    let config = SessionConfig {
        fonts: FontCatalog::new(&args.fonts),
        static_text: args.text.unwrap_or(defaults.static_text),
        scrolling_text: args.marquee.unwrap_or(defaults.scrolling_text),
        missing_glyph: args.missing.into(),
        degree_mismatch: if args.convert_degrees {
            DegreeMismatch::Convert
        } else {
            DegreeMismatch::Unchanged
        },
        ..defaults
    };
    if !config.fonts.root().is_dir() {
        log::warn!(
            "font directory {} not found, text modes will be empty",
            config.fonts.root().display()
        );
    }
    let mut session = Session::new(config);

    for key in args.keys.chars() {
        let Some(command) = command_for_key(key) else {
            bail!("no command bound to key {key:?}");
        };
        log::debug!("key {key:?} -> {command:?}");
        session
            .apply(command)
            .with_context(|| format!("applying {command:?}"))?;
    }

    for frame in 1..=args.frames {
        session
            .frame()
            .with_context(|| format!("laying out frame {frame}"))?;
        let due = args.every != 0 && frame % args.every == 0;
        if due || frame == args.frames {
            let report = FrameReport::new(frame, &session, args.sample);
            let json = if args.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
