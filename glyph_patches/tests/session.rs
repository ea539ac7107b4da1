// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a session the way a render loop does.

use glyph_patches::mode::FontCatalog;
use glyph_patches::{
    Command, CurveType, FontFace, LayoutError, MissingGlyphPolicy, Mode, ScrollConfig,
    ScrollState, Session, SessionConfig,
};

fn session(missing_glyph: MissingGlyphPolicy) -> Session {
    Session::new(SessionConfig {
        fonts: FontCatalog::new("tests/no-such-font-dir"),
        missing_glyph,
        ..SessionConfig::default()
    })
}

#[test]
fn figure_modes_fill_cycled_batches() {
    let mut session = session(MissingGlyphPolicy::Skip);
    session.apply(Command::FigureQuadratic).unwrap();
    let batch = session.batch();
    assert_eq!(batch.len(), 12, "cup control points");
    assert_eq!(batch.colours().len(), batch.len(), "one colour per point");
    assert_eq!(batch.patch_count(CurveType::Quadratic), 4, "four patches");
    assert_eq!(session.uniforms().patch_vertices(), 3, "quadratic patches");
    assert_eq!(session.uniforms().scale_by, 0.35, "cup scale");
    assert_eq!(session.uniforms().draw_control_points, 1.0, "points visible");
    let first = batch.colours()[0];
    assert!(first.r > 0.99 && first.g < 0.01, "cycle starts at red: {first:?}");

    session.apply(Command::FigureCubic).unwrap();
    assert_eq!(session.batch().len(), 20, "fish replaces the cup");
    assert_eq!(session.uniforms().patch_vertices(), 4, "cubic patches");
    assert_eq!(session.uniforms().shift_by, -4.5, "fish shift");
}

#[test]
fn missing_font_is_not_fatal() {
    let mut session = session(MissingGlyphPolicy::Skip);
    session
        .apply(Command::StaticText(FontFace::LoraBoldItalic))
        .unwrap();
    assert_eq!(session.mode(), Mode::StaticText(FontFace::LoraBoldItalic), "mode switched");
    assert!(!session.extractor().has_font(), "no font loaded");
    assert!(session.batch().is_empty(), "every character skipped");
    assert_eq!(session.uniforms().draw_control_points, 0.0, "text hides points");
}

#[test]
fn strict_policy_reports_the_first_missing_character() {
    let mut session = session(MissingGlyphPolicy::Fail);
    session.apply(Command::FigureCubic).unwrap();
    let err = session
        .apply(Command::StaticText(FontFace::QarmicSans))
        .unwrap_err();
    assert_eq!(err, LayoutError::MissingGlyph('G'), "first character of the static string");
    assert!(session.batch().is_empty(), "no stale figure points");
}

#[test]
fn scrolling_moves_every_frame_and_static_does_not() {
    let mut session = session(MissingGlyphPolicy::Skip);
    session
        .apply(Command::ScrollingText(FontFace::AlexBrush))
        .unwrap();
    assert_eq!(session.scroll().state, ScrollState::Scrolling, "scrolling");
    let start = session.scroll().offset;
    for _ in 0..10 {
        session.frame().unwrap();
    }
    let moved = start - session.scroll().offset;
    assert!((moved - 10.0 * 0.1 * 0.05).abs() < 1e-9, "moved {moved}");
    assert_eq!(
        session.layout_config().origin_shift,
        session.scroll().offset,
        "layout follows the scroll offset"
    );

    session
        .apply(Command::StaticText(FontFace::AlexBrush))
        .unwrap();
    assert_eq!(session.scroll().state, ScrollState::Static, "static");
    assert_eq!(session.layout_config().origin_shift, -2.5, "offset reset with the mode");
    session.frame().unwrap();
    assert_eq!(session.layout_config().origin_shift, -2.5, "static does not move");
}

#[test]
fn marquee_wraps_at_the_threshold() {
    let mut session = session(MissingGlyphPolicy::Skip);
    session
        .apply(Command::ScrollingText(FontFace::AlexBrush))
        .unwrap();
    let mut wrapped = false;
    for _ in 0..3_000 {
        session.frame().unwrap();
        let offset = session.scroll().offset;
        assert!(offset >= session.scroll().reset_threshold, "{offset} below threshold");
        wrapped |= offset == ScrollConfig::RESTART;
    }
    assert!(wrapped, "restarted within 3000 frames");
}

#[test]
fn speed_survives_mode_switches_and_is_clamped() {
    let mut session = session(MissingGlyphPolicy::Skip);
    session.apply(Command::SpeedUp).unwrap();
    session.apply(Command::SpeedUp).unwrap();
    session
        .apply(Command::ScrollingText(FontFace::QarmicSans))
        .unwrap();
    assert!((session.scroll().speed - 0.07).abs() < 1e-12, "speed kept");
    for _ in 0..20 {
        session.apply(Command::SlowDown).unwrap();
    }
    assert_eq!(session.scroll().speed, ScrollConfig::MIN_SPEED, "clamped");
}

#[test]
fn cff_face_uses_cubic_patches() {
    let mut session = session(MissingGlyphPolicy::Skip);
    session
        .apply(Command::StaticText(FontFace::SourceSansSemiboldItalic))
        .unwrap();
    assert_eq!(session.uniforms().patch_vertices(), 4, "cubic patches");
    assert_eq!(session.uniforms().cubic, 1.0, "cubic flag");
    assert_eq!(session.uniforms().quadratic, 0.0, "quadratic flag");
}

#[test]
fn text_modes_draw_with_the_loaded_font() {
    let font = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/assets/test_font.ttf");
    let mut session = Session::new(SessionConfig {
        fonts: FontCatalog::new("tests/no-such-font-dir")
            .with_override(FontFace::QarmicSans, &font),
        static_text: "AO".to_owned(),
        scrolling_text: "O A".to_owned(),
        ..SessionConfig::default()
    });
    session
        .apply(Command::StaticText(FontFace::QarmicSans))
        .unwrap();
    assert_eq!(session.extractor().font_path(), Some(font.as_path()), "font loaded");
    let batch = session.batch();
    assert_eq!(batch.len(), 6 * 3 + 4 * 3, "lines padded, arcs unchanged");
    assert_eq!(batch.patch_count(CurveType::Quadratic), 10, "whole patches");
    let white = batch.colours()[0];
    assert!(white.r > 0.99 && white.g > 0.99 && white.b > 0.99, "text is white");

    session
        .apply(Command::ScrollingText(FontFace::QarmicSans))
        .unwrap();
    let before = session.batch().points()[0];
    session.frame().unwrap();
    let after = session.batch().points()[0];
    assert_eq!(session.batch().len(), 4 * 3 + 6 * 3, "same string every frame");
    assert!(after.x < before.x, "marquee moves left");
    assert_eq!(after.y, before.y, "and only left");

    session
        .apply(Command::StaticText(FontFace::AlexBrush))
        .unwrap();
    assert_eq!(session.extractor().font_path(), Some(font.as_path()), "previous font kept");
    assert_eq!(session.batch().len(), 6 * 3 + 4 * 3, "drawn with the previous font");
}
