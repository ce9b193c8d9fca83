//! Frame-level layout tests: paint the widget into a recorded frame
//! and assert on the draw commands it produces.

use notationlib::{
    DisplayMode, DrawCommand, Frame, Host, Image, NotationView, OutputPort, Rgba, Scheduler,
    TimerId, ViewOptions,
};

// ═══════════════════════════════════════════════════════════════════════
// Test doubles and helpers
// ═══════════════════════════════════════════════════════════════════════

struct NullPort;

impl OutputPort for NullPort {
    fn send_sequence(&mut self, _values: &[f64]) {}
    fn send_pitch(&mut self, _pitch: f64) {}
}

#[derive(Default)]
struct NullScheduler {
    next_id: u64,
}

impl Scheduler for NullScheduler {
    fn arm(&mut self, _period_ms: f64, _count: usize) -> TimerId {
        self.next_id += 1;
        TimerId(self.next_id)
    }
    fn cancel(&mut self, _id: TimerId) {}
}

/// 450x300 view (aspect 1.5) with the given mode and sequence loaded.
fn view_with_sequence(mode: DisplayMode, values: &[f64]) -> NotationView {
    let options = ViewOptions {
        mode,
        ..ViewOptions::default()
    };
    let mut view = NotationView::with_options(450.0, 300.0, options);
    let mut frame = Frame::new();
    let mut port = NullPort;
    let mut scheduler = NullScheduler::default();
    let mut host = Host {
        surface: &mut frame,
        output: &mut port,
        scheduler: &mut scheduler,
    };
    view.replace_sequence(values, &mut host);
    view
}

fn painted(view: &NotationView) -> Frame {
    let mut frame = Frame::new();
    view.paint(&mut frame);
    frame
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn noteheads(frame: &Frame) -> Vec<(f64, f64, f64)> {
    frame
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Image {
                image: Image::NoteHead,
                x,
                y,
                scale,
            } => Some((*x, *y, *scale)),
            _ => None,
        })
        .collect()
}

fn images_of(frame: &Frame, which: Image) -> Vec<(f64, f64)> {
    frame
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Image { image, x, y, .. } if *image == which => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

fn duration_bars(frame: &Frame) -> Vec<(f64, f64, f64)> {
    frame
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect { x, y, width, .. } => Some((*x, *y, *width)),
            _ => None,
        })
        .collect()
}

fn line_count(frame: &Frame) -> usize {
    frame
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count()
}

fn polygon_count(frame: &Frame) -> usize {
    frame
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
        .count()
}

fn texts(frame: &Frame) -> Vec<(String, f64, f64)> {
    frame
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, x, y, .. } => Some((text.clone(), *x, *y)),
            _ => None,
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Frame structure
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn empty_chord_frame_structure() {
    let view = NotationView::new(450.0, 300.0);
    let frame = painted(&view);

    // Background first: a rounded rect covering the whole widget
    match &frame.commands[0] {
        DrawCommand::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
            color,
        } => {
            assert!(approx(*x, -1.5));
            assert!(approx(*y, 1.0));
            assert!(approx(*width, 3.0));
            assert!(approx(*height, 2.0));
            assert!(approx(*radius, 0.1));
            assert_eq!(*color, Rgba::WHITE);
        }
        other => panic!("Expected background rounded rect first, got {:?}", other),
    }

    // Two "15" octave labels along the left edge
    let labels = texts(&frame);
    assert_eq!(labels.len(), 2);
    for (text, x, _) in &labels {
        assert_eq!(text, "15");
        assert!(approx(*x, -1.5 + 0.04));
    }
    assert!(approx(labels[0].2, 0.55));
    assert!(approx(labels[1].2, -0.53));

    // 20 staff lines plus the slider guide
    assert_eq!(line_count(&frame), 21);
    // Slider marker triangle (chord mode)
    assert_eq!(polygon_count(&frame), 1);

    // Two treble clefs and two bass clefs at height-derived scale
    let trebles = images_of(&frame, Image::TrebleClef);
    let basses = images_of(&frame, Image::BassClef);
    assert_eq!(trebles.len(), 2);
    assert_eq!(basses.len(), 2);
    assert!(approx(trebles[0].0, 0.02) && approx(trebles[0].1, 0.46));
    assert!(approx(trebles[1].1, 0.74));
    assert!(approx(basses[0].1, 1.04));
    assert!(approx(basses[1].1, 1.32));

    // No notes yet
    assert!(noteheads(&frame).is_empty());
    println!("✓ empty frame: {} commands", frame.commands.len());
}

#[test]
fn staff_lines_at_documented_heights() {
    let view = NotationView::new(450.0, 300.0);
    let frame = painted(&view);

    for base in [0.32, 0.04, -0.20, -0.48] {
        for line in 0..5 {
            let y = base + line as f64 * 0.04;
            let found = frame.commands.iter().any(|c| {
                matches!(c, DrawCommand::Line { x1, y1, x2, y2, .. }
                    if approx(*y1, y) && approx(*y2, y) && approx(*x1, -1.5) && approx(*x2, 1.5))
            });
            assert!(found, "missing staff line at y {}", y);
        }
    }
}

#[test]
fn glyph_scale_follows_widget_height() {
    // Height 300 is the reference: scale 0.25. Height 600 doubles it.
    let view = NotationView::new(450.0, 300.0);
    let frame = painted(&view);
    let trebles = images_of(&frame, Image::TrebleClef);
    assert!(!trebles.is_empty());
    let scale_ref = frame.commands.iter().find_map(|c| match c {
        DrawCommand::Image {
            image: Image::TrebleClef,
            scale,
            ..
        } => Some(*scale),
        _ => None,
    });
    assert!(approx(scale_ref.unwrap(), 0.25));

    let tall = NotationView::new(900.0, 600.0);
    let frame = painted(&tall);
    let scale_tall = frame.commands.iter().find_map(|c| match c {
        DrawCommand::Image {
            image: Image::TrebleClef,
            scale,
            ..
        } => Some(*scale),
        _ => None,
    });
    assert!(approx(scale_tall.unwrap(), 0.5));
}

// ═══════════════════════════════════════════════════════════════════════
// Chord layout
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn chord_noteheads_advance_by_spacing_stride() {
    // Reference example: [0, 1, 2, 3] at spacing 1.5 puts noteheads
    // at cursor offsets 0, 0.15, 0.30, 0.45.
    let view = view_with_sequence(DisplayMode::Chord, &[0.0, 1.0, 2.0, 3.0]);
    let frame = painted(&view);
    let heads = noteheads(&frame);
    assert_eq!(heads.len(), 4);

    assert!(approx(heads[0].0, 0.25), "first notehead at the left margin");
    for (i, head) in heads.iter().enumerate() {
        assert!(
            approx(head.0 - heads[0].0, i as f64 * 0.15),
            "notehead {} offset",
            i
        );
    }

    // Pitch classes 1 and 3 carry sharps
    assert_eq!(images_of(&frame, Image::Sharp).len(), 2);
    println!("✓ chord stride: 4 noteheads 0.15 apart");
}

#[test]
fn chord_stride_scales_with_spacing() {
    let options = ViewOptions {
        note_spacing: 0.8,
        ..ViewOptions::default()
    };
    let mut view = NotationView::with_options(450.0, 300.0, options);
    let mut frame = Frame::new();
    let mut port = NullPort;
    let mut scheduler = NullScheduler::default();
    let mut host = Host {
        surface: &mut frame,
        output: &mut port,
        scheduler: &mut scheduler,
    };
    view.replace_sequence(&[60.0, 62.0, 64.0], &mut host);

    let frame = painted(&view);
    let heads = noteheads(&frame);
    assert_eq!(heads.len(), 3);
    for (i, head) in heads.iter().enumerate() {
        assert!(approx(head.0 - heads[0].0, i as f64 * 0.08));
    }
}

#[test]
fn notehead_anchored_in_blit_frame() {
    // Middle C on a 1.5-aspect widget: cursor starts at 0.25 - 1.5,
    // so the blit x is exactly the left margin.
    let view = view_with_sequence(DisplayMode::Chord, &[60.0]);
    let frame = painted(&view);
    let heads = noteheads(&frame);
    assert_eq!(heads.len(), 1);
    assert!(approx(heads[0].0, 0.25));
    assert!(approx(heads[0].1, 0.98));

    // Middle C also gets its single ledger line, in world coordinates
    let ledger = frame.commands.iter().any(|c| {
        matches!(c, DrawCommand::Line { x1, y1, x2, y2, .. }
            if approx(*y1, 0.0) && approx(*y2, 0.0)
                && approx(*x1, -1.27) && approx(*x2, -1.18))
    });
    assert!(ledger, "expected a middle C ledger line");
}

#[test]
fn accidental_images_sit_beside_the_notehead() {
    let view = view_with_sequence(DisplayMode::Chord, &[61.0]);
    let frame = painted(&view);
    let sharps = images_of(&frame, Image::Sharp);
    assert_eq!(sharps.len(), 1);
    assert!(approx(sharps[0].0, 0.25 - 0.05));
    assert!(approx(sharps[0].1, 0.98 - 0.04));

    let view = view_with_sequence(DisplayMode::Chord, &[-13.0]);
    let frame = painted(&view);
    let flats = images_of(&frame, Image::Flat);
    assert_eq!(flats.len(), 1, "negative value respells as a flat");
    // Flat-side glyphs lift a little further than sharp-side ones
    assert!(approx(flats[0].1, 1.52 - 0.06));
}

#[test]
fn text_placeholder_accidental_in_world_coords() {
    let options = ViewOptions {
        microtone: notationlib::Microtone::Eighth,
        ..ViewOptions::default()
    };
    let mut view = NotationView::with_options(450.0, 300.0, options);
    let mut frame = Frame::new();
    let mut port = NullPort;
    let mut scheduler = NullScheduler::default();
    let mut host = Host {
        surface: &mut frame,
        output: &mut port,
        scheduler: &mut scheduler,
    };
    view.replace_sequence(&[60.2], &mut host);

    let frame = painted(&view);
    let placeholder: Vec<_> = texts(&frame)
        .into_iter()
        .filter(|(t, _, _)| t == "V")
        .collect();
    assert_eq!(placeholder.len(), 1);
    // Blit anchor (0.20, 0.94) converted to world space
    assert!(approx(placeholder[0].1, 0.20 - 1.5));
    assert!(approx(placeholder[0].2, 1.0 - 0.94));
    // No accidental imagery for an eighth-tone step
    assert!(images_of(&frame, Image::Sharp).is_empty());
    assert!(images_of(&frame, Image::HalfSharp).is_empty());
}

#[test]
fn collapsed_double_sharp_draws_no_accidental() {
    let view = view_with_sequence(DisplayMode::Chord, &[61.8]);
    let frame = painted(&view);
    assert_eq!(noteheads(&frame).len(), 1);
    assert!(images_of(&frame, Image::Sharp).is_empty());
    assert!(images_of(&frame, Image::HalfSharp).is_empty());
    assert!(images_of(&frame, Image::ThreeQuarterSharp).is_empty());
    let stray: Vec<_> = texts(&frame)
        .into_iter()
        .filter(|(t, _, _)| t != "15")
        .collect();
    assert!(stray.is_empty(), "no placeholder text either: {:?}", stray);
}

#[test]
fn notes_paint_after_the_staves() {
    let view = view_with_sequence(DisplayMode::Chord, &[62.0]);
    let frame = painted(&view);
    let head_idx = frame
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Image { image: Image::NoteHead, .. }))
        .expect("notehead present");
    let last_line_idx = frame
        .commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Line { .. }))
        .unwrap();
    assert!(
        head_idx > last_line_idx,
        "notehead should draw over the staff lines"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Rhythmic layout
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn rhythmic_cursor_advances_by_durations() {
    let view = view_with_sequence(DisplayMode::Rhythmic, &[60.0, 0.5, 62.0, 0.25, 64.0, 1.0]);
    let frame = painted(&view);

    let heads = noteheads(&frame);
    assert_eq!(heads.len(), 3);
    assert!(approx(heads[1].0 - heads[0].0, 0.5));
    assert!(approx(heads[2].0 - heads[1].0, 0.25));

    let bars = duration_bars(&frame);
    assert_eq!(bars.len(), 3);
    assert!(approx(bars[0].2, 0.5 - 0.05));
    assert!(approx(bars[1].2, 0.25 - 0.05));
    assert!(approx(bars[2].2, 1.0 - 0.05));
    // Bars track each note's vertical position
    assert!(approx(bars[0].1, 0.99 - 0.98));
    assert!(approx(bars[1].1, 0.99 - 0.96));
    println!("✓ rhythmic advance: Σ durations");
}

#[test]
fn rhythmic_rest_suppresses_notehead_only() {
    let view = view_with_sequence(DisplayMode::Rhythmic, &[0.0, 0.5, 62.0, 0.5]);
    let frame = painted(&view);

    assert_eq!(noteheads(&frame).len(), 1, "rest draws no notehead");
    let bars = duration_bars(&frame);
    assert_eq!(bars.len(), 2, "rest still draws its duration bar");
    assert!(approx(bars[0].0, -1.25 + 0.01));
    assert!(approx(bars[0].2, 0.45));
}

#[test]
fn rhythmic_frame_has_no_slider() {
    let view = view_with_sequence(DisplayMode::Rhythmic, &[62.0, 0.5]);
    let frame = painted(&view);
    assert_eq!(polygon_count(&frame), 0);
    // Only the 20 staff lines: no slider guide
    assert_eq!(line_count(&frame), 20);
}

// ═══════════════════════════════════════════════════════════════════════
// Slider and background
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn slider_marker_tracks_spacing() {
    let view = NotationView::new(450.0, 300.0);
    let frame = painted(&view);
    // Default spacing 1.5 equals the aspect: marker at center
    let marker = frame.commands.iter().find_map(|c| match c {
        DrawCommand::Polygon { points, .. } => Some(points.clone()),
        _ => None,
    });
    let points = marker.expect("slider marker present");
    assert_eq!(points.len(), 3);
    assert!(approx(points[0].0, 0.0) && approx(points[0].1, -0.9));
    assert!(approx(points[1].0, -0.02) && approx(points[1].1, -0.85));
    assert!(approx(points[2].0, 0.02) && approx(points[2].1, -0.85));

    // Guide line spans ±0.9 * aspect
    let guide = frame.commands.iter().any(|c| {
        matches!(c, DrawCommand::Line { x1, y1, x2, y2, .. }
            if approx(*y1, -0.9) && approx(*y2, -0.9)
                && approx(*x1, -1.35) && approx(*x2, 1.35))
    });
    assert!(guide, "slider guide line present");
}

#[test]
fn background_color_is_honored() {
    let options = ViewOptions {
        background: Rgba::new(0.1, 0.2, 0.3, 1.0),
        ..ViewOptions::default()
    };
    let view = NotationView::with_options(450.0, 300.0, options);
    let frame = painted(&view);
    match &frame.commands[0] {
        DrawCommand::RoundedRect { color, .. } => {
            assert_eq!(*color, Rgba::new(0.1, 0.2, 0.3, 1.0));
        }
        other => panic!("Expected background first, got {:?}", other),
    }
}
