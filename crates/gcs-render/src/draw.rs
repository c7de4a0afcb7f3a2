//! Content stream primitives in disc space
//!
//! The page transform flips the y axis, so positive angles turn clockwise on
//! the printed page and text needs a second flip to stay upright.

use crate::constants::*;
use std::f64::consts::TAU;

/// Side of the tick end a label is written on
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum LabelSide {
    Outside,
    Inside,
}

pub(crate) fn set_colour(ops: &mut String, r: f64, g: f64, b: f64) {
    ops.push_str(&format!("{} {} {} RG {} {} {} rg\n", r, g, b, r, g, b));
}

pub(crate) fn set_line_width(ops: &mut String, width: f64) {
    ops.push_str(&format!("{} w\n", width));
}

/// Append an arc from `start` towards increasing angles until `end`.
///
/// `end` is raised by whole turns until it is not below `start`. The path is
/// left open for the caller to stroke.
pub(crate) fn arc(ops: &mut String, radius: f64, start: f64, end: f64) {
    let mut end = end;
    while end < start {
        end += TAU;
    }
    let sweep = end - start;
    let segments = (sweep / MAX_ARC_SEGMENT).ceil().max(1.0) as usize;
    let step = sweep / segments as f64;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    ops.push_str(&format!(
        "{:.5} {:.5} m\n",
        radius * start.cos(),
        radius * start.sin()
    ));
    for i in 0..segments {
        let t0 = start + i as f64 * step;
        let t1 = t0 + step;
        let (s0, c0) = t0.sin_cos();
        let (s1, c1) = t1.sin_cos();
        ops.push_str(&format!(
            "{:.5} {:.5} {:.5} {:.5} {:.5} {:.5} c\n",
            radius * (c0 - k * s0),
            radius * (s0 + k * c0),
            radius * (c1 + k * s1),
            radius * (s1 - k * c1),
            radius * c1,
            radius * s1
        ));
    }
}

pub(crate) fn circle(ops: &mut String, radius: f64) {
    arc(ops, radius, 0.0, TAU);
}

/// Pin mark at the disc centre
pub(crate) fn centre_mark(ops: &mut String) {
    circle(ops, CENTRE_RADIUS);
    let h = CENTRE_CROSS_HALF;
    ops.push_str(&format!("{} 0 m {} 0 l\n", -h, h));
    ops.push_str(&format!("0 {} m 0 {} l\n", -h, h));
}

fn rotate(ops: &mut String, angle: f64) {
    let (s, c) = angle.sin_cos();
    ops.push_str(&format!("{:.6} {:.6} {:.6} {:.6} 0 0 cm\n", c, s, -s, c));
}

/// Radial tick from `from` to `to` at `angle`, with an optional label
pub(crate) fn scale_mark(
    ops: &mut String,
    angle: f64,
    from: f64,
    to: f64,
    label: Option<&str>,
    side: LabelSide,
    label_size: f64,
) {
    ops.push_str("q\n");
    rotate(ops, angle);
    ops.push_str(&format!("{} 0 m {} 0 l S\n", from, to));
    if let Some(text) = label {
        let x = match side {
            LabelSide::Outside => to + OUTSIDE_LABEL_GAP,
            LabelSide::Inside => to - INSIDE_LABEL_OFFSET,
        };
        place_text(ops, x, text, label_size);
    }
    ops.push_str("Q\n");
}

/// Outline of the reading window, along the radius at `angle`
pub(crate) fn cover_box(ops: &mut String, angle: f64, from: f64, to: f64) {
    ops.push_str("q\n");
    rotate(ops, angle);
    ops.push_str(&format!(
        "{} {} {} {} re S\n",
        from,
        -WINDOW_HALF_HEIGHT,
        to - from,
        2.0 * WINDOW_HALF_HEIGHT
    ));
    ops.push_str("Q\n");
}

fn place_text(ops: &mut String, x: f64, text: &str, size: f64) {
    if text.is_empty() {
        return;
    }
    let baseline = LABEL_BASELINE_RATIO * LABEL_HEIGHT_RATIO * size;
    ops.push_str(&format!(
        "BT /F1 {} Tf 1 0 0 -1 {:.5} {:.5} Tm ({}) Tj ET\n",
        size,
        x,
        baseline,
        escape_text(text)
    ));
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '(' | ')' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve_count(ops: &str) -> usize {
        ops.lines().filter(|l| l.ends_with(" c")).count()
    }

    #[test]
    fn test_full_circle_uses_four_segments() {
        let mut ops = String::new();
        circle(&mut ops, 0.5);
        assert_eq!(curve_count(&ops), 4);
        assert!(ops.starts_with("0.50000 0.00000 m"));
    }

    #[test]
    fn test_arc_wraps_backwards_end() {
        // 350 degrees forward, not 10 degrees back
        let mut ops = String::new();
        arc(&mut ops, 1.0, 0.2, 0.2 - 10f64.to_radians());
        assert_eq!(curve_count(&ops), 4);
    }

    #[test]
    fn test_arc_ends_on_radius() {
        let mut ops = String::new();
        arc(&mut ops, 0.4, 0.0, 1.0);
        let last = ops.lines().last().unwrap();
        let fields: Vec<f64> = last
            .split_whitespace()
            .take(6)
            .map(|f| f.parse().unwrap())
            .collect();
        assert!((fields[4] - 0.4 * 1f64.cos()).abs() < 1e-5);
        assert!((fields[5] - 0.4 * 1f64.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_inside_label_starts_before_tick_end() {
        let mut ops = String::new();
        scale_mark(&mut ops, 0.0, 0.386, 0.36, Some("15t"), LabelSide::Inside, 0.02);
        assert!(ops.contains("1 0 0 -1 0.32000"));
        assert!(ops.contains("(15t) Tj"));
    }

    #[test]
    fn test_unlabelled_mark_has_no_text() {
        let mut ops = String::new();
        scale_mark(&mut ops, 1.0, 0.4, 0.41, None, LabelSide::Outside, 0.02);
        assert!(!ops.contains("BT"));
        assert!(ops.contains("0.4 0 m 0.41 0 l S"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a(b)c\\"), "a\\(b\\)c\\\\");
        assert_eq!(escape_text("68\""), "68\"");
    }
}
