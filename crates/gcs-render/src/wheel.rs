//! Layer composition for the gear/speed/cadence wheel

use crate::constants::*;
use crate::draw::{self, LabelSide};
use crate::types::Layer;
use gcs_scales::{Axis, ScaleResult};

/// Tick geometry for one scale
struct ScaleStyle {
    radius: f64,
    major_end: f64,
    minor_end: f64,
    side: LabelSide,
}

impl ScaleStyle {
    fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::GearInches | Axis::ChainringTeeth | Axis::Speed => Self {
                radius: BASE_SCALE_RADIUS,
                major_end: BASE_MAJOR_END,
                minor_end: BASE_MINOR_END,
                side: LabelSide::Outside,
            },
            Axis::CogTeeth => Self {
                radius: INNER_SCALE_RADIUS,
                major_end: INNER_MAJOR_END,
                minor_end: INNER_MAJOR_END,
                side: LabelSide::Inside,
            },
            Axis::Cadence => Self {
                radius: INNER_SCALE_RADIUS,
                major_end: INNER_MAJOR_END,
                minor_end: CADENCE_MINOR_END,
                side: LabelSide::Inside,
            },
        }
    }
}

/// Label printed next to a tick, or `None` for a minor tick
pub fn format_label(axis: Axis, raw: i32) -> Option<String> {
    match axis {
        Axis::GearInches => (raw % 2 == 0).then(|| format!("{}\"", raw)),
        Axis::ChainringTeeth | Axis::CogTeeth => Some(format!("{}t", raw)),
        Axis::Speed | Axis::Cadence => (raw % 5 == 0).then(|| raw.to_string()),
    }
}

fn draw_scale(ops: &mut String, result: &ScaleResult, axis: Axis, label_size: f64) {
    let style = ScaleStyle::for_axis(axis);
    if let Some((start, end)) = result.angular_range(axis) {
        draw::arc(ops, style.radius, start, end);
        ops.push_str("S\n");
    }
    for point in result.series(axis) {
        let label = format_label(axis, point.raw);
        let end = if label.is_some() {
            style.major_end
        } else {
            style.minor_end
        };
        draw::scale_mark(
            ops,
            point.final_angle,
            style.radius,
            end,
            label.as_deref(),
            style.side,
            label_size,
        );
    }
}

/// Content stream for the selected layers, in disc space.
///
/// The caller supplies the page transform and the `/F1` font resource.
pub fn layer_content(result: &ScaleResult, layers: &[Layer], label_size: f64) -> String {
    let has = |layer: Layer| layers.contains(&layer);
    let mut ops = String::new();

    ops.push_str("1 J 1 j\n");
    draw::set_colour(&mut ops, 0.0, 0.0, 0.0);
    draw::set_line_width(&mut ops, CUT_LINE_WIDTH);

    if has(Layer::Middle) {
        draw::circle(&mut ops, MIDDLE_CUT_RADIUS);
    }
    if has(Layer::Base) || has(Layer::Top) {
        draw::circle(&mut ops, OUTER_CUT_RADIUS);
    }
    draw::centre_mark(&mut ops);
    ops.push_str("S\n");

    draw::set_line_width(&mut ops, SCALE_LINE_WIDTH);

    if has(Layer::Base) {
        draw_scale(&mut ops, result, Axis::GearInches, label_size);
        draw_scale(&mut ops, result, Axis::ChainringTeeth, label_size);
    }

    if has(Layer::Middle) {
        draw_scale(&mut ops, result, Axis::CogTeeth, label_size);
        draw::scale_mark(
            &mut ops,
            result.cr_reference_angle,
            INNER_SCALE_RADIUS,
            INNER_MAJOR_END,
            Some("CR"),
            LabelSide::Inside,
            label_size,
        );
    }

    // Speed, cadence and gear marks are printed in blue
    draw::set_colour(&mut ops, 0.0, 0.0, 1.0);

    if has(Layer::Top) {
        draw::scale_mark(
            &mut ops,
            result.sp_reference_angle,
            GEAR_MARK_START,
            GEAR_MARK_END,
            Some("GR"),
            LabelSide::Inside,
            label_size,
        );
        draw::cover_box(&mut ops, result.sp_reference_angle, GEAR_MARK_START, WINDOW_OUTER);
        draw_scale(&mut ops, result, Axis::Cadence, label_size);
    }

    if has(Layer::Base) {
        draw_scale(&mut ops, result, Axis::Speed, label_size);
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcs_scales::ScaleModel;

    #[test]
    fn test_labels() {
        assert_eq!(format_label(Axis::GearInches, 68).as_deref(), Some("68\""));
        assert_eq!(format_label(Axis::GearInches, 69), None);
        assert_eq!(format_label(Axis::CogTeeth, 15).as_deref(), Some("15t"));
        assert_eq!(format_label(Axis::Speed, 40).as_deref(), Some("40"));
        assert_eq!(format_label(Axis::Cadence, 93), None);
    }

    #[test]
    fn test_minor_cadence_ticks_are_shorter() {
        let result = ScaleModel::new().compute().unwrap();
        let ops = layer_content(&result, &[Layer::Top], 0.02);
        assert_eq!(ops.matches("0.386 0 m 0.373 0 l S").count(), 71 - 15);
        assert_eq!(ops.matches("0.386 0 m 0.36 0 l S").count(), 15);
    }
}
