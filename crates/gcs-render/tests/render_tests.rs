use gcs_render::*;
use gcs_scales::{ScaleModel, ScaleResult};
use lopdf::Document;

fn scales() -> ScaleResult {
    ScaleModel::new().compute().unwrap()
}

fn page_content(doc: &Document) -> String {
    let pages = doc.get_pages();
    let page_id = *pages.values().next().unwrap();
    String::from_utf8(doc.get_page_content(page_id).unwrap()).unwrap()
}

/// (cos, sin) of the rotation applied in the `q ... Q` block that writes `label`
fn label_rotation(ops: &str, label: &str) -> (f64, f64) {
    let at = ops
        .find(&format!("({}) Tj", label))
        .unwrap_or_else(|| panic!("no {} label", label));
    let start = ops[..at].rfind("q\n").unwrap();
    let cm = ops[start..at]
        .lines()
        .find(|line| line.ends_with(" cm"))
        .unwrap();
    let fields: Vec<f64> = cm
        .split_whitespace()
        .take(2)
        .map(|f| f.parse().unwrap())
        .collect();
    (fields[0], fields[1])
}

fn assert_rotated_to(ops: &str, label: &str, angle: f64) {
    let (cos, sin) = label_rotation(ops, label);
    assert!(
        (cos - angle.cos()).abs() < 1e-6 && (sin - angle.sin()).abs() < 1e-6,
        "{} rotated by ({}, {}), expected angle {}",
        label,
        cos,
        sin,
        angle
    );
}

#[test]
fn test_variant_layers() {
    assert_eq!(Variant::Combined.layers().len(), 3);
    assert_eq!(Variant::Base.layers(), &[Layer::Base]);
    assert_eq!(Variant::Middle.layers(), &[Layer::Middle]);
    assert_eq!(Variant::Top.layers(), &[Layer::Top]);
    assert_eq!(Variant::Middle.file_name("gcswheel"), "gcswheel_middle.pdf");
}

#[test]
fn test_base_layer_content() {
    let ops = layer_content(&scales(), &[Layer::Base], 0.02);
    assert!(ops.contains("(68\") Tj"));
    assert!(ops.contains("(112\") Tj"));
    assert!(ops.contains("(47t) Tj"));
    assert!(ops.contains("(55) Tj"));
    assert!(!ops.contains("(15t) Tj"));
    assert!(!ops.contains("(CR) Tj"));
    assert!(!ops.contains("(GR) Tj"));
}

#[test]
fn test_middle_layer_content() {
    let ops = layer_content(&scales(), &[Layer::Middle], 0.02);
    assert!(ops.contains("(15t) Tj"));
    assert!(ops.contains("(CR) Tj"));
    assert!(!ops.contains("(47t) Tj"));
    assert!(!ops.contains("(GR) Tj"));
    // Middle cut only
    assert!(ops.contains("0.39300 0.00000 m"));
    assert!(!ops.contains("0.49000 0.00000 m"));
}

#[test]
fn test_top_layer_content() {
    let ops = layer_content(&scales(), &[Layer::Top], 0.02);
    assert!(ops.contains("(GR) Tj"));
    assert!(ops.contains("(150) Tj"));
    assert!(ops.contains(" re S"));
    assert!(!ops.contains("(CR) Tj"));
    assert!(!ops.contains("(12t) Tj"));
}

#[test]
fn test_combined_layer_has_everything() {
    let ops = layer_content(&scales(), Variant::Combined.layers(), 0.02);
    for label in ["(CR)", "(GR)", "(47t)", "(15t)", "(80)", "(35)", "(90\")"] {
        assert!(ops.contains(label), "missing {}", label);
    }
}

#[test]
fn test_build_document_page_size() {
    let options = RenderOptions::default();
    let doc = build_document(&scales(), &options, Variant::Combined).unwrap();
    assert_eq!(doc.get_pages().len(), 1);

    let page_id = *doc.get_pages().values().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let width = media_box[2].as_float().unwrap();
    assert!((width - 283.46457).abs() < 0.01);

    let content = page_content(&doc);
    assert!(content.starts_with("q 226.77"));
    assert!(content.contains("/F1 0.02 Tf"));
}

#[test]
fn test_build_document_rejects_invalid_options() {
    let options = RenderOptions {
        disc_size_mm: 120.0,
        ..Default::default()
    };
    let result = build_document(&scales(), &options, Variant::Top);
    assert!(matches!(result, Err(RenderError::Config(_))));
}

#[tokio::test]
async fn test_render_all_writes_four_files() {
    let dir = tempfile::tempdir().unwrap();
    let written = render_all(&scales(), &RenderOptions::default(), dir.path(), "gcswheel")
        .await
        .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "gcswheel_combined.pdf",
            "gcswheel_base.pdf",
            "gcswheel_middle.pdf",
            "gcswheel_top.pdf",
        ]
    );

    for path in &written {
        let doc = Document::load(path).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}

#[tokio::test]
async fn test_render_selected_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let written = render_selected(
        &scales(),
        &RenderOptions::default(),
        &[Variant::Middle],
        &out,
        "wheel",
    )
    .await
    .unwrap();
    assert_eq!(written, vec![out.join("wheel_middle.pdf")]);
    assert!(written[0].exists());
}

#[test]
fn test_chainring_tick_uses_final_angle() {
    let result = scales();
    let ops = layer_content(&result, &[Layer::Base], 0.02);
    assert_eq!(result.chainring[5].raw, 47);
    assert_rotated_to(&ops, "47t", result.chainring[5].final_angle);
}

#[test]
fn test_cog_ticks_use_final_angle() {
    let result = scales();
    let ops = layer_content(&result, &[Layer::Middle], 0.02);
    for point in &result.cogs {
        assert_rotated_to(&ops, &format!("{}t", point.raw), point.final_angle);
    }
}

#[test]
fn test_tie_marks_use_reference_angles() {
    let result = scales();
    let middle = layer_content(&result, &[Layer::Middle], 0.02);
    assert_rotated_to(&middle, "CR", result.cr_reference_angle);

    let top = layer_content(&result, &[Layer::Top], 0.02);
    assert_rotated_to(&top, "GR", result.sp_reference_angle);

    let combined = layer_content(&result, Variant::Combined.layers(), 0.02);
    assert_rotated_to(&combined, "CR", result.cr_reference_angle);
    assert_rotated_to(&combined, "GR", result.sp_reference_angle);
}

#[test]
fn test_numeric_scales_use_final_angle() {
    let result = scales();
    let base = layer_content(&result, &[Layer::Base], 0.02);
    for point in result.gear_inches.iter().filter(|p| p.raw % 2 == 0) {
        assert_rotated_to(&base, &format!("{}\"", point.raw), point.final_angle);
    }
    for point in result.speed.iter().filter(|p| p.raw % 5 == 0) {
        assert_rotated_to(&base, &point.raw.to_string(), point.final_angle);
    }

    let top = layer_content(&result, &[Layer::Top], 0.02);
    for point in result.cadence.iter().filter(|p| p.raw % 5 == 0) {
        assert_rotated_to(&top, &point.raw.to_string(), point.final_angle);
    }
}
