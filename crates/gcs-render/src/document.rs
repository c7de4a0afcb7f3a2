//! PDF assembly and output for the wheel variants

use crate::options::RenderOptions;
use crate::types::*;
use crate::wheel::layer_content;
use gcs_scales::ScaleResult;
use lopdf::{Dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

/// Build a single page document holding the layers of `variant`
pub fn build_document(
    result: &ScaleResult,
    options: &RenderOptions,
    variant: Variant,
) -> Result<Document> {
    options.validate()?;

    let page = options.page_size_pt();
    let disc = options.disc_size_pt();
    let centre = page / 2.0;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica-Bold".to_vec())),
    ]));

    // Disc space: unit disc size, origin at the page centre, y pointing down
    let content = format!(
        "q {} 0 0 {} {} {} cm\n{}Q\n",
        disc,
        -disc,
        centre,
        centre,
        layer_content(result, variant.layers(), options.label_size)
    );
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let page_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page),
                Object::Real(page),
            ]),
        ),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]));

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let title = format!("{} ({})", options.title, variant.suffix());
    let info_id = doc.add_object(Dictionary::from_iter(vec![(
        "Title",
        Object::string_literal(title),
    )]));
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

/// Save a document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, RenderError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Render one variant to `path`
pub async fn render_variant(
    result: &ScaleResult,
    options: &RenderOptions,
    variant: Variant,
    path: impl AsRef<Path>,
) -> Result<()> {
    let result = result.clone();
    let options = options.clone();

    let doc =
        tokio::task::spawn_blocking(move || build_document(&result, &options, variant)).await??;
    save_pdf(doc, &path).await?;

    log::info!("Wrote {:?} layout to {}", variant, path.as_ref().display());
    Ok(())
}

/// Render every variant into `dir` as `<prefix>_<variant>.pdf`
pub async fn render_all(
    result: &ScaleResult,
    options: &RenderOptions,
    dir: impl AsRef<Path>,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    render_selected(result, options, &Variant::ALL, dir, prefix).await
}

/// Render the given variants into `dir`
pub async fn render_selected(
    result: &ScaleResult,
    options: &RenderOptions,
    variants: &[Variant],
    dir: impl AsRef<Path>,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::new();
    for &variant in variants {
        let path = dir.join(variant.file_name(prefix));
        render_variant(result, options, variant, &path).await?;
        written.push(path);
    }
    Ok(written)
}
