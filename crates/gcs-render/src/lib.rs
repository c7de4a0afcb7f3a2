pub mod constants;
mod document;
mod draw;
mod options;
mod types;
mod wheel;

pub use document::{build_document, render_all, render_selected, render_variant, save_pdf};
pub use options::*;
pub use types::*;
pub use wheel::{format_label, layer_content};
