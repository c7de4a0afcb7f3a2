pub mod constants;
mod scales;
mod types;

pub use scales::ScaleModel;
pub use types::*;
