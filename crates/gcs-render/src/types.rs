use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Physical discs of the wheel, from the rider's side down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// Cadence scale, "GR" mark and speed window
    Top,
    /// Cog scale and "CR" mark
    Middle,
    /// Gear-inch, chainring and speed scales
    Base,
}

/// Output files produced for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// All three discs overlaid, for checking alignment
    Combined,
    Base,
    Middle,
    Top,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Combined,
        Variant::Base,
        Variant::Middle,
        Variant::Top,
    ];

    pub fn layers(self) -> &'static [Layer] {
        match self {
            Variant::Combined => &[Layer::Top, Layer::Middle, Layer::Base],
            Variant::Base => &[Layer::Base],
            Variant::Middle => &[Layer::Middle],
            Variant::Top => &[Layer::Top],
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Combined => "combined",
            Variant::Base => "base",
            Variant::Middle => "middle",
            Variant::Top => "top",
        }
    }

    pub fn file_name(self, prefix: &str) -> String {
        format!("{}_{}.pdf", prefix, self.suffix())
    }
}
