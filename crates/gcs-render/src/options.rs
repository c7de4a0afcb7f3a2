use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical sizing of the printed discs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Square page edge
    pub page_size_mm: f32,
    /// Edge of the drawing area; one disc unit
    pub disc_size_mm: f32,
    /// Label font size in disc units
    pub label_size: f64,
    /// Document title written to the PDF info dictionary
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size_mm: DEFAULT_PAGE_SIZE_MM,
            disc_size_mm: DEFAULT_DISC_SIZE_MM,
            label_size: DEFAULT_LABEL_SIZE,
            title: "Gear, speed and cadence wheel".to_string(),
        }
    }
}

impl RenderOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| RenderError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RenderError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.page_size_mm > 0.0) || !(self.disc_size_mm > 0.0) {
            return Err(RenderError::Config(
                "Page and disc sizes must be positive".to_string(),
            ));
        }

        if self.disc_size_mm > self.page_size_mm {
            return Err(RenderError::Config(format!(
                "Disc size {}mm does not fit on a {}mm page",
                self.disc_size_mm, self.page_size_mm
            )));
        }

        if !(self.label_size > 0.0 && self.label_size < 0.1) {
            return Err(RenderError::Config(format!(
                "Label size {} is outside (0, 0.1) disc units",
                self.label_size
            )));
        }

        Ok(())
    }

    pub fn page_size_pt(&self) -> f32 {
        mm_to_pt(self.page_size_mm)
    }

    pub fn disc_size_pt(&self) -> f32 {
        mm_to_pt(self.disc_size_mm)
    }
}
