use crate::editor::views::RosterView;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub scale: f32,
    pub format: ImageFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            scale: 2.0,
            format: ImageFormat::Png,
        }
    }
}

/// Raster export can genuinely fail (no canvas context, render error).
/// The failure is reported to the caller and never touches roster state.
#[derive(Debug)]
pub enum ExportError {
    CanvasUnavailable,
    RenderFailed(String),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::CanvasUnavailable => write!(f, "canvas context unavailable"),
            ExportError::RenderFailed(reason) => write!(f, "raster render failed: {}", reason),
        }
    }
}

impl Error for ExportError {}

/// Collaborator that turns the current editor snapshot into image bytes.
/// The engine only defines the seam; rendering lives with the host.
pub trait RasterExporter {
    fn export(&mut self, view: &RosterView, options: &ExportOptions) -> Result<Vec<u8>, ExportError>;
}
