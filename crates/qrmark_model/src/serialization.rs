use std::fs;
use std::path::Path;

use crate::design::ReportDesign;
use crate::errors::SemanticError;

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid design: {0}")]
    Invalid(#[from] SemanticError),
}

pub type SerializationResult<T> = Result<T, SerializationError>;

pub fn save_design(design: &ReportDesign, path: impl AsRef<Path>) -> SerializationResult<()> {
    let json = serde_json::to_string_pretty(design)?;
    fs::write(path, json)?;
    Ok(())
}

/// Loads a design and re-validates every item; a design file carrying an
/// out-of-range width or a blank encoding is rejected.
pub fn load_design(path: impl AsRef<Path>) -> SerializationResult<ReportDesign> {
    let json = fs::read_to_string(path)?;
    let design: ReportDesign = serde_json::from_str(&json)?;
    design.validate()?;
    Ok(design)
}
