use thiserror::Error;

use crate::measure::MeasureId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate group name: {name}")]
    DuplicateGroup { name: String },
    #[error("duplicate measure id {id} in group {group}")]
    DuplicateMeasure { group: String, id: MeasureId },
}

pub type Result<T> = std::result::Result<T, ModelError>;
