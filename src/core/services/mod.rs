pub mod bom_service;
pub mod project_service;
pub mod selector_service;

pub use bom_service::{BomError, BomService, COMMIT_QUANTITY};
pub use project_service::{ProjectError, ProjectService};
pub use selector_service::{
    Recommendation, SelectionCriteria, SelectionError, SelectionStage, SelectorService, Voltage,
    FRAME_SIZES, KAIC_OPTIONS,
};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Every recoverable failure a session operation can report. None of them
/// leave partially-applied state behind.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Bom(#[from] BomError),
    #[error(transparent)]
    Project(#[from] ProjectError),
}
