use crate::branch::StructureError;
use crate::pattern::PatternError;
use crate::resolver::OptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BreadcrumbError {
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type BreadcrumbResult<T> = Result<T, BreadcrumbError>;
