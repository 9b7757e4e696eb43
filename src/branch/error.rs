use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error(
        "`path` or `index` must be provided in every route object (child {index} of '{parent}')"
    )]
    MissingPathOrIndex { parent: String, index: usize },
    #[error("`path` and `index` cannot be provided at the same time (path '{path}')")]
    PathAndIndexConflict { path: String },
    #[error(
        "the absolute path '{path}' of the child route must start with the parent path '{parent}'"
    )]
    AbsolutePathOutsideParent { path: String, parent: String },
    #[error("index route cannot have child routes (under '{parent}')")]
    IndexWithChildren { parent: String },
    #[error("<{name}> is not a route element; only routes and fragments may describe routes")]
    NonRouteElement { name: String },
}

pub type StructureResult<T> = Result<T, StructureError>;
