use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' could not be compiled into a matcher")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
