mod compiled;
mod error;
mod matcher;
mod scoring;

pub use compiled::{CompiledPattern, PathPattern, SPLAT_PARAM, compile_path};
pub use error::{PatternError, PatternResult};
pub use matcher::{PathMatch, match_path};
pub use scoring::compute_score;
