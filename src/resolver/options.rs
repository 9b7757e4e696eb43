use super::humanize;
use crate::pattern::{PathPattern, PatternError, compile_path};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Replaces the built-in humanization of raw segments.
pub type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreadcrumbOptions {
    /// Never generate labels; only routes with an explicit label show up.
    pub disable_defaults: bool,
    /// Patterns whose fully matching sections produce no breadcrumb.
    pub exclude_paths: Vec<String>,
    #[serde(skip)]
    pub default_formatter: Option<Formatter>,
}

impl BreadcrumbOptions {
    pub fn builder() -> BreadcrumbOptionsBuilder {
        BreadcrumbOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        for path in &self.exclude_paths {
            compile_path(&PathPattern::new(path.as_str())).map_err(|source| {
                OptionsError::InvalidExcludePath {
                    path: path.clone(),
                    source,
                }
            })?;
        }
        Ok(())
    }

    pub(crate) fn format_label(&self, text: &str) -> String {
        match &self.default_formatter {
            Some(formatter) => formatter(text),
            None => humanize(text),
        }
    }
}

impl fmt::Debug for BreadcrumbOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadcrumbOptions")
            .field("disable_defaults", &self.disable_defaults)
            .field("exclude_paths", &self.exclude_paths)
            .field(
                "default_formatter",
                &self.default_formatter.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

#[derive(Debug, Default, Clone)]
pub struct BreadcrumbOptionsBuilder {
    options: BreadcrumbOptions,
}

impl BreadcrumbOptionsBuilder {
    pub fn disable_defaults(mut self, value: bool) -> Self {
        self.options.disable_defaults = value;
        self
    }

    pub fn exclude_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclude_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_path<S: Into<String>>(mut self, path: S) -> Self {
        self.options.exclude_paths.push(path.into());
        self
    }

    pub fn default_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.options.default_formatter = Some(Arc::new(formatter));
        self
    }

    pub fn build(self) -> Result<BreadcrumbOptions, OptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("exclude path '{path}' is not a valid route pattern")]
    InvalidExcludePath {
        path: String,
        #[source]
        source: PatternError,
    },
}
