use crate::resolver::BreadcrumbProps;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::Arc;

/// Something the rendering layer can turn into a breadcrumb, given the
/// resolved match, location and extra props.
pub trait BreadcrumbComponent: Send + Sync {
    fn render(&self, props: &BreadcrumbProps<'_>) -> String;
}

impl<F> BreadcrumbComponent for F
where
    F: Fn(&BreadcrumbProps<'_>) -> String + Send + Sync,
{
    fn render(&self, props: &BreadcrumbProps<'_>) -> String {
        self(props)
    }
}

#[derive(Clone)]
pub enum BreadcrumbLabel {
    Text(String),
    Component(Arc<dyn BreadcrumbComponent>),
    /// The route matches but must not produce a breadcrumb.
    Hidden,
}

impl BreadcrumbLabel {
    pub fn text<S: Into<String>>(text: S) -> Self {
        BreadcrumbLabel::Text(text.into())
    }

    pub fn component<C>(component: C) -> Self
    where
        C: BreadcrumbComponent + 'static,
    {
        BreadcrumbLabel::Component(Arc::new(component))
    }

    pub fn from_fn<F>(render: F) -> Self
    where
        F: Fn(&BreadcrumbProps<'_>) -> String + Send + Sync + 'static,
    {
        BreadcrumbLabel::Component(Arc::new(render))
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, BreadcrumbLabel::Hidden)
    }

    /// An empty text label counts as "not provided".
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, BreadcrumbLabel::Text(text) if text.is_empty())
    }

    pub(crate) fn is_renderable(&self) -> bool {
        !self.is_hidden() && !self.is_blank()
    }
}

impl fmt::Debug for BreadcrumbLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreadcrumbLabel::Text(text) => f.debug_tuple("Text").field(text).finish(),
            BreadcrumbLabel::Component(_) => f.write_str("Component(..)"),
            BreadcrumbLabel::Hidden => f.write_str("Hidden"),
        }
    }
}

impl From<&str> for BreadcrumbLabel {
    fn from(value: &str) -> Self {
        BreadcrumbLabel::Text(value.to_string())
    }
}

impl From<String> for BreadcrumbLabel {
    fn from(value: String) -> Self {
        BreadcrumbLabel::Text(value)
    }
}

/// `"text"` is a literal label and `null` hides the breadcrumb; a missing key
/// never reaches this function and stays `None`.
pub(crate) fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<BreadcrumbLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(Some(match value {
        Some(text) => BreadcrumbLabel::Text(text),
        None => BreadcrumbLabel::Hidden,
    }))
}
