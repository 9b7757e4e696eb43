use super::Location;
use crate::pattern::{PathMatch, PathPattern};
use crate::route::{BreadcrumbComponent, Route};
use crate::types::{ExtraProps, RouteParams};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone)]
pub struct BreadcrumbMatch<'a> {
    pub params: RouteParams,
    pub pathname: String,
    pub pathname_base: String,
    pub pattern: PathPattern,
    /// The route that matched; `None` for generated breadcrumbs.
    pub route: Option<&'a Route>,
}

impl<'a> BreadcrumbMatch<'a> {
    pub(crate) fn new(path_match: PathMatch, route: Option<&'a Route>) -> Self {
        Self {
            params: path_match.params,
            pathname: path_match.pathname,
            pathname_base: path_match.pathname_base,
            pattern: path_match.pattern,
            route,
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Clone)]
pub enum Breadcrumb<'a> {
    Text(String),
    Component(&'a dyn BreadcrumbComponent),
}

impl Breadcrumb<'_> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Breadcrumb::Text(text) => Some(text),
            Breadcrumb::Component(_) => None,
        }
    }
}

impl fmt::Debug for Breadcrumb<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breadcrumb::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Breadcrumb::Component(_) => f.write_str("Component(..)"),
        }
    }
}

/// What a component label receives when it is rendered.
#[derive(Debug, Clone, Copy)]
pub struct BreadcrumbProps<'a> {
    pub key: &'a str,
    pub route_match: &'a BreadcrumbMatch<'a>,
    pub location: &'a Location,
    pub props: Option<&'a ExtraProps>,
}

impl BreadcrumbProps<'_> {
    pub fn prop(&self, name: &str) -> Option<&serde_json::Value> {
        self.props.and_then(|props| props.get(name))
    }
}

/// One entry of the resolved trail, root first.
#[derive(Debug, Clone)]
pub struct BreadcrumbData<'a> {
    pub key: String,
    pub breadcrumb: Breadcrumb<'a>,
    pub route_match: BreadcrumbMatch<'a>,
    pub location: &'a Location,
    pub props: Option<&'a ExtraProps>,
}

impl BreadcrumbData<'_> {
    pub fn props(&self) -> BreadcrumbProps<'_> {
        BreadcrumbProps {
            key: &self.key,
            route_match: &self.route_match,
            location: self.location,
            props: self.props,
        }
    }

    /// Text labels as-is; component labels rendered against this entry.
    pub fn render(&self) -> Cow<'_, str> {
        match &self.breadcrumb {
            Breadcrumb::Text(text) => Cow::Borrowed(text),
            Breadcrumb::Component(component) => Cow::Owned(component.render(&self.props())),
        }
    }
}
