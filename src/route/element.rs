use super::{BreadcrumbLabel, Route};
use crate::branch::{StructureError, StructureResult};
use crate::types::ExtraProps;

/// Props accepted by a declarative `<Route>` element.
#[derive(Debug, Clone, Default)]
pub struct RouteProps {
    pub path: Option<String>,
    pub index: bool,
    pub case_sensitive: bool,
    pub breadcrumb: Option<BreadcrumbLabel>,
    pub props: ExtraProps,
}

/// A markup-like element tree describing routes.
#[derive(Debug, Clone)]
pub enum RouteElement {
    Route {
        props: RouteProps,
        children: Vec<RouteElement>,
    },
    Fragment(Vec<RouteElement>),
    /// A conditionally rendered child that evaluated to nothing.
    Empty,
    Other {
        name: String,
    },
}

impl RouteElement {
    pub fn route(props: RouteProps, children: Vec<RouteElement>) -> Self {
        RouteElement::Route { props, children }
    }

    pub fn fragment(children: Vec<RouteElement>) -> Self {
        RouteElement::Fragment(children)
    }

    pub fn other<S: Into<String>>(name: S) -> Self {
        RouteElement::Other { name: name.into() }
    }
}

/// Converts an element tree into the equivalent route configuration.
/// Fragments are spliced into the surrounding level and empty children are
/// skipped; anything else that is not a route is rejected.
pub fn create_routes_from_children(elements: &[RouteElement]) -> StructureResult<Vec<Route>> {
    let mut routes = Vec::with_capacity(elements.len());

    for element in elements {
        match element {
            RouteElement::Route { props, children } => {
                routes.push(Route {
                    path: props.path.clone(),
                    index: props.index,
                    case_sensitive: props.case_sensitive,
                    breadcrumb: props.breadcrumb.clone(),
                    props: props.props.clone(),
                    children: create_routes_from_children(children)?,
                });
            }
            RouteElement::Fragment(children) => {
                routes.extend(create_routes_from_children(children)?);
            }
            RouteElement::Empty => {}
            RouteElement::Other { name } => {
                return Err(StructureError::NonRouteElement { name: name.clone() });
            }
        }
    }

    Ok(routes)
}
