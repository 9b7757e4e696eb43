use super::label::{BreadcrumbComponent, BreadcrumbLabel, deserialize_label};
use crate::resolver::BreadcrumbProps;
use crate::types::ExtraProps;
use serde::Deserialize;

/// A node of the route configuration tree.
///
/// A node carries either a `path` or `index = true`; a pure layout node may
/// omit both as long as it has children. Route trees can be written with the
/// builder methods below or deserialized from JSON, where `"breadcrumb": null`
/// hides the breadcrumb for that route.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Route {
    pub path: Option<String>,
    pub index: bool,
    pub case_sensitive: bool,
    #[serde(deserialize_with = "deserialize_label")]
    pub breadcrumb: Option<BreadcrumbLabel>,
    pub props: ExtraProps,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn index() -> Self {
        Self {
            index: true,
            ..Default::default()
        }
    }

    pub fn layout() -> Self {
        Self::default()
    }

    pub fn breadcrumb<L: Into<BreadcrumbLabel>>(mut self, label: L) -> Self {
        self.breadcrumb = Some(label.into());
        self
    }

    pub fn component<C>(mut self, component: C) -> Self
    where
        C: BreadcrumbComponent + 'static,
    {
        self.breadcrumb = Some(BreadcrumbLabel::component(component));
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&BreadcrumbProps<'_>) -> String + Send + Sync + 'static,
    {
        self.breadcrumb = Some(BreadcrumbLabel::from_fn(render));
        self
    }

    pub fn hidden(mut self) -> Self {
        self.breadcrumb = Some(BreadcrumbLabel::Hidden);
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn prop<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        self.children = children.into_iter().collect();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let route = Route::new("/users")
            .breadcrumb("Users")
            .case_sensitive(true)
            .prop("icon", "people")
            .children([Route::index().breadcrumb("All"), Route::new(":id")]);

        assert_eq!(route.path.as_deref(), Some("/users"));
        assert!(route.case_sensitive);
        assert!(matches!(route.breadcrumb, Some(BreadcrumbLabel::Text(ref t)) if t == "Users"));
        assert_eq!(route.props.get("icon"), Some(&serde_json::json!("people")));
        assert_eq!(route.children.len(), 2);
        assert!(route.children[0].index);
    }

    #[test]
    fn deserializes_labels_from_json() {
        let routes: Vec<Route> = serde_json::from_value(serde_json::json!([
            { "path": "/", "breadcrumb": "Home" },
            { "path": "/secret", "breadcrumb": null },
            { "path": "/plain", "caseSensitive": true },
            { "children": [{ "index": true }], "props": { "tone": "muted" } }
        ]))
        .unwrap();

        assert!(matches!(routes[0].breadcrumb, Some(BreadcrumbLabel::Text(ref t)) if t == "Home"));
        assert!(matches!(routes[1].breadcrumb, Some(BreadcrumbLabel::Hidden)));
        assert!(routes[2].breadcrumb.is_none());
        assert!(routes[2].case_sensitive);
        assert!(routes[3].path.is_none());
        assert!(routes[3].children[0].index);
        assert_eq!(routes[3].props.get("tone"), Some(&serde_json::json!("muted")));
    }
}
