use serde::{Deserialize, Serialize};

/// Snapshot of the current location as provided by the navigation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub pathname: String,
    pub state: serde_json::Value,
}

impl Location {
    pub fn new<S: Into<String>>(pathname: S) -> Self {
        Self {
            pathname: pathname.into(),
            state: serde_json::Value::Null,
        }
    }

    pub fn with_state(mut self, state: serde_json::Value) -> Self {
        self.state = state;
        self
    }
}

impl From<&str> for Location {
    fn from(pathname: &str) -> Self {
        Location::new(pathname)
    }
}
