use std::collections::HashMap;

/// Dynamic segment name to captured (percent-decoded) value. A splat capture
/// is stored under `*`.
pub type RouteParams = HashMap<String, String>;

/// Opaque per-route values forwarded untouched to the rendering layer.
pub type ExtraProps = serde_json::Map<String, serde_json::Value>;
