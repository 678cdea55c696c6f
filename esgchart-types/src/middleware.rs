use serde::{Deserialize, Serialize};

/// One wrapper in a connector stack, as reported by `ConnectorBuilder::to_stack`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiddlewareLayer {
    /// Layer name, e.g. `CachingConnector`.
    pub name: String,
    /// Layer settings as JSON.
    pub config: serde_json::Value,
}

/// Connector stack description, outermost layer first. The raw connector is last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiddlewareStack {
    /// Layers, outermost first.
    pub layers: Vec<MiddlewareLayer>,
}

impl MiddlewareStack {
    /// Layer names, outermost first.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }
}
