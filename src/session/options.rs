//! Controller configuration
//!
//! The platform shipped several near-identical copies of the widget
//! controller differing only in load behavior. Those variants collapse into
//! one controller parameterized by `ControllerOptions`.

/// Default state store namespace for widget state
pub const DEFAULT_NAMESPACE: &str = "ChatWidget";

/// Configuration for a ChatSessionController
///
/// Use the builder pattern to configure the controller:
///
/// ```ignore
/// let options = ControllerOptions::new()
///     .with_auto_select_agent(false)
///     .with_require_credentials(true);
/// ```
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Resolve the agent list on load, take the first entry, and activate it
    pub auto_select_agent: bool,

    /// Skip remote calls while project id, api key, or secret are missing
    pub require_credentials: bool,

    /// State store namespace the controller writes under
    pub namespace: String,
}

impl ControllerOptions {
    pub fn new() -> Self {
        Self {
            auto_select_agent: true,
            require_credentials: false,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Enable or disable first-agent auto-selection on load
    pub fn with_auto_select_agent(mut self, enabled: bool) -> Self {
        self.auto_select_agent = enabled;
        self
    }

    /// Enable or disable the missing-credentials guard
    ///
    /// When enabled, load bails quietly and agent operations skip their
    /// remote calls until the host supplies project id, api key, and secret.
    pub fn with_require_credentials(mut self, enabled: bool) -> Self {
        self.require_credentials = enabled;
        self
    }

    /// Write widget state under a custom namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::new()
    }
}
