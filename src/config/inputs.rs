//! Host-supplied widget inputs
//!
//! The low-code host hands the widget a bag of configuration values. The bag
//! may not exist yet when the controller is constructed (the host publishes it
//! after first render), so consumers go through an [`InputProvider`] instead of
//! reading ambient state.
//!
//! # Example
//!
//! ```ignore
//! let cell = InputCell::new();
//! let handle = cell.handle();
//!
//! // Host side, once the module inputs resolve:
//! handle.publish(WidgetInputs {
//!     api_key: Some("key".into()),
//!     ..Default::default()
//! });
//!
//! // Widget side:
//! let inputs = cell.ready().await;
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use tokio::sync::watch;

/// Loosely-typed persist value as supplied by the host
///
/// Hosts pass either a real boolean or a string such as `"yes"` or `"0"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersistValue {
    Bool(bool),
    Text(String),
}

/// Configuration bag supplied by the host platform
///
/// Every field is optional: the host may publish a partial bag, and the
/// controller fills in only what is present (see `SessionConfig::merge_inputs`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetInputs {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub secret: Option<String>,
    pub project_id: Option<String>,
    pub title: Option<String>,
    pub chat_name: Option<String>,
    pub text_color: Option<String>,
    pub persist: Option<PersistValue>,
}

static PERSIST_PATTERN: OnceLock<Regex> = OnceLock::new();

fn persist_pattern() -> &'static Regex {
    PERSIST_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(?:true|1|yes|y|on)$").expect("persist pattern is a valid regex")
    })
}

/// Parse the host's loosely-typed persist value into a boolean
///
/// A real boolean passes through. A string is trimmed and accepted
/// case-insensitively against `{true, 1, yes, y, on}`. Anything else,
/// including an absent value, is `false`.
pub fn parse_persist(value: Option<&PersistValue>) -> bool {
    match value {
        Some(PersistValue::Bool(b)) => *b,
        Some(PersistValue::Text(s)) => persist_pattern().is_match(s.trim()),
        None => false,
    }
}

/// Source of host-supplied inputs
///
/// Abstracts over "where the configuration bag comes from" so the controller
/// never reads ambient globals. Implementations must tolerate being asked
/// before the host has published anything.
#[async_trait::async_trait]
pub trait InputProvider: Send + Sync {
    /// The current inputs, if the host has published them yet
    async fn current(&self) -> Option<WidgetInputs>;

    /// Wait until the host publishes inputs, then return them
    async fn ready(&self) -> WidgetInputs;
}

/// Input source backed by a watch channel
///
/// The widget side holds the [`InputCell`]; the host side holds an
/// [`InputHandle`] (obtained via [`handle()`](InputCell::handle)) and calls
/// `publish` once the module inputs resolve. `ready()` suspends instead of
/// spinning while the bag is absent.
pub struct InputCell {
    rx: watch::Receiver<Option<WidgetInputs>>,
    tx: Arc<watch::Sender<Option<WidgetInputs>>>,
}

impl InputCell {
    /// Create a new, initially empty input cell
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(None);
        Self {
            rx,
            tx: Arc::new(tx),
        }
    }

    /// Get a handle for publishing inputs from the host side
    ///
    /// The handle is cheap to clone and can be shared across threads.
    pub fn handle(&self) -> InputHandle {
        InputHandle {
            tx: self.tx.clone(),
        }
    }
}

impl Default for InputCell {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InputProvider for InputCell {
    async fn current(&self) -> Option<WidgetInputs> {
        self.rx.borrow().clone()
    }

    async fn ready(&self) -> WidgetInputs {
        let mut rx = self.rx.clone();
        loop {
            if let Some(inputs) = rx.borrow_and_update().clone() {
                return inputs;
            }
            // Sender side never drops while a cell is alive (the cell holds it)
            if rx.changed().await.is_err() {
                return WidgetInputs::default();
            }
        }
    }
}

/// Handle for publishing inputs into an [`InputCell`]
#[derive(Clone)]
pub struct InputHandle {
    tx: Arc<watch::Sender<Option<WidgetInputs>>>,
}

impl InputHandle {
    /// Publish (or re-publish) the host's configuration bag
    ///
    /// Waiters blocked in `ready()` wake up with the new value.
    pub fn publish(&self, inputs: WidgetInputs) {
        let _ = self.tx.send(Some(inputs));
    }
}

/// Input source wrapping an always-available bag
///
/// Useful for tests and for embedders whose configuration is known up front.
pub struct StaticInputs {
    inputs: WidgetInputs,
}

impl StaticInputs {
    pub fn new(inputs: WidgetInputs) -> Self {
        Self { inputs }
    }
}

#[async_trait::async_trait]
impl InputProvider for StaticInputs {
    async fn current(&self) -> Option<WidgetInputs> {
        Some(self.inputs.clone())
    }

    async fn ready(&self) -> WidgetInputs {
        self.inputs.clone()
    }
}
