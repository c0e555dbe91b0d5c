//! Navigation payloads attached to search results.
//!
//! The pipeline never inspects a payload beyond [`NavigationPayload::target_id`];
//! constructing one is delegated to a [`PayloadBuilder`].

/// Action opening the details screen of one application.
pub const ACTION_APPLICATION_DETAILS: &str = "android.settings.APPLICATION_DETAILS_SETTINGS";

/// Action of the search trampoline that highlights a top-level menu first.
pub const ACTION_SEARCH_TRAMPOLINE: &str = "com.android.settings.SEARCH_RESULT_TRAMPOLINE";

/// URI scheme naming a package.
pub const PACKAGE_SCHEME: &str = "package";

/// Extra carrying the metrics category of the screen that launched navigation.
pub const EXTRA_SOURCE_METRICS_CATEGORY: &str = ":settings:source_metrics";

/// Metrics category of the search results screen.
pub const DASHBOARD_SEARCH_RESULTS: i32 = 34;

/// Top-level menu key of the apps section.
pub const MENU_KEY_APPS: &str = "top_level_apps";

/// An intent-like navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    /// What to open.
    pub action: String,
    /// Data URI, e.g. `package:com.example.maps`.
    pub data: Option<String>,
    /// Extra key/value pairs in insertion order.
    pub extras: Vec<(String, String)>,
}

impl Intent {
    /// Creates an intent with no data and no extras.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            data: None,
            extras: Vec::new(),
        }
    }

    /// Sets the data URI.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Appends an extra.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.extras.push((key.into(), value.to_string()));
        self
    }

    /// Returns the value of the first extra named `key`.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Opaque navigation data carried by a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPayload {
    target_id: String,
    intent: Intent,
    /// Set when navigation goes through the highlight trampoline.
    trampoline: Option<Intent>,
}

impl NavigationPayload {
    /// Creates a payload opening `intent` for the candidate `target_id`.
    pub fn new(target_id: impl Into<String>, intent: Intent) -> Self {
        Self {
            target_id: target_id.into(),
            intent,
            trampoline: None,
        }
    }

    /// Routes navigation through `trampoline`, keeping `intent` as its target.
    pub fn through(mut self, trampoline: Intent) -> Self {
        self.trampoline = Some(trampoline);
        self
    }

    /// Identifier of the candidate this payload navigates to.
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// The destination intent.
    pub fn target_intent(&self) -> &Intent {
        &self.intent
    }

    /// The intent to launch first: the trampoline if present, else the target.
    pub fn launch_intent(&self) -> &Intent {
        self.trampoline.as_ref().unwrap_or(&self.intent)
    }
}

/// Builds navigation payloads for candidates.
pub trait PayloadBuilder {
    /// Builds the payload for candidate `id` in the given menu context.
    fn build_payload(&self, id: &str, context_tag: &str) -> NavigationPayload;
}

impl<B: PayloadBuilder + ?Sized> PayloadBuilder for &B {
    fn build_payload(&self, id: &str, context_tag: &str) -> NavigationPayload {
        (**self).build_payload(id, context_tag)
    }
}

/// Builds "application details" payloads.
///
/// With `highlight_menu` enabled, the details intent is wrapped in a search
/// trampoline that highlights the `context_tag` menu entry first.
///
/// # Examples
///
/// ```
/// use appsearch::navigation::{AppDetailsPayloadBuilder, MENU_KEY_APPS, PayloadBuilder};
///
/// let builder = AppDetailsPayloadBuilder::default();
/// let payload = builder.build_payload("com.example.maps", MENU_KEY_APPS);
/// assert_eq!(payload.target_id(), "com.example.maps");
/// assert_eq!(payload.launch_intent().data.as_deref(), Some("package:com.example.maps"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppDetailsPayloadBuilder {
    /// Wrap details intents in the highlight trampoline.
    pub highlight_menu: bool,
}

impl PayloadBuilder for AppDetailsPayloadBuilder {
    fn build_payload(&self, id: &str, context_tag: &str) -> NavigationPayload {
        let target = Intent::new(ACTION_APPLICATION_DETAILS)
            .with_data(format!("{PACKAGE_SCHEME}:{id}"))
            .with_extra(EXTRA_SOURCE_METRICS_CATEGORY, DASHBOARD_SEARCH_RESULTS);
        let payload = NavigationPayload::new(id, target);

        if self.highlight_menu {
            let trampoline = Intent::new(ACTION_SEARCH_TRAMPOLINE)
                .with_extra("highlight_menu_key", context_tag)
                .with_extra(EXTRA_SOURCE_METRICS_CATEGORY, DASHBOARD_SEARCH_RESULTS);
            payload.through(trampoline)
        } else {
            payload
        }
    }
}
