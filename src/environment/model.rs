//! Snapshot model for the ambient host environment.
//!
//! A snapshot captures everything the classifiers read: which globals exist,
//! what the navigator-like object reports, the outcome of the frame probe,
//! and the element-prototype feature flags. Snapshots are plain data so that
//! every classification is deterministic and testable; hosts (wasm glue,
//! request middleware, fixtures) construct them.

/// Observed relation between a window and the top-level browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameProbe {
    /// The window's `self` and `top` references are identical.
    #[default]
    Top,
    /// The window's `self` and `top` references differ.
    Nested,
    /// The host denied access to the top-level reference across a security
    /// boundary.
    Denied,
}

/// Shape of an optional member exposed by a host object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMember {
    /// The member does not exist on the host object.
    #[default]
    Absent,
    /// The member exists but is not callable.
    Value,
    /// The member is a callable function.
    Callable,
}

impl HostMember {
    /// Returns true if the member is exposed as a callable function.
    pub const fn is_callable(&self) -> bool {
        matches!(self, HostMember::Callable)
    }
}

/// State read off the window-like global, when one exists.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Window {
    /// Result of evaluating the `(pointer: coarse)` media feature, or `None`
    /// when the host exposes no media-query interface.
    pub coarse_pointer: Option<bool>,
    /// Whether the window advertises a touch-start event handler slot.
    pub touch_start: bool,
    /// Outcome of probing the top-level browsing context reference.
    pub frame: FrameProbe,
}

/// State read off the navigator-like capability object.
///
/// The user-agent and platform strings are free-form and untrusted; the
/// classifiers only ever pattern-match them.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Navigator {
    /// Free-form user-agent identifying string.
    pub user_agent: Option<String>,
    /// Legacy platform identifying string (e.g. `MacIntel`, `Win32`).
    pub platform: Option<String>,
    /// Platform reported by the structured user-agent-data interface,
    /// preferred over the legacy string when both are present.
    pub user_agent_data_platform: Option<String>,
    /// Maximum number of simultaneous touch points the host reports.
    pub max_touch_points: u32,
    /// How the vibration entry point is exposed, if at all.
    pub vibrate: HostMember,
}

impl Navigator {
    /// Returns the preferred platform identifying string.
    ///
    /// The structured user-agent-data field wins over the legacy string;
    /// empty strings count as absent.
    pub fn platform_string(&self) -> Option<&str> {
        non_empty(self.user_agent_data_platform.as_deref())
            .or_else(|| non_empty(self.platform.as_deref()))
    }

    /// Returns the user-agent string, treating an empty string as absent.
    pub fn user_agent_str(&self) -> Option<&str> {
        non_empty(self.user_agent.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Feature flags read off the host's base element prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Element {
    /// Whether the prototype declares an own `popover` property.
    pub popover: bool,
}

/// Snapshot of the ambient host environment at a single instant.
///
/// The default snapshot describes a non-browser environment: no window-like
/// or document-like globals, an empty navigator, no element features.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Window-like global, absent outside browser contexts (servers,
    /// workers).
    pub window: Option<Window>,
    /// Whether a document-like global exists in the ambient scope.
    pub document_present: bool,
    /// Navigator-like capability object.
    pub navigator: Navigator,
    /// Base element prototype features.
    pub element: Element,
}
