use super::Environment;
use super::checks::{frame_nesting, has_document_global, has_window_global};

/// Returns true if the snapshot describes a browser environment.
///
/// A browser environment exposes both a window-like and a document-like
/// global in its ambient scope. Server-side runtimes and web workers lack
/// one or both; the platform and engine-feature classifiers use this check
/// as a guard and return their conservative defaults outside a browser.
///
/// # Arguments
///
/// * `env` - The environment snapshot to classify.
///
/// # Example
///
/// ```rust
/// use envcaps::environment::{self, Environment, Window};
///
/// let mut env = Environment::default();
/// assert!(!environment::is_browser(&env));
///
/// env.window = Some(Window::default());
/// env.document_present = true;
/// assert!(environment::is_browser(&env));
/// ```
pub fn is_browser(env: &Environment) -> bool {
    has_window_global(env) && has_document_global(env)
}

/// Returns true if the snapshot describes a touch-capable host.
///
/// When the host exposes a media-query interface, the `(pointer: coarse)`
/// result is authoritative, even when it contradicts the reported touch
/// points. Otherwise the check falls back to touch-start event support or a
/// positive maximum touch-point count.
pub fn is_touch_capable(env: &Environment) -> bool {
    if let Some(window) = &env.window {
        if let Some(coarse) = window.coarse_pointer {
            return coarse;
        }
        if window.touch_start {
            return true;
        }
    }
    env.navigator.max_touch_points > 0
}

/// Returns true if the window is framed below another document.
///
/// The underlying probe compares the window's `self` and `top` references
/// and fails when the host denies the access across a security boundary or
/// when no window exists at all. Any probe failure is treated as conclusive
/// evidence of framing and never propagated.
///
/// # Arguments
///
/// * `env` - The environment snapshot to classify.
///
/// # Example
///
/// ```rust
/// use envcaps::environment::{self, Environment, FrameProbe, Window};
///
/// let env = Environment {
///     window: Some(Window {
///         frame: FrameProbe::Denied,
///         ..Window::default()
///     }),
///     document_present: true,
///     ..Environment::default()
/// };
/// assert!(environment::is_in_iframe(&env));
/// ```
pub fn is_in_iframe(env: &Environment) -> bool {
    match frame_nesting(env) {
        Ok(nested) => nested,
        Err(err) => {
            log::warn!("Frame nesting probe failed, assuming a framed window: {}", err);
            true
        }
    }
}

/// Returns true if the host exposes a callable vibration entry point.
pub fn can_vibrate(env: &Environment) -> bool {
    env.navigator.vibrate.is_callable()
}

/// Returns true if the host's base element prototype declares an own
/// `popover` property, i.e. native popover-attribute support.
pub fn supports_popover(env: &Environment) -> bool {
    env.element.popover
}
