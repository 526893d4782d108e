use super::{Environment, Error, FrameProbe, Result};

/// Returns true if a window-like global exists in the snapshot's ambient
/// scope.
pub fn has_window_global(env: &Environment) -> bool {
    env.window.is_some()
}

/// Returns true if a document-like global exists in the snapshot's ambient
/// scope.
pub fn has_document_global(env: &Environment) -> bool {
    env.document_present
}

/// Returns whether the window is nested below a distinct top-level browsing
/// context.
///
/// # Arguments
///
/// * `env` - The environment snapshot to probe.
///
/// # Returns
///
/// * `Ok(true)` if the window's `self` and `top` references differ.
/// * `Ok(false)` if they are identical.
///
/// # Errors
///
/// * [`Error::MissingWindow`] if the snapshot has no window-like global, so
///   there are no references to compare.
/// * [`Error::FrameAccessDenied`] if the host denied access to the top-level
///   reference across a security boundary.
pub fn frame_nesting(env: &Environment) -> Result<bool> {
    let window = env.window.as_ref().ok_or(Error::MissingWindow)?;

    match window.frame {
        FrameProbe::Top => Ok(false),
        FrameProbe::Nested => Ok(true),
        FrameProbe::Denied => Err(Error::FrameAccessDenied),
    }
}
