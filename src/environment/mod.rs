//! Environment snapshot model and capability detection.
//!
//! Classifies a host environment snapshot: browser or not, touch capability,
//! iframe nesting, vibration support, and popover support.
mod checks;
mod detect;
mod error;
mod model;

pub use detect::{can_vibrate, is_browser, is_in_iframe, is_touch_capable, supports_popover};
pub use error::{Error, Result};
pub use model::{Element, Environment, FrameProbe, HostMember, Navigator, Window};
