//! Operating system classification for environment snapshots.

mod detect;

pub use detect::{OsPlatform, os_platform};
