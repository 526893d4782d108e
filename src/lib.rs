//! Envcaps: capability detection over host environment snapshots.
//!
//! This library classifies a serializable [`environment::Environment`]
//! snapshot instead of reading ambient globals: whether the snapshot is a
//! browser, its touch and vibration capabilities, iframe nesting, the
//! operating system it runs on, and which legacy engine features its
//! user-agent string implies.
//!
//! # Example
//!
//! ```rust
//! use envcaps::environment::{self, Environment};
//! use envcaps::platform::{self, OsPlatform};
//!
//! // An empty snapshot describes a non-browser host.
//! let env = Environment::default();
//! assert!(!environment::is_browser(&env));
//! assert_eq!(platform::os_platform(&env), OsPlatform::Other);
//! ```

pub mod environment;
pub mod platform;
pub mod useragent;
