//! User-agent string scanning and engine feature detection.

mod detect;
mod parser;

pub use detect::supports_regex_property_escape;
pub use parser::{
    VersionError, contains_ignore_ascii_case, contains_word_ignore_ascii_case, major_version_after,
};
