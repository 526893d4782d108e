use super::parser::{contains_ignore_ascii_case, major_version_after};
use crate::environment::{self, Environment};

/// First Firefox release whose regex engine supports Unicode property
/// escapes.
const FIREFOX_MIN_MAJOR: u32 = 78;

/// First Chromium-based Edge release; every `edg/` build below it predates
/// Unicode property escapes.
const EDGE_MIN_MAJOR: u32 = 79;

/// Returns whether the snapshot's regex engine supports Unicode property
/// escapes.
///
/// The check targets legacy browser engines only, so anything that is not a
/// known-old engine is assumed capable:
///
/// 1. Non-browser snapshots are assumed capable.
/// 2. Snapshots without a user-agent string are assumed capable.
/// 3. Firefox is gated on major version 78, read from the `firefox/` token.
/// 4. Trident-engine agents (legacy Internet Explorer) are never capable.
/// 5. Agents carrying an `edg/` token are gated on major version 79.
/// 6. Everything else (Chrome, Safari, and friends) is assumed capable.
///
/// A Firefox or Edge agent without an extractable version is assumed
/// incapable.
///
/// # Arguments
///
/// * `env` - The environment snapshot to classify.
///
/// # Example
///
/// ```rust
/// use envcaps::environment::Environment;
/// use envcaps::useragent::supports_regex_property_escape;
///
/// // A server-side snapshot: the legacy-engine check does not apply.
/// assert!(supports_regex_property_escape(&Environment::default()));
/// ```
pub fn supports_regex_property_escape(env: &Environment) -> bool {
    if !environment::is_browser(env) {
        return true;
    }

    let Some(user_agent) = env.navigator.user_agent_str() else {
        return true;
    };

    if contains_ignore_ascii_case(user_agent, "firefox") {
        return version_at_least(user_agent, "firefox/", FIREFOX_MIN_MAJOR);
    }

    if contains_ignore_ascii_case(user_agent, "trident") {
        return false;
    }

    if contains_ignore_ascii_case(user_agent, "edg/") {
        return version_at_least(user_agent, "edg/", EDGE_MIN_MAJOR);
    }

    true
}

/// Returns true if the version following `token` is at least `minimum`,
/// treating an unextractable version as too old.
fn version_at_least(user_agent: &str, token: &str, minimum: u32) -> bool {
    match major_version_after(user_agent, token) {
        Ok(version) => version >= minimum,
        Err(err) => {
            log::debug!("Assuming no property-escape support: {}", err);
            false
        }
    }
}
