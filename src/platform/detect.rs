use std::fmt;

use crate::environment::{self, Environment};
use crate::useragent::{contains_ignore_ascii_case, contains_word_ignore_ascii_case};

/// Number of touch points an iPad reports when its WebKit advertises a Mac
/// platform string. Real Macs never report five.
const IPAD_TOUCH_POINTS: u32 = 5;

/// Operating system family a snapshot runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsPlatform {
    MacOs,
    Windows,
    Android,
    Ios,
    ChromeOs,
    #[default]
    Other,
}

impl OsPlatform {
    /// Returns the lowercase label for this platform.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OsPlatform::MacOs => "macos",
            OsPlatform::Windows => "windows",
            OsPlatform::Android => "android",
            OsPlatform::Ios => "ios",
            OsPlatform::ChromeOs => "chromeos",
            OsPlatform::Other => "other",
        }
    }
}

impl fmt::Display for OsPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies the operating system a snapshot runs on.
///
/// Non-browser snapshots are always [`OsPlatform::Other`]. Browser snapshots
/// are classified from the platform string first, because desktop-class
/// browsers report it reliably:
///
/// * A `mac` prefix means macOS, unless the snapshot reports exactly five
///   touch points, in which case it is an iPad masquerading as a Mac and is
///   classified as iOS.
/// * A `win` prefix means Windows.
///
/// When the platform string settles nothing, the user-agent string breaks the
/// tie: `android` means Android, any of `iphone`, `ipod`, or `ipad` means
/// iOS, and the standalone word `cros` means ChromeOS. Snapshots matching
/// none of these are [`OsPlatform::Other`].
///
/// Prefix and substring matches ignore ASCII case.
///
/// # Arguments
///
/// * `env` - The environment snapshot to classify.
///
/// # Example
///
/// ```rust
/// use envcaps::environment::Environment;
/// use envcaps::platform::{OsPlatform, os_platform};
///
/// assert_eq!(os_platform(&Environment::default()), OsPlatform::Other);
/// ```
pub fn os_platform(env: &Environment) -> OsPlatform {
    if !environment::is_browser(env) {
        return OsPlatform::Other;
    }

    if let Some(platform) = env.navigator.platform_string() {
        if has_prefix_ignore_ascii_case(platform, "mac") {
            if env.navigator.max_touch_points == IPAD_TOUCH_POINTS {
                return OsPlatform::Ios;
            }
            return OsPlatform::MacOs;
        }
        if has_prefix_ignore_ascii_case(platform, "win") {
            return OsPlatform::Windows;
        }
    }

    let Some(user_agent) = env.navigator.user_agent_str() else {
        return OsPlatform::Other;
    };

    if contains_ignore_ascii_case(user_agent, "android") {
        return OsPlatform::Android;
    }
    if ["iphone", "ipod", "ipad"]
        .iter()
        .any(|needle| contains_ignore_ascii_case(user_agent, needle))
    {
        return OsPlatform::Ios;
    }
    if contains_word_ignore_ascii_case(user_agent, "cros") {
        return OsPlatform::ChromeOs;
    }

    OsPlatform::Other
}

/// Returns true if `s` starts with `prefix`, ignoring ASCII case.
fn has_prefix_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Navigator, Window};

    fn browser(navigator: Navigator) -> Environment {
        Environment {
            window: Some(Window::default()),
            document_present: true,
            navigator,
            ..Environment::default()
        }
    }

    #[test]
    fn non_browser_snapshots_are_other() {
        let env = Environment {
            navigator: Navigator {
                platform: Some("MacIntel".to_owned()),
                ..Navigator::default()
            },
            ..Environment::default()
        };
        assert_eq!(os_platform(&env), OsPlatform::Other);
    }

    #[test]
    fn mac_platform_prefix_is_macos() {
        for platform in ["MacIntel", "macintel", "MacPPC", "Mac68K"] {
            let env = browser(Navigator {
                platform: Some(platform.to_owned()),
                ..Navigator::default()
            });
            assert_eq!(os_platform(&env), OsPlatform::MacOs, "{platform}");
        }
    }

    #[test]
    fn mac_platform_with_five_touch_points_is_an_ipad() {
        for (touch_points, expected) in [
            (0, OsPlatform::MacOs),
            (4, OsPlatform::MacOs),
            (5, OsPlatform::Ios),
            (6, OsPlatform::MacOs),
        ] {
            let env = browser(Navigator {
                platform: Some("MacIntel".to_owned()),
                max_touch_points: touch_points,
                ..Navigator::default()
            });
            assert_eq!(os_platform(&env), expected, "{touch_points} touch points");
        }
    }

    #[test]
    fn win_platform_prefix_is_windows() {
        for platform in ["Win32", "Win64", "Windows", "win32"] {
            let env = browser(Navigator {
                platform: Some(platform.to_owned()),
                ..Navigator::default()
            });
            assert_eq!(os_platform(&env), OsPlatform::Windows, "{platform}");
        }
    }

    #[test]
    fn user_agent_data_platform_is_preferred_over_legacy_platform() {
        let env = browser(Navigator {
            platform: Some("Win32".to_owned()),
            user_agent_data_platform: Some("macOS".to_owned()),
            ..Navigator::default()
        });
        assert_eq!(os_platform(&env), OsPlatform::MacOs);
    }

    #[test]
    fn unmatched_platform_falls_through_to_the_user_agent() {
        let env = browser(Navigator {
            platform: Some("Linux armv81".to_owned()),
            user_agent: Some(
                "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36"
                    .to_owned(),
            ),
            ..Navigator::default()
        });
        assert_eq!(os_platform(&env), OsPlatform::Android);
    }

    #[test]
    fn iphone_ipod_and_ipad_user_agents_are_ios() {
        for device in ["iPhone", "iPod", "iPad"] {
            let env = browser(Navigator {
                user_agent: Some(format!(
                    "Mozilla/5.0 ({device}; CPU OS 17_4 like Mac OS X) AppleWebKit/605.1.15 \
                     (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1"
                )),
                ..Navigator::default()
            });
            assert_eq!(os_platform(&env), OsPlatform::Ios, "{device}");
        }
    }

    #[test]
    fn cros_word_in_the_user_agent_is_chromeos() {
        let env = browser(Navigator {
            user_agent: Some(
                "Mozilla/5.0 (X11; CrOS x86_64 14541.0.0) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_owned(),
            ),
            ..Navigator::default()
        });
        assert_eq!(os_platform(&env), OsPlatform::ChromeOs);
    }

    #[test]
    fn cros_matches_whole_words_only() {
        for user_agent in ["Mozilla/5.0 (compatible; Microsoft)", "custom-agent cros_x86"] {
            let env = browser(Navigator {
                user_agent: Some(user_agent.to_owned()),
                ..Navigator::default()
            });
            assert_eq!(os_platform(&env), OsPlatform::Other, "{user_agent}");
        }

        let env = browser(Navigator {
            user_agent: Some("custom-agent cros-x86".to_owned()),
            ..Navigator::default()
        });
        assert_eq!(os_platform(&env), OsPlatform::ChromeOs);
    }

    #[test]
    fn unmatched_snapshots_are_other() {
        let missing_everything = browser(Navigator::default());
        assert_eq!(os_platform(&missing_everything), OsPlatform::Other);

        let desktop_linux = browser(Navigator {
            platform: Some("Linux x86_64".to_owned()),
            user_agent: Some(
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
                 Chrome/120.0.0.0 Safari/537.36"
                    .to_owned(),
            ),
            ..Navigator::default()
        });
        assert_eq!(os_platform(&desktop_linux), OsPlatform::Other);
    }

    #[test]
    fn platform_labels_are_lowercase() {
        for (platform, label) in [
            (OsPlatform::MacOs, "macos"),
            (OsPlatform::Windows, "windows"),
            (OsPlatform::Android, "android"),
            (OsPlatform::Ios, "ios"),
            (OsPlatform::ChromeOs, "chromeos"),
            (OsPlatform::Other, "other"),
        ] {
            assert_eq!(platform.as_str(), label);
            assert_eq!(platform.to_string(), label);
            assert_eq!(
                serde_json::to_string(&platform).unwrap(),
                format!("\"{label}\"")
            );
        }
    }

    #[test]
    fn default_platform_is_other() {
        assert_eq!(OsPlatform::default(), OsPlatform::Other);
    }
}
