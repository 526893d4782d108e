//! Scanning utilities for user-agent identifying strings.
//!
//! User-agent strings are free-form and untrusted, so everything here is
//! defined for arbitrary input: matching is ASCII case-insensitive,
//! allocation-free, and never panics. The version extractor reports failures
//! as a structured error carrying the offending input.

/// Error returned when no version number can be extracted for a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no `{token}` token followed by a version number in user agent `{user_agent}`")]
pub struct VersionError {
    pub token: String,
    pub user_agent: String,
}

/// Returns true if `haystack` contains `needle`, ignoring ASCII case.
///
/// An empty needle matches every haystack.
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Returns true if `haystack` contains `word` as a whole word, ignoring
/// ASCII case.
///
/// Word characters are ASCII alphanumerics and `_`; everything else is a
/// boundary. `cros` therefore matches in `"X11; CrOS x86_64"` but not in
/// `"across"` or `"cros_x86"`.
pub fn contains_word_ignore_ascii_case(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return true;
    }

    haystack
        .split(|c: char| !is_word_char(c))
        .any(|token| token.eq_ignore_ascii_case(word))
}

/// Extracts the major version number following a token in a user-agent
/// string.
///
/// The string is scanned left to right for a case-insensitive occurrence of
/// `token` immediately followed by at least one ASCII digit; later
/// occurrences are considered when an earlier one has no trailing digits.
/// The digit run is read as a decimal number, saturating at [`u32::MAX`] so
/// absurdly long version advertisements still compare as very new.
///
/// # Arguments
///
/// * `user_agent` - The user-agent string to scan.
/// * `token` - The marker preceding the version, e.g. `firefox/`.
///
/// # Returns
///
/// The major version following the first suitable occurrence of `token`.
///
/// # Errors
///
/// Returns a [`VersionError`] if no occurrence of `token` is followed by a
/// digit.
///
/// # Example
///
/// ```rust
/// use envcaps::useragent::major_version_after;
///
/// let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/117.0";
/// assert_eq!(major_version_after(ua, "firefox/").unwrap(), 117);
/// assert!(major_version_after(ua, "edg/").is_err());
/// ```
pub fn major_version_after(user_agent: &str, token: &str) -> Result<u32, VersionError> {
    let haystack = user_agent.as_bytes();
    let token_bytes = token.as_bytes();

    let mut start = 0;
    while start + token_bytes.len() <= haystack.len() {
        let end = start + token_bytes.len();
        if haystack[start..end].eq_ignore_ascii_case(token_bytes) {
            let digits = leading_digit_run(&haystack[end..]);
            if !digits.is_empty() {
                return Ok(saturating_decimal(digits));
            }
        }
        start += 1;
    }

    Err(VersionError {
        token: token.to_owned(),
        user_agent: user_agent.to_owned(),
    })
}

/// Returns true if the character counts as a word character, i.e. an ASCII
/// alphanumeric or `_`.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns the run of ASCII digits at the start of the slice.
fn leading_digit_run(bytes: &[u8]) -> &[u8] {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    &bytes[..len]
}

/// Reads a digit run as a decimal number, saturating at [`u32::MAX`].
fn saturating_decimal(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    })
}
