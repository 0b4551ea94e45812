//! Steam community profile URL parsing.

use std::sync::LazyLock;

use regex::Regex;

static RE_PROFILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://steamcommunity\.com/profiles/(\d{17})/?$").unwrap());
static RE_VANITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://steamcommunity\.com/id/([\w.-]+)/?$").unwrap());

/// A parsed Steam community profile reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUrlRef {
    /// Direct SteamID64 profile URL; resolvable without a network call.
    SteamId(String),
    /// Vanity URL; the custom name must be resolved via the Web API.
    Vanity(String),
}

impl ProfileUrlRef {
    /// Parse a user-supplied profile URL. The whole string must match one
    /// of the two accepted shapes, optionally with a trailing slash.
    pub fn parse(url: &str) -> Option<Self> {
        if let Some(caps) = RE_PROFILE.captures(url) {
            return Some(Self::SteamId(caps[1].to_string()));
        }
        if let Some(caps) = RE_VANITY.captures(url) {
            return Some(Self::Vanity(caps[1].to_string()));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_profile_url() {
        let parsed = ProfileUrlRef::parse("https://steamcommunity.com/profiles/76561197960287930");
        assert_eq!(
            parsed,
            Some(ProfileUrlRef::SteamId("76561197960287930".into()))
        );

        let with_slash =
            ProfileUrlRef::parse("http://steamcommunity.com/profiles/76561197960287930/");
        assert_eq!(
            with_slash,
            Some(ProfileUrlRef::SteamId("76561197960287930".into()))
        );
    }

    #[test]
    fn test_vanity_url() {
        let parsed = ProfileUrlRef::parse("https://steamcommunity.com/id/gabelogannewell");
        assert_eq!(
            parsed,
            Some(ProfileUrlRef::Vanity("gabelogannewell".into()))
        );

        let dotted = ProfileUrlRef::parse("https://steamcommunity.com/id/some.name-42/");
        assert_eq!(dotted, Some(ProfileUrlRef::Vanity("some.name-42".into())));
    }

    #[test]
    fn test_rejects_malformed_urls() {
        assert_eq!(ProfileUrlRef::parse(""), None);
        assert_eq!(ProfileUrlRef::parse("steamcommunity.com/id/name"), None);
        // SteamID64 must be exactly 17 digits.
        assert_eq!(
            ProfileUrlRef::parse("https://steamcommunity.com/profiles/1234"),
            None
        );
        // No partial matches inside a longer string.
        assert_eq!(
            ProfileUrlRef::parse("see https://steamcommunity.com/id/name please"),
            None
        );
        assert_eq!(
            ProfileUrlRef::parse("https://steamcommunity.com/groups/valve"),
            None
        );
    }
}
