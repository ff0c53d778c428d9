use std::fmt;
use std::str::FromStr;

use gloo::console::warn;

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/";
pub const NOTIFY_MESSAGE: &str = "Notifications are coming soon. Follow on Instagram to hear about new dates first.";

/// Query-string key that picks the card skin, e.g. `?skin=poster`.
const SKIN_PARAM: &str = "skin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    /// Info on the front, description and booking on the back.
    #[default]
    Classic,
    /// Skewed poster art on the front, everything on the back.
    Poster,
}

impl Skin {
    pub fn as_str(self) -> &'static str {
        match self {
            Skin::Classic => "classic",
            Skin::Poster => "poster",
        }
    }

    pub fn page_class(self) -> &'static str {
        match self {
            Skin::Classic => "skin-classic",
            Skin::Poster => "skin-poster",
        }
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Skin::Classic),
            "poster" => Ok(Skin::Poster),
            other => Err(format!("unknown skin '{other}' (expected classic or poster)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageConfig {
    pub skin: Skin,
}

impl PageConfig {
    /// Reads the config from the current page URL. Falls back to defaults outside a browser.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match Self::from_query(&search) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(format!("Ignoring page config: {e}"));
                Self::default()
            }
        }
    }

    /// Parses a `location.search` string such as `?skin=poster&utm=x`.
    pub fn from_query(query: &str) -> Result<Self, String> {
        let skin = match query_param(query, SKIN_PARAM) {
            Some(v) if !v.is_empty() => v.parse()?,
            _ => Skin::default(),
        };
        Ok(Self { skin })
    }
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
