use std::fmt;

use urlencoding::{decode, encode};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileTarget {
    pub platform: String,
    pub name: String,
}

impl ProfileTarget {
    pub fn new(platform: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ProfileTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.platform, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    Profile(ProfileTarget),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Search => "/".to_string(),
            Route::Profile(target) => format!(
                "/player/{}/{}",
                encode(&target.platform),
                encode(&target.name)
            ),
        }
    }

    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Some(Route::Search);
        }

        let mut segments = trimmed.trim_matches('/').split('/');
        if segments.next()? != "player" {
            return None;
        }
        let platform = decode_segment(segments.next()?)?;
        let name = decode_segment(segments.next()?)?;
        if segments.next().is_some() {
            return None;
        }
        Some(Route::Profile(ProfileTarget { platform, name }))
    }

    /// Start route from command-line arguments: either one route path or a
    /// `<platform> <name>` pair.
    pub fn from_args(args: &[String]) -> Option<Route> {
        match args {
            [] => Some(Route::Search),
            [path] => Route::parse(path),
            [platform, name] => {
                let platform = platform.trim();
                let name = name.trim();
                if platform.is_empty() || name.is_empty() {
                    return None;
                }
                Some(Route::Profile(ProfileTarget::new(platform, name)))
            }
            _ => None,
        }
    }
}

fn decode_segment(raw: &str) -> Option<String> {
    let decoded = decode(raw).ok()?;
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_path_encodes_segments() {
        let route = Route::Profile(ProfileTarget::new("pc", "Big Boss#1"));
        assert_eq!(route.path(), "/player/pc/Big%20Boss%231");
        assert_eq!(Route::parse(&route.path()), Some(route));
    }

    #[test]
    fn parse_rejects_unknown_and_blank() {
        assert_eq!(Route::parse("/"), Some(Route::Search));
        assert_eq!(Route::parse("/players/pc/x"), None);
        assert_eq!(Route::parse("/player/pc/%20"), None);
        assert_eq!(Route::parse("/player/pc"), None);
        assert_eq!(Route::parse("/player/pc/a/b"), None);
    }

    #[test]
    fn args_accept_pair_or_path() {
        let pair = vec!["ps4".to_string(), "Soldier".to_string()];
        assert_eq!(
            Route::from_args(&pair),
            Some(Route::Profile(ProfileTarget::new("ps4", "Soldier")))
        );
        let path = vec!["/player/xboxone/Medic".to_string()];
        assert_eq!(
            Route::from_args(&path),
            Some(Route::Profile(ProfileTarget::new("xboxone", "Medic")))
        );
        assert_eq!(Route::from_args(&[]), Some(Route::Search));
    }
}
