use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RiskError;

/// Outdoor activities with registered threshold rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Activity {
    Beach,
    Skiing,
    Hiking,
    Fishing,
    Festival,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Beach,
        Activity::Skiing,
        Activity::Hiking,
        Activity::Fishing,
        Activity::Festival,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Beach => "Beach",
            Activity::Skiing => "Skiing",
            Activity::Hiking => "Hiking",
            Activity::Fishing => "Fishing",
            Activity::Festival => "Festival",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = RiskError;

    /// Case-insensitive lookup. Unregistered names fail with
    /// `UnknownActivity` so callers can surface them instead of silently
    /// reporting an always-good 0% rule set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beach" => Ok(Activity::Beach),
            "skiing" => Ok(Activity::Skiing),
            "hiking" => Ok(Activity::Hiking),
            "fishing" => Ok(Activity::Fishing),
            "festival" => Ok(Activity::Festival),
            _ => Err(RiskError::UnknownActivity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_activities() {
        assert_eq!("Beach".parse::<Activity>().unwrap(), Activity::Beach);
        assert_eq!("skiing".parse::<Activity>().unwrap(), Activity::Skiing);
        assert_eq!(" FESTIVAL ".parse::<Activity>().unwrap(), Activity::Festival);
    }

    #[test]
    fn test_parse_unknown_activity() {
        let err = "Surfing".parse::<Activity>().unwrap_err();
        assert!(matches!(err, RiskError::UnknownActivity(name) if name == "Surfing"));
    }

    #[test]
    fn test_all_covers_every_variant() {
        for activity in Activity::ALL {
            assert_eq!(
                activity.as_str().parse::<Activity>().unwrap(),
                activity
            );
        }
    }
}
