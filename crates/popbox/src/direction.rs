use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::PopboxError;

/// Side of the anchor the floating element is placed on. The string form is
/// also the CSS class applied to the floating element.
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    PartialEq,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
    LeftUp,
    RightUp,
}

/// Tag added when the floating element had to be pinned to a viewport edge.
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum EdgeTag {
    LeftEdge,
    RightEdge,
}

/// Every class placement may add. Cleared before a new placement is applied.
pub const DIRECTION_CLASSES: [&str; 8] = [
    "left",
    "left-edge",
    "up",
    "right",
    "right-edge",
    "down",
    "left-up",
    "right-up",
];

/// Order tried by smart placement; `Down` is repeated as the fallback.
pub const SMART_CANDIDATES: [Direction; 7] = [
    Direction::Down,
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::LeftUp,
    Direction::RightUp,
    Direction::Down,
];

const SMART: &str = "smart";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum DirectionPreference {
    #[default]
    Smart,
    Fixed(Direction),
}

impl fmt::Display for DirectionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smart => write!(f, "{SMART}"),
            Self::Fixed(direction) => write!(f, "{direction}"),
        }
    }
}

impl FromStr for DirectionPreference {
    type Err = PopboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(SMART) {
            return Ok(Self::Smart);
        }

        Direction::from_str(&s.to_ascii_lowercase())
            .map(Self::Fixed)
            .map_err(|_| PopboxError::UnknownDirection(s.to_string()))
    }
}

impl TryFrom<String> for DirectionPreference {
    type Error = PopboxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DirectionPreference> for String {
    fn from(value: DirectionPreference) -> Self {
        value.to_string()
    }
}

impl From<Direction> for DirectionPreference {
    fn from(value: Direction) -> Self {
        Self::Fixed(value)
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::{Direction, DirectionPreference, EdgeTag, DIRECTION_CLASSES};

    #[test]
    fn test_class_names() {
        assert_eq!(Direction::LeftUp.as_ref(), "left-up");
        assert_eq!(Direction::RightUp.to_string(), "right-up");
        assert_eq!(EdgeTag::RightEdge.as_ref(), "right-edge");

        for direction in Direction::iter() {
            assert!(DIRECTION_CLASSES.contains(&direction.as_ref()));
        }
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!("smart".parse::<DirectionPreference>().unwrap(), DirectionPreference::Smart);
        assert_eq!(
            " Left-Up ".parse::<DirectionPreference>().unwrap(),
            DirectionPreference::Fixed(Direction::LeftUp)
        );
        assert!("sideways".parse::<DirectionPreference>().is_err());
    }
}
