//! Division vocabulary shared by every catalog: play categories, gender
//! brackets, age groups, skill levels, and bracket stages.
//!
//! All enums round-trip through `Display`/`FromStr` using the labels the
//! catalogs are written in ("19+", "Round 1", ...). Parsing is
//! case-insensitive so client commands can be typed casually.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Play category for tournaments, players, and matches.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Category {
    Singles,
    Doubles,
    Mixed,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Singles, Category::Doubles, Category::Mixed];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Singles => "Singles",
            Self::Doubles => "Doubles",
            Self::Mixed => "Mixed",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for Category {
    type Err = ParseDivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "singles" => Ok(Self::Singles),
            "doubles" => Ok(Self::Doubles),
            "mixed" => Ok(Self::Mixed),
            _ => Err(ParseDivisionError::new("category", s)),
        }
    }
}

/// Gender bracket.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Gender {
    Men,
    Women,
    Mixed,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Mixed => "Mixed",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for Gender {
    type Err = ParseDivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "mixed" => Ok(Self::Mixed),
            _ => Err(ParseDivisionError::new("gender", s)),
        }
    }
}

/// Age group bracket. Displayed with the catalog's "N+" labels.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AgeGroup {
    Open19,
    Senior35,
    Senior50,
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Open19 => "19+",
            Self::Senior35 => "35+",
            Self::Senior50 => "50+",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for AgeGroup {
    type Err = ParseDivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "19+" | "19" => Ok(Self::Open19),
            "35+" | "35" => Ok(Self::Senior35),
            "50+" | "50" => Ok(Self::Senior50),
            _ => Err(ParseDivisionError::new("age group", s)),
        }
    }
}

/// Skill level a tournament is sanctioned for.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for SkillLevel {
    type Err = ParseDivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseDivisionError::new("skill level", s)),
        }
    }
}

/// Bracket stage of a match.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Stage {
    Qualification,
    Round1,
    Quarterfinal,
    Semifinal,
    Final,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Qualification => "Qualification",
            Self::Round1 => "Round 1",
            Self::Quarterfinal => "Quarterfinal",
            Self::Semifinal => "Semifinal",
            Self::Final => "Final",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for Stage {
    type Err = ParseDivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "").as_str() {
            "qualification" => Ok(Self::Qualification),
            "round1" => Ok(Self::Round1),
            "quarterfinal" => Ok(Self::Quarterfinal),
            "semifinal" => Ok(Self::Semifinal),
            "final" => Ok(Self::Final),
            _ => Err(ParseDivisionError::new("stage", s)),
        }
    }
}

/// Error for unparseable division labels.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("not a known {kind}: '{value}'")]
pub struct ParseDivisionError {
    kind: &'static str,
    value: String,
}

impl ParseDivisionError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        for age in [AgeGroup::Open19, AgeGroup::Senior35, AgeGroup::Senior50] {
            assert_eq!(age.to_string().parse::<AgeGroup>(), Ok(age));
        }
        for stage in [
            Stage::Qualification,
            Stage::Round1,
            Stage::Quarterfinal,
            Stage::Semifinal,
            Stage::Final,
        ] {
            assert_eq!(stage.to_string().parse::<Stage>(), Ok(stage));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DOUBLES".parse::<Category>(), Ok(Category::Doubles));
        assert_eq!("women".parse::<Gender>(), Ok(Gender::Women));
        assert_eq!("round-1".parse::<Stage>(), Ok(Stage::Round1));
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "triples".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("category"));
        assert!(err.to_string().contains("triples"));
    }

    #[test]
    fn test_age_group_display_uses_plus_labels() {
        assert_eq!(AgeGroup::Open19.to_string(), "19+");
        assert_eq!(AgeGroup::Senior50.to_string(), "50+");
    }
}
