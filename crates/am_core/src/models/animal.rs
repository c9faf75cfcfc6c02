//! Chinese zodiac animals and the San He trine groups.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Chinese zodiac animal, in earthly-branch order (Rat = 0 .. Pig = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// San He 三合 trine group. Four groups of three animals each; same-group
/// pairs are the strongest classical harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trine {
    Visionaries,
    Strategists,
    Adventurers,
    Artists,
}

impl ChineseAnimal {
    /// All 12 animals in branch order.
    pub const ALL: [ChineseAnimal; 12] = [
        ChineseAnimal::Rat,
        ChineseAnimal::Ox,
        ChineseAnimal::Tiger,
        ChineseAnimal::Rabbit,
        ChineseAnimal::Dragon,
        ChineseAnimal::Snake,
        ChineseAnimal::Horse,
        ChineseAnimal::Goat,
        ChineseAnimal::Monkey,
        ChineseAnimal::Rooster,
        ChineseAnimal::Dog,
        ChineseAnimal::Pig,
    ];

    /// Position in the branch cycle (0..=11).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// San He trine group of the animal.
    pub fn trine(&self) -> Trine {
        match self {
            ChineseAnimal::Rat | ChineseAnimal::Dragon | ChineseAnimal::Monkey => {
                Trine::Visionaries
            }
            ChineseAnimal::Ox | ChineseAnimal::Snake | ChineseAnimal::Rooster => Trine::Strategists,
            ChineseAnimal::Tiger | ChineseAnimal::Horse | ChineseAnimal::Dog => Trine::Adventurers,
            ChineseAnimal::Rabbit | ChineseAnimal::Goat | ChineseAnimal::Pig => Trine::Artists,
        }
    }

    /// Animal for a birth year on the 12-year cycle (1984 = Rat).
    pub fn from_year(year: i32) -> ChineseAnimal {
        let offset = (year - 1984).rem_euclid(12);
        ChineseAnimal::ALL[offset as usize]
    }

    /// Animal name (English)
    pub fn name_en(&self) -> &'static str {
        match self {
            ChineseAnimal::Rat => "Rat",
            ChineseAnimal::Ox => "Ox",
            ChineseAnimal::Tiger => "Tiger",
            ChineseAnimal::Rabbit => "Rabbit",
            ChineseAnimal::Dragon => "Dragon",
            ChineseAnimal::Snake => "Snake",
            ChineseAnimal::Horse => "Horse",
            ChineseAnimal::Goat => "Goat",
            ChineseAnimal::Monkey => "Monkey",
            ChineseAnimal::Rooster => "Rooster",
            ChineseAnimal::Dog => "Dog",
            ChineseAnimal::Pig => "Pig",
        }
    }

    /// Animal name (Chinese)
    pub fn name_zh(&self) -> &'static str {
        match self {
            ChineseAnimal::Rat => "鼠",
            ChineseAnimal::Ox => "牛",
            ChineseAnimal::Tiger => "虎",
            ChineseAnimal::Rabbit => "兔",
            ChineseAnimal::Dragon => "龙",
            ChineseAnimal::Snake => "蛇",
            ChineseAnimal::Horse => "马",
            ChineseAnimal::Goat => "羊",
            ChineseAnimal::Monkey => "猴",
            ChineseAnimal::Rooster => "鸡",
            ChineseAnimal::Dog => "狗",
            ChineseAnimal::Pig => "猪",
        }
    }
}

impl fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name_en())
    }
}

/// Case-insensitive parsing from user-facing identifiers.
impl FromStr for ChineseAnimal {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rat" => Ok(ChineseAnimal::Rat),
            "ox" => Ok(ChineseAnimal::Ox),
            "tiger" => Ok(ChineseAnimal::Tiger),
            "rabbit" => Ok(ChineseAnimal::Rabbit),
            "dragon" => Ok(ChineseAnimal::Dragon),
            "snake" => Ok(ChineseAnimal::Snake),
            "horse" => Ok(ChineseAnimal::Horse),
            "goat" | "sheep" => Ok(ChineseAnimal::Goat),
            "monkey" => Ok(ChineseAnimal::Monkey),
            "rooster" => Ok(ChineseAnimal::Rooster),
            "dog" => Ok(ChineseAnimal::Dog),
            "pig" | "boar" => Ok(ChineseAnimal::Pig),
            _ => Err(MatchError::InvalidAnimal(s.to_string())),
        }
    }
}

impl Trine {
    /// Trine group name (English)
    pub fn name_en(&self) -> &'static str {
        match self {
            Trine::Visionaries => "Visionaries",
            Trine::Strategists => "Strategists",
            Trine::Adventurers => "Adventurers",
            Trine::Artists => "Artists",
        }
    }

    /// Trine group name (Chinese)
    pub fn name_zh(&self) -> &'static str {
        match self {
            Trine::Visionaries => "水三会",
            Trine::Strategists => "金三会",
            Trine::Adventurers => "木三会",
            Trine::Artists => "土三会",
        }
    }

    /// The three member animals of the trine.
    pub fn members(&self) -> [ChineseAnimal; 3] {
        match self {
            Trine::Visionaries => [ChineseAnimal::Rat, ChineseAnimal::Dragon, ChineseAnimal::Monkey],
            Trine::Strategists => [ChineseAnimal::Ox, ChineseAnimal::Snake, ChineseAnimal::Rooster],
            Trine::Adventurers => [ChineseAnimal::Tiger, ChineseAnimal::Horse, ChineseAnimal::Dog],
            Trine::Artists => [ChineseAnimal::Rabbit, ChineseAnimal::Goat, ChineseAnimal::Pig],
        }
    }
}

impl fmt::Display for Trine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name_en())
    }
}
