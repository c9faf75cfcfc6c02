//! Western zodiac signs and their elements.
//!
//! The 12 signs carry two compile-time attributes the engine relies on:
//! a fixed ordinal in zodiac order (used for circular aspect distances)
//! and a classical element.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Western zodiac sign, in fixed zodiac order (Aries = 0 .. Pisces = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Classical Western element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WesternElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl WesternSign {
    /// All 12 signs in zodiac order.
    pub const ALL: [WesternSign; 12] = [
        WesternSign::Aries,
        WesternSign::Taurus,
        WesternSign::Gemini,
        WesternSign::Cancer,
        WesternSign::Leo,
        WesternSign::Virgo,
        WesternSign::Libra,
        WesternSign::Scorpio,
        WesternSign::Sagittarius,
        WesternSign::Capricorn,
        WesternSign::Aquarius,
        WesternSign::Pisces,
    ];

    /// Position in the zodiac circle (0..=11).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Element of the sign.
    pub fn element(&self) -> WesternElement {
        match self {
            WesternSign::Aries | WesternSign::Leo | WesternSign::Sagittarius => {
                WesternElement::Fire
            }
            WesternSign::Taurus | WesternSign::Virgo | WesternSign::Capricorn => {
                WesternElement::Earth
            }
            WesternSign::Gemini | WesternSign::Libra | WesternSign::Aquarius => WesternElement::Air,
            WesternSign::Cancer | WesternSign::Scorpio | WesternSign::Pisces => {
                WesternElement::Water
            }
        }
    }

    /// The sign on the opposite side of the zodiac circle (180 degrees).
    pub fn opposite(&self) -> WesternSign {
        WesternSign::ALL[((self.ordinal() + 6) % 12) as usize]
    }

    /// Sign name (English)
    pub fn name_en(&self) -> &'static str {
        match self {
            WesternSign::Aries => "Aries",
            WesternSign::Taurus => "Taurus",
            WesternSign::Gemini => "Gemini",
            WesternSign::Cancer => "Cancer",
            WesternSign::Leo => "Leo",
            WesternSign::Virgo => "Virgo",
            WesternSign::Libra => "Libra",
            WesternSign::Scorpio => "Scorpio",
            WesternSign::Sagittarius => "Sagittarius",
            WesternSign::Capricorn => "Capricorn",
            WesternSign::Aquarius => "Aquarius",
            WesternSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for WesternSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name_en())
    }
}

/// Case-insensitive parsing from user-facing identifiers.
impl FromStr for WesternSign {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aries" => Ok(WesternSign::Aries),
            "taurus" => Ok(WesternSign::Taurus),
            "gemini" => Ok(WesternSign::Gemini),
            "cancer" => Ok(WesternSign::Cancer),
            "leo" => Ok(WesternSign::Leo),
            "virgo" => Ok(WesternSign::Virgo),
            "libra" => Ok(WesternSign::Libra),
            "scorpio" => Ok(WesternSign::Scorpio),
            "sagittarius" => Ok(WesternSign::Sagittarius),
            "capricorn" => Ok(WesternSign::Capricorn),
            "aquarius" => Ok(WesternSign::Aquarius),
            "pisces" => Ok(WesternSign::Pisces),
            _ => Err(MatchError::InvalidSign(s.to_string())),
        }
    }
}

impl WesternElement {
    /// Element name (English)
    pub fn name_en(&self) -> &'static str {
        match self {
            WesternElement::Fire => "Fire",
            WesternElement::Earth => "Earth",
            WesternElement::Air => "Air",
            WesternElement::Water => "Water",
        }
    }
}

impl fmt::Display for WesternElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name_en())
    }
}
