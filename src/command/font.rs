extern crate serde;

use serde::{Serialize, Deserialize};
use crate::InvalidParameter;

/// Common fonts used in thermal printers
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Font {
    #[serde(rename = "A")]
    FontA,
    #[serde(rename = "B")]
    FontB,
    #[serde(rename = "C")]
    FontC,
    #[serde(rename = "D")]
    FontD
}

impl Default for Font {
    fn default() -> Font {
        Font::FontA
    }
}

impl Font {
    /// Name of the font, as accepted by [from_str](std::str::FromStr::from_str)
    pub fn name(&self) -> &'static str {
        match self {
            Font::FontA => "A",
            Font::FontB => "B",
            Font::FontC => "C",
            Font::FontD => "D"
        }
    }
}

impl std::fmt::Display for Font {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

impl std::str::FromStr for Font {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Font, InvalidParameter> {
        match s {
            "A" => Ok(Font::FontA),
            "B" => Ok(Font::FontB),
            "C" => Ok(Font::FontC),
            "D" => Ok(Font::FontD),
            other => Err(InvalidParameter::value("font", other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_font_name() {
        for font in &[Font::FontA, Font::FontB, Font::FontC, Font::FontD] {
            assert_eq!(font.name().parse::<Font>(), Ok(*font));
        }
    }

    #[test]
    fn unknown_font_names_the_field() {
        let error = "blabla".parse::<Font>().unwrap_err();
        assert_eq!(error.field(), "font");
        assert_eq!(error.to_string(), "invalid font option: blabla");
    }
}
