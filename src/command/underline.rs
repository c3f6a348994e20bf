extern crate serde;

use serde::{Serialize, Deserialize};
use crate::InvalidParameter;

/// Underline thickness
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Underline {
    #[serde(rename = "off")]
    Off,
    #[serde(rename = "1-dot")]
    OneDot,
    #[serde(rename = "2-dots")]
    TwoDots
}

impl Default for Underline {
    fn default() -> Underline {
        Underline::Off
    }
}

impl Underline {
    pub fn name(&self) -> &'static str {
        match self {
            Underline::Off => "off",
            Underline::OneDot => "1-dot",
            Underline::TwoDots => "2-dots"
        }
    }
}

impl std::fmt::Display for Underline {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

impl std::str::FromStr for Underline {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Underline, InvalidParameter> {
        match s {
            "off" => Ok(Underline::Off),
            "1-dot" => Ok(Underline::OneDot),
            "2-dots" => Ok(Underline::TwoDots),
            other => Err(InvalidParameter::value("underline", other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_underline_name() {
        for underline in &[Underline::Off, Underline::OneDot, Underline::TwoDots] {
            assert_eq!(underline.name().parse::<Underline>(), Ok(*underline));
        }
    }

    #[test]
    fn unknown_underline_names_the_field() {
        assert_eq!("3-dots".parse::<Underline>().unwrap_err().field(), "underline");
    }
}
