extern crate serde;

use serde::{Serialize, Deserialize};
use crate::InvalidParameter;

/// Horizontal alignment of whatever gets printed next
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    Left,
    Center,
    Right
}

impl Default for Justification {
    fn default() -> Justification {
        Justification::Left
    }
}

impl Justification {
    pub fn name(&self) -> &'static str {
        match self {
            Justification::Left => "left",
            Justification::Center => "center",
            Justification::Right => "right"
        }
    }
}

impl std::fmt::Display for Justification {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

impl std::str::FromStr for Justification {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Justification, InvalidParameter> {
        match s {
            "left" => Ok(Justification::Left),
            "center" => Ok(Justification::Center),
            "right" => Ok(Justification::Right),
            other => Err(InvalidParameter::value("justification", other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_justification_name() {
        for justification in &[Justification::Left, Justification::Center, Justification::Right] {
            assert_eq!(justification.name().parse::<Justification>(), Ok(*justification));
        }
    }

    #[test]
    fn unknown_justification_names_the_field() {
        let error = "middle".parse::<Justification>().unwrap_err();
        assert_eq!(error, InvalidParameter::Value{field: "justification", value: "middle".into()});
    }
}
