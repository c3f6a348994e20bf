extern crate serde;

use serde::{Serialize, Deserialize};
use crate::InvalidParameter;

/// Qr code symbol model
///
/// Model 2 is what most readers expect, model 1 is kept for older scanners.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum QrModel {
    #[serde(rename = "1")]
    Model1,
    #[serde(rename = "2")]
    Model2
}

impl Default for QrModel {
    fn default() -> QrModel {
        QrModel::Model2
    }
}

impl QrModel {
    pub fn name(&self) -> &'static str {
        match self {
            QrModel::Model1 => "1",
            QrModel::Model2 => "2"
        }
    }
}

impl std::fmt::Display for QrModel {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

impl std::str::FromStr for QrModel {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<QrModel, InvalidParameter> {
        match s {
            "1" => Ok(QrModel::Model1),
            "2" => Ok(QrModel::Model2),
            other => Err(InvalidParameter::value("model", other))
        }
    }
}

/// Qr code error correction level, from lowest (L, ~7% recovery) to highest (H, ~30%)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H
}

impl Default for ErrorCorrection {
    fn default() -> ErrorCorrection {
        ErrorCorrection::L
    }
}

impl ErrorCorrection {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H"
        }
    }
}

impl std::fmt::Display for ErrorCorrection {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

impl std::str::FromStr for ErrorCorrection {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<ErrorCorrection, InvalidParameter> {
        match s {
            "L" => Ok(ErrorCorrection::L),
            "M" => Ok(ErrorCorrection::M),
            "Q" => Ok(ErrorCorrection::Q),
            "H" => Ok(ErrorCorrection::H),
            other => Err(InvalidParameter::value("error correction level", other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_models() {
        assert_eq!("1".parse::<QrModel>(), Ok(QrModel::Model1));
        assert_eq!("2".parse::<QrModel>(), Ok(QrModel::Model2));
        assert_eq!(
            "micro".parse::<QrModel>().unwrap_err().to_string(),
            "invalid model option: micro"
        );
    }

    #[test]
    fn parses_error_correction_levels() {
        for level in &[ErrorCorrection::L, ErrorCorrection::M, ErrorCorrection::Q, ErrorCorrection::H] {
            assert_eq!(level.name().parse::<ErrorCorrection>(), Ok(*level));
        }
        for unknown in &["X", "unknown", "l"] {
            assert_eq!(
                unknown.parse::<ErrorCorrection>().unwrap_err(),
                InvalidParameter::Value{field: "error correction level", value: unknown.to_string()}
            );
        }
    }
}
