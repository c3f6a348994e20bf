extern crate serde;

use serde::{Serialize, Deserialize};
use crate::command::{QrModel, ErrorCorrection, Justification};

/// Settings for printing a qr code
///
/// Defaults to model 2, module size 3, error correction level L and centered. The size is only checked once a profile encodes it, so out of range values can be held.
///
/// ```rust
/// use escpos_profile::{QrCodeIntent, command::ErrorCorrection};
///
/// let qr_code = QrCodeIntent::default()
///     .with_size(6)
///     .with_error_correction(ErrorCorrection::H);
/// assert_eq!(qr_code.size(), 6);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct QrCodeIntent {
    model: QrModel,
    /// Module size multiplier, 1 to 16
    size: u8,
    error_correction: ErrorCorrection,
    justification: Justification
}

impl Default for QrCodeIntent {
    fn default() -> QrCodeIntent {
        QrCodeIntent {
            model: QrModel::Model2,
            size: 3,
            error_correction: ErrorCorrection::L,
            justification: Justification::Center
        }
    }
}

impl QrCodeIntent {
    pub fn model(&self) -> QrModel {
        self.model
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn error_correction(&self) -> ErrorCorrection {
        self.error_correction
    }

    pub fn justification(&self) -> Justification {
        self.justification
    }

    /// Sets the qr code model. The default is model 2.
    pub fn with_model(mut self, model: QrModel) -> QrCodeIntent {
        self.model = model;
        self
    }

    /// Sets the module size. The default is 3.
    pub fn with_size(mut self, size: u8) -> QrCodeIntent {
        self.size = size;
        self
    }

    /// Sets the error correction level. The default is level L.
    pub fn with_error_correction(mut self, error_correction: ErrorCorrection) -> QrCodeIntent {
        self.error_correction = error_correction;
        self
    }

    /// Sets the qr code justification. The default is center.
    pub fn with_justification(mut self, justification: Justification) -> QrCodeIntent {
        self.justification = justification;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let qr_code = QrCodeIntent::default();
        assert_eq!(qr_code.model(), QrModel::Model2);
        assert_eq!(qr_code.size(), 3);
        assert_eq!(qr_code.error_correction(), ErrorCorrection::L);
        assert_eq!(qr_code.justification(), Justification::Center);
    }

    #[test]
    fn out_of_range_size_is_held() {
        assert_eq!(QrCodeIntent::default().with_size(40).size(), 40);
    }

    #[test]
    fn partial_configuration_keeps_defaults() {
        let qr_code: QrCodeIntent = serde_json::from_str(r#"{"model": "1", "error_correction": "Q"}"#).unwrap();
        assert_eq!(qr_code, QrCodeIntent::default()
            .with_model(QrModel::Model1)
            .with_error_correction(ErrorCorrection::Q));
        assert_eq!(
            serde_json::to_value(&QrCodeIntent::default()).unwrap(),
            serde_json::json!({"model": "2", "size": 3, "error_correction": "L", "justification": "center"})
        );
    }
}
