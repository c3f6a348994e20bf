use log::debug;
use crate::{
    InvalidParameter,
    FormattingIntent,
    QrCodeIntent,
    BeepIntent,
    Profile,
    command::{Font, Justification, Underline, QrModel, ErrorCorrection}
};

const ESC: u8 = 0x1b;
const GS: u8 = 0x1d;

/// `GS ( k`, the 2D symbol function prefix
const QR_PREFIX: [u8; 3] = [GS, b'(', b'k'];
/// Symbol type byte for qr codes inside `GS ( k`
const QR_SYMBOL: u8 = 49;
/// Bytes counted by `pL pH` in the store command besides the payload (cn, fn, m)
const QR_STORE_OVERHEAD: usize = 3;
/// Largest payload a single store command may carry
const QR_MAX_DATA_LENGTH: usize = 7086;

/// Epson TM-T20III
///
/// Supports the four fonts, the three underline modes and qr codes up to 7086 bytes of data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EpsonTmT20III;

impl EpsonTmT20III {
    /// Builds a `GS ( k` command for the qr symbol, with the length field computed from `body`
    fn qr_function(function: u8, body: &[u8]) -> Vec<u8> {
        // pL pH count the symbol byte, the function byte and the body
        let length = body.len() + 2;
        let mut res = QR_PREFIX.to_vec();
        res.push((length & 0xff) as u8);
        res.push((length >> 8) as u8);
        res.push(QR_SYMBOL);
        res.push(function);
        res.extend_from_slice(body);
        res
    }
}

impl Profile for EpsonTmT20III {
    fn init_command(&self) -> Vec<u8> {
        vec![ESC, b'@']
    }

    fn cut_command(&self) -> Vec<u8> {
        vec![GS, b'V', b'A', b'0']
    }

    fn end_command(&self) -> Vec<u8> {
        vec![0xfa]
    }

    fn font_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
        let n = match format.font() {
            Font::FontA => b'0',
            Font::FontB => b'1',
            Font::FontC => b'2',
            Font::FontD => b'3'
        };
        Ok(vec![ESC, b'M', n])
    }

    fn justification_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
        let n = match format.justification() {
            Justification::Left => b'0',
            Justification::Center => b'1',
            Justification::Right => b'2'
        };
        Ok(vec![ESC, b'a', n])
    }

    fn emphasis_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
        let n = if format.emphasis() { b'1' } else { b'0' };
        Ok(vec![ESC, b'E', n])
    }

    fn underline_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
        let n = match format.underline() {
            Underline::Off => b'0',
            Underline::OneDot => b'1',
            Underline::TwoDots => b'2'
        };
        Ok(vec![ESC, b'-', n])
    }

    fn char_size_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
        let (width, height) = format.char_size();
        if !(1..=8).contains(&width) || !(1..=8).contains(&height) {
            return Err(InvalidParameter::CharSize{width, height});
        }
        // High nibble is the width, low nibble the height, both zero based
        Ok(vec![GS, b'!', ((width - 1) << 4) | (height - 1)])
    }

    fn select_qr_code_model_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter> {
        let n = match qr_code.model() {
            QrModel::Model1 => 49,
            QrModel::Model2 => 50
        };
        Ok(EpsonTmT20III::qr_function(b'A', &[n, 0]))
    }

    fn set_qr_code_size_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter> {
        let size = qr_code.size();
        if !(1..=16).contains(&size) {
            return Err(InvalidParameter::value("size", size));
        }
        Ok(EpsonTmT20III::qr_function(b'C', &[size]))
    }

    fn select_qr_code_error_correction_level_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter> {
        let n = match qr_code.error_correction() {
            ErrorCorrection::L => 48,
            ErrorCorrection::M => 49,
            ErrorCorrection::Q => 50,
            ErrorCorrection::H => 51
        };
        Ok(EpsonTmT20III::qr_function(b'E', &[n]))
    }

    fn store_qr_code_data_command(&self, data: &[u8]) -> Result<Vec<u8>, InvalidParameter> {
        if data.len() > QR_MAX_DATA_LENGTH {
            return Err(InvalidParameter::DataLength{
                length: data.len(),
                max: QR_MAX_DATA_LENGTH
            });
        }
        let length = data.len() + QR_STORE_OVERHEAD;
        let mut res = QR_PREFIX.to_vec();
        res.reserve(length + 2);
        res.push((length & 0xff) as u8);
        res.push((length >> 8) as u8);
        res.extend_from_slice(&[QR_SYMBOL, b'P', b'0']);
        res.extend_from_slice(data);
        debug!("qr store command of {} bytes for {} bytes of data", res.len(), data.len());
        Ok(res)
    }

    fn print_qr_code_command(&self) -> Vec<u8> {
        EpsonTmT20III::qr_function(b'Q', &[b'0'])
    }

    fn beep_command(&self, beep: &BeepIntent) -> Result<Vec<u8>, InvalidParameter> {
        if !(1..=9).contains(&beep.times()) {
            return Err(InvalidParameter::value("times", beep.times()));
        }
        if !(1..=9).contains(&beep.duration()) {
            return Err(InvalidParameter::value("duration", beep.duration()));
        }
        Ok(vec![ESC, b'B', beep.times(), beep.duration()])
    }
}
