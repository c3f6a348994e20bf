use thiserror::Error;

/// A field of an intent that the profile refuses to encode.
///
/// This is the only failure an encoder can produce. Every variant carries what is needed to find the offending value without looking at the call site.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameter {
    /// The value lies outside the enumerated or numeric domain of the field
    #[error("invalid {field} option: {value}")]
    Value {
        field: &'static str,
        value: String
    },
    /// Width and height are validated together, so both get reported
    #[error("invalid charsize options: width {width}, height {height}")]
    CharSize {
        width: u8,
        height: u8
    },
    /// Qr code payload does not fit in a single store command
    #[error("maximum data length exceeded: {length} > {max} (max)")]
    DataLength {
        length: usize,
        max: usize
    }
}

impl InvalidParameter {
    pub(crate) fn value<T: ToString>(field: &'static str, value: T) -> InvalidParameter {
        InvalidParameter::Value {
            field,
            value: value.to_string()
        }
    }

    /// Name of the intent field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            InvalidParameter::Value{field, ..} => field,
            InvalidParameter::CharSize{..} => "charsize",
            InvalidParameter::DataLength{..} => "data"
        }
    }
}

/// Errors that this crate throws.
#[derive(Error, Debug)]
pub enum Error {
    /// An intent could not be encoded by the printer profile
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
    /// For text printing, a character has no CP437 representation
    #[error("CP437 error: {0}")]
    Encoding(String),
    /// The output sink refused the bytes
    #[error("io error: {0}")]
    Io(#[from] std::io::Error)
}
