pub use self::epson_tm_t20iii::EpsonTmT20III;

mod epson_tm_t20iii;

use crate::{
    InvalidParameter,
    FormattingIntent,
    QrCodeIntent,
    BeepIntent
};

/// Command set of a specific printer model
///
/// A profile maps the generic intents of this crate ([FormattingIntent](crate::FormattingIntent), [QrCodeIntent](crate::QrCodeIntent), [BeepIntent](crate::BeepIntent)) to the exact bytes a given printer expects. Swapping the profile retargets every command without touching the code that builds the intents.
///
/// None of the methods have side effects. Each model implements the whole trait on its own, even when two models happen to share byte layouts.
///
/// ```rust
/// use escpos_profile::{Profile, EpsonTmT20III, FormattingIntent, command::Font};
///
/// let profile = EpsonTmT20III;
/// let format = FormattingIntent::default().with_font(Font::FontB);
/// assert_eq!(profile.font_command(&format)?, vec![0x1b, b'M', b'1']);
/// # Ok::<(), escpos_profile::InvalidParameter>(())
/// ```
pub trait Profile {
    /// Clears the print buffer and resets the printer to its power-on modes.
    fn init_command(&self) -> Vec<u8>;

    /// Selects the cut mode and cuts the paper.
    fn cut_command(&self) -> Vec<u8>;

    /// Marks the end of a print job.
    fn end_command(&self) -> Vec<u8>;

    /// Selects the font found in the intent.
    fn font_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter>;

    /// Sets the justification found in the intent.
    fn justification_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter>;

    /// Turns emphasis on or off.
    ///
    /// Emphasis is binary, so implementations are not expected to fail. The signature matches the other formatting commands so that they can be applied uniformly.
    fn emphasis_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter>;

    /// Sets the underline mode found in the intent.
    fn underline_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter>;

    /// Sets the character width and height multipliers.
    fn char_size_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter>;

    /// Selects the qr code model.
    fn select_qr_code_model_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter>;

    /// Sets the size of a qr code module.
    fn set_qr_code_size_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter>;

    /// Selects the qr code error correction level.
    fn select_qr_code_error_correction_level_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter>;

    /// Stores the qr code payload in the symbol storage area.
    ///
    /// The payload is copied verbatim, control characters included.
    fn store_qr_code_data_command(&self, data: &[u8]) -> Result<Vec<u8>, InvalidParameter>;

    /// Prints the qr code held in the symbol storage area.
    fn print_qr_code_command(&self) -> Vec<u8>;

    /// Sounds the buzzer.
    fn beep_command(&self, beep: &BeepIntent) -> Result<Vec<u8>, InvalidParameter>;
}
