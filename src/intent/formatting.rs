extern crate serde;

use log::debug;
use serde::{Serialize, Deserialize};
use std::io::Write;
use crate::{
    Error, InvalidParameter, Profile,
    command::{Font, Justification, Underline}
};

/// Text formatting state to be sent to the printer
///
/// The structure is an immutable value. Each `with_*` method consumes it and gives back a copy with one field changed, so a shared default can be derived from without being altered.
///
/// ```rust
/// use escpos_profile::{FormattingIntent, command::{Justification, Underline}};
///
/// let title = FormattingIntent::default()
///     .with_justification(Justification::Center)
///     .with_emphasis(true)
///     .with_underline(Underline::TwoDots)
///     .with_char_size(2, 2);
/// assert_eq!(title.char_size(), (2, 2));
/// ```
///
/// The default value is the printer's power-on state: left justified, no emphasis, font A, no underline and 1x1 characters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FormattingIntent {
    justification: Justification,
    emphasis: bool,
    font: Font,
    underline: Underline,
    /// Width multiplier, 1 to 8. Checked when encoded.
    char_width: u8,
    /// Height multiplier, 1 to 8. Checked when encoded.
    char_height: u8
}

impl Default for FormattingIntent {
    fn default() -> FormattingIntent {
        FormattingIntent {
            justification: Justification::Left,
            emphasis: false,
            font: Font::FontA,
            underline: Underline::Off,
            char_width: 1,
            char_height: 1
        }
    }
}

/// Signature shared by the formatting commands of a [Profile](crate::Profile)
type FormatEncoder<P> = fn(&P, &FormattingIntent) -> Result<Vec<u8>, InvalidParameter>;

impl FormattingIntent {
    pub fn justification(&self) -> Justification {
        self.justification
    }

    pub fn emphasis(&self) -> bool {
        self.emphasis
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn underline(&self) -> Underline {
        self.underline
    }

    /// Width and height multipliers, in that order
    pub fn char_size(&self) -> (u8, u8) {
        (self.char_width, self.char_height)
    }

    /// Justifies whatever gets printed with this format
    pub fn with_justification(mut self, justification: Justification) -> FormattingIntent {
        self.justification = justification;
        self
    }

    /// Turns emphasis (bold) on or off
    pub fn with_emphasis(mut self, emphasis: bool) -> FormattingIntent {
        self.emphasis = emphasis;
        self
    }

    pub fn with_font(mut self, font: Font) -> FormattingIntent {
        self.font = font;
        self
    }

    pub fn with_underline(mut self, underline: Underline) -> FormattingIntent {
        self.underline = underline;
        self
    }

    /// Sets the character size using width and height multipliers.
    ///
    /// 1 is the default, 2 is double width/height and so on up to 8 for most printers. Values are not checked here; an out of range pair fails once it reaches a profile.
    pub fn with_char_size(mut self, width: u8, height: u8) -> FormattingIntent {
        self.char_width = width;
        self.char_height = height;
        self
    }

    /// Formatting commands of a profile, in the order they get written
    fn encoders<P: Profile + ?Sized>() -> [FormatEncoder<P>; 5] {
        [
            P::font_command,
            P::justification_command,
            P::emphasis_command,
            P::underline_command,
            P::char_size_command
        ]
    }

    /// Writes the whole formatting state to `sink`
    ///
    /// Font, justification, emphasis, underline and character size get written in that order, each one as soon as it is encoded. The first command that fails to encode stops the process: the commands already written stay in the sink, the ones after it are never written, and the error is returned.
    pub fn apply<P: Profile + ?Sized, W: Write>(&self, profile: &P, sink: &mut W) -> Result<(), Error> {
        for encoder in FormattingIntent::encoders::<P>().iter() {
            let command = encoder(profile, self)?;
            sink.write_all(&command)?;
        }
        debug!("applied format {:?}", self);
        Ok(())
    }

    /// Encodes the whole formatting state into a single byte sequence
    ///
    /// Same order as [apply](FormattingIntent::apply). On failure, no bytes are given back.
    ///
    /// ```rust
    /// use escpos_profile::{FormattingIntent, EpsonTmT20III};
    ///
    /// let bytes = FormattingIntent::default().encode(&EpsonTmT20III)?;
    /// assert_eq!(bytes, b"\x1bM0\x1ba0\x1bE0\x1b-0\x1d!\x00".to_vec());
    /// # Ok::<(), escpos_profile::InvalidParameter>(())
    /// ```
    pub fn encode<P: Profile + ?Sized>(&self, profile: &P) -> Result<Vec<u8>, InvalidParameter> {
        let mut res = Vec::new();
        for encoder in FormattingIntent::encoders::<P>().iter() {
            res.append(&mut encoder(profile, self)?);
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EpsonTmT20III, QrCodeIntent, BeepIntent};
    use pretty_assertions::assert_eq;

    /// Epson commands, except for a model that only knows the thin underline
    struct ThinUnderlineOnly;

    impl Profile for ThinUnderlineOnly {
        fn init_command(&self) -> Vec<u8> { EpsonTmT20III.init_command() }
        fn cut_command(&self) -> Vec<u8> { EpsonTmT20III.cut_command() }
        fn end_command(&self) -> Vec<u8> { EpsonTmT20III.end_command() }
        fn font_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.font_command(format)
        }
        fn justification_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.justification_command(format)
        }
        fn emphasis_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.emphasis_command(format)
        }
        fn underline_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
            match format.underline() {
                Underline::TwoDots => Err(InvalidParameter::value("underline", Underline::TwoDots)),
                _ => EpsonTmT20III.underline_command(format)
            }
        }
        fn char_size_command(&self, format: &FormattingIntent) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.char_size_command(format)
        }
        fn select_qr_code_model_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.select_qr_code_model_command(qr_code)
        }
        fn set_qr_code_size_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.set_qr_code_size_command(qr_code)
        }
        fn select_qr_code_error_correction_level_command(&self, qr_code: &QrCodeIntent) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.select_qr_code_error_correction_level_command(qr_code)
        }
        fn store_qr_code_data_command(&self, data: &[u8]) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.store_qr_code_data_command(data)
        }
        fn print_qr_code_command(&self) -> Vec<u8> { EpsonTmT20III.print_qr_code_command() }
        fn beep_command(&self, beep: &BeepIntent) -> Result<Vec<u8>, InvalidParameter> {
            EpsonTmT20III.beep_command(beep)
        }
    }

    #[test]
    fn default_is_the_power_on_state() {
        let mut sink = Vec::new();
        FormattingIntent::default().apply(&EpsonTmT20III, &mut sink).unwrap();
        assert_eq!(sink, vec![
            0x1b, b'M', b'0',
            0x1b, b'a', b'0',
            0x1b, b'E', b'0',
            0x1b, b'-', b'0',
            0x1d, b'!', 0x00
        ]);
    }

    #[test]
    fn commands_follow_a_fixed_order() {
        let format = FormattingIntent::default()
            .with_char_size(2, 3)
            .with_underline(Underline::OneDot)
            .with_emphasis(true)
            .with_justification(Justification::Right)
            .with_font(Font::FontC);
        assert_eq!(format.encode(&EpsonTmT20III), Ok(b"\x1bM2\x1ba2\x1bE1\x1b-1\x1d!\x12".to_vec()));
    }

    #[test]
    fn setters_leave_the_original_untouched() {
        let base = FormattingIntent::default();
        let derived = base.clone().with_emphasis(true);
        assert_eq!(base, FormattingIntent::default());
        assert!(derived.emphasis());
        assert_ne!(base, derived);
    }

    #[test]
    fn failing_command_stops_the_sequence() {
        let format = FormattingIntent::default()
            .with_underline(Underline::TwoDots)
            .with_char_size(2, 2);
        let mut sink = Vec::new();
        let error = format.apply(&ThinUnderlineOnly, &mut sink).unwrap_err();
        match error {
            Error::InvalidParameter(e) => assert_eq!(e.field(), "underline"),
            other => panic!("unexpected error {}", other)
        }
        // Font, justification and emphasis got through, char size never did
        assert_eq!(sink, b"\x1bM0\x1ba0\x1bE0".to_vec());
    }

    #[test]
    fn encode_gives_no_partial_output() {
        let format = FormattingIntent::default().with_char_size(0, 4);
        assert_eq!(format.encode(&EpsonTmT20III), Err(InvalidParameter::CharSize{width: 0, height: 4}));
    }

    #[test]
    fn works_through_a_trait_object() {
        let profile: &dyn Profile = &EpsonTmT20III;
        assert_eq!(FormattingIntent::default().encode(profile), FormattingIntent::default().encode(&EpsonTmT20III));
    }

    #[test]
    fn partial_configuration_keeps_defaults() {
        let format: FormattingIntent = serde_json::from_str(r#"{"justification": "center", "underline": "2-dots", "char_width": 2}"#).unwrap();
        assert_eq!(format, FormattingIntent::default()
            .with_justification(Justification::Center)
            .with_underline(Underline::TwoDots)
            .with_char_size(2, 1));
        let error = serde_json::from_str::<FormattingIntent>(r#"{"font": "E"}"#).unwrap_err();
        assert!(error.to_string().contains("unknown variant `E`"), "{}", error);
    }
}
