extern crate codepage_437;
extern crate log;

use log::{debug, warn};
use codepage_437::{IntoCp437, CP437_CONTROL};
use std::io::Write;
use crate::{
    Error,
    Profile,
    FormattingIntent,
    QrCodeIntent,
    BeepIntent
};

/// Main escpos-profile structure
///
/// The printer sequences the commands of a [Profile](crate::Profile) into an output sink, which can be anything implementing [Write](std::io::Write): a device file, a socket, or a plain vector for previews and tests. There is no buffering nor retrying, every call goes straight to the sink.
///
/// ```rust
/// use escpos_profile::{Printer, EpsonTmT20III, FormattingIntent, QrCodeIntent, command::Justification};
///
/// let mut printer = Printer::new(Vec::new(), EpsonTmT20III)?;
/// printer.println("Hello, world!")?;
/// printer.print_formatted("Total: 42\n", &FormattingIntent::default().with_emphasis(true))?;
/// printer.qr_code("https://example.com", &QrCodeIntent::default())?;
/// printer.cut()?;
/// let bytes = printer.into_inner();
/// assert_eq!(&bytes[..2], &[0x1b, b'@']);
/// # Ok::<(), escpos_profile::Error>(())
/// ```
pub struct Printer<W: Write, P: Profile> {
    /// Where the commands get written
    writer: W,
    /// Command set of the printer model
    profile: P,
    /// Formatting restored after formatted prints and qr codes
    default_format: FormattingIntent
}

impl<W: Write, P: Profile> Printer<W, P> {
    /// Creates a new printer, and initializes it
    ///
    /// The init command of the profile gets written right away, clearing the printer's buffer and resetting its modes.
    pub fn new(writer: W, profile: P) -> Result<Printer<W, P>, Error> {
        let mut printer = Printer {
            writer,
            profile,
            default_format: FormattingIntent::default()
        };
        printer.init()?;
        Ok(printer)
    }

    /// Replaces the formatting state restored after each formatted print
    ///
    /// By default, the printer's power-on state is used (see [FormattingIntent](crate::FormattingIntent)'s default).
    pub fn with_default_format(mut self, default_format: FormattingIntent) -> Printer<W, P> {
        self.default_format = default_format;
        self
    }

    /// The formatting state restored after each formatted print
    pub fn default_format(&self) -> &FormattingIntent {
        &self.default_format
    }

    /// Command set used to encode every write
    pub fn profile(&self) -> &P {
        &self.profile
    }

    /// Reference to the underlying sink
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Gives back the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Clears the data in the print buffer and resets the printer modes to the ones in effect at power on.
    pub fn init(&mut self) -> Result<(), Error> {
        let command = self.profile.init_command();
        self.raw(&command)
    }

    /// Print some text.
    ///
    /// The text gets translated to CP437, control characters included. Characters without a CP437 representation produce an [Encoding](crate::Error::Encoding) error, and nothing gets written.
    pub fn print<T: Into<String>>(&mut self, content: T) -> Result<(), Error> {
        let feed = to_cp437(content)?;
        self.raw(&feed)
    }

    /// Print some text, with a newline at the end.
    pub fn println<T: Into<String>>(&mut self, content: T) -> Result<(), Error> {
        let feed = content.into() + "\n";
        self.print(feed)
    }

    /// Prints text with the given format, then restores the default format
    ///
    /// Text without a CP437 representation fails before anything is written. If the format cannot be encoded, the error is returned without printing the text; formatting commands written before the failure stay written.
    pub fn print_formatted<T: Into<String>>(&mut self, content: T, format: &FormattingIntent) -> Result<(), Error> {
        let feed = to_cp437(content)?;
        self.apply_format(format)?;
        self.raw(&feed)?;
        let default_format = self.default_format.clone();
        self.apply_format(&default_format)
    }

    /// Prints a qr code
    ///
    /// The sequence is: justification (on top of the default format), model, module size, error correction level, data storage, print, and finally the default format again. It is not transactional: if a step fails, the previous ones were already written.
    pub fn qr_code<D: AsRef<[u8]>>(&mut self, data: D, qr_code: &QrCodeIntent) -> Result<(), Error> {
        let justified = self.default_format.clone().with_justification(qr_code.justification());
        self.apply_format(&justified)?;

        let model = encoded(self.profile.select_qr_code_model_command(qr_code))?;
        self.raw(&model)?;
        let size = encoded(self.profile.set_qr_code_size_command(qr_code))?;
        self.raw(&size)?;
        let error_correction = encoded(self.profile.select_qr_code_error_correction_level_command(qr_code))?;
        self.raw(&error_correction)?;
        let store = encoded(self.profile.store_qr_code_data_command(data.as_ref()))?;
        self.raw(&store)?;
        let print = self.profile.print_qr_code_command();
        self.raw(&print)?;

        let default_format = self.default_format.clone();
        self.apply_format(&default_format)
    }

    /// Sounds the buzzer, if the printer has one
    pub fn beep(&mut self, beep: &BeepIntent) -> Result<(), Error> {
        let command = encoded(self.profile.beep_command(beep))?;
        self.raw(&command)
    }

    /// Cuts the paper, in case the instruction is supported by the printer
    pub fn cut(&mut self) -> Result<(), Error> {
        let command = self.profile.cut_command();
        self.raw(&command)
    }

    /// Marks the end of the print job
    pub fn end(&mut self) -> Result<(), Error> {
        let command = self.profile.end_command();
        self.raw(&command)
    }

    /// Sends raw information to the printer
    ///
    /// As simple as it sounds
    /// ```rust
    /// use escpos_profile::{Printer, EpsonTmT20III};
    /// let mut printer = Printer::new(Vec::new(), EpsonTmT20III)?;
    /// printer.raw(&[0x01, 0x02])?;
    /// assert_eq!(printer.get_ref(), &vec![0x1b, b'@', 0x01, 0x02]);
    /// # Ok::<(), escpos_profile::Error>(())
    /// ```
    pub fn raw<A: AsRef<[u8]>>(&mut self, bytes: A) -> Result<(), Error> {
        self.writer.write_all(bytes.as_ref())?;
        Ok(())
    }

    fn apply_format(&mut self, format: &FormattingIntent) -> Result<(), Error> {
        format.apply(&self.profile, &mut self.writer).map_err(|e| {
            if let Error::InvalidParameter(invalid) = &e {
                warn!("failed building format command: {}", invalid);
            }
            e
        })
    }
}

/// Translates text to CP437, keeping control characters
fn to_cp437<T: Into<String>>(content: T) -> Result<Vec<u8>, Error> {
    content.into().into_cp437(&CP437_CONTROL).map_err(|e| Error::Encoding(e.into_string()))
}

/// Logs encoding failures before they bubble up
fn encoded(command: Result<Vec<u8>, crate::InvalidParameter>) -> Result<Vec<u8>, Error> {
    match command {
        Ok(command) => {
            debug!("encoded command of {} bytes", command.len());
            Ok(command)
        },
        Err(e) => {
            warn!("failed building command: {}", e);
            Err(e.into())
        }
    }
}
