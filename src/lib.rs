//! Library for encoding esc/pos commands with rust
//!
//! Printers speaking esc/pos all share the same idea, but each model has its own dialect: which fonts exist, how qr codes get framed, which buzzer command it understands. This crate turns print intents into the exact bytes a given model expects, and nothing more. Talking to the device is up to the caller, any [Write](std::io::Write) implementation will do.
//!
//! ```rust
//! use escpos_profile::{Printer, EpsonTmT20III, FormattingIntent, command::{Justification, Font}};
//!
//! // Anything implementing `Write` works as a sink, a file opened on the device for example.
//! let mut printer = Printer::new(Vec::new(), EpsonTmT20III)?;
//! let title = FormattingIntent::default()
//!     .with_justification(Justification::Center)
//!     .with_font(Font::FontB)
//!     .with_char_size(2, 2);
//! printer.print_formatted("Hello, world!\n", &title)?;
//! printer.cut()?;
//! # Ok::<(), escpos_profile::Error>(())
//! ```
//!
//! ## Profiles
//!
//! The [Profile](crate::Profile) trait lists every command this crate knows how to encode. Each printer model gets its own implementation, at the moment only the [EpsonTmT20III](crate::EpsonTmT20III). Encoders are pure: the same intent always gives back the same bytes.
//!
//! ## Intents
//!
//! * [FormattingIntent](crate::FormattingIntent): font, justification, emphasis, underline and character size.
//! * [QrCodeIntent](crate::QrCodeIntent): model, module size, error correction and justification of a qr code.
//! * [BeepIntent](crate::BeepIntent): buzzer pattern.
//!
//! All of them are immutable values, with `with_*` methods giving back modified copies, and can be deserialized with serde (missing fields take their default value).
//!
//! ## Errors
//!
//! Values outside of what the profile can encode are reported as an [InvalidParameter](crate::InvalidParameter), never replaced by a default encoding.
//!
//! ```rust
//! use escpos_profile::{Profile, EpsonTmT20III, FormattingIntent};
//!
//! let too_wide = FormattingIntent::default().with_char_size(9, 1);
//! let error = EpsonTmT20III.char_size_command(&too_wide).unwrap_err();
//! assert_eq!(error.to_string(), "invalid charsize options: width 9, height 1");
//! ```

pub use printer::Printer;
pub use profile::{Profile, EpsonTmT20III};
pub use intent::{FormattingIntent, QrCodeIntent, BeepIntent};
pub use error::{Error, InvalidParameter};

/// Enumerated values used by the intents
pub mod command;

mod printer;
mod profile;
mod intent;
mod error;
