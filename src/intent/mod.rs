pub use self::formatting::FormattingIntent;
pub use self::qr_code::QrCodeIntent;
pub use self::beep::BeepIntent;

mod formatting;
mod qr_code;
mod beep;
