pub use self::font::Font;
pub use self::justification::Justification;
pub use self::underline::Underline;
pub use self::qr::{QrModel, ErrorCorrection};

mod font;
mod justification;
mod underline;
mod qr;
