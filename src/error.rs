//! Unified error type for the menu page.
//!
//! All variants carry only fixed-size data, so the enum stays `Copy` and
//! works without `alloc`.

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // State
    /// A shared cell holds a value outside its enum. The hand-shake between
    /// the two contexts is broken; the render loop must stop.
    InvalidState { raw: u8 },

    // Construction
    /// A page needs at least one option.
    EmptyMenu,

    /// More options than `config::MAX_OPTIONS`.
    BufferOverflow,

    /// A `PageConfig` field is out of range (zero-sized box, zero hover
    /// denominator, icon ratio above 100 %, zero tick period).
    InvalidConfig,

    // UI / Display
    /// Drawing to or presenting the surface failed.
    Display,

    // Generic
    /// A bounded wait elapsed before the transition completed.
    Timeout,
}

pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidState { raw } => write!(f, "invalid shared state value {}", raw),
            Error::EmptyMenu => f.write_str("menu has no options"),
            Error::BufferOverflow => f.write_str("too many menu options"),
            Error::InvalidConfig => f.write_str("invalid page configuration"),
            Error::Display => f.write_str("display surface error"),
            Error::Timeout => f.write_str("timed out waiting for selection"),
        }
    }
}
