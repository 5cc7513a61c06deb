/// Errors raised when a URL string cannot be split into parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedUrlError {
    /// Port is not made of digits or does not fit in 16 bits
    InvalidPort,
    /// Host is missing where the authority requires one, or an IP literal is
    /// not terminated by `]`
    InvalidHost,
}

impl core::fmt::Display for MalformedUrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPort => "Malformed URL: invalid port",
            Self::InvalidHost => "Malformed URL: invalid host",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedUrlError {}

/// Result type for strict URL parsing
pub type Result<T> = core::result::Result<T, MalformedUrlError>;
