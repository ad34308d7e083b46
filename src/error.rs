// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Parse(ParseError),
}

/// Text values that could not be mapped onto one of the closed enumerations
/// (severity, ad format, theme mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Severity outside of `success`, `error`, `warning`, `info`.
    UnknownSeverity(String),

    /// Ad format outside of the six supported layouts.
    UnknownAdFormat(String),

    /// Theme mode outside of `light`, `dark`, `system`.
    UnknownThemeMode(String),
}

impl ParseError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ParseError::UnknownSeverity(_) => "error-parse-severity",
            ParseError::UnknownAdFormat(_) => "error-parse-ad-format",
            ParseError::UnknownThemeMode(_) => "error-parse-theme-mode",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownSeverity(raw) => write!(f, "Unknown severity: {}", raw),
            ParseError::UnknownAdFormat(raw) => write!(f, "Unknown ad format: {}", raw),
            ParseError::UnknownThemeMode(raw) => write!(f, "Unknown theme mode: {}", raw),
        }
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn parse_error_wraps_into_error() {
        let err: Error = ParseError::UnknownSeverity("fatal".into()).into();
        assert_eq!(format!("{}", err), "Parse Error: Unknown severity: fatal");
    }

    #[test]
    fn parse_error_i18n_keys() {
        assert_eq!(
            ParseError::UnknownSeverity(String::new()).i18n_key(),
            "error-parse-severity"
        );
        assert_eq!(
            ParseError::UnknownAdFormat(String::new()).i18n_key(),
            "error-parse-ad-format"
        );
    }

    #[test]
    fn toml_error_produces_config_variant() {
        let parse_err = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
