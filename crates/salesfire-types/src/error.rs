//! Error type shared by the accessor and its adapters

use std::fmt;

pub type SfResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	ConfigError(String),
	Parse(String),
	ServiceUnavailable(String),

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
			Error::ServiceUnavailable(msg) => write!(f, "service unavailable: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err.to_string())
	}
}


// vim: ts=4
