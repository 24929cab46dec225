use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
	UnknownModel(String),
	UnsupportedModel(String),
	UnknownVersion { model: String, version: String },
	DestinationExists(PathBuf),
	DownloadFailed(String),
	ConfigError(String),
	IoError(std::io::Error),
	HttpError(reqwest::Error),
}

impl Error {
	/// Process exit status reported for this error.
	pub fn exit_code(&self) -> u8 {
		match self {
			Error::UnknownModel(_) | Error::UnsupportedModel(_) | Error::DestinationExists(_) => 2,
			_ => 1,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::UnknownModel(name) => write!(f, "Model \"{}\" is unknown.", name),
			Error::UnsupportedModel(name) => write!(
				f,
				"Model \"{}\" does not ship any pretrained models for download.",
				name
			),
			Error::UnknownVersion { model, version } => {
				write!(f, "Model \"{}\" has no pretrained version \"{}\"", model, version)
			}
			Error::DestinationExists(_) => {
				write!(f, "Model file already exists. Use --force to overwrite.")
			}
			Error::DownloadFailed(msg) => write!(f, "Download failed: {}", msg),
			Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
			Error::IoError(e) => write!(f, "IO error: {}", e),
			Error::HttpError(e) => write!(f, "HTTP error: {}", e),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Error::IoError(err)
	}
}

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		Error::HttpError(err)
	}
}

pub type Result<T> = std::result::Result<T, Error>;
