use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MODEL_DIR_ENV: &str = "PRETRAINED_FETCH_MODEL_DIR";
const TIMEOUT_ENV: &str = "PRETRAINED_FETCH_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
	/// Cache directory checkpoints are written to. Never created by this tool.
	pub model_dir: PathBuf,
	pub timeout: Duration,
	pub user_agent: String,
}

impl Config {
	pub fn new() -> crate::error::Result<Self> {
		Ok(Self::with_model_dir(Self::default_model_dir()?))
	}

	pub fn with_model_dir(model_dir: impl Into<PathBuf>) -> Self {
		Self {
			model_dir: model_dir.into(),
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
			user_agent: format!("pretrained-fetch/{}", env!("CARGO_PKG_VERSION")),
		}
	}

	pub fn from_env() -> crate::error::Result<Self> {
		Self::from_vars(|key| std::env::var(key).ok())
	}

	/// Builds the config from `lookup`, which maps a variable name to its value.
	pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> crate::error::Result<Self> {
		let mut config = match lookup(MODEL_DIR_ENV) {
			Some(dir) if !dir.is_empty() => Self::with_model_dir(dir),
			_ => Self::new()?,
		};

		if let Some(secs) = lookup(TIMEOUT_ENV) {
			let secs = secs.trim().parse::<u64>().map_err(|_| {
				crate::error::Error::ConfigError(format!("{} must be a number of seconds, got {:?}", TIMEOUT_ENV, secs))
			})?;
			config.timeout = Duration::from_secs(secs);
		}

		Ok(config)
	}

	/// `pretrained_models/state_dicts` next to the executable, falling back to
	/// the platform data directory when the executable path is unavailable.
	fn default_model_dir() -> crate::error::Result<PathBuf> {
		let base = match std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
			Some(dir) => dir,
			None => {
				tracing::debug!("Executable location unknown, using platform data directory");
				ProjectDirs::from("", "", "pretrained-fetch")
					.ok_or_else(|| crate::error::Error::ConfigError("Could not determine data directory".to_string()))?
					.data_dir()
					.to_path_buf()
			}
		};

		Ok(base.join("pretrained_models").join("state_dicts"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_dir_ends_with_state_dicts() {
		let config = Config::new().unwrap();
		assert!(config.model_dir.ends_with("pretrained_models/state_dicts"));
		assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
	}

	fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
		move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
	}

	#[test]
	fn model_dir_variable_overrides_default() {
		let config = Config::from_vars(vars(&[(MODEL_DIR_ENV, "/srv/checkpoints")])).unwrap();
		assert_eq!(config.model_dir, PathBuf::from("/srv/checkpoints"));
	}

	#[test]
	fn empty_model_dir_variable_falls_back() {
		let config = Config::from_vars(vars(&[(MODEL_DIR_ENV, "")])).unwrap();
		assert!(config.model_dir.ends_with("pretrained_models/state_dicts"));
	}

	#[test]
	fn timeout_variable_is_parsed() {
		let config = Config::from_vars(vars(&[(TIMEOUT_ENV, " 90 ")])).unwrap();
		assert_eq!(config.timeout, Duration::from_secs(90));
	}

	#[test]
	fn bad_timeout_is_a_config_error() {
		let err = Config::from_vars(vars(&[(TIMEOUT_ENV, "abc")])).unwrap_err();
		assert!(matches!(err, crate::error::Error::ConfigError(ref msg) if msg.contains(TIMEOUT_ENV)));
		assert_eq!(err.exit_code(), 1);
	}

	#[test]
	fn explicit_model_dir_is_kept_verbatim() {
		let config = Config::with_model_dir("/tmp/cache");
		assert_eq!(config.model_dir, PathBuf::from("/tmp/cache"));
		assert!(config.user_agent.starts_with("pretrained-fetch/"));
	}
}
