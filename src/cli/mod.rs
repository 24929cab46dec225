use crate::config::Config;
use crate::error::Result;
use crate::model::{list_versions, Fetch, ModelDownloader, ModelRegistry};
use clap::Parser;
use std::io::Write;

/// `--version default` is accepted as an explicit request for the default version.
const DEFAULT_VERSION_KEYWORD: &str = "default";

#[derive(Parser, Debug)]
#[command(name = "pretrained-fetch")]
#[command(about = "Download a specific version of a finetuned model and place it in pretrained_models", long_about = None)]
pub struct Cli {
	/// Model to operate on
	#[arg(long = "own_model_name", alias = "own-model-name", default_value = "grutsc")]
	pub own_model_name: String,

	/// Version of the model to download, use --force to overwrite a version which was already downloaded
	#[arg(long)]
	pub version: Option<String>,

	/// Force the download of a model and overwrite potential previous versions
	#[arg(long)]
	pub force: bool,

	/// List all pretrained model versions which a model provides
	#[arg(long = "list_versions", alias = "list-versions")]
	pub list_versions: bool,
}

impl Cli {
	pub fn requested_version(&self) -> Option<&str> {
		self.version
			.as_deref()
			.filter(|v| !v.is_empty() && *v != DEFAULT_VERSION_KEYWORD)
	}
}

/// Resolves the requested model and either lists its versions or downloads one.
///
/// `setup` builds the config and fetcher and only runs on the download path.
pub fn run<F, S>(cli: &Cli, registry: &ModelRegistry, out: &mut dyn Write, setup: S) -> Result<()>
where
	F: Fetch,
	S: FnOnce() -> Result<(Config, F)>,
{
	let model = registry.resolve_pretrained(&cli.own_model_name)?;

	if cli.list_versions {
		return list_versions(model, out);
	}

	let (config, fetcher) = setup()?;
	tracing::debug!("Model directory: {:?}", config.model_dir);
	let path = ModelDownloader::new(&config, &fetcher).download(model, cli.requested_version(), cli.force, out)?;
	tracing::info!("Model '{}' stored at {:?}", model.name(), path);
	Ok(())
}
