use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::filename::model_filename;
use crate::model::PretrainedModel;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Downloads a URL into a local file.
pub trait Fetch {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        (**self).fetch(url, dest)
    }
}

/// Streams a URL over HTTP(S) into a temporary file next to the destination,
/// moving it into place only once the whole body has arrived.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::DownloadFailed(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    fn progress_bar(len: Option<u64>) -> ProgressBar {
        match len {
            Some(len) => {
                let pb = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar().template(
                    "{bar:40.cyan/blue} {bytes}/{total_bytes} [{elapsed_precise}<{eta_precise}] {bytes_per_sec}",
                ) {
                    pb.set_style(style);
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) =
                    ProgressStyle::default_spinner().template("{spinner:.green} {bytes} [{elapsed_precise}]")
                {
                    pb.set_style(style);
                }
                pb
            }
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!("GET {}", url);

        let mut response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(Error::DownloadFailed(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let dir = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut partial = NamedTempFile::new_in(dir)?;

        let pb = Self::progress_bar(response.content_length());
        let written = {
            let mut writer = pb.wrap_write(partial.as_file_mut());
            let written = response.copy_to(&mut writer);
            pb.finish_and_clear();
            written?
        };
        partial.as_file_mut().flush()?;
        partial.persist(dest).map_err(|e| e.error)?;

        tracing::info!("Wrote {} bytes to {:?}", written, dest);
        Ok(())
    }
}

pub struct ModelDownloader<'a> {
    config: &'a Config,
    fetcher: &'a dyn Fetch,
}

impl<'a> ModelDownloader<'a> {
    pub fn new(config: &'a Config, fetcher: &'a dyn Fetch) -> Self {
        Self { config, fetcher }
    }

    pub fn model_path(&self, model: &dyn PretrainedModel, version: Option<&str>) -> Result<PathBuf> {
        Ok(self.config.model_dir.join(model_filename(model, version)?))
    }

    /// Fetches `version` (default when `None`) of `model` into the cache directory.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn download(
        &self,
        model: &dyn PretrainedModel,
        version: Option<&str>,
        force: bool,
        out: &mut dyn Write,
    ) -> Result<PathBuf> {
        let source = model.source_url(version)?;
        let path = self.model_path(model, version)?;

        if !force && path.is_file() {
            return Err(Error::DestinationExists(path));
        }

        writeln!(out, "Downloading to {}:", path.display())?;
        tracing::info!("Fetching {} from {}", model.name(), source);
        self.fetcher.fetch(source, &path)?;

        Ok(path)
    }
}

/// Prints the pretrained versions of `model`, flagging the default one.
pub fn list_versions(model: &dyn PretrainedModel, out: &mut dyn Write) -> Result<()> {
    let default = model.default_version();
    writeln!(
        out,
        "Model \"{}\" provides following pretrained versions:",
        model.name()
    )?;
    for (version, source) in model.versions() {
        let default_str = if version == default { " (default)" } else { "" };
        writeln!(out, "\"{}\"{}: {}", version, default_str, source)?;
    }
    Ok(())
}
