use crate::error::{Error, Result};

/// A model that may ship pretrained checkpoints.
pub trait PretrainedModel: Sync {
    fn name(&self) -> &str;

    /// Whether any pretrained checkpoint can be downloaded for this model.
    fn includes_pretrained(&self) -> bool;

    fn default_version(&self) -> &str;

    /// `(version, source descriptor)` pairs in declaration order.
    fn versions(&self) -> Vec<(&str, &str)>;

    /// Download URL of `version`, or of the default version when `None`.
    fn source_url(&self, version: Option<&str>) -> Result<&str>;
}

#[derive(Debug)]
pub struct Release {
    pub version: &'static str,
    pub source: &'static str,
    pub url: &'static str,
}

#[derive(Debug)]
pub struct StaticModel {
    pub name: &'static str,
    pub default_version: &'static str,
    pub releases: &'static [Release],
}

impl PretrainedModel for StaticModel {
    fn name(&self) -> &str {
        self.name
    }

    fn includes_pretrained(&self) -> bool {
        !self.releases.is_empty()
    }

    fn default_version(&self) -> &str {
        self.default_version
    }

    fn versions(&self) -> Vec<(&str, &str)> {
        self.releases.iter().map(|r| (r.version, r.source)).collect()
    }

    fn source_url(&self, version: Option<&str>) -> Result<&str> {
        let version = version.unwrap_or(self.default_version);
        self.releases
            .iter()
            .find(|r| r.version == version)
            .map(|r| r.url)
            .ok_or_else(|| Error::UnknownVersion {
                model: self.name.to_string(),
                version: version.to_string(),
            })
    }
}

macro_rules! newsmtsc_release {
    ($path:literal) => {
        concat!("https://github.com/fhamborg/NewsMTSC/releases/download/", $path)
    };
}

static GRUTSC: StaticModel = StaticModel {
    name: "grutsc",
    default_version: "v1.0.0",
    releases: &[
        Release {
            version: "v1.0.0",
            source: "trained on NewsMTSC-rw, best performing model in the NewsMTSC paper",
            url: newsmtsc_release!("v1.0.0/grutsc"),
        },
        Release {
            version: "v0.9.0",
            source: "trained on NewsMTSC-mt, preview release",
            url: newsmtsc_release!("v0.9.0/grutsc"),
        },
    ],
};

macro_rules! training_only {
    ($ident:ident, $name:literal) => {
        static $ident: StaticModel = StaticModel {
            name: $name,
            default_version: "",
            releases: &[],
        };
    };
}

training_only!(TDBERT, "tdbert");
training_only!(LCF_BERT, "lcf_bert");
training_only!(AEN_BERT, "aen_bert");
training_only!(SPC_BERT, "spc_bert");

static MODELS: &[&dyn PretrainedModel] = &[&GRUTSC, &TDBERT, &LCF_BERT, &AEN_BERT, &SPC_BERT];

/// Lookup of model names to their pretrained capabilities.
pub struct ModelRegistry {
    models: &'static [&'static dyn PretrainedModel],
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self { models: MODELS }
    }
}

impl ModelRegistry {
    pub fn lookup(&self, name: &str) -> Result<&'static dyn PretrainedModel> {
        self.models
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }

    /// Like [`lookup`](Self::lookup), but also rejects models without checkpoints.
    pub fn resolve_pretrained(&self, name: &str) -> Result<&'static dyn PretrainedModel> {
        let model = self.lookup(name)?;
        if !model.includes_pretrained() {
            return Err(Error::UnsupportedModel(name.to_string()));
        }
        Ok(model)
    }

    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name()).collect()
    }
}
