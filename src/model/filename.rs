use crate::error::Result;
use crate::model::PretrainedModel;
use reqwest::Url;

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ' ')
}

/// Filesystem-safe name for a checkpoint: `{basename}_{version}` restricted to
/// ASCII letters, digits, `-` and `_`, with `.` mapped to `-` and space to `_`.
pub fn sanitize_filename(basename: &str, version: &str) -> String {
    format!("{}_{}", basename, version)
        .chars()
        .filter(|&c| is_allowed(c))
        .collect::<String>()
        .replace('.', "-")
        .replace(' ', "_")
}

/// Last path segment of `url`, ignoring query and fragment.
pub fn url_basename(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(last) = parsed.path_segments().and_then(|mut s| s.next_back()) {
            return last.to_string();
        }
    }
    url.rsplit('/').next().unwrap_or(url).to_string()
}

pub fn model_filename(model: &dyn PretrainedModel, version: Option<&str>) -> Result<String> {
    let version = version.unwrap_or_else(|| model.default_version());
    let source = model.source_url(Some(version))?;
    Ok(sanitize_filename(&url_basename(source), version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_periods_and_spaces() {
        assert_eq!(
            sanitize_filename("model.v1 final.bin", "2"),
            "model-v1_final-bin_2"
        );
    }

    #[test]
    fn drops_disallowed_characters() {
        let name = sanitize_filename("we!ghts/ä(1).pt", "v1.0:rc");
        assert_eq!(name, "weghts1-pt_v1-0rc");
    }

    #[test]
    fn output_uses_allowed_alphabet_only() {
        let name = sanitize_filename("a b.c?d*e|f\\g\"h", "x y.z\n");
        assert!(name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(!name.contains('.') && !name.contains(' '));
    }

    #[test]
    fn sanitizing_is_deterministic_and_idempotent() {
        let once = sanitize_filename("grutsc.bin", "v1.0.0");
        assert_eq!(once, sanitize_filename("grutsc.bin", "v1.0.0"));
        assert_eq!(once, "grutsc-bin_v1-0-0");
        let base = sanitize_filename("grutsc-bin", "v1-0-0");
        assert_eq!(base, once);
    }

    #[test]
    fn basename_ignores_query_and_fragment() {
        assert_eq!(
            url_basename("https://example.com/a/b/model.bin?token=1#frag"),
            "model.bin"
        );
        assert_eq!(url_basename("not a url/weights.pt"), "weights.pt");
    }

    #[test]
    fn default_version_is_resolved() {
        let registry = crate::model::ModelRegistry::default();
        let model = registry.lookup("grutsc").unwrap();
        assert_eq!(model_filename(model, None).unwrap(), "grutsc_v1-0-0");
        assert_eq!(
            model_filename(model, Some("v0.9.0")).unwrap(),
            "grutsc_v0-9-0"
        );
    }
}
