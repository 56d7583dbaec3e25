use std::path::Path;

use figment::providers::{Data, Format, Json, Toml, Yaml};

/// Picks the figment provider for a config file from its extension, falling
/// back to sniffing the content. Usable directly with `Figment::merge`.
pub fn auto<P: AsRef<Path>>(path: P) -> impl figment::Provider {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "toml" => SmartProvider::Toml(Toml::file(path)),
        "json" => SmartProvider::Json(Json::file(path)),
        "yaml" | "yml" => SmartProvider::Yaml(Yaml::file(path)),
        _ => {
            let detected = std::fs::read_to_string(path)
                .ok()
                .and_then(|content| detect_format_from_content(&content));
            tracing::debug!(
                "Config {} has no known extension, treating as {}",
                path.display(),
                detected.unwrap_or("toml")
            );
            match detected {
                Some("json") => SmartProvider::Json(Json::file(path)),
                Some("yaml") => SmartProvider::Yaml(Yaml::file(path)),
                _ => SmartProvider::Toml(Toml::file(path)),
            }
        }
    }
}

enum SmartProvider {
    Toml(Data<Toml>),
    Json(Data<Json>),
    Yaml(Data<Yaml>),
}

impl figment::Provider for SmartProvider {
    fn metadata(&self) -> figment::Metadata {
        match self {
            SmartProvider::Toml(p) => p.metadata(),
            SmartProvider::Json(p) => p.metadata(),
            SmartProvider::Yaml(p) => p.metadata(),
        }
    }

    fn data(
        &self,
    ) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error> {
        match self {
            SmartProvider::Toml(p) => p.data(),
            SmartProvider::Json(p) => p.data(),
            SmartProvider::Yaml(p) => p.data(),
        }
    }
}

fn detect_format_from_content(content: &str) -> Option<&'static str> {
    let trimmed = content.trim();

    if (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']') && !trimmed.contains('='))
    {
        return Some("json");
    }

    // TOML tables and `key = value` lines
    if trimmed.lines().any(|line| {
        let line = line.trim();
        (line.starts_with('[') && line.ends_with(']')) || line.contains('=')
    }) {
        return Some("toml");
    }

    if trimmed.starts_with("---") || trimmed.lines().any(|line| line.contains(": ") || line.trim_end().ends_with(':')) {
        return Some("yaml");
    }

    None
}
