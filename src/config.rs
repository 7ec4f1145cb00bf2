use serde::Deserialize;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kvote.toml";

/// Top-level kvote configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KvoteConfig {
    /// Input parsing settings.
    #[serde(default)]
    pub io: IoToml,

    /// Classification settings.
    #[serde(default)]
    pub classify: ClassifyToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_true")]
    pub has_header: bool,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_header: true,
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifyToml {
    #[serde(default)]
    pub parallel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: KvoteConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.io.delimiter, ",");
        assert!(cfg.io.has_header);
        assert!(!cfg.classify.parallel);
    }

    #[test]
    fn full_file() {
        let cfg: KvoteConfig = toml::from_str(
            r#"
            [io]
            delimiter = ";"
            has_header = false

            [classify]
            parallel = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.io.delimiter, ";");
        assert!(!cfg.io.has_header);
        assert!(cfg.classify.parallel);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(toml::from_str::<KvoteConfig>("[io]\nsep = \",\"\n").is_err());
    }
}
