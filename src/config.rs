use serde::Deserialize;
use std::collections::HashMap;

use crate::codec::{Codec, CodecOptions, ParamError};

fn default_enabled() -> bool {
    true
}

/// One named variant as declared in a `variants.toml` file.
#[derive(Debug, Deserialize, Clone)]
pub struct VariantConfig {
    /// The alphabet, in symbol-value order.
    pub chars: String,
    /// Raw bytes per packing unit.
    pub group: usize,
    /// Bits per output symbol.
    pub bits: u32,
    #[serde(default = "default_enabled")]
    pub chunked: bool,
    #[serde(default = "default_enabled")]
    pub padding: bool,
    /// Keys nobody recognizes land here instead of failing the whole
    /// config, so a typo like `chunkled` stays detectable.
    #[serde(flatten)]
    pub extra: HashMap<String, toml::Value>,
}

impl VariantConfig {
    /// Names of options that were present in the config but ignored.
    pub fn ignored_options(&self) -> Vec<String> {
        let mut names: Vec<String> = self.extra.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds a validated [`Codec`] from this variant.
    pub fn build(&self) -> Result<Codec, ParamError> {
        let options = CodecOptions {
            chunked: self.chunked,
            padding: self.padding,
        };
        Codec::with_options(self.group, self.bits, self.chars.as_bytes(), options)
    }
}

#[derive(Debug, Deserialize)]
pub struct VariantsConfig {
    pub variants: HashMap<String, VariantConfig>,
}

impl VariantsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../variants.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in variants
    /// 2. Override with ~/.config/base-n/variants.toml if it exists
    /// 3. Override with ./variants.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-n").join("variants.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("variants.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one, overriding existing variants
    pub fn merge(&mut self, other: VariantsConfig) {
        for (name, variant) in other.variants {
            self.variants.insert(name, variant);
        }
    }

    pub fn get_variant(&self, name: &str) -> Option<&VariantConfig> {
        self.variants.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = VariantsConfig::load_default().unwrap();
        assert!(config.variants.contains_key("base64"));
        assert!(config.variants.contains_key("base32"));
        assert!(config.variants.contains_key("base16"));
    }

    #[test]
    fn test_base64_variant_shape() {
        let config = VariantsConfig::load_default().unwrap();
        let base64 = config.get_variant("base64").unwrap();
        assert_eq!(base64.group, 3);
        assert_eq!(base64.bits, 6);
        assert_eq!(base64.chars.len(), 64);
        assert!(base64.chunked);
        assert!(base64.padding);
    }

    #[test]
    fn test_every_builtin_variant_builds() {
        let config = VariantsConfig::load_default().unwrap();
        for (name, variant) in &config.variants {
            variant
                .build()
                .unwrap_or_else(|e| panic!("variant '{}' failed to build: {}", name, e));
            assert!(
                variant.ignored_options().is_empty(),
                "variant '{}' carries unknown keys",
                name
            );
        }
    }

    #[test]
    fn test_merge_configs() {
        let mut config1 = VariantsConfig {
            variants: HashMap::new(),
        };
        config1.variants.insert(
            "test1".to_string(),
            VariantConfig {
                chars: "AB".to_string(),
                group: 1,
                bits: 1,
                chunked: true,
                padding: true,
                extra: HashMap::new(),
            },
        );

        let mut config2 = VariantsConfig {
            variants: HashMap::new(),
        };
        config2.variants.insert(
            "test1".to_string(),
            VariantConfig {
                chars: "CD".to_string(),
                group: 1,
                bits: 1,
                chunked: true,
                padding: true,
                extra: HashMap::new(),
            },
        );
        config2.variants.insert(
            "test2".to_string(),
            VariantConfig {
                chars: "EF".to_string(),
                group: 1,
                bits: 1,
                chunked: true,
                padding: true,
                extra: HashMap::new(),
            },
        );

        config1.merge(config2);

        assert_eq!(config1.variants.len(), 2);
        assert_eq!(config1.get_variant("test1").unwrap().chars, "CD");
        assert_eq!(config1.get_variant("test2").unwrap().chars, "EF");
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[variants.custom]
chars = "0123456789ABCDEF"
group = 1
bits = 4
chunked = false
"#;
        let config = VariantsConfig::from_toml(toml_content).unwrap();
        let custom = config.get_variant("custom").unwrap();
        assert!(!custom.chunked);
        assert!(custom.padding);
        custom.build().unwrap();
    }

    #[test]
    fn test_unknown_option_reported_not_fatal() {
        let toml_content = r#"
[variants.typo]
chars = "0123456789ABCDEF"
group = 1
bits = 4
chunkled = false
"#;
        let config = VariantsConfig::from_toml(toml_content).unwrap();
        let typo = config.get_variant("typo").unwrap();
        assert_eq!(typo.ignored_options(), vec!["chunkled".to_string()]);
        // The variant still builds with the documented defaults.
        let codec = typo.build().unwrap();
        assert!(codec.chunked());
    }

    #[test]
    fn test_bad_parameters_fail_build() {
        let toml_content = r#"
[variants.broken]
chars = "0123456789ABCDEF"
group = 3
bits = 5
"#;
        let config = VariantsConfig::from_toml(toml_content).unwrap();
        assert!(config.get_variant("broken").unwrap().build().is_err());
    }
}
