use std::error::Error;
use std::fs;
use std::path::Path;

use blockglyph_blocks::BlockType;
use serde::Deserialize;

/// Text grid options, usually read from a `blockglyph.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    // Line that ends one layer and starts the next. Empty disables layering.
    #[serde(default = "default_separator")]
    pub layer_separator: String,
    #[serde(default = "default_true")]
    pub pad_short_rows: bool,
    #[serde(default = "default_true")]
    pub trim_trailing_air: bool,
    #[serde(default)]
    pub unknown: UnknownPolicy,
    // Upper bound on width * layers * depth accepted by the parser.
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layer_separator: default_separator(),
            pad_short_rows: true,
            trim_trailing_air: true,
            unknown: UnknownPolicy::default(),
            max_cells: default_max_cells(),
        }
    }
}

/// What the parser does with a character outside the display alphabet.
///
/// In TOML: `unknown = "reject"`, `unknown = "skip"` or
/// `unknown = { replace = "air" }`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPolicy {
    #[default]
    Reject,
    Skip,
    Replace(BlockType),
}

impl GridConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: GridConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// A separator spelled only with display characters would be read back as a row.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.max_cells == 0 {
            return Err("max_cells must be positive".into());
        }
        let sep = &self.layer_separator;
        if !sep.is_empty() && sep.chars().all(|c| BlockType::from_display(c).is_some()) {
            return Err(format!(
                "layer_separator {:?} is indistinguishable from a row of blocks",
                sep
            )
            .into());
        }
        Ok(())
    }
}

fn default_separator() -> String {
    "---".to_string()
}
fn default_max_cells() -> usize {
    1 << 24
}
fn default_true() -> bool {
    true
}
