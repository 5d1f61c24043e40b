use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Manual alias overrides, in the order they were written.
///
/// ```json
/// {
///   "aliases": { "useGetPartiesApiPartiesGet": "useParties" },
///   "typeAliases": { "PartyRead": "Party" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasConfig {
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
    #[serde(default)]
    pub type_aliases: IndexMap<String, String>,
}

impl AliasConfig {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Load the config at `path`. A missing file is not an error: manual
    /// aliases are optional.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        let config = Self::from_json(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.type_aliases.is_empty()
    }
}
