use crate::error::{HabitError, Result};
use crate::types::config::HabitConfig;
use std::path::{Path, PathBuf};
use toml::map::{Entry, Map};
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "habitscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".habitscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/habitscore/config.toml";

/// Loads and merges global, project and local config for the data directory `root`.
/// Missing layers are skipped; with no layers at all the defaults apply.
pub fn load_config(root: &Path) -> Result<HabitConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<HabitConfig> {
    let layers = [
        global_path.map(Path::to_path_buf),
        Some(root.join(DEFAULT_CONFIG_FILE)),
        Some(root.join(DEFAULT_LOCAL_FILE)),
    ];

    let mut merged = Map::new();
    for path in layers.iter().flatten().filter(|path| path.exists()) {
        tracing::debug!(path = %path.display(), "applying config layer");
        overlay_table(&mut merged, parse_layer(path)?, "");
    }

    let cfg: HabitConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| HabitError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse_layer(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| HabitError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Later layers win key by key; tables merge, anything else is replaced whole.
fn overlay_table(base: &mut Map<String, Value>, layer: Map<String, Value>, prefix: &str) {
    for (key, value) in layer {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match (base.entry(key), value) {
            (Entry::Occupied(mut slot), Value::Table(nested)) if slot.get().is_table() => {
                if let Value::Table(existing) = slot.get_mut() {
                    overlay_table(existing, nested, &dotted);
                }
            }
            (Entry::Occupied(mut slot), value) => {
                tracing::trace!(key = %dotted, "config key overridden");
                slot.insert(value);
            }
            (Entry::Vacant(slot), value) => {
                slot.insert(value);
            }
        }
    }
}
