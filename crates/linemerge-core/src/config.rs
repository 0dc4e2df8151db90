use crate::interactive::print_warning;
use crate::model::{MergeSection, OutputSection, PartialProjectConfig, ProjectConfig};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".linemerge";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOCAL_CONFIG_FILE: &str = "config.local.toml";

pub fn project_config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load config with precedence:
/// 1. User config (~/.linemerge/config.toml) - lowest priority
/// 2. Project config (.linemerge/config.toml) - medium priority
/// 3. Local config (.linemerge/config.local.toml) - highest priority
///
/// Later configs override earlier ones, field by field
pub fn load_config_with_precedence() -> Result<ProjectConfig> {
    load_config_from(Path::new("."))
}

/// Same as [`load_config_with_precedence`] but relative to `base` instead of the cwd
pub fn load_config_from(base: &Path) -> Result<ProjectConfig> {
    let mut configs = Vec::new();

    // 1. Try user config
    if let Some(home_dir) = dirs::home_dir() {
        let user_config = home_dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if user_config.exists() {
            match load_single_config(&user_config) {
                Ok(cfg) => configs.push(cfg),
                Err(e) => print_warning(&format!("Failed to load user config: {:#}", e)),
            }
        }
    }

    // 2. Load project config (required)
    let project_config = project_config_path(base);
    if !project_config.exists() {
        anyhow::bail!("Project config not found at {}/{}", CONFIG_DIR, CONFIG_FILE);
    }
    configs.push(load_single_config(&project_config)?);

    // 3. Try local config (optional override)
    let local_config = base.join(CONFIG_DIR).join(LOCAL_CONFIG_FILE);
    if local_config.exists() {
        match load_single_config(&local_config) {
            Ok(cfg) => configs.push(cfg),
            Err(e) => print_warning(&format!("Failed to load local config: {:#}", e)),
        }
    }

    merge_configs(configs)
}

/// Load a single config file as a partial config
fn load_single_config(path: &Path) -> Result<PartialProjectConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: PartialProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Merge partial configs (later overrides earlier) and validate the result
fn merge_configs(configs: Vec<PartialProjectConfig>) -> Result<ProjectConfig> {
    if configs.is_empty() {
        anyhow::bail!("No configs to merge");
    }

    let mut merged = PartialProjectConfig::default();

    for cfg in configs {
        if let Some(new_merge) = cfg.merge {
            let mut section = merged.merge.take().unwrap_or_default();
            if new_merge.sources.is_some() {
                section.sources = new_merge.sources;
            }
            merged.merge = Some(section);
        }

        if let Some(new_output) = cfg.output {
            let mut section = merged.output.take().unwrap_or_default();
            if new_output.path.is_some() {
                section.path = new_output.path;
            }
            merged.output = Some(section);
        }

        if let Some(new_format) = cfg.format {
            let mut format = merged.format.take().unwrap_or_default();
            if new_format.leading_blank_line.is_some() {
                format.leading_blank_line = new_format.leading_blank_line;
            }
            merged.format = Some(format);
        }
    }

    validate_and_convert(merged)
}

/// Check required fields of a merged partial config and convert to ProjectConfig
fn validate_and_convert(partial: PartialProjectConfig) -> Result<ProjectConfig> {
    let sources = partial
        .merge
        .and_then(|m| m.sources)
        .ok_or_else(|| anyhow::anyhow!("Missing required field: merge.sources"))?;

    if sources.is_empty() {
        anyhow::bail!("merge.sources must list at least one file");
    }

    let path = partial
        .output
        .and_then(|o| o.path)
        .ok_or_else(|| anyhow::anyhow!("Missing required field: output.path"))?;

    Ok(ProjectConfig {
        merge: MergeSection { sources },
        output: OutputSection { path },
        format: partial.format,
    })
}
