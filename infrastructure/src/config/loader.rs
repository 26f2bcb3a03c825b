//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["barista.toml", ".barista.toml"];

/// Prefix for environment overrides; `__` separates nested keys
const ENV_PREFIX: &str = "BARISTA_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `BARISTA_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./barista.toml` or `./.barista.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/barista/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// File layers only, lowest priority first.
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // A missing explicit file is an error rather than silently skipped
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/barista/config.toml if set,
    /// otherwise falls back to ~/.config/barista/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("barista").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}* (nested keys joined by __)", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./barista.toml or ./.barista.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.agent.url.is_none());
        assert_eq!(config.agent.timeout_seconds, 60);
        assert!(config.chat.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("barista"));
    }

    #[test]
    fn test_layers_override_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("barista.toml");
        fs::write(
            &global,
            "[agent]\nurl = \"https://global.example.com\"\ntimeout_seconds = 10\n",
        )
        .unwrap();
        fs::write(&project, "[agent]\ntimeout_seconds = 20\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(&global), Some(&project), None)
            .extract()
            .unwrap();

        assert_eq!(
            config.agent.url.as_deref(),
            Some("https://global.example.com")
        );
        assert_eq!(config.agent.timeout_seconds, 20);
        assert_eq!(config.catalog.collection, "products");
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("barista.toml");
        let explicit = dir.path().join("custom.toml");
        fs::write(&project, "[chat]\nshow_progress = true\n").unwrap();
        fs::write(&explicit, "[chat]\nshow_progress = false\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(None, Some(&project), Some(&explicit))
            .extract()
            .unwrap();

        assert!(!config.chat.show_progress);
    }

    #[test]
    fn test_missing_optional_layers_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let config: FileConfig = ConfigLoader::figment(Some(&missing), Some(&missing), None)
            .extract()
            .unwrap();

        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&missing)).extract();

        assert!(result.is_err());
    }
}
