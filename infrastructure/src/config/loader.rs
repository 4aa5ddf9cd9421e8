//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["gradebook.toml", ".gradebook.toml"];

/// Prefix of environment overrides, e.g. `GRADEBOOK_IO__OUTPUT=out.txt`
const ENV_PREFIX: &str = "GRADEBOOK_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GRADEBOOK_` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./gradebook.toml` or `./.gradebook.toml`
    /// 4. Global: `<config dir>/gradebook/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gradebook").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./gradebook.toml or ./.gradebook.toml");
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
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.io.input, PathBuf::from("input.txt"));
        assert!(!config.journal.enabled);
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("gradebook"));
        }
    }

    #[test]
    fn test_project_file_and_env_merge() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "gradebook.toml",
                r#"
[io]
input = "commands.txt"
output = "from-file.txt"
"#,
            )?;
            jail.set_env("GRADEBOOK_IO__OUTPUT", "from-env.txt");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.io.input, PathBuf::from("commands.txt"));
            assert_eq!(config.io.output, PathBuf::from("from-env.txt"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".gradebook.toml", "[journal]\nenabled = false\n")?;
            jail.create_file("custom.toml", "[journal]\nenabled = true\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert!(config.journal.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("gradebook.toml", "[output]\nsummary = \"often\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
