//! Configuration management for Todosync
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (TODOSYNC_*)
//! 3. Config file (~/.config/todosync/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Where the checklist is read from
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the todo.md file
    pub todo_file: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            todo_file: PathBuf::from("todo.md"),
        }
    }
}

/// Where exported tasks are written
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON export
    pub export_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export_file: PathBuf::from("todo-tasks.json"),
        }
    }
}

/// Console summary settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Tasks listed per category before "... and N more"
    pub preview_tasks: usize,
    /// Characters of task text shown per listed task
    pub preview_width: usize,
    /// Issues whose body preview is printed
    pub body_preview_issues: usize,
    /// Characters of body shown per body preview
    pub body_preview_width: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            preview_tasks: 3,
            preview_width: 60,
            body_preview_issues: 3,
            body_preview_width: 100,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub summary: SummaryConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/todosync/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("todosync").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - TODOSYNC_TODO_FILE: Path to the todo file
    /// - TODOSYNC_EXPORT_FILE: Path of the JSON export
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(todo_file) = std::env::var("TODOSYNC_TODO_FILE") {
            self.input.todo_file = PathBuf::from(todo_file);
        }

        if let Ok(export_file) = std::env::var("TODOSYNC_EXPORT_FILE") {
            self.output.export_file = PathBuf::from(export_file);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        todo_file: Option<PathBuf>,
        export_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = todo_file {
            self.input.todo_file = path;
        }

        if let Some(path) = export_file {
            self.output.export_file = path;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// `config_file` replaces the default location when given.
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        config_file: Option<&Path>,
        todo_file: Option<PathBuf>,
        export_file: Option<PathBuf>,
    ) -> Result<Self> {
        let base = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        Ok(base
            .with_env_overrides()
            .with_cli_overrides(todo_file, export_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input.todo_file, PathBuf::from("todo.md"));
        assert_eq!(config.output.export_file, PathBuf::from("todo-tasks.json"));
        assert_eq!(config.summary.preview_tasks, 3);
        assert_eq!(config.summary.preview_width, 60);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some(PathBuf::from("docs/todo.md")),
            Some(PathBuf::from("out.json")),
        );

        assert_eq!(config.input.todo_file, PathBuf::from("docs/todo.md"));
        assert_eq!(config.output.export_file, PathBuf::from("out.json"));
    }

    #[test]
    fn test_cli_overrides_none_keeps_values() {
        let config = Config::default().with_cli_overrides(None, None);
        assert_eq!(config.input.todo_file, PathBuf::from("todo.md"));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[input]
todo_file = "planning/todo.md"

[output]
export_file = "build/tasks.json"

[summary]
preview_tasks = 5
preview_width = 40
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.input.todo_file, PathBuf::from("planning/todo.md"));
        assert_eq!(config.output.export_file, PathBuf::from("build/tasks.json"));
        assert_eq!(config.summary.preview_tasks, 5);
        assert_eq!(config.summary.preview_width, 40);
        // Unset fields use defaults
        assert_eq!(config.summary.body_preview_issues, 3);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[output]
export_file = "tasks.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.input.todo_file, PathBuf::from("todo.md"));
        assert_eq!(config.output.export_file, PathBuf::from("tasks.json"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\ntodo_file = \"custom.md\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.input.todo_file, PathBuf::from("custom.md"));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input\ntodo_file = ").unwrap();

        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_with_explicit_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\ntodo_file = \"from-file.md\"\n\n[summary]\npreview_tasks = 7").unwrap();

        let config = Config::load_with_overrides(Some(file.path()), None, None).unwrap();
        assert_eq!(config.input.todo_file, PathBuf::from("from-file.md"));
        assert_eq!(config.summary.preview_tasks, 7);
    }

    #[test]
    fn test_cli_beats_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\ntodo_file = \"from-file.md\"\n\n[summary]\npreview_tasks = 7").unwrap();

        let config = Config::load_with_overrides(
            Some(file.path()),
            Some(PathBuf::from("from-cli.md")),
            None,
        )
        .unwrap();
        assert_eq!(config.input.todo_file, PathBuf::from("from-cli.md"));
        // Values not given on the command line still come from the file
        assert_eq!(config.summary.preview_tasks, 7);
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(
            Config::load_with_overrides(Some(&path), None, None),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_env_overrides_then_cli() {
        // Only this test touches TODOSYNC_EXPORT_FILE
        std::env::set_var("TODOSYNC_EXPORT_FILE", "from-env.json");

        let config = Config::default().with_env_overrides();
        assert_eq!(config.output.export_file, PathBuf::from("from-env.json"));

        let config = config.with_cli_overrides(None, Some(PathBuf::from("from-cli.json")));
        assert_eq!(config.output.export_file, PathBuf::from("from-cli.json"));

        std::env::remove_var("TODOSYNC_EXPORT_FILE");
    }
}
