use std::path::{Path, PathBuf};

use anyhow::Context;
use gap_config::{GapConfig, PROJECT_DIR};

use crate::cli::GlobalFlags;

/// Load `.env` and layered configuration for the selected project root.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<GapConfig> {
    let root = project_root(flags)?;
    load_project_dotenv(&root)?;
    GapConfig::load_from(&root)
        .with_context(|| format!("failed to load configuration under {}", root.display()))
}

/// `--project` if given (a `.gapcheck` path resolves to its parent),
/// otherwise the current directory.
pub fn project_root(flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    let Some(project) = &flags.project else {
        return std::env::current_dir().context("failed to determine current directory");
    };

    let path = PathBuf::from(project);
    if path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == PROJECT_DIR)
    {
        return path
            .parent()
            .map(Path::to_path_buf)
            .context("invalid --project path: '.gapcheck' directory has no parent");
    }

    if !path.is_dir() {
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            path.display()
        );
    }
    Ok(path)
}

fn load_project_dotenv(root: &Path) -> anyhow::Result<()> {
    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(project: Option<String>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            project,
        }
    }

    #[test]
    fn gapcheck_dir_resolves_to_parent() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let nested = dir.path().join(PROJECT_DIR);
        let root = project_root(&flags(Some(nested.display().to_string()))).expect("root");
        assert_eq!(root, dir.path());
    }

    #[test]
    fn missing_project_dir_is_an_error() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let missing = dir.path().join("nope");
        let err = project_root(&flags(Some(missing.display().to_string()))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn project_config_file_is_honored() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        std::fs::create_dir(dir.path().join(PROJECT_DIR)).expect("mkdir");
        std::fs::write(
            GapConfig::project_config_path(dir.path()),
            "[general]\ndefault_limit = 3\n",
        )
        .expect("write config");

        let config = load_config(&flags(Some(dir.path().display().to_string()))).expect("config");
        assert_eq!(config.general.default_limit, 3);
    }
}
