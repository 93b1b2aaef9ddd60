//! Manage configuration

use std::path::{Path, PathBuf};

use nonsense::config::Config;
use nonsense::output::{OperationResult, OutputMode};

use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(
    action: ConfigAction,
    explicit: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init { force } => init(explicit, force, mode),
        ConfigAction::Show => {
            let config = Config::load(explicit)?;
            print!("{}", config.to_toml()?);
            Ok(())
        },
        ConfigAction::Path => {
            let path = target_path(explicit)?;
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
            Ok(())
        },
    }
}

fn init(explicit: Option<&Path>, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = target_path(explicit)?;

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("{} already exists (use --force to overwrite)", path.display()),
        }
        .render(mode);
        return Ok(());
    }

    Config::default().save(&path)?;
    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}

/// The explicit path, or the global config path
fn target_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(Config::global_path)
        .ok_or_else(|| anyhow::anyhow!("no config directory on this platform; pass --config"))
}
