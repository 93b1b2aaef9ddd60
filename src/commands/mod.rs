//! Command implementations

mod bulk;
mod check;
mod config_cmd;
mod filters;
#[cfg(feature = "server")]
mod serve;

pub use bulk::bulk;
pub use check::check;
pub use config_cmd::config_cmd;
pub use filters::filters;
#[cfg(feature = "server")]
pub use serve::serve;

use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

/// Read a whole file, or stdin when `path` is `-`
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
