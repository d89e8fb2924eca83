//! Create a starter configuration file

use std::fs;
use std::path::Path;

use sass_glob_import::config::CONFIG_FILE;
use sass_glob_import::output::{OperationResult, OutputMode};

const TEMPLATE: &str = r#"# sass-glob-import configuration

# Paths (relative to the stylesheet's directory) left out of expansion.
# ignore_paths = ["**/_legacy-*.scss"]

# Namespace for expanded @use directives:
#   "*"   - alias every module with `as *`
#   true  - derive a name from the path, e.g. components/_button.scss -> components-button
#   false - no alias (default)
# namespace = "*"
"#;

/// Write `.sassglob.toml` into the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Already initialized ({CONFIG_FILE} exists). Use --force to overwrite."),
        }
        .render(mode);
        return Ok(());
    }

    fs::write(path, TEMPLATE)?;
    OperationResult {
        success: true,
        message: format!("Created {CONFIG_FILE}"),
    }
    .render(mode);
    Ok(())
}
