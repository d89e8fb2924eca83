//! Expand wildcard directives in a stylesheet

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use sass_glob_import::output::{OperationResult, OutputMode};

use super::build_loader;
use crate::cli::app::OptionArgs;

/// Expand `file` and write the result to `output` or stdout
pub fn expand(
    file: &Path,
    output: Option<&Path>,
    args: &OptionArgs,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let loader = build_loader(file, args)?;
    let source =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;

    let transformed = loader.transform_resource(&source, file)?;

    match output {
        Some(path) => {
            fs::write(path, &transformed.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            OperationResult {
                success: true,
                message: format!(
                    "Expanded {} directive(s) from {} into {}",
                    transformed.expansions.len(),
                    file.display(),
                    path.display()
                ),
            }
            .render(mode);
        },
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(transformed.text.as_bytes())?;
            stdout.flush()?;
        },
    }

    Ok(())
}
