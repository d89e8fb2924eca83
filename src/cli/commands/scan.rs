//! Report wildcard directives without rewriting

use std::fs;
use std::path::Path;

use anyhow::Context;
use sass_glob_import::output::{OutputMode, ScanResult};

use super::build_loader;
use crate::cli::app::OptionArgs;

/// List each wildcard directive in `file` and the files it resolves to
pub fn scan(file: &Path, args: &OptionArgs, mode: OutputMode) -> anyhow::Result<()> {
    let loader = build_loader(file, args)?;
    let source =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;

    let transformed = loader.transform_resource(&source, file)?;
    ScanResult::new(file.display().to_string(), &transformed).render(mode);
    Ok(())
}
