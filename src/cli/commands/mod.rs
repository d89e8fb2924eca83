//! Command implementations

mod expand;
mod init;
mod scan;

use std::path::Path;

use sass_glob_import::config::ConfigFile;
use sass_glob_import::core::models::NamespaceStrategy;
use sass_glob_import::loader::{Loader, LoaderOptions};

use super::app::OptionArgs;

pub use expand::expand;
pub use init::init;
pub use scan::scan;

/// Build a loader from the config file and command-line overrides
///
/// The config file is the explicit `--config`, else the nearest
/// `.sassglob.toml` above `file`. Flags then override it: `--ignore` adds
/// patterns, `--namespace`/`--derive-namespace` replace the strategy.
fn build_loader(file: &Path, args: &OptionArgs) -> anyhow::Result<Loader> {
    let config = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_nearest(&std::path::absolute(file)?)?,
    };

    let mut options = LoaderOptions::from(config);
    options.ignore_paths.extend(args.ignore.iter().cloned());
    if let Some(name) = &args.namespace {
        options.namespace = NamespaceStrategy::Literal(name.clone());
    } else if args.derive_namespace {
        options.namespace = NamespaceStrategy::Derived;
    }

    Ok(Loader::new(options)?)
}
