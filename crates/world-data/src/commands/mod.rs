use crate::errors::CliError;
use camino::Utf8PathBuf;
use wdl_loader::WorldDataLoader;
use wdl_resource::PackStack;

mod apply;
mod list;

pub use apply::{apply_world_data, ApplyWorldDataArgs};
pub use list::{list_world_data, ListWorldDataArgs};

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

/// Pack selection shared by all subcommands.
#[derive(Debug, Clone)]
pub struct PackSelection {
    /// Directory to discover packs in (`pack.json` manifests apply).
    pub packs_dir: Option<String>,
    /// Explicitly ordered pack directories (later wins).
    pub pack_dirs: Vec<String>,
}

impl PackSelection {
    fn into_stack(self) -> miette::Result<PackStack> {
        if !self.pack_dirs.is_empty() {
            let dirs = self
                .pack_dirs
                .into_iter()
                .map(Utf8PathBuf::from)
                .collect::<Vec<_>>();
            return PackStack::from_dirs(dirs).map_err(|err| match err {
                wdl_resource::Error::InvalidPackDir(path) => {
                    CliError::InvalidPackDir { path }.into()
                }
                source => CliError::PackRead { source }.into(),
            });
        }

        let packs_dir = Utf8PathBuf::from(
            self.packs_dir
                .unwrap_or_else(|| "content_packs".to_string()),
        );
        if !packs_dir.as_std_path().is_dir() {
            return Err(CliError::PacksDirNotFound { path: packs_dir }.into());
        }
        PackStack::discover(&packs_dir)
            .map_err(|source| CliError::PackRead { source }.into())
    }
}

/// Build the loader and run one reload cycle over the selected packs.
fn reload_loader(
    selection: PackSelection,
    root: &str,
    suffix: &str,
) -> miette::Result<WorldDataLoader> {
    let stack = selection.into_stack()?;
    let mut loader = WorldDataLoader::with_config(root, suffix);
    loader.on_reload(&stack);
    Ok(loader)
}
