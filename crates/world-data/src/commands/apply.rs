use crate::commands::{reload_loader, PackSelection};
use crate::errors::CliError;
use crate::println_pad;
use crate::storage::{relative_data_folder, VanillaWorldStorage};
use camino::Utf8PathBuf;
use colored::Colorize;
use wdl_loader::{DimensionLoadEvent, DimensionStorage, WorldDataLoader};
use wdl_resource::ResourceId;

#[derive(Debug, Clone)]
pub struct ApplyWorldDataArgs {
    pub selection: PackSelection,
    pub root: String,
    pub suffix: String,
    pub world_dir: String,
    /// Dimension to materialize; all indexed dimensions when absent.
    pub dimension: Option<String>,
}

/// Run the full pipeline and copy data files into a world save.
pub fn apply_world_data(args: ApplyWorldDataArgs) -> miette::Result<()> {
    let world_dir = Utf8PathBuf::from(args.world_dir);
    if !world_dir.as_std_path().is_dir() {
        return Err(CliError::WorldDirNotFound { path: world_dir }.into());
    }

    let loader = reload_loader(args.selection, &args.root, &args.suffix)?;

    let dimensions: Vec<ResourceId> = match args.dimension {
        Some(value) => {
            let dimension = ResourceId::parse(&value)
                .map_err(|source| CliError::InvalidDimensionId { value, source })?;
            if loader.files_for(&dimension).is_none() {
                println_pad!(
                    "{} {}",
                    "No data files registered for dimension".yellow(),
                    dimension.to_string().bright_cyan()
                );
                return Ok(());
            }
            vec![dimension]
        }
        None => {
            let mut all: Vec<_> = loader.dimensions().cloned().collect();
            all.sort();
            all
        }
    };

    if dimensions.is_empty() {
        println_pad!("{}", "No world data files found".yellow());
        return Ok(());
    }

    for dimension in dimensions {
        apply_dimension(&loader, &world_dir, dimension);
    }

    Ok(())
}

fn apply_dimension(loader: &WorldDataLoader, world_dir: &Utf8PathBuf, dimension: ResourceId) {
    let storage = VanillaWorldStorage::new(world_dir.clone(), dimension.clone());
    let folder = storage
        .data_folder()
        .map(|folder| relative_data_folder(world_dir, &folder))
        .unwrap_or_default();

    let event = DimensionLoadEvent::server(dimension.clone());
    let stats = loader.on_dimension_load(&event, &storage);

    let summary = format!(
        "{} file(s), {} byte(s) -> {}",
        stats.files_written, stats.bytes_written, folder
    );
    if stats.files_failed > 0 {
        println_pad!(
            "{} {} {} {}",
            "⚠".yellow().bold(),
            dimension.to_string().bright_cyan().bold(),
            summary.bright_white(),
            format!("({} failed)", stats.files_failed).red().bold()
        );
    } else {
        println_pad!(
            "{} {} {}",
            "✔".green().bold(),
            dimension.to_string().bright_cyan().bold(),
            summary.bright_white()
        );
    }
}
