use crate::commands::{reload_loader, PackSelection};
use crate::println_pad;
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct ListWorldDataArgs {
    pub selection: PackSelection,
    pub root: String,
    pub suffix: String,
}

/// Index the selected packs and print the per-dimension file table.
pub fn list_world_data(args: ListWorldDataArgs) -> miette::Result<()> {
    let loader = reload_loader(args.selection, &args.root, &args.suffix)?;

    let mut dimensions: Vec<_> = loader.dimensions().collect();
    dimensions.sort();

    if dimensions.is_empty() {
        println_pad!("{}", "No world data files found".yellow());
        return Ok(());
    }

    for dimension in dimensions {
        let Some(files) = loader.files_for(dimension) else {
            continue;
        };

        println_pad!(
            "{} {}",
            "🌍 Dimension:".bright_blue().bold(),
            dimension.to_string().bright_cyan().bold()
        );

        let mut names: Vec<_> = files.keys().collect();
        names.sort();
        for name in names {
            let entry = &files[name];
            println_pad!(
                "   {} {}{} {}",
                "•".bright_cyan(),
                name.bright_white().bold(),
                args.suffix.bright_white(),
                format!("(from {})", entry.pack()).dimmed()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_discovered_packs() {
        let root = tempdir().unwrap();
        let data = root.path().join("pack_a/mypack/world/overworld");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("spawn.dat"), b"spawn").unwrap();

        let args = ListWorldDataArgs {
            selection: PackSelection {
                packs_dir: Some(root.path().to_str().unwrap().to_string()),
                pack_dirs: Vec::new(),
            },
            root: "world".to_string(),
            suffix: ".dat".to_string(),
        };
        list_world_data(args).unwrap();
    }

    #[test]
    fn lists_empty_pack_set() {
        let root = tempdir().unwrap();

        let args = ListWorldDataArgs {
            selection: PackSelection {
                packs_dir: Some(root.path().to_str().unwrap().to_string()),
                pack_dirs: Vec::new(),
            },
            root: "world".to_string(),
            suffix: ".dat".to_string(),
        };
        list_world_data(args).unwrap();
    }
}
