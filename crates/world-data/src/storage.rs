//! Vanilla world save layout.

use camino::{Utf8Path, Utf8PathBuf};
use wdl_loader::DimensionStorage;
use wdl_resource::{ResourceId, DEFAULT_NAMESPACE};

/// Maps dimension ids to data folders inside a vanilla-layout world save:
///
/// - `minecraft:overworld` -> `<world>/data`
/// - `minecraft:the_nether` -> `<world>/DIM-1/data`
/// - `minecraft:the_end` -> `<world>/DIM1/data`
/// - anything else -> `<world>/dimensions/<namespace>/<path>/data`
pub struct VanillaWorldStorage {
    world_dir: Utf8PathBuf,
    dimension: ResourceId,
}

impl VanillaWorldStorage {
    pub fn new(world_dir: impl Into<Utf8PathBuf>, dimension: ResourceId) -> Self {
        Self {
            world_dir: world_dir.into(),
            dimension,
        }
    }
}

impl DimensionStorage for VanillaWorldStorage {
    fn data_folder(&self) -> wdl_loader::Result<Utf8PathBuf> {
        let dimension_dir: Utf8PathBuf =
            match (self.dimension.namespace(), self.dimension.path()) {
                (DEFAULT_NAMESPACE, "overworld") => self.world_dir.clone(),
                (DEFAULT_NAMESPACE, "the_nether") => self.world_dir.join("DIM-1"),
                (DEFAULT_NAMESPACE, "the_end") => self.world_dir.join("DIM1"),
                (namespace, path) => {
                    let mut dir = self.world_dir.join("dimensions").join(namespace);
                    for segment in path.split('/') {
                        dir.push(segment);
                    }
                    dir
                }
            };
        Ok(dimension_dir.join("data"))
    }
}

/// The dimension folder relative to the world root, for display purposes.
pub fn relative_data_folder(world_dir: &Utf8Path, folder: &Utf8Path) -> Utf8PathBuf {
    folder
        .strip_prefix(world_dir)
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|_| folder.to_path_buf())
}
