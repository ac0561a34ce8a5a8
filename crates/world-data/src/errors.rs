use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Content packs directory not found: {path}")]
    #[diagnostic(
        code(packs::dir_not_found),
        help("Pass --packs <dir> pointing at a directory of content packs, or one or more --pack <dir> flags")
    )]
    PacksDirNotFound { path: Utf8PathBuf },

    #[error("Invalid pack directory: {path}")]
    #[diagnostic(
        code(packs::invalid_dir),
        help("Every --pack argument must be an existing directory")
    )]
    InvalidPackDir { path: Utf8PathBuf },

    #[error("World directory not found: {path}")]
    #[diagnostic(
        code(world::dir_not_found),
        help("Pass --world <dir> pointing at an existing world save directory")
    )]
    WorldDirNotFound { path: Utf8PathBuf },

    #[error("Invalid dimension id: {value}")]
    #[diagnostic(
        code(dimension::invalid_id),
        help("Dimension ids look like 'minecraft:overworld' or 'mypack:mydim' (lowercase, no spaces)")
    )]
    InvalidDimensionId {
        value: String,
        #[source]
        source: wdl_resource::Error,
    },

    #[error("Failed to read content packs")]
    #[diagnostic(code(packs::read_failed))]
    PackRead {
        #[source]
        source: wdl_resource::Error,
    },
}
