use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    apply_world_data, list_world_data, ApplyWorldDataArgs, ListWorldDataArgs, PackSelection,
};
use miette::Result;

mod commands;
mod errors;
mod storage;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the world data files the selected packs provide, per dimension
    List {
        /// Directory of content packs to discover (pack.json manifests apply)
        #[arg(long, conflicts_with = "pack")]
        packs: Option<String>,

        /// Explicit pack directory; repeat to stack packs (later wins)
        #[arg(long)]
        pack: Vec<String>,

        /// Data directory inside each pack namespace
        #[arg(long, default_value = "world")]
        root: String,

        /// Data file extension
        #[arg(long, default_value = ".dat")]
        suffix: String,
    },
    /// Copy world data files from the selected packs into a world save
    Apply {
        /// Directory of content packs to discover (pack.json manifests apply)
        #[arg(long, conflicts_with = "pack")]
        packs: Option<String>,

        /// Explicit pack directory; repeat to stack packs (later wins)
        #[arg(long)]
        pack: Vec<String>,

        /// Data directory inside each pack namespace
        #[arg(long, default_value = "world")]
        root: String,

        /// Data file extension
        #[arg(long, default_value = ".dat")]
        suffix: String,

        /// The world save directory to materialize into
        #[arg(short, long)]
        world: String,

        /// Dimension id to materialize (all indexed dimensions by default)
        #[arg(short, long)]
        dimension: Option<String>,
    },
}

fn parse_args() -> Args {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = parse_args();

    match args.command {
        Commands::List {
            packs,
            pack,
            root,
            suffix,
        } => list_world_data(ListWorldDataArgs {
            selection: PackSelection {
                packs_dir: packs,
                pack_dirs: pack,
            },
            root,
            suffix,
        }),
        Commands::Apply {
            packs,
            pack,
            root,
            suffix,
            world,
            dimension,
        } => apply_world_data(ApplyWorldDataArgs {
            selection: PackSelection {
                packs_dir: packs,
                pack_dirs: pack,
            },
            root,
            suffix,
            world_dir: world,
            dimension,
        }),
    }
}
