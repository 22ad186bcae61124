//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// nbuild - locate native toolchains and drive ndk-build and CMake
#[derive(Parser)]
#[command(name = "nbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure and build with the selected toolchain
    Build(BuildArgs),

    /// Remove the build directory
    Clean(CleanArgs),

    /// Show the resolved toolchain and the commands a build would run
    Toolchain(ToolchainArgs),

    /// List the available builder kinds
    Kinds,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Toolchain selection shared by `build` and `toolchain`.
#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// Builder kind (see `nbuild kinds`)
    #[arg(short, long, env = "NBUILD_KIND")]
    pub kind: Option<String>,

    /// Build output directory [default: build]
    #[arg(short = 'd', long)]
    pub build_dir: Option<PathBuf>,

    /// Compiler/toolchain prefix, overriding the environment variable
    #[arg(short, long)]
    pub prefix: Option<String>,
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Remove the build directory before building
    #[arg(long)]
    pub clean: bool,

    /// Extra options passed to ndk-build or the CMake configure step
    #[arg(last = true)]
    pub options: Vec<String>,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Build output directory [default: build]
    #[arg(short = 'd', long)]
    pub build_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ToolchainArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Extra options, shown in the printed commands
    #[arg(last = true)]
    pub options: Vec<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
