use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use xshell::cmd;

#[derive(Debug, clap::Args)]
struct BuildArgs {
    #[arg(long, short)]
    release: bool,

    /// Origin of the catalog backend, compiled into the site.
    #[arg(long, env = "FLIX_API_ORIGIN")]
    api_origin: Option<String>,
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    #[command(flatten)]
    build_args: BuildArgs,

    /// Server configuration file.
    #[arg(long, short, default_value = "flix-server/config.toml")]
    config: PathBuf,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Builds the site bundle and then the server embedding it.
    Build(BuildArgs),
    /// Builds everything and runs the server.
    Run(RunArgs),
    /// Runs the tests of every crate.
    Test,
}

#[derive(Debug, clap::Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn build(args: &BuildArgs) -> anyhow::Result<()> {
    let release = args.release.then_some("--release");

    // The server packs the site bundle at build time, so the site goes first.
    let shell = xshell::Shell::new()?;
    {
        let _dir = shell.push_dir("flix-site");
        let _origin = args
            .api_origin
            .as_deref()
            .map(|origin| shell.push_env("FLIX_API_ORIGIN", origin));
        cmd!(shell, "trunk build {release...}")
            .run()
            .context("Building the site, is trunk installed?")?;
    }

    cmd!(shell, "cargo build {release...} --bin flix-server").run()?;

    Ok(())
}

fn run(args: &RunArgs) -> anyhow::Result<()> {
    build(&args.build_args)?;

    let release = args.build_args.release.then_some("--release");
    let config = &args.config;
    let shell = xshell::Shell::new()?;
    cmd!(
        shell,
        "cargo run {release...} --bin flix-server -- --config {config}"
    )
    .run()?;

    Ok(())
}

fn test() -> anyhow::Result<()> {
    let shell = xshell::Shell::new()?;
    cmd!(shell, "cargo test --workspace --exclude flix-site").run()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match &args.command {
        Command::Build(args) => build(args)?,
        Command::Run(args) => run(args)?,
        Command::Test => test()?,
    }

    Ok(())
}
