use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wikiref",
    about = "Encode and decode references to objects attached to wiki documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with the default wiki, space and page
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build an object name from a class reference and object number
    Encode(EncodeArgs),
    /// Split an object name into class reference and object number
    Decode(DecodeArgs),
    /// Resolve a document reference against the defaults
    Resolve(ResolveArgs),
    /// Show the effective default values
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Class reference, e.g. XWiki.Mail
    pub class: String,
    #[arg(short = 'n', long)]
    pub number: Option<u32>,
    /// Omit the wiki from the class name
    #[arg(long)]
    pub local: bool,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Object name, e.g. XWiki.Mail[0]
    pub name: String,
    /// Document the object is attached to
    #[arg(short, long)]
    pub document: Option<String>,
}

#[derive(Args)]
pub struct ResolveArgs {
    pub reference: String,
    #[arg(long)]
    pub local: bool,
}

#[derive(Args)]
pub struct ConfigArgs {}
