//! # poems CLI
//!
//! Command-line interface for the poemstack poem collection.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

use poemstack::commands::{self, AddArgs, RemoveArgs};

const GLOBAL_HELP: &str = "\
Configuration File:
  .poems             Project configuration (store file, staging file, markup, editor)

Markup Tags (expanded when adding):
  <b> </b>  bold                <i> </i>  italics
  <u> </u>  underline           <t> </t>  title (bold and big)
  <r> </r>  align right         <m> </m>  align middle

Getting Started:
  poems                          Interactive menu (0 = add, 1 = remove)
  poems add --title \"Ode\"        Append addpoem.txt as \"Ode\"
  poems remove --title \"ode\"     Remove every poem titled \"Ode\" (any case)
  poems list                     Show stored titles

Learn more:
  poems <COMMAND> --help         Show detailed help for a command";

#[derive(Parser)]
#[command(name = "poems")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Flat-file poem collection with markup and layout-preserving encoding")]
#[command(
    long_about = "poems maintains a single text file of poems for a static site. Each poem is \
written to a staging file, then appended to the store under a title. Spaces and line breaks \
are encoded as HTML so the poem keeps its layout, and shorthand tags expand into styled spans.\n\n\
Run without a command for the interactive menu."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a .poems config in the current directory
    Init,

    /// Append the staged poem to the store
    #[command(
        long_about = "Append the staged poem to the store.\n\n\
Reads the staging file (addpoem.txt by default), refuses it if it already contains the \
__TITLE__ marker, then asks for a title unless --title is given. Spaces become &nbsp;, \
line breaks become <br>, and shorthand tags are expanded unless --raw is set.",
        after_help = "Examples:\n  \
poems add                          Prompt for a title\n  \
poems add --title \"Ode\"            Use the given title\n  \
poems add --edit --title \"Ode\"     Edit addpoem.txt first\n  \
poems add --staging draft.txt      Read a different staging file"
    )]
    Add {
        /// Poem title (prompted for if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Staging file to read instead of the configured one
        #[arg(short, long)]
        staging: Option<PathBuf>,

        /// Open the staging file in your editor before reading it
        #[arg(short, long)]
        edit: bool,

        /// Store shorthand tags untranslated
        #[arg(long)]
        raw: bool,
    },

    /// Remove every poem with the given title (case-insensitive)
    Remove {
        /// Title to remove (prompted for if omitted)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// List stored poem titles
    List,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        return commands::menu();
    };

    match command {
        Commands::Init => commands::init(),

        Commands::Add {
            title,
            staging,
            edit,
            raw,
        } => commands::add(AddArgs {
            title,
            staging,
            edit,
            raw,
        }),

        Commands::Remove { title } => commands::remove(RemoveArgs { title }).map(|_| ()),

        Commands::List => commands::list(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
