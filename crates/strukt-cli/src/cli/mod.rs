//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strukt",
    bin_name = "strukt",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Structurizr workspace to Ansible inventory",
    long_about = "Strukt parses a Structurizr architecture-model JSON export \
                  into an Ansible inventory: hosts with variables, grouped by \
                  environment, tags, technology, and deployment hierarchy.",
    after_help = "EXAMPLES:\n\
        \x20 strukt list  -i inventory.yml\n\
        \x20 strukt host  -i inventory.yml web-prod-01\n\
        \x20 strukt graph -i inventory.yml --environment Production\n\
        \x20 strukt completions bash > /usr/share/bash-completion/completions/strukt",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Output the full inventory as dynamic-inventory JSON.
    #[command(
        visible_alias = "ls",
        about = "Output the full inventory as JSON",
        after_help = "EXAMPLES:\n\
            \x20 strukt list -i inventory.yml\n\
            \x20 strukt list -i inventory.yml --environment Production\n\
            \x20 strukt list -i inventory.yml --flush-cache"
    )]
    List(ListArgs),

    /// Output one host's variables.
    #[command(
        about = "Output one host's variables",
        after_help = "EXAMPLES:\n\
            \x20 strukt host -i inventory.yml web-prod-01"
    )]
    Host(HostArgs),

    /// Print the inventory group tree.
    #[command(
        about = "Print the inventory group tree",
        after_help = "EXAMPLES:\n\
            \x20 strukt graph -i inventory.yml\n\
            \x20 strukt graph -i inventory.yml --environment Staging"
    )]
    Graph(GraphArgs),

    /// Initialise a starter inventory source file.
    #[command(
        about = "Initialise an inventory source file",
        after_help = "EXAMPLES:\n\
            \x20 strukt init                  # writes ./inventory.yml\n\
            \x20 strukt init ops/prod.yml\n\
            \x20 strukt init --force          # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strukt completions bash > ~/.local/share/bash-completion/completions/strukt\n\
            \x20 strukt completions zsh  > ~/.zfunc/_strukt\n\
            \x20 strukt completions fish > ~/.config/fish/completions/strukt.fish"
    )]
    Completions(CompletionsArgs),
}

// ── Shared parse arguments ────────────────────────────────────────────────────

/// Arguments shared by every command that performs a parse.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Inventory source file (YAML).
    #[arg(
        short = 'i',
        long = "inventory",
        value_name = "FILE",
        help = "Inventory source file"
    )]
    pub inventory: PathBuf,

    /// Restrict to one environment, overriding the config file.
    #[arg(
        short = 'e',
        long = "environment",
        value_name = "ENV",
        help = "Only include this environment"
    )]
    pub environment: Option<String>,

    /// Ignore any cached workspace and re-read the source.
    #[arg(long = "flush-cache", help = "Re-read the source, refreshing the cache")]
    pub flush_cache: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `strukt list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub parse: ParseArgs,

    /// Emit compact JSON on one line instead of pretty-printing.
    #[arg(long = "compact", help = "Compact single-line JSON output")]
    pub compact: bool,
}

// ── host ──────────────────────────────────────────────────────────────────────

/// Arguments for `strukt host`.
#[derive(Debug, Args)]
pub struct HostArgs {
    #[command(flatten)]
    pub parse: ParseArgs,

    /// Host to look up.
    #[arg(value_name = "HOST", help = "Host name to look up")]
    pub host: String,
}

// ── graph ─────────────────────────────────────────────────────────────────────

/// Arguments for `strukt graph`.
#[derive(Debug, Args)]
pub struct GraphArgs {
    #[command(flatten)]
    pub parse: ParseArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strukt init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the starter file.
    #[arg(
        value_name = "PATH",
        default_value = "./inventory.yml",
        help = "Path for the new inventory source file"
    )]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strukt completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
