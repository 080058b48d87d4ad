/// CLI argument definitions via clap derive.
use clap::{Args, Parser, Subcommand, ValueEnum};

/// cvdcli — manage the component views of Katello content view definitions.
#[derive(Debug, Parser)]
#[command(
    name = "cvdcli",
    about = "Manage the component views of Katello content view definitions",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log API calls and timings to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Server connection settings. Each flag falls back to an environment variable.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Katello server base URL.
    #[arg(
        long,
        global = true,
        env = "CVDCLI_SERVER",
        value_name = "URL",
        default_value = "https://localhost/katello"
    )]
    pub server: String,

    /// Username for HTTP basic authentication.
    #[arg(long, global = true, env = "CVDCLI_USERNAME", value_name = "USER")]
    pub username: Option<String>,

    /// Password for HTTP basic authentication.
    #[arg(
        long,
        global = true,
        env = "CVDCLI_PASSWORD",
        value_name = "PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Accept invalid TLS certificates.
    #[arg(
        long,
        global = true,
        env = "CVDCLI_INSECURE",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub insecure: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// View ids only, one per line.
    Id,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a content view to a content view definition.
    AddView(MembershipArgs),
    /// Remove a content view from a content view definition.
    RemoveView(MembershipArgs),
    /// List the content views of a content view definition.
    Views(ViewsArgs),
}

/// Arguments for `cvdcli add-view` and `cvdcli remove-view`.
///
/// The three identifying options are validated together before any request
/// is made, so they are optional at the clap level.
#[derive(Debug, Default, Args)]
pub struct MembershipArgs {
    /// Organization name.
    #[arg(long, value_name = "NAME")]
    pub org: Option<String>,

    /// Content view definition label.
    #[arg(long, value_name = "LABEL")]
    pub label: Option<String>,

    /// Content view label.
    #[arg(long = "content_view", visible_alias = "content-view", value_name = "LABEL")]
    pub content_view: Option<String>,

    /// Show the resulting view list without updating the definition.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `cvdcli views`.
#[derive(Debug, Args)]
pub struct ViewsArgs {
    /// Organization name.
    #[arg(long, value_name = "NAME")]
    pub org: String,

    /// Content view definition label.
    #[arg(long, value_name = "LABEL")]
    pub label: String,
}
