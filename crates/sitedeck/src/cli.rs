//! Clap derive structures for the `sitedeck` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// sitedeck -- manage sites, builds, and organizations from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "sitedeck",
    version,
    about = "Manage static-site publishing from the command line",
    long_about = "A CLI for the sitedeck static-site publishing platform.\n\n\
        Covers sites, builds and their logs, custom domains, organization\n\
        membership, environment variables, and preview protection.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Platform profile to use
    #[arg(long, short = 'p', env = "SITEDECK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Platform API host (overrides profile)
    #[arg(long, env = "SITEDECK_HOST", global = true)]
    pub host: Option<String>,

    /// Session token
    #[arg(long, env = "SITEDECK_SESSION_TOKEN", global = true, hide_env = true)]
    pub session_token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SITEDECK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "SITEDECK_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage sites
    #[command(alias = "site", alias = "s")]
    Sites(SitesArgs),

    /// Build history, logs, and reports
    #[command(alias = "build", alias = "b")]
    Builds(BuildsArgs),

    /// Organizations and membership
    #[command(alias = "org")]
    Orgs(OrgsArgs),

    /// Custom domains for a site
    Domains(DomainsArgs),

    /// Site environment variables
    Env(EnvArgs),

    /// Preview basic-auth protection
    BasicAuth(BasicAuthArgs),

    /// Account settings for the current user
    Account(AccountArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SITES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List sites visible to the current user
    #[command(alias = "ls")]
    List {
        /// Filter by organization: "all-options", "unassociated", or an org id
        #[arg(long, default_value = "all-options")]
        org: String,
    },

    /// Get site details
    Get {
        /// Site id
        site: String,
    },

    /// Add a site from an existing repository or a starter template
    Add {
        /// Repository owner (user or GitHub organization)
        #[arg(long, required = true)]
        owner: String,

        /// Repository name
        #[arg(long, required = true)]
        repository: String,

        /// Build engine: hugo, jekyll, node.js, or static
        #[arg(long, default_value = "static")]
        engine: String,

        /// Owning organization id
        #[arg(long)]
        org: Option<i64>,

        /// Starter template to clone instead of an existing repo
        #[arg(long)]
        template: Option<String>,
    },

    /// Update site settings
    Update {
        /// Site id
        site: i64,

        /// Build engine
        #[arg(long)]
        engine: Option<String>,

        /// Default branch
        #[arg(long)]
        default_branch: Option<String>,

        /// Demo branch
        #[arg(long)]
        demo_branch: Option<String>,
    },

    /// Remove a site from the platform (the repository is untouched)
    Delete {
        /// Site id
        site: i64,
    },

    /// Branch configurations for a site
    BranchConfig(BranchConfigArgs),
}

#[derive(Debug, Args)]
pub struct BranchConfigArgs {
    #[command(subcommand)]
    pub command: BranchConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum BranchConfigCommand {
    /// List branch configurations
    #[command(alias = "ls")]
    List {
        /// Site id
        site: i64,
    },

    /// Create or replace the configuration for a deploy context
    Set {
        /// Site id
        site: i64,

        /// Branch name
        #[arg(long, required = true)]
        branch: String,

        /// Deploy context: site, demo, or preview
        #[arg(long, default_value = "site", value_enum)]
        context: DeployContext,

        /// Engine configuration overlay as inline JSON
        #[arg(long)]
        config: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DeployContext {
    /// The live site
    Site,
    /// The demo branch deploy
    Demo,
    /// Pull-request previews
    Preview,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BUILDS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BuildsArgs {
    #[command(subcommand)]
    pub command: BuildsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BuildsCommand {
    /// List build history for a site
    #[command(alias = "ls")]
    List {
        /// Site id
        site: i64,
    },

    /// Get a single build
    Get {
        /// Build id
        build: i64,
    },

    /// Queue a new build of the same branch/commit as an existing one
    Restart {
        /// Build id
        build: i64,

        /// Site id
        #[arg(long, required = true)]
        site: i64,
    },

    /// Print build log output
    Logs {
        /// Build id
        build: i64,

        /// Poll for new output until the build reaches a terminal state
        #[arg(long, short = 'f')]
        follow: bool,
    },

    /// List post-build tasks (scans / reports)
    Tasks {
        /// Build id
        build: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ORGANIZATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OrgsArgs {
    #[command(subcommand)]
    pub command: OrgsCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrgsCommand {
    /// List organizations the current user belongs to
    #[command(alias = "ls")]
    List,

    /// Get organization details
    Get {
        /// Organization id
        org: i64,
    },

    /// List organization members
    Members {
        /// Organization id
        org: i64,
    },

    /// Invite a user by email
    Invite {
        /// Organization id
        org: i64,

        /// Email address to invite
        #[arg(long, required = true)]
        email: String,

        /// Role id to assign
        #[arg(long, required = true)]
        role: i64,
    },

    /// Change a member's role
    SetRole {
        /// Organization id
        org: i64,

        /// User id
        user: i64,

        /// Role id to assign
        #[arg(long, required = true)]
        role: i64,
    },

    /// Remove a member
    Remove {
        /// Organization id
        org: i64,

        /// User id
        user: i64,
    },

    /// List assignable roles
    Roles,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DOMAINS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DomainsArgs {
    #[command(subcommand)]
    pub command: DomainsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DomainsCommand {
    /// List custom domains for a site
    #[command(alias = "ls")]
    List {
        /// Site id
        site: i64,
    },

    /// Register a custom domain (provisioning is asynchronous)
    Add {
        /// Site id
        site: i64,

        /// Domain names, comma-separated
        #[arg(long, required = true)]
        names: String,

        /// Deploy context the domain serves
        #[arg(long, default_value = "site", value_enum)]
        context: DeployContext,
    },

    /// Delete a custom domain
    Delete {
        /// Site id
        site: i64,

        /// Domain id
        domain: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ENVIRONMENT VARIABLES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct EnvArgs {
    #[command(subcommand)]
    pub command: EnvCommand,
}

#[derive(Debug, Subcommand)]
pub enum EnvCommand {
    /// List environment variables (values are shown as hints)
    #[command(alias = "ls")]
    List {
        /// Site id
        site: i64,
    },

    /// Create an environment variable
    Add {
        /// Site id
        site: i64,

        /// Variable name
        #[arg(long, required = true)]
        name: String,

        /// Variable value (write-only; reads return a hint)
        #[arg(long, required = true)]
        value: String,
    },

    /// Delete an environment variable
    Delete {
        /// Site id
        site: i64,

        /// Variable id
        variable: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BASIC AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BasicAuthArgs {
    #[command(subcommand)]
    pub command: BasicAuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum BasicAuthCommand {
    /// Show whether preview protection is configured
    Show {
        /// Site id
        site: i64,
    },

    /// Set (or replace) the preview credentials
    Set {
        /// Site id
        site: i64,

        /// Username
        #[arg(long, required = true)]
        username: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Remove preview protection
    Remove {
        /// Site id
        site: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ACCOUNT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Show the authenticated user
    Show,

    /// Set the build notification preference for a site
    Notify {
        /// Site id
        site: i64,

        /// Preference: none, builds, or site
        #[arg(long, required = true)]
        setting: String,
    },

    /// Revoke the stored GitHub OAuth token
    ResetGithubToken,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a session token in the system keyring
    SetToken {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
