use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    /// HTML fragment for the page's list container
    Html,
}

#[derive(Parser)]
#[command(name = "cms")]
#[command(about = "A CLI for the site content API", version)]
#[command(after_help = "EXAMPLES:
    cms projects list --format html       Render project cards
    cms clients add --name \"Ana\" ...      Add a client testimonial
    cms contacts submit --full-name ...   Send a contact query
    cms subscribe ana@example.com         Subscribe to the newsletter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, html)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Write list output to a file instead of stdout
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage portfolio projects
    #[command(
        alias = "p",
        after_help = "EXAMPLES:
    cms projects list
    cms projects list --format html --out project-list.html
    cms projects add --name \"Skyline\" --description \"Tower\" --image ./tower.png"
    )]
    Projects {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Manage client testimonials
    #[command(
        alias = "c",
        after_help = "EXAMPLES:
    cms clients list --format html
    cms clients add --name \"Ana\" --description \"Great\" --designation CEO --image ./ana.jpg"
    )]
    Clients {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Contact form queries
    #[command(after_help = "EXAMPLES:
    cms contacts list
    cms contacts submit --full-name \"Sam Lee\" --email sam@example.com --mobile 5550100 --city Pune")]
    Contacts {
        #[command(subcommand)]
        action: ContactCommands,
    },
    /// Newsletter subscribers
    #[command(
        alias = "subs",
        after_help = "EXAMPLES:
    cms subscribers list
    cms subscribers add ana@example.com"
    )]
    Subscribers {
        #[command(subcommand)]
        action: SubscriberCommands,
    },
    /// Subscribe an email (alias for 'subscribers add')
    Subscribe {
        /// Email address; an empty value sends nothing
        email: String,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    cms completions bash > ~/.bash_completion.d/cms
    cms completions zsh > ~/.zfunc/_cms")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects
    #[command(alias = "ls")]
    List,
    /// Upload a new project
    Add(ProjectAddArgs),
}

#[derive(Subcommand)]
pub enum ClientCommands {
    /// List clients
    #[command(alias = "ls")]
    List,
    /// Upload a new client
    Add(ClientAddArgs),
}

#[derive(Subcommand)]
pub enum ContactCommands {
    /// List received contact queries, newest first
    #[command(alias = "ls")]
    List,
    /// Submit a contact query
    Submit(ContactSubmitArgs),
}

#[derive(Subcommand)]
pub enum SubscriberCommands {
    /// List subscribers
    #[command(alias = "ls")]
    List,
    /// Subscribe an email address
    Add {
        /// Email address; an empty value sends nothing
        email: String,
    },
}

#[derive(Args)]
pub struct ProjectAddArgs {
    /// Project name
    #[arg(long, short)]
    pub name: String,

    /// Project description
    #[arg(long, short)]
    pub description: String,

    /// Path to the project image
    #[arg(long, short)]
    pub image: PathBuf,
}

#[derive(Args)]
pub struct ClientAddArgs {
    /// Client name
    #[arg(long, short)]
    pub name: String,

    /// Testimonial text
    #[arg(long, short)]
    pub description: String,

    /// Client's job title
    #[arg(long, short = 't')]
    pub designation: String,

    /// Path to the client photo
    #[arg(long, short)]
    pub image: PathBuf,
}

#[derive(Args)]
pub struct ContactSubmitArgs {
    /// Full name
    #[arg(long)]
    pub full_name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Mobile number
    #[arg(long)]
    pub mobile: String,

    /// City
    #[arg(long)]
    pub city: String,
}
