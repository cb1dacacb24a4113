// src/main.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::warn;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod api;
mod applicants;
mod auth;
mod common;
mod folders;
mod jobs;
mod projects;
mod reports;
mod resumes;

use api::ApiClient;
use auth::SessionStore;
use common::{ClientError, Config};

// ============================================================================
// CLI DEFINITION
// ============================================================================

/// Command-line client for the SmartHire recruiting API
#[derive(Parser, Debug)]
#[command(name = "smarthire")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Override the API base URL (default: SMARTHIRE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Account and session management
    #[command(subcommand)]
    Auth(AuthCommands),
    /// Job postings
    #[command(subcommand)]
    Job(JobCommands),
    /// Resume folders
    #[command(subcommand)]
    Folder(FolderCommands),
    /// Resume uploads
    #[command(subcommand)]
    Resume(ResumeCommands),
    /// Match reports
    #[command(subcommand)]
    Report(ReportCommands),
    /// Applicant detail and verification
    #[command(subcommand)]
    Applicant(ApplicantCommands),
    /// Project threat & SEO analysis
    #[command(subcommand)]
    Project(ProjectCommands),
}

#[derive(Subcommand, Debug)]
enum AuthCommands {
    /// Create an account (signs in on success)
    Register {
        username: String,
        password: String,
    },
    /// Sign in and persist the session token
    Login {
        username: String,
        password: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand, Debug)]
enum JobCommands {
    /// Create a job posting
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma-separated, ordered list of required skills
        #[arg(long, default_value = "")]
        skills: String,
        /// Experience requirement in years
        #[arg(long, default_value_t = 0)]
        experience: i64,
        #[arg(long, default_value_t = 1)]
        vacancies: i64,
        #[arg(long)]
        location: Option<String>,
    },
    /// List job postings
    List,
    /// Update a job posting (partial)
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated, ordered list of required skills
        #[arg(long)]
        skills: Option<String>,
        #[arg(long)]
        experience: Option<i64>,
        #[arg(long)]
        vacancies: Option<i64>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete a job posting
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum FolderCommands {
    /// Create a resume folder
    Create {
        #[arg(long)]
        title: String,
    },
    /// List folders
    List,
    /// Show a folder and its resumes
    Show { id: String },
    /// Rename a folder
    Rename {
        id: String,
        #[arg(long)]
        title: String,
    },
    /// Delete a folder
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ResumeCommands {
    /// Upload resume files into a folder
    Upload {
        folder_id: String,
        /// Files to upload; each is an independent request
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Parallel upload width (default: SMARTHIRE_UPLOAD_CONCURRENCY)
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Delete an uploaded resume
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ReportCommands {
    /// Request a match report for a job against a folder
    Create {
        #[arg(long)]
        job: String,
        #[arg(long)]
        folder: String,
        /// Weighted priorities; must sum to exactly 100
        #[arg(long, default_value_t = 40)]
        skills: u32,
        #[arg(long, default_value_t = 30)]
        experience: u32,
        #[arg(long, default_value_t = 20)]
        projects: u32,
        #[arg(long, default_value_t = 5)]
        location: u32,
        #[arg(long, default_value_t = 5)]
        qualifications: u32,
    },
    /// List reports
    List,
    /// Show a report with its ranked applicants
    Show { id: String },
    /// Browse a report's applicants interactively
    Browse { id: String },
    /// Delete a report
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ApplicantCommands {
    /// Show one applicant
    Show {
        id: String,
        /// overview|skills|experience|projects|education|certificates|social
        #[arg(long, default_value = "overview")]
        tab: String,
    },
    /// Re-verify an applicant's social authenticity
    Verify { id: String },
}

#[derive(Subcommand, Debug)]
enum ProjectCommands {
    /// Run threat & SEO analysis on a project URL
    Analyse { url: String },
}

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }

    let store = SessionStore::new(config.session_file.clone());
    let session = store.load();
    let client = ApiClient::new(reqwest::Client::new(), config.api_url.clone(), session.token);

    if !client.has_token() && !matches!(cli.command, Commands::Auth(_)) {
        warn!("no session token found; sign in with `smarthire auth login`");
    }

    run_command(cli.command, &client, &store, &config).await?;
    Ok(())
}

async fn run_command(
    command: Commands,
    client: &ApiClient,
    store: &SessionStore,
    config: &Config,
) -> Result<(), ClientError> {
    match command {
        Commands::Auth(cmd) => match cmd {
            AuthCommands::Register { username, password } => {
                auth::commands::register(client, store, username, password).await
            }
            AuthCommands::Login { username, password } => {
                auth::commands::login(client, store, username, password).await
            }
            AuthCommands::Logout => auth::commands::logout(store),
            AuthCommands::Whoami => auth::commands::whoami(store),
        },

        Commands::Job(cmd) => match cmd {
            JobCommands::Create {
                title,
                description,
                skills,
                experience,
                vacancies,
                location,
            } => {
                let req = jobs::CreateJob {
                    title,
                    description,
                    skill_required: jobs::parse_skills(&skills),
                    experience_required: experience,
                    vacancies,
                    location,
                };
                jobs::commands::create(client, req).await
            }
            JobCommands::List => jobs::commands::list(client).await,
            JobCommands::Update {
                id,
                title,
                description,
                skills,
                experience,
                vacancies,
                location,
            } => {
                let req = jobs::UpdateJob {
                    title,
                    description,
                    skill_required: skills.as_deref().map(jobs::parse_skills),
                    experience_required: experience,
                    vacancies,
                    location,
                };
                jobs::commands::update(client, &id, req).await
            }
            JobCommands::Delete { id, yes } => jobs::commands::delete(client, &id, yes).await,
        },

        Commands::Folder(cmd) => match cmd {
            FolderCommands::Create { title } => folders::commands::create(client, title).await,
            FolderCommands::List => folders::commands::list(client).await,
            FolderCommands::Show { id } => folders::commands::show(client, &id).await,
            FolderCommands::Rename { id, title } => {
                folders::commands::rename(client, &id, title).await
            }
            FolderCommands::Delete { id, yes } => {
                folders::commands::delete(client, &id, yes).await
            }
        },

        Commands::Resume(cmd) => match cmd {
            ResumeCommands::Upload {
                folder_id,
                files,
                concurrency,
            } => {
                let width = concurrency.unwrap_or(config.upload_concurrency);
                resumes::commands::upload(client, &folder_id, files, width).await
            }
            ResumeCommands::Delete { id, yes } => {
                resumes::commands::delete(client, &id, yes).await
            }
        },

        Commands::Report(cmd) => match cmd {
            ReportCommands::Create {
                job,
                folder,
                skills,
                experience,
                projects,
                location,
                qualifications,
            } => {
                let req = reports::CreateReport {
                    job_id: job,
                    folder_id: folder,
                    priority: reports::Priority {
                        skills,
                        experience,
                        projects,
                        location,
                        qualifications,
                    },
                };
                reports::commands::create(client, req).await
            }
            ReportCommands::List => reports::commands::list(client).await,
            ReportCommands::Show { id } => reports::commands::show(client, &id).await,
            ReportCommands::Browse { id } => reports::commands::browse(client, &id).await,
            ReportCommands::Delete { id, yes } => {
                reports::commands::delete(client, &id, yes).await
            }
        },

        Commands::Applicant(cmd) => match cmd {
            ApplicantCommands::Show { id, tab } => {
                let tab = tab
                    .parse::<applicants::browser::Tab>()
                    .map_err(ClientError::Validation)?;
                applicants::commands::show(client, &id, tab).await
            }
            ApplicantCommands::Verify { id } => applicants::commands::verify(client, &id).await,
        },

        Commands::Project(cmd) => match cmd {
            ProjectCommands::Analyse { url } => projects::commands::analyse(client, &url).await,
        },
    }
}
