use anyhow::Result;
use appforge_application::{GenerationDriver, ProjectService, demo};
use appforge_core::generation::GenerationConfig;
use appforge_core::identity::StaticCredentialVerifier;
use appforge_core::session::SessionManager;
use appforge_infrastructure::{ForgePaths, InMemoryProjectRepository, TomlSessionRepository};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "appforge")]
#[command(about = "AppForge CLI - AI application generator client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        email: String,
        password: String,
    },
    /// Create an account and log in
    Signup {
        name: String,
        email: String,
        password: String,
    },
    /// Log in via an OAuth provider
    Oauth {
        /// Provider name, e.g. "github" or "google"
        provider: String,
    },
    /// Log out and discard the persisted session
    Logout,
    /// Show the current session
    Whoami,
    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Run the generation simulation for a project
    Generate {
        /// Project id to generate
        project_id: String,
        /// Restart part-way through, as "request changes" does
        #[arg(long)]
        from: Option<u8>,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List projects with dashboard summary counts
    List,
    /// Show one project in full
    Show { id: String },
    /// Add a project
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Technology entries, repeatable
        #[arg(long = "tech")]
        technologies: Vec<String>,
        /// Feature identifiers, repeatable
        #[arg(long = "feature")]
        features: Vec<String>,
    },
    /// Remove a project
    Remove { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let paths = ForgePaths::new(None)?;
    let sessions = SessionManager::new(
        Arc::new(TomlSessionRepository::new(&paths)?),
        Arc::new(StaticCredentialVerifier),
    );
    sessions.restore().await?;

    // Projects are in-memory demo state, freshly seeded each invocation
    let projects = ProjectService::new(Arc::new(InMemoryProjectRepository::new()));
    demo::seed_if_empty(&projects).await?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::account::login(&sessions, &email, &password).await?
        }
        Commands::Signup {
            name,
            email,
            password,
        } => commands::account::signup(&sessions, &name, &email, &password).await?,
        Commands::Oauth { provider } => commands::account::oauth(&sessions, &provider).await?,
        Commands::Logout => commands::account::logout(&sessions).await?,
        Commands::Whoami => commands::account::whoami(&sessions).await?,
        Commands::Project { action } => match action {
            ProjectAction::List => commands::project::list(&projects).await?,
            ProjectAction::Show { id } => commands::project::show(&projects, &id).await?,
            ProjectAction::Add {
                name,
                description,
                technologies,
                features,
            } => {
                commands::project::add(&projects, name, description, technologies, features).await?
            }
            ProjectAction::Remove { id } => commands::project::remove(&projects, &id).await?,
        },
        Commands::Generate { project_id, from } => {
            let driver = GenerationDriver::new(GenerationConfig::default());
            commands::generate::run(&projects, &driver, &project_id, from).await?
        }
    }

    Ok(())
}
