//! Be The Hero client
//!
//! Terminal front-end for the Be The Hero incident marketplace. Users and organizations
//! log in against the REST backend, organizations publish incidents, and everyone can
//! browse them. Sessions survive restarts through durable local storage.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod fetch;
mod forms;
mod models;
mod pages;
mod ui;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::ApiClient;
use auth::{PrincipalKind, SessionStore};
use config::Config;
use db::LocalStorage;
use errors::AppError;
use forms::{
    EditIncidentForm, IncidentForm, LoginForm, OngRegistrationForm, UserRegistrationForm,
};
use models::{OngProfile, UserProfile};
use pages::{CardDetails, PageView};
use ui::{ConsoleUi, Ui};

/// Client state shared by every page and form.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub storage: LocalStorage,
    pub session: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Open storage, restore the session and build the HTTP client.
    pub async fn init(config: Config) -> Result<Self, AppError> {
        let pool = db::init_database(&config.storage_path).await?;
        let storage = LocalStorage::new(pool);
        let session = Arc::new(SessionStore::restore(storage.clone()).await?);
        let api = ApiClient::new(&config.api_url)?;

        Ok(Self {
            api,
            storage,
            session,
            config: Arc::new(config),
        })
    }
}

#[derive(Parser)]
#[command(name = "bethehero")]
#[command(about = "Be The Hero: find a hero for your cause")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct KindArg {
    /// Act as the organization (ONG) session instead of the user session
    #[arg(long)]
    ong: bool,
}

impl KindArg {
    fn kind(&self) -> PrincipalKind {
        if self.ong {
            PrincipalKind::Organization
        } else {
            PrincipalKind::User
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session
    Login {
        #[command(flatten)]
        kind: KindArg,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session
    Logout {
        #[command(flatten)]
        kind: KindArg,
    },
    /// Create an account
    #[command(subcommand)]
    Register(RegisterCommand),
    /// Show the dashboard with all incidents
    Dashboard {
        #[command(flatten)]
        kind: KindArg,
    },
    /// Show the logged-in profile
    Profile {
        #[command(flatten)]
        kind: KindArg,
    },
    /// Incident actions
    #[command(subcommand)]
    Incident(IncidentCommand),
}

#[derive(Subcommand)]
enum RegisterCommand {
    User {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: String,
    },
    Ong {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        uf: String,
    },
}

#[derive(Args)]
struct IncidentFields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    whatsapp: String,
    #[arg(long)]
    value: String,
}

#[derive(Subcommand)]
enum IncidentCommand {
    Show {
        id: String,
    },
    Create {
        #[command(flatten)]
        fields: IncidentFields,
    },
    /// Load an incident, apply the given changes and save it
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        ong: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        whatsapp: Option<String>,
        #[arg(long)]
        value: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let state = AppState::init(config).await?;
    tracing::debug!("Backend: {}", state.config.api_url);
    tracing::debug!("Storage path: {:?}", state.config.storage_path);

    let mut changes = state.session.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let snapshot = changes.borrow_and_update().clone();
            tracing::debug!(
                "Session changed: user={} organization={}",
                snapshot.user.is_some(),
                snapshot.organization.is_some()
            );
        }
    });

    if let Err(err) = run(cli.command, &state, &ConsoleUi).await {
        tracing::debug!("Command did not complete: {}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run one command. Problems were already shown to the user; the error only
/// decides the exit status.
async fn run(command: Command, state: &AppState, ui: &dyn Ui) -> Result<(), AppError> {
    match command {
        Command::Login {
            kind,
            email,
            password,
        } => {
            let kind = kind.kind();
            if pages::login_page(state, ui, kind) {
                return Ok(());
            }
            LoginForm {
                kind,
                email,
                password,
            }
            .submit(state, ui)
            .await
            .into_result()
            .inspect_err(|_| print_links(&pages::login_links(kind)))
        }
        Command::Logout { kind } => {
            pages::logout(state, ui, kind.kind()).await;
            Ok(())
        }
        Command::Register(RegisterCommand::User {
            name,
            email,
            password,
            phone,
        }) => {
            UserRegistrationForm {
                name,
                email,
                password,
                phone,
            }
            .submit(state, ui)
            .await
            .into_result()
            .inspect_err(|_| print_links(&pages::register_links()))
        }
        Command::Register(RegisterCommand::Ong {
            name,
            email,
            password,
            phone,
            city,
            uf,
        }) => {
            OngRegistrationForm {
                name,
                email,
                password,
                phone,
                city,
                uf,
            }
            .submit(state, ui)
            .await
            .into_result()
        }
        Command::Dashboard { kind } => {
            match kind.kind() {
                PrincipalKind::User => {
                    if let Some(view) =
                        pages::dashboard::<UserProfile>(state, ui, PrincipalKind::User).await
                    {
                        print!("{}", view);
                    }
                }
                PrincipalKind::Organization => {
                    let kind = PrincipalKind::Organization;
                    if let Some(view) = pages::dashboard::<OngProfile>(state, ui, kind).await {
                        print!("{}", view);
                    }
                }
            }
            Ok(())
        }
        Command::Profile { kind } => {
            match kind.kind() {
                PrincipalKind::User => {
                    let profile =
                        pages::profile_page::<UserProfile>(state, ui, PrincipalKind::User).await;
                    if let Some(profile) = profile {
                        println!("{}", profile);
                    }
                }
                PrincipalKind::Organization => {
                    let profile =
                        pages::profile_page::<OngProfile>(state, ui, PrincipalKind::Organization)
                            .await;
                    if let Some(profile) = profile {
                        println!("{}", profile);
                    }
                }
            }
            Ok(())
        }
        Command::Incident(IncidentCommand::Show { id }) => {
            match pages::details_incident(state, ui, Some(&id)).await {
                PageView::Ready(incident) => println!("{}", CardDetails(&incident)),
                PageView::Loading => println!("Loading..."),
            }
            Ok(())
        }
        Command::Incident(IncidentCommand::Create { fields }) => {
            IncidentForm {
                title: fields.title,
                description: fields.description,
                email: fields.email,
                whatsapp: fields.whatsapp,
                value: fields.value,
            }
            .submit(state, ui)
            .await
            .into_result()
        }
        Command::Incident(IncidentCommand::Edit {
            id,
            title,
            description,
            ong,
            email,
            whatsapp,
            value,
        }) => {
            let Some(current) = pages::edit_incident(state, ui, &id).await.ready() else {
                return Ok(());
            };
            let form = EditIncidentForm {
                id: current.id,
                title: title.unwrap_or(current.title),
                description: description.unwrap_or(current.description),
                ong: ong.unwrap_or(current.ong),
                email: email.unwrap_or(current.email),
                whatsapp: whatsapp.unwrap_or(current.whatsapp),
                value: value.unwrap_or(current.value),
            };
            form.submit(state, ui).await.into_result()
        }
        Command::Incident(IncidentCommand::Delete { id }) => {
            pages::delete_incident(state, ui, &id).await;
            Ok(())
        }
    }
}

fn print_links(links: &[ui::Link]) {
    for link in links {
        println!("> {}", link);
    }
}
