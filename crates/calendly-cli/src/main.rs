use anyhow::Result;
use calendly_client::{CalendlyClient, EventStatus, EventTypesQuery, EventsQuery};
use calendly_core::Config;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "calendly")]
#[command(about = "Command-line client for the Calendly API v2", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the authenticated user
    Me,

    /// Show a user by UUID
    User {
        /// User UUID
        id: String,
    },

    /// List a user's event types
    EventTypes {
        /// URI of the user owning the event types
        #[arg(long)]
        user: String,

        #[arg(long, default_value = "name:asc")]
        sort: String,

        /// Page size
        #[arg(long, default_value_t = 20)]
        count: u32,

        /// Cursor from a previous page
        #[arg(long)]
        page_token: Option<String>,
    },

    /// Show an event type by UUID
    EventType {
        /// Event type UUID
        id: String,
    },

    /// List scheduled events
    Events {
        /// Page size
        #[arg(long, default_value_t = 20)]
        count: u32,

        #[arg(long, default_value = "start_time:asc")]
        sort: String,

        #[arg(long)]
        invitee_email: Option<String>,

        #[arg(long)]
        max_start_time: Option<String>,

        #[arg(long)]
        min_start_time: Option<String>,

        /// Organization URI
        #[arg(long)]
        organization: Option<String>,

        #[arg(long)]
        page_token: Option<String>,

        /// active or canceled
        #[arg(long)]
        status: Option<EventStatus>,

        /// User URI
        #[arg(long)]
        user: Option<String>,
    },

    /// Exchange a refresh token for a new access token
    Refresh {
        /// Refresh token to exchange (defaults to CALENDLY_REFRESH_TOKEN)
        #[arg(long)]
        refresh_token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let mut client = CalendlyClient::from_config(&config)?;

    let body = match cli.command {
        Commands::Me => client.get_current_user().await?,

        Commands::User { id } => client.get_user(&id).await?,

        Commands::EventTypes {
            user,
            sort,
            count,
            page_token,
        } => {
            let mut query = EventTypesQuery::new(user).sort(sort).count(count);
            query.page_token = page_token;
            client.list_user_event_types(&query).await?
        }

        Commands::EventType { id } => client.get_event_type(&id).await?,

        Commands::Events {
            count,
            sort,
            invitee_email,
            max_start_time,
            min_start_time,
            organization,
            page_token,
            status,
            user,
        } => {
            let query = EventsQuery {
                count,
                sort,
                invitee_email,
                max_start_time,
                min_start_time,
                organization_uri: organization,
                page_token,
                status,
                user_uri: user,
            };
            client.list_events(&query).await?
        }

        Commands::Refresh { refresh_token } => {
            let refresh_token = refresh_token.unwrap_or_else(|| config.refresh_token.clone());

            match client.renew_with_refresh_token(&refresh_token).await? {
                Some(next) => {
                    info!("Store the new refresh token, the old one is no longer valid");
                    println!("{}", next);
                }
                None => warn!("Authorization server did not issue a new refresh token"),
            }
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
