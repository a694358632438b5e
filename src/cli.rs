use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use textile_client::messages::{ListOptions, DEFAULT_LIST_LIMIT};
use textile_client::tokens::AddOptions;
use textile_client::{ApiConfig, TextileClient};

#[derive(Debug, Parser)]
#[clap(name = "textile", version, about = "Talk to a Textile node over its HTTP API")]
pub(crate) struct Cli {
    #[clap(flatten)]
    pub(crate) connection: ConnectionArgs,

    #[clap(subcommand)]
    pub(crate) command: Command,
}

/// Overrides for the `TEXTILE_API_*` environment settings
#[derive(Debug, Args)]
pub(crate) struct ConnectionArgs {
    /// Scheme and host of the node (e.g. http://127.0.0.1)
    #[clap(long, global = true)]
    pub(crate) url: Option<String>,

    /// API port
    #[clap(long, global = true)]
    pub(crate) port: Option<u16>,

    /// API version
    #[clap(long, global = true)]
    pub(crate) api_version: Option<u32>,

    /// Bearer token sent with every request
    #[clap(long, global = true)]
    pub(crate) auth_token: Option<String>,
}

impl ConnectionArgs {
    pub(crate) fn apply(&self, mut config: ApiConfig) -> ApiConfig {
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(version) = self.api_version {
            config.version = version;
        }
        if let Some(token) = &self.auth_token {
            config.auth_token = Some(token.clone());
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Thread messages
    #[clap(subcommand)]
    Messages(MessagesCommand),
    /// Account notifications
    #[clap(subcommand)]
    Notifications(NotificationsCommand),
    /// Cafe access tokens
    #[clap(subcommand)]
    Tokens(TokensCommand),
}

#[derive(Debug, Subcommand)]
pub(crate) enum MessagesCommand {
    /// Add a message to a thread
    Add { thread: String, body: String },
    /// Get a message by block ID
    Get { id: String },
    /// List thread messages
    List {
        #[clap(long)]
        thread: Option<String>,
        #[clap(long)]
        offset: Option<String>,
        #[clap(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },
    /// Ignore a message by block ID
    Ignore { id: String },
}

#[derive(Debug, Subcommand)]
pub(crate) enum NotificationsCommand {
    /// List all notifications
    List,
    /// Mark a notification as read
    Read { id: String },
    /// Mark all notifications as read
    ReadAll,
}

#[derive(Debug, Subcommand)]
pub(crate) enum TokensCommand {
    /// Create an access token
    Add {
        /// Register this token instead of generating one
        #[clap(long)]
        token: Option<String>,
        /// Do not store the token in the Cafe db
        #[clap(long)]
        no_store: bool,
    },
    /// Check whether a token is valid
    Validate { token: String },
    /// List stored token hashes
    List,
    /// Remove a stored token
    Remove { token: String },
}

/// Result of a command, ready for printing
#[derive(Debug)]
pub(crate) enum Output {
    Json(serde_json::Value),
    Text(String),
    Flag(bool),
}

impl Output {
    fn json<T: Serialize>(value: &T) -> anyhow::Result<Self> {
        Ok(Output::Json(serde_json::to_value(value)?))
    }

    pub(crate) fn render(&self) -> anyhow::Result<String> {
        Ok(match self {
            Output::Json(value) => serde_json::to_string_pretty(value)?,
            Output::Text(text) => text.clone(),
            Output::Flag(flag) => flag.to_string(),
        })
    }
}

pub(crate) async fn execute(client: &TextileClient, command: Command) -> anyhow::Result<Output> {
    match command {
        Command::Messages(command) => {
            let messages = client.messages();
            match command {
                MessagesCommand::Add { thread, body } => {
                    Output::json(&messages.add(&thread, &body).await?)
                }
                MessagesCommand::Get { id } => Output::json(&messages.get(&id).await?),
                MessagesCommand::List {
                    thread,
                    offset,
                    limit,
                } => {
                    let options = ListOptions {
                        thread,
                        offset,
                        limit,
                    };
                    Output::json(&messages.list(options).await?)
                }
                MessagesCommand::Ignore { id } => Output::json(&messages.ignore(&id).await?),
            }
        }
        Command::Notifications(command) => {
            let notifications = client.notifications();
            match command {
                NotificationsCommand::List => Output::json(&notifications.list().await?),
                NotificationsCommand::Read { id } => {
                    Ok(Output::Flag(notifications.read(&id).await?))
                }
                NotificationsCommand::ReadAll => Ok(Output::Flag(notifications.read_all().await?)),
            }
        }
        Command::Tokens(command) => {
            let tokens = client.tokens();
            match command {
                TokensCommand::Add { token, no_store } => {
                    let options = AddOptions {
                        token,
                        store: !no_store,
                    };
                    Ok(Output::Text(tokens.add(options).await?))
                }
                TokensCommand::Validate { token } => Ok(Output::Flag(tokens.validate(&token).await?)),
                TokensCommand::List => Output::json(&tokens.list().await?),
                TokensCommand::Remove { token } => Ok(Output::Flag(tokens.remove(&token).await?)),
            }
        }
    }
}
