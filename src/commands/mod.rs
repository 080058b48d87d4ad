/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod add_remove;
pub mod views;

use crate::api::{HttpApi, HttpConfig};
use crate::cli::OutputCtx;
use crate::cli::args::{Command, ConnectionArgs};
use crate::definition::{ActionError, MembershipChange};

/// Dispatch a parsed `Command` to its handler.
///
/// The HTTP client is only built once a command has validated its own options.
///
/// # Errors
///
/// Returns `ActionError` on any command failure.
pub fn dispatch(
    command: &Command,
    conn: &ConnectionArgs,
    ctx: &OutputCtx,
) -> Result<(), ActionError> {
    let client = || connect(conn);
    match command {
        Command::AddView(args) => add_remove::run(args, MembershipChange::Add, client, ctx),
        Command::RemoveView(args) => add_remove::run(args, MembershipChange::Remove, client, ctx),
        Command::Views(args) => views::run(args, client, ctx),
    }
}

/// Build the HTTP API client from connection settings.
///
/// # Errors
///
/// Returns `ActionError::Config` if the server URL is invalid or the client
/// cannot be constructed.
pub fn connect(conn: &ConnectionArgs) -> Result<HttpApi, ActionError> {
    let config = HttpConfig::new(
        &conn.server,
        conn.username.clone(),
        conn.password.clone(),
        conn.insecure,
    )
    .map_err(|e| ActionError::Config(e.to_string()))?;
    HttpApi::new(config).map_err(|e| ActionError::Config(e.to_string()))
}
