//! The API client pages use.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use session::{ApiError, AuthedClient};

use super::transport::GlooTransport;
use crate::state::session::SessionSignal;

/// Backend base URL, fixed at build time.
pub const API_URL: &str = match option_env!("TASKDESK_API_URL") {
    Some(url) => url,
    None => session::DEFAULT_API_URL,
};

pub type ApiClient = AuthedClient<GlooTransport, SessionSignal>;

pub fn api_client(session: SessionSignal) -> ApiClient {
    AuthedClient::new(GlooTransport::new(API_URL), session)
}

/// One-line message for an API failure shown in a page banner.
pub fn error_text(error: &ApiError) -> String {
    match error {
        ApiError::Status { status: 403, message: None } => "You do not have access to this resource.".to_owned(),
        ApiError::Status { message: Some(message), .. } => message.clone(),
        ApiError::Transport(_) => "Could not reach the server.".to_owned(),
        other => other.to_string(),
    }
}
