//! Email Digest Command

use super::{ApiClient, Endpoint};
use crate::error::ApiResult;
use crate::models::MessageResponse;

/// Ask the server to email the chore list. Returns the server's message.
pub async fn email_chores(api: &ApiClient) -> ApiResult<String> {
    let endpoint = Endpoint::EmailChores;
    let response: MessageResponse = api.execute(endpoint, api.request(&endpoint)).await?;
    Ok(response.message.unwrap_or_default())
}
