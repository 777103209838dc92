//! Chore Commands
//!
//! Frontend bindings for chore-related API endpoints.

use super::{ApiClient, Endpoint};
use crate::error::ApiResult;
use crate::models::{Chore, ChorePatch, ChorePayload, CreatedResponse, MessageResponse};

pub async fn get_chore(api: &ApiClient, id: u32) -> ApiResult<Chore> {
    let endpoint = Endpoint::GetChore(id);
    api.execute(endpoint, api.request(&endpoint)).await
}

pub async fn create_chore(api: &ApiClient, payload: &ChorePayload) -> ApiResult<CreatedResponse> {
    let endpoint = Endpoint::CreateChore;
    api.execute(endpoint, api.request(&endpoint).json(payload)).await
}

pub async fn update_chore(api: &ApiClient, id: u32, payload: &ChorePayload) -> ApiResult<MessageResponse> {
    let endpoint = Endpoint::UpdateChore(id);
    api.execute(endpoint, api.request(&endpoint).json(payload)).await
}

pub async fn delete_chore(api: &ApiClient, id: u32) -> ApiResult<MessageResponse> {
    let endpoint = Endpoint::DeleteChore(id);
    api.execute(endpoint, api.request(&endpoint)).await
}

/// Mark complete. The response carries whichever row fields the server updated.
pub async fn complete_chore(api: &ApiClient, id: u32) -> ApiResult<ChorePatch> {
    let endpoint = Endpoint::CompleteChore(id);
    api.execute(endpoint, api.request(&endpoint)).await
}

pub async fn toggle_priority(api: &ApiClient, id: u32) -> ApiResult<ChorePatch> {
    let endpoint = Endpoint::TogglePriority(id);
    api.execute(endpoint, api.request(&endpoint)).await
}

/// Revert the last completion
pub async fn undo_complete(api: &ApiClient, id: u32) -> ApiResult<MessageResponse> {
    let endpoint = Endpoint::UndoComplete(id);
    api.execute(endpoint, api.request(&endpoint)).await
}
