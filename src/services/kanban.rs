//! Kanban service — three fixed columns, drag-move, retain-delete.
//!
//! Cards keep insertion order inside a column; moving a card only
//! rewrites its status, so it drops out of the source column's grouping
//! and appends (by original insertion position) to the target's.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{Card, CardStatus, NewCard};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum KanbanError {
    #[error("card not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl crate::error::ErrorCode for KanbanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_CARD_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
        }
    }
}

/// One rendered column: its status plus the cards grouped into it.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub status: CardStatus,
    pub cards: Vec<Card>,
}

/// Group all cards into the three fixed columns.
pub async fn board(state: &AppState) -> Vec<Column> {
    let directory = state.directory.read().await;
    CardStatus::COLUMNS
        .into_iter()
        .map(|status| Column {
            status,
            cards: directory
                .cards
                .iter()
                .filter(|card| card.status == status)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Add a card. New cards land in `Todo` unless a column is given.
///
/// # Errors
///
/// Returns `Validation` if the title is blank.
pub async fn create_card(state: &AppState, new: NewCard) -> Result<Card, KanbanError> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(KanbanError::Validation("title is required".into()));
    }

    let card = Card {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: new.description,
        status: new.status.unwrap_or(CardStatus::Todo),
        assignee: new.assignee,
        created_at: time::OffsetDateTime::now_utc(),
    };

    let mut directory = state.directory.write().await;
    directory.cards.push(card.clone());
    info!(card_id = %card.id, column = card.status.as_str(), "card created");
    Ok(card)
}

/// The drag-drop: set the card's status to the target column.
///
/// # Errors
///
/// Returns `NotFound` if no card has that id.
pub async fn move_card(state: &AppState, id: Uuid, target: CardStatus) -> Result<Card, KanbanError> {
    let mut directory = state.directory.write().await;
    let card = directory
        .cards
        .iter_mut()
        .find(|card| card.id == id)
        .ok_or(KanbanError::NotFound(id))?;
    let from = card.status;
    card.status = target;
    info!(card_id = %id, from = from.as_str(), to = target.as_str(), "card moved");
    Ok(card.clone())
}

/// Delete a card. The collection is filtered in place.
///
/// # Errors
///
/// Returns `NotFound` if no card has that id.
pub async fn delete_card(state: &AppState, id: Uuid) -> Result<(), KanbanError> {
    let mut directory = state.directory.write().await;
    let before = directory.cards.len();
    directory.cards.retain(|card| card.id != id);
    if directory.cards.len() == before {
        return Err(KanbanError::NotFound(id));
    }
    info!(card_id = %id, "card deleted");
    Ok(())
}

#[cfg(test)]
#[path = "kanban_test.rs"]
mod tests;
