//! Two-step delete: a prompt must be accepted before the remote DELETE is
//! issued, and the local list only changes once the server confirmed.

use crate::domain::common::{EntityId, HasId};
use std::future::Future;

/// Something that can ask the user a yes/no question.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome<E> {
    /// The prompt was rejected; nothing was sent.
    Cancelled,
    Deleted(EntityId),
    Failed(E),
}

impl<E> DeleteOutcome<E> {
    /// Drop the deleted record from a local list. Other outcomes leave it
    /// untouched. Returns whether a row was removed.
    pub fn apply_to<T: HasId>(&self, items: &mut Vec<T>) -> bool {
        match self {
            DeleteOutcome::Deleted(id) => remove_by_id(items, *id),
            DeleteOutcome::Cancelled | DeleteOutcome::Failed(_) => false,
        }
    }
}

/// Ask first, then call `delete` only if the user agreed.
pub async fn guarded_delete<P, F, Fut, E>(
    prompt: &P,
    message: &str,
    id: EntityId,
    delete: F,
) -> DeleteOutcome<E>
where
    P: ConfirmPrompt + ?Sized,
    F: FnOnce(EntityId) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    if !prompt.confirm(message) {
        return DeleteOutcome::Cancelled;
    }
    match delete(id).await {
        Ok(()) => DeleteOutcome::Deleted(id),
        Err(e) => DeleteOutcome::Failed(e),
    }
}

/// Remove the first record with `id`.
pub fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: EntityId) -> bool {
    match items.iter().position(|item| item.entity_id() == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
