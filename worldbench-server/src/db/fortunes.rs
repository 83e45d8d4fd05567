//! Fortune listing

use super::error::Outcome;
use super::store::WorldStore;
use crate::models::{prepare_fortunes, Fortune};

/// Fetch all fortunes, add the request-time entry, and sort by message.
///
/// Escaping is left to the renderer.
pub async fn list_fortunes<S>(store: &S) -> Outcome<Vec<Fortune>>
where
    S: WorldStore + ?Sized,
{
    let fortunes = store.fetch_fortunes().await?;
    Ok(prepare_fortunes(fortunes))
}
