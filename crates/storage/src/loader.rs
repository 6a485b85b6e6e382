use quiz_core::model::QuestionStore;
use tracing::{debug, info, warn};

use crate::document::QuestionDocument;
use crate::source::{LoadError, QuestionSource};

/// Fetch, parse and index the question document.
///
/// Records whose answer is not among their options are kept as-is and only
/// reported, since the dataset is not validated beyond field presence.
///
/// # Errors
///
/// Returns `LoadError` when the source cannot be fetched or parsed.
pub async fn load(source: &dyn QuestionSource) -> Result<QuestionStore, LoadError> {
    let location = source.describe();
    debug!(%location, "fetching question document");

    let bytes = source.fetch().await?;
    let store = QuestionDocument::parse(&location, &bytes)?.into_store(&location)?;

    for (region, record) in store.iter() {
        if !record.answer_is_offered() {
            warn!(%region, answer = record.answer(), "answer is not one of the options");
        }
    }

    debug!(regions = ?store.region_names(), "indexed regions");
    info!(%location, regions = store.len(), "question store loaded");
    Ok(store)
}
