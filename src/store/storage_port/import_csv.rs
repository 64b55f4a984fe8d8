use std::path::Path;

use csv::Reader;
use tracing::{info, warn};

use crate::domain::contact::NewContact;
use crate::errors::AppError;
use crate::store::ContactStore;
use crate::validation::validate_contact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub imported: u64,
    pub skipped: u64,
}

/// Adds every valid row of the `.csv` file at `src` to `store`.
///
/// Rows are treated as untrusted input: each goes through the form rules and
/// the ones that fail are skipped. An `id` column, if present, is ignored and
/// the store assigns fresh ids.
pub fn import_contacts_from_csv(
    store: &mut ContactStore,
    src: &Path,
) -> Result<ImportSummary, AppError> {
    if !src.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if src.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(src)?;
    let mut summary = ImportSummary::default();

    for (line, result) in reader.deserialize::<NewContact>().enumerate() {
        let draft = match result {
            Ok(draft) => draft,
            Err(e) => {
                warn!(row = line + 1, error = %e, "skipping unreadable row");
                summary.skipped += 1;
                continue;
            }
        };

        match validate_contact(&draft) {
            Ok(()) => {
                store.add(draft);
                summary.imported += 1;
            }
            Err(AppError::InvalidForm(errors)) => {
                warn!(row = line + 1, errors = errors.len(), "skipping invalid row");
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        path = %src.display(),
        imported = summary.imported,
        skipped = summary.skipped,
        "contacts imported"
    );
    Ok(summary)
}
