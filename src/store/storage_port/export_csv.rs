use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub const DEFAULT_EXPORT_FILE: &str = "exported.csv";

/// Writes `contacts` to `des` with a header row.
///
/// A directory destination gets `exported.csv` appended. Returns the file
/// written and the number of rows.
pub fn export_contacts_to_csv(
    contacts: &[Contact],
    des: &Path,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = des.to_path_buf();

    if file_path.is_dir() {
        file_path = file_path.join(DEFAULT_EXPORT_FILE);
    } else if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ));
    }

    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    info!(path = %file_path.display(), rows = counter, "contacts exported");
    Ok((file_path, counter))
}
