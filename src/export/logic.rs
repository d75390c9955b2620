use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SubscriptionExport;
use crate::store::SubscriptionStore;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write every subscription, with renewal data as of `reference`.
    /// `file` must be an absolute path. Returns the number of rows written.
    pub fn export(
        store: &mut dyn SubscriptionStore,
        reference: NaiveDate,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows: Vec<SubscriptionExport> = store
            .list()?
            .iter()
            .map(|s| SubscriptionExport::from_subscription(s, reference))
            .collect();

        if rows.is_empty() {
            warning("No subscriptions to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
