// File-backed timesheet table, one xlsx worksheet with a Date, Status and
// Remarks column.
//
// Responsibilities
// - Create an empty table on first access when the backing file is absent.
// - Upsert by normalized date: overwrite status and remarks in place on a
//   match, append otherwise.
// - Persist the whole table after every mutation. Nothing survives a
//   request in memory.
//
// Boundaries
// - Concurrent writers against the same path are not synchronized. The last
//   write wins.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{Format, Workbook};
use thiserror::Error;

const COLUMNS: [&str; 3] = ["Date", "Status", "Remarks"];

pub const EMPTY_RESULT: &str = "The timesheet is empty.";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("timesheet {path} is unreadable: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("timesheet {path} has no worksheet")]
    NoWorksheet { path: String },

    #[error("failed to write timesheet {path}: {reason}")]
    Write { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetEntry {
    pub date: String,
    pub status: String,
    pub remarks: String,
}

#[derive(Debug, Default)]
pub struct TimesheetTable {
    pub entries: Vec<TimesheetEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    Added,
    Updated,
}

impl std::fmt::Display for UpsertAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpsertAction::Added => write!(f, "added"),
            UpsertAction::Updated => write!(f, "updated"),
        }
    }
}

impl TimesheetTable {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let unreadable = |reason: String| StoreError::Unreadable {
            path: path.display().to_string(),
            reason,
        };

        let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
            open_workbook(path).map_err(|e: calamine::XlsxError| unreadable(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| StoreError::NoWorksheet {
                path: path.display().to_string(),
            })?
            .map_err(|e| unreadable(e.to_string()))?;

        let entries = range
            .rows()
            .skip(1)
            .map(|row| {
                let cell = |index: usize| row.get(index).map(Data::to_string).unwrap_or_default();
                TimesheetEntry {
                    date: cell(0),
                    status: cell(1),
                    remarks: cell(2),
                }
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let write_failed = |reason: String| StoreError::Write {
            path: path.display().to_string(),
            reason,
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Format::new().set_bold();
        for (column, name) in COLUMNS.iter().enumerate() {
            worksheet
                .write_with_format(0, column as u16, *name, &header)
                .map_err(|e| write_failed(e.to_string()))?;
        }
        for (index, entry) in self.entries.iter().enumerate() {
            let row = index as u32 + 1;
            let cells = [&entry.date, &entry.status, &entry.remarks];
            for (column, value) in cells.into_iter().enumerate() {
                worksheet
                    .write(row, column as u16, value.as_str())
                    .map_err(|e| write_failed(e.to_string()))?;
            }
        }
        workbook.save(path).map_err(|e| write_failed(e.to_string()))?;
        Ok(())
    }

    /// Strips any time-of-day suffix from every stored date. A single
    /// whitespace split, first token. Dates with differing separators stay
    /// distinct keys.
    pub fn normalize_dates(&mut self) {
        for entry in &mut self.entries {
            entry.date = entry
                .date
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
        }
    }

    pub fn upsert(&mut self, date: &str, status: &str, remarks: &str) -> UpsertAction {
        match self.entries.iter_mut().find(|entry| entry.date == date) {
            Some(entry) => {
                entry.status = status.to_string();
                entry.remarks = remarks.to_string();
                UpsertAction::Updated
            }
            None => {
                self.entries.push(TimesheetEntry {
                    date: date.to_string(),
                    status: status.to_string(),
                    remarks: remarks.to_string(),
                });
                UpsertAction::Added
            }
        }
    }

    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return EMPTY_RESULT.to_string();
        }
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("{} | {} | {}", entry.date, entry.status, entry.remarks))
            .collect();
        format!("Timesheet Records:\n{}", lines.join("\n"))
    }
}

/// Reads the whole table, creating and persisting an empty one first when
/// the backing file does not exist yet.
pub fn read_all(path: &Path) -> Result<String, StoreError> {
    let table = if path.exists() {
        TimesheetTable::load(path)?
    } else {
        let table = TimesheetTable::default();
        table.save(path)?;
        table
    };
    Ok(table.render())
}

/// Find-or-insert by date key, then rewrite the whole table back to `path`.
pub fn upsert_entry(
    path: &Path,
    date: &str,
    status: &str,
    remarks: &str,
) -> Result<UpsertAction, StoreError> {
    let mut table = if path.exists() {
        TimesheetTable::load(path)?
    } else {
        TimesheetTable::default()
    };
    table.normalize_dates();
    let action = table.upsert(date, status, remarks);
    table.save(path)?;
    Ok(action)
}
