//! Checklist state — the maintenance table's rows, collapse set, and edit
//! cursors.
//!
//! DESIGN
//! ======
//! Rows live in one flat `Vec` whose order is display order; "insert below"
//! splices relative to a position in that order. Heading rows group the task
//! rows that follow them until the next heading. The whole list round-trips
//! through `localStorage` as JSON, so the serde attributes here define the
//! storage format. Saving is explicit: mutations touch memory only until the
//! user hits save.

#[cfg(test)]
#[path = "checklist_test.rs"]
mod checklist_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `localStorage` key for the persisted row list.
pub const STORAGE_KEY: &str = "maintenance-data-v1";

/// Month display labels in calendar order. Index aligns with
/// [`MonthFlags::get`].
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Twelve per-month completion flags of a task row, stored flat in the row's
/// JSON object (`"jan": true, ...`). Missing keys read as unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthFlags {
    #[serde(default)]
    pub jan: bool,
    #[serde(default)]
    pub feb: bool,
    #[serde(default)]
    pub mar: bool,
    #[serde(default)]
    pub apr: bool,
    #[serde(default)]
    pub may: bool,
    #[serde(default)]
    pub jun: bool,
    #[serde(default)]
    pub jul: bool,
    #[serde(default)]
    pub aug: bool,
    #[serde(default)]
    pub sep: bool,
    #[serde(default)]
    pub oct: bool,
    #[serde(default)]
    pub nov: bool,
    #[serde(default)]
    pub dec: bool,
}

impl MonthFlags {
    /// Flag for month `index` (0 = January). Out-of-range reads as unset.
    #[must_use]
    pub fn get(self, index: usize) -> bool {
        match index {
            0 => self.jan,
            1 => self.feb,
            2 => self.mar,
            3 => self.apr,
            4 => self.may,
            5 => self.jun,
            6 => self.jul,
            7 => self.aug,
            8 => self.sep,
            9 => self.oct,
            10 => self.nov,
            11 => self.dec,
            _ => false,
        }
    }

    /// Set the flag for month `index`; out-of-range is a no-op.
    pub fn set(&mut self, index: usize, value: bool) {
        match index {
            0 => self.jan = value,
            1 => self.feb = value,
            2 => self.mar = value,
            3 => self.apr = value,
            4 => self.may = value,
            5 => self.jun = value,
            6 => self.jul = value,
            7 => self.aug = value,
            8 => self.sep = value,
            9 => self.oct = value,
            10 => self.nov = value,
            11 => self.dec = value,
            _ => {}
        }
    }

    /// Flip the flag for month `index`; out-of-range is a no-op.
    pub fn toggle(&mut self, index: usize) {
        self.set(index, !self.get(index));
    }
}

/// One checklist row, heading or task, in its persisted shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRow {
    /// Row identifier; `h-` prefix for headings, `t-` for tasks.
    pub id: String,
    /// Heading rows label a group and span the table; task rows carry flags.
    #[serde(rename = "isHeading", default)]
    pub is_heading: bool,
    /// Id of the heading a task belongs to. Absent on headings and on tasks
    /// appended before any heading exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Display text.
    #[serde(default)]
    pub task: String,
    /// Per-month flags; meaningful on task rows only.
    #[serde(flatten)]
    pub months: MonthFlags,
}

impl ChecklistRow {
    /// Fresh task row with a generated id and all months unset.
    #[must_use]
    pub fn new_task(task: &str, parent: Option<String>) -> Self {
        Self {
            id: format!("t-{}", Uuid::new_v4()),
            is_heading: false,
            parent,
            task: task.to_owned(),
            months: MonthFlags::default(),
        }
    }

    /// Fresh heading row with a generated id.
    #[must_use]
    pub fn new_heading(task: &str) -> Self {
        Self {
            id: format!("h-{}", Uuid::new_v4()),
            is_heading: true,
            parent: None,
            task: task.to_owned(),
            months: MonthFlags::default(),
        }
    }
}

/// Starter rows for a browser with no saved checklist.
#[must_use]
pub fn default_rows() -> Vec<ChecklistRow> {
    vec![
        seed_heading("h-1", "Roof & Exterior"),
        seed_task("t-1", "h-1", "Inspect roof", &[0, 2]),
        seed_task("t-2", "h-1", "Clean gutters", &[2, 3]),
        seed_heading("h-2", "HVAC"),
        seed_task("t-3", "h-2", "Replace filter", &[0, 1, 2, 3]),
    ]
}

fn seed_heading(id: &str, task: &str) -> ChecklistRow {
    ChecklistRow {
        id: id.to_owned(),
        is_heading: true,
        parent: None,
        task: task.to_owned(),
        months: MonthFlags::default(),
    }
}

fn seed_task(id: &str, parent: &str, task: &str, checked_months: &[usize]) -> ChecklistRow {
    let mut months = MonthFlags::default();
    for &month in checked_months {
        months.set(month, true);
    }
    ChecklistRow {
        id: id.to_owned(),
        is_heading: false,
        parent: Some(parent.to_owned()),
        task: task.to_owned(),
        months,
    }
}

/// In-memory checklist state for the dashboard widget.
#[derive(Clone, Debug, Default)]
pub struct ChecklistState {
    /// Flat row list in display order.
    pub rows: Vec<ChecklistRow>,
    /// Ids of headings whose task rows are currently hidden.
    pub collapsed: HashSet<String>,
    /// Position of the row open in the edit dialog, if any.
    pub editing: Option<usize>,
    /// Whether per-row editing controls are shown.
    pub edit_mode: bool,
    /// Set once the saved list (or the starter list) has been loaded.
    pub loaded: bool,
}

impl ChecklistState {
    /// Adopt the row list read from storage, or the starter list when the
    /// browser has nothing saved.
    pub fn restore(&mut self, stored: Option<Vec<ChecklistRow>>) {
        self.rows = stored.unwrap_or_else(default_rows);
        self.loaded = true;
    }

    /// Insert a fresh task directly below the row at `index`. A task under a
    /// heading anchor joins that heading's group; a task under a task anchor
    /// inherits its group. Out-of-range positions are ignored.
    pub fn insert_task_below(&mut self, index: usize) {
        let Some(anchor) = self.rows.get(index) else {
            return;
        };
        let parent = if anchor.is_heading {
            Some(anchor.id.clone())
        } else {
            anchor.parent.clone()
        };
        self.rows
            .insert(index + 1, ChecklistRow::new_task("New task", parent));
    }

    /// Insert a fresh heading directly below the row at `index`.
    /// Out-of-range positions are ignored.
    pub fn insert_heading_below(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        self.rows
            .insert(index + 1, ChecklistRow::new_heading("New heading"));
    }

    /// Append a fresh task at the end of the list, grouped under the last
    /// heading when one exists.
    pub fn push_task(&mut self) {
        let parent = self
            .rows
            .iter()
            .rev()
            .find(|row| row.is_heading)
            .map(|row| row.id.clone());
        self.rows.push(ChecklistRow::new_task("New task", parent));
    }

    /// Append a fresh heading at the end of the list.
    pub fn push_heading(&mut self) {
        self.rows.push(ChecklistRow::new_heading("New heading"));
    }

    /// Remove the row at `index`. Removing a heading also forgets its
    /// collapse flag. Out-of-range positions are ignored.
    pub fn remove_row(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        let removed = self.rows.remove(index);
        if removed.is_heading {
            self.collapsed.remove(&removed.id);
        }
    }

    /// Flip one month flag on the task row at `index`. Headings and
    /// out-of-range positions are ignored.
    pub fn toggle_month(&mut self, index: usize, month: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            if !row.is_heading {
                row.months.toggle(month);
            }
        }
    }

    /// Replace the row at `index` wholesale, as the edit dialog does on
    /// save. Out-of-range positions are ignored.
    pub fn replace_row(&mut self, index: usize, row: ChecklistRow) {
        if let Some(slot) = self.rows.get_mut(index) {
            *slot = row;
        }
    }

    /// Collapse the heading if expanded, expand it if collapsed.
    pub fn toggle_collapsed(&mut self, heading_id: &str) {
        if !self.collapsed.remove(heading_id) {
            self.collapsed.insert(heading_id.to_owned());
        }
    }

    /// Whether the heading's group is currently hidden.
    #[must_use]
    pub fn is_collapsed(&self, heading_id: &str) -> bool {
        self.collapsed.contains(heading_id)
    }

    /// Rows to render, with their positions in the flat list. A collapsed
    /// heading hides the non-heading rows after it up to the next heading;
    /// headings themselves always render.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<(usize, &ChecklistRow)> {
        let mut hidden = false;
        let mut visible = Vec::new();
        for (index, row) in self.rows.iter().enumerate() {
            if row.is_heading {
                hidden = self.collapsed.contains(&row.id);
                visible.push((index, row));
            } else if !hidden {
                visible.push((index, row));
            }
        }
        visible
    }

    /// Completion percentage for one month: checked task rows over all task
    /// rows, rounded. Zero when no task rows exist.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn progress(&self, month: usize) -> u8 {
        let total = self.rows.iter().filter(|row| !row.is_heading).count();
        if total == 0 {
            return 0;
        }
        let done = self
            .rows
            .iter()
            .filter(|row| !row.is_heading && row.months.get(month))
            .count();
        ((done as f64 / total as f64) * 100.0).round() as u8
    }
}

/// Pretty-printed JSON of the full row list, as written to an export file.
///
/// # Errors
///
/// Returns the serializer's message if encoding fails.
pub fn export_json(rows: &[ChecklistRow]) -> Result<String, String> {
    serde_json::to_string_pretty(rows).map_err(|e| e.to_string())
}

/// Download filename for an export taken at `now_ms` (Unix milliseconds).
#[must_use]
pub fn export_file_name(now_ms: u64) -> String {
    format!("maintenance-{now_ms}.json")
}
