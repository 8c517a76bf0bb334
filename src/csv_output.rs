//! CSV output format for presence reports
//!
//! Spreadsheet-friendly rendering of the facade's rows. Fields are escaped
//! the usual way: values containing commas, quotes, or newlines are quoted
//! with embedded quotes doubled.

use crate::report::{PresenceRow, UserEntry};

/// CSV report formatter
#[derive(Debug)]
pub struct CsvReportOutput {
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl CsvReportOutput {
    /// Create a formatter with the given header row
    pub fn new(header: Vec<&'static str>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Add one data row
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.header.join(","));
        output.push('\n');

        for row in &self.rows {
            let escaped: Vec<String> = row.iter().map(|f| Self::escape_field(f)).collect();
            output.push_str(&escaped.join(","));
            output.push('\n');
        }

        output
    }

    /// Render the user listing
    pub fn from_users(users: &[UserEntry]) -> Self {
        let mut output = Self::new(vec!["user_id", "name"]);
        for user in users {
            output.add_row(vec![user.user_id.to_string(), user.name.clone()]);
        }
        output
    }

    /// Render the mean-by-weekday report
    pub fn from_means(rows: &[(&'static str, f64)]) -> Self {
        let mut output = Self::new(vec!["weekday", "mean_presence_s"]);
        for (label, value) in rows {
            output.add_row(vec![label.to_string(), value.to_string()]);
        }
        output
    }

    /// Render the total-by-weekday report; the facade's own header row is
    /// dropped in favor of the CSV header
    pub fn from_totals(rows: &[PresenceRow]) -> Self {
        let mut output = Self::new(vec!["weekday", "presence_s"]);
        for row in rows {
            if let PresenceRow::Total(label, value) = row {
                output.add_row(vec![label.to_string(), value.to_string()]);
            }
        }
        output
    }

    /// Render the mean-start/end report
    pub fn from_start_end(rows: &[(&'static str, f64, f64)]) -> Self {
        let mut output = Self::new(vec!["weekday", "mean_start_s", "mean_end_s"]);
        for (label, start, end) in rows {
            output.add_row(vec![label.to_string(), start.to_string(), end.to_string()]);
        }
        output
    }
}
