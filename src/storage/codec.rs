//! Record codec for the user data file
//!
//! One user record is a header line followed by three marker-delimited blocks
//! and a terminator:
//!
//! ```text
//! username,password,nickname
//! TRANSACTIONS:
//! <date>,<category>,<amount>,<kind>
//! RECURRING TRANSACTIONS:
//! <category>,<amount>,<frequency>,<kind>
//! BUDGET LIMITS:
//! <category>,<limit>
//! ---
//! ```
//!
//! Fields are comma separated with no escaping, so a comma inside a category,
//! username, password or nickname corrupts the record.

use std::io::BufRead;

use chrono::NaiveDate;

use crate::error::{FinpalError, FinpalResult};
use crate::models::{format_amount, RecurringTransaction, Transaction, TransactionKind, User};

use super::file_io::line_read_error;

pub const TRANSACTIONS_MARKER: &str = "TRANSACTIONS:";
pub const RECURRING_MARKER: &str = "RECURRING TRANSACTIONS:";
pub const BUDGET_LIMITS_MARKER: &str = "BUDGET LIMITS:";
pub const RECORD_TERMINATOR: &str = "---";

/// Encode a user as the lines of one record
pub fn encode_user(user: &User) -> Vec<String> {
    let mut lines = Vec::with_capacity(
        5 + user.transactions.len() + user.recurring.len() + user.budget_limits.len(),
    );

    lines.push(user.header());
    lines.push(TRANSACTIONS_MARKER.to_string());
    lines.extend(user.transactions.iter().map(Transaction::to_string));
    lines.push(RECURRING_MARKER.to_string());
    lines.extend(user.recurring.iter().map(RecurringTransaction::to_string));
    lines.push(BUDGET_LIMITS_MARKER.to_string());
    lines.extend(
        user.budget_limits
            .iter()
            .map(|(category, limit)| encode_budget_limit(category, limit)),
    );
    lines.push(RECORD_TERMINATOR.to_string());

    lines
}

/// Encode a single budget limit row
pub fn encode_budget_limit(category: &str, limit: f64) -> String {
    format!("{},{}", category, format_amount(limit))
}

/// The username field of a header line
pub fn header_username(line: &str) -> &str {
    line.split(',').next().unwrap_or_default()
}

/// Indices of all header lines in a file's lines
///
/// A header is the first line of the file and every line following a record
/// terminator. Blank lines where a header is expected are skipped.
pub fn header_indices(lines: &[String]) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut expecting_header = true;

    for (index, line) in lines.iter().enumerate() {
        if expecting_header {
            if line.trim().is_empty() {
                continue;
            }
            indices.push(index);
            expecting_header = false;
        } else if line == RECORD_TERMINATOR {
            expecting_header = true;
        }
    }

    indices
}

/// Check whether a stream contains a record for `username`
///
/// Only header lines are compared, so block rows whose first field happens to
/// equal the username never match.
pub fn contains_user<R: BufRead>(reader: R, username: &str) -> FinpalResult<bool> {
    let mut expecting_header = true;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| line_read_error(index + 1, e))?;
        if expecting_header {
            if line.trim().is_empty() {
                continue;
            }
            if header_username(&line) == username {
                return Ok(true);
            }
            expecting_header = false;
        } else if line == RECORD_TERMINATOR {
            expecting_header = true;
        }
    }

    Ok(false)
}

/// Decode the record for `username` from a stream
///
/// Returns `Ok(None)` when no record matches. Records for other users are
/// skipped without being parsed.
pub fn decode_user<R: BufRead>(reader: R, username: &str) -> FinpalResult<Option<User>> {
    let mut cursor = LineCursor::new(reader);
    let mut expecting_header = true;

    while let Some(line) = cursor.next_line()? {
        if expecting_header {
            if line.trim().is_empty() {
                continue;
            }
            if header_username(&line) == username {
                return decode_record(&mut cursor, &line).map(Some);
            }
            expecting_header = false;
        } else if line == RECORD_TERMINATOR {
            expecting_header = true;
        }
    }

    Ok(None)
}

fn decode_record<R: BufRead>(cursor: &mut LineCursor<R>, header: &str) -> FinpalResult<User> {
    let fields: Vec<&str> = header.split(',').collect();
    if fields.len() != 3 {
        return Err(FinpalError::decode(
            cursor.line_number,
            format!("expected 3 header fields, found {}", fields.len()),
        ));
    }
    let mut user = User::new(fields[0], fields[1], fields[2]);

    let line = cursor.require_line(TRANSACTIONS_MARKER)?;
    if line != TRANSACTIONS_MARKER {
        return Err(FinpalError::decode(
            cursor.line_number,
            format!("expected '{}', found '{}'", TRANSACTIONS_MARKER, line),
        ));
    }

    loop {
        let line = cursor.require_line(RECURRING_MARKER)?;
        if line == RECURRING_MARKER {
            break;
        }
        let transaction = decode_transaction(&line, cursor.line_number)?;
        user.add_transaction(transaction);
    }

    loop {
        let line = cursor.require_line(BUDGET_LIMITS_MARKER)?;
        if line == BUDGET_LIMITS_MARKER {
            break;
        }
        let recurring = decode_recurring(&line, cursor.line_number)?;
        user.add_recurring(recurring);
    }

    loop {
        let line = cursor.require_line(RECORD_TERMINATOR)?;
        if line == RECORD_TERMINATOR {
            break;
        }
        let (category, limit) = decode_budget_limit(&line, cursor.line_number)?;
        user.budget_limits.set(category, limit);
    }

    Ok(user)
}

/// Decode a `<date>,<category>,<amount>,<kind>` row
pub fn decode_transaction(line: &str, line_number: usize) -> FinpalResult<Transaction> {
    let fields = split_fields(line, 4, line_number)?;
    let date = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d").map_err(|_| {
        FinpalError::decode(line_number, format!("invalid date '{}'", fields[0]))
    })?;
    let amount = parse_amount(fields[2], line_number)?;
    let kind = parse_kind(fields[3], line_number)?;
    Ok(Transaction::new(date, fields[1], amount, kind))
}

/// Decode a `<category>,<amount>,<frequency>,<kind>` row
pub fn decode_recurring(line: &str, line_number: usize) -> FinpalResult<RecurringTransaction> {
    let fields = split_fields(line, 4, line_number)?;
    let amount = parse_amount(fields[1], line_number)?;
    let kind = parse_kind(fields[3], line_number)?;
    Ok(RecurringTransaction::new(fields[0], amount, fields[2], kind))
}

/// Decode a `<category>,<limit>` row
pub fn decode_budget_limit(line: &str, line_number: usize) -> FinpalResult<(String, f64)> {
    let fields = split_fields(line, 2, line_number)?;
    let limit = parse_amount(fields[1], line_number)?;
    Ok((fields[0].to_string(), limit))
}

fn split_fields(line: &str, expected: usize, line_number: usize) -> FinpalResult<Vec<&str>> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != expected {
        return Err(FinpalError::decode(
            line_number,
            format!("expected {} fields, found {}", expected, fields.len()),
        ));
    }
    Ok(fields)
}

fn parse_amount(field: &str, line_number: usize) -> FinpalResult<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| FinpalError::decode(line_number, format!("invalid amount '{}'", field)))
}

fn parse_kind(field: &str, line_number: usize) -> FinpalResult<TransactionKind> {
    TransactionKind::parse(field).ok_or_else(|| {
        FinpalError::decode(line_number, format!("invalid transaction type '{}'", field))
    })
}

/// Line reader that remembers the 1-based number of the last line read
struct LineCursor<R> {
    lines: std::io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> LineCursor<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> FinpalResult<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                line.map(Some)
                    .map_err(|e| line_read_error(self.line_number, e))
            }
            None => Ok(None),
        }
    }

    /// Read the next line of a record that is still waiting for `marker`
    fn require_line(&mut self, marker: &str) -> FinpalResult<String> {
        self.next_line()?.ok_or_else(|| {
            FinpalError::decode(
                self.line_number,
                format!("end of file before '{}'", marker),
            )
        })
    }
}
