//! Calculation history
//!
//! Every menu operation the user runs is recorded as a [`Record`] and kept in
//! an owned [`History`] collection. The history survives restarts through a
//! line-oriented text file, one record per line as `lhs,rhs,result,tag`.
//! Lines that fail to parse are skipped on load so a hand-edited or truncated
//! file never blocks startup.

use crate::eval::ops::Operation;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// One recorded calculation.
///
/// `rhs` is `0.0` for the unary square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub lhs: f64,
    pub rhs: f64,
    pub result: f64,
    pub op: Operation,
}

impl Record {
    /// Serialize to the history file line format.
    fn to_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.lhs,
            self.rhs,
            self.result,
            self.op.tag()
        )
    }

    /// Parse a history file line. `None` for anything malformed.
    fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let lhs = fields.next()?.trim().parse().ok()?;
        let rhs = fields.next()?.trim().parse().ok()?;
        let result = fields.next()?.trim().parse().ok()?;
        let op = Operation::from_tag(fields.next()?.trim())?;
        if fields.next().is_some() {
            return None;
        }

        Some(Record {
            lhs,
            rhs,
            result,
            op,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Operation::SquareRoot => {
                write!(f, "sqrt({}) = {}", self.lhs, self.result)
            }
            op => write!(
                f,
                "{} {} {} = {}",
                self.lhs,
                op.symbol(),
                self.rhs,
                self.result
            ),
        }
    }
}

/// Owned collection of calculation records.
#[derive(Debug)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    pub fn new() -> Self {
        History {
            records: Vec::new(),
        }
    }

    /// Load a history file.
    ///
    /// A missing file is an empty history, not an error; malformed lines are
    /// skipped.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(History::new());
            }
            Err(err) => return Err(err),
        };

        let records = text.lines().filter_map(Record::from_line).collect();
        Ok(History { records })
    }

    /// Write every record to the history file, replacing its contents.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut text = String::new();
        for record in &self.records {
            text.push_str(&record.to_line());
            text.push('\n');
        }
        fs::write(path, text)
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Per-operation record counts, for the history pane summary.
    pub fn tag_counts(&self) -> FxHashMap<Operation, usize> {
        let mut counts = FxHashMap::default();
        for record in &self.records {
            *counts.entry(record.op).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line_round_trip() {
        let record = Record {
            lhs: 3.5,
            rhs: 4.25,
            result: 7.75,
            op: Operation::Add,
        };
        let line = record.to_line();

        assert_eq!(line, "3.5,4.25,7.75,add");
        assert_eq!(Record::from_line(&line), Some(record));
    }

    #[test]
    fn test_malformed_lines_rejected() {
        assert_eq!(Record::from_line(""), None);
        assert_eq!(Record::from_line("1,2,3"), None);
        assert_eq!(Record::from_line("1,2,3,nope"), None);
        assert_eq!(Record::from_line("one,2,3,add"), None);
        assert_eq!(Record::from_line("1,2,3,add,extra"), None);
    }

    #[test]
    fn test_from_line_tolerates_padding() {
        let record = Record::from_line(" 1 , 2 , 3 , add ");

        assert_eq!(
            record,
            Some(Record {
                lhs: 1.0,
                rhs: 2.0,
                result: 3.0,
                op: Operation::Add,
            })
        );
    }

    #[test]
    fn test_display_binary_and_unary() {
        let div = Record {
            lhs: 9.0,
            rhs: 2.0,
            result: 4.5,
            op: Operation::Divide,
        };
        assert_eq!(div.to_string(), "9 / 2 = 4.5");

        let sqrt = Record {
            lhs: 9.0,
            rhs: 0.0,
            result: 3.0,
            op: Operation::SquareRoot,
        };
        assert_eq!(sqrt.to_string(), "sqrt(9) = 3");
    }

    #[test]
    fn test_tag_counts() {
        let mut history = History::new();
        history.push(Record {
            lhs: 1.0,
            rhs: 2.0,
            result: 3.0,
            op: Operation::Add,
        });
        history.push(Record {
            lhs: 2.0,
            rhs: 2.0,
            result: 4.0,
            op: Operation::Add,
        });
        history.push(Record {
            lhs: 9.0,
            rhs: 0.0,
            result: 3.0,
            op: Operation::SquareRoot,
        });

        let counts = history.tag_counts();
        assert_eq!(counts.get(&Operation::Add), Some(&2));
        assert_eq!(counts.get(&Operation::SquareRoot), Some(&1));
        assert_eq!(counts.get(&Operation::Divide), None);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(Record {
            lhs: 1.0,
            rhs: 1.0,
            result: 2.0,
            op: Operation::Add,
        });
        assert!(!history.is_empty());

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }
}
