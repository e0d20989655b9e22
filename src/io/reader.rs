//! Point file reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TspError};
use crate::geo::PointRecord;

/// Provides the ordered point records of one dataset.
pub trait PointSource {
    /// Reads every record, failing on malformed or inconsistent input.
    fn read_points(&mut self) -> Result<Vec<PointRecord>>;
}

impl PointSource for Vec<PointRecord> {
    fn read_points(&mut self) -> Result<Vec<PointRecord>> {
        Ok(std::mem::take(self))
    }
}

/// Reads the count-prefixed text format.
///
/// Unlike a lenient token stream, a mismatch between the declared count
/// and the records present is an error, as is any non-numeric count or
/// coordinate.
///
/// # Examples
///
/// ```
/// use geo_tsp::io::{PointSource, TspTextReader};
///
/// let text = "2\nNantes 47.2184 -1.5536\nRennes 48.1173 -1.6778\n";
/// let records = TspTextReader::new(text.as_bytes()).read_points().unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].label, "Rennes");
/// ```
pub struct TspTextReader<R> {
    inner: R,
}

impl<R: BufRead> TspTextReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl TspTextReader<BufReader<File>> {
    /// Opens a point file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

/// A whitespace-delimited token and the 1-based line it came from.
struct Token {
    line: usize,
    text: String,
}

impl<R: BufRead> PointSource for TspTextReader<R> {
    fn read_points(&mut self) -> Result<Vec<PointRecord>> {
        let mut tokens = Vec::new();
        let mut buf = String::new();
        let mut line = 0usize;
        loop {
            buf.clear();
            if self.inner.read_line(&mut buf)? == 0 {
                break;
            }
            line += 1;
            tokens.extend(buf.split_whitespace().map(|t| Token {
                line,
                text: t.to_string(),
            }));
        }

        let mut tokens = tokens.into_iter();
        let header = tokens.next().ok_or_else(|| TspError::Parse {
            line: line.max(1),
            message: "missing point count".into(),
        })?;
        let declared: usize = header.text.parse().map_err(|_| TspError::Parse {
            line: header.line,
            message: format!("point count `{}` is not a non-negative integer", header.text),
        })?;

        let rest: Vec<Token> = tokens.collect();
        let complete = rest.len() / 3;
        if complete != declared {
            return Err(TspError::CountMismatch {
                declared,
                found: complete,
            });
        }
        if rest.len() % 3 != 0 {
            let last = &rest[rest.len() - 1];
            return Err(TspError::Parse {
                line: last.line,
                message: format!("trailing tokens after {declared} records"),
            });
        }

        rest.chunks_exact(3)
            .map(|record| {
                let label = &record[0];
                let latitude = parse_coordinate(&record[1], "latitude", &label.text)?;
                let longitude = parse_coordinate(&record[2], "longitude", &label.text)?;
                Ok(PointRecord::new(label.text.clone(), latitude, longitude))
            })
            .collect()
    }
}

fn parse_coordinate(token: &Token, field: &str, label: &str) -> Result<f64> {
    token.text.parse::<f64>().map_err(|_| TspError::Parse {
        line: token.line,
        message: format!("{field} `{}` of point `{label}` is not a number", token.text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Vec<PointRecord>> {
        TspTextReader::new(text.as_bytes()).read_points()
    }

    #[test]
    fn test_reads_records_in_order() {
        let records = read("3\nParis 48.8566 2.3522\nLyon 45.764 4.8357\nMarseille 43.2965 5.3698\n")
            .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], PointRecord::new("Paris", 48.8566, 2.3522));
        assert_eq!(records[2].label, "Marseille");
    }

    #[test]
    fn test_tokens_may_span_lines() {
        let records = read("2 A\n1.0\n2.0 B 3.0\n  4.0").unwrap();
        assert_eq!(records[0], PointRecord::new("A", 1.0, 2.0));
        assert_eq!(records[1], PointRecord::new("B", 3.0, 4.0));
    }

    #[test]
    fn test_zero_points() {
        assert!(read("0\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(read("   \n"), Err(TspError::Parse { .. })));
    }

    #[test]
    fn test_bad_header() {
        match read("three\nA 1 2\n") {
            Err(TspError::Parse { line, message }) => {
                assert_eq!(line, 1);
                assert!(message.contains("three"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_fewer_records_than_declared() {
        match read("3\nA 1 2\nB 3 4\n") {
            Err(TspError::CountMismatch { declared, found }) => {
                assert_eq!(declared, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_more_records_than_declared() {
        assert!(matches!(
            read("1\nA 1 2\nB 3 4\n"),
            Err(TspError::CountMismatch {
                declared: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_truncated_record() {
        match read("2\nA 1 2\nB 3\n") {
            Err(TspError::CountMismatch { found, .. }) => assert_eq!(found, 1),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_trailing_partial_tokens() {
        match read("1\nA 1 2\nextra\n") {
            Err(TspError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_coordinate() {
        match read("2\nA 1 2\nB north 4\n") {
            Err(TspError::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("latitude"));
                assert!(message.contains('B'));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_vec_source() {
        let mut source = vec![PointRecord::new("A", 0.0, 0.0)];
        assert_eq!(source.read_points().unwrap().len(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let result = TspTextReader::open("/nonexistent/definitely/missing.tsp");
        assert!(matches!(result, Err(TspError::Io(_))));
    }
}
