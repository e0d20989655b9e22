//! Tour writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::tour::validate_tour;

/// Accepts finished tours.
pub trait TourSink {
    fn write_tour(&mut self, tour: &[usize]) -> Result<()>;
}

/// Writes each tour as space-separated indices on its own line.
///
/// Every index is followed by a single space, so lines carry a trailing
/// space before the newline.
///
/// # Examples
///
/// ```
/// use geo_tsp::io::{TourSink, TourWriter};
///
/// let mut writer = TourWriter::new(Vec::new());
/// writer.write_tour(&[2, 0, 1]).unwrap();
/// assert_eq!(writer.into_inner(), b"2 0 1 \n");
/// ```
pub struct TourWriter<W: Write> {
    inner: W,
}

impl<W: Write> TourWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl TourWriter<BufWriter<File>> {
    /// Creates (or truncates) a tour file on disk.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TourSink for TourWriter<W> {
    /// Fails with [`TspError::InvalidTour`](crate::TspError::InvalidTour)
    /// before writing anything if `tour` is not a permutation of
    /// `[0, tour.len())`.
    fn write_tour(&mut self, tour: &[usize]) -> Result<()> {
        validate_tour(tour, tour.len())?;
        for index in tour {
            write!(self.inner, "{index} ")?;
        }
        writeln!(self.inner)?;
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;

    #[test]
    fn test_writes_space_separated_line() {
        let mut writer = TourWriter::new(Vec::new());
        writer.write_tour(&[0, 3, 1, 2]).unwrap();
        assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "0 3 1 2 \n");
    }

    #[test]
    fn test_multiple_tours() {
        let mut writer = TourWriter::new(Vec::new());
        writer.write_tour(&[1, 0]).unwrap();
        writer.write_tour(&[0]).unwrap();
        assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "1 0 \n0 \n");
    }

    #[test]
    fn test_empty_tour_writes_blank_line() {
        let mut writer = TourWriter::new(Vec::new());
        writer.write_tour(&[]).unwrap();
        assert_eq!(writer.into_inner(), b"\n");
    }

    #[test]
    fn test_rejects_non_permutation() {
        let mut writer = TourWriter::new(Vec::new());
        let err = writer.write_tour(&[0, 0, 1]).unwrap_err();
        assert!(matches!(err, TspError::InvalidTour(_)));
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("geo_tsp_writer_{}.txt", std::process::id()));
        {
            let mut writer = TourWriter::create(&path).unwrap();
            writer.write_tour(&[2, 1, 0]).unwrap();
        }
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "2 1 0 \n");
    }
}
