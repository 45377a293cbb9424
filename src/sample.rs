//! Sample Extraction Module
//! Copies the header and first rows of a CSV byte-for-byte into a new file.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read CSV records: {0}")]
    Csv(#[from] csv::Error),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SampleError + '_ {
    move |source| SampleError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// What a sampling run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSummary {
    /// Data rows copied (header excluded).
    pub rows: usize,
    pub bytes: u64,
}

/// Write the header and the first `limit` data records of `input` to `output`.
///
/// Records are located with a CSV reader so quoted fields spanning lines
/// stay intact; the copied bytes are the source bytes, unmodified. Only the
/// copied prefix of the input is read.
pub fn write_sample(input: &Path, output: &Path, limit: usize) -> Result<SampleSummary, SampleError> {
    let mut source = BufReader::new(File::open(input).map_err(io_error(input))?);

    let (end, rows) = sample_end(&mut source, limit)?;
    let end = include_crlf_tail(&mut source, end).map_err(io_error(input))?;
    source.seek(SeekFrom::Start(0)).map_err(io_error(input))?;

    let mut out = BufWriter::new(File::create(output).map_err(io_error(output))?);
    let bytes = io::copy(&mut source.take(end), &mut out).map_err(io_error(output))?;
    out.flush().map_err(io_error(output))?;

    log::info!(
        "Wrote {} rows ({} bytes) from {} to {}",
        rows,
        bytes,
        input.display(),
        output.display()
    );
    Ok(SampleSummary { rows, bytes })
}

/// Byte offset just past the `limit`-th data record, and the number of
/// records before it. Reading stops at that record.
fn sample_end<R: Read>(source: R, limit: usize) -> Result<(u64, usize), SampleError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    reader.byte_headers()?;
    let mut end = reader.position().byte();
    let mut rows = 0;
    let mut record = csv::ByteRecord::new();

    while rows < limit && reader.read_byte_record(&mut record)? {
        rows += 1;
        end = reader.position().byte();
    }
    Ok((end, rows))
}

/// Move `end` past a '\n' whose '\r' is the last byte before it.
fn include_crlf_tail<R: Read + Seek>(source: &mut R, end: u64) -> io::Result<u64> {
    if end == 0 {
        return Ok(end);
    }
    source.seek(SeekFrom::Start(end - 1))?;
    let mut tail = Vec::with_capacity(2);
    source.by_ref().take(2).read_to_end(&mut tail)?;
    if tail == b"\r\n" {
        Ok(end + 1)
    } else {
        Ok(end)
    }
}
