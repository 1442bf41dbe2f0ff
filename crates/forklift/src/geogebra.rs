//! GeoGebra command sink and reader.
//!
//! Format
//! - One command per line: `Segment[(x1, y1), (x2, y2)]`, coordinates fixed-point
//!   with two decimals. A pair is two consecutive lines, body 1 then body 2.
//! - The reader mirrors the plotting importer: lines without the
//!   `Segment[`…`]` frame, or with unparsable coordinates, are skipped.

use crate::geom::{Point2, Segment, SegmentPair};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Failure to deliver commands to the sink.
#[derive(Debug)]
pub enum SinkError {
    /// The destination could not be opened for writing.
    Unavailable { path: PathBuf, source: io::Error },
    /// A write or flush failed after the sink was opened.
    Write { source: io::Error },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, .. } => {
                write!(f, "cannot open {} for writing", path.display())
            }
            Self::Write { .. } => write!(f, "write to output sink failed"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } | Self::Write { source } => Some(source),
        }
    }
}

/// Render one segment as a GeoGebra `Segment[...]` command (no trailing newline).
pub fn segment_command(seg: &Segment) -> String {
    format!(
        "Segment[({:.2}, {:.2}), ({:.2}, {:.2})]",
        seg.a.x, seg.a.y, seg.b.x, seg.b.y
    )
}

/// Write two lines per pair and flush. Returns the number of lines written.
pub fn write_pairs<W, I>(writer: &mut W, pairs: I) -> Result<usize, SinkError>
where
    W: Write,
    I: IntoIterator<Item = SegmentPair>,
{
    let mut lines = 0usize;
    for pair in pairs {
        for seg in pair.segments() {
            writeln!(writer, "{}", segment_command(seg))
                .map_err(|source| SinkError::Write { source })?;
            lines += 1;
        }
    }
    writer.flush().map_err(|source| SinkError::Write { source })?;
    Ok(lines)
}

/// Create (or truncate) `path` and write all pairs through a buffered writer.
///
/// The file is opened before any pair is pulled from `pairs`, so an unavailable
/// sink fails without consuming the generator.
pub fn write_file<P, I>(path: P, pairs: I) -> Result<usize, SinkError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = SegmentPair>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| SinkError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_pairs(&mut writer, pairs)
}

/// Parse a `Segment[(x1, y1), (x2, y2)]` line. Returns `None` for anything else.
pub fn parse_segment_command(line: &str) -> Option<Segment> {
    let body = line.trim().strip_prefix("Segment[")?.strip_suffix(']')?;
    let mut parts = body.split("), (");
    let a = parse_point(parts.next()?)?;
    let b = parse_point(parts.next()?)?;
    Some(Segment::new(a, b))
}

fn parse_point(s: &str) -> Option<Point2> {
    let cleaned: String = s.chars().filter(|c| *c != '(' && *c != ')').collect();
    let mut coords = cleaned.split(',');
    let x = coords.next()?.trim().parse::<f64>().ok()?;
    let y = coords.next()?.trim().parse::<f64>().ok()?;
    if coords.next().is_some() {
        return None;
    }
    Some(Point2::new(x, y))
}

/// Read all well-formed segment commands, skipping the rest.
pub fn read_segments<R: BufRead>(reader: R) -> io::Result<Vec<Segment>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        if let Some(seg) = parse_segment_command(&line?) {
            out.push(seg);
        }
    }
    Ok(out)
}
