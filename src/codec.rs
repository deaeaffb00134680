//! Plain-text persistence for interest points.
//!
//! Layout, one item per line:
//!
//! ```text
//! 64
//! <count>
//! scale  x y orientation laplacian scale d0 d1 ... d63
//! ```
//!
//! The scale appears twice in every record; readers of the format depend on
//! the 70-field layout, so it is kept. Cluster tags and motion vectors are not
//! stored and come back as zero. An upright orientation is written as `0` and
//! read back as [`Orientation::NotComputed`].

use crate::ipoint::{Ipoint, Laplacian, Orientation, DESCRIPTOR_LEN};
use crate::trace::{trace_event, trace_span};
use crate::util::{SurfError, SurfResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Fields per record: scale, x, y, orientation, laplacian, scale, descriptor.
pub const RECORD_FIELDS: usize = 6 + DESCRIPTOR_LEN;

const STREAM: &str = "<stream>";

/// Writes `ipts` to `path`, replacing any existing file.
pub fn save_surf<P: AsRef<Path>>(path: P, ipts: &[Ipoint]) -> SurfResult<()> {
    let path = path.as_ref();
    let _span = trace_span!("surf_save", path = %path.display()).entered();
    let file = File::create(path).map_err(|err| SurfError::io(path, &err))?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, ipts)
        .and_then(|_| writer.flush())
        .map_err(|err| SurfError::io(path, &err))?;
    trace_event!("surf_saved", count = ipts.len());
    Ok(())
}

/// Reads every record stored in `path`.
///
/// Either all declared records are returned or an error is; a truncated file
/// never yields a partial list.
pub fn load_surf<P: AsRef<Path>>(path: P) -> SurfResult<Vec<Ipoint>> {
    let path = path.as_ref();
    let _span = trace_span!("surf_load", path = %path.display()).entered();
    let file = File::open(path).map_err(|err| SurfError::io(path, &err))?;
    let ipts = read_records(BufReader::new(file), path)?;
    trace_event!("surf_loaded", count = ipts.len());
    Ok(ipts)
}

/// Writes `ipts` to an arbitrary sink.
pub fn write_surf<W: Write>(mut writer: W, ipts: &[Ipoint]) -> SurfResult<()> {
    write_records(&mut writer, ipts).map_err(|err| SurfError::io(Path::new(STREAM), &err))
}

/// Reads records from an arbitrary buffered source.
pub fn read_surf<R: BufRead>(reader: R) -> SurfResult<Vec<Ipoint>> {
    read_records(reader, Path::new(STREAM))
}

fn write_records<W: Write>(writer: &mut W, ipts: &[Ipoint]) -> io::Result<()> {
    writeln!(writer, "{DESCRIPTOR_LEN}")?;
    writeln!(writer, "{}", ipts.len())?;
    for ipt in ipts {
        write!(
            writer,
            "{}  {} {} {} {} {} ",
            ipt.scale(),
            ipt.x(),
            ipt.y(),
            ipt.orientation().radians(),
            ipt.laplacian().code(),
            ipt.scale()
        )?;
        for value in ipt.descriptor() {
            write!(writer, "{value} ")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn read_records<R: BufRead>(reader: R, path: &Path) -> SurfResult<Vec<Ipoint>> {
    let mut lines = NumberedLines::new(reader, path);

    let (line, header) = lines.next_required("missing descriptor length")?;
    let descriptor_len: usize = parse_single(&header, line, "descriptor length")?;
    if descriptor_len != DESCRIPTOR_LEN {
        return Err(SurfError::format(
            line,
            format!("descriptor length {descriptor_len}, expected {DESCRIPTOR_LEN}"),
        ));
    }

    let (line, header) = lines.next_required("missing record count")?;
    let count: usize = parse_single(&header, line, "record count")?;

    let mut ipts = Vec::with_capacity(count.min(4096));
    for idx in 0..count {
        let Some((line, text)) = lines.next_line()? else {
            return Err(SurfError::format(
                lines.last_line + 1,
                format!("expected {count} records, found {idx}"),
            ));
        };
        ipts.push(parse_record(&text, line)?);
    }
    Ok(ipts)
}

fn parse_record(text: &str, line: usize) -> SurfResult<Ipoint> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != RECORD_FIELDS {
        return Err(SurfError::format(
            line,
            format!("expected {RECORD_FIELDS} fields, found {}", tokens.len()),
        ));
    }

    let x = parse_float(tokens[1], line, "x")?;
    let y = parse_float(tokens[2], line, "y")?;
    let orientation = parse_float(tokens[3], line, "orientation")?;
    let code: i32 = tokens[4]
        .parse()
        .map_err(|_| SurfError::format(line, format!("invalid laplacian {:?}", tokens[4])))?;
    let laplacian = Laplacian::from_code(code)
        .ok_or_else(|| SurfError::format(line, format!("unknown laplacian tag {code}")))?;
    // The second copy of the scale is the one kept.
    let _ = parse_float(tokens[0], line, "scale")?;
    let scale = parse_float(tokens[5], line, "scale")?;

    let mut descriptor = [0.0f32; DESCRIPTOR_LEN];
    for (slot, token) in descriptor.iter_mut().zip(&tokens[6..]) {
        *slot = parse_float(token, line, "descriptor value")?;
    }

    Ipoint::new(
        x,
        y,
        scale,
        Orientation::from_radians(orientation),
        laplacian,
        descriptor,
    )
    .map_err(|err| SurfError::format(line, err.to_string()))
}

fn parse_float(token: &str, line: usize, what: &str) -> SurfResult<f32> {
    token
        .parse()
        .map_err(|_| SurfError::format(line, format!("invalid {what} {token:?}")))
}

fn parse_single<T: std::str::FromStr>(text: &str, line: usize, what: &str) -> SurfResult<T> {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token
            .parse()
            .map_err(|_| SurfError::format(line, format!("invalid {what} {token:?}"))),
        _ => Err(SurfError::format(
            line,
            format!("expected a single {what} value"),
        )),
    }
}

/// Non-blank lines with their 1-based line numbers.
struct NumberedLines<'p, R> {
    inner: io::Lines<R>,
    path: &'p Path,
    last_line: usize,
}

impl<'p, R: BufRead> NumberedLines<'p, R> {
    fn new(reader: R, path: &'p Path) -> Self {
        Self {
            inner: reader.lines(),
            path,
            last_line: 0,
        }
    }

    fn next_line(&mut self) -> SurfResult<Option<(usize, String)>> {
        for next in self.inner.by_ref() {
            self.last_line += 1;
            let text = next.map_err(|err| SurfError::io(self.path, &err))?;
            if !text.trim().is_empty() {
                return Ok(Some((self.last_line, text)));
            }
        }
        Ok(None)
    }

    fn next_required(&mut self, missing: &str) -> SurfResult<(usize, String)> {
        self.next_line()?
            .ok_or_else(|| SurfError::format(self.last_line + 1, missing))
    }
}
