//! PSI record parsing.
//!
//! A pressure source exposes one line per pressure type:
//!
//! ```text
//! some avg10=0.12 avg60=0.34 avg300=0.56 total=123456
//! full avg10=0.01 avg60=0.02 avg300=0.03 total=654321
//! ```
//!
//! Only the three averaging-window percentages matter; the leading label and
//! the `total=` counter are ignored entirely. The source is opened fresh on
//! every read since these files are kernel seq_file entries, not real files
//! worth keeping a handle on.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PsimonError, Result};

use super::pressure::{PressureRecord, PressureSample};

/// Upper bound on a plausible pressure line. Real lines stay well under
/// this; anything longer is rejected as unparseable instead of truncated.
const MAX_LINE_LEN: usize = 256;

/// Read and parse one pressure record.
///
/// The first (`some`) line is always required. When `want_full` is set a
/// second (`full`) line is required as well; its absence is an error, not a
/// tolerated omission. When it is not set, the second line is never read.
pub fn read_record(path: &Path, want_full: bool) -> Result<PressureRecord> {
    let file = File::open(path).map_err(|e| PsimonError::open_source(path, e))?;
    let mut reader = BufReader::new(file);

    let some = parse_line(path, &read_required_line(path, &mut reader)?)?;

    let full = if want_full {
        Some(parse_line(path, &read_required_line(path, &mut reader)?)?)
    } else {
        None
    };

    Ok(PressureRecord { some, full })
}

/// Read one line, treating end of input as a hard error.
fn read_required_line(path: &Path, reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let n = reader
        .read_line(&mut line)
        .map_err(|e| PsimonError::read_source(path, e))?;

    if n == 0 {
        return Err(PsimonError::PrematureEof(path.to_path_buf()));
    }

    Ok(line)
}

/// Extract the three averaging-window values from one pressure line.
///
/// Tokenizes `key=value` pairs so field order does not matter. A line that
/// does not yield exactly the three `avg*` values is unparseable; no partial
/// sample is ever produced.
fn parse_line(path: &Path, line: &str) -> Result<PressureSample> {
    if line.len() > MAX_LINE_LEN {
        // Truncate for diagnostics on a char boundary; the bound may land
        // mid-character in multi-byte input.
        let mut end = MAX_LINE_LEN;
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        return Err(PsimonError::unparseable(path, &line[..end]));
    }

    let mut ten = None;
    let mut sixty = None;
    let mut three_hundred = None;

    for token in line.split_whitespace() {
        let slot = if let Some(v) = token.strip_prefix("avg10=") {
            Some((&mut ten, v))
        } else if let Some(v) = token.strip_prefix("avg60=") {
            Some((&mut sixty, v))
        } else if let Some(v) = token.strip_prefix("avg300=") {
            Some((&mut three_hundred, v))
        } else {
            // The "some"/"full" label and the total= counter.
            None
        };

        if let Some((slot, value)) = slot {
            let parsed: f32 = value
                .parse()
                .map_err(|_| PsimonError::unparseable(path, line.trim_end()))?;
            *slot = Some(parsed);
        }
    }

    match (ten, sixty, three_hundred) {
        (Some(ten), Some(sixty), Some(three_hundred)) => {
            Ok(PressureSample::new(ten, sixty, three_hundred))
        }
        _ => Err(PsimonError::unparseable(path, line.trim_end())),
    }
}
