use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::conf::InputConfig;
use crate::core::CityError;
use crate::table::RawRow;

const FIELD_NAMES: [&str; 5] = ["city", "population", "area", "density", "country"];

/// Parses comma-separated city statistics into typed rows.
///
/// The first non-blank line is a header and is discarded. Every following line must hold
/// exactly `city,population,area,density,country`; surrounding whitespace on the text,
/// on each line and on each field is ignored. Quotes have no special meaning.
/// Line numbers in errors count from the start of `text`, blank lines included.
pub fn parse_table(text: &str, input: &InputConfig) -> Result<Vec<RawRow>, CityError> {
    let lines: Vec<(usize, &str)> = text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect();
    let Some(last) = lines.iter().rposition(|(_, l)| !l.trim().is_empty()) else {
        return Err(CityError::EmptyInput);
    };

    // header is the first non-blank line, data runs up to the last non-blank one
    let content = lines[..=last]
        .iter()
        .skip_while(|(_, l)| l.trim().is_empty())
        .skip(1);

    let mut kept = String::new();
    let mut line_numbers = Vec::new();
    for &(line_no, line) in content {
        if line.trim().is_empty() {
            if input.skip_blank_lines {
                debug!("Skipping blank line {}", line_no);
                continue;
            }
            return Err(CityError::ParseError(format!("line {}: blank line", line_no)));
        }
        kept.push_str(line);
        kept.push('\n');
        line_numbers.push(line_no);
    }

    if line_numbers.is_empty() {
        return Err(CityError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .quoting(false)
        .flexible(true)
        .from_reader(kept.as_bytes());

    let mut rows = Vec::with_capacity(line_numbers.len());
    for (result, &line_no) in reader.records().zip(line_numbers.iter()) {
        let record = result
            .map_err(|e| CityError::ParseError(format!("line {}: {}", line_no, e)))?;
        rows.push(deserialize_row(&record, line_no)?);
    }

    debug!("Parsed {} rows", rows.len());
    Ok(rows)
}

fn deserialize_row(record: &StringRecord, line_no: usize) -> Result<RawRow, CityError> {
    if record.len() != FIELD_NAMES.len() {
        return Err(CityError::ParseError(format!(
            "line {}: expected {} fields, got {}",
            line_no,
            FIELD_NAMES.len(),
            record.len()
        )));
    }

    record.deserialize::<RawRow>(None).map_err(|err| {
        let detail = match err.kind() {
            ErrorKind::Deserialize { err: de, .. } => match de.field() {
                Some(field) => {
                    let field = field as usize;
                    format!(
                        "{} '{}' is not a non-negative integer: {}",
                        FIELD_NAMES.get(field).copied().unwrap_or("field"),
                        record.get(field).unwrap_or(""),
                        de.kind()
                    )
                }
                None => de.to_string(),
            },
            _ => err.to_string(),
        };
        CityError::ParseError(format!("line {}: {}", line_no, detail))
    })
}
