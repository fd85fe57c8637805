//! Text codec for `1D_sphere` model files.
//!
//! Layout: one header line `1D_sphere [label] <nx> <r_min> [t0]`, then `nx`
//! rows of `R rho T Ye`, tokens separated by single spaces.

use std::io::Write;

use tracing::debug;

use super::errors::{ConfigError, ModelFileError};
use super::input_params::{Header, GRID_TYPE};
use super::profiles::{Profile, ProfileField, Sample};
use super::type_lib::{NumericData, Row};

const COLUMNS: [ProfileField; 4] = [ProfileField::R, ProfileField::Rho, ProfileField::T, ProfileField::Ye];

/// Shortest representation that parses back to the same `f64`; integral values keep a `.0`.
pub fn format_number(value: NumericData) -> String {
    format!("{:?}", value)
}

pub fn format_header(header: &Header) -> String {
    let mut tokens = vec![header.grid_type.clone()];
    if let Some(label) = &header.label {
        tokens.push(label.clone());
    }
    tokens.push(header.nx.to_string());
    tokens.push(format_number(header.r_min));
    if let Some(t0) = header.t0 {
        tokens.push(t0.to_string());
    }
    tokens.join(" ")
}

pub fn format_row(row: &Row) -> String {
    row.iter().map(|&value| format_number(value)).collect::<Vec<_>>().join(" ")
}

pub fn write_model<W: Write>(profile: &Profile, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{}", format_header(&profile.header))?;
    for sample in &profile.samples {
        writeln!(writer, "{}", format_row(&sample.to_row()))?;
    }
    writer.flush()
}

pub fn to_model_string(profile: &Profile) -> String {
    let mut buffer = Vec::new();
    write_model(profile, &mut buffer).expect("writing to a Vec");
    String::from_utf8_lossy(&buffer).into_owned()
}

fn parse_number(token: Option<&str>, field: &'static str) -> Result<NumericData, ModelFileError> {
    let token = token.ok_or(ModelFileError::MissingToken(field))?;
    token.parse::<NumericData>().map_err(|_| ModelFileError::BadNumber { field, token: token.to_string() })
}

fn parse_header(line: &str) -> Result<Header, ModelFileError> {
    let mut tokens = line.split_whitespace().peekable();

    let grid_type = tokens.next().ok_or(ModelFileError::MissingToken("grid type"))?;
    if grid_type != GRID_TYPE {
        return Err(ModelFileError::WrongGridType(grid_type.to_string()));
    }

    let label = match tokens.peek() {
        Some(token) if token.parse::<usize>().is_err() => tokens.next().map(str::to_string),
        _ => None,
    };

    let nx_token = tokens.next().ok_or(ModelFileError::MissingToken("zone count"))?;
    let nx = nx_token.parse::<usize>().map_err(|_| ModelFileError::BadNumber { field: "zone count", token: nx_token.to_string() })?;
    if nx == 0 {
        return Err(ConfigError::EmptyGrid.into());
    }

    let r_min = parse_number(tokens.next(), "inner radius")?;
    if !(r_min >= 0.0) {
        return Err(ConfigError::NegativeRadius(r_min).into());
    }

    let t0 = match tokens.next() {
        Some(token) => Some(token.parse::<i64>().map_err(|_| ModelFileError::BadNumber { field: "time marker", token: token.to_string() })?),
        None => None,
    };

    if let Some(extra) = tokens.next() {
        return Err(ModelFileError::TrailingHeaderToken(extra.to_string()));
    }

    Ok(Header {
        grid_type: grid_type.to_string(),
        label,
        nx,
        r_min,
        t0,
    })
}

fn parse_row(line: &str, row: usize) -> Result<Row, ModelFileError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != COLUMNS.len() {
        return Err(ModelFileError::ColumnCount { row, found: tokens.len() });
    }
    let mut values = [0.0; 4];
    for (value, (&token, field)) in values.iter_mut().zip(tokens.iter().zip(COLUMNS.iter())) {
        *value = parse_number(Some(token), field.to_str())?;
    }
    Ok(values)
}

fn check_sample(sample: &Sample, previous: NumericData, row: usize) -> Result<(), ModelFileError> {
    if !(sample.radius > previous) {
        return Err(ModelFileError::NonMonotonicRadius { row, radius: sample.radius, previous });
    }
    if !(sample.density >= 0.0) {
        return Err(ModelFileError::OutOfRange { row, field: ProfileField::Rho.to_str(), value: sample.density });
    }
    if !(sample.temperature >= 0.0) {
        return Err(ModelFileError::OutOfRange { row, field: ProfileField::T.to_str(), value: sample.temperature });
    }
    if !(0.0..=1.0).contains(&sample.electron_fraction) {
        return Err(ModelFileError::OutOfRange { row, field: ProfileField::Ye.to_str(), value: sample.electron_fraction });
    }
    Ok(())
}

/// Parses the 4-column fixture layout and applies the transport code's 1-D
/// loader range checks: `r_min >= 0`, increasing zone edges, `rho >= 0`,
/// `T >= 0` and `0 <= Ye <= 1`.
///
/// Rows are numbered from 1 in errors.
pub fn read_model(text: &str) -> Result<Profile, ModelFileError> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let header = parse_header(lines.next().ok_or(ModelFileError::Empty)?)?;

    let rows = lines.collect::<Vec<_>>();
    if rows.len() != header.nx {
        return Err(ModelFileError::RowCount { expected: header.nx, found: rows.len() });
    }

    let mut samples = Vec::with_capacity(header.nx);
    let mut previous = header.r_min;
    for (index, line) in rows.iter().enumerate() {
        let sample = Sample::from_row(parse_row(line, index + 1)?);
        check_sample(&sample, previous, index + 1)?;
        previous = sample.radius;
        samples.push(sample);
    }
    debug!(zones = samples.len(), "read model file");

    Ok(Profile { header, samples })
}
