use super::types::SeriesMetadata;
use crate::error::{EvocastError, Result};
use crate::types::TimeSeries;
use polars::prelude::*;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;
use std::path::Path;

/// Which field of the current record the parser is inside.
enum FieldKind {
    Region,
    Year,
    Value,
    Other,
}

pub struct WorldBankConnector;

impl WorldBankConnector {
    /// Load a World Bank XML export into a `year`/`value` DataFrame,
    /// keeping only records for the given 3-letter region code.
    pub fn load<P: AsRef<Path>>(path: P, region_key: &str) -> Result<DataFrame> {
        let mut reader = Reader::from_file(&path).map_err(|e| {
            EvocastError::DataLoading(format!(
                "Failed to open {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::parse(&mut reader, region_key)
    }

    /// Parse World Bank records from any buffered XML source.
    ///
    /// Records missing a year or carrying an empty value are skipped, a
    /// non-numeric year or value is an error.
    pub fn parse<R: BufRead>(reader: &mut Reader<R>, region_key: &str) -> Result<DataFrame> {
        reader.config_mut().trim_text(true);

        let mut years: Vec<i32> = Vec::new();
        let mut values: Vec<f64> = Vec::new();

        let mut region_matches = false;
        let mut year_text: Option<String> = None;
        let mut value_text: Option<String> = None;
        let mut current_field = FieldKind::Other;

        let mut buf = Vec::new();
        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| EvocastError::DataLoading(format!("Malformed XML: {}", e)))?;

            match event {
                Event::Start(ref e) if e.name().as_ref() == b"record" => {
                    region_matches = false;
                    year_text = None;
                    value_text = None;
                }
                Event::Start(ref e) if e.name().as_ref() == b"field" => {
                    let mut field_name = String::new();
                    let mut field_key = String::new();
                    for attribute in e.attributes() {
                        let attribute = attribute.map_err(|e| {
                            EvocastError::DataLoading(format!("Malformed attribute: {}", e))
                        })?;
                        let value = attribute.unescape_value().map_err(|e| {
                            EvocastError::DataLoading(format!("Malformed attribute: {}", e))
                        })?;
                        match attribute.key.as_ref() {
                            b"name" => field_name = value.into_owned(),
                            b"key" => field_key = value.into_owned(),
                            _ => {}
                        }
                    }

                    current_field = match field_name.as_str() {
                        "Country or Area" => {
                            if field_key == region_key {
                                region_matches = true;
                            }
                            FieldKind::Region
                        }
                        "Year" => FieldKind::Year,
                        "Value" => FieldKind::Value,
                        _ => FieldKind::Other,
                    };
                }
                Event::Text(ref t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| EvocastError::DataLoading(format!("Malformed text: {}", e)))?
                        .into_owned();
                    match current_field {
                        FieldKind::Year => year_text = Some(text),
                        FieldKind::Value => value_text = Some(text),
                        _ => {}
                    }
                }
                Event::End(ref e) if e.name().as_ref() == b"field" => {
                    current_field = FieldKind::Other;
                }
                Event::End(ref e) if e.name().as_ref() == b"record" => {
                    if region_matches {
                        if let (Some(year), Some(value)) = (&year_text, &value_text) {
                            if !value.is_empty() {
                                years.push(year.parse().map_err(|_| {
                                    EvocastError::DataLoading(format!(
                                        "Invalid year '{}'",
                                        year
                                    ))
                                })?);
                                values.push(value.parse().map_err(|_| {
                                    EvocastError::DataLoading(format!(
                                        "Invalid value '{}'",
                                        value
                                    ))
                                })?);
                            }
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if years.is_empty() {
            return Err(EvocastError::DataLoading(format!(
                "No records found for region '{}'",
                region_key
            )));
        }

        let df = DataFrame::new(vec![
            Column::new("year".into(), years),
            Column::new("value".into(), values),
        ])?;

        Ok(df)
    }

    /// Create metadata for a loaded DataFrame
    pub fn create_metadata<P: AsRef<Path>>(
        path: P,
        region: &str,
        df: &DataFrame,
    ) -> Result<SeriesMetadata> {
        let year = df.column("year")?.cast(&DataType::Int32)?;
        let year = year.i32()?;
        let value = df.column("value")?.cast(&DataType::Float64)?;
        let value = value.f64()?;

        Ok(SeriesMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            region: region.to_string(),
            num_points: df.height(),
            year_range: (year.min().unwrap_or(0), year.max().unwrap_or(0)),
            value_range: (value.min().unwrap_or(0.0), value.max().unwrap_or(0.0)),
            mean_value: value.mean(),
        })
    }

    /// Extract the in-memory series the forecasting models consume.
    /// Rows with a null year or value are dropped.
    pub fn to_time_series(df: &DataFrame) -> Result<TimeSeries> {
        let year = df.column("year")?.cast(&DataType::Int32)?;
        let year = year.i32()?;
        let value = df.column("value")?.cast(&DataType::Float64)?;
        let value = value.f64()?;

        let pairs: Vec<(i32, f64)> = year
            .into_iter()
            .zip(value)
            .filter_map(|(y, v)| Some((y?, v?)))
            .collect();

        if pairs.is_empty() {
            return Err(EvocastError::DataLoading(
                "Series contains no usable observations".to_string(),
            ));
        }

        Ok(TimeSeries::from_pairs(pairs))
    }
}
