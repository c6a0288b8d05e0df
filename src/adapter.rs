//! Input adapters turning uploaded payloads into pickup items.
//!
//! Every item gets a fresh UUID. Blank entries are skipped, never reported.

use tracing::debug;
use uuid::Uuid;

use crate::error::{PlannerError, Result};
use crate::geocoding::valid_coordinates;
use crate::models::{Attributes, Location, PickupItem};
use crate::traits::InputAdapter;

/// Header names accepted for the address column, in priority order.
pub const DEFAULT_ADDRESS_COLUMNS: &[&str] = &["address", "배출 위치", "배출위치"];

const LAT_COLUMNS: &[&str] = &["lat", "latitude"];
const LNG_COLUMNS: &[&str] = &["lng", "lon", "longitude"];

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// One address per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAdapter;

impl InputAdapter for TextAdapter {
    fn parse(&self, input: &[u8]) -> Result<Vec<PickupItem>> {
        let text = std::str::from_utf8(input).map_err(|err| {
            PlannerError::invalid_file_format("text input is not valid UTF-8")
                .with_hint("submit the address list as plain UTF-8 text")
                .with_source(err)
        })?;

        let items: Vec<PickupItem> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| PickupItem::new(new_item_id(), Location::new(line)))
            .collect();

        if items.is_empty() {
            return Err(PlannerError::empty_address_list("no addresses found in the text")
                .with_hint("enter at least one address, one per line"));
        }

        debug!(items = items.len(), "parsed text input");
        Ok(items)
    }
}

/// Comma-separated table with a header row.
///
/// The address column is required. Optional `lat`/`lng` columns pre-resolve
/// a row; every other non-empty cell is carried into the item's attributes.
#[derive(Debug, Clone)]
pub struct CsvAdapter {
    address_columns: Vec<String>,
}

impl Default for CsvAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS_COLUMNS.iter().copied())
    }
}

impl CsvAdapter {
    pub fn new<I, S>(address_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            address_columns: address_columns.into_iter().map(Into::into).collect(),
        }
    }

    fn address_index(&self, headers: &csv::StringRecord) -> Option<usize> {
        self.address_columns
            .iter()
            .find_map(|candidate| find_header(headers, &[candidate.as_str()]))
    }
}

fn find_header(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| names.iter().any(|name| header.trim().eq_ignore_ascii_case(name)))
}

fn invalid_csv(err: csv::Error) -> PlannerError {
    PlannerError::invalid_file_format("failed to read the CSV file")
        .with_hint("check that the file is a valid, UTF-8 encoded CSV")
        .with_source(err)
}

fn parse_coordinates(record: &csv::StringRecord, lat: usize, lng: usize, row: usize) -> Result<Option<(f64, f64)>> {
    let lat_text = record.get(lat).map(str::trim).unwrap_or_default();
    let lng_text = record.get(lng).map(str::trim).unwrap_or_default();
    if lat_text.is_empty() || lng_text.is_empty() {
        return Ok(None);
    }

    match (lat_text.parse::<f64>(), lng_text.parse::<f64>()) {
        (Ok(lat), Ok(lng)) if valid_coordinates(lat, lng) => Ok(Some((lat, lng))),
        _ => Err(PlannerError::invalid_file_format(format!(
            "row {} has invalid coordinates ({}, {})",
            row, lat_text, lng_text
        ))
        .with_hint("use decimal degrees within ±90 latitude and ±180 longitude, such as 37.5663 and 126.9779")),
    }
}

impl InputAdapter for CsvAdapter {
    fn parse(&self, input: &[u8]) -> Result<Vec<PickupItem>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers().map_err(invalid_csv)?.clone();
        let records = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(invalid_csv)?;

        if records.is_empty() {
            return Err(PlannerError::empty_address_list("the file contains no data rows")
                .with_hint("include at least one address row below the header"));
        }

        let address_index = self.address_index(&headers).ok_or_else(|| {
            let present = headers.iter().collect::<Vec<_>>().join(", ");
            PlannerError::missing_required_column(format!(
                "required column '{}' is missing",
                self.address_columns.join("' or '")
            ))
            .with_hint(format!("add an address column (present columns: {})", present))
        })?;

        let coordinate_columns = find_header(&headers, LAT_COLUMNS).zip(find_header(&headers, LNG_COLUMNS));

        let mut items = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let address = record.get(address_index).map(str::trim).unwrap_or_default();
            if address.is_empty() {
                continue;
            }

            // Header is line 1.
            let line = row + 2;
            let location = match coordinate_columns {
                Some((lat, lng)) => match parse_coordinates(record, lat, lng, line)? {
                    Some((lat, lng)) => Location::with_coordinates(address, lat, lng),
                    None => Location::new(address),
                },
                None => Location::new(address),
            };

            let mut attributes = Attributes::new();
            for (column, header) in headers.iter().enumerate() {
                let is_location_column = column == address_index
                    || coordinate_columns.is_some_and(|(lat, lng)| column == lat || column == lng);
                if is_location_column {
                    continue;
                }
                let value = record.get(column).map(str::trim).unwrap_or_default();
                if !value.is_empty() {
                    attributes.insert(header.trim().to_string(), value.into());
                }
            }

            let mut item = PickupItem::new(new_item_id(), location);
            if !attributes.is_empty() {
                item.attributes = Some(attributes);
            }
            items.push(item);
        }

        if items.is_empty() {
            return Err(PlannerError::empty_address_list("no valid addresses found")
                .with_hint(format!(
                    "fill in at least one address in column '{}'",
                    headers.get(address_index).unwrap_or_default()
                )));
        }

        debug!(items = items.len(), rows = records.len(), "parsed CSV input");
        Ok(items)
    }
}
