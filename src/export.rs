//! Writing priced inventories to CSV.

use crate::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use serde::Serialize;

/// Column names of the exported CSV, in order.
pub const HEADERS: [&str; 16] = [
    "Type",
    "MarketName",
    "MarketHashName",
    "Marketable",
    "Exterior",
    "ItemSet",
    "Quality",
    "Rarity",
    "Weapon",
    "AveragePrice",
    "MedianPrice",
    "LowestPrice",
    "HighestPrice",
    "Currency",
    "StandardDeviation",
    "Volume",
];

/// One row of the export: an asset joined with its description and price. Missing values are
/// empty strings.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRecord {
    #[serde(rename = "Type")]
    pub r#type: String,
    pub market_name: String,
    pub market_hash_name: String,
    /// `"Yes"` or `"No"`.
    pub marketable: String,
    pub exterior: String,
    pub item_set: String,
    pub quality: String,
    pub rarity: String,
    pub weapon: String,
    pub average_price: String,
    pub median_price: String,
    pub lowest_price: String,
    pub highest_price: String,
    pub currency: String,
    pub standard_deviation: String,
    pub volume: String,
}

/// The file name for an export: `{identifier}_{steamid64}_{timestamp}.csv`.
pub fn export_filename(identifier: &str, steamid64: u64, timestamp: i64) -> String {
    format!("{identifier}_{steamid64}_{timestamp}.csv")
}

/// Writes the header row followed by one row per record. The header is written even when there
/// are no records.
pub fn write_records<W>(writer: W, records: &[ExportRecord]) -> Result<(), Error>
where
    W: io::Write,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(HEADERS)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes `records` to `{identifier}_{steamid64}_{timestamp}.csv` inside `directory`, replacing
/// any file with the same name. Returns the path of the file.
pub fn export_csv(
    directory: &Path,
    identifier: &str,
    steamid64: u64,
    timestamp: i64,
    records: &[ExportRecord],
) -> Result<PathBuf, Error> {
    let filepath = directory.join(export_filename(identifier, steamid64, timestamp));
    let mut contents = Vec::new();

    write_records(&mut contents, records)?;
    std::fs::write(&filepath, contents)?;

    Ok(filepath)
}
