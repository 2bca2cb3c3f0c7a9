use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// One named group contributing one bar series and one averaged summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageRecord {
    #[serde(rename = "village")]
    pub name: String,
    pub data: Vec<f64>,
}

impl VillageRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Ordered table of entity records.
///
/// Record order is significant: it drives series order, palette color and
/// the vertical position of each overlay line. Duplicate names are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTable {
    records: Vec<VillageRecord>,
}

impl DataTable {
    #[must_use]
    pub fn new(records: Vec<VillageRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: VillageRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[VillageRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VillageRecord> {
        self.records.iter()
    }

    /// Entity names in table order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    /// Number of samples in the first record, which sizes the x-axis range.
    #[must_use]
    pub fn first_series_len(&self) -> Option<usize> {
        self.records.first().map(|r| r.data.len())
    }

    /// Rejects records with blank names or non-finite samples.
    ///
    /// Builders never call this; it exists for loaders that want to fail
    /// early instead of emitting `NaN` into the options object.
    pub fn validate(&self) -> ChartResult<()> {
        for (index, record) in self.records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "record {index} has an empty village name"
                )));
            }
            if let Some(position) = record.data.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "record `{}` has a non-finite value at position {position}",
                    record.name
                )));
            }
        }
        Ok(())
    }

    /// Parses a JSON array of `{ "village": ..., "data": [...] }` records.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let table: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse data table: {e}")))?;
        debug!(
            records = table.len(),
            samples = table.iter().map(|r| r.data.len()).sum::<usize>(),
            "loaded data table"
        );
        Ok(table)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize data table: {e}")))
    }
}

impl FromIterator<VillageRecord> for DataTable {
    fn from_iter<I: IntoIterator<Item = VillageRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DataTable {
    type Item = &'a VillageRecord;
    type IntoIter = std::slice::Iter<'a, VillageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
