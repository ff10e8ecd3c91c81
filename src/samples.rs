// src/samples.rs
use once_cell::sync::Lazy;

use crate::data_types::PreviewDataset;

/// Daily series handed back for any uploaded file.
pub static DAILY_SERIES: Lazy<PreviewDataset> = Lazy::new(|| {
    PreviewDataset::new(
        ["date", "value", "category", "id"],
        [
            ["2023-01-01", "100.5", "A", "1"],
            ["2023-01-02", "102.3", "A", "1"],
            ["2023-01-03", "98.7", "B", "2"],
            ["2023-01-04", "105.1", "A", "1"],
            ["2023-01-05", "99.8", "B", "2"],
        ],
    )
});

/// Hourly sensor readings handed back for a successful connection.
pub static SENSOR_READINGS: Lazy<PreviewDataset> = Lazy::new(|| {
    PreviewDataset::new(
        ["timestamp", "metric_value", "sensor_id", "location"],
        [
            ["2023-12-01 10:00:00", "45.2", "TEMP_001", "Норильск"],
            ["2023-12-01 11:00:00", "46.1", "TEMP_001", "Норильск"],
            ["2023-12-01 12:00:00", "44.8", "TEMP_002", "Дудинка"],
            ["2023-12-01 13:00:00", "47.3", "TEMP_001", "Норильск"],
            ["2023-12-01 14:00:00", "45.9", "TEMP_002", "Дудинка"],
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_rectangular() {
        for dataset in [&*DAILY_SERIES, &*SENSOR_READINGS] {
            assert_eq!(dataset.columns.len(), 4);
            assert_eq!(dataset.rows.len(), 5);
            assert!(dataset.rows.iter().all(|row| row.len() == 4));
        }
    }

    #[test]
    fn sensor_locations_keep_cyrillic() {
        assert_eq!(SENSOR_READINGS.rows[2][3], "Дудинка");
        assert_ne!(*DAILY_SERIES, *SENSOR_READINGS);
    }
}
