// src/data_input/log_data.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt; // For min() and max() on Array1

use crate::error::{Result, TelemetryError};

/// One sample of the pendulum log, in log units (seconds, N·m, radians).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TelemetryRecord {
    pub time: f64,     // Seconds since experiment start.
    pub command: f64,  // Controller torque (N·m).
    pub response: f64, // Measured pendulum angle (rad).
    pub setpoint: f64, // Reference angle (rad).
    pub f: f64,        // Extended-state disturbance estimate.
}

/// Column-wise telemetry table. All columns have the same length and keep file order.
#[derive(Debug, Clone, Default)]
pub struct TelemetryTable {
    time: Array1<f64>,
    command: Array1<f64>,
    response: Array1<f64>,
    setpoint: Array1<f64>,
    f: Array1<f64>,
}

impl TelemetryTable {
    /// Builds a table from five columns, rejecting non-rectangular input.
    pub fn from_columns(
        time: Vec<f64>,
        command: Vec<f64>,
        response: Vec<f64>,
        setpoint: Vec<f64>,
        f: Vec<f64>,
    ) -> Result<Self> {
        let n = time.len();
        let lengths = [command.len(), response.len(), setpoint.len(), f.len()];
        if lengths.iter().any(|&len| len != n) {
            return Err(TelemetryError::ColumnLengthMismatch(format!(
                "time has {} values, other columns have {:?}",
                n, lengths
            )));
        }
        Ok(Self {
            time: Array1::from(time),
            command: Array1::from(command),
            response: Array1::from(response),
            setpoint: Array1::from(setpoint),
            f: Array1::from(f),
        })
    }

    pub fn from_records(records: &[TelemetryRecord]) -> Self {
        let column = |get: fn(&TelemetryRecord) -> f64| records.iter().map(get).collect::<Array1<f64>>();
        Self {
            time: column(|r| r.time),
            command: column(|r| r.command),
            response: column(|r| r.response),
            setpoint: column(|r| r.setpoint),
            f: column(|r| r.f),
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    pub fn command(&self) -> &Array1<f64> {
        &self.command
    }

    pub fn response(&self) -> &Array1<f64> {
        &self.response
    }

    pub fn setpoint(&self) -> &Array1<f64> {
        &self.setpoint
    }

    pub fn f(&self) -> &Array1<f64> {
        &self.f
    }

    pub fn record(&self, index: usize) -> Option<TelemetryRecord> {
        if index >= self.len() {
            return None;
        }
        Some(TelemetryRecord {
            time: self.time[index],
            command: self.command[index],
            response: self.response[index],
            setpoint: self.setpoint[index],
            f: self.f[index],
        })
    }

    /// Iterates records in file order.
    pub fn records(&self) -> impl Iterator<Item = TelemetryRecord> + '_ {
        (0..self.len()).filter_map(move |i| self.record(i))
    }

    /// Minimum and maximum finite timestamp. `None` when the table holds no
    /// finite timestamp.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let finite: Array1<f64> = self.time.iter().copied().filter(|t| t.is_finite()).collect();
        let min = *finite.min().ok()?;
        let max = *finite.max().ok()?;
        Some((min, max))
    }

    /// Average sample rate in Hz from the positive time deltas.
    /// Needs at least two distinct timestamps.
    pub fn estimated_sample_rate(&self) -> Option<f64> {
        let mut total_delta = 0.0;
        let mut count = 0usize;
        for pair in self.time.windows(2) {
            let delta = pair[1] - pair[0];
            if delta.is_finite() && delta > 1e-9 {
                total_delta += delta;
                count += 1;
            }
        }
        if count == 0 {
            return None;
        }
        let avg_delta = total_delta / count as f64;
        Some(1.0 / avg_delta)
    }

    /// True when `time` never decreases. Diagnostic only; ordering is not enforced.
    pub fn is_time_monotonic(&self) -> bool {
        self.time.windows(2).into_iter().all(|pair| pair[1] >= pair[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TelemetryTable {
        TelemetryTable::from_columns(
            vec![0.0, 0.01, 0.02, 0.03],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![0.1, 0.2, 0.3, 0.4],
            vec![1.5, 1.5, 1.5, 1.5],
            vec![0.0, -0.5, -1.0, -1.5],
        )
        .unwrap()
    }

    #[test]
    fn test_from_columns_rejects_ragged_input() {
        let err = TelemetryTable::from_columns(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
        )
        .unwrap_err();
        assert!(matches!(err, TelemetryError::ColumnLengthMismatch(_)));
    }

    #[test]
    fn test_records_follow_column_order() {
        let table = sample_table();
        assert_eq!(table.len(), 4);
        let third = table.record(2).unwrap();
        assert_eq!(third.time, 0.02);
        assert_eq!(third.command, 3.0);
        assert_eq!(third.response, 0.3);
        assert_eq!(third.setpoint, 1.5);
        assert_eq!(third.f, -1.0);
        assert!(table.record(4).is_none());

        let times: Vec<f64> = table.records().map(|r| r.time).collect();
        assert_eq!(times, vec![0.0, 0.01, 0.02, 0.03]);
    }

    #[test]
    fn test_from_records_matches_from_columns() {
        let table = sample_table();
        let records: Vec<TelemetryRecord> = table.records().collect();
        let rebuilt = TelemetryTable::from_records(&records);
        assert_eq!(rebuilt.time(), table.time());
        assert_eq!(rebuilt.f(), table.f());
    }

    #[test]
    fn test_time_range_and_sample_rate() {
        let table = sample_table();
        assert_eq!(table.time_range(), Some((0.0, 0.03)));
        let rate = table.estimated_sample_rate().unwrap();
        assert!((rate - 100.0).abs() < 1e-6, "rate was {}", rate);
        assert!(table.is_time_monotonic());
    }

    #[test]
    fn test_time_range_ignores_order_and_nan() {
        let table = TelemetryTable::from_columns(
            vec![0.5, f64::NAN, 0.1, 0.9],
            vec![0.0; 4],
            vec![0.0; 4],
            vec![0.0; 4],
            vec![0.0; 4],
        )
        .unwrap();
        assert_eq!(table.time_range(), Some((0.1, 0.9)));
        assert!(!table.is_time_monotonic());
    }

    #[test]
    fn test_time_range_ignores_infinite_timestamps() {
        let table = TelemetryTable::from_columns(
            vec![0.0, f64::INFINITY, 0.5, f64::NEG_INFINITY],
            vec![0.0; 4],
            vec![0.0; 4],
            vec![0.0; 4],
            vec![0.0; 4],
        )
        .unwrap();
        assert_eq!(table.time_range(), Some((0.0, 0.5)));

        let all_infinite = TelemetryTable::from_records(&[TelemetryRecord {
            time: f64::INFINITY,
            ..TelemetryRecord::default()
        }]);
        assert_eq!(all_infinite.time_range(), None);
    }

    #[test]
    fn test_empty_table_has_no_range_or_rate() {
        let table = TelemetryTable::default();
        assert!(table.is_empty());
        assert_eq!(table.time_range(), None);
        assert_eq!(table.estimated_sample_rate(), None);
        assert!(table.is_time_monotonic());
    }

    #[test]
    fn test_sample_rate_needs_distinct_timestamps() {
        let table = TelemetryTable::from_records(&[TelemetryRecord::default(); 3]);
        assert_eq!(table.estimated_sample_rate(), None);
    }
}

// src/data_input/log_data.rs
