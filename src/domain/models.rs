/// Column headers shared by the results table and the exported sheet.
pub const COLUMN_HEADERS: [&str; 3] = ["Distance (km)", "Time (hours)", "Average Speed (km/h)"];

/// One computed result.
///
/// Rows are only produced by a successful calculation and never change
/// afterwards, so the fields are private.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRow {
    distance: f64,
    time: f64,
    average_speed: f64,
}

impl MeasurementRow {
    pub(crate) fn new(distance: f64, time: f64, average_speed: f64) -> Self {
        Self { distance, time, average_speed }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn average_speed(&self) -> f64 {
        self.average_speed
    }

    /// Cell texts in column order.
    pub fn cells(&self) -> [String; 3] {
        [
            format_value(self.distance),
            format_value(self.time),
            format_value(self.average_speed),
        ]
    }
}

/// Insertion-ordered results of the current session.
///
/// # Examples
///
/// ```
/// use formulaspeed::domain::{ResultsCollection, SpeedCalculator};
///
/// let mut results = ResultsCollection::default();
/// results.push(SpeedCalculator::calculate("10", "2").unwrap());
/// assert_eq!(results.len(), 1);
/// assert_eq!(results.to_grid()[1], vec!["10.0", "2.0", "5.0"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsCollection {
    rows: Vec<MeasurementRow>,
}

impl ResultsCollection {
    pub fn push(&mut self, row: MeasurementRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    /// Text grid of the collection: the header row followed by one row per
    /// measurement. This is exactly what the exporter writes.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(COLUMN_HEADERS.iter().map(|h| h.to_string()).collect());
        grid.extend(self.rows.iter().map(|row| row.cells().to_vec()));
        grid
    }
}

/// Renders a value as text for the table and the export.
///
/// Uses the shortest representation that reads back to the same `f64` and
/// always keeps a fractional part, so `10` becomes `"10.0"`.
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_value_keeps_fraction() {
        assert_eq!(format_value(10.0), "10.0");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-4.0), "-4.0");
        assert_eq!(format_value(10.0 / 3.0), "3.3333333333333335");
    }

    #[test]
    fn test_empty_collection_grid_is_header_only() {
        let results = ResultsCollection::default();
        assert!(results.is_empty());
        assert_eq!(
            results.to_grid(),
            vec![vec!["Distance (km)", "Time (hours)", "Average Speed (km/h)"]]
        );
    }

    #[test]
    fn test_grid_preserves_insertion_order() {
        let mut results = ResultsCollection::default();
        results.push(MeasurementRow::new(15.0, 3.0, 5.0));
        results.push(MeasurementRow::new(1.0, 4.0, 0.25));

        let grid = results.to_grid();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[1], vec!["15.0", "3.0", "5.0"]);
        assert_eq!(grid[2], vec!["1.0", "4.0", "0.25"]);
    }

    #[test]
    fn test_row_accessors() {
        let row = MeasurementRow::new(100.0, 2.0, 50.0);
        assert_eq!(row.distance(), 100.0);
        assert_eq!(row.time(), 2.0);
        assert_eq!(row.average_speed(), 50.0);
    }
}
