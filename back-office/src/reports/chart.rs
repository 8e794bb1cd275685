//! Visitor statistics chart state

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

/// Granularity of the chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Custom,
}

/// One bar group of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub male: u32,
    pub female: u32,
}

impl ChartPoint {
    pub fn new(date: impl Into<String>, male: u32, female: u32) -> Self {
        Self {
            date: date.into(),
            male,
            female,
        }
    }
}

/// Series per time range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub daily: Vec<ChartPoint>,
    pub weekly: Vec<ChartPoint>,
    pub monthly: Vec<ChartPoint>,
    pub custom: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn for_range(&self, range: TimeRange) -> &[ChartPoint] {
        match range {
            TimeRange::Daily => &self.daily,
            TimeRange::Weekly => &self.weekly,
            TimeRange::Monthly => &self.monthly,
            TimeRange::Custom => &self.custom,
        }
    }

    /// Built-in demo figures
    pub fn sample() -> Self {
        fn points(rows: &[(&str, u32, u32)]) -> Vec<ChartPoint> {
            rows.iter()
                .map(|(date, male, female)| ChartPoint::new(*date, *male, *female))
                .collect()
        }

        Self {
            daily: points(&[
                ("1/1", 3, 2),
                ("1/2", 4, 1),
                ("1/3", 2, 3),
                ("1/4", 3, 2),
                ("1/5", 4, 1),
                ("1/6", 2, 3),
                ("1/7", 3, 2),
            ]),
            weekly: points(&[
                ("Week 1", 3, 2),
                ("Week 2", 4, 1),
                ("Week 3", 2, 3),
                ("Week 4", 3, 2),
            ]),
            monthly: points(&[
                ("Jan", 3, 2),
                ("Feb", 4, 1),
                ("Mar", 2, 3),
                ("Apr", 3, 2),
                ("May", 4, 1),
                ("Jun", 9, 2),
            ]),
            custom: points(&[
                ("Period 1", 3, 2),
                ("Period 2", 4, 1),
                ("Period 3", 2, 3),
                ("Period 4", 3, 2),
                ("Period 5", 4, 1),
                ("Period 6", 2, 3),
                ("Period 7", 3, 2),
            ]),
        }
    }
}

/// Chart selection state
///
/// Presets swap the displayed series immediately. `Custom` keeps whatever
/// is shown until a date range is applied.
#[derive(Debug, Clone)]
pub struct StatisticalChart {
    series: ChartSeries,
    time_range: TimeRange,
    data: Vec<ChartPoint>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl Default for StatisticalChart {
    fn default() -> Self {
        Self::new(ChartSeries::sample())
    }
}

impl StatisticalChart {
    pub fn new(series: ChartSeries) -> Self {
        let data = series.for_range(TimeRange::Daily).to_vec();
        Self {
            series,
            time_range: TimeRange::Daily,
            data,
            start_date: None,
            end_date: None,
        }
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn data(&self) -> &[ChartPoint] {
        &self.data
    }

    pub fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start_date, self.end_date)
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
        if range != TimeRange::Custom {
            self.data = self.series.for_range(range).to_vec();
        }
    }

    /// Show the custom series for `start..=end`
    pub fn apply_custom_range(&mut self, start: NaiveDate, end: NaiveDate) -> AppResult<()> {
        if start > end {
            return Err(AppError::out_of_range(format!(
                "Start date {start} is after end date {end}"
            )));
        }
        self.start_date = Some(start);
        self.end_date = Some(end);
        self.time_range = TimeRange::Custom;
        self.data = self.series.for_range(TimeRange::Custom).to_vec();
        tracing::debug!(%start, %end, "Custom chart range applied");
        Ok(())
    }
}
