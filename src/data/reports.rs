//! Period summaries behind the Reports tab

use serde::{Deserialize, Serialize};

/// Report period toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] = [ReportPeriod::Weekly, ReportPeriod::Monthly, ReportPeriod::Yearly];

    pub fn title(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "Weekly",
            ReportPeriod::Monthly => "Monthly",
            ReportPeriod::Yearly => "Yearly",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Yearly => "yearly",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            ReportPeriod::Weekly => 'w',
            ReportPeriod::Monthly => 'm',
            ReportPeriod::Yearly => 'y',
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Some(ReportPeriod::Weekly),
            "monthly" | "month" | "m" => Some(ReportPeriod::Monthly),
            "yearly" | "year" | "y" => Some(ReportPeriod::Yearly),
            _ => None,
        }
    }

    pub fn cycle(&self, forward: bool) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        let len = Self::ALL.len();
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        Self::ALL[next]
    }

    pub fn summary(&self) -> &'static PeriodSummary {
        match self {
            ReportPeriod::Weekly => &WEEK_SUMMARY,
            ReportPeriod::Monthly => &MONTH_SUMMARY,
            ReportPeriod::Yearly => &YEAR_SUMMARY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSummary {
    pub total_sales: u64,
    pub wastage_reduction: u32,
    pub stockout_reduction: u32,
    pub comparison_to_last_week: Option<u32>,
    pub comparison_to_last_month: Option<u32>,
    pub comparison_to_last_year: Option<u32>,
}

impl PeriodSummary {
    /// Whichever comparison field is defined, week first.
    pub fn comparison(&self) -> Option<u32> {
        self.comparison_to_last_week
            .or(self.comparison_to_last_month)
            .or(self.comparison_to_last_year)
    }

    pub fn defined_comparisons(&self) -> usize {
        [
            self.comparison_to_last_week,
            self.comparison_to_last_month,
            self.comparison_to_last_year,
        ]
        .iter()
        .filter(|c| c.is_some())
        .count()
    }
}

pub static WEEK_SUMMARY: PeriodSummary = PeriodSummary {
    total_sales: 1_250_000,
    wastage_reduction: 15,
    stockout_reduction: 20,
    comparison_to_last_week: Some(5),
    comparison_to_last_month: None,
    comparison_to_last_year: None,
};

pub static MONTH_SUMMARY: PeriodSummary = PeriodSummary {
    total_sales: 5_000_000,
    wastage_reduction: 12,
    stockout_reduction: 18,
    comparison_to_last_week: None,
    comparison_to_last_month: Some(10),
    comparison_to_last_year: None,
};

pub static YEAR_SUMMARY: PeriodSummary = PeriodSummary {
    total_sales: 60_000_000,
    wastage_reduction: 10,
    stockout_reduction: 15,
    comparison_to_last_week: None,
    comparison_to_last_month: None,
    comparison_to_last_year: Some(8),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_summary_values() {
        let summary = ReportPeriod::Monthly.summary();
        assert_eq!(summary.total_sales, 5_000_000);
        assert_eq!(summary.wastage_reduction, 12);
        assert_eq!(summary.stockout_reduction, 18);
        assert_eq!(summary.comparison(), Some(10));
    }

    #[test]
    fn test_comparison_picks_defined_field() {
        assert_eq!(ReportPeriod::Weekly.summary().comparison(), Some(5));
        assert_eq!(ReportPeriod::Yearly.summary().comparison(), Some(8));
    }

    #[test]
    fn test_parse_period_aliases() {
        assert_eq!(ReportPeriod::parse("Monthly"), Some(ReportPeriod::Monthly));
        assert_eq!(ReportPeriod::parse(" y "), Some(ReportPeriod::Yearly));
        assert_eq!(ReportPeriod::parse("daily"), None);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(ReportPeriod::Yearly.cycle(true), ReportPeriod::Weekly);
        assert_eq!(ReportPeriod::Weekly.cycle(false), ReportPeriod::Yearly);
    }
}
