//! Per-sprint configuration consumed by the capacity scheduler.

use std::{collections::BTreeMap, sync::OnceLock};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use super::document::nullable;

/// Scheduling strategy tag for "earliest due date first".
pub const STRATEGY_EARLIEST_DUE_DATE: &str = "EDD";

/// A clock-time interval (`HH:mm`) during which work happens.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WorkingPeriod {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl WorkingPeriod {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }
}

/// Capacity and estimation settings of a sprint.
///
/// Treated as trusted configuration: nothing checks that factors are positive
/// or that thresholds are ordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalConfig {
    #[serde(deserialize_with = "nullable")]
    pub daily_work_hours: i64,
    /// Seniority name to capacity multiplier
    #[serde(deserialize_with = "nullable")]
    pub seniority_factors: BTreeMap<String, f64>,
    /// Maturity name to capacity multiplier
    #[serde(deserialize_with = "nullable")]
    pub maturity_factors: BTreeMap<String, f64>,
    #[serde(deserialize_with = "nullable")]
    pub story_points_per_hour: f64,
    /// Role types whose capacity counts toward the sprint
    #[serde(deserialize_with = "nullable")]
    pub counted_member_types: Vec<String>,
    /// Allowed story point values, in ascending order
    #[serde(deserialize_with = "nullable")]
    pub story_point_scale: Vec<i64>,
    /// Fraction over capacity that turns a workload yellow (0.05 = 5%)
    #[serde(deserialize_with = "nullable")]
    pub workload_warning_over: f64,
    /// Fraction over capacity that turns a workload red
    #[serde(deserialize_with = "nullable")]
    pub workload_error_over: f64,
    #[serde(deserialize_with = "nullable")]
    pub default_working_periods: Vec<WorkingPeriod>,
    pub scheduling_strategy: Option<String>,
}

static DEFAULT_CONFIG: OnceLock<GlobalConfig> = OnceLock::new();

impl GlobalConfig {
    /// Settings every new sprint starts from.
    ///
    /// Built on first use and shared read-only afterwards.
    pub fn default_config() -> &'static GlobalConfig {
        DEFAULT_CONFIG.get_or_init(|| GlobalConfig {
            daily_work_hours: 8,
            seniority_factors: factors(&[("Senior", 1.0), ("Mid", 0.8), ("Junior", 0.6)]),
            maturity_factors: factors(&[("Mature", 1.0), ("Medium", 0.8), ("Initial", 0.6)]),
            story_points_per_hour: 0.33,
            counted_member_types: vec!["Developer".to_string()],
            story_point_scale: vec![0, 1, 2, 3, 5, 8, 13],
            workload_warning_over: 0.05,
            workload_error_over: 0.1,
            default_working_periods: vec![
                WorkingPeriod::new("08:00", "12:00"),
                WorkingPeriod::new("13:00", "17:00"),
            ],
            scheduling_strategy: Some(STRATEGY_EARLIEST_DUE_DATE.to_string()),
        })
    }
}

fn factors(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs
        .iter()
        .map(|(name, factor)| ((*name).to_string(), *factor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_shared() {
        let first = GlobalConfig::default_config();
        let second = GlobalConfig::default_config();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_default_config_values() {
        let config = GlobalConfig::default_config();
        assert_eq!(config.daily_work_hours, 8);
        assert_eq!(config.seniority_factors.get("Mid"), Some(&0.8));
        assert_eq!(config.maturity_factors.get("Initial"), Some(&0.6));
        assert_eq!(config.story_point_scale, vec![0, 1, 2, 3, 5, 8, 13]);
        assert_eq!(config.default_working_periods.len(), 2);
        assert_eq!(
            config.default_working_periods[1],
            WorkingPeriod::new("13:00", "17:00")
        );
        assert_eq!(config.scheduling_strategy.as_deref(), Some("EDD"));
    }

    #[test]
    fn test_config_json_uses_camel_case() {
        let json = serde_json::to_value(GlobalConfig::default_config()).unwrap();
        assert_eq!(json["dailyWorkHours"], 8);
        assert_eq!(json["workloadWarningOver"], 0.05);
        assert_eq!(json["defaultWorkingPeriods"][0]["start"], "08:00");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: GlobalConfig =
            serde_json::from_str(r#"{"dailyWorkHours": 6, "seniorityFactors": null}"#).unwrap();
        assert_eq!(config.daily_work_hours, 6);
        assert!(config.seniority_factors.is_empty());
        assert!(config.scheduling_strategy.is_none());
    }
}
