//! Dashboard figures
//!
//! Turns the server's aggregates into what the dashboard draws: counters,
//! two chart series with rounded axis ceilings, and the activity feed.

use champa_core::{
    Activity, DashboardStats,
    labels::{activity_color, parse_timestamp, time_ago},
};

const MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const WEEKDAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A labelled chart series with its axis ceiling
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub axis_max: f64,
    pub step: f64,
}

impl Series {
    fn build(values: &[f64], labels: &[String], defaults: &[&str], floor: f64, unit: f64) -> Self {
        let values = if values.is_empty() {
            vec![0.0; defaults.len()]
        } else {
            values.to_vec()
        };
        let labels = if labels.is_empty() {
            defaults.iter().map(|s| s.to_string()).collect()
        } else {
            labels.to_vec()
        };
        let peak = values.iter().copied().fold(floor, f64::max);
        Self {
            labels,
            axis_max: axis_ceiling(peak, unit),
            step: axis_ceiling(peak / 4.0, unit),
            values,
        }
    }

    /// Value as a fraction of the axis, for bar heights
    pub fn fraction(&self, value: f64) -> f64 {
        if self.axis_max <= 0.0 {
            0.0
        } else {
            (value / self.axis_max).clamp(0.0, 1.0)
        }
    }
}

/// Round `peak * 1.2` up to a multiple of `unit`
pub fn axis_ceiling(peak: f64, unit: f64) -> f64 {
    (peak * 1.2 / unit).ceil() * unit
}

/// One line of the activity feed, ready to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLine {
    pub initial: String,
    pub color: &'static str,
    pub text: String,
    pub when: String,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub total_users: u64,
    pub total_products: u64,
    pub total_orders: u64,
    pub revenue: String,
    pub revenue_series: Series,
    pub orders_series: Series,
    pub activities: Vec<ActivityLine>,
}

impl DashboardView {
    /// Build the view relative to `now`
    pub fn from_stats(stats: &DashboardStats, now: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            total_users: stats.total_users,
            total_products: stats.total_products,
            total_orders: stats.total_orders,
            revenue: format_revenue(stats.total_revenue),
            revenue_series: Series::build(
                &stats.revenue_by_month,
                &stats.revenue_month_labels,
                MONTHS,
                1000.0,
                1000.0,
            ),
            orders_series: Series::build(
                &stats.orders_by_week,
                &stats.orders_day_labels,
                WEEKDAYS,
                50.0,
                50.0,
            ),
            activities: stats
                .recent_activities
                .iter()
                .enumerate()
                .map(|(i, activity)| activity_line(i, activity, now))
                .collect(),
        }
    }
}

fn activity_line(index: usize, activity: &Activity, now: chrono::DateTime<chrono::Utc>) -> ActivityLine {
    ActivityLine {
        initial: activity
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
        color: activity_color(index),
        text: format!("{} - {}", activity.name, activity.action),
        when: parse_timestamp(&activity.created_at)
            .map(|then| time_ago(then, now))
            .unwrap_or_else(|| activity.created_at.clone()),
    }
}

/// Whole-dollar revenue with thousands separators
pub fn format_revenue(amount: f64) -> String {
    format!("${}", group_thousands(amount.round() as i64))
}

/// Integer with comma thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_axis_ceiling() {
        assert_eq!(axis_ceiling(1000.0, 1000.0), 2000.0);
        assert_eq!(axis_ceiling(4200.0, 1000.0), 6000.0);
        assert_eq!(axis_ceiling(50.0, 50.0), 100.0);
        assert_eq!(axis_ceiling(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_defaults_when_server_sends_nothing() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let view = DashboardView::from_stats(&DashboardStats::default(), now);
        assert_eq!(view.revenue_series.labels.len(), 6);
        assert_eq!(view.revenue_series.values, vec![0.0; 6]);
        assert_eq!(view.revenue_series.axis_max, 2000.0);
        assert_eq!(view.orders_series.labels[0], "Mon");
        assert_eq!(view.orders_series.axis_max, 100.0);
        assert_eq!(view.revenue, "$0");
        assert!(view.activities.is_empty());
    }

    #[test]
    fn test_series_follow_server_values() {
        let stats = DashboardStats {
            revenue_by_month: vec![1200.0, 5100.0],
            revenue_month_labels: vec!["Nov".into(), "Dec".into()],
            ..DashboardStats::default()
        };
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let view = DashboardView::from_stats(&stats, now);
        assert_eq!(view.revenue_series.labels, vec!["Nov", "Dec"]);
        assert_eq!(view.revenue_series.axis_max, 7000.0);
        assert_eq!(view.revenue_series.step, 2000.0);
        assert!((view.revenue_series.fraction(3500.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_activity_lines() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let stats = DashboardStats {
            recent_activities: vec![
                Activity {
                    name: "noy".into(),
                    action: "registered".into(),
                    created_at: "2025-03-01 11:55:00".into(),
                },
                Activity {
                    name: "keo".into(),
                    action: "ordered".into(),
                    created_at: "whenever".into(),
                },
            ],
            ..DashboardStats::default()
        };
        let view = DashboardView::from_stats(&stats, now);
        assert_eq!(view.activities[0].initial, "N");
        assert_eq!(view.activities[0].text, "noy - registered");
        assert_eq!(view.activities[0].when, "5 minutes ago");
        assert_eq!(view.activities[1].when, "whenever");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(format_revenue(12345.6), "$12,346");
    }
}
