use common::DemoData;

/// Converts ticks of a single demo into `MM:SS` clock strings.
///
/// Minutes are never wrapped into hours, a 75 minute match shows up as `75:00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    interval: Option<f64>,
}

impl TickClock {
    pub fn new(interval: Option<f64>) -> Self {
        Self {
            interval: interval.filter(|i| i.is_finite() && *i > 0.0),
        }
    }

    pub fn for_demo(data: &DemoData) -> Self {
        Self::new(data.interval_per_tick)
    }

    pub fn format(&self, tick: u32) -> String {
        format_tick(tick, self.interval)
    }
}

/// Without a usable interval the tick itself is returned as is
pub fn format_tick(tick: u32, interval: Option<f64>) -> String {
    match interval.filter(|i| i.is_finite() && *i > 0.0) {
        Some(interval) => format_seconds(tick as f64 * interval),
        None => tick.to_string(),
    }
}

/// Formats a duration in seconds, fractions of a second are dropped
pub fn format_seconds(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_interval() {
        assert_eq!("42", format_tick(42, Some(0.0)));
        assert_eq!("42", format_tick(42, Some(-0.015)));
        assert_eq!("42", format_tick(42, Some(f64::NAN)));
    }

    #[test]
    fn negative_seconds() {
        assert_eq!("00:00", format_seconds(-3.0));
    }
}
