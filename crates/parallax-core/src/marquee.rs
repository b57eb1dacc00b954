//! Infinite marquee ticker
//!
//! The content is laid out twice back to back and slid left by one copy's
//! width per period, so wrapping back to zero is invisible.

use std::time::Duration;

use crate::constants;

const SEPARATOR: &str = "  ●  ";

#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    items: Vec<String>,
    period: Duration,
}

impl Marquee {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            period: constants::timing::MARQUEE_PERIOD,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// One copy of the ticker text, separator after every item
    pub fn content(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            out.push_str(item);
            out.push_str(SEPARATOR);
        }
        out
    }

    /// Fraction of the loop completed at `elapsed`, in [0, 1)
    pub fn phase(&self, elapsed: Duration) -> f64 {
        if self.period.is_zero() {
            return 0.0;
        }
        let period = self.period.as_secs_f64();
        (elapsed.as_secs_f64() % period) / period
    }

    /// Horizontal translation (px) of the doubled strip
    pub fn offset_at(&self, elapsed: Duration, copy_width: f64) -> f64 {
        -self.phase(elapsed) * copy_width
    }

    /// Visible `width` characters of the scrolling strip at `elapsed`
    pub fn window(&self, elapsed: Duration, width: usize) -> String {
        let copy: Vec<char> = self.content().chars().collect();
        if copy.is_empty() {
            return " ".repeat(width);
        }
        let start = (self.phase(elapsed) * copy.len() as f64).floor() as usize % copy.len();
        copy.iter().cycle().skip(start).take(width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_wraps_each_period() {
        let marquee = Marquee::new(["SEO", "Branding"]).with_period(Duration::from_secs(10));
        assert_eq!(marquee.offset_at(Duration::ZERO, 400.0), 0.0);
        assert_eq!(marquee.offset_at(Duration::from_secs(5), 400.0), -200.0);
        assert_eq!(marquee.offset_at(Duration::from_secs(10), 400.0), 0.0);
        assert_eq!(marquee.offset_at(Duration::from_secs(15), 400.0), -200.0);
    }

    #[test]
    fn test_window_cycles_content() {
        let marquee = Marquee::new(["ab"]).with_period(Duration::from_secs(7));
        let content = marquee.content();
        assert_eq!(content.chars().count(), 7);

        let first = marquee.window(Duration::ZERO, 10);
        assert_eq!(first.chars().count(), 10);
        assert!(first.starts_with("ab"));

        let shifted = marquee.window(Duration::from_secs(1), 3);
        assert_eq!(shifted, "b  ");
    }

    #[test]
    fn test_empty_marquee() {
        let marquee = Marquee::new(Vec::<String>::new());
        assert_eq!(marquee.window(Duration::from_secs(3), 4), "    ");
        assert_eq!(Marquee::new(["x"]).with_period(Duration::ZERO).phase(Duration::from_secs(1)), 0.0);
    }
}
