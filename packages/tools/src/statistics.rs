//! Descriptive statistics over a file of numbers.

use std::{collections::HashMap, fmt, time::Duration};

use crate::report::elapsed_line;

/// A line that could not be parsed as a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based
    pub line_number: usize,
    pub content: String,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: Invalid data on line {}: '{}'",
            self.line_number, self.content
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedNumbers {
    pub values: Vec<f64>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse one number per line, trimming surrounding whitespace.
pub fn parse_numbers(text: &str) -> ParsedNumbers {
    let mut parsed = ParsedNumbers::default();
    for (index, line) in text.lines().enumerate() {
        let token = line.trim();
        match token.parse::<f64>() {
            Ok(value) => parsed.values.push(value),
            Err(_) => parsed.skipped.push(SkippedLine {
                line_number: index + 1,
                content: token.to_string(),
            }),
        }
    }
    parsed
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value; ties go to the value seen first.
pub fn mode(data: &[f64]) -> f64 {
    // -0.0 and 0.0 count as the same value
    let key = |x: f64| if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() };

    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &x in data {
        *counts.entry(key(x)).or_default() += 1;
    }

    let mut best = 0.0;
    let mut best_count = 0;
    for &x in data {
        let count = counts[&key(x)];
        if count > best_count {
            best = x;
            best_count = count;
        }
    }
    best
}

/// Population variance around `mean`.
pub fn variance(data: &[f64], mean: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl Statistics {
    /// All zeros for an empty slice.
    pub fn compute(data: &[f64]) -> Self {
        let mean = mean(data);
        let variance = variance(data, mean);
        Self {
            mean,
            median: median(data),
            mode: mode(data),
            variance,
            std_dev: variance.sqrt(),
        }
    }

    /// Floats always keep a fractional part (`125.0`).
    pub fn render(&self, elapsed: Duration) -> String {
        format!(
            "{}\n\nStatistics:\n\nMean: {:?}\nMedian: {:?}\nMode: {:?}\nVariance: {:?}\nStandard Deviation: {:?}\n",
            elapsed_line(elapsed),
            self.mean,
            self.median,
            self.mode,
            self.variance,
            self.std_dev
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_median_even_count() {
        // テスト項目: 偶数個のデータでは中央の 2 値の平均になる
        assert_eq!(median(&[150.0, 100.0]), 125.0);
    }

    #[test]
    fn test_median_odd_count() {
        // テスト項目: 奇数個のデータではソート後の中央値になる
        assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
    }

    #[test]
    fn test_mode_first_encountered_wins() {
        // テスト項目: 最頻値が複数ある場合は最初に現れた値になる
        assert_eq!(mode(&[1.0, 1.0, 2.0]), 1.0);
        assert_eq!(mode(&[3.0, 2.0, 2.0, 3.0]), 3.0);
    }

    #[test]
    fn test_mode_treats_signed_zero_as_equal() {
        assert_eq!(mode(&[5.0, -0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_std_dev_population() {
        // テスト項目: 標準偏差は母分散の平方根
        // given (前提条件):
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        // when (操作):
        let stats = Statistics::compute(&data);

        // then (期待する結果):
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        // テスト項目: 空のデータではすべての統計量が 0 になる
        assert_eq!(Statistics::compute(&[]), Statistics::default());
    }

    #[test]
    fn test_parse_numbers_skips_invalid_lines() {
        // テスト項目: 数値でない行は行番号付きでスキップされる
        // given (前提条件):
        let text = "10\n  abc \n2.5\n\n-3\n";

        // when (操作):
        let parsed = parse_numbers(text);

        // then (期待する結果):
        assert_eq!(parsed.values, vec![10.0, 2.5, -3.0]);
        assert_eq!(
            parsed.skipped,
            vec![
                SkippedLine {
                    line_number: 2,
                    content: "abc".to_string()
                },
                SkippedLine {
                    line_number: 4,
                    content: String::new()
                },
            ]
        );
        assert_eq!(
            parsed.skipped[0].to_string(),
            "Error: Invalid data on line 2: 'abc'"
        );
    }

    #[test]
    fn test_render() {
        // given (前提条件):
        let stats = Statistics::compute(&[100.0, 150.0]);

        // when (操作):
        let rendered = stats.render(Duration::ZERO);

        // then (期待する結果):
        assert_eq!(
            rendered,
            "Time elapsed: 0.0000 seconds\n\nStatistics:\n\nMean: 125.0\nMedian: 125.0\nMode: 100.0\nVariance: 625.0\nStandard Deviation: 25.0\n"
        );
    }
}
