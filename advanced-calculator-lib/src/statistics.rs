//! Descriptive statistics over a list of numbers.

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticsError {
    #[error("At least one number is required.")]
    EmptyData,

    #[error("No unique mode found (multiple values appear equally often).")]
    NoUniqueMode { modes: Vec<f64> },
}

/// The arithmetic mean (average) of the values.
pub fn mean(values: &[f64]) -> Result<f64, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyData);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// The middle value once sorted, or the mean of the two middle values for an even count.
///
/// # Examples
///
/// ```
/// use advanced_calculator::statistics::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn median(values: &[f64]) -> Result<f64, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyData);
    }
    let sorted = values.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[middle])
    } else {
        Ok((sorted[middle - 1] + sorted[middle]) / 2.0)
    }
}

/// Every value that shares the highest frequency, in order of first appearance.
pub fn multimode(values: &[f64]) -> Vec<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let highest = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    counts
        .into_iter()
        .filter(|(_, count)| *count == highest)
        .map(|(value, _)| value)
        .collect()
}

/// The single most common value.
///
/// Fails with [`StatisticsError::NoUniqueMode`] listing every tied value when more than one
/// value has the highest frequency. A tie is always an error here; it never silently picks the
/// first of the tied values.
pub fn mode(values: &[f64]) -> Result<f64, StatisticsError> {
    let modes = multimode(values);
    match modes.len() {
        0 => Err(StatisticsError::EmptyData),
        1 => Ok(modes[0]),
        _ => Err(StatisticsError::NoUniqueMode { modes }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(mean(&[-3.0]), Ok(-3.0));
    }

    #[parameterized(
    values = { vec![3.0, 1.0, 2.0], vec![4.0, 1.0, 3.0, 2.0], vec![7.0], vec![-1.0, -5.0, 10.0, 2.0, 0.0] },
    expected = { 2.0, 2.5, 7.0, 0.0 }
    )]
    fn median_of_values(values: Vec<f64>, expected: f64) {
        assert_eq!(median(&values), Ok(expected));
    }

    #[test]
    fn mode_of_values_with_single_most_common() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), Ok(2.0));
    }

    #[test]
    fn tied_modes_are_reported_in_order_of_appearance() {
        assert_eq!(
            mode(&[2.0, 1.0, 1.0, 2.0, 3.0]),
            Err(StatisticsError::NoUniqueMode {
                modes: vec![2.0, 1.0]
            })
        );
    }

    #[test]
    fn all_distinct_values_are_all_modes() {
        assert_eq!(multimode(&[5.0, 6.0, 7.0]), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn single_value_is_its_own_mode() {
        assert_eq!(mode(&[9.5]), Ok(9.5));
    }

    #[test]
    fn empty_values_are_rejected() {
        assert_eq!(mean(&[]), Err(StatisticsError::EmptyData));
        assert_eq!(median(&[]), Err(StatisticsError::EmptyData));
        assert_eq!(mode(&[]), Err(StatisticsError::EmptyData));
        assert!(multimode(&[]).is_empty());
    }
}
