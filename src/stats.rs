//! Helpers for asserting statistical properties of random draws.

const QUARTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Asserts that observed bucket counts are consistent with expected bucket
/// counts under a chi-squared goodness-of-fit test and returns the statistic.
///
/// # Panics
///
/// Panics when the slices are empty or their lengths differ, when an expected
/// count is at or below `5.0`, or when the statistic deviates from the mean
/// of its null distribution by more than `sigma` standard deviations.
pub fn chi_squared(expected: &[f64], actual: &[f64], sigma: f64) -> f64 {
    assert!(!expected.is_empty(), "buckets must be non-empty");
    assert_eq!(
        expected.len(),
        actual.len(),
        "buckets must have the same length"
    );
    let statistic = expected
        .iter()
        .zip(actual)
        .map(|(&expected, &actual)| {
            assert!(
                expected > 5.0,
                "expected count `{expected}` is too small for the approximation to hold"
            );
            let difference = actual - expected;
            difference * difference / expected
        })
        .sum::<f64>();
    let mean = (expected.len() - 1) as f64;
    let deviation = (2.0 * mean).sqrt();
    assert!(
        statistic <= mean + sigma * deviation,
        "chi-squared statistic `{statistic}` deviates from its mean `{mean}` by more than `{sigma}` standard deviations"
    );
    statistic
}

/// Estimates quantiles of a stream of observations in constant space with
/// the piecewise-parabolic method.
///
/// The estimator keeps five markers (minimum, first quartile, median, third
/// quartile, maximum) and nudges the middle three towards their ideal
/// positions on every observation. Estimates are exact for the first five
/// observations; the extremes stay exact throughout.
#[derive(Clone, Debug)]
pub struct MedianEstimator {
    markers: [f64; 5],
    positions: [f64; 5],
    count: usize,
}

impl MedianEstimator {
    pub const fn new() -> Self {
        Self {
            markers: [0.0; 5],
            positions: [1.0, 2.0, 3.0, 4.0, 5.0],
            count: 0,
        }
    }

    pub fn observe(&mut self, value: f64) {
        if self.count < 5 {
            // The first five observations are kept sorted in the markers.
            let mut index = self.count;
            while index > 0 && self.markers[index - 1] > value {
                self.markers[index] = self.markers[index - 1];
                index -= 1;
            }
            self.markers[index] = value;
            self.count += 1;
            return;
        }

        let cell = if value < self.markers[0] {
            self.markers[0] = value;
            0
        } else if value >= self.markers[4] {
            self.markers[4] = value;
            3
        } else {
            (1..4)
                .rfind(|&index| self.markers[index] <= value)
                .unwrap_or(0)
        };
        for position in &mut self.positions[cell + 1..] {
            *position += 1.0;
        }
        self.count += 1;

        for index in 1..4 {
            let desired = 1.0 + (self.count - 1) as f64 * QUARTILES[index];
            let delta = desired - self.positions[index];
            if (delta >= 1.0 && self.positions[index + 1] - self.positions[index] > 1.0)
                || (delta <= -1.0 && self.positions[index - 1] - self.positions[index] < -1.0)
            {
                let sign = if delta < 0.0 { -1.0 } else { 1.0 };
                let candidate = self.parabolic(index, sign);
                self.markers[index] = if self.markers[index - 1] < candidate
                    && candidate < self.markers[index + 1]
                {
                    candidate
                } else {
                    self.linear(index, sign)
                };
                self.positions[index] += sign;
            }
        }
    }

    pub fn median(&self) -> Option<f64> {
        match self.count {
            0 => None,
            count @ 1..=4 => Some(if count % 2 == 1 {
                self.markers[count / 2]
            } else {
                (self.markers[count / 2 - 1] + self.markers[count / 2]) / 2.0
            }),
            _ => Some(self.markers[2]),
        }
    }

    pub fn quartile1(&self) -> Option<f64> {
        self.quartile(1)
    }

    pub fn quartile3(&self) -> Option<f64> {
        self.quartile(3)
    }

    pub fn minimum(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.markers[0])
        }
    }

    pub fn maximum(&self) -> Option<f64> {
        match self.count {
            0 => None,
            count @ 1..=4 => Some(self.markers[count - 1]),
            _ => Some(self.markers[4]),
        }
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn quartile(&self, index: usize) -> Option<f64> {
        match self.count {
            0 => None,
            count @ 1..=4 => {
                let rank = ((count - 1) as f64 * QUARTILES[index]).round() as usize;
                Some(self.markers[rank])
            }
            _ => Some(self.markers[index]),
        }
    }

    fn parabolic(&self, index: usize, sign: f64) -> f64 {
        let markers = &self.markers;
        let positions = &self.positions;
        markers[index]
            + sign / (positions[index + 1] - positions[index - 1])
                * ((positions[index] - positions[index - 1] + sign)
                    * (markers[index + 1] - markers[index])
                    / (positions[index + 1] - positions[index])
                    + (positions[index + 1] - positions[index] - sign)
                        * (markers[index] - markers[index - 1])
                        / (positions[index] - positions[index - 1]))
    }

    fn linear(&self, index: usize, sign: f64) -> f64 {
        let offset = if sign < 0.0 { index - 1 } else { index + 1 };
        self.markers[index]
            + sign * (self.markers[offset] - self.markers[index])
                / (self.positions[offset] - self.positions[index])
    }
}

impl Default for MedianEstimator {
    fn default() -> Self {
        Self::new()
    }
}
