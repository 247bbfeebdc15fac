//! Harmonic search over a scanned frequency sequence.

/// Relative tolerance used when matching `n · f` against scanned frequencies.
pub const DEFAULT_HARMONIC_TOLERANCE: f64 = 1e-3;

/// Harmonic number of the fundamental.
pub const FUNDAMENTAL: usize = 1;

/// A fundamental frequency or one of its integer harmonics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// `number · fundamental`.
    pub frequency: f64,
    /// 1 for the fundamental, then 2, 3, ...
    pub number: usize,
    /// Index of the matching entry in the searched sequence, if any.
    pub index: Option<usize>,
}

impl Harmonic {
    pub fn is_fundamental(&self) -> bool {
        self.number == FUNDAMENTAL
    }

    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }
}

/// Find successive harmonics of `fundamental` among `frequencies`.
///
/// Walks the sequence in order looking for `2f`, then `3f`, and so on; each
/// match moves the search on to the next harmonic number. The fundamental is
/// always the first element of the result.
pub fn find_harmonics(fundamental: f64, frequencies: &[f64], tolerance: f64) -> Vec<Harmonic> {
    let matches = |candidate: f64, target: f64| (candidate - target).abs() <= tolerance * target.abs();

    let mut harmonics = vec![Harmonic {
        frequency: fundamental,
        number: FUNDAMENTAL,
        index: frequencies.iter().position(|&f| matches(f, fundamental)),
    }];
    if !(fundamental > 0.0) || !fundamental.is_finite() {
        return harmonics;
    }

    let mut n = FUNDAMENTAL + 1;
    for (i, &candidate) in frequencies.iter().enumerate() {
        let target = fundamental * n as f64;
        if matches(candidate, target) {
            harmonics.push(Harmonic {
                frequency: target,
                number: n,
                index: Some(i),
            });
            n += 1;
        }
    }

    harmonics
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn finds_consecutive_harmonics() {
        let freqs: Vec<f64> = (0..=100).map(|i| i as f64 * 0.05).collect();
        let harmonics = find_harmonics(0.4, &freqs, DEFAULT_HARMONIC_TOLERANCE);

        let numbers: Vec<usize> = harmonics.iter().map(|h| h.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
        assert!(harmonics[0].is_fundamental());
        assert_eq!(harmonics[0].index, Some(8));
        assert_eq!(harmonics[1].index, Some(16));
        assert_relative_eq!(harmonics[2].frequency, 1.2, epsilon = 1e-12);
        assert_relative_eq!(harmonics[1].period(), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn stops_at_first_missing_harmonic() {
        // 3f = 0.9 is absent, so 4f = 1.2 is never looked for
        let freqs = [0.3, 0.6, 0.75, 1.2, 1.5];
        let harmonics = find_harmonics(0.3, &freqs, DEFAULT_HARMONIC_TOLERANCE);
        assert_eq!(harmonics.len(), 2);
        assert_eq!(harmonics[1].number, 2);
        assert_eq!(harmonics[1].index, Some(1));
    }

    #[test]
    fn tolerance_is_relative() {
        let freqs = [1.0, 2.0015, 3.0];
        assert_eq!(find_harmonics(1.0, &freqs, 1e-3).len(), 3);
        assert_eq!(find_harmonics(1.0, &freqs, 1e-4).len(), 1);
    }

    #[test]
    fn degenerate_fundamental() {
        let freqs = [0.0, 0.5, 1.0];
        let harmonics = find_harmonics(0.0, &freqs, DEFAULT_HARMONIC_TOLERANCE);
        assert_eq!(harmonics.len(), 1);
        assert_eq!(harmonics[0].index, Some(0));
        assert_eq!(find_harmonics(f64::NAN, &freqs, 1e-3)[0].index, None);
    }
}
