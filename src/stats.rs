//! The regression collaborator: a pure least-squares fit over the
//! `(kindness, volatility)` coordinates, used to draw a trend line.

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`, e.g. for trend-line endpoints.
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares fit of `ys` against `xs`.
///
/// Returns `None` when the slices differ in length, hold fewer than two
/// points, or all x-values coincide (vertical data has no finite slope).
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Fit a trend line over `(x, y)` coordinate pairs, the shape
/// `RatingStore::coordinates` produces.
pub fn linear_fit_coords(coords: &[(f64, f64)]) -> Option<LinearFit> {
    let xs: Vec<f64> = coords.iter().map(|&(x, _)| x).collect();
    let ys: Vec<f64> = coords.iter().map(|&(_, y)| y).collect();
    linear_fit(&xs, &ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0]; // y = 2x + 1
        let fit = linear_fit(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.y_at(10.0) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn noisy_data_fits_between_extremes() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.1, 0.9, 2.2, 2.8];
        let fit = linear_fit(&xs, &ys).unwrap();
        assert!(fit.slope > 0.8 && fit.slope < 1.2);
    }

    #[test]
    fn degenerate_inputs_give_none() {
        assert!(linear_fit(&[], &[]).is_none());
        assert!(linear_fit(&[1.0], &[2.0]).is_none());
        assert!(linear_fit(&[1.0, 2.0], &[1.0]).is_none());
        // all x equal: vertical
        assert!(linear_fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn coordinate_pairs_fit_matches_slices() {
        let coords = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
        let fit = linear_fit_coords(&coords).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
    }
}
