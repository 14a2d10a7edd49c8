//! Dot product and cosine similarity.

use crate::error::MathError;
use crate::norm::l2_norm;

/// Sum of elementwise products of two equal-length vectors.
///
/// Mismatched lengths are a caller error and fail explicitly rather than
/// silently truncating to the shorter vector.
pub fn dot(x: &[f64], y: &[f64]) -> Result<f64, MathError> {
    if x.len() != y.len() {
        return Err(MathError::DimensionMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }

    Ok(x.iter().zip(y.iter()).map(|(a, b)| a * b).sum())
}

/// Cosine similarity of two equal-length vectors.
///
/// Defined as `dot(a, b) / (l2_norm(a) * l2_norm(b))`. If either vector has
/// zero norm the result is `NaN` — division by zero leaves the similarity
/// undefined, and callers decide how to present that. It is a representable
/// output value, not an error.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, MathError> {
    Ok(dot(a, b)? / (l2_norm(a) * l2_norm(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_dot_basic() {
        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), 11.0);
    }

    #[test]
    fn test_dot_dimension_mismatch() {
        let result = dot(&[1.0, 2.0], &[1.0]);
        assert!(matches!(
            result,
            Err(MathError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        assert!(matches!(
            cosine_similarity(&[1.0], &[1.0, 2.0]),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_self_similarity_is_one() {
        let v = [0.3, -1.7, 2.5, 0.01];
        assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_orthogonal_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_opposite_is_minus_one() {
        let sim = cosine_similarity(&[2.0, 1.0], &[-2.0, -1.0]).unwrap();
        assert!((sim + 1.0).abs() < EPS);
    }

    #[test]
    fn test_symmetry() {
        let a = [1.0, 2.0, 3.0];
        let b = [-0.5, 0.25, 4.0];
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert!((ab - ba).abs() < EPS);
    }

    #[test]
    fn test_positive_scale_invariance() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, -5.0, 6.0];
        let scaled: Vec<f64> = a.iter().map(|x| x * 1e3).collect();
        let sim = cosine_similarity(&a, &b).unwrap();
        let sim_scaled = cosine_similarity(&scaled, &b).unwrap();
        assert!((sim - sim_scaled).abs() < EPS);
    }

    #[test]
    fn test_zero_vector_yields_nan() {
        // Undefined similarity is NaN, not a crash or an error
        let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert!(sim.is_nan());
    }

    #[test]
    fn test_similarity_within_unit_range() {
        let a = [1e150, -3.0, 1e-150];
        let b = [2.0, 7.0, -1e120];
        let sim = cosine_similarity(&a, &b).unwrap();
        assert!((-1.0 - EPS..=1.0 + EPS).contains(&sim));
    }

    #[test]
    fn test_near_parallel_vectors() {
        // [1, 0] vs [1, 0.01] from the reference scenario
        let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 0.01]).unwrap();
        assert!((sim - 0.99995).abs() < 1e-4);
    }
}
