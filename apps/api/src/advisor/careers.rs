use serde::{Deserialize, Serialize};

use crate::advisor::performance::round1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerWeight {
    pub career: String,
    /// Percentage share, one decimal. Weights of a list sum to 100.
    pub weight: f64,
}

/// Spreads 100% evenly across the suggested careers, in their listed order.
/// Rounding residue lands on the last career.
pub fn career_weights(careers: &[String]) -> Vec<CareerWeight> {
    if careers.is_empty() {
        return Vec::new();
    }

    let even = round1(100.0 / careers.len() as f64);
    let mut weights = vec![even; careers.len()];
    let residue = round1(100.0 - weights.iter().sum::<f64>());
    if let Some(last) = weights.last_mut() {
        *last = round1(*last + residue);
    }

    careers
        .iter()
        .zip(weights)
        .map(|(career, weight)| CareerWeight {
            career: career.clone(),
            weight,
        })
        .collect()
}

/// First `n` career names joined for prose, or a generic phrase when there are none.
pub fn top_careers_phrase(weights: &[CareerWeight], n: usize) -> String {
    if weights.is_empty() {
        return "some options".to_string();
    }
    weights
        .iter()
        .take(n)
        .map(|w| w.career.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn careers(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Career {i}")).collect()
    }

    #[test]
    fn test_four_careers_split_evenly() {
        let weights = career_weights(&careers(4));
        assert!(weights.iter().all(|w| w.weight == 25.0));
    }

    #[test]
    fn test_three_careers_residue_on_last() {
        let weights = career_weights(&careers(3));
        assert_eq!(weights[0].weight, 33.3);
        assert_eq!(weights[1].weight, 33.3);
        assert_eq!(weights[2].weight, 33.4);
    }

    #[test]
    fn test_weights_sum_to_hundred() {
        for n in 1..=9 {
            let total: f64 = career_weights(&careers(n)).iter().map(|w| w.weight).sum();
            assert!((total - 100.0).abs() < 0.05, "n={n} total={total}");
        }
    }

    #[test]
    fn test_order_preserved() {
        let weights = career_weights(&careers(2));
        assert_eq!(weights[0].career, "Career 1");
        assert_eq!(weights[1].career, "Career 2");
    }

    #[test]
    fn test_empty_list() {
        assert!(career_weights(&[]).is_empty());
        assert_eq!(top_careers_phrase(&[], 3), "some options");
    }

    #[test]
    fn test_top_careers_phrase_takes_three() {
        let weights = career_weights(&careers(4));
        assert_eq!(
            top_careers_phrase(&weights, 3),
            "Career 1, Career 2, Career 3"
        );
    }
}
