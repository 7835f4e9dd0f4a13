use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::CartEntry;
use crate::models::Position;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartStats {
    pub total_players: usize,
    pub by_position: BTreeMap<Position, usize>,
    pub average_metrics: AverageMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct AverageMetrics {
    pub avg_per_10: f64,
    pub avg_aftersnap_iq: f64,
}

impl CartStats {
    /// Counts and two-decimal averages. An empty cart yields zeros.
    pub fn from_entries(entries: &[CartEntry]) -> Self {
        let mut by_position = BTreeMap::new();
        for entry in entries {
            *by_position.entry(entry.position).or_insert(0) += 1;
        }

        let average_metrics = if entries.is_empty() {
            AverageMetrics::default()
        } else {
            let count = entries.len() as f64;
            let per_10: f64 = entries.iter().map(|e| e.avg_per_10).sum();
            let iq: f64 = entries.iter().map(|e| e.avg_aftersnap_iq).sum();

            AverageMetrics {
                avg_per_10: round_hundredths(per_10 / count),
                avg_aftersnap_iq: round_hundredths(iq / count),
            }
        };

        Self {
            total_players: entries.len(),
            by_position,
            average_metrics,
        }
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_hundredths() {
        assert_eq!(round_hundredths(8.456), 8.46);
        assert_eq!(round_hundredths(8.454), 8.45);
        assert_eq!(round_hundredths(0.0), 0.0);
    }

    #[test]
    fn test_empty_stats_shape() {
        let stats = CartStats::from_entries(&[]);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "totalPlayers": 0,
                "byPosition": {},
                "averageMetrics": {
                    "avg_per_10": 0.0,
                    "avg_aftersnap_iq": 0.0
                }
            })
        );
    }
}
