//! Fill-up log statistics for the fuel tracker.
//!
//! The fuel app records one [FillUp] per visit to the pump and derives the
//! figures it shows from consecutive pairs: distance travelled since the
//! previous fill-up, mileage in kilometres per litre, and cost per
//! kilometre. [fuel_stats] computes those per-leg figures plus totals and
//! averages over the whole log.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::report::math;

/// One fuel fill-up as recorded by the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillUp {
    /// Odometer reading at the pump, in kilometres.
    pub odometer: f64,

    /// Litres of fuel added.
    pub volume: f64,

    /// Total cost of the fill-up.
    pub cost: f64,

    /// When the fill-up happened.
    #[serde(default)]
    pub date: Option<Date>,
}

impl FillUp {
    /// Create a fill-up from an odometer reading, litres added, and total
    /// cost.
    pub fn new(odometer: f64, volume: f64, cost: f64) -> Self {
        Self {
            odometer,
            volume,
            cost,
            date: None,
        }
    }

    /// Set the date of the fill-up.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }
}

/// The stretch between two consecutive fill-ups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Kilometres travelled between the two odometer readings.
    pub distance: f64,

    /// Kilometres per litre over the leg.
    pub mileage: f64,

    /// Cost per kilometre over the leg.
    pub cost_per_km: f64,
}

/// Aggregated statistics over a fill-up log.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FuelStats {
    /// Per-leg figures, in odometer order.
    pub legs: Vec<Leg>,

    /// Total distance across all legs, in kilometres.
    pub total_distance: f64,

    /// Total litres across all legs.
    pub total_volume: f64,

    /// Total cost across all legs.
    pub total_cost: f64,

    /// Mean of the per-leg mileages, in kilometres per litre.
    pub average_mileage: f64,

    /// Mean of the per-leg costs per kilometre.
    pub average_cost_per_km: f64,
}

/// Kilometres per litre, or `None` when the leg covered no distance or added
/// no fuel.
pub fn mileage(distance: f64, volume: f64) -> Option<f64> {
    (distance > 0.0 && volume > 0.0).then(|| distance / volume)
}

/// Cost per kilometre, or `None` for a leg that covered no distance.
pub fn cost_per_km(cost: f64, distance: f64) -> Option<f64> {
    (distance > 0.0).then(|| cost / distance)
}

/// Compute fuel statistics over a fill-up log.
///
/// The log is ordered by odometer reading and each consecutive pair forms a
/// leg, attributed the later fill-up's volume and cost (on a full-tank log,
/// the fuel bought at the end of a leg is what was burned driving it). Pairs
/// with a non-increasing odometer or a zero volume produce no leg; malformed
/// entries degrade the report instead of failing it. Fewer than two fill-ups
/// yields the zero report.
pub fn fuel_stats(fill_ups: &[FillUp]) -> FuelStats {
    if fill_ups.len() < 2 {
        return FuelStats::default();
    }

    let mut ordered: Vec<&FillUp> = fill_ups.iter().collect();
    ordered.sort_by(|a, b| a.odometer.total_cmp(&b.odometer));

    let mut stats = FuelStats::default();
    let mut mileages = Vec::new();
    let mut costs_per_km = Vec::new();

    for pair in ordered.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        let distance = current.odometer - previous.odometer;

        let Some(leg_mileage) = mileage(distance, current.volume) else {
            tracing::debug!(
                "skipping fill-up pair with distance {distance} km and volume {} l",
                current.volume,
            );
            continue;
        };
        // distance is positive here, so cost per kilometre is defined.
        let leg_cost_per_km = current.cost / distance;

        stats.total_distance += distance;
        stats.total_volume += current.volume;
        stats.total_cost += current.cost;

        mileages.push(leg_mileage);
        costs_per_km.push(leg_cost_per_km);
        stats.legs.push(Leg {
            distance,
            mileage: leg_mileage,
            cost_per_km: leg_cost_per_km,
        });
    }

    stats.average_mileage = math::mean(&mileages);
    stats.average_cost_per_km = math::mean(&costs_per_km);

    stats
}

#[cfg(test)]
mod fuel_tests {
    use time::macros::date;

    use crate::fuel::{FillUp, FuelStats, cost_per_km, fuel_stats, mileage};

    #[test]
    fn mileage_divides_distance_by_volume() {
        assert_eq!(mileage(400.0, 25.0), Some(16.0));
        assert_eq!(mileage(0.0, 25.0), None);
        assert_eq!(mileage(400.0, 0.0), None);
        assert_eq!(mileage(-10.0, 25.0), None);
    }

    #[test]
    fn cost_per_km_divides_cost_by_distance() {
        assert_eq!(cost_per_km(2000.0, 400.0), Some(5.0));
        assert_eq!(cost_per_km(2000.0, 0.0), None);
    }

    #[test]
    fn stats_over_an_ordered_log() {
        let fill_ups = vec![
            FillUp::new(12_000.0, 30.0, 3000.0).date(date!(2025 - 08 - 01)),
            FillUp::new(12_400.0, 25.0, 2500.0).date(date!(2025 - 08 - 14)),
            FillUp::new(12_900.0, 25.0, 2600.0).date(date!(2025 - 08 - 29)),
        ];

        let stats = fuel_stats(&fill_ups);

        assert_eq!(stats.legs.len(), 2);
        assert_eq!(stats.legs[0].distance, 400.0);
        assert_eq!(stats.legs[0].mileage, 16.0);
        assert_eq!(stats.legs[0].cost_per_km, 6.25);
        assert_eq!(stats.legs[1].distance, 500.0);
        assert_eq!(stats.legs[1].mileage, 20.0);
        assert_eq!(stats.legs[1].cost_per_km, 5.2);

        assert_eq!(stats.total_distance, 900.0);
        assert_eq!(stats.total_volume, 50.0);
        assert_eq!(stats.total_cost, 5100.0);
        assert_eq!(stats.average_mileage, 18.0);
        assert_eq!(stats.average_cost_per_km, 5.725);
    }

    #[test]
    fn unordered_logs_are_sorted_by_odometer() {
        let ordered = vec![
            FillUp::new(100.0, 10.0, 100.0),
            FillUp::new(200.0, 10.0, 100.0),
        ];
        let shuffled = vec![ordered[1].clone(), ordered[0].clone()];

        assert_eq!(fuel_stats(&shuffled), fuel_stats(&ordered));
    }

    #[test]
    fn non_increasing_odometer_pairs_are_skipped() {
        let fill_ups = vec![
            FillUp::new(500.0, 20.0, 2000.0),
            // Odometer reset or typo; no leg can be derived from this pair.
            FillUp::new(500.0, 18.0, 1800.0),
            FillUp::new(800.0, 15.0, 1500.0),
        ];

        let stats = fuel_stats(&fill_ups);

        assert_eq!(stats.legs.len(), 1);
        assert_eq!(stats.legs[0].distance, 300.0);
        assert_eq!(stats.legs[0].mileage, 20.0);
    }

    #[test]
    fn zero_volume_fill_ups_produce_no_leg() {
        let fill_ups = vec![
            FillUp::new(100.0, 10.0, 100.0),
            FillUp::new(200.0, 0.0, 0.0),
            FillUp::new(300.0, 10.0, 100.0),
        ];

        let stats = fuel_stats(&fill_ups);

        assert_eq!(stats.legs.len(), 1);
        assert_eq!(stats.legs[0].distance, 100.0);
    }

    #[test]
    fn short_logs_yield_the_zero_report() {
        assert_eq!(fuel_stats(&[]), FuelStats::default());
        assert_eq!(
            fuel_stats(&[FillUp::new(100.0, 10.0, 100.0)]),
            FuelStats::default()
        );
    }
}
