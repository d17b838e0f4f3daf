pub mod adjustments;
pub mod distance;
pub mod occupancy;

pub use adjustments::{
    adjustment_for_tier, compute_adjustments, AdjustmentResult, Adjustments, ComplianceStatus,
};
pub use distance::{compute_distance, DistanceResult};
pub use occupancy::{classify, compute_occupancy, ComplianceBand, Occupancy};
