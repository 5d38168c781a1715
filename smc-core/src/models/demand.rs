use super::{DemandId, NodeId, Profile, ValidationError};

/// A demand block bidding for energy.
///
/// The bid price expresses the block's willingness-to-pay; a block is served
/// only up to its capacity, and only when the clearing price does not exceed
/// its bid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandBlock {
    /// The network node the block sits at (informational in a single-node model)
    pub node: NodeId,
    /// The maximum served quantity, per period
    pub capacity: Profile,
    /// The bid price (willingness-to-pay), per period
    pub bid: Profile,
}

impl DemandBlock {
    /// Check the block's data against the horizon and the capacity invariant.
    pub fn validate(&self, id: &DemandId, horizon: usize) -> Result<(), ValidationError> {
        for profile in [&self.capacity, &self.bid] {
            profile
                .check_horizon(horizon)
                .map_err(|actual| ValidationError::HorizonMismatch {
                    unit: id.to_string(),
                    expected: horizon,
                    actual,
                })?;
        }

        let floor = self.capacity.min_value();
        if floor < 0.0 {
            return Err(ValidationError::NegativeCapacity {
                unit: id.to_string(),
                value: floor,
            });
        }

        Ok(())
    }
}
