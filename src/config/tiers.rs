// Display-only buckets for money cells. Nothing filters or sorts on these.

/// Anything below this is cheap (green).
pub const LOW_TIER_CEILING: f64 = 0.50;

/// Anything below this and at or above the low ceiling is moderate (yellow).
/// The rest is expensive (red).
pub const MID_TIER_CEILING: f64 = 5.00;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Low,
    Mid,
    High,
}

impl PriceTier {
    pub fn of(amount: f64) -> Self {
        if amount < LOW_TIER_CEILING {
            PriceTier::Low
        } else if amount < MID_TIER_CEILING {
            PriceTier::Mid
        } else {
            PriceTier::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_belong_to_the_upper_tier() {
        assert_eq!(PriceTier::of(0.0), PriceTier::Low);
        assert_eq!(PriceTier::of(0.49), PriceTier::Low);
        assert_eq!(PriceTier::of(0.50), PriceTier::Mid);
        assert_eq!(PriceTier::of(4.99), PriceTier::Mid);
        assert_eq!(PriceTier::of(5.00), PriceTier::High);
        assert_eq!(PriceTier::of(75.0), PriceTier::High);
    }
}
