//! Scoring constants.

/// Configuration for the layout scoring function.
///
/// Defaults reproduce the original rule set: 1 point per adjacent pair
/// sharing an attribute, 2 further points when the pair is the same
/// product, and 5 points deducted per empty face-width beyond a slack of
/// 2 per level.
///
/// # Examples
///
/// ```
/// use shelfplan::scoring::ScoringConfig;
///
/// let config = ScoringConfig::default()
///     .with_attribute_bonus(1.5)
///     .with_empty_tolerance(3);
/// assert_eq!(config.empty_tolerance, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Reward for an adjacent pair sharing the same categorical attribute.
    pub attribute_bonus: f64,

    /// Additional reward when the adjacent pair is the same product code
    /// (on top of `attribute_bonus`, which such a pair always earns).
    pub identical_bonus: f64,

    /// Empty face-widths tolerated per level before the penalty applies.
    pub empty_tolerance: u32,

    /// Penalty per empty face-width beyond the tolerance.
    pub empty_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            attribute_bonus: 1.0,
            identical_bonus: 2.0,
            empty_tolerance: 2,
            empty_penalty: 5.0,
        }
    }
}

impl ScoringConfig {
    /// Sets the same-attribute adjacency reward.
    pub fn with_attribute_bonus(mut self, bonus: f64) -> Self {
        self.attribute_bonus = bonus;
        self
    }

    /// Sets the additional identical-product adjacency reward.
    pub fn with_identical_bonus(mut self, bonus: f64) -> Self {
        self.identical_bonus = bonus;
        self
    }

    /// Sets the tolerated empty face-widths per level.
    pub fn with_empty_tolerance(mut self, tolerance: u32) -> Self {
        self.empty_tolerance = tolerance;
        self
    }

    /// Sets the penalty per empty face-width beyond the tolerance.
    pub fn with_empty_penalty(mut self, penalty: f64) -> Self {
        self.empty_penalty = penalty;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.attribute_bonus.is_finite() || self.attribute_bonus < 0.0 {
            return Err(format!(
                "attribute_bonus must be finite and non-negative, got {}",
                self.attribute_bonus
            ));
        }
        if !self.identical_bonus.is_finite() || self.identical_bonus < 0.0 {
            return Err(format!(
                "identical_bonus must be finite and non-negative, got {}",
                self.identical_bonus
            ));
        }
        if !self.empty_penalty.is_finite() || self.empty_penalty < 0.0 {
            return Err(format!(
                "empty_penalty must be finite and non-negative, got {}",
                self.empty_penalty
            ));
        }
        Ok(())
    }
}
