//! Construction-time table parameters.

use crate::error::BuildError;
use crate::probe::Multipliers;
use crate::sizing::{SizingPolicy, DEFAULT_BASE_CAPACITY};

/// Grow when the load percentage exceeds this.
pub const DEFAULT_GROW_ABOVE: usize = 70;
/// Shrink when the load percentage falls below this.
pub const DEFAULT_SHRINK_BELOW: usize = 10;

/// Parameters of a [`HashTable`](crate::HashTable).
///
/// Loads are integer percentages, `len * 100 / bucket_count`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub base_capacity: usize,
    pub grow_above: usize,
    pub shrink_below: usize,
    pub multipliers: Multipliers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_capacity: DEFAULT_BASE_CAPACITY,
            grow_above: DEFAULT_GROW_ABOVE,
            shrink_below: DEFAULT_SHRINK_BELOW,
            multipliers: Multipliers::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_capacity(mut self, base_capacity: usize) -> Self {
        self.base_capacity = base_capacity;
        self
    }

    pub fn grow_above(mut self, percent: usize) -> Self {
        self.grow_above = percent;
        self
    }

    pub fn shrink_below(mut self, percent: usize) -> Self {
        self.shrink_below = percent;
        self
    }

    pub fn multipliers(mut self, primary: u64, secondary: u64) -> Self {
        self.multipliers = Multipliers { primary, secondary };
        self
    }

    pub fn sizing(&self) -> SizingPolicy {
        SizingPolicy::new(self.base_capacity)
    }

    /// Checks the parameters keep the table's invariants reachable: a vacant
    /// slot always exists after the grow check, and a shrink does not land
    /// straight back over the grow threshold.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.base_capacity < 2 {
            return Err(BuildError::InvalidConfig("base_capacity must be at least 2"));
        }
        if self.grow_above >= 100 {
            return Err(BuildError::InvalidConfig("grow_above must be below 100"));
        }
        if self.shrink_below.saturating_mul(2) > self.grow_above {
            return Err(BuildError::InvalidConfig(
                "shrink_below must be at most half of grow_above",
            ));
        }
        let Multipliers { primary, secondary } = self.multipliers;
        if primary < 2 || secondary < 2 {
            return Err(BuildError::InvalidConfig("hash multipliers must be at least 2"));
        }
        if primary == secondary {
            return Err(BuildError::InvalidConfig("hash multipliers must differ"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.base_capacity, 53);
        assert_eq!(config.grow_above, 70);
        assert_eq!(config.shrink_below, 10);
        assert_eq!(config.multipliers, Multipliers { primary: 151, secondary: 163 });
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_unreachable_invariants() {
        let bad = [
            Config::new().base_capacity(1),
            Config::new().grow_above(100),
            Config::new().grow_above(30).shrink_below(20),
            Config::new().multipliers(1, 163),
            Config::new().multipliers(151, 151),
        ];
        for config in bad {
            match config.validate() {
                Err(BuildError::InvalidConfig(_)) => {}
                other => panic!("{config:?} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn builder_setters_compose() {
        let config = Config::new()
            .base_capacity(5)
            .grow_above(80)
            .shrink_below(5)
            .multipliers(31, 37);
        assert_eq!(config.sizing().capacity_for(0), Some(5));
        assert_eq!(config.validate(), Ok(()));
    }
}
