use chrono::FixedOffset;

use crate::error::LunarError;

/// Settings for resolving raw timestamps into civil days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlmanacConfig {
    /// Minutes east of UTC of the zone whose calendar day a timestamp
    /// belongs to. China Standard Time is +480.
    pub utc_offset_minutes: i32,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 480,
        }
    }
}

impl AlmanacConfig {
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, LunarError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(LunarError::InvalidUtcOffset {
                minutes: self.utc_offset_minutes,
            })
    }

    pub fn validate(&self) -> Result<(), LunarError> {
        self.utc_offset().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_china_standard_time() {
        let config = AlmanacConfig::default();
        assert_eq!(config.utc_offset_minutes, 480);
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn offset_beyond_a_day_is_rejected() {
        let config = AlmanacConfig::default().with_utc_offset_minutes(24 * 60);
        assert_eq!(
            config.validate(),
            Err(LunarError::InvalidUtcOffset { minutes: 1440 })
        );
    }

    #[test]
    fn negative_offset_is_accepted() {
        let config = AlmanacConfig::default().with_utc_offset_minutes(-300);
        assert!(config.validate().is_ok());
    }
}
