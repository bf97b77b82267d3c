//! Droppable container ids used by drag outcomes.

use crate::model::hour::Hour;
use crate::store::transition::RejectedTransition;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

/// Container tag for the unassigned pool.
pub const POOL_CONTAINER: &str = "pool";
/// Droppable id the task list widget has always used for the pool.
pub const LEGACY_POOL_CONTAINER: &str = "availableTasks";
/// Prefix of hour slot container tags (`hour-<h>`).
pub const HOUR_CONTAINER_PREFIX: &str = "hour-";

static HOUR_CONTAINER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^hour-([0-9]+)$").expect("valid hour container regex"));

/// Parsed drag container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerId {
    Pool,
    Hour(Hour),
}

impl ContainerId {
    /// Parses one container tag.
    ///
    /// # Errors
    /// - `MalformedContainer` when the tag is not `pool`, the legacy pool id,
    ///   or `hour-<h>` with `h` in `0..=23`.
    pub fn parse(value: &str) -> Result<Self, RejectedTransition> {
        if value == POOL_CONTAINER || value == LEGACY_POOL_CONTAINER {
            return Ok(Self::Pool);
        }

        HOUR_CONTAINER_RE
            .captures(value)
            .and_then(|captures| captures.get(1))
            .and_then(|digits| digits.as_str().parse::<u32>().ok())
            .and_then(|raw| Hour::try_from(raw).ok())
            .map(Self::Hour)
            .ok_or_else(|| RejectedTransition::MalformedContainer(value.to_string()))
    }

    /// Canonical tag for this container.
    pub fn tag(self) -> String {
        match self {
            Self::Pool => POOL_CONTAINER.to_string(),
            Self::Hour(hour) => format!("{HOUR_CONTAINER_PREFIX}{hour}"),
        }
    }
}

impl Display for ContainerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::ContainerId;
    use crate::model::hour::Hour;
    use crate::store::transition::RejectedTransition;

    #[test]
    fn parse_accepts_pool_aliases() {
        assert_eq!(ContainerId::parse("pool"), Ok(ContainerId::Pool));
        assert_eq!(ContainerId::parse("availableTasks"), Ok(ContainerId::Pool));
    }

    #[test]
    fn parse_accepts_hours_in_day_range() {
        assert_eq!(
            ContainerId::parse("hour-0"),
            Ok(ContainerId::Hour(Hour::MIDNIGHT))
        );
        assert_eq!(
            ContainerId::parse("hour-09"),
            Ok(ContainerId::Hour(Hour::new(9).unwrap()))
        );
        assert_eq!(
            ContainerId::parse("hour-23"),
            Ok(ContainerId::Hour(Hour::new(23).unwrap()))
        );
    }

    #[test]
    fn parse_rejects_malformed_tags() {
        for tag in [
            "hour-24",
            "hour--1",
            "hour-+5",
            "hour-",
            "hour-1a",
            " hour-1",
            "Pool",
            "",
            "hour-99999999999",
        ] {
            assert_eq!(
                ContainerId::parse(tag),
                Err(RejectedTransition::MalformedContainer(tag.to_string())),
                "tag `{tag}` should be rejected"
            );
        }
    }

    #[test]
    fn tag_round_trips_canonical_form() {
        let hour = ContainerId::Hour(Hour::new(14).unwrap());
        assert_eq!(hour.tag(), "hour-14");
        assert_eq!(ContainerId::parse(&hour.tag()), Ok(hour));
        assert_eq!(ContainerId::Pool.to_string(), "pool");
    }
}
