use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

/// Wall clock backed by `Utc::now`, truncated to whole seconds so stored
/// timestamps compare equal after a round trip through SQLite text columns.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn now_has_no_subsecond_part() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }
}
