use crate::common::*;

use crate::traits::schedule_trait::*;

#[doc = "Constant wait between polls, regardless of how the last one went."]
#[derive(Debug, Clone, new)]
pub struct FixedIntervalSchedule {
    interval: Duration,
}

#[async_trait]
impl PollSchedule for FixedIntervalSchedule {
    fn next_delay(&self, _last_poll_ok: bool) -> Duration {
        self.interval
    }
}
