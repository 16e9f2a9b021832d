use crate::common::*;

#[doc = "Decides how long the poll loop idles before the next poll."]
#[async_trait]
pub trait PollSchedule {
    fn next_delay(&self, last_poll_ok: bool) -> Duration;

    async fn wait(&self, last_poll_ok: bool) {
        sleep(self.next_delay(last_poll_ok)).await;
    }
}
