//! Process-wide publish/subscribe notification channel.
//!
//! Topic-keyed fan-out over tokio broadcast channels. Publishing is
//! fire-and-forget: a topic with no subscribers drops the message, and the
//! publisher never blocks or retries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::broadcast;

/// Topic the report sink publishes diagnostic messages on.
pub const TOPIC_WARN: &str = "warn";

/// Buffered messages per topic before slow subscribers start lagging.
const CHANNEL_CAPACITY: usize = 64;

/// Cloneable handle to a process-wide topic/subscriber table.
#[derive(Debug, Clone, Default)]
pub struct NotificationHub {
    topics: Arc<Mutex<HashMap<String, broadcast::Sender<String>>>>,
}

impl NotificationHub {
    /// Creates a hub with no topics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a message on a topic. Fire-and-forget: having no
    /// subscribers is not an error.
    pub fn publish(&self, topic: &str, message: impl Into<String>) {
        let _ = self.sender(topic).send(message.into());
    }

    /// Subscribes to a topic, receiving every message published after this
    /// call.
    pub fn subscribe(&self, topic: &str) -> broadcast::Receiver<String> {
        self.sender(topic).subscribe()
    }

    fn sender(&self, topic: &str) -> broadcast::Sender<String> {
        let mut topics = self
            .topics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        topics
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_subscriber_receives_published_message() {
        let hub = NotificationHub::new();
        let mut rx = hub.subscribe(TOPIC_WARN);
        hub.publish(TOPIC_WARN, "something is off");
        assert_eq!(rx.recv().await.unwrap(), "something is off");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_fine() {
        let hub = NotificationHub::new();
        hub.publish(TOPIC_WARN, "nobody is listening");
    }

    #[tokio::test]
    async fn test_topics_are_isolated() {
        let hub = NotificationHub::new();
        let mut warn_rx = hub.subscribe(TOPIC_WARN);
        hub.publish("error", "different topic");
        hub.publish(TOPIC_WARN, "for warn");
        assert_eq!(warn_rx.recv().await.unwrap(), "for warn");
    }

    #[tokio::test]
    async fn test_clones_share_topics() {
        let hub = NotificationHub::new();
        let publisher = hub.clone();
        let mut rx = hub.subscribe(TOPIC_WARN);
        publisher.publish(TOPIC_WARN, "shared");
        assert_eq!(rx.recv().await.unwrap(), "shared");
    }
}
