//! Change notifications for code that reads from [`App`](super::App)

use std::sync::mpsc::{self, Receiver, Sender};

/// Something observers of the changed-file tree may need to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The base reference was switched to a new name
    BaseChanged(String),
    /// A new tree was installed
    Refreshed {
        /// Ref the working tree was compared against (merge base or base)
        reference: String,
        /// Number of changed files in the new tree
        files: usize,
    },
    /// A refresh failed; the previous tree is still installed
    RefreshFailed(String),
}

/// Fan-out of [`AppEvent`]s to every live subscriber
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<AppEvent>>,
}

impl Subscribers {
    pub fn subscribe(&mut self) -> Receiver<AppEvent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Deliver `event` to every subscriber, forgetting those that hung up
    pub fn notify(&mut self, event: AppEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.senders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_reaches_every_subscriber() {
        let mut subscribers = Subscribers::default();
        let first = subscribers.subscribe();
        let second = subscribers.subscribe();

        subscribers.notify(AppEvent::BaseChanged("develop".into()));

        assert_eq!(
            first.try_recv().unwrap(),
            AppEvent::BaseChanged("develop".into())
        );
        assert_eq!(
            second.try_recv().unwrap(),
            AppEvent::BaseChanged("develop".into())
        );
    }

    #[test]
    fn test_notify_drops_closed_subscribers() {
        let mut subscribers = Subscribers::default();
        let kept = subscribers.subscribe();
        drop(subscribers.subscribe());

        subscribers.notify(AppEvent::RefreshFailed("boom".into()));

        assert_eq!(subscribers.len(), 1);
        assert!(kept.try_recv().is_ok());
    }
}
