//! Update notifications.
//!
//! After every applied computation the [`Parallax`](crate::Parallax) sends an
//! [`UpdateEvent`] to each subscriber over an unbounded channel, the same way
//! widgets post messages to the app loop.

use crate::document::{ElementId, ScrollEvent};

/// Emitted after a computed value has been written to the target element.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEvent {
    /// The scroll event that triggered the computation.
    pub event: ScrollEvent,
    pub target: ElementId,
    pub property: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ScrollSource;
    use tokio::sync::mpsc;

    #[test]
    fn test_update_crosses_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let update = UpdateEvent {
            event: ScrollEvent::native(ScrollSource::Viewport),
            target: ElementId::new(3),
            property: "opacity".to_string(),
            value: "0.5".to_string(),
        };
        tx.send(update.clone()).unwrap();

        assert_eq!(rx.try_recv().unwrap(), update);
        assert!(rx.try_recv().is_err());
    }
}
