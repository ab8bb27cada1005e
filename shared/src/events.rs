//! Input queued by the host and drained by the sandbox once per frame, before the step.

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer press at a pixel position (origin top-left).
    Click { x: f32, y: f32 },
    /// The output surface changed size (pixels).
    Resize { width: f32, height: f32 },
}

/// FIFO of pending input.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Take every pending event in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_arrival_order_and_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::Click { x: 1.0, y: 2.0 });
        queue.push(InputEvent::Resize {
            width: 640.0,
            height: 480.0,
        });
        queue.push(InputEvent::Click { x: 3.0, y: 4.0 });
        assert_eq!(queue.len(), 3);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            [
                InputEvent::Click { x: 1.0, y: 2.0 },
                InputEvent::Resize {
                    width: 640.0,
                    height: 480.0
                },
                InputEvent::Click { x: 3.0, y: 4.0 },
            ]
        );
        assert!(queue.is_empty());
    }
}
