//! Game Event Operations - Pure DOP Functions

use super::event_data::{EventQueue, SandboxEvent};

/// Queue an event, evicting the oldest when the queue is full
pub fn push_event(queue: &mut EventQueue, event: SandboxEvent) {
    if queue.capacity == 0 {
        queue.dropped += 1;
        return;
    }

    if queue.pending.len() >= queue.capacity {
        if let Some(oldest) = queue.pending.pop_front() {
            queue.dropped += 1;
            log::warn!("[Events] Queue full, dropping oldest event: {:?}", oldest);
        }
    }
    queue.pending.push_back(event);
}

/// Take every pending event in the order it was pushed
pub fn drain_events(queue: &mut EventQueue) -> Vec<SandboxEvent> {
    queue.pending.drain(..).collect()
}

pub fn pending_count(queue: &EventQueue) -> usize {
    queue.pending.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::BlockKind;

    #[test]
    fn test_drain_preserves_order() {
        let mut queue = EventQueue::default();
        push_event(&mut queue, SandboxEvent::PointerLocked);
        push_event(&mut queue, SandboxEvent::ActiveBlockChanged(BlockKind::Sand));

        assert_eq!(
            drain_events(&mut queue),
            vec![
                SandboxEvent::PointerLocked,
                SandboxEvent::ActiveBlockChanged(BlockKind::Sand)
            ]
        );
        assert_eq!(pending_count(&queue), 0);
    }

    #[test]
    fn test_full_queue_drops_oldest() {
        let mut queue = EventQueue {
            capacity: 2,
            ..Default::default()
        };
        push_event(&mut queue, SandboxEvent::PointerLocked);
        push_event(&mut queue, SandboxEvent::PointerUnlocked);
        push_event(&mut queue, SandboxEvent::ActiveBlockChanged(BlockKind::Wood));

        assert_eq!(queue.dropped, 1);
        assert_eq!(
            drain_events(&mut queue),
            vec![
                SandboxEvent::PointerUnlocked,
                SandboxEvent::ActiveBlockChanged(BlockKind::Wood)
            ]
        );
    }
}
