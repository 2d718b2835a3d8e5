// SPDX-License-Identifier: MPL-2.0
//! Auto-play cursor over a tab's sequence table.
//!
//! The cursor is a plain position value; the timer that drives it lives in
//! the application's subscription, keyed by tab, so a tab switch or a toggle
//! tears the old timer down before a stale tick can be delivered.

use super::NodeId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playback {
    position: usize,
}

impl Playback {
    /// Resets the cursor to the start of the cycle and returns the node the
    /// highlight should jump to. `None` for an empty sequence: nothing to
    /// cycle.
    pub fn restart(&mut self, sequence: &[NodeId]) -> Option<NodeId> {
        self.position = 0;
        sequence.first().copied()
    }

    /// Advances one position, wrapping after the last element. An empty
    /// sequence stays parked at zero and selects nothing.
    pub fn advance(&mut self, sequence: &[NodeId]) -> Option<NodeId> {
        if sequence.is_empty() {
            self.position = 0;
            return None;
        }
        self.position = (self.position + 1) % sequence.len();
        sequence.get(self.position).copied()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Tab;

    #[test]
    fn restart_selects_first_sequence_element() {
        let mut playback = Playback::default();
        let first = playback.restart(Tab::Ipo.sequence());
        assert_eq!(first, Some(NodeId::Input));
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn advance_walks_the_sequence_in_order_and_wraps() {
        let mut playback = Playback::default();
        let seq = Tab::Hardware.sequence();
        playback.restart(seq);

        let mut visited = vec![seq[0]];
        for _ in 0..seq.len() {
            visited.push(playback.advance(seq).unwrap());
        }

        assert_eq!(&visited[..seq.len()], seq);
        // Wrapped back to the start after a full cycle.
        assert_eq!(visited[seq.len()], seq[0]);
    }

    #[test]
    fn advance_keeps_wrapping_indefinitely() {
        let mut playback = Playback::default();
        let seq = Tab::Software.sequence();
        playback.restart(seq);

        for step in 1..=20 {
            let node = playback.advance(seq).unwrap();
            assert_eq!(node, seq[step % seq.len()]);
        }
    }

    #[test]
    fn empty_sequence_selects_nothing_and_stays_parked() {
        let mut playback = Playback::default();
        assert_eq!(playback.restart(&[]), None);
        assert_eq!(playback.advance(&[]), None);
        assert_eq!(playback.advance(&[]), None);
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn restart_after_progress_rewinds_to_start() {
        let mut playback = Playback::default();
        let seq = Tab::Elements.sequence();
        playback.restart(seq);
        playback.advance(seq);
        playback.advance(seq);
        assert_ne!(playback.position(), 0);

        let first = playback.restart(Tab::Hardware.sequence());
        assert_eq!(first, Some(NodeId::InputDevices));
        assert_eq!(playback.position(), 0);
    }
}
