//! Cyclic rotation over the fixed port set.

use std::collections::VecDeque;

/// Rotates the fixed 5-port sequence left by one per call.
#[derive(Debug, Clone)]
pub struct PortRotator {
    ports: VecDeque<u16>,
}

impl PortRotator {
    pub fn new(ports: [u16; 5]) -> Self {
        Self {
            ports: ports.into_iter().collect(),
        }
    }

    /// Rotate left (front element moves to back) and return the new front.
    pub fn rotate(&mut self) -> u16 {
        if let Some(front) = self.ports.pop_front() {
            self.ports.push_back(front);
        }
        self.ports.front().copied().unwrap_or_default()
    }

    /// Current order, front first.
    pub fn snapshot(&self) -> Vec<u16> {
        self.ports.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PORTS;

    #[test]
    fn rotation_visits_each_port_once_per_period() {
        let mut rotator = PortRotator::new(DEFAULT_PORTS);
        let seen: Vec<u16> = (0..5).map(|_| rotator.rotate()).collect();
        assert_eq!(seen, vec![8080, 2222, 443, 5000, 31337]);
    }

    #[test]
    fn order_restores_after_full_period() {
        let mut rotator = PortRotator::new(DEFAULT_PORTS);
        for _ in 0..5 {
            rotator.rotate();
        }
        assert_eq!(rotator.snapshot(), DEFAULT_PORTS.to_vec());
    }

    #[test]
    fn rotation_wraps_with_period_five() {
        let mut rotator = PortRotator::new(DEFAULT_PORTS);
        let first_period: Vec<u16> = (0..5).map(|_| rotator.rotate()).collect();
        let second_period: Vec<u16> = (0..5).map(|_| rotator.rotate()).collect();
        assert_eq!(first_period, second_period);
    }
}
