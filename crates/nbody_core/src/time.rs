use serde::{Deserialize, Serialize};

/// A time instant of the evolution: a unique step id paired with the
/// physical time value it corresponds to. One instance is emitted per
/// step; it never changes after construction and carries no reference
/// back into the simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Time {
    id: u64,
    value: f64,
}

impl Time {
    pub fn new(id: u64, value: f64) -> Self {
        Self { id, value }
    }

    /// The step id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The physical time value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let time = Time::new(42, 0.042);
        assert_eq!(time.id(), 42);
        assert_eq!(time.value(), 0.042);
    }
}
