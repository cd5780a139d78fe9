//! Repeated-trigger counter that arms the bulk chapter completion

/// Number of triggers that fire the gesture.
pub const BULK_GESTURE_THRESHOLD: u8 = 5;

/// Counts consecutive triggers; the threshold-th trigger fires and resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TapCounter {
    count: u8,
}

impl TapCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Register one trigger. Returns `true` when the gesture fires.
    pub fn trigger(&mut self) -> bool {
        self.count += 1;
        if self.count >= BULK_GESTURE_THRESHOLD {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Triggers registered since the last firing (0..threshold).
    #[must_use]
    pub const fn count(self) -> u8 {
        self.count
    }

    /// Triggers still needed before the gesture fires.
    #[must_use]
    pub const fn remaining(self) -> u8 {
        BULK_GESTURE_THRESHOLD - self.count
    }
}
