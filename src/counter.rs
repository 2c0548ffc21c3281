use std::fmt;

pub const DEFAULT_COUNTER_MAX: u32 = 9;

/// Run-length counter over a stream of values, saturating at `max`.
#[derive(Debug, Clone)]
pub struct ConsecutiveEventCounter<V> {
    last: Option<V>,
    count: u32,
    max: u32,
}

impl<V: PartialEq> ConsecutiveEventCounter<V> {
    pub fn new(max: u32) -> Self {
        Self {
            last: None,
            count: 0,
            max: max.max(1),
        }
    }

    /// Records `value` and answers whether the count badge should show.
    pub fn apply(&mut self, value: V) -> bool {
        if self.last.as_ref() == Some(&value) {
            if self.count < self.max {
                self.count += 1;
            }
        } else {
            self.last = Some(value);
            self.count = 1;
        }

        self.is_visible()
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_visible(&self) -> bool {
        self.count > 1
    }
}

impl<V: PartialEq> Default for ConsecutiveEventCounter<V> {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_MAX)
    }
}

impl<V> fmt::Display for ConsecutiveEventCounter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}
