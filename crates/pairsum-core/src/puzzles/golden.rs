/// Term `index` of the sequence `1, 1, 2, 3, 5, 8, 13, ...`, or `None` once it overflows `u64`.
pub fn golden_ratio(index: usize) -> Option<u64> {
    GoldenSequence::new().nth(index)
}

/// Iterator over the terms of [`golden_ratio`], ending at the first term that overflows.
#[derive(Debug, Clone)]
pub struct GoldenSequence {
    current: Option<u64>,
    previous: u64,
}

impl GoldenSequence {
    pub fn new() -> Self {
        Self {
            current: Some(1),
            previous: 0,
        }
    }
}

impl Default for GoldenSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for GoldenSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current?;
        self.current = value.checked_add(self.previous);
        self.previous = value;
        Some(value)
    }
}

impl std::iter::FusedIterator for GoldenSequence {}
