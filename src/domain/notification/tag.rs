//! Unique notification tags

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Generates tags from the creation time in microseconds.
///
/// Values are strictly increasing within one generator, so two
/// notifications created in the same microsecond still get distinct tags.
#[derive(Debug, Default)]
pub struct TagGenerator {
    last: AtomicU64,
}

impl TagGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next tag
    pub fn next_tag(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0);

        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return format!("nudge-{}", candidate),
                Err(actual) => previous = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tags_are_unique() {
        let generator = TagGenerator::new();
        let tags: HashSet<String> = (0..1000).map(|_| generator.next_tag()).collect();
        assert_eq!(tags.len(), 1000);
    }

    #[test]
    fn tags_have_prefix() {
        let tag = TagGenerator::new().next_tag();
        assert!(tag.starts_with("nudge-"));
        assert!(tag["nudge-".len()..].parse::<u64>().is_ok());
    }

    #[test]
    fn tags_increase() {
        let generator = TagGenerator::new();
        let first: u64 = generator.next_tag()["nudge-".len()..].parse().unwrap();
        let second: u64 = generator.next_tag()["nudge-".len()..].parse().unwrap();
        assert!(second > first);
    }
}
