use std::collections::BTreeMap;

/// First heading level that takes part in numbering. Level 1 is the article
/// title and is always labelled `0.`.
pub const FIRST_NUMBERED_LEVEL: u8 = 2;

/// Running heading counters for a single article.
///
/// A fresh context must be used for every (section, article) pair so that
/// numbering never carries over between articles.
#[derive(Debug, Default, Clone)]
pub struct SerialNumbers {
    counters: BTreeMap<u8, u32>,
    last_level: Option<u8>,
}

impl SerialNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a heading at `level` and returns its dotted serial number.
    pub fn next(&mut self, level: u8) -> String {
        self.counters.entry(level).or_insert(0);

        // Climbing back up restarts the branch we just left.
        if let Some(last) = self.last_level {
            if level < last {
                self.counters.insert(last, 0);
            }
        }

        if let Some(counter) = self.counters.get_mut(&level) {
            *counter += 1;
        }

        let mut serial = String::new();
        for current in FIRST_NUMBERED_LEVEL..=level {
            // Skipped levels (e.g. #### straight after ##) still need a segment.
            let counter = *self.counters.entry(current).or_insert(1);
            serial.push_str(&counter.to_string());
            serial.push('.');
        }

        self.last_level = Some(level);
        serial
    }
}
