//! Board ordering and separator placement.

use crate::domain::{Entry, Train};

/// Order trains by group and, optionally, separate the groups.
///
/// The sort is stable, so trains within a group keep their API order.
/// Exactly one separator sits between adjacent trains whose groups differ;
/// none precedes the first or follows the last train.
pub fn group(mut trains: Vec<Train>, insert_separators: bool) -> Vec<Entry> {
    trains.sort_by(|a, b| a.group.cmp(&b.group));

    let mut entries: Vec<Entry> = Vec::with_capacity(trains.len() * 2);
    for train in trains {
        if insert_separators
            && entries
                .last()
                .is_some_and(|last| last.group() != train.group)
        {
            entries.push(Entry::Separator);
        }
        entries.push(Entry::Prediction(train));
    }

    entries
}

/// Strip separators, keeping the trains in order.
pub fn trains(entries: impl IntoIterator<Item = Entry>) -> Vec<Train> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Prediction(train) => Some(train),
            Entry::Separator => None,
        })
        .collect()
}

/// Number of separators on a board.
pub fn separator_count(entries: &[Entry]) -> usize {
    entries.iter().filter(|e| e.is_separator()).count()
}
