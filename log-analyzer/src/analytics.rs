use std::{
    cmp::Reverse,
    collections::HashMap,
    fmt,
    hash::Hash,
    marker::PhantomData,
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
};

use crate::models::{LogEntry, Report};

/// Occurrence counter that remembers the order keys were first seen in.
///
/// Ranking is a stable sort over that order, so equal counts keep their
/// first-seen order.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    slots: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    fn add(&mut self, key: K, n: usize) {
        *self.slot_mut(key) += n;
    }

    fn set(&mut self, key: K, n: usize) {
        *self.slot_mut(key) = n;
    }

    fn slot_mut(&mut self, key: K) -> &mut usize {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                self.index.insert(key.clone(), self.slots.len());
                self.slots.push((key, 0));
                self.slots.len() - 1
            }
        };
        &mut self.slots[slot].1
    }

    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&slot| self.slots[slot].1)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.slots.iter().map(|(k, n)| (k, *n))
    }

    pub fn top(&self, n: usize) -> Vec<(&K, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by_key(|(_, count)| Reverse(*count));
        ranked.truncate(n);
        ranked
    }
}

// Counts only; first-seen order is not part of equality.
impl<K: Eq + Hash + Clone> PartialEq for Tally<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, n)| other.get(k) == n)
    }
}

impl<K: Eq + Hash + Clone> Eq for Tally<K> {}

impl<K: Serialize> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.slots.iter().map(|(k, n)| (k, n)))
    }
}

struct TallyVisitor<K>(PhantomData<K>);

impl<'de, K> Visitor<'de> for TallyVisitor<K>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
{
    type Value = Tally<K>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of keys to occurrence counts")
    }

    // A repeated key keeps its first position and its last count.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut tally = Tally::default();
        while let Some((key, count)) = access.next_entry::<K, usize>()? {
            tally.set(key, count);
        }
        Ok(tally)
    }
}

impl<'de, K> Deserialize<'de> for Tally<K>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TallyVisitor(PhantomData))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Methods,
    Ips,
}

/// Accumulates the report for a single input file.
#[derive(Debug, Default)]
pub struct Aggregator {
    report: Report,
}

impl Aggregator {
    pub fn accept(&mut self, entry: LogEntry) {
        let report = &mut self.report;
        report.total_requests += 1;
        report.http_methods.increment(entry.method.clone());
        report.top_ips.increment(entry.ip.clone());
        report.entries.push(entry);
    }

    pub fn total_requests(&self) -> usize {
        self.report.total_requests
    }

    pub fn top_n(&self, counter: Counter, n: usize) -> Vec<(&str, usize)> {
        self.report.top_n(counter, n)
    }

    pub fn first_entries(&self, n: usize) -> &[LogEntry] {
        self.report.first_entries(n)
    }

    pub fn snapshot(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }
}
