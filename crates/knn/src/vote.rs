//! Majority vote over neighbor labels.

use crate::point::Label;

/// Vote counts keyed by label, in order of first appearance.
///
/// Keys are unique. Iteration follows first-appearance order, which the
/// winner scan depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct VoteTally {
    counts: Vec<(Label, usize)>,
}

impl VoteTally {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: Vec::with_capacity(capacity),
        }
    }

    /// Adds one vote for `label`.
    pub(crate) fn record(&mut self, label: Label) {
        match self.counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label, 1)),
        }
    }

    /// Returns the label with the most votes.
    ///
    /// Scans in first-appearance order and only replaces the leader on a
    /// strictly greater count, so among tied labels the one first seen wins.
    /// `None` when no votes were recorded.
    pub(crate) fn winner(&self) -> Option<Label> {
        let mut best: Option<(Label, usize)> = None;
        for &(label, count) in &self.counts {
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    #[cfg(test)]
    pub(crate) fn count(&self, label: Label) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| *l == label)
            .map_or(0, |&(_, c)| c)
    }
}

impl FromIterator<Label> for VoteTally {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tally = Self::with_capacity(iter.size_hint().0);
        for label in iter {
            tally.record(label);
        }
        tally
    }
}
