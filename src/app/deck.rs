// SPDX-License-Identifier: MPL-2.0
//! The host's queue of images and the verdicts recorded for them.

use crate::domain::swipe::{ImageSource, SwipeDirection};

/// A recorded swipe on one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub source: ImageSource,
    pub direction: SwipeDirection,
}

/// Liked/disliked counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub liked: usize,
    pub disliked: usize,
}

/// Ordered images, consumed one swipe at a time.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    images: Vec<ImageSource>,
    position: usize,
    verdicts: Vec<Verdict>,
}

impl Deck {
    #[must_use]
    pub fn new(images: Vec<ImageSource>) -> Self {
        Self {
            images,
            position: 0,
            verdicts: Vec::new(),
        }
    }

    /// Image to show. Once the deck is exhausted this stays on the last image.
    #[must_use]
    pub fn current(&self) -> Option<&ImageSource> {
        self.images
            .get(self.position)
            .or_else(|| self.images.last())
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.images.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.images.len().saturating_sub(self.position)
    }

    /// Records `direction` for the current image and advances.
    ///
    /// Returns `None` when there is nothing left to judge.
    pub fn record(&mut self, direction: SwipeDirection) -> Option<&Verdict> {
        let source = self.images.get(self.position)?.clone();
        self.position += 1;
        self.verdicts.push(Verdict { source, direction });
        self.verdicts.last()
    }

    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.verdicts
            .iter()
            .fold(Tally::default(), |mut tally, verdict| {
                match verdict.direction {
                    SwipeDirection::Right => tally.liked += 1,
                    SwipeDirection::Left => tally.disliked += 1,
                }
                tally
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        Deck::new(vec![
            ImageSource::new("cats/a.png"),
            ImageSource::new("cats/b.png"),
        ])
    }

    #[test]
    fn empty_deck_has_no_current_image() {
        let mut deck = Deck::default();
        assert!(deck.current().is_none());
        assert!(deck.is_exhausted());
        assert!(deck.record(SwipeDirection::Right).is_none());
        assert_eq!(deck.tally(), Tally::default());
    }

    #[test]
    fn record_advances_and_stores_verdict() {
        let mut deck = deck();
        let verdict = deck.record(SwipeDirection::Right).cloned();

        assert_eq!(
            verdict,
            Some(Verdict {
                source: ImageSource::new("cats/a.png"),
                direction: SwipeDirection::Right,
            })
        );
        assert_eq!(deck.current(), Some(&ImageSource::new("cats/b.png")));
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn exhausted_deck_keeps_last_image() {
        let mut deck = deck();
        deck.record(SwipeDirection::Right);
        deck.record(SwipeDirection::Left);

        assert!(deck.is_exhausted());
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.current(), Some(&ImageSource::new("cats/b.png")));
        assert!(deck.record(SwipeDirection::Left).is_none());
        assert_eq!(deck.verdicts().len(), 2);
    }

    #[test]
    fn tally_counts_directions() {
        let mut deck = Deck::new(vec![
            ImageSource::new("1.png"),
            ImageSource::new("2.png"),
            ImageSource::new("3.png"),
        ]);
        deck.record(SwipeDirection::Right);
        deck.record(SwipeDirection::Left);
        deck.record(SwipeDirection::Right);

        assert_eq!(
            deck.tally(),
            Tally {
                liked: 2,
                disliked: 1
            }
        );
    }
}
