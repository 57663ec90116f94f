//! The in-memory quote store.
//!
//! Populated once at startup and never written again, so handlers share it
//! through an `Arc` without locks. Every query borrows; nothing reorders the
//! underlying sequence.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::{IndexedRandom, index};

use crate::quote::{AuthorCount, Quote};

/// An immutable, ordered collection of quotes.
#[derive(Debug, Default)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Takes ownership of `quotes`, keeping their order.
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// All quotes in dataset order.
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// One quote drawn uniformly at random, or `None` when empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Quote> {
        self.quotes.choose(rng)
    }

    /// `count` distinct quotes drawn uniformly without replacement.
    ///
    /// When `count` covers the whole store, every quote is returned in
    /// dataset order instead. The order of a proper sample is unspecified.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Quote> {
        if count >= self.quotes.len() {
            return self.quotes.iter().collect();
        }
        index::sample(rng, self.quotes.len(), count)
            .into_iter()
            .map(|i| &self.quotes[i])
            .collect()
    }

    /// Quotes whose author equals `author` ignoring case, in dataset order.
    pub fn by_author(&self, author: &str) -> Vec<&Quote> {
        let wanted = author.to_lowercase();
        self.quotes
            .iter()
            .filter(|q| q.author.to_lowercase() == wanted)
            .collect()
    }

    /// Quote count per exact author string, in order of first appearance.
    pub fn author_counts(&self) -> Vec<AuthorCount> {
        let mut counts: Vec<AuthorCount> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for quote in &self.quotes {
            match slots.get(quote.author.as_str()) {
                Some(&slot) => counts[slot].quote_count += 1,
                None => {
                    slots.insert(&quote.author, counts.len());
                    counts.push(AuthorCount { author: quote.author.clone(), quote_count: 1 });
                }
            }
        }
        counts
    }
}
