// src/data.rs
//
// Filtered view over the harvested offers for the table.
// The offers themselves are never copied or mutated; the view only keeps
// row indices, rebuilt whenever the filter text changes.

use crate::offer::JobOffer;

#[derive(Clone, Debug)]
pub struct OfferView<'a> {
    /// Positions of kept rows in `offers`
    pub row_ix: Vec<usize>,
    offers: &'a [JobOffer],
}

impl<'a> OfferView<'a> {
    /// Keep offers where any column contains `query`, ignoring case.
    /// A blank query keeps everything.
    pub fn filter(offers: &'a [JobOffer], query: &str) -> Self {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Self { row_ix: (0..offers.len()).collect(), offers };
        }

        let row_ix = offers
            .iter()
            .enumerate()
            .filter(|(_, o)| o.matches(&needle))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, offers }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&'a JobOffer> {
        let offers = self.offers;
        self.row_ix.get(i).and_then(|&ix| offers.get(ix))
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a JobOffer> + '_ {
        let offers = self.offers;
        self.row_ix.iter().filter_map(move |&ix| offers.get(ix))
    }

    /// Materialize owned rows (clipboard/export boundaries).
    pub fn to_owned_rows(&self) -> Vec<JobOffer> {
        self.rows().cloned().collect()
    }
}
