//! Author reconciliation.
//!
//! The wire format sends each author once, in `includes.users`, and refers
//! to it by id from the primary payload. After decoding, entities that
//! implement [`HasAuthor`] get the referenced user attached.

use crate::model::{HasAuthor, Includes, Like, StreamInfo, Tweet, User};

/// Post-decode enrichment from `includes`.
///
/// Both methods default to no-ops; only entities with an author override them.
pub trait Reconcile {
    /// Enrich a single-entity answer.
    fn reconcile_one(&mut self, _includes: &Includes) {}

    /// Enrich an array answer.
    fn reconcile_many(_items: &mut [Self], _includes: &Includes)
    where
        Self: Sized,
    {
    }
}

/// Attach the first included user, whatever its id.
///
/// A single-entity lookup expands exactly one author, so the id is not
/// compared. An entity whose `author_id` differs still gets that user.
pub fn attach_first<T: HasAuthor>(item: &mut T, includes: &Includes) {
    item.set_author(includes.users.first().cloned());
}

/// Attach to each item the first included user whose id equals its `author_id`.
///
/// Items with no match, or no `author_id`, get `None`.
pub fn attach_matching<T: HasAuthor>(items: &mut [T], includes: &Includes) {
    for item in items {
        let author = item
            .author_id()
            .and_then(|id| includes.users.iter().find(|user| user.id == id))
            .cloned();
        item.set_author(author);
    }
}

impl Reconcile for Tweet {
    fn reconcile_one(&mut self, includes: &Includes) {
        attach_first(self, includes);
    }

    fn reconcile_many(items: &mut [Self], includes: &Includes) {
        attach_matching(items, includes);
    }
}

impl Reconcile for User {}
impl Reconcile for StreamInfo {}
impl Reconcile for Like {}
