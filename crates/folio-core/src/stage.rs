//! Registry of mounted cards driven by one per-frame tick.

use crate::card::{CardConfig, CardFrame, CardMotion};
use fnv::FnvHashMap;

/// Handle to a card mounted on a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u32);

impl CardId {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Owns the motion state of every mounted card.
///
/// Unmounting removes a card from the tick immediately; no later frame
/// touches it.
#[derive(Debug, Default)]
pub struct Stage {
    cards: FnvHashMap<CardId, CardMotion>,
    next_id: u32,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, config: CardConfig) -> CardId {
        let id = CardId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.cards.insert(id, CardMotion::new(config));
        log::debug!("[stage] mounted card {} ({} live)", id.0, self.cards.len());
        id
    }

    /// Returns false when `id` was not mounted.
    pub fn unmount(&mut self, id: CardId) -> bool {
        let removed = self.cards.remove(&id).is_some();
        if removed {
            log::debug!("[stage] unmounted card {} ({} live)", id.0, self.cards.len());
        }
        removed
    }

    #[inline]
    pub fn is_mounted(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: CardId) -> Option<&CardMotion> {
        self.cards.get(&id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut CardMotion> {
        self.cards.get_mut(&id)
    }

    /// Advances every mounted card and hands each animating card's frame to
    /// `render`. Cards that are fully at rest are skipped.
    pub fn tick(&mut self, dt_sec: f32, mut render: impl FnMut(CardId, &CardFrame)) {
        for (id, card) in self.cards.iter_mut() {
            if !card.is_animating() {
                continue;
            }
            let frame = card.tick(dt_sec);
            render(*id, &frame);
        }
    }
}
