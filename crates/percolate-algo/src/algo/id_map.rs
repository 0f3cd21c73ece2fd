// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between sparse vertex ids and dense algorithm slots.
//!
//! Sampling keeps per-vertex state (distances, path counts, estimates) in flat
//! arrays indexed by slot `0..V`. Callers speak in [`Vid`]s; this module maps
//! between the two.

use fxhash::FxHashMap;
use percolate_common::core::id::Vid;

/// Immutable mapping between sparse VIDs and dense algorithm slots.
///
/// Slots follow ascending VID order, so a projection built from the same
/// vertex set always numbers its vertices the same way.
///
/// # Example
///
/// ```
/// use percolate_algo::algo::IdMap;
/// use percolate_common::Vid;
///
/// let id_map: IdMap = [Vid::from(200), Vid::from(100), Vid::from(200)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(id_map.len(), 2);
/// assert_eq!(id_map.to_slot(Vid::from(100)), Some(0));
/// assert_eq!(id_map.to_vid(1), Some(Vid::from(200)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    /// Dense slot -> Sparse VID (ascending)
    slot_to_vid: Vec<Vid>,
    /// Sparse VID -> Dense slot
    vid_to_slot: FxHashMap<Vid, u32>,
}

impl IdMap {
    /// Build from VIDs that are already sorted and unique.
    pub(crate) fn from_sorted(vids: Vec<Vid>) -> Self {
        debug_assert!(vids.windows(2).all(|w| w[0] < w[1]));
        let vid_to_slot = vids
            .iter()
            .enumerate()
            .map(|(slot, &vid)| (vid, slot as u32))
            .collect();
        Self {
            slot_to_vid: vids,
            vid_to_slot,
        }
    }

    #[inline]
    pub fn to_slot(&self, vid: Vid) -> Option<u32> {
        self.vid_to_slot.get(&vid).copied()
    }

    #[inline]
    pub fn to_vid(&self, slot: u32) -> Option<Vid> {
        self.slot_to_vid.get(slot as usize).copied()
    }

    /// Panics if `slot` is out of bounds.
    #[inline]
    pub fn to_vid_unchecked(&self, slot: u32) -> Vid {
        self.slot_to_vid[slot as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_vid.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_vid.is_empty()
    }

    /// Memory usage in bytes.
    pub fn memory_size(&self) -> usize {
        let entry = std::mem::size_of::<Vid>() + std::mem::size_of::<u32>();
        self.slot_to_vid.len() * std::mem::size_of::<Vid>() + self.vid_to_slot.len() * entry
    }
}

impl FromIterator<Vid> for IdMap {
    fn from_iter<I: IntoIterator<Item = Vid>>(iter: I) -> Self {
        let mut vids: Vec<Vid> = iter.into_iter().collect();
        vids.sort_unstable();
        vids.dedup();
        Self::from_sorted(vids)
    }
}
