//! Playlist engine: an ordered, doubly-linked sequence of songs
//!
//! Nodes live in an arena (`Vec` of slots plus a free list). Links are
//! [`Handle`]s into that arena rather than references, so the structure has
//! no ownership cycles and still supports O(1) append and O(1) unlink.

use super::{Song, SongField, SongId, SortStrategy};
use crate::error::PlaylistError;
use std::iter::FusedIterator;

/// Stable reference to a song inside one playlist
///
/// Valid until that song is removed. The slot may then be reused by a later
/// insert, so a stale handle must not be kept around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

#[derive(Debug, Clone, Default)]
struct Slot {
    /// `None` while the slot sits on the free list
    song: Option<Song>,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// First and last handle of a chain of slots
#[derive(Debug, Clone, Copy, Default)]
struct Chain {
    head: Option<Handle>,
    tail: Option<Handle>,
}

/// Named, ordered collection of songs
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    slots: Vec<Slot>,
    free: Vec<usize>,
    ends: Chain,
    size: usize,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            free: Vec::new(),
            ends: Chain::default(),
            size: 0,
        }
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Handle of the first song
    pub fn head(&self) -> Option<Handle> {
        self.ends.head
    }

    /// Handle of the last song
    pub fn tail(&self) -> Option<Handle> {
        self.ends.tail
    }

    /// Song behind a handle, `None` if it has been removed
    pub fn get(&self, handle: Handle) -> Option<&Song> {
        self.slots.get(handle.0).and_then(|slot| slot.song.as_ref())
    }

    /// Songs from head to tail; `.rev()` walks the `prev` links instead
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.entries(),
        }
    }

    /// Songs paired with their handles, head to tail
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            slots: &self.slots,
            front: self.ends.head,
            back: self.ends.tail,
            remaining: self.size,
        }
    }

    /// Append a song at the tail
    ///
    /// The caller is responsible for `song_id` being unique within this
    /// playlist. Use [`try_add_song`](Self::try_add_song) to have it checked.
    pub fn add_song(
        &mut self,
        song_id: SongId,
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Handle {
        self.push_back(Song::new(song_id, name, artist, genre))
    }

    /// Append an already built record at the tail
    pub fn push_back(&mut self, song: Song) -> Handle {
        log::debug!(
            "Playlist {:?}: appending song {} ({:?})",
            self.name,
            song.song_id,
            song.name
        );

        let handle = self.allocate(song);
        append(&mut self.slots, &mut self.ends, handle);
        self.size += 1;
        handle
    }

    /// Append at the tail unless a song with the same id is already present
    pub fn try_add_song(&mut self, song: Song) -> Result<Handle, PlaylistError> {
        if self.contains(song.song_id) {
            log::warn!(
                "Playlist {:?}: rejecting duplicate song id {}",
                self.name,
                song.song_id
            );
            return Err(PlaylistError::DuplicateSongId(song.song_id));
        }
        Ok(self.push_back(song))
    }

    /// Whether a song with this id is present
    pub fn contains(&self, song_id: SongId) -> bool {
        self.find(song_id).is_some()
    }

    /// Handle of the first song with this id, scanning from the head
    pub fn find(&self, song_id: SongId) -> Option<Handle> {
        self.entries()
            .find(|(_, song)| song.song_id == song_id)
            .map(|(handle, _)| handle)
    }

    /// Detach the song behind `handle` and hand it back
    ///
    /// Returns `None` for a handle whose song was already removed.
    pub fn unlink(&mut self, handle: Handle) -> Option<Song> {
        let slot = self.slots.get_mut(handle.0)?;
        let song = slot.song.take()?;
        let prev = slot.prev.take();
        let next = slot.next.take();

        match prev {
            Some(prev) => self.slots[prev.0].next = next,
            None => self.ends.head = next,
        }
        match next {
            Some(next) => self.slots[next.0].prev = prev,
            None => self.ends.tail = prev,
        }

        self.free.push(handle.0);
        self.size -= 1;
        Some(song)
    }

    /// Remove the first song with this id
    ///
    /// Returns `false` and leaves the playlist untouched when no song matches.
    pub fn remove_song(&mut self, song_id: SongId) -> bool {
        let Some(handle) = self.find(song_id) else {
            log::debug!("Playlist {:?}: song {} not present", self.name, song_id);
            return false;
        };

        self.unlink(handle);
        log::debug!(
            "Playlist {:?}: removed song {} ({} left)",
            self.name,
            song_id,
            self.size
        );
        true
    }

    /// All songs whose `field` equals `key` exactly, in playlist order
    pub fn search_song(&self, key: &str, field: SongField) -> Vec<&Song> {
        self.iter().filter(|song| song.field(field) == key).collect()
    }

    /// Like [`search_song`](Self::search_song) with the field given as text
    ///
    /// An unrecognized search type matches nothing.
    pub fn search_song_by(&self, key: &str, search_type: &str) -> Vec<&Song> {
        match search_type.parse::<SongField>() {
            Ok(field) => self.search_song(key, field),
            Err(e) => {
                log::debug!("Playlist {:?}: {}, no matches", self.name, e);
                Vec::new()
            }
        }
    }

    /// Reorder ascending on `key` by repeated sorted insertion
    pub fn sort_playlist(&mut self, key: SongField) {
        self.sort_playlist_with(key, SortStrategy::Insertion);
    }

    /// Like [`sort_playlist`](Self::sort_playlist) with the key given as text
    ///
    /// An unrecognized key leaves the order as it is.
    pub fn sort_playlist_by(&mut self, key: &str) {
        self.sort_playlist_by_with(key, SortStrategy::Insertion);
    }

    /// Text-keyed sort with an explicit strategy
    ///
    /// Returns `false`, leaving the order untouched, when `key` is not a
    /// known field.
    pub fn sort_playlist_by_with(&mut self, key: &str, strategy: SortStrategy) -> bool {
        match key.parse::<SongField>() {
            Ok(field) => {
                self.sort_playlist_with(field, strategy);
                true
            }
            Err(e) => {
                log::warn!("Playlist {:?}: {}, order unchanged", self.name, e);
                false
            }
        }
    }

    /// Reorder ascending on `key`; equal values keep their relative order
    pub fn sort_playlist_with(&mut self, key: SongField, strategy: SortStrategy) {
        if self.ends.head.is_none() {
            return;
        }

        log::debug!(
            "Playlist {:?}: sorting {} songs by {} ({})",
            self.name,
            self.size,
            key,
            strategy
        );

        let sorted = match strategy {
            SortStrategy::Insertion => {
                let mut sorted = Chain::default();
                let mut current = self.ends.head;
                while let Some(handle) = current {
                    current = self.slots[handle.0].next;
                    insert_sorted(&mut self.slots, &mut sorted, handle, key);
                }
                sorted
            }
            SortStrategy::Merge => {
                let mut order: Vec<Handle> = self.entries().map(|(handle, _)| handle).collect();
                let slots = &self.slots;
                order.sort_by(|a, b| field_of(slots, *a, key).cmp(field_of(slots, *b, key)));

                let mut sorted = Chain::default();
                for handle in order {
                    append(&mut self.slots, &mut sorted, handle);
                }
                sorted
            }
        };

        self.ends = sorted;
    }

    fn allocate(&mut self, song: Song) -> Handle {
        let slot = Slot {
            song: Some(song),
            prev: None,
            next: None,
        };

        match self.free.pop() {
            Some(index) => {
                self.slots[index] = slot;
                Handle(index)
            }
            None => {
                self.slots.push(slot);
                Handle(self.slots.len() - 1)
            }
        }
    }
}

fn field_of(slots: &[Slot], handle: Handle, key: SongField) -> &str {
    slots[handle.0]
        .song
        .as_ref()
        .map_or("", |song| song.field(key))
}

/// Link `handle` after the chain's tail
fn append(slots: &mut [Slot], chain: &mut Chain, handle: Handle) {
    slots[handle.0].prev = chain.tail;
    slots[handle.0].next = None;

    match chain.tail {
        Some(tail) => slots[tail.0].next = Some(handle),
        None => chain.head = Some(handle),
    }
    chain.tail = Some(handle);
}

/// Link `handle` before the first song in `chain` that compares strictly
/// greater on `key`, or at the tail if there is none
fn insert_sorted(slots: &mut [Slot], chain: &mut Chain, handle: Handle, key: SongField) {
    slots[handle.0].prev = None;
    slots[handle.0].next = None;

    let mut current = chain.head;
    while let Some(cur) = current {
        if field_of(slots, handle, key) < field_of(slots, cur, key) {
            let prev = slots[cur.0].prev;
            slots[handle.0].next = Some(cur);
            slots[handle.0].prev = prev;
            match prev {
                Some(prev) => slots[prev.0].next = Some(handle),
                None => chain.head = Some(handle),
            }
            slots[cur.0].prev = Some(handle);
            return;
        }
        current = slots[cur.0].next;
    }

    append(slots, chain, handle);
}

/// Iterator over `(Handle, &Song)` pairs of a [`Playlist`]
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    slots: &'a [Slot],
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Handle, &'a Song);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        let slot = &self.slots[handle.0];
        self.front = slot.next;
        self.remaining -= 1;
        slot.song.as_ref().map(|song| (handle, song))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        let slot = &self.slots[handle.0];
        self.back = slot.prev;
        self.remaining -= 1;
        slot.song.as_ref().map(|song| (handle, song))
    }
}

impl ExactSizeIterator for Entries<'_> {}
impl FusedIterator for Entries<'_> {}

/// Iterator over the songs of a [`Playlist`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    entries: Entries<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, song)| song)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(|(_, song)| song)
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Walk the raw links both ways and check every structural invariant
    fn assert_linked(playlist: &Playlist) {
        let Chain { head, tail } = playlist.ends;
        assert_eq!(head.is_none(), tail.is_none());
        assert_eq!(head.is_none(), playlist.size == 0);

        let mut forward = Vec::new();
        let mut prev = None;
        let mut current = head;
        while let Some(handle) = current {
            let slot = &playlist.slots[handle.0];
            assert!(slot.song.is_some(), "linked slot is vacant");
            assert_eq!(slot.prev, prev, "prev link mismatch");
            forward.push(handle);
            prev = Some(handle);
            current = slot.next;
            assert!(forward.len() <= playlist.slots.len(), "cycle in next links");
        }
        assert_eq!(prev, tail);
        assert_eq!(forward.len(), playlist.size);

        let mut backward = Vec::new();
        let mut current = tail;
        while let Some(handle) = current {
            backward.push(handle);
            current = playlist.slots[handle.0].prev;
            assert!(backward.len() <= playlist.slots.len(), "cycle in prev links");
        }
        backward.reverse();
        assert_eq!(forward, backward);

        let occupied = playlist.slots.iter().filter(|s| s.song.is_some()).count();
        assert_eq!(occupied, playlist.size);
        assert_eq!(occupied + playlist.free.len(), playlist.slots.len());
    }

    fn ids(playlist: &Playlist) -> Vec<SongId> {
        playlist.iter().map(|song| song.song_id).collect()
    }

    fn sample() -> Playlist {
        let mut playlist = Playlist::new("P");
        playlist.add_song(1, "B", "artistX", "rock");
        playlist.add_song(2, "A", "artistY", "pop");
        playlist.add_song(3, "C", "artistX", "rock");
        playlist
    }

    #[test]
    fn test_new_playlist_is_empty() {
        let playlist = Playlist::new("Empty");
        assert_eq!(playlist.name(), "Empty");
        assert!(playlist.is_empty());
        assert!(playlist.head().is_none());
        assert!(playlist.tail().is_none());
        assert_eq!(playlist.iter().count(), 0);
        assert_linked(&playlist);
    }

    #[test]
    fn test_add_appends_in_order() {
        let playlist = sample();
        assert_eq!(playlist.len(), 3);
        assert_eq!(ids(&playlist), vec![1, 2, 3]);
        assert_eq!(playlist.get(playlist.head().unwrap()).unwrap().song_id, 1);
        assert_eq!(playlist.get(playlist.tail().unwrap()).unwrap().song_id, 3);
        assert_linked(&playlist);
    }

    #[test]
    fn test_reverse_traversal() {
        let playlist = sample();
        let reversed: Vec<_> = playlist.iter().rev().map(|s| s.song_id).collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }

    #[test]
    fn test_iter_from_both_ends_meets_once() {
        let playlist = sample();
        let mut iter = playlist.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().unwrap().song_id, 1);
        assert_eq!(iter.next_back().unwrap().song_id, 3);
        assert_eq!(iter.next().unwrap().song_id, 2);
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn test_remove_middle() {
        let mut playlist = sample();
        assert!(playlist.remove_song(2));
        assert_eq!(ids(&playlist), vec![1, 3]);
        assert_eq!(playlist.len(), 2);
        let tail = playlist.tail().unwrap();
        assert!(playlist.slots[tail.0].next.is_none());
        assert_linked(&playlist);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut playlist = sample();
        assert!(playlist.remove_song(1));
        assert_eq!(ids(&playlist), vec![2, 3]);
        assert_linked(&playlist);

        assert!(playlist.remove_song(3));
        assert_eq!(ids(&playlist), vec![2]);
        assert_eq!(playlist.head(), playlist.tail());
        assert_linked(&playlist);

        assert!(playlist.remove_song(2));
        assert!(playlist.is_empty());
        assert!(playlist.head().is_none() && playlist.tail().is_none());
        assert_linked(&playlist);
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        let mut playlist = sample();
        let before: Vec<Song> = playlist.iter().cloned().collect();
        assert!(!playlist.remove_song(42));
        let after: Vec<Song> = playlist.iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(playlist.len(), 3);
        assert_linked(&playlist);
    }

    #[test]
    fn test_remove_first_of_duplicate_ids() {
        let mut playlist = Playlist::new("dupes");
        playlist.add_song(5, "first", "", "");
        playlist.add_song(5, "second", "", "");
        assert!(playlist.remove_song(5));
        assert_eq!(playlist.iter().next().unwrap().name, "second");
        assert_linked(&playlist);
    }

    #[test]
    fn test_unlink_stale_handle_is_none() {
        let mut playlist = sample();
        let head = playlist.head().unwrap();
        assert_eq!(playlist.unlink(head).unwrap().song_id, 1);
        assert!(playlist.unlink(head).is_none());
        assert!(playlist.get(head).is_none());
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut playlist = sample();
        playlist.remove_song(2);
        playlist.add_song(4, "D", "artistZ", "jazz");
        assert_eq!(playlist.slots.len(), 3);
        assert_eq!(ids(&playlist), vec![1, 3, 4]);
        assert_linked(&playlist);
    }

    #[test]
    fn test_try_add_rejects_duplicate() {
        let mut playlist = sample();
        let result = playlist.try_add_song(Song::new(2, "again", "", ""));
        assert!(matches!(result, Err(PlaylistError::DuplicateSongId(2))));
        assert_eq!(playlist.len(), 3);

        assert!(playlist.try_add_song(Song::new(9, "new", "", "")).is_ok());
        assert_eq!(playlist.len(), 4);
    }

    #[test]
    fn test_search_by_genre_keeps_order() {
        let playlist = sample();
        let found: Vec<_> = playlist
            .search_song("rock", SongField::Genre)
            .iter()
            .map(|s| s.song_id)
            .collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn test_search_is_exact() {
        let playlist = sample();
        assert!(playlist.search_song("roc", SongField::Genre).is_empty());
        assert!(playlist.search_song("ROCK", SongField::Genre).is_empty());
        assert_eq!(playlist.search_song("artistY", SongField::Artist).len(), 1);
    }

    #[test]
    fn test_search_unknown_type_matches_nothing() {
        let playlist = sample();
        assert!(playlist.search_song_by("rock", "album").is_empty());
        assert_eq!(playlist.search_song_by("rock", "genre").len(), 2);
    }

    #[test]
    fn test_search_empty_playlist() {
        let playlist = Playlist::new("empty");
        for field in SongField::ALL {
            assert!(playlist.search_song("", field).is_empty());
        }
        assert!(playlist.search_song_by("", "album").is_empty());
        assert!(playlist.search_song_by("anything", "").is_empty());
    }

    #[test]
    fn test_sort_by_name() {
        let mut playlist = sample();
        playlist.sort_playlist(SongField::Name);
        assert_eq!(ids(&playlist), vec![2, 1, 3]);
        assert_eq!(playlist.len(), 3);
        assert_linked(&playlist);
    }

    #[test]
    fn test_sort_by_genre_is_stable() {
        let mut playlist = sample();
        playlist.sort_playlist(SongField::Genre);
        // "pop" < "rock"; the two rock songs keep 1 before 3
        assert_eq!(ids(&playlist), vec![2, 1, 3]);
        assert_linked(&playlist);
    }

    #[test]
    fn test_sort_by_artist_ties() {
        let mut playlist = Playlist::new("ties");
        playlist.add_song(1, "x", "b", "");
        playlist.add_song(2, "y", "a", "");
        playlist.add_song(3, "z", "b", "");
        playlist.add_song(4, "w", "a", "");
        playlist.sort_playlist(SongField::Artist);
        assert_eq!(ids(&playlist), vec![2, 4, 1, 3]);
        assert_linked(&playlist);
    }

    #[test]
    fn test_sort_unknown_key_keeps_order() {
        let mut playlist = sample();
        playlist.sort_playlist_by("album");
        assert_eq!(ids(&playlist), vec![1, 2, 3]);
        playlist.sort_playlist_by("name");
        assert_eq!(ids(&playlist), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_with_reports_unknown_key() {
        let mut playlist = sample();
        assert!(!playlist.sort_playlist_by_with("album", SortStrategy::Merge));
        assert_eq!(ids(&playlist), vec![1, 2, 3]);
        assert!(playlist.sort_playlist_by_with("name", SortStrategy::Merge));
        assert_eq!(ids(&playlist), vec![2, 1, 3]);
        assert_linked(&playlist);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut playlist = Playlist::new("tiny");
        playlist.sort_playlist(SongField::Name);
        assert_linked(&playlist);

        playlist.add_song(1, "only", "", "");
        playlist.sort_playlist(SongField::Name);
        assert_eq!(ids(&playlist), vec![1]);
        assert_linked(&playlist);
    }

    #[test]
    fn test_operations_after_sort() {
        let mut playlist = sample();
        playlist.sort_playlist(SongField::Name);
        assert!(playlist.remove_song(3));
        playlist.add_song(4, "0", "", "");
        assert_eq!(ids(&playlist), vec![2, 1, 4]);
        assert_linked(&playlist);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(SongId, String, String, String),
        Remove(SongId),
        Sort(SongField, SortStrategy),
    }

    fn field() -> impl Strategy<Value = SongField> {
        prop_oneof![
            Just(SongField::Name),
            Just(SongField::Artist),
            Just(SongField::Genre)
        ]
    }

    fn strategy() -> impl Strategy<Value = SortStrategy> {
        prop_oneof![Just(SortStrategy::Insertion), Just(SortStrategy::Merge)]
    }

    // Tiny alphabets so ties are common
    fn text() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-c]{0,2}").unwrap()
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0u64..20, text(), text(), text()).prop_map(|(id, n, a, g)| Op::Add(id, n, a, g)),
            2 => (0u64..20).prop_map(Op::Remove),
            1 => (field(), strategy()).prop_map(|(f, s)| Op::Sort(f, s)),
        ]
    }

    fn songs() -> impl Strategy<Value = Vec<(String, String, String)>> {
        prop::collection::vec((text(), text(), text()), 0..25)
    }

    fn build(songs: &[(String, String, String)]) -> Playlist {
        let mut playlist = Playlist::new("prop");
        for (i, (name, artist, genre)) in songs.iter().enumerate() {
            playlist.add_song(i as SongId + 1, name, artist, genre);
        }
        playlist
    }

    proptest! {
        /// Size tracks adds minus successful removals and links stay consistent
        #[test]
        fn size_matches_traversal(ops in prop::collection::vec(op(), 0..60)) {
            let mut playlist = Playlist::new("ops");
            let mut expected = 0usize;
            for op in ops {
                match op {
                    Op::Add(id, n, a, g) => {
                        playlist.add_song(id, n, a, g);
                        expected += 1;
                    }
                    Op::Remove(id) => {
                        if playlist.remove_song(id) {
                            expected -= 1;
                        }
                    }
                    Op::Sort(f, s) => playlist.sort_playlist_with(f, s),
                }
                prop_assert_eq!(playlist.len(), expected);
                assert_linked(&playlist);
            }
            let forward: Vec<_> = playlist.iter().map(|s| s.song_id).collect();
            let mut backward: Vec<_> = playlist.iter().rev().map(|s| s.song_id).collect();
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }

        /// Removing every song in any order empties the list
        #[test]
        fn remove_all_empties(songs in songs(), seed in any::<u64>()) {
            let mut playlist = build(&songs);
            let mut order: Vec<SongId> = playlist.iter().map(|s| s.song_id).collect();
            let len = order.len().max(1);
            order.rotate_left((seed as usize) % len);
            for id in order {
                prop_assert!(playlist.remove_song(id));
                assert_linked(&playlist);
            }
            prop_assert!(playlist.is_empty());
            prop_assert!(playlist.head().is_none() && playlist.tail().is_none());
        }

        /// Sorting is ordered, idempotent, and keeps the id multiset
        #[test]
        fn sort_properties(songs in songs(), key in field()) {
            let mut playlist = build(&songs);
            let mut before: Vec<_> = playlist.iter().map(|s| s.song_id).collect();

            playlist.sort_playlist(key);
            assert_linked(&playlist);
            let once: Vec<_> = playlist.iter().map(|s| s.song_id).collect();
            let values: Vec<_> = playlist.iter().map(|s| s.field(key).to_string()).collect();
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));

            playlist.sort_playlist(key);
            let twice: Vec<_> = playlist.iter().map(|s| s.song_id).collect();
            prop_assert_eq!(&once, &twice);

            let mut after = once.clone();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        /// Both strategies agree, including on ties
        #[test]
        fn strategies_agree(songs in songs(), key in field()) {
            let mut insertion = build(&songs);
            let mut merge = insertion.clone();
            insertion.sort_playlist_with(key, SortStrategy::Insertion);
            merge.sort_playlist_with(key, SortStrategy::Merge);
            assert_linked(&merge);
            prop_assert_eq!(ids(&insertion), ids(&merge));
        }

        /// Search returns exactly the matching songs in list order
        #[test]
        fn search_matches_filter(songs in songs(), key in text(), by in field()) {
            let playlist = build(&songs);
            let found: Vec<_> = playlist.search_song(&key, by).iter().map(|s| s.song_id).collect();
            let expected: Vec<_> = playlist
                .iter()
                .filter(|s| s.field(by) == key)
                .map(|s| s.song_id)
                .collect();
            prop_assert_eq!(found, expected);
        }
    }
}
