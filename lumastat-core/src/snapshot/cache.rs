//! Snapshot cache
//!
//! Holds the snapshot of the last render. Before the first capture there is
//! no snapshot at all, which reads as "changed" so the first tick always
//! renders.

use super::Snapshot;
use crate::live::LiveState;

/// Owner of the last-rendered snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    last: Option<Snapshot>,
}

impl SnapshotCache {
    /// Create an empty cache (first comparison reports a change)
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Check whether the live state differs from the last render
    ///
    /// Always true before the first [`capture`](Self::capture). Has no side
    /// effects.
    pub fn has_changed<L: LiveState + ?Sized>(&self, live: &L) -> bool {
        match &self.last {
            Some(snapshot) => snapshot.differs_from(live),
            None => true,
        }
    }

    /// Replace the cached snapshot with the live values, in full
    ///
    /// Call once per detected change, before rendering.
    pub fn capture<L: LiveState + ?Sized>(&mut self, live: &L) -> &Snapshot {
        self.last.insert(Snapshot::capture(live))
    }

    /// The last captured snapshot
    pub fn last(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }

    /// Drop the cached snapshot so the next comparison reports a change
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::{FakeLive, RealtimeMode};
    use proptest::prelude::*;

    #[test]
    fn test_first_comparison_is_forced() {
        let cache = SnapshotCache::new();
        let live = FakeLive::station("HomeNet", [192, 168, 1, 20]);
        assert!(cache.has_changed(&live));
        // Asking again does not consume the forced change
        assert!(cache.has_changed(&live));
    }

    #[test]
    fn test_capture_clears_change() {
        let mut cache = SnapshotCache::new();
        let live = FakeLive::station("HomeNet", [192, 168, 1, 20]);
        cache.capture(&live);
        assert!(!cache.has_changed(&live));
        assert_eq!(cache.last().map(|s| s.brightness), Some(128));
    }

    #[test]
    fn test_invalidate_forces_change() {
        let mut cache = SnapshotCache::new();
        let live = FakeLive::station("HomeNet", [192, 168, 1, 20]);
        cache.capture(&live);
        cache.invalidate();
        assert!(cache.has_changed(&live));
        assert!(cache.last().is_none());
    }

    #[test]
    fn test_each_field_triggers_change() {
        let base = FakeLive::station("HomeNet", [192, 168, 1, 20]);
        let mut cache = SnapshotCache::new();
        cache.capture(&base);

        let mutations: [fn(&mut FakeLive); 8] = [
            |l| l.identity = "OtherNet",
            |l| l.address = [192, 168, 1, 21],
            |l| l.brightness = 200,
            |l| l.mode = 1,
            |l| l.palette = 1,
            |l| l.rt_address = [10, 1, 1, 1],
            |l| l.rt_mode = RealtimeMode::E131,
            |l| l.milliamps = 1,
        ];

        for mutate in mutations {
            let mut live = base.clone();
            mutate(&mut live);
            assert!(cache.has_changed(&live));
        }
    }

    fn arb_live() -> impl Strategy<Value = FakeLive> {
        (
            prop::sample::select(vec!["HomeNet", "OtherNet", ""]),
            prop::array::uniform4(0u8..3),
            0u8..3,
            0u8..3,
            0u8..3,
            prop::array::uniform4(0u8..2),
            0u8..6,
            0u16..3,
        )
            .prop_map(|(identity, address, brightness, mode, palette, rt, rt_mode, ma)| {
                let mut live = FakeLive::station(identity, address);
                live.brightness = brightness;
                live.mode = mode;
                live.palette = palette;
                live.rt_address = rt;
                live.rt_mode = RealtimeMode::from_raw(rt_mode);
                live.milliamps = ma;
                live
            })
    }

    fn same_fields(a: &FakeLive, b: &FakeLive) -> bool {
        a.identity == b.identity
            && a.address == b.address
            && a.brightness == b.brightness
            && a.mode == b.mode
            && a.palette == b.palette
            && a.rt_address == b.rt_address
            && a.rt_mode == b.rt_mode
            && a.milliamps == b.milliamps
    }

    proptest! {
        #[test]
        fn prop_changed_iff_any_field_differs(before in arb_live(), after in arb_live()) {
            let mut cache = SnapshotCache::new();
            cache.capture(&before);
            prop_assert_eq!(cache.has_changed(&after), !same_fields(&before, &after));
        }
    }
}
