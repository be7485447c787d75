//! State snapshot and change detection
//!
//! A [`Snapshot`] is the last-rendered copy of every watched field. The
//! [`SnapshotCache`] owns one between ticks and answers whether the live
//! controller has moved away from it.

pub mod cache;

use core::net::Ipv4Addr;

use heapless::String;

use crate::live::{LiveState, RealtimeMode, MAX_IDENTITY_LEN};

pub use cache::SnapshotCache;

/// Last-displayed value of every watched field
///
/// Always built whole from one [`LiveState`]; there is no way to update a
/// single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Network identity for the current operating mode
    pub identity: String<MAX_IDENTITY_LEN>,
    /// Network address for the current operating mode
    pub address: Ipv4Addr,
    /// Master output level (0-255)
    pub brightness: u8,
    /// Main segment effect index
    pub mode: u8,
    /// Main segment palette index
    pub palette: u8,
    /// Last real-time sender
    pub realtime_address: Ipv4Addr,
    /// Active real-time input source
    pub realtime_mode: RealtimeMode,
    /// Estimated current draw (mA)
    pub milliamps: u16,
}

impl Snapshot {
    /// Copy every watched field out of the live state
    pub fn capture<L: LiveState + ?Sized>(live: &L) -> Self {
        let mut identity = String::new();
        // Cannot fail: bounded() never exceeds the capacity
        let _ = identity.push_str(bounded(live.network_identity()));

        Self {
            identity,
            address: live.network_address(),
            brightness: live.brightness(),
            mode: live.main_segment_mode(),
            palette: live.main_segment_palette(),
            realtime_address: live.realtime_address(),
            realtime_mode: live.realtime_mode(),
            milliamps: live.estimated_milliamps(),
        }
    }

    /// Check whether any watched field differs from the live state
    pub fn differs_from<L: LiveState + ?Sized>(&self, live: &L) -> bool {
        self.identity.as_str() != bounded(live.network_identity())
            || self.address != live.network_address()
            || self.brightness != live.brightness()
            || self.mode != live.main_segment_mode()
            || self.palette != live.main_segment_palette()
            || self.realtime_address != live.realtime_address()
            || self.realtime_mode != live.realtime_mode()
            || self.milliamps != live.estimated_milliamps()
    }

    /// Whether this snapshot renders the streaming block
    pub fn shows_stream_block(&self) -> bool {
        self.realtime_mode.shows_stream_block()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Snapshot {
    fn format(&self, f: defmt::Formatter) {
        let ip = self.address.octets();
        defmt::write!(
            f,
            "Snapshot[{} {}.{}.{}.{} bri={} fx={} pal={} rt={} {}mA]",
            self.identity.as_str(),
            ip[0],
            ip[1],
            ip[2],
            ip[3],
            self.brightness,
            self.mode,
            self.palette,
            self.realtime_mode,
            self.milliamps
        );
    }
}

/// Clip an identity to the snapshot capacity on a char boundary
///
/// Applied on both capture and compare, so an over-long identity compares
/// equal to its own stored prefix.
pub(crate) fn bounded(text: &str) -> &str {
    if text.len() <= MAX_IDENTITY_LEN {
        return text;
    }
    let mut end = MAX_IDENTITY_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
