//! Live controller state
//!
//! The host controller owns the network stack, the effect engine and the
//! power estimator. The display only ever reads them through [`LiveState`];
//! nothing in this crate mutates host state.

use core::net::Ipv4Addr;

/// Address the controller answers on while it runs its own access point
pub const ACCESS_POINT_ADDRESS: Ipv4Addr = Ipv4Addr::new(4, 3, 2, 1);

/// Longest network identity kept in a snapshot (802.11 SSID limit)
pub const MAX_IDENTITY_LEN: usize = 32;

/// Source currently driving the LED output in real time
///
/// Raw values follow the controller's wire numbering. Values outside the
/// known set are kept as [`RealtimeMode::Other`] so that a change between
/// two unknown modes is still detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RealtimeMode {
    /// Local effects are in control
    #[default]
    Inactive,
    /// Generic real-time API
    Generic,
    /// UDP notifier stream
    Udp,
    /// Hyperion ambilight
    Hyperion,
    /// E1.31 (sACN)
    E131,
    /// Adalight serial
    Adalight,
    /// Art-Net
    ArtNet,
    /// TPM2.NET
    Tpm2Net,
    /// Distributed Display Protocol
    Ddp,
    /// Unrecognized raw value
    Other(u8),
}

impl RealtimeMode {
    /// Decode the controller's raw mode byte
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Inactive,
            1 => Self::Generic,
            2 => Self::Udp,
            3 => Self::Hyperion,
            4 => Self::E131,
            5 => Self::Adalight,
            6 => Self::ArtNet,
            7 => Self::Tpm2Net,
            8 => Self::Ddp,
            other => Self::Other(other),
        }
    }

    /// Encode back to the controller's raw mode byte
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Generic => 1,
            Self::Udp => 2,
            Self::Hyperion => 3,
            Self::E131 => 4,
            Self::Adalight => 5,
            Self::ArtNet => 6,
            Self::Tpm2Net => 7,
            Self::Ddp => 8,
            Self::Other(raw) => raw,
        }
    }

    /// Whether the screen swaps the effect rows for the streaming block
    pub const fn shows_stream_block(self) -> bool {
        matches!(self, Self::E131)
    }
}

/// Read-only view of the controller's live state
///
/// All accessors are synchronous and infallible. Implementations are
/// expected to return whatever the host currently holds.
pub trait LiveState {
    /// True while the controller runs its own access point
    fn access_point_active(&self) -> bool;

    /// SSID of the controller's own access point
    fn access_point_identity(&self) -> &str;

    /// SSID of the network the controller joined as a station
    fn station_identity(&self) -> &str;

    /// Address assigned to the station interface
    fn station_address(&self) -> Ipv4Addr;

    /// Master output level (0-255)
    fn brightness(&self) -> u8;

    /// Effect index of the main segment
    fn main_segment_mode(&self) -> u8;

    /// Palette index of the main segment
    fn main_segment_palette(&self) -> u8;

    /// Address of the last real-time sender
    fn realtime_address(&self) -> Ipv4Addr;

    /// Active real-time input source
    fn realtime_mode(&self) -> RealtimeMode;

    /// Estimated LED current draw in milliamps
    fn estimated_milliamps(&self) -> u16;

    /// Host name the controller announces on the network
    ///
    /// Shown in the streaming block but not watched for changes.
    fn host_name(&self) -> &str;

    /// Identity for the current operating mode
    fn network_identity(&self) -> &str {
        if self.access_point_active() {
            self.access_point_identity()
        } else {
            self.station_identity()
        }
    }

    /// Address for the current operating mode
    fn network_address(&self) -> Ipv4Addr {
        if self.access_point_active() {
            ACCESS_POINT_ADDRESS
        } else {
            self.station_address()
        }
    }
}

/// Which name table an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NameList {
    /// Effect (mode) names
    Modes,
    /// Palette names
    Palettes,
}

/// Maps effect and palette indices to their display names
pub trait NameLookup {
    /// Name for `index` in `list`, or `None` if the index is unknown
    fn name(&self, list: NameList, index: u8) -> Option<&str>;
}

/// Name lookup backed by two static tables
#[derive(Debug, Clone, Copy)]
pub struct StaticNames<'a> {
    modes: &'a [&'a str],
    palettes: &'a [&'a str],
}

impl<'a> StaticNames<'a> {
    /// Create a lookup over the given tables
    pub const fn new(modes: &'a [&'a str], palettes: &'a [&'a str]) -> Self {
        Self { modes, palettes }
    }
}

impl NameLookup for StaticNames<'_> {
    fn name(&self, list: NameList, index: u8) -> Option<&str> {
        let table = match list {
            NameList::Modes => self.modes,
            NameList::Palettes => self.palettes,
        };
        table.get(index as usize).copied()
    }
}

/// In-memory live state for tests
///
/// Counts every watched-field read so tests can tell whether change
/// detection ran.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeLive {
    pub ap_active: bool,
    pub ap_identity: &'static str,
    pub identity: &'static str,
    pub address: [u8; 4],
    pub brightness: u8,
    pub mode: u8,
    pub palette: u8,
    pub rt_address: [u8; 4],
    pub rt_mode: RealtimeMode,
    pub milliamps: u16,
    pub reads: core::cell::Cell<u32>,
}

#[cfg(test)]
impl FakeLive {
    pub fn station(identity: &'static str, address: [u8; 4]) -> Self {
        Self {
            ap_identity: "LED-AP",
            identity,
            address,
            brightness: 128,
            ..Self::default()
        }
    }

    fn count(&self) {
        self.reads.set(self.reads.get() + 1);
    }
}

#[cfg(test)]
impl LiveState for FakeLive {
    fn access_point_active(&self) -> bool {
        self.ap_active
    }

    fn access_point_identity(&self) -> &str {
        self.ap_identity
    }

    fn station_identity(&self) -> &str {
        self.identity
    }

    fn station_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address)
    }

    fn brightness(&self) -> u8 {
        self.count();
        self.brightness
    }

    fn main_segment_mode(&self) -> u8 {
        self.mode
    }

    fn main_segment_palette(&self) -> u8 {
        self.palette
    }

    fn realtime_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.rt_address)
    }

    fn realtime_mode(&self) -> RealtimeMode {
        self.rt_mode
    }

    fn estimated_milliamps(&self) -> u16 {
        self.milliamps
    }

    fn host_name(&self) -> &str {
        "lumastat"
    }
}
