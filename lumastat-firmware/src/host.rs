//! Host-owned live state
//!
//! The LED controller's subsystems (network, effect engine, power
//! estimator) publish into [`HOST_STATE`]: on this board their updates
//! arrive over the host link and go through [`apply`]. The display task
//! takes a copy once per iteration and reads that copy through `LiveState`,
//! so one tick never sees a half-updated state.

use core::cell::RefCell;
use core::net::Ipv4Addr;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use heapless::String;

use lumastat_core::live::MAX_IDENTITY_LEN;
use lumastat_core::{HostUpdate, LiveState, RealtimeMode};

/// Copy of everything the host exposes to the display
#[derive(Debug, Clone)]
pub struct HostState {
    pub ap_active: bool,
    pub ap_identity: String<MAX_IDENTITY_LEN>,
    pub station_identity: String<MAX_IDENTITY_LEN>,
    pub station_address: Ipv4Addr,
    pub brightness: u8,
    pub mode: u8,
    pub palette: u8,
    pub realtime_address: Ipv4Addr,
    pub realtime_mode: RealtimeMode,
    pub milliamps: u16,
    pub host_name: String<MAX_IDENTITY_LEN>,
}

impl HostState {
    const fn new() -> Self {
        Self {
            ap_active: false,
            ap_identity: String::new(),
            station_identity: String::new(),
            station_address: Ipv4Addr::UNSPECIFIED,
            brightness: 0,
            mode: 0,
            palette: 0,
            realtime_address: Ipv4Addr::UNSPECIFIED,
            realtime_mode: RealtimeMode::Inactive,
            milliamps: 0,
            host_name: String::new(),
        }
    }
}

/// Live state shared between the host side and the display task
pub static HOST_STATE: Mutex<CriticalSectionRawMutex, RefCell<HostState>> =
    Mutex::new(RefCell::new(HostState::new()));

/// Raised by the network side once the station interface has an address
pub static NETWORK_UP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Copy the current host state
pub fn current() -> HostState {
    HOST_STATE.lock(|state| state.borrow().clone())
}

fn update(f: impl FnOnce(&mut HostState)) {
    HOST_STATE.lock(|state| f(&mut state.borrow_mut()));
}

/// Copy `text` into a bounded string, cutting at a character boundary
fn bounded(text: &str) -> String<MAX_IDENTITY_LEN> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Apply one update received from the controller
pub fn apply(update: HostUpdate) {
    match update {
        HostUpdate::AccessPoint(identity) => set_access_point(&identity),
        HostUpdate::Station { identity, address } => set_station(&identity, address),
        HostUpdate::HostName(name) => set_host_name(&name),
        HostUpdate::Output {
            brightness,
            mode,
            palette,
        } => set_output(brightness, mode, palette),
        HostUpdate::Realtime { mode, sender } => set_realtime(mode, sender),
        HostUpdate::Milliamps(milliamps) => set_milliamps(milliamps),
    }
}

/// Network side: running our own access point
pub fn set_access_point(identity: &str) {
    update(|s| {
        s.ap_active = true;
        s.ap_identity = bounded(identity);
    });
}

/// Network side: joined `identity` as a station with `address`
pub fn set_station(identity: &str, address: Ipv4Addr) {
    update(|s| {
        s.ap_active = false;
        s.station_identity = bounded(identity);
        s.station_address = address;
    });
    NETWORK_UP.signal(());
}

/// Network side: name announced on the network
pub fn set_host_name(name: &str) {
    update(|s| s.host_name = bounded(name));
}

/// Effect engine: master brightness and main segment
pub fn set_output(brightness: u8, mode: u8, palette: u8) {
    update(|s| {
        s.brightness = brightness;
        s.mode = mode;
        s.palette = palette;
    });
}

/// Real-time receiver: source mode and sender
pub fn set_realtime(mode: RealtimeMode, sender: Ipv4Addr) {
    update(|s| {
        s.realtime_mode = mode;
        s.realtime_address = sender;
    });
}

/// Power estimator: LED current draw
pub fn set_milliamps(milliamps: u16) {
    update(|s| s.milliamps = milliamps);
}

impl LiveState for HostState {
    fn access_point_active(&self) -> bool {
        self.ap_active
    }

    fn access_point_identity(&self) -> &str {
        &self.ap_identity
    }

    fn station_identity(&self) -> &str {
        &self.station_identity
    }

    fn station_address(&self) -> Ipv4Addr {
        self.station_address
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn main_segment_mode(&self) -> u8 {
        self.mode
    }

    fn main_segment_palette(&self) -> u8 {
        self.palette
    }

    fn realtime_address(&self) -> Ipv4Addr {
        self.realtime_address
    }

    fn realtime_mode(&self) -> RealtimeMode {
        self.realtime_mode
    }

    fn estimated_milliamps(&self) -> u16 {
        self.milliamps
    }

    fn host_name(&self) -> &str {
        &self.host_name
    }
}
