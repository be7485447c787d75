//! Embassy tasks for the status display

mod host_link;
mod status;

pub use host_link::host_link_task;
pub use status::{status_task, HOST_LOOP_INTERVAL_MS};
