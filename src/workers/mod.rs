pub mod core;
pub mod poller;

pub use core::UpdateSender;
pub use poller::{Poller, PollerConfig};
