//! Capture engine for `macsniff`.
//!
//! * [`frame`] decodes one captured frame into its addressing fields.
//! * [`network`] opens live captures through pnet.
//! * [`capture`] runs the frame/timer loop.
//! * [`report`] holds the static help, version and verbose texts.
//! * [`session`] strings the stages together for one prompt line.

pub mod capture;
pub mod frame;
pub mod network;
pub mod report;
pub mod session;
