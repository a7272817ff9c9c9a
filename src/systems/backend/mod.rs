mod commands;
mod worker;

pub(crate) use commands::{BackendCommand, BackendResponse};
pub(crate) use worker::spawn;
