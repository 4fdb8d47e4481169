#[macro_use]
extern crate log;

pub mod http;
pub mod position;
