#![cfg(test)]

mod net;
mod util;
