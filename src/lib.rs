// Pin map for the LilyGO TTGO T-Camera (ESP32, OV2640, AS312 PIR)

#![no_std]

pub mod pins;
pub mod signal;

pub use signal::{log_pin_map, Signal};
