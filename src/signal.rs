//! Named signal roles for the T-Camera pin map
//!
//! `Signal` is the closed set of logical signals the board wires up.
//! Each variant resolves to its GPIO through the tables in [`crate::pins`],
//! so bring-up code can iterate, log, and cross-check the map without
//! touching the raw constants.

use crate::pins;

/// All logical signals on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    // Camera control
    Pwdn,
    Reset,
    Xclk,
    // SCCB (sensor control bus)
    Siod,
    Sioc,
    // DVP data, LSB to MSB
    Y2,
    Y3,
    Y4,
    Y5,
    Y6,
    Y7,
    Y8,
    Y9,
    // Frame timing
    Vsync,
    Href,
    Pclk,
    // Peripheral I2C bus
    I2cSda,
    I2cScl,
    // Sensors / input
    Pir,
    Button1,
}

impl Signal {
    /// Every signal in the map, in table order.
    pub const ALL: [Signal; 20] = [
        Signal::Pwdn,
        Signal::Reset,
        Signal::Xclk,
        Signal::Siod,
        Signal::Sioc,
        Signal::Y2,
        Signal::Y3,
        Signal::Y4,
        Signal::Y5,
        Signal::Y6,
        Signal::Y7,
        Signal::Y8,
        Signal::Y9,
        Signal::Vsync,
        Signal::Href,
        Signal::Pclk,
        Signal::I2cSda,
        Signal::I2cScl,
        Signal::Pir,
        Signal::Button1,
    ];

    /// The raw table entry, [`pins::NOT_CONNECTED`] included.
    pub const fn gpio(self) -> i32 {
        match self {
            Signal::Pwdn => pins::CAM_PWDN,
            Signal::Reset => pins::CAM_RESET,
            Signal::Xclk => pins::CAM_XCLK,
            Signal::Siod => pins::CAM_SIOD,
            Signal::Sioc => pins::CAM_SIOC,
            Signal::Y2 => pins::CAM_Y2,
            Signal::Y3 => pins::CAM_Y3,
            Signal::Y4 => pins::CAM_Y4,
            Signal::Y5 => pins::CAM_Y5,
            Signal::Y6 => pins::CAM_Y6,
            Signal::Y7 => pins::CAM_Y7,
            Signal::Y8 => pins::CAM_Y8,
            Signal::Y9 => pins::CAM_Y9,
            Signal::Vsync => pins::CAM_VSYNC,
            Signal::Href => pins::CAM_HREF,
            Signal::Pclk => pins::CAM_PCLK,
            Signal::I2cSda => pins::I2C_SDA,
            Signal::I2cScl => pins::I2C_SCL,
            Signal::Pir => pins::PIR,
            Signal::Button1 => pins::BUTTON_1,
        }
    }

    /// The bound GPIO, or `None` when the signal is not wired.
    pub const fn pin(self) -> Option<i32> {
        let gpio = self.gpio();
        if gpio == pins::NOT_CONNECTED {
            None
        } else {
            Some(gpio)
        }
    }

    pub const fn is_connected(self) -> bool {
        self.gpio() != pins::NOT_CONNECTED
    }

    /// The role's wire name, as printed on the schematic.
    pub const fn name(self) -> &'static str {
        match self {
            Signal::Pwdn => "PWDN",
            Signal::Reset => "RESET",
            Signal::Xclk => "XCLK",
            Signal::Siod => "SIOD",
            Signal::Sioc => "SIOC",
            Signal::Y2 => "Y2",
            Signal::Y3 => "Y3",
            Signal::Y4 => "Y4",
            Signal::Y5 => "Y5",
            Signal::Y6 => "Y6",
            Signal::Y7 => "Y7",
            Signal::Y8 => "Y8",
            Signal::Y9 => "Y9",
            Signal::Vsync => "VSYNC",
            Signal::Href => "HREF",
            Signal::Pclk => "PCLK",
            Signal::I2cSda => "I2C_SDA",
            Signal::I2cScl => "I2C_SCL",
            Signal::Pir => "PIR",
            Signal::Button1 => "BUTTON_1",
        }
    }

    /// Inverse of [`name`](Signal::name).
    pub fn from_name(name: &str) -> Option<Signal> {
        Signal::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// The signal wired to `gpio`, if any. The sentinel maps to `None`.
    pub fn for_gpio(gpio: i32) -> Option<Signal> {
        if gpio == pins::NOT_CONNECTED {
            return None;
        }
        Signal::ALL.iter().copied().find(|s| s.gpio() == gpio)
    }

    /// Signals actually wired on this board.
    pub fn connected() -> impl Iterator<Item = Signal> {
        Signal::ALL.iter().copied().filter(|s| s.is_connected())
    }
}

impl core::fmt::Display for Signal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Dump the whole map at debug level. Meant for bring-up logs.
pub fn log_pin_map() {
    for sig in Signal::ALL {
        match sig.pin() {
            Some(gpio) => log::debug!("pins: {} -> GPIO{}", sig, gpio),
            None => log::debug!("pins: {} not connected", sig),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_documented_gpios() {
        assert_eq!(Signal::Xclk.gpio(), 32);
        assert_eq!(Signal::Vsync.gpio(), 27);
        assert_eq!(Signal::Button1.gpio(), 34);
        assert_eq!(Signal::Pwdn.gpio(), 26);
        assert_eq!(Signal::Pir.gpio(), 33);
    }

    #[test]
    fn reset_is_the_only_unconnected_signal() {
        for sig in Signal::ALL {
            if sig == Signal::Reset {
                assert_eq!(sig.pin(), None);
                assert!(!sig.is_connected());
            } else {
                assert_eq!(sig.pin(), Some(sig.gpio()));
                assert!(sig.is_connected(), "{sig} should be wired");
            }
        }
    }

    #[test]
    fn no_two_connected_signals_share_a_gpio() {
        for (i, a) in Signal::ALL.iter().enumerate() {
            for b in &Signal::ALL[i + 1..] {
                if a.is_connected() && b.is_connected() {
                    assert_ne!(a.gpio(), b.gpio(), "{a} and {b} collide");
                }
            }
        }
    }

    #[test]
    fn names_round_trip() {
        for sig in Signal::ALL {
            assert_eq!(Signal::from_name(sig.name()), Some(sig));
        }
        assert_eq!(Signal::from_name("Y10"), None);
        assert_eq!(Signal::from_name("pwdn"), None);
    }

    #[test]
    fn gpio_lookup_round_trips() {
        for sig in Signal::connected() {
            assert_eq!(Signal::for_gpio(sig.gpio()), Some(sig));
        }
        assert_eq!(Signal::for_gpio(crate::pins::NOT_CONNECTED), None);
        assert_eq!(Signal::for_gpio(17), None);
    }

    #[test]
    fn both_i2c_pairs_are_distinct_buses() {
        assert_ne!(Signal::Siod.gpio(), Signal::I2cSda.gpio());
        assert_ne!(Signal::Sioc.gpio(), Signal::I2cScl.gpio());
    }

    #[test]
    fn connected_count_matches_wiring() {
        assert_eq!(Signal::connected().count(), 19);
    }

    #[test]
    fn lookups_are_const_evaluable() {
        const XCLK: i32 = Signal::Xclk.gpio();
        const RESET: Option<i32> = Signal::Reset.pin();
        assert_eq!(XCLK, 32);
        assert_eq!(RESET, None);
    }
}
