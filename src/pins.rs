//! TTGO T-Camera pin map
//!
//! This module maps the T-Camera's physical wiring to named constants.
//! All the pin assignments live here. Goal: no code consuming this board
//! needs to hard-code a GPIO number.
//!
//! GPIO |    Function    |      Notes
//! -----+----------------+----------------------------------
//!  26  | CAM PWDN       | Sensor power-down, active high
//!  32  | CAM XCLK       | External clock into the sensor
//!  13  | CAM SIOD       | SCCB data (sensor control bus)
//!  12  | CAM SIOC       | SCCB clock
//!  39  | CAM Y9         | DVP data, MSB
//!  36  | CAM Y8         |
//!  23  | CAM Y7         |
//!  18  | CAM Y6         |
//!  15  | CAM Y5         |
//!   4  | CAM Y4         |
//!  14  | CAM Y3         |
//!   5  | CAM Y2         | DVP data, LSB
//!  27  | CAM VSYNC      | Frame valid
//!  25  | CAM HREF       | Line valid
//!  19  | CAM PCLK       | Pixel clock from the sensor
//!  21  | I2C SDA        | Peripheral bus (SSD1306 OLED)
//!  22  | I2C SCL        | Peripheral bus clock
//!  33  | PIR            | AS312 motion sensor, digital out
//!  34  | BUTTON_1       | User button, right side of the PCB
//!
//! The sensor RESET line is not wired on this board; it carries
//! [`NOT_CONNECTED`] and drivers have to cycle PWDN instead.

use static_assertions::const_assert;

/// Sentinel for a signal that is not wired to any GPIO.
pub const NOT_CONNECTED: i32 = -1;

// ----- Camera (OV2640, parallel DVP) -----
pub const CAM_PWDN: i32 = 26;
pub const CAM_RESET: i32 = NOT_CONNECTED;
pub const CAM_XCLK: i32 = 32;

// SCCB control bus. The sensor's own SDA/SCL pair; separate wiring from
// the peripheral I2C bus below.
pub const CAM_SIOD: i32 = 13;
pub const CAM_SIOC: i32 = 12;

// Parallel data, Y2 (LSB) through Y9 (MSB)
pub const CAM_Y9: i32 = 39;
pub const CAM_Y8: i32 = 36;
pub const CAM_Y7: i32 = 23;
pub const CAM_Y6: i32 = 18;
pub const CAM_Y5: i32 = 15;
pub const CAM_Y4: i32 = 4;
pub const CAM_Y3: i32 = 14;
pub const CAM_Y2: i32 = 5;

// Frame timing
pub const CAM_VSYNC: i32 = 27;
pub const CAM_HREF: i32 = 25;
pub const CAM_PCLK: i32 = 19;

// ----- I2C (OLED + peripherals) -----
pub const I2C_SDA: i32 = 21;
pub const I2C_SCL: i32 = 22;

// ----- Sensors / input -----
pub const PIR: i32 = 33; // AS312
pub const BUTTON_1: i32 = 34;

/// Camera interface pins bundled for handoff to a camera driver config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPins {
    pub pwdn: i32,
    pub reset: i32,
    pub xclk: i32,
    pub siod: i32,
    pub sioc: i32,
    pub y9: i32,
    pub y8: i32,
    pub y7: i32,
    pub y6: i32,
    pub y5: i32,
    pub y4: i32,
    pub y3: i32,
    pub y2: i32,
    pub vsync: i32,
    pub href: i32,
    pub pclk: i32,
}

pub const CAMERA: CameraPins = CameraPins {
    pwdn: CAM_PWDN,
    reset: CAM_RESET,
    xclk: CAM_XCLK,
    siod: CAM_SIOD,
    sioc: CAM_SIOC,
    y9: CAM_Y9,
    y8: CAM_Y8,
    y7: CAM_Y7,
    y6: CAM_Y6,
    y5: CAM_Y5,
    y4: CAM_Y4,
    y3: CAM_Y3,
    y2: CAM_Y2,
    vsync: CAM_VSYNC,
    href: CAM_HREF,
    pclk: CAM_PCLK,
};

/// Peripheral I2C bus pins. The OLED lives here, not on the SCCB pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cPins {
    pub sda: i32,
    pub scl: i32,
}

pub const I2C: I2cPins = I2cPins {
    sda: I2C_SDA,
    scl: I2C_SCL,
};

const fn all_distinct(pins: &[i32]) -> bool {
    let mut i = 0;
    while i < pins.len() {
        if pins[i] != NOT_CONNECTED {
            let mut j = i + 1;
            while j < pins.len() {
                if pins[i] == pins[j] {
                    return false;
                }
                j += 1;
            }
        }
        i += 1;
    }
    true
}

// Every connected signal must own its GPIO exclusively.
const_assert!(all_distinct(&[
    CAM_PWDN, CAM_RESET, CAM_XCLK, CAM_SIOD, CAM_SIOC, CAM_Y9, CAM_Y8,
    CAM_Y7, CAM_Y6, CAM_Y5, CAM_Y4, CAM_Y3, CAM_Y2, CAM_VSYNC, CAM_HREF,
    CAM_PCLK, I2C_SDA, I2C_SCL, PIR, BUTTON_1,
]));

// The sentinel must never alias a real pin number.
const_assert!(NOT_CONNECTED < 0);
