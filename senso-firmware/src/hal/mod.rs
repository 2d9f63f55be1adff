// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus senso-core für die
// echte Hardware. Mocks für Host-Tests liegen in senso-tests.

pub mod pads;
pub mod status_led;

pub use pads::GpioPads;
pub use status_led::{RmtStatusLed, STATUS_LED_BUFFER_SIZE};
