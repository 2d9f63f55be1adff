// Status-LED Writer - WS2812 auf dem DevKit via RMT Peripheral
//
// Implementiert das StatusLed-Trait aus senso-core für die echte
// Hardware. Der Mock für Host-Tests liegt in senso-tests.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use senso_core::{PadError, StatusLed};
use smart_leds_trait::SmartLedsWrite;

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const STATUS_LED_BUFFER_SIZE: usize = 25;

/// Status-LED auf dem DevKit (Production-Implementierung)
///
/// Nutzt das ESP32 RMT Peripheral um die WS2812 anzusteuern.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtStatusLed<'a> {
    led: SmartLedsAdapter<'a, STATUS_LED_BUFFER_SIZE>,
}

impl<'a> RmtStatusLed<'a> {
    /// Erstellt eine neue RmtStatusLed
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; STATUS_LED_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self { led }
    }
}

impl<'a> StatusLed for RmtStatusLed<'a> {
    fn write(&mut self, color: RGB8) -> Result<(), PadError> {
        self.led
            .write([color].into_iter())
            .map_err(|_| PadError::WriteFailed)
    }
}
