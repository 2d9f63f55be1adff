// GPIO-Implementierung der Pad-Traits
//
// Vier LED-Ausgänge und vier Button-Eingänge, beide active-high.

use esp_hal::gpio::{Input, Output};
use senso_core::{PadButtons, PadColor, PadError, PadLights};

/// GPIO-basierte Pads (Production-Implementierung)
///
/// Die Array-Indizierung folgt `PadColor::index()`: Rot, Blau, Grün, Gelb.
/// Die Pin-Konfiguration (Level, Pull) übernimmt der Aufrufer beim
/// Erstellen der GPIO-Treiber, siehe `game_task`.
pub struct GpioPads<'a> {
    leds: [Output<'a>; 4],
    buttons: [Input<'a>; 4],
}

impl<'a> GpioPads<'a> {
    /// Erstellt Pads aus fertig konfigurierten GPIO-Treibern
    pub fn new(leds: [Output<'a>; 4], buttons: [Input<'a>; 4]) -> Self {
        Self { leds, buttons }
    }
}

impl PadLights for GpioPads<'_> {
    fn set(&mut self, color: PadColor, lit: bool) -> Result<(), PadError> {
        // GPIO-Schreiben kann auf dem ESP32 nicht fehlschlagen
        let led = &mut self.leds[color.index()];
        if lit {
            led.set_high();
        } else {
            led.set_low();
        }
        Ok(())
    }
}

impl PadButtons for GpioPads<'_> {
    fn sample(&mut self) -> Option<PadColor> {
        // Scan-Reihenfolge = Prioritäts-Reihenfolge (Rot zuerst)
        for color in PadColor::ALL {
            if self.buttons[color.index()].is_high() {
                return Some(color);
            }
        }
        None
    }
}
