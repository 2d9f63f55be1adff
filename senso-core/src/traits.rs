//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::PadColor;

/// Fehler-Typ für Pad- und LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadError {
    WriteFailed,
}

/// Trait für die vier Pad-LEDs
///
/// # Implementierungen
/// - **Production:** GpioPads (ESP32 GPIO-Ausgänge, active-high)
/// - **Testing:** MockPadLights (in-memory Mock)
pub trait PadLights: Send {
    /// Schaltet die LED eines Pads ein oder aus
    ///
    /// # Fehlerbehandlung
    /// Gibt `PadError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set(&mut self, color: PadColor, lit: bool) -> Result<(), PadError>;

    /// Schaltet alle vier Pad-LEDs ein (Scan-Reihenfolge)
    fn all_on(&mut self) -> Result<(), PadError> {
        for color in PadColor::ALL {
            self.set(color, true)?;
        }
        Ok(())
    }

    /// Schaltet alle vier Pad-LEDs aus (Scan-Reihenfolge)
    fn all_off(&mut self) -> Result<(), PadError> {
        for color in PadColor::ALL {
            self.set(color, false)?;
        }
        Ok(())
    }
}

/// Trait für die vier Pad-Buttons
///
/// Ein Aufruf entspricht genau einem Abtast-Zeitpunkt; das Polling-Intervall
/// bestimmt der Aufrufer. Bei gleichzeitig gehaltenen Buttons gewinnt die
/// Scan-Reihenfolge Rot > Blau > Grün > Gelb.
pub trait PadButtons: Send {
    /// Liest alle vier Eingänge einmal und meldet das gedrückte Pad
    fn sample(&mut self) -> Option<PadColor>;
}

/// Trait für die Status-LED (WS2812 auf dem DevKit)
///
/// # Implementierungen
/// - **Production:** RmtStatusLed (ESP32 RMT Peripheral)
/// - **Testing:** MockStatusLed (in-memory Mock)
pub trait StatusLed: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `PadError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), PadError>;
}
