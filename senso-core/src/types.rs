//! Core Types für das Senso-Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Die vier bespielbaren Pads des Geräts
///
/// Die Deklarations-Reihenfolge ist zugleich die Scan-Priorität beim
/// Button-Lesen: werden mehrere Buttons im selben Abtast-Zeitpunkt
/// gehalten, gewinnt Rot vor Blau vor Grün vor Gelb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PadColor {
    /// Alle Pads in Scan-Reihenfolge
    pub const ALL: [PadColor; 4] = [
        PadColor::Red,
        PadColor::Blue,
        PadColor::Green,
        PadColor::Yellow,
    ];

    /// Stabiler Index 0..4 (Position in den Pin-Arrays der Firmware)
    pub const fn index(self) -> usize {
        match self {
            PadColor::Red => 0,
            PadColor::Blue => 1,
            PadColor::Green => 2,
            PadColor::Yellow => 3,
        }
    }

    /// Wählt ein Pad uniform aus einem Hardware-Entropie-Wort
    pub const fn from_entropy(word: u32) -> Self {
        Self::ALL[(word % 4) as usize]
    }

    /// Anzeigename (deutsch, wie die Pads auf dem Gerät beschriftet sind)
    pub const fn name(self) -> &'static str {
        match self {
            PadColor::Red => "Rot",
            PadColor::Blue => "Blau",
            PadColor::Green => "Grün",
            PadColor::Yellow => "Gelb",
        }
    }

    /// RGB-Darstellung für die Status-LED bei gegebener Helligkeit
    pub const fn rgb(self, brightness: u8) -> RGB8 {
        match self {
            PadColor::Red => RGB8 {
                r: brightness,
                g: 0,
                b: 0,
            },
            PadColor::Blue => RGB8 {
                r: 0,
                g: 0,
                b: brightness,
            },
            PadColor::Green => RGB8 {
                r: 0,
                g: brightness,
                b: 0,
            },
            PadColor::Yellow => RGB8 {
                r: brightness,
                g: brightness,
                b: 0,
            },
        }
    }
}

/// Spielfortschritts-Broadcast
///
/// Wird vom Game-Task über den PubSubChannel an den Status-LED-Task
/// gesendet. Jede beobachtbare Zustandsänderung erzeugt genau ein Event.
#[derive(Clone, Copy)]
pub enum GameEvent {
    /// Sequenz wurde um eine Farbe verlängert, Wiedergabe beginnt
    RoundStarted { round: usize },
    /// Ein Sequenz-Element wird gerade auf dem Pad gezeigt
    PadShown { color: PadColor },
    /// Spieler hält gerade ein Pad gedrückt
    PadPressed { color: PadColor },
    /// Runde komplett korrekt nachgespielt
    RoundWon { round: usize },
    /// Falsches Pad gedrückt - Spiel ist verloren
    GameLost { round: usize },
    /// Maximale Sequenzlänge erreicht - Spiel ist gewonnen
    GameWon { rounds: usize },
}

impl GameEvent {
    /// Farbe der Status-LED für dieses Event
    ///
    /// Wiedergabe und gehaltene Buttons spiegeln die Pad-Farbe, Spielende
    /// zeigt Rot (verloren) bzw. Grün (gewonnen). Zwischen den Runden
    /// bleibt die LED aus.
    pub const fn status_rgb(self, brightness: u8) -> RGB8 {
        match self {
            GameEvent::PadShown { color } | GameEvent::PadPressed { color } => {
                color.rgb(brightness)
            }
            GameEvent::GameLost { .. } => PadColor::Red.rgb(brightness),
            GameEvent::GameWon { .. } => PadColor::Green.rgb(brightness),
            GameEvent::RoundStarted { .. } | GameEvent::RoundWon { .. } => RGB8 { r: 0, g: 0, b: 0 },
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PadColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GameEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            GameEvent::RoundStarted { round } => {
                defmt::write!(fmt, "RoundStarted {{ round: {} }}", round)
            }
            GameEvent::PadShown { color } => {
                defmt::write!(fmt, "PadShown {{ color: {} }}", color)
            }
            GameEvent::PadPressed { color } => {
                defmt::write!(fmt, "PadPressed {{ color: {} }}", color)
            }
            GameEvent::RoundWon { round } => {
                defmt::write!(fmt, "RoundWon {{ round: {} }}", round)
            }
            GameEvent::GameLost { round } => {
                defmt::write!(fmt, "GameLost {{ round: {} }}", round)
            }
            GameEvent::GameWon { rounds } => {
                defmt::write!(fmt, "GameWon {{ rounds: {} }}", rounds)
            }
        }
    }
}
