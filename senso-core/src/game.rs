//! Pure Spiellogik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use heapless::Vec;

use crate::types::PadColor;

/// Maximale Sequenzlänge (= maximale Rundenzahl)
pub const MAX_ROUNDS: usize = 25;

/// Phase des Spiels
///
/// `Lost` und `Won` sind terminal: innerhalb eines Power-Cycles führt
/// kein Übergang zurück nach `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Spiel läuft, Sequenz wächst pro Runde um ein Element
    Playing,
    /// Falsche Eingabe - Gerät zeigt nur noch die Verlier-Animation
    Lost,
    /// Sequenz hat volle Kapazität erreicht
    Won,
}

/// Ergebnis einer einzelnen Spieler-Eingabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Korrekt, weitere Eingaben der Runde stehen aus
    Accepted,
    /// Korrekt und letztes Element der Runde
    RoundComplete,
    /// Falsches Pad - Spiel ist verloren
    Mismatch,
}

/// Sequenz ist bereits bei voller Kapazität
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceFull;

/// Spielzustand: Sequenz, Eingabe-Cursor und Phase
///
/// Reiner Zustandsautomat ohne Hardware- oder Timing-Abhängigkeit.
/// Die Firmware treibt ihn über `extend` und `submit`; Tests füttern
/// synthetische Eingaben statt echter Button-Events.
pub struct Game {
    sequence: Vec<PadColor, MAX_ROUNDS>,
    cursor: usize,
    phase: GamePhase,
}

impl Game {
    /// Neues Spiel: leere Sequenz, Phase `Playing`
    pub const fn new() -> Self {
        Self {
            sequence: Vec::new(),
            cursor: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Rundennummer = aktuelle Sequenzlänge
    pub fn round(&self) -> usize {
        self.sequence.len()
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// `true` sobald eine Eingabe falsch war
    pub fn has_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    /// Sequenz in Wiedergabe-Reihenfolge
    pub fn sequence(&self) -> &[PadColor] {
        &self.sequence
    }

    /// Verlängert die Sequenz um eine uniform gewählte Farbe und setzt
    /// den Eingabe-Cursor an den Rundenanfang zurück.
    ///
    /// Bei voller Kapazität wechselt die Phase nach `Won` und die Sequenz
    /// bleibt unverändert. In terminalen Phasen wächst nichts mehr.
    pub fn extend(&mut self, entropy: u32) -> Result<PadColor, SequenceFull> {
        if self.phase != GamePhase::Playing {
            return Err(SequenceFull);
        }
        let color = PadColor::from_entropy(entropy);
        if self.sequence.push(color).is_err() {
            self.phase = GamePhase::Won;
            return Err(SequenceFull);
        }
        self.cursor = 0;
        Ok(color)
    }

    /// Prüft eine Spieler-Eingabe gegen das erwartete Sequenz-Element.
    ///
    /// Beim ersten Mismatch wechselt die Phase nach `Lost`; der Cursor
    /// bleibt stehen, die restlichen Elemente der Runde werden nicht mehr
    /// gelesen. Eingaben außerhalb der Phase `Playing` werden verworfen
    /// und ändern den Zustand nicht.
    pub fn submit(&mut self, pressed: PadColor) -> InputOutcome {
        if self.phase != GamePhase::Playing {
            return InputOutcome::Mismatch;
        }
        let Some(&expected) = self.sequence.get(self.cursor) else {
            return InputOutcome::Mismatch;
        };
        if pressed != expected {
            self.phase = GamePhase::Lost;
            return InputOutcome::Mismatch;
        }
        self.cursor += 1;
        if self.cursor == self.sequence.len() {
            InputOutcome::RoundComplete
        } else {
            InputOutcome::Accepted
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
