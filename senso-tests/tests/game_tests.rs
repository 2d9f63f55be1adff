//! Integration Tests für die Senso-Spiellogik
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Implementierungen
//! der Hardware-Traits aus senso-core

use std::collections::VecDeque;

use rgb::RGB8;
use senso_core::{
    Game, GameEvent, GamePhase, InputOutcome, MAX_ROUNDS, PadButtons, PadColor, PadError,
    PadLights, SequenceFull, StatusLed,
};

// ============================================================================
// Mock Pad Lights
// ============================================================================

/// Zeichnet jede Schaltung als (Farbe, an/aus) auf
#[derive(Default)]
pub struct MockPadLights {
    pub writes: Vec<(PadColor, bool)>,
    pub fail_next_set: bool,
}

impl MockPadLights {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PadLights for MockPadLights {
    fn set(&mut self, color: PadColor, lit: bool) -> Result<(), PadError> {
        if self.fail_next_set {
            self.fail_next_set = false;
            return Err(PadError::WriteFailed);
        }

        self.writes.push((color, lit));
        Ok(())
    }
}

// ============================================================================
// Mock Pad Buttons
// ============================================================================

/// Spielt ein vorgegebenes Abtast-Skript ab, danach dauerhaft "kein Druck"
pub struct MockPadButtons {
    samples: VecDeque<Option<PadColor>>,
}

impl MockPadButtons {
    pub fn new(samples: &[Option<PadColor>]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl PadButtons for MockPadButtons {
    fn sample(&mut self) -> Option<PadColor> {
        self.samples.pop_front().unwrap_or(None)
    }
}

// ============================================================================
// Mock Status LED
// ============================================================================

#[derive(Default)]
pub struct MockStatusLed {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockStatusLed {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusLed for MockStatusLed {
    fn write(&mut self, color: RGB8) -> Result<(), PadError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(PadError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Test-Helper
// ============================================================================

/// Spielt eine Sequenz auf den Lights ab wie die Firmware-Wiedergabe:
/// pro Element genau ein An/Aus-Puls, in Speicher-Reihenfolge
fn pulse_sequence(lights: &mut impl PadLights, sequence: &[PadColor]) {
    for &color in sequence {
        lights.set(color, true).unwrap();
        lights.set(color, false).unwrap();
    }
}

/// Spielt eine Runde fehlerfrei nach (alle erwarteten Eingaben korrekt)
fn replay_round(game: &mut Game) {
    let sequence: Vec<PadColor> = game.sequence().to_vec();
    for (i, color) in sequence.iter().enumerate() {
        let outcome = game.submit(*color);
        if i + 1 == sequence.len() {
            assert_eq!(outcome, InputOutcome::RoundComplete);
        } else {
            assert_eq!(outcome, InputOutcome::Accepted);
        }
    }
}

// ============================================================================
// Tests: Mocks
// ============================================================================

#[test]
fn test_mock_pad_lights_records_writes() {
    let mut mock = MockPadLights::new();
    assert!(mock.writes.is_empty());

    mock.set(PadColor::Red, true).unwrap();
    mock.set(PadColor::Red, false).unwrap();

    assert_eq!(
        mock.writes,
        vec![(PadColor::Red, true), (PadColor::Red, false)]
    );
}

#[test]
fn test_mock_pad_lights_fail() {
    let mut mock = MockPadLights::new();
    mock.fail_next_set = true;

    let result = mock.set(PadColor::Blue, true);
    assert_eq!(result, Err(PadError::WriteFailed));
    assert!(mock.writes.is_empty());

    // Second write succeeds
    mock.set(PadColor::Blue, true).unwrap();
    assert_eq!(mock.writes, vec![(PadColor::Blue, true)]);
}

#[test]
fn test_mock_buttons_script_then_idle() {
    let mut mock = MockPadButtons::new(&[None, Some(PadColor::Green)]);

    assert_eq!(mock.sample(), None);
    assert_eq!(mock.sample(), Some(PadColor::Green));
    // Skript erschöpft: dauerhaft kein Druck
    assert_eq!(mock.sample(), None);
    assert_eq!(mock.sample(), None);
}

#[test]
fn test_mock_status_led_write() {
    let mut mock = MockStatusLed::new();
    let color = RGB8 { r: 10, g: 0, b: 0 };

    assert_eq!(mock.write_count, 0);
    assert_eq!(mock.last_color, None);

    mock.write(color).unwrap();

    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_color, Some(color));
}

#[test]
fn test_mock_status_led_fail() {
    let mut mock = MockStatusLed::new();
    mock.fail_next_write = true;

    let result = mock.write(RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(result, Err(PadError::WriteFailed));
    assert_eq!(mock.write_count, 0);
    assert_eq!(mock.last_color, None);
}

// ============================================================================
// Tests: PadLights Default-Methoden
// ============================================================================

#[test]
fn test_all_on_writes_every_pad_in_scan_order() {
    let mut mock = MockPadLights::new();
    mock.all_on().unwrap();

    assert_eq!(
        mock.writes,
        vec![
            (PadColor::Red, true),
            (PadColor::Blue, true),
            (PadColor::Green, true),
            (PadColor::Yellow, true),
        ]
    );
}

#[test]
fn test_all_off_writes_every_pad_in_scan_order() {
    let mut mock = MockPadLights::new();
    mock.all_off().unwrap();

    assert_eq!(
        mock.writes,
        vec![
            (PadColor::Red, false),
            (PadColor::Blue, false),
            (PadColor::Green, false),
            (PadColor::Yellow, false),
        ]
    );
}

#[test]
fn test_all_on_propagates_write_failure() {
    let mut mock = MockPadLights::new();
    mock.fail_next_set = true;

    assert_eq!(mock.all_on(), Err(PadError::WriteFailed));
    // Abbruch beim ersten Fehler, kein Pad wurde geschaltet
    assert!(mock.writes.is_empty());
}

// ============================================================================
// Tests: Sequenz-Wachstum
// ============================================================================

#[test]
fn test_sequence_length_equals_completed_rounds() {
    let mut game = Game::new();

    for n in 1..=10 {
        game.extend(n as u32).unwrap();
        assert_eq!(game.round(), n);
        replay_round(&mut game);
    }

    assert_eq!(game.round(), 10);
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn test_playback_drives_one_pulse_per_element_in_stored_order() {
    let mut game = Game::new();
    for entropy in [0, 1, 2, 3, 0] {
        game.extend(entropy).unwrap();
    }

    let mut lights = MockPadLights::new();
    pulse_sequence(&mut lights, game.sequence());

    // Genau N Pulse (je ein An- und ein Aus-Schreiben) in Speicher-Reihenfolge
    assert_eq!(lights.writes.len(), 2 * game.round());
    for (i, &color) in game.sequence().iter().enumerate() {
        assert_eq!(lights.writes[2 * i], (color, true));
        assert_eq!(lights.writes[2 * i + 1], (color, false));
    }
}

// ============================================================================
// Tests: Mismatch und terminale Phasen
// ============================================================================

#[test]
fn test_mismatch_ends_round_without_reading_rest() {
    let mut game = Game::new();
    for entropy in [0, 1, 2] {
        game.extend(entropy).unwrap(); // Rot, Blau, Grün
    }

    assert_eq!(game.submit(PadColor::Red), InputOutcome::Accepted);
    assert_eq!(game.submit(PadColor::Yellow), InputOutcome::Mismatch);
    assert!(game.has_lost());

    // Position 2 wurde nie verglichen: auch die dort korrekte Farbe
    // wird jetzt verworfen
    assert_eq!(game.submit(PadColor::Green), InputOutcome::Mismatch);
    assert_eq!(game.round(), 3);
}

#[test]
fn test_has_lost_never_reverts() {
    let mut game = Game::new();
    game.extend(0).unwrap();
    game.submit(PadColor::Blue);
    assert!(game.has_lost());

    for color in PadColor::ALL {
        game.submit(color);
        assert!(game.has_lost());
    }
    assert_eq!(game.extend(0), Err(SequenceFull));
    assert!(game.has_lost());
}

#[test]
fn test_capacity_overflow_becomes_won() {
    let mut game = Game::new();
    for n in 0..MAX_ROUNDS {
        game.extend(n as u32).unwrap();
        replay_round(&mut game);
    }
    assert_eq!(game.round(), MAX_ROUNDS);

    // 26. Verlängerung: explizit abgelehnt, Phase wechselt nach Won
    assert_eq!(game.extend(0), Err(SequenceFull));
    assert_eq!(game.phase(), GamePhase::Won);

    // Won ist absorbierend
    assert_eq!(game.submit(PadColor::Red), InputOutcome::Mismatch);
    assert_eq!(game.extend(1), Err(SequenceFull));
    assert_eq!(game.phase(), GamePhase::Won);
}

// ============================================================================
// Tests: Spielszenarien
// ============================================================================

#[test]
fn test_scenario_red_sequence_pressed_red_succeeds() {
    let mut game = Game::new();
    let first = game.extend(0).unwrap();
    assert_eq!(first, PadColor::Red);

    assert_eq!(game.submit(PadColor::Red), InputOutcome::RoundComplete);
    assert_eq!(game.phase(), GamePhase::Playing);

    // Nächste Runde: Sequenz hat Länge 2
    game.extend(3).unwrap();
    assert_eq!(game.round(), 2);
    assert_eq!(game.sequence()[0], PadColor::Red);
}

#[test]
fn test_scenario_red_blue_pressed_red_green_loses() {
    let mut game = Game::new();
    assert_eq!(game.extend(0).unwrap(), PadColor::Red);
    assert_eq!(game.extend(1).unwrap(), PadColor::Blue);

    assert_eq!(game.submit(PadColor::Red), InputOutcome::Accepted);
    assert_eq!(game.submit(PadColor::Green), InputOutcome::Mismatch);
    assert!(game.has_lost());
}

// ============================================================================
// Tests: PadColor
// ============================================================================

#[test]
fn test_from_entropy_maps_uniformly() {
    assert_eq!(PadColor::from_entropy(0), PadColor::Red);
    assert_eq!(PadColor::from_entropy(1), PadColor::Blue);
    assert_eq!(PadColor::from_entropy(2), PadColor::Green);
    assert_eq!(PadColor::from_entropy(3), PadColor::Yellow);
    assert_eq!(PadColor::from_entropy(4), PadColor::Red);
    assert_eq!(PadColor::from_entropy(u32::MAX), PadColor::Yellow);
}

#[test]
fn test_index_roundtrip() {
    for color in PadColor::ALL {
        assert_eq!(PadColor::ALL[color.index()], color);
    }
}

#[test]
fn test_pad_color_names() {
    assert_eq!(PadColor::Red.name(), "Rot");
    assert_eq!(PadColor::Blue.name(), "Blau");
    assert_eq!(PadColor::Green.name(), "Grün");
    assert_eq!(PadColor::Yellow.name(), "Gelb");
}

#[test]
fn test_pad_color_rgb() {
    assert_eq!(PadColor::Red.rgb(10), RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(PadColor::Blue.rgb(10), RGB8 { r: 0, g: 0, b: 10 });
    assert_eq!(PadColor::Green.rgb(10), RGB8 { r: 0, g: 10, b: 0 });
    assert_eq!(PadColor::Yellow.rgb(10), RGB8 { r: 10, g: 10, b: 0 });
}

// ============================================================================
// Tests: GameEvent → Status-LED Mapping
// ============================================================================

#[test]
fn test_status_rgb_shows_pad_colors() {
    let shown = GameEvent::PadShown {
        color: PadColor::Blue,
    };
    let pressed = GameEvent::PadPressed {
        color: PadColor::Yellow,
    };
    assert_eq!(shown.status_rgb(10), PadColor::Blue.rgb(10));
    assert_eq!(pressed.status_rgb(10), PadColor::Yellow.rgb(10));
}

#[test]
fn test_status_rgb_game_end_colors() {
    let lost = GameEvent::GameLost { round: 3 };
    let won = GameEvent::GameWon { rounds: 25 };
    assert_eq!(lost.status_rgb(10), RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(won.status_rgb(10), RGB8 { r: 0, g: 10, b: 0 });
}

#[test]
fn test_status_rgb_off_between_rounds() {
    let started = GameEvent::RoundStarted { round: 1 };
    let round_won = GameEvent::RoundWon { round: 1 };
    assert_eq!(started.status_rgb(10), RGB8 { r: 0, g: 0, b: 0 });
    assert_eq!(round_won.status_rgb(10), RGB8 { r: 0, g: 0, b: 0 });
}

// ============================================================================
// Tests: Eingabe-Skript gegen das Spiel
// ============================================================================

#[test]
fn test_scripted_buttons_drive_a_full_round() {
    let mut game = Game::new();
    game.extend(2).unwrap(); // Grün

    // Abtast-Skript wie es die Firmware sieht: Ruhe, Druck, Loslassen
    let mut buttons = MockPadButtons::new(&[
        None,
        None,
        Some(PadColor::Green),
        Some(PadColor::Green),
        None,
    ]);

    // Pollen bis zum ersten stabilen Druck
    let pressed = loop {
        if let Some(color) = buttons.sample() {
            break color;
        }
    };

    assert_eq!(game.submit(pressed), InputOutcome::RoundComplete);
    assert_eq!(buttons.remaining(), 2);
}
