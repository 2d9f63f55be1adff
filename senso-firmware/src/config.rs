// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Pad-LED Konfiguration
// ============================================================================
//
// Die vier Pad-LEDs sind active-high an eigenen GPIOs angeschlossen.
// Die Zuordnung Farbe → Array-Index folgt PadColor::index().

/// GPIO-Pin für die rote Pad-LED
pub const RED_LED_GPIO_PIN: u8 = 18;

/// GPIO-Pin für die blaue Pad-LED
pub const BLUE_LED_GPIO_PIN: u8 = 19;

/// GPIO-Pin für die grüne Pad-LED
pub const GREEN_LED_GPIO_PIN: u8 = 20;

/// GPIO-Pin für die gelbe Pad-LED
pub const YELLOW_LED_GPIO_PIN: u8 = 21;

// ============================================================================
// Button Konfiguration
// ============================================================================
//
// Die vier Buttons schalten gegen VCC (active-high) und nutzen den
// internen Pull-Down des ESP32-C6.

/// GPIO-Pin für den roten Button
pub const RED_BUTTON_GPIO_PIN: u8 = 4;

/// GPIO-Pin für den blauen Button
pub const BLUE_BUTTON_GPIO_PIN: u8 = 5;

/// GPIO-Pin für den grünen Button
pub const GREEN_BUTTON_GPIO_PIN: u8 = 6;

/// GPIO-Pin für den gelben Button
pub const YELLOW_BUTTON_GPIO_PIN: u8 = 7;

/// Abtast-Intervall beim Warten auf Eingaben in Millisekunden
pub const INPUT_POLL_INTERVAL_MS: u64 = 10;

// ============================================================================
// Spielablauf-Timing
// ============================================================================

/// Schrittdauer der Einschalt-Animation in Millisekunden
pub const STARTUP_STEP_MS: u64 = 150;

/// Pause zwischen Sequenz-Verlängerung und Wiedergabe in Millisekunden
pub const ROUND_PAUSE_MS: u64 = 600;

/// Leuchtdauer eines Sequenz-Elements bei der Wiedergabe in Millisekunden
pub const PLAYBACK_ON_MS: u64 = 420;

/// Dunkelpause zwischen zwei Sequenz-Elementen in Millisekunden
pub const PLAYBACK_GAP_MS: u64 = 180;

/// Haltedauer "alle Pads an" der Verlier-Animation in Millisekunden
pub const LOSS_HOLD_MS: u64 = 900;

/// Schrittdauer beim einzelnen Ausschalten der Pads in Millisekunden
pub const LOSS_STEP_MS: u64 = 300;

/// Pause zwischen zwei Durchläufen der Verlier-Animation in Millisekunden
pub const LOSS_REPLAY_PAUSE_MS: u64 = 600;

/// Blinkdauer (an bzw. aus) der Gewinn-Animation in Millisekunden
pub const WIN_BLINK_MS: u64 = 200;

/// Anzahl gemeinsamer Blinks pro Durchlauf der Gewinn-Animation
pub const WIN_BLINK_COUNT: u32 = 3;

/// Pause zwischen zwei Durchläufen der Gewinn-Animation in Millisekunden
pub const WIN_REPLAY_PAUSE_MS: u64 = 600;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED (WS2812 auf dem DevKit)
pub const STATUS_LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const STATUS_LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const STATUS_LED_COUNT: usize = 1;
