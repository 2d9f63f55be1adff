// Status-LED Task - spiegelt den Spielfortschritt auf der Onboard-WS2812
use defmt::{error, info};
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;

use crate::GameEventSubscriber;
use crate::config::{RMT_CLOCK_MHZ, STATUS_LED_BRIGHTNESS};
use crate::hal::RmtStatusLed;
use senso_core::StatusLed;

/// Status-LED Logic - Business Logic hinter dem StatusLed-Trait
///
/// Übersetzt Spiel-Events in Farben auf der Status-LED (Mapping siehe
/// `GameEvent::status_rgb`): gezeigtes bzw. gedrücktes Pad in dessen
/// Farbe, Rot bei verlorenem und Grün bei gewonnenem Spiel, sonst aus.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `S: StatusLed` ermöglicht:
/// - Real Hardware (RmtStatusLed) im Production-Code
/// - Mock Implementation (MockStatusLed) in senso-tests
///
/// # Parameter
/// - `led`: Status-LED Writer (Hardware oder Mock)
/// - `events`: PubSub Subscriber für Spielfortschritts-Broadcasts
pub async fn status_logic<S: StatusLed>(mut led: S, mut events: GameEventSubscriber) {
    // LED aus bis zum ersten Event
    if led.write(RGB8::default()).is_err() {
        error!("Failed to write status LED");
    }

    loop {
        let event = events.next_message_pure().await;
        info!("Status update: {}", event);

        if led.write(event.status_rgb(STATUS_LED_BRIGHTNESS)).is_err() {
            error!("Failed to write status LED");
        }
    }
}

/// Status-LED Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die trait-basierte `status_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `events`: PubSub Subscriber für Spielfortschritts-Broadcasts
#[embassy_executor::task]
pub async fn status_led_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    events: GameEventSubscriber,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    // Hardware initialisieren: RmtStatusLed kapselt RMT + SmartLED
    let led = RmtStatusLed::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    status_logic(led, events).await;
}
