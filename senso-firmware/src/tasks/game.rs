// Game Task - treibt das Senso-Spiel über die Pad-Hardware
use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::rng::Rng;

use crate::GameEventPublisher;
use crate::config::{
    INPUT_POLL_INTERVAL_MS, LOSS_HOLD_MS, LOSS_REPLAY_PAUSE_MS, LOSS_STEP_MS, PLAYBACK_GAP_MS,
    PLAYBACK_ON_MS, ROUND_PAUSE_MS, STARTUP_STEP_MS, WIN_BLINK_COUNT, WIN_BLINK_MS,
    WIN_REPLAY_PAUSE_MS,
};
use crate::hal::GpioPads;
use senso_core::{Game, GameEvent, GamePhase, InputOutcome, PadButtons, PadColor, PadLights};

/// Spiel-Logik - Business Logic hinter den Pad-Traits
///
/// Treibt den kompletten Spielablauf:
/// - Einschalt-Animation, danach Runde für Runde
/// - Pro Runde: Sequenz verlängern, abspielen, Eingaben einsammeln
/// - Nach einem Mismatch läuft die Verlier-Animation endlos
/// - Bei voller Sequenz (25 Runden) läuft die Gewinn-Animation endlos
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `P: PadLights + PadButtons` ermöglicht:
/// - Real Hardware (GpioPads) im Production-Code
/// - Mock Implementation (MockPadLights etc.) in senso-tests
///
/// # Parameter
/// - `pads`: Pad-LEDs und -Buttons (Hardware oder Mock)
/// - `rng`: Hardware-RNG für die Sequenz-Entropie
/// - `events`: PubSub Publisher für Spielfortschritts-Broadcasts
pub async fn game_logic<P>(mut pads: P, rng: Rng, events: GameEventPublisher)
where
    P: PadLights + PadButtons,
{
    let mut game = Game::new();

    startup_show(&mut pads).await;
    info!("Game ready, starting first round");

    // Hauptschleife: eine Iteration = eine Runde bzw. ein Animations-Durchlauf
    loop {
        match game.phase() {
            GamePhase::Playing => {
                run_round(&mut pads, &mut game, &rng, &events).await;
            }
            GamePhase::Lost => {
                loss_show(&mut pads).await;
                Timer::after(Duration::from_millis(LOSS_REPLAY_PAUSE_MS)).await;
            }
            GamePhase::Won => {
                win_show(&mut pads).await;
                Timer::after(Duration::from_millis(WIN_REPLAY_PAUSE_MS)).await;
            }
        }
    }
}

/// Eine Runde: Sequenz verlängern, abspielen, Eingaben prüfen
async fn run_round<P>(pads: &mut P, game: &mut Game, rng: &Rng, events: &GameEventPublisher)
where
    P: PadLights + PadButtons,
{
    match game.extend(rng.random()) {
        Ok(color) => {
            info!("Round {}: sequence extended with {}", game.round(), color);
            events.publish_immediate(GameEvent::RoundStarted { round: game.round() });
        }
        Err(_full) => {
            // Kapazität erschöpft: Phase ist jetzt Won
            info!("Maximum sequence length reached - won after {} rounds", game.round());
            events.publish_immediate(GameEvent::GameWon { rounds: game.round() });
            return;
        }
    }

    Timer::after(Duration::from_millis(ROUND_PAUSE_MS)).await;
    play_sequence(pads, game.sequence(), events).await;
    collect_inputs(pads, game, events).await;
}

/// Spielt die gespeicherte Sequenz auf den Pad-LEDs ab
///
/// Pro Element genau ein Puls, in Speicher-Reihenfolge:
/// LED an, Haltezeit, LED aus, Dunkelpause.
async fn play_sequence<P: PadLights>(
    pads: &mut P,
    sequence: &[PadColor],
    events: &GameEventPublisher,
) {
    for &color in sequence {
        events.publish_immediate(GameEvent::PadShown { color });
        if pads.set(color, true).is_err() {
            error!("Failed to drive pad LED {}", color);
        }
        Timer::after(Duration::from_millis(PLAYBACK_ON_MS)).await;
        if pads.set(color, false).is_err() {
            error!("Failed to clear pad LED {}", color);
        }
        Timer::after(Duration::from_millis(PLAYBACK_GAP_MS)).await;
    }
}

/// Liest die Spieler-Eingaben einer Runde und prüft sie elementweise
///
/// Beim ersten Mismatch endet die Runde sofort; die restlichen
/// erwarteten Eingaben werden nicht mehr gelesen.
async fn collect_inputs<P>(pads: &mut P, game: &mut Game, events: &GameEventPublisher)
where
    P: PadLights + PadButtons,
{
    loop {
        let pressed = await_press(pads).await;
        events.publish_immediate(GameEvent::PadPressed { color: pressed });

        match game.submit(pressed) {
            InputOutcome::Accepted => {}
            InputOutcome::RoundComplete => {
                info!("Round {} complete", game.round());
                events.publish_immediate(GameEvent::RoundWon { round: game.round() });
                return;
            }
            InputOutcome::Mismatch => {
                warn!("Wrong pad {} - game over in round {}", pressed, game.round());
                events.publish_immediate(GameEvent::GameLost { round: game.round() });
                return;
            }
        }
    }
}

/// Wartet auf einen Tastendruck und klassifiziert ihn
///
/// Pollt die Eingänge im festen Intervall, bis ein Pad auf zwei
/// aufeinanderfolgenden Abtastungen gedrückt ist (Entprellung). Die
/// Pad-LED leuchtet solange der Button gehalten wird; erst nach dem
/// Loslassen wird die Farbe gemeldet. Kein Timeout - das Gerät wartet
/// beliebig lange auf den Spieler.
async fn await_press<P>(pads: &mut P) -> PadColor
where
    P: PadLights + PadButtons,
{
    let color = loop {
        let first = pads.sample();
        Timer::after(Duration::from_millis(INPUT_POLL_INTERVAL_MS)).await;
        if let Some(color) = first
            && pads.sample() == Some(color)
        {
            break color;
        }
    };

    if pads.set(color, true).is_err() {
        error!("Failed to drive pad LED {}", color);
    }

    // Blockiert bis zum Loslassen
    while pads.sample() == Some(color) {
        Timer::after(Duration::from_millis(INPUT_POLL_INTERVAL_MS)).await;
    }

    if pads.set(color, false).is_err() {
        error!("Failed to clear pad LED {}", color);
    }

    color
}

/// Einschalt-Animation: Pad-LEDs nacheinander an, dann alle aus
async fn startup_show<P: PadLights>(pads: &mut P) {
    for color in PadColor::ALL {
        if pads.set(color, true).is_err() {
            error!("Failed to drive pad LED {}", color);
        }
        Timer::after(Duration::from_millis(STARTUP_STEP_MS)).await;
    }
    if pads.all_off().is_err() {
        error!("Failed to clear pad LEDs");
    }
}

/// Verlier-Animation: alle Pads an, halten, dann einzeln wieder aus
async fn loss_show<P: PadLights>(pads: &mut P) {
    if pads.all_on().is_err() {
        error!("Failed to drive pad LEDs");
    }
    Timer::after(Duration::from_millis(LOSS_HOLD_MS)).await;
    for color in PadColor::ALL {
        if pads.set(color, false).is_err() {
            error!("Failed to clear pad LED {}", color);
        }
        Timer::after(Duration::from_millis(LOSS_STEP_MS)).await;
    }
}

/// Gewinn-Animation: alle Pads blinken gemeinsam
async fn win_show<P: PadLights>(pads: &mut P) {
    for _ in 0..WIN_BLINK_COUNT {
        if pads.all_on().is_err() {
            error!("Failed to drive pad LEDs");
        }
        Timer::after(Duration::from_millis(WIN_BLINK_MS)).await;
        if pads.all_off().is_err() {
            error!("Failed to clear pad LEDs");
        }
        Timer::after(Duration::from_millis(WIN_BLINK_MS)).await;
    }
}

/// Game Task - Embassy Task für den Spielablauf
///
/// Dieser Task übernimmt die Hardware-Initialisierung (GPIOs, RNG) und
/// ruft dann die trait-basierte `game_logic()` Funktion auf.
///
/// # Parameter
/// - `red_led` .. `yellow_led`: GPIO Peripherals der vier Pad-LEDs
/// - `red_button` .. `yellow_button`: GPIO Peripherals der vier Buttons
/// - `events`: PubSub Publisher für Spielfortschritts-Broadcasts
#[embassy_executor::task]
#[allow(clippy::too_many_arguments)]
pub async fn game_task(
    red_led: esp_hal::peripherals::GPIO18<'static>,
    blue_led: esp_hal::peripherals::GPIO19<'static>,
    green_led: esp_hal::peripherals::GPIO20<'static>,
    yellow_led: esp_hal::peripherals::GPIO21<'static>,
    red_button: esp_hal::peripherals::GPIO4<'static>,
    blue_button: esp_hal::peripherals::GPIO5<'static>,
    green_button: esp_hal::peripherals::GPIO6<'static>,
    yellow_button: esp_hal::peripherals::GPIO7<'static>,
    events: GameEventPublisher,
) {
    // Pad-LEDs: active-high, starten aus
    let leds = [
        Output::new(red_led, Level::Low, OutputConfig::default()),
        Output::new(blue_led, Level::Low, OutputConfig::default()),
        Output::new(green_led, Level::Low, OutputConfig::default()),
        Output::new(yellow_led, Level::Low, OutputConfig::default()),
    ];

    // Buttons: active-high mit internem Pull-Down
    let button_config = InputConfig::default().with_pull(Pull::Down);
    let buttons = [
        Input::new(red_button, button_config),
        Input::new(blue_button, button_config),
        Input::new(green_button, button_config),
        Input::new(yellow_button, button_config),
    ];

    let pads = GpioPads::new(leds, buttons);

    // Hardware-RNG liefert die Entropie für die Sequenz-Farben
    let rng = Rng::new();

    game_logic(pads, rng, events).await;
}
