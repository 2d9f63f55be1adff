// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von senso-core
pub use senso_core::{
    Game, GameEvent, GamePhase, InputOutcome, PadButtons, PadColor, PadError, PadLights,
    StatusLed,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Publisher<'static, NoopRawMutex, GameEvent, 4, 2, 1>
// Nutze:  GameEventPublisher

/// PubSubChannel für Spielfortschritts-Broadcasts
/// - 4: Nachrichten-Kapazität im Queue (Wiedergabe erzeugt Events in schneller Folge)
/// - 2: Maximale Anzahl Subscribers (Status-LED + Reserve)
/// - 1: Maximale Anzahl Publishers (nur der Game-Task)
pub type GameEventChannel = PubSubChannel<NoopRawMutex, GameEvent, 4, 2, 1>;

/// Publisher für Spielfortschritts-Broadcasts
/// Erzeugt aus GameEventChannel
pub type GameEventPublisher = Publisher<'static, NoopRawMutex, GameEvent, 4, 2, 1>;

/// Subscriber für Spielfortschritts-Broadcasts
/// Empfängt Broadcasts vom Game-Task
pub type GameEventSubscriber = Subscriber<'static, NoopRawMutex, GameEvent, 4, 2, 1>;
