//! Game event types and the sink trait.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::core::{MoveRecord, Pile, PileId, PlayerId};

/// Payload-free event discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    GameReset,
    PileAdded,
    PileRemoved,
    MoveMade,
    GameOver,
}

impl EventKind {
    /// Every kind, in the order a reset followed by a game-ending move emits them.
    pub const ALL: [EventKind; 5] = [
        EventKind::GameReset,
        EventKind::PileRemoved,
        EventKind::PileAdded,
        EventKind::MoveMade,
        EventKind::GameOver,
    ];
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::GameReset => "GameReset",
            EventKind::PileAdded => "PileAdded",
            EventKind::PileRemoved => "PileRemoved",
            EventKind::MoveMade => "MoveMade",
            EventKind::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

/// Something that happened in the game.
///
/// A successful move emits, in order: `PileRemoved`, two `PileAdded`,
/// `MoveMade` and, if the move ended the game, `GameOver`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The table was repopulated.
    GameReset {
        /// The new piles, in allocation order.
        piles: Vec<Pile>,
        /// Who moves first.
        starting_player: PlayerId,
    },

    /// A pile became active.
    PileAdded(Pile),

    /// A pile was split and is no longer active.
    PileRemoved(PileId),

    /// A split was applied.
    MoveMade {
        mover: PlayerId,
        old_pile: Pile,
        new_pile_a: Pile,
        new_pile_b: Pile,
    },

    /// No pile can be split any more.
    GameOver { winner: PlayerId },
}

impl GameEvent {
    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::GameReset { .. } => EventKind::GameReset,
            GameEvent::PileAdded(_) => EventKind::PileAdded,
            GameEvent::PileRemoved(_) => EventKind::PileRemoved,
            GameEvent::MoveMade { .. } => EventKind::MoveMade,
            GameEvent::GameOver { .. } => EventKind::GameOver,
        }
    }

    /// The `MoveMade` event for an applied move.
    #[must_use]
    pub fn move_made(record: &MoveRecord) -> Self {
        GameEvent::MoveMade {
            mover: record.mover,
            old_pile: record.parent,
            new_pile_a: record.first,
            new_pile_b: record.second,
        }
    }
}

/// Receiver of engine notifications.
///
/// Delivery must complete before `emit` returns.
pub trait EventSink {
    /// Deliver one event.
    fn emit(&mut self, event: GameEvent);
}

/// Discards every event.
impl EventSink for () {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Queues events for later inspection.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Forwards events over a channel. A hung-up receiver is ignored.
impl EventSink for Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        if self.send(event).is_err() {
            tracing::trace!("event receiver dropped");
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
