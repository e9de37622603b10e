//! Notifications from the engine to its presentation layer.
//!
//! The engine never knows who is listening. It hands every notification to
//! an [`EventSink`] before the triggering command returns, so observers see
//! a consistent state.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: The five notification kinds
//! - [`EventKind`]: Payload-free discriminant for filtering
//! - [`EventSink`]: The narrow observer capability the engine depends on
//! - [`EventBus`]: Callback subscriptions per kind, with unsubscribe
//!
//! `Vec<GameEvent>` (queue), `std::sync::mpsc::Sender<GameEvent>` (channel)
//! and `()` (discard) are sinks too.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use grundy_game::core::{Pile, PileId, PileTag, PlayerId};
//! use grundy_game::events::{EventBus, EventKind, EventSink, GameEvent};
//!
//! let mut bus = EventBus::new();
//! let winners = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&winners);
//! bus.subscribe(EventKind::GameOver, move |event| {
//!     if let GameEvent::GameOver { winner } = event {
//!         sink.borrow_mut().push(*winner);
//!     }
//! });
//!
//! bus.emit(GameEvent::PileRemoved(PileId(0)));
//! bus.emit(GameEvent::GameOver { winner: PlayerId::HUMAN });
//!
//! assert_eq!(*winners.borrow(), vec![PlayerId::HUMAN]);
//! ```

mod bus;
mod event;

pub use bus::{EventBus, SubscriptionId};
pub use event::{EventKind, EventSink, GameEvent};
