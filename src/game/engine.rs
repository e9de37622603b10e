//! Game engine.
//!
//! `Game` owns the authoritative [`GameState`], the [`Computer`] opponent,
//! the engine RNG and an [`EventSink`]. Every command runs to completion,
//! including any computer reply and all notifications, before it returns.

use tracing::{debug, info, warn};

use crate::ai::Computer;
use crate::core::config::validate_sizes;
use crate::core::{
    GameConfig, GameRng, GameState, MoveRecord, PileId, Piles, PlayerId, Split, StartingPlayer,
    Stream,
};
use crate::error::{ConfigError, MoveError};
use crate::events::{EventBus, EventSink, GameEvent};
use crate::rules::GameStatus;

/// Grundy's Game between a human (player 1) and the computer (player 2).
///
/// ```
/// use grundy_game::core::{GameConfig, StartingPlayer};
/// use grundy_game::Game;
///
/// let config = GameConfig::new()
///     .with_initial_sizes(vec![5])
///     .with_starting_player(StartingPlayer::Human);
/// let mut game = Game::new(config).unwrap();
///
/// let pile = *game.get_piles().keys().next().unwrap();
/// assert!(game.is_valid_move(pile, 2));
/// assert!(game.player_move(pile, 2));
///
/// // The computer replied by splitting the 3, which ended the game.
/// assert_eq!(game.history().len(), 2);
/// assert!(game.is_game_over());
/// ```
#[derive(Debug)]
pub struct Game<S: EventSink = EventBus> {
    config: GameConfig,
    state: GameState,
    computer: Computer,
    rng: GameRng,
    events: S,
}

impl Game<EventBus> {
    /// Create a game notifying an empty [`EventBus`], and reset it.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_sink(config, EventBus::new())
    }
}

impl<S: EventSink> Game<S> {
    /// Create a game notifying `events`, and reset it.
    ///
    /// The initial reset is already visible to `events`.
    pub fn with_sink(config: GameConfig, events: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = GameRng::new(config.seed);
        let mut computer = Computer::new(rng.stream(Stream::Computer));
        computer.set_cheat_mode(config.cheat_mode);

        let mut game = Self {
            rng,
            config,
            state: GameState::new(),
            computer,
            events,
        };
        game.reset(None)?;
        Ok(game)
    }

    // === Queries ===

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The authoritative state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The active piles.
    #[must_use]
    pub fn get_piles(&self) -> &Piles {
        self.state.piles()
    }

    /// Moves since the last reset.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MoveRecord> {
        self.state.history()
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Winner of the finished game.
    #[must_use]
    pub fn last_winner(&self) -> Option<PlayerId> {
        self.state.last_winner()
    }

    /// Is it the human's turn?
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.state.is_player_turn()
    }

    /// True iff no pile can be split.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Where the game stands.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Is splitting `pile` at `position` legal?
    #[must_use]
    pub fn is_valid_move(&self, pile: PileId, position: u32) -> bool {
        self.state.is_valid_move(pile, position)
    }

    /// The computer opponent (table, stats, cheat flag).
    #[must_use]
    pub fn computer(&self) -> &Computer {
        &self.computer
    }

    /// Is cheat mode on?
    #[must_use]
    pub fn is_cheating(&self) -> bool {
        self.computer.is_cheating()
    }

    /// The event sink.
    #[must_use]
    pub fn events(&self) -> &S {
        &self.events
    }

    /// The event sink, e.g. to subscribe to an [`EventBus`].
    pub fn events_mut(&mut self) -> &mut S {
        &mut self.events
    }

    /// Consume the game, returning its event sink.
    pub fn into_events(self) -> S {
        self.events
    }

    // === Configuration commands ===

    /// Piles to use on later resets. Empty means random layouts.
    ///
    /// Does not touch the current game.
    pub fn set_initial_piles(&mut self, sizes: Vec<u32>) -> Result<(), ConfigError> {
        validate_sizes(&sizes)?;
        self.config.initial_sizes = sizes;
        Ok(())
    }

    /// Enable or disable cheat mode for later resets.
    pub fn set_cheat_mode(&mut self, enabled: bool) {
        self.config.cheat_mode = enabled;
        self.computer.set_cheat_mode(enabled);
    }

    // === Game commands ===

    /// Start a new game.
    ///
    /// Layout: `initial_sizes` if given and non-empty, else the configured
    /// initial sizes, else a random layout within the configured bounds.
    /// If the computer is to start, it moves before this returns.
    pub fn reset(&mut self, initial_sizes: Option<&[u32]>) -> Result<(), ConfigError> {
        let sizes = match initial_sizes {
            Some(sizes) if !sizes.is_empty() => {
                validate_sizes(sizes)?;
                sizes.to_vec()
            }
            _ if !self.config.initial_sizes.is_empty() => self.config.initial_sizes.clone(),
            _ => self.rng.layout(&self.config.layout),
        };

        self.state.reset(&sizes, PlayerId::HUMAN);
        let starting_player = self.choose_starting_player();
        self.state.set_starting_player(starting_player);

        info!(?sizes, starting = %starting_player, "Game reset");
        self.events.emit(GameEvent::GameReset {
            piles: self.state.piles().values().copied().collect(),
            starting_player,
        });

        if !starting_player.is_human() {
            self.play_computer_turn();
        }
        Ok(())
    }

    /// Split `pile` at `position` for the player to move.
    ///
    /// Returns false, changing nothing, if the move is illegal.
    pub fn apply_move(&mut self, pile: PileId, position: u32) -> bool {
        self.try_apply_move(pile, position).is_ok()
    }

    /// Like [`apply_move`](Self::apply_move), explaining rejections.
    pub fn try_apply_move(&mut self, pile: PileId, position: u32) -> Result<MoveRecord, MoveError> {
        let record = self
            .state
            .apply_split(Split::new(pile, position))
            .inspect_err(|e| debug!(%e, "Move rejected"))?;

        debug!(%record, "Move applied");
        self.events.emit(GameEvent::PileRemoved(record.parent.id));
        self.events.emit(GameEvent::PileAdded(record.first));
        self.events.emit(GameEvent::PileAdded(record.second));
        self.events.emit(GameEvent::move_made(&record));

        if let Some(winner) = self.state.last_winner() {
            info!(winner = %winner, "Game over");
            self.events.emit(GameEvent::GameOver { winner });
        }
        Ok(record)
    }

    /// Human move: applied only on the human's turn, then the computer
    /// replies if the game goes on.
    ///
    /// Returns false, changing nothing, if the move is rejected.
    pub fn player_move(&mut self, pile: PileId, position: u32) -> bool {
        self.try_player_move(pile, position).is_ok()
    }

    /// Like [`player_move`](Self::player_move), explaining rejections.
    ///
    /// Returns the human's move; the reply is in the history.
    pub fn try_player_move(&mut self, pile: PileId, position: u32) -> Result<MoveRecord, MoveError> {
        if !self.is_player_turn() {
            return Err(MoveError::NotYourTurn);
        }
        let record = self.try_apply_move(pile, position)?;

        if !self.is_game_over() && !self.is_player_turn() {
            self.play_computer_turn();
        }
        Ok(record)
    }

    /// Let the computer move, if it is its turn and the game is not over.
    pub fn play_computer_turn(&mut self) -> Option<MoveRecord> {
        if self.is_game_over() || self.is_player_turn() {
            return None;
        }

        let decision = self.computer.decide(self.state.piles().values())?;
        let split = decision.split;
        match self.try_apply_move(split.pile, split.position) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(%e, %split, "Computer proposed an illegal move");
                None
            }
        }
    }

    /// What the computer would play for the player to move.
    ///
    /// Advisory only: nothing is applied.
    pub fn hint(&mut self) -> Option<Split> {
        self.computer.think(self.state.piles().values())
    }

    /// Can the player to move force a win from here?
    pub fn can_win(&mut self) -> bool {
        self.computer.can_win(self.state.piles().values())
    }

    /// Cheat mode: the computer starts iff the position is a win for the
    /// side to move. Otherwise the configured rule applies.
    fn choose_starting_player(&mut self) -> PlayerId {
        if self.computer.is_cheating() {
            return if self.computer.can_win(self.state.piles().values()) {
                PlayerId::COMPUTER
            } else {
                PlayerId::HUMAN
            };
        }

        match self.config.starting_player {
            StartingPlayer::Human => PlayerId::HUMAN,
            StartingPlayer::Computer => PlayerId::COMPUTER,
            StartingPlayer::Random => {
                if self.rng.coin_flip() {
                    PlayerId::HUMAN
                } else {
                    PlayerId::COMPUTER
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayoutBounds;

    fn game(sizes: &[u32]) -> Game<Vec<GameEvent>> {
        let config = GameConfig::new()
            .with_initial_sizes(sizes.to_vec())
            .with_starting_player(StartingPlayer::Human);
        Game::with_sink(config, Vec::new()).unwrap()
    }

    fn only_pile(game: &Game<Vec<GameEvent>>) -> PileId {
        *game.get_piles().keys().next().unwrap()
    }

    #[test]
    fn test_new_game_is_reset() {
        let game = game(&[5, 7]);

        assert_eq!(game.state().sizes(), vec![5, 7]);
        assert!(game.is_player_turn());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(matches!(game.events()[0], GameEvent::GameReset { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::new().with_initial_sizes(vec![3, 0]);
        assert_eq!(
            Game::new(config).unwrap_err(),
            ConfigError::EmptyPile { index: 1 }
        );
    }

    #[test]
    fn test_apply_move_emits_in_order() {
        let mut game = game(&[5]);
        let pile = only_pile(&game);
        game.events_mut().clear();

        assert!(game.apply_move(pile, 2));

        let kinds: Vec<_> = game.events().iter().map(GameEvent::kind).collect();
        use crate::events::EventKind::*;
        assert_eq!(kinds, vec![PileRemoved, PileAdded, PileAdded, MoveMade]);
    }

    #[test]
    fn test_terminal_move_emits_game_over() {
        let mut game = game(&[3]);
        let pile = only_pile(&game);

        assert!(game.apply_move(pile, 1));

        assert_eq!(
            game.events().last(),
            Some(&GameEvent::GameOver { winner: PlayerId::HUMAN })
        );
        assert_eq!(game.last_winner(), Some(PlayerId::HUMAN));
    }

    #[test]
    fn test_rejected_move_emits_nothing() {
        let mut game = game(&[6]);
        let pile = only_pile(&game);
        let before = game.events().len();

        assert!(!game.apply_move(pile, 3));
        assert!(!game.apply_move(PileId(1000), 1));

        assert_eq!(game.events().len(), before);
    }

    #[test]
    fn test_player_move_triggers_computer_reply() {
        let mut game = game(&[10]);
        let pile = only_pile(&game);

        let record = game.try_player_move(pile, 1).unwrap();

        assert_eq!(record.mover, PlayerId::HUMAN);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[1].mover, PlayerId::COMPUTER);
        assert!(game.is_player_turn() || game.is_game_over());
    }

    #[test]
    fn test_player_move_wrong_turn() {
        let mut game = game(&[3, 1]);
        let pile = only_pile(&game);

        // The human ends the game, leaving the computer nominally to move.
        assert!(game.apply_move(pile, 1));
        assert!(!game.is_player_turn());

        let history = game.history().len();
        assert_eq!(game.try_player_move(pile, 1), Err(MoveError::NotYourTurn));
        assert_eq!(game.play_computer_turn(), None);
        assert_eq!(game.history().len(), history);
    }

    #[test]
    fn test_set_initial_piles() {
        let mut game = game(&[5]);

        assert_eq!(
            game.set_initial_piles(vec![0]),
            Err(ConfigError::EmptyPile { index: 0 })
        );
        assert_eq!(game.config().initial_sizes, vec![5]);

        game.set_initial_piles(vec![8, 9]).unwrap();
        assert_eq!(game.state().sizes(), vec![5]);

        game.reset(None).unwrap();
        assert_eq!(game.state().sizes(), vec![8, 9]);
    }

    #[test]
    fn test_reset_explicit_sizes_override_config() {
        let mut game = game(&[5]);
        game.reset(Some(&[4, 6])).unwrap();
        assert_eq!(game.state().sizes(), vec![4, 6]);

        assert!(game.reset(Some(&[4, 0])).is_err());
        assert_eq!(game.state().sizes(), vec![4, 6]);
    }

    #[test]
    fn test_random_layout_within_bounds() {
        let config = GameConfig::new()
            .with_layout(LayoutBounds::new((2, 3), (4, 6)))
            .with_starting_player(StartingPlayer::Human)
            .with_seed(11);
        let mut game = Game::with_sink(config, ()).unwrap();

        for _ in 0..50 {
            let sizes = game.state().sizes();
            assert!((2..=3).contains(&sizes.len()));
            assert!(sizes.iter().all(|s| (4..=6).contains(s)));
            game.reset(None).unwrap();
        }
    }

    #[test]
    fn test_cheat_mode_starting_player() {
        // g(3) = 1: winning for the side to move, so the computer takes it.
        let config = GameConfig::new()
            .with_initial_sizes(vec![3])
            .with_cheat_mode(true);
        let game = Game::with_sink(config, Vec::new()).unwrap();
        assert_eq!(game.history()[0].mover, PlayerId::COMPUTER);
        assert_eq!(game.last_winner(), Some(PlayerId::COMPUTER));

        // g(4) = 0: losing for the side to move, so the human must start.
        let config = GameConfig::new()
            .with_initial_sizes(vec![4])
            .with_cheat_mode(true);
        let game = Game::with_sink(config, Vec::new()).unwrap();
        assert!(game.history().is_empty());
        assert!(game.is_player_turn());
    }

    #[test]
    fn test_set_cheat_mode() {
        let mut game = game(&[3]);
        assert!(!game.is_cheating());

        game.set_cheat_mode(true);
        assert!(game.is_cheating());
        assert!(game.config().cheat_mode);

        game.reset(None).unwrap();
        assert_eq!(game.last_winner(), Some(PlayerId::COMPUTER));
    }

    #[test]
    fn test_hint_and_can_win() {
        let mut game = game(&[3]);
        let pile = only_pile(&game);

        assert!(game.can_win());
        assert_eq!(game.hint(), Some(Split::new(pile, 1)));
        // Advisory only.
        assert_eq!(game.state().sizes(), vec![3]);
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = || {
            let config = GameConfig::new().with_seed(1234);
            let mut game = Game::with_sink(config, Vec::new()).unwrap();
            while !game.is_game_over() {
                let split = game.state().legal_splits()[0];
                game.player_move(split.pile, split.position);
            }
            game.into_events()
        };

        assert_eq!(play(), play());
    }
}
