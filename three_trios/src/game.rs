use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    AttackRule, Card, GameError, Grid, IllegalPlacement, IllegalState, InvalidSetup, Player, Slot,
    ValueTransform,
};

/// Gets told about the progress of a [`Game`].
///
/// The first registered listener belongs to [`Player::A`], the second to
/// [`Player::B`]. Calls happen synchronously from within [`Game::start()`] and
/// [`Game::place()`].
pub trait GameListener {
    /// It is now `player`'s turn. Only that player's listener is called.
    fn turn_changed(&mut self, player: Player);
    /// No more cards can be played. All listeners are called.
    fn game_over(&mut self);
}

/// The state of one game of Three Trios.
///
/// A game goes through three phases: it is created, then
/// [started](Self::start), after which cards can be [placed](Self::place)
/// until [it is over](Self::is_game_over). Rules can only be changed before
/// the start.
pub struct Game {
    grid: Grid,
    /// Indexed by player; the order of the cards matters since they are
    /// played by index.
    hands: [Vec<Card>; 2],
    current_player: Player,
    started: bool,
    listeners: Vec<Box<dyn GameListener>>,
}

impl Game {
    /// Creates a game, dealing the first half of `cards` to player B and the
    /// rest to player A. With an odd number of cards, A gets one more.
    ///
    /// There must be more cards than empty cells on the grid, so that the
    /// grid can be filled completely.
    pub fn new(grid: Grid, mut cards: Vec<Card>) -> Result<Self, InvalidSetup> {
        let empty_cells = grid.num_playable_cells();
        if empty_cells >= cards.len() {
            return Err(InvalidSetup::NotEnoughCards {
                empty_cells,
                cards: cards.len(),
            });
        }
        let mut hand_a = cards.split_off(cards.len() / 2);
        let mut hand_b = cards;
        for card in &mut hand_a {
            card.switch_player(Player::A);
        }
        for card in &mut hand_b {
            card.switch_player(Player::B);
        }
        Ok(Self {
            grid,
            hands: [hand_a, hand_b],
            current_player: Player::FIRST,
            started: false,
            listeners: Vec::new(),
        })
    }

    /// Like [`Self::new()`], but shuffles the cards before dealing them.
    pub fn shuffled<R: Rng + ?Sized>(
        grid: Grid,
        mut cards: Vec<Card>,
        rng: &mut R,
    ) -> Result<Self, InvalidSetup> {
        cards.shuffle(rng);
        Self::new(grid, cards)
    }

    /// Registers a listener for the next player without one.
    pub fn add_listener<L: GameListener + 'static>(
        &mut self,
        listener: L,
    ) -> Result<(), IllegalState> {
        if self.started {
            return Err(IllegalState::AlreadyStarted);
        }
        if self.is_game_over() {
            return Err(IllegalState::GameOver);
        }
        if self.listeners.len() >= 2 {
            return Err(IllegalState::TooManyListeners);
        }
        self.listeners.push(Box::new(listener));
        Ok(())
    }

    /// Makes every card compare attack values with `rule`.
    pub fn add_rule(&mut self, rule: AttackRule) -> Result<(), IllegalState> {
        if self.started {
            return Err(IllegalState::RulesFrozen);
        }
        for card in self.hands.iter_mut().flatten() {
            card.add_rule(rule);
        }
        for slot in self.grid.slots_mut() {
            slot.add_rule(rule);
        }
        Ok(())
    }

    /// Makes every card apply `transform` to attack values before comparing
    /// them, after any transforms added earlier.
    pub fn add_card_transformer(&mut self, transform: ValueTransform) -> Result<(), IllegalState> {
        if self.started {
            return Err(IllegalState::RulesFrozen);
        }
        for card in self.hands.iter_mut().flatten() {
            card.add_transformer(transform);
        }
        for slot in self.grid.slots_mut() {
            slot.add_transformer(transform);
        }
        Ok(())
    }

    /// Starts the game, after which cards can be played but the rules are fixed.
    ///
    /// Either no listener or one for each player must have been registered.
    pub fn start(&mut self) -> Result<(), IllegalState> {
        if self.started {
            return Err(IllegalState::AlreadyStarted);
        }
        if self.is_game_over() {
            return Err(IllegalState::GameOver);
        }
        if self.listeners.len() == 1 {
            return Err(IllegalState::UnpairedListener);
        }
        self.started = true;
        self.notify_turn_changed();
        Ok(())
    }

    /// Plays the card at `hand_idx` of the current player's hand to `(x, y)`.
    ///
    /// This is the core function of this type. The new card battles its
    /// neighbors, flipping the ones it beats, which then battle their own
    /// neighbors in turn. Afterwards it's the other player's turn.
    ///
    /// Nothing is changed if an error is returned.
    pub fn place(&mut self, hand_idx: usize, x: usize, y: usize) -> Result<(), GameError> {
        if !self.started {
            return Err(IllegalState::NotStarted.into());
        }
        if self.is_game_over() {
            return Err(IllegalState::GameOver.into());
        }
        let slot = self.slot(x, y)?;
        if !slot.can_play_card() {
            return Err(IllegalPlacement::CellUnavailable { x, y }.into());
        }
        let mover = self.current_player;
        let hand = &mut self.hands[mover.index()];
        if hand_idx >= hand.len() {
            return Err(IllegalPlacement::HandIndexOutOfRange {
                hand_idx,
                hand_size: hand.len(),
            }
            .into());
        }

        let card = hand.remove(hand_idx).with_owner(mover);
        self.grid.put(x, y, card);
        self.grid.resolve_battles(x, y, mover);
        self.current_player = mover.next();

        if self.is_game_over() {
            for listener in &mut self.listeners {
                listener.game_over();
            }
        } else {
            self.notify_turn_changed();
        }
        Ok(())
    }

    /// How many cards would be flipped if `card` was played to `(x, y)`.
    ///
    /// The card battles on behalf of its owner, or of the current player if
    /// it has none. The game is not changed.
    pub fn possible_cards_flipped(
        &self,
        card: &Card,
        x: usize,
        y: usize,
    ) -> Result<usize, IllegalPlacement> {
        if !self.slot(x, y)?.can_play_card() {
            return Err(IllegalPlacement::CellUnavailable { x, y });
        }
        let mover = match card.owner() {
            Player::None => self.current_player,
            owner => owner,
        };
        let mut grid = self.grid.clone();
        grid.put(x, y, card.clone().with_owner(mover));
        Ok(grid.resolve_battles(x, y, mover))
    }

    /// A game is over when no card can be played anywhere.
    pub fn is_game_over(&self) -> bool {
        self.grid.num_playable_cells() == 0
    }

    /// The player with more cards on the grid, or [`Player::None`] on a tie.
    ///
    /// Cards still in hand do not count, unlike in [`Self::score()`].
    pub fn game_winner(&self) -> Result<Player, IllegalState> {
        if !self.is_game_over() {
            return Err(IllegalState::GameNotOver);
        }
        let counts = self.grid.player_counts();
        let (a, b) = (counts[Player::A.index()], counts[Player::B.index()]);
        Ok(match a.cmp(&b) {
            std::cmp::Ordering::Greater => Player::A,
            std::cmp::Ordering::Less => Player::B,
            std::cmp::Ordering::Equal => Player::None,
        })
    }

    /// The cards `player` owns on the grid plus the cards left in their hand.
    pub fn score(&self, player: Player) -> usize {
        if player == Player::None {
            return 0;
        }
        self.grid.player_counts()[player.index()] + self.hand(player).len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn slot(&self, x: usize, y: usize) -> Result<&Slot, IllegalPlacement> {
        self.grid
            .get(x, y)
            .ok_or(IllegalPlacement::OutOfBounds { x, y })
    }

    pub fn cell_owner(&self, x: usize, y: usize) -> Result<Player, IllegalPlacement> {
        self.slot(x, y).map(Slot::owner)
    }

    /// Whether a card can be played to `(x, y)`; `false` when out of bounds.
    pub fn is_move_legal(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y).is_some_and(Slot::can_play_card)
    }

    /// The cards `player` has not played yet. Always empty for [`Player::None`].
    pub fn hand(&self, player: Player) -> &[Card] {
        match player {
            Player::None => &[],
            player => &self.hands[player.index()],
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// An independent, already started copy of this game without listeners,
    /// in which it is `player`'s turn.
    ///
    /// Playing in the copy has no effect on this game.
    pub fn simulation(&self, player: Player) -> Game {
        Game {
            grid: self.grid.clone(),
            hands: self.hands.clone(),
            current_player: match player {
                Player::None => self.current_player,
                player => player,
            },
            started: true,
            listeners: Vec::new(),
        }
    }

    fn notify_turn_changed(&mut self) {
        let player = self.current_player;
        if let Some(listener) = self.listeners.get_mut(player.index()) {
            listener.turn_changed(player);
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("grid", &self.grid)
            .field("hands", &self.hands)
            .field("current_player", &self.current_player)
            .field("started", &self.started)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
