use rand::rngs::StdRng;
use three_trios::{visualize_game, Game, Player};
use tracing::{debug, info, trace};

use crate::config::Setup;
use crate::contestant::Contestant;
use crate::error::IllegalMove;
use crate::recording::{EventLog, GameEvent, GameRecording, Recorder};

#[derive(Debug)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalMove },
}

#[derive(Debug, Default)]
pub struct MatchScore {
    pub wins: [usize; 2],
    pub illegal_moves: [usize; 2],
    pub ties: usize,
}

impl MatchScore {
    pub fn num_games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.ties
    }
}

/// Index of the contestant playing `player`. The first contestant plays A.
fn player_idx(player: Player) -> usize {
    match player {
        Player::B => 1,
        _ => 0,
    }
}

/// Plays one game in which `contestants[0]` plays A, and thus moves first.
///
/// Returns an error only if the setup is broken or the recording cannot be
/// written, not when an illegal move is played.
pub fn play_game(
    rng: &mut StdRng,
    contestants: [&Contestant; 2],
    setup: &Setup,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    let mut game = Game::shuffled(setup.grid.clone(), setup.cards.clone(), rng)?;
    for &variant in &setup.variants {
        game.add_card_transformer(variant)?;
    }
    let log = EventLog::default();
    game.add_listener(log.listener_for(Player::A))?;
    game.add_listener(log.listener_for(Player::B))?;
    game.start()?;

    while !game.is_game_over() {
        trace!("\n{}", visualize_game(&game));
        let player = game.current_player();
        let idx = player_idx(player);
        let mv = match contestants[idx].choose_move(&game, player) {
            Ok(mv) => mv,
            Err(err) => {
                return Ok(GameResult::IllegalMoveByPlayer {
                    player_idx: idx,
                    err: IllegalMove::NoMoveChosen(err),
                })
            }
        };
        let card = game
            .hand(player)
            .get(mv.hand_idx)
            .map(|card| card.name().to_owned())
            .unwrap_or_default();
        let owned_before = game.grid().player_counts()[idx];
        if let Err(err) = game.place(mv.hand_idx, mv.x, mv.y) {
            return Ok(GameResult::IllegalMoveByPlayer {
                player_idx: idx,
                err: IllegalMove::Rejected { mv, err },
            });
        }
        let flipped = game.grid().player_counts()[idx] - owned_before - 1;
        debug!(
            player = contestants[idx].name,
            card,
            x = mv.x,
            y = mv.y,
            flipped,
            "Move"
        );
        log.push(GameEvent::Move {
            player,
            card,
            x: mv.x,
            y: mv.y,
            flipped,
        });
    }
    trace!("\n{}", visualize_game(&game));

    let winner = game.game_winner()?;
    debug!(
        score_a = game.score(Player::A),
        score_b = game.score(Player::B),
        "Game over"
    );
    if let Some(rec) = recorder {
        rec.write_game_recording(&GameRecording {
            players: [contestants[0].name.as_str(), contestants[1].name.as_str()],
            winner,
            events: &log.take(),
        })?;
    }

    Ok(match winner {
        Player::None => GameResult::Tie,
        player => GameResult::WonByPlayer {
            player_idx: player_idx(player),
        },
    })
}

/// Plays `num_games` games between two contestants, who take turns at
/// playing A. In the returned score, index 0 is `contestant_1`.
pub fn play_matchup(
    rng: &mut StdRng,
    contestant_1: &Contestant,
    contestant_2: &Contestant,
    setup: &Setup,
    num_games: usize,
    stop_on_illegal_move: bool,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let names = [contestant_1.name.as_str(), contestant_2.name.as_str()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        // Maps the seats in this game to the contestants' indices.
        let seats = if game_idx % 2 == 0 { [0, 1] } else { [1, 0] };
        let contestants = if game_idx % 2 == 0 {
            [contestant_1, contestant_2]
        } else {
            [contestant_2, contestant_1]
        };
        match play_game(rng, contestants, setup, recorder)? {
            GameResult::WonByPlayer { player_idx } => {
                let winner = seats[player_idx];
                debug!(winner = names[winner], game_idx);
                match_score.wins[winner] += 1;
            }
            GameResult::Tie => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                let offender = seats[player_idx];
                info!(player = names[offender], game_idx, "Illegal move by player");
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
                if stop_on_illegal_move {
                    break;
                }
                match_score.wins[1 - offender] += 1;
                match_score.illegal_moves[offender] += 1;
            }
        }
    }

    Ok(match_score)
}
