use std::cell::RefCell;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::rc::Rc;

use serde::Serialize;
use three_trios::{GameListener, Player};

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Heard by the listener of `player`.
    TurnChanged { player: Player },
    Move {
        player: Player,
        card: String,
        x: usize,
        y: usize,
        flipped: usize,
    },
    /// Heard by the listener of `listener`.
    GameOver { listener: Player },
}

/// The events of one game, shared between the game's listeners and the judge.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// A listener that logs into this log on behalf of `player`.
    pub fn listener_for(&self, player: Player) -> EventListener {
        EventListener {
            log: self.clone(),
            player,
        }
    }

    pub fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events.borrow_mut())
    }
}

pub struct EventListener {
    log: EventLog,
    player: Player,
}

impl GameListener for EventListener {
    fn turn_changed(&mut self, player: Player) {
        self.log.push(GameEvent::TurnChanged { player });
    }

    fn game_over(&mut self) {
        self.log.push(GameEvent::GameOver {
            listener: self.player,
        });
    }
}

/// Writes one JSON file per game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

#[derive(Serialize)]
pub struct GameRecording<'a> {
    /// The names of the strategies playing A and B.
    pub players: [&'a str; 2],
    pub winner: Player,
    pub events: &'a [GameEvent],
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    pub fn write_game_recording(&mut self, recording: &GameRecording) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, recording)?;
        self.num += 1;
        Ok(())
    }
}
