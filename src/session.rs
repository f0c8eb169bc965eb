//! Session loop: repeated rounds, score keeping and the play-again prompt.

use crate::config::GameConfig;
use crate::console::{InputProvider, OutputSink};
use crate::human::HumanMoveSource;
use tictactoe_solo_core::{InputError, MarkSymbols, MoveSource, Round, RoundError, SessionStats};
use tracing::{info, instrument, warn};

/// ANSI sequence clearing the terminal and homing the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Drives rounds between the console human and a computer move source.
pub struct Session<IO, C> {
    io: IO,
    computer: C,
    symbols: MarkSymbols,
    clear_screen: bool,
    stats: SessionStats,
}

impl<IO, C> Session<IO, C>
where
    IO: InputProvider + OutputSink,
    C: MoveSource,
{
    /// Creates a session with zeroed stats.
    pub fn new(io: IO, computer: C, config: &GameConfig) -> Self {
        Self {
            io,
            computer,
            symbols: config.symbols(),
            clear_screen: *config.clear_screen(),
            stats: SessionStats::new(),
        }
    }

    /// Plays rounds until the player declines another or input ends,
    /// then prints the summary.
    ///
    /// A round cut short by end of input is not counted.
    #[instrument(skip_all)]
    pub fn run(mut self) -> Result<SessionStats, RoundError> {
        let mut keep_playing = true;
        while keep_playing {
            keep_playing = match self.play_round() {
                Ok(()) => self.ask_play_again()?,
                Err(e) if e.is_input_closed() => {
                    warn!("Input closed mid-round, round discarded");
                    false
                }
                Err(e) => return Err(e),
            };
        }

        self.io.write_line("Thanks for playing!")?;
        self.io.write_line(&self.stats.to_string())?;
        info!(stats = ?self.stats, "Session finished");
        Ok(self.stats)
    }

    /// Plays one round on a fresh board and records its outcome.
    #[instrument(skip(self), fields(round = self.stats.rounds_played() + 1))]
    fn play_round(&mut self) -> Result<(), RoundError> {
        if self.clear_screen {
            self.io.write(CLEAR_SCREEN)?;
        }
        self.io.write_line(&format!(
            "Round {}, the score is (PLAYER) {} - {} (COMPUTER)",
            self.stats.rounds_played() + 1,
            self.stats.player_wins(),
            self.stats.computer_wins()
        ))?;

        let report = {
            let mut human = HumanMoveSource::new(&mut self.io, self.symbols);
            Round::new().play(&mut human, &mut self.computer)?
        };

        self.io.write_line(&report.board().render(&self.symbols))?;
        self.io.write_line(&report.outcome().to_string())?;
        self.stats.record(*report.outcome());
        Ok(())
    }

    /// Asks whether to play again until the answer is Y or N.
    ///
    /// End of input counts as N.
    fn ask_play_again(&mut self) -> Result<bool, RoundError> {
        loop {
            self.io.write("\nWould you like to play again? (Y/N): ")?;
            let answer = match self.io.read_line() {
                Ok(answer) => answer,
                Err(InputError::Closed) => return Ok(false),
                Err(e) => return Err(e.into()),
            };
            match answer.trim().to_ascii_uppercase().as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => self.io.write_line("Enter either Y or N (not case sensitive)")?,
            }
        }
    }
}
