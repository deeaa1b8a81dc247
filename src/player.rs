use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError};
use crate::grid::Point;

/// Interface implemented by every kind of player.
pub trait Player {
    /// Display name used in narration.
    fn name(&self) -> &str;

    /// Whether a person is choosing the moves. Humans only see the shots on
    /// the opponent's board.
    fn is_human(&self) -> bool {
        false
    }

    /// Place every ship of the game onto `board`.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError>;

    /// Choose the next cell to attack on the opponent's board.
    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point;

    /// Inform the player of the result of its last attack.
    fn record_attack_result(&mut self, point: Point, outcome: AttackOutcome);

    /// Inform the player of an opponent attack against its board.
    fn record_attack_by_opponent(&mut self, _point: Point) {}
}

/// The available player types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PlayerKind {
    /// Moves typed on stdin.
    Human,
    /// Fixed placement, backwards sweep.
    Awful,
    /// Searched placement, random targeting.
    Mediocre,
    /// Searched placement, density targeting.
    Good,
}

/// Build a boxed player of the given kind.
#[cfg(feature = "std")]
pub fn create_player(
    kind: PlayerKind,
    name: impl Into<std::string::String>,
    game: &crate::game::Game,
) -> std::boxed::Box<dyn Player> {
    use crate::player_ai::{AwfulPlayer, GoodPlayer, MediocrePlayer};
    use crate::player_cli::HumanPlayer;

    match kind {
        PlayerKind::Human => std::boxed::Box::new(HumanPlayer::stdio(name, game)),
        PlayerKind::Awful => std::boxed::Box::new(AwfulPlayer::new(name, game)),
        PlayerKind::Mediocre => std::boxed::Box::new(MediocrePlayer::new(name, game)),
        PlayerKind::Good => std::boxed::Box::new(GoodPlayer::new(name, game)),
    }
}
