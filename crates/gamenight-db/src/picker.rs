//! Uniform random selection over classified games.

use rand::Rng;
use rand::rngs::OsRng;

use crate::game_info::GameInfo;

/// Uniformly pick one game from the candidate list.
pub fn pick_game(games: &[GameInfo]) -> Option<&GameInfo> {
    let mut rng = OsRng;
    pick_game_with_rng(games, &mut rng)
}

/// Pick with an injected rng for deterministic draws in tests.
pub fn pick_game_with_rng<'a, R: Rng + ?Sized>(
    games: &'a [GameInfo],
    rng: &mut R,
) -> Option<&'a GameInfo> {
    if games.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..games.len());
    games.get(index)
}
