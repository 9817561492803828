use crate::*;
pub use rejection::*;

mod rejection;

/// Strategy that decides where the mines of a game go.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
