mod castles;
mod color;
mod r#move;
mod piece;
mod player;
mod position;
mod promotion;
mod role;
mod rules;
mod square;
mod status;

pub(crate) use castles::Castles;
pub use color::*;
pub use piece::*;
pub use player::*;
pub use position::*;
pub use promotion::*;
pub use r#move::*;
pub use role::*;
pub use rules::Rule;
pub use square::*;
pub use status::*;
