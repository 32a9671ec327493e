pub mod game;
pub mod genre;

pub use game::{CreateGame, GameDetail, GameSummary, UpdateGame};
pub use genre::GenreDto;

pub use rust_decimal::Decimal;
pub use time::Date;
