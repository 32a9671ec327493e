//! Transfer shapes for the games resource.
//!
//! Request bodies use capitalized field names (`Name`, `GenreId`, `Price`,
//! `ReleaseDate`), responses use lower camel case. Lower camel case is also
//! accepted on input. `ReleaseDate` travels as `YYYY-MM-DD`.

use garde::Validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

pub const NAME_MAX_LENGTH: usize = 50;
pub const MIN_PRICE: Decimal = Decimal::ONE;
pub const MAX_PRICE: Decimal = Decimal::ONE_HUNDRED;

fn price_in_range(value: &Decimal, _ctx: &()) -> garde::Result {
    if *value < MIN_PRICE || *value > MAX_PRICE {
        return Err(garde::Error::new(format!(
            "price must be between {MIN_PRICE} and {MAX_PRICE}"
        )));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGame {
    #[serde(alias = "name")]
    #[garde(length(chars, min = 1, max = 50))]
    pub name: String,
    #[serde(alias = "genreId")]
    #[garde(range(min = 1))]
    pub genre_id: i64,
    #[serde(alias = "price", with = "rust_decimal::serde::float")]
    #[garde(custom(price_in_range))]
    pub price: Decimal,
    #[serde(alias = "releaseDate")]
    #[garde(skip)]
    pub release_date: Date,
}

/// Full replacement of a game's mutable fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGame {
    #[serde(alias = "name")]
    #[garde(length(chars, min = 1, max = 50))]
    pub name: String,
    #[serde(alias = "genreId")]
    #[garde(range(min = 1))]
    pub genre_id: i64,
    #[serde(alias = "price", with = "rust_decimal::serde::float")]
    #[garde(custom(price_in_range))]
    pub price: Decimal,
    #[serde(alias = "releaseDate")]
    #[garde(skip)]
    pub release_date: Date,
}

impl From<CreateGame> for UpdateGame {
    fn from(value: CreateGame) -> Self {
        UpdateGame {
            name: value.name,
            genre_id: value.genre_id,
            price: value.price,
            release_date: value.release_date,
        }
    }
}

/// List view shape, `genre` is the genre's display name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: i64,
    pub name: String,
    pub genre: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub release_date: Date,
}

/// Single item shape, keeps the raw genre reference.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub id: i64,
    pub name: String,
    pub genre_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub release_date: Date,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    fn sample() -> CreateGame {
        CreateGame {
            name: "Street Fighter II".to_string(),
            genre_id: 1,
            price: Decimal::new(1999, 2),
            release_date: date!(1992 - 07 - 15),
        }
    }

    #[test]
    fn test_valid_game() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_name_limits() {
        let mut game = sample();
        game.name = String::new();
        assert!(game.validate().is_err());

        game.name = "x".repeat(NAME_MAX_LENGTH);
        assert!(game.validate().is_ok());

        game.name = "x".repeat(NAME_MAX_LENGTH + 1);
        assert!(game.validate().is_err());

        // counted in characters, not bytes
        game.name = "ž".repeat(NAME_MAX_LENGTH);
        assert!(game.validate().is_ok());
    }

    #[test]
    fn test_price_limits() {
        let mut game: UpdateGame = sample().into();
        for (price, valid) in [
            (Decimal::ONE, true),
            (Decimal::ONE_HUNDRED, true),
            (Decimal::new(99, 2), false),
            (Decimal::new(10001, 2), false),
            (Decimal::ZERO, false),
        ] {
            game.price = price;
            assert_eq!(valid, game.validate().is_ok(), "price {price}");
        }
    }

    #[test]
    fn test_genre_sentinel_rejected() {
        let mut game = sample();
        game.genre_id = 0;
        assert!(game.validate().is_err());
    }

    #[test]
    fn test_request_casing() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "Name": "Street Fighter II",
                "GenreId": 1,
                "Price": 19.99,
                "ReleaseDate": "1992-07-15"
            })
        );

        let camel: CreateGame = serde_json::from_value(json!({
            "name": "Street Fighter II",
            "genreId": 1,
            "price": 19.99,
            "releaseDate": "1992-07-15"
        }))
        .unwrap();
        assert_eq!(camel, sample());
    }

    #[test]
    fn test_response_casing() {
        let detail = GameDetail {
            id: 7,
            name: "FIFA 23".to_string(),
            genre_id: 3,
            price: Decimal::new(6999, 2),
            release_date: date!(2022 - 09 - 27),
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["genreId"], 3);
        assert_eq!(value["releaseDate"], "2022-09-27");
        assert_eq!(value["price"], 69.99);

        let back: GameDetail = serde_json::from_value(value).unwrap();
        assert_eq!(back, detail);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let res = serde_json::from_value::<GameSummary>(json!({
            "id": 1,
            "name": "Test",
            "genre": "Racing",
            "price": 10,
            "releaseDate": "2023-02-30"
        }));
        assert!(res.is_err());
    }
}
