use async_trait::async_trait;
use sqlx::{query, query_as, FromRow, Postgres};
use tracing::info;

use super::Model;

#[derive(Debug, FromRow)]
pub struct Token {
    pub id: String,
    pub symbol: String,
}

#[async_trait]
impl Model for Token {
    fn id(&self) -> &str {
        &self.id
    }

    fn table_name() -> String {
        "tokens".to_string()
    }

    async fn create(&self, db_pool: &sqlx::Pool<Postgres>) -> Result<&Self, sqlx::Error> {
        query("INSERT INTO tokens (id, symbol) VALUES ($1, $2)")
            .bind(&self.id)
            .bind(&self.symbol)
            .execute(db_pool)
            .await?;
        Ok(self)
    }

    async fn update(&self, db_pool: &sqlx::Pool<Postgres>) -> Result<&Self, sqlx::Error> {
        query("UPDATE tokens SET symbol=$2 WHERE id=$1")
            .bind(&self.id)
            .bind(&self.symbol)
            .execute(db_pool)
            .await?;
        Ok(self)
    }
}

impl Token {
    pub async fn of_interest_or_defaults(
        db_pool: &sqlx::Pool<Postgres>,
        defaults: &[&str],
    ) -> Result<Vec<Token>, sqlx::Error> {
        let tokens: Vec<Token> = query_as::<Postgres, Token>("SELECT * FROM tokens")
            .fetch_all(db_pool)
            .await?;
        if !tokens.is_empty() {
            return Ok(tokens);
        }

        info!("no tokens of interest in db, seeding defaults");
        let mut seeded = vec![];
        for symbol in defaults {
            let token = Token {
                id: symbol.to_string(),
                symbol: symbol.to_string(),
            };
            token.save(db_pool).await?;
            seeded.push(token);
        }
        Ok(seeded)
    }
}
