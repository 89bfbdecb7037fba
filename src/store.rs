use std::str::FromStr;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, SqlErr, TransactionTrait, sea_query::Expr,
};
use thiserror::Error;

use crate::entities::movie;
use crate::models::{DeleteOutcome, MIN_YEAR, Movie, Rating, UpdateOutcome};

const SEED_MOVIES: [(&str, i32, Rating); 2] =
    [("The Lion King", 1994, Rating::G), ("Inception", 2010, Rating::Pg13)];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("a movie titled {0:?} already exists")]
    DuplicateTitle(String),
    #[error("storage error: {0}")]
    Storage(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Sole owner of the movie collection. Holds the shared connection handle;
/// per-operation atomicity comes from the backend, uniqueness from the
/// title primary key.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies, ordered by year ascending then title ascending.
    pub async fn list_all(&self) -> StoreResult<Vec<Movie>> {
        let rows = movie::Entity::find()
            .order_by_asc(movie::Column::Year)
            .order_by_asc(movie::Column::Title)
            .all(&self.db)
            .await?;

        rows.into_iter().map(to_movie).collect()
    }

    /// Inserts the two canonical demo movies when the collection is empty.
    /// The batch runs in one transaction so a partial seed cannot persist.
    pub async fn seed_if_empty(&self) -> StoreResult<()> {
        let count = movie::Entity::find().count(&self.db).await?;
        if count > 0 {
            return Ok(());
        }

        let txn = self.db.begin().await?;
        for (title, year, rating) in SEED_MOVIES {
            let model = movie::ActiveModel {
                title: Set(title.to_string()),
                year: Set(year),
                rating: Set(rating.as_str().to_string()),
            };
            movie::Entity::insert(model).exec(&txn).await?;
        }
        txn.commit().await?;

        Ok(())
    }

    /// Validates and persists a new movie. A title collision surfaces as
    /// `DuplicateTitle`, detected from the unique-constraint violation so
    /// racing creates are settled by the schema rather than a pre-check.
    pub async fn create(&self, title: &str, year: i32, rating: &str) -> StoreResult<Movie> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("title must not be empty".to_string()));
        }
        if year < MIN_YEAR {
            return Err(StoreError::Validation(format!(
                "year must be at least {MIN_YEAR}, got {year}"
            )));
        }
        let rating =
            Rating::from_str(rating).map_err(|e| StoreError::Validation(e.to_string()))?;

        let model = movie::ActiveModel {
            title: Set(title.to_string()),
            year: Set(year),
            rating: Set(rating.as_str().to_string()),
        };

        match movie::Entity::insert(model).exec(&self.db).await {
            Ok(_) => Ok(Movie { title: title.to_string(), year, rating }),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(StoreError::DuplicateTitle(title.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Sets the rating of the movie with this exact title. A missing title
    /// is not an error; `matched` and `modified` tell the two no-op cases
    /// apart from an actual change. The lookup and the write run in one
    /// transaction so a concurrent delete or update cannot land between
    /// them.
    pub async fn update_rating(
        &self,
        title: &str,
        new_rating: Rating,
    ) -> StoreResult<UpdateOutcome> {
        let txn = self.db.begin().await?;

        let Some(existing) = movie::Entity::find_by_id(title.to_string()).one(&txn).await? else {
            txn.commit().await?;
            return Ok(UpdateOutcome { matched: 0, modified: 0 });
        };

        if existing.rating == new_rating.as_str() {
            txn.commit().await?;
            return Ok(UpdateOutcome { matched: 1, modified: 0 });
        }

        let result = movie::Entity::update_many()
            .col_expr(movie::Column::Rating, Expr::value(new_rating.as_str()))
            .filter(movie::Column::Title.eq(existing.title))
            .exec(&txn)
            .await?;
        txn.commit().await?;

        Ok(UpdateOutcome { matched: 1, modified: result.rows_affected })
    }

    /// Removes every movie with this rating. Zero deletions is a valid
    /// outcome, not an error.
    pub async fn delete_by_rating(&self, rating: Rating) -> StoreResult<DeleteOutcome> {
        let result = movie::Entity::delete_many()
            .filter(movie::Column::Rating.eq(rating.as_str()))
            .exec(&self.db)
            .await?;

        Ok(DeleteOutcome { deleted: result.rows_affected })
    }
}

fn to_movie(row: movie::Model) -> StoreResult<Movie> {
    let rating = Rating::from_str(&row.rating).map_err(|_| {
        StoreError::Storage(DbErr::Custom(format!(
            "movie {:?} has invalid stored rating {:?}",
            row.title, row.rating
        )))
    })?;
    Ok(Movie { title: row.title, year: row.year, rating })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, Database};

    // Single-connection pool: with `sqlite::memory:` every pooled connection
    // would otherwise open its own empty database.
    async fn store() -> MovieStore {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        crate::db::migrate(&db).await.unwrap();
        MovieStore::new(db)
    }

    #[tokio::test]
    async fn list_all_sorts_by_year_then_title() {
        let store = store().await;
        store.create("Zodiac", 2007, "R").await.unwrap();
        store.create("Alien", 1979, "R").await.unwrap();
        store.create("Ratatouille", 2007, "G").await.unwrap();

        let titles: Vec<String> =
            store.list_all().await.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["Alien", "Ratatouille", "Zodiac"]);
    }

    #[tokio::test]
    async fn seed_if_empty_is_idempotent() {
        let store = store().await;
        store.seed_if_empty().await.unwrap();
        store.seed_if_empty().await.unwrap();

        let movies = store.list_all().await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "The Lion King");
        assert_eq!(movies[0].rating, Rating::G);
        assert_eq!(movies[1].title, "Inception");
        assert_eq!(movies[1].rating, Rating::Pg13);
    }

    #[tokio::test]
    async fn seed_if_empty_skips_non_empty_collection() {
        let store = store().await;
        store.create("Heat", 1995, "R").await.unwrap();
        store.seed_if_empty().await.unwrap();

        let movies = store.list_all().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Heat");
    }

    #[tokio::test]
    async fn create_trims_title() {
        let store = store().await;
        let movie = store.create("  Heat  ", 1995, "R").await.unwrap();
        assert_eq!(movie.title, "Heat");
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let store = store().await;

        let blank = store.create("   ", 2000, "PG").await;
        assert!(matches!(blank, Err(StoreError::Validation(_))));

        let early = store.create("A Trip to the Moon", 1887, "G").await;
        assert!(matches!(early, Err(StoreError::Validation(_))));

        let rating = store.create("Heat", 1995, "PG14").await;
        assert!(matches!(rating, Err(StoreError::Validation(_))));

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_duplicate_title_leaves_existing_record_unchanged() {
        let store = store().await;
        store.create("Inception", 2010, "PG-13").await.unwrap();

        let dup = store.create("Inception", 1999, "R").await;
        assert!(matches!(dup, Err(StoreError::DuplicateTitle(t)) if t == "Inception"));

        let movies = store.list_all().await.unwrap();
        assert_eq!(
            movies,
            [Movie { title: "Inception".to_string(), year: 2010, rating: Rating::Pg13 }]
        );
    }

    #[tokio::test]
    async fn update_rating_reports_matched_and_modified() {
        let store = store().await;
        store.seed_if_empty().await.unwrap();

        let first = store.update_rating("Inception", Rating::Pg).await.unwrap();
        assert_eq!(first, UpdateOutcome { matched: 1, modified: 1 });

        let inception = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .find(|m| m.title == "Inception")
            .unwrap();
        assert_eq!(inception.rating, Rating::Pg);

        let again = store.update_rating("Inception", Rating::Pg).await.unwrap();
        assert_eq!(again, UpdateOutcome { matched: 1, modified: 0 });
    }

    #[tokio::test]
    async fn update_rating_after_row_removed_reports_no_match() {
        let store = store().await;
        store.seed_if_empty().await.unwrap();

        // Another caller removes Inception before the update runs.
        store.delete_by_rating(Rating::Pg13).await.unwrap();

        let outcome = store.update_rating("Inception", Rating::Pg).await.unwrap();
        assert_eq!(outcome, UpdateOutcome { matched: 0, modified: 0 });
    }

    #[tokio::test]
    async fn update_rating_on_missing_title_is_a_no_op() {
        let store = store().await;
        store.seed_if_empty().await.unwrap();

        let outcome = store.update_rating("NoSuchTitle", Rating::Pg).await.unwrap();
        assert_eq!(outcome, UpdateOutcome { matched: 0, modified: 0 });
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_by_rating_removes_exactly_the_matching_movies() {
        let store = store().await;
        store.seed_if_empty().await.unwrap();

        let none = store.delete_by_rating(Rating::R).await.unwrap();
        assert_eq!(none, DeleteOutcome { deleted: 0 });

        store.create("Heat", 1995, "R").await.unwrap();
        store.create("Alien", 1979, "R").await.unwrap();

        let two = store.delete_by_rating(Rating::R).await.unwrap();
        assert_eq!(two, DeleteOutcome { deleted: 2 });

        let titles: Vec<String> =
            store.list_all().await.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["The Lion King", "Inception"]);
    }
}
