use crate::db::database_service::DatabaseService;
use crate::types::document::DBBookUpsert;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::book::{self, ActiveModel as BookActive, Entity as Book, Model as BookModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, Set};
use uuid::Uuid;

const DEFAULT_TITLE: &str = "Shooting book";

/// Result of storing a book file against a movie.
#[derive(Debug)]
pub struct BookUpsert {
    pub book: BookModel,
    pub created: bool,
    /// File reference that was replaced and may now be removed.
    pub replaced: Option<String>,
}

impl DatabaseService {
    pub async fn find_book(&self, movie_id: Uuid) -> Result<Option<BookModel>, AppError> {
        Ok(Book::find()
            .filter(book::Column::MovieId.eq(movie_id))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_book(&self, movie_id: Uuid) -> Result<BookModel, AppError> {
        Ok(self
            .find_book(movie_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Book not found".into()))?)
    }

    /// Creates the movie's book. A movie holds at most one.
    pub async fn create_book(&self, payload: DBBookUpsert) -> Result<BookModel, AppError> {
        self.ensure_movie_exists(payload.movie_id).await?;
        let now = Utc::now();

        BookActive {
            id: Set(new_id()),
            movie_id: Set(payload.movie_id),
            title: Set(payload.title.unwrap_or_else(|| DEFAULT_TITLE.into())),
            description: Set(payload.description),
            file_url: Set(Some(payload.file_url)),
            html_content: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await
        .map_err(|e| AppError::from(e).on_duplicate(book_exists))
    }

    /// Creates the book, or repoints the existing one at the new file. Edited
    /// content belongs to the old file and is dropped on replace.
    pub async fn upsert_book(&self, payload: DBBookUpsert) -> Result<BookUpsert, AppError> {
        self.ensure_movie_exists(payload.movie_id).await?;
        let now = Utc::now();

        match self.find_book(payload.movie_id).await? {
            Some(existing) => {
                let replaced = existing.file_url.clone();
                let mut active = existing.into_active_model();
                active.file_url = Set(Some(payload.file_url));
                active.html_content = Set(None);
                if let Some(title) = payload.title {
                    active.title = Set(title);
                }
                if let Some(description) = payload.description {
                    active.description = Set(Some(description));
                }
                active.updated_at = Set(now);
                let book = active.update(&self.database_connection).await?;
                Ok(BookUpsert { book, created: false, replaced })
            }
            None => {
                let book = self.create_book(payload).await?;
                Ok(BookUpsert { book, created: true, replaced: None })
            }
        }
    }

    pub async fn update_book_content(&self, movie_id: Uuid, content: String) -> Result<BookModel, AppError> {
        let mut active = self.get_book(movie_id).await?.into_active_model();
        active.html_content = Set(Some(content));
        active.updated_at = Set(Utc::now());
        Ok(active.update(&self.database_connection).await?)
    }

    pub async fn delete_book(&self, movie_id: Uuid) -> Result<BookModel, AppError> {
        let existing = self.get_book(movie_id).await?;
        Book::delete_by_id(existing.id).exec(&self.database_connection).await?;
        Ok(existing)
    }
}

pub(crate) fn book_exists() -> AppError {
    AppError::BadRequest("Book already exists for this movie".into())
}
