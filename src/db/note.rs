use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::note::{DBNoteCreate, NoteRecord, NoteView};
use crate::types::user::UserSummary;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::note::{self, ActiveModel as NoteActive, Entity as Note, Model as NoteModel};
use entity::note_assignee::{self, ActiveModel as AssigneeActive, Entity as NoteAssignee};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

impl DatabaseService {
    /// Writes the note and its assignee rows together. The movie and every
    /// assignee must exist.
    pub async fn create_note(&self, payload: DBNoteCreate) -> Result<NoteRecord, AppError> {
        self.ensure_movie_exists(payload.film_id).await?;
        self.ensure_users_exist(&payload.assigned_to).await?;

        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let note = NoteActive {
            id: Set(new_id()),
            film_id: Set(payload.film_id),
            created_by: Set(payload.created_by),
            title: Set(payload.title),
            text: Set(payload.text),
            quote: Set(payload.quote),
            description: Set(payload.description),
            page: Set(payload.page),
            location: Set(payload.location),
            category: Set(payload.category),
            priority: Set(payload.priority),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        if !payload.assigned_to.is_empty() {
            let rows = payload.assigned_to.iter().enumerate().map(|(i, user_id)| AssigneeActive {
                note_id: Set(note.id),
                user_id: Set(*user_id),
                position: Set(i as i32),
            });
            NoteAssignee::insert_many(rows).exec_without_returning(&txn).await?;
        }

        txn.commit().await?;
        Ok(NoteRecord { note, assigned_to: payload.assigned_to })
    }

    pub async fn get_note(&self, id: Uuid) -> Result<NoteRecord, AppError> {
        let note = Note::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Note not found".into()))?;
        Ok(self.attach_assignees(vec![note]).await?.remove(0))
    }

    pub async fn note_exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(Note::find_by_id(id).one(&self.database_connection).await?.is_some())
    }

    /// Every note of the movie, oldest first.
    pub async fn list_notes_for_movie(&self, movie_id: Uuid) -> Result<Vec<NoteRecord>, AppError> {
        let notes = Note::find()
            .filter(note::Column::FilmId.eq(movie_id))
            .order_by_asc(note::Column::CreatedAt)
            .order_by_asc(note::Column::Id)
            .all(&self.database_connection)
            .await?;
        self.attach_assignees(notes).await
    }

    async fn attach_assignees(&self, notes: Vec<NoteModel>) -> Result<Vec<NoteRecord>, AppError> {
        if notes.is_empty() {
            return Ok(Vec::new());
        }
        let rows = NoteAssignee::find()
            .filter(note_assignee::Column::NoteId.is_in(notes.iter().map(|n| n.id)))
            .order_by_asc(note_assignee::Column::Position)
            .all(&self.database_connection)
            .await?;

        let mut by_note: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in rows {
            by_note.entry(row.note_id).or_default().push(row.user_id);
        }

        Ok(notes
            .into_iter()
            .map(|note| {
                let assigned_to = by_note.remove(&note.id).unwrap_or_default();
                NoteRecord { note, assigned_to }
            })
            .collect())
    }

    /// Resolves creator and assignee ids into user summaries. Ids whose user
    /// has disappeared are dropped.
    pub async fn note_views(&self, records: Vec<NoteRecord>) -> Result<Vec<NoteView>, AppError> {
        let ids: Vec<Uuid> = records
            .iter()
            .flat_map(|r| std::iter::once(r.note.created_by).chain(r.assigned_to.iter().copied()))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let users = self.get_users_by_ids(&ids).await?;

        Ok(records
            .into_iter()
            .map(|NoteRecord { note, assigned_to }| NoteView {
                id: note.id,
                film: note.film_id,
                title: note.title,
                text: note.text,
                quote: note.quote,
                description: note.description,
                page: note.page,
                location: note.location,
                category: note.category,
                priority: note.priority,
                created_by: users.get(&note.created_by).map(UserSummary::from),
                assigned_to: assigned_to
                    .iter()
                    .filter_map(|id| users.get(id).map(UserSummary::from))
                    .collect(),
                created_at: note.created_at,
            })
            .collect())
    }

    pub async fn note_view(&self, record: NoteRecord) -> Result<NoteView, AppError> {
        self.note_views(vec![record])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("note view lost".into()))
    }
}
