use crate::db::database_service::DatabaseService;
use crate::types::comment::CommentView;
use crate::types::error::AppError;
use crate::types::user::UserSummary;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::comment::{self, ActiveModel as CommentActive, Entity as Comment, Model as CommentModel};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

fn view(comment: CommentModel, user: Option<UserModel>) -> CommentView {
    CommentView {
        id: comment.id,
        note_id: comment.note_id,
        user: user.map(UserSummary::from),
        text: comment.text,
        created_at: comment.created_at,
    }
}

impl DatabaseService {
    pub async fn create_comment(&self, note_id: Uuid, user_id: Uuid, text: String) -> Result<CommentView, AppError> {
        if !self.note_exists(note_id).await? {
            return Err(AppError::not_found("Note"));
        }

        let comment = CommentActive {
            id: Set(new_id()),
            note_id: Set(note_id),
            user_id: Set(user_id),
            text: Set(text),
            created_at: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await?;

        self.get_comment_view(comment.id).await
    }

    pub async fn get_comment_view(&self, id: Uuid) -> Result<CommentView, AppError> {
        let (comment, user) = Comment::find_by_id(id)
            .find_also_related(User)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Comment not found".into()))?;
        Ok(view(comment, user))
    }

    /// Comments on a note, oldest first, with their authors.
    pub async fn list_comments_for_note(&self, note_id: Uuid) -> Result<Vec<CommentView>, AppError> {
        Ok(Comment::find()
            .filter(comment::Column::NoteId.eq(note_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .find_also_related(User)
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|(c, u)| view(c, u))
            .collect())
    }

    /// Only the author may delete a comment. A missing comment is reported
    /// as not found before ownership is looked at.
    pub async fn delete_comment(&self, requester: Uuid, id: Uuid) -> Result<(), AppError> {
        let comment = Comment::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Comment not found".into()))?;

        if comment.user_id != requester {
            return Err(AppError::Forbidden("You can only delete your own comments".into()));
        }

        Comment::delete_by_id(id).exec(&self.database_connection).await?;
        info!("Comment {} deleted by its author", id);
        Ok(())
    }
}
