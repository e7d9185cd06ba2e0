use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest},
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    models::User,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created(Uuid),
    AlreadyExists,
}

#[derive(Clone)]
pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = Users::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(User::from)
            .collect();
        Ok(users)
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await?
            .map(User::from);
        Ok(user)
    }

    /// Existence check followed by insert; the unique index on `email`
    /// catches the registrations that race past the check.
    pub async fn register(&self, payload: CreateUserRequest) -> AppResult<Registration> {
        let email = payload
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::BadRequest("email is required".into()))?;

        if self.find_by_email(&email).await?.is_some() {
            return Ok(Registration::AlreadyExists);
        }

        let id = Uuid::new_v4();
        let active = ActiveModel {
            id: Set(id),
            email: Set(email),
            name: Set(payload.name),
            photo_url: Set(payload.photo_url),
            uid: Set(payload.uid),
            role: Set(None),
            creation_time: Set(payload.metadata.creation_time),
            last_sign_in_time: Set(payload.metadata.last_sign_in_time),
            created_at: Set(Utc::now().into()),
        };

        match active.insert(&self.conn).await {
            Ok(_) => Ok(Registration::Created(id)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(Registration::AlreadyExists)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// `key` is the stored id when it parses as a UUID, otherwise the sign-in provider uid.
    pub async fn update_profile(&self, key: &str, patch: UpdateUserRequest) -> AppResult<u64> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::BadRequest("User ID is required.".into()));
        }
        if let Some(ts) = patch.last_sign_in_time.as_deref() {
            if !is_valid_timestamp(ts) {
                return Err(AppError::BadRequest("Invalid lastSignInTime format.".into()));
            }
        }

        let mut active = <ActiveModel as Default>::default();
        if let Some(name) = patch.name {
            active.name = Set(Some(name));
        }
        if let Some(photo_url) = patch.photo_url {
            active.photo_url = Set(Some(photo_url));
        }
        if let Some(ts) = patch.last_sign_in_time {
            active.last_sign_in_time = Set(Some(ts));
        }
        if !active.is_changed() {
            return Ok(0);
        }

        let filter = match Uuid::parse_str(key) {
            Ok(id) => Column::Id.eq(id),
            Err(_) => Column::Uid.eq(key),
        };
        let result = Users::update_many()
            .set(active)
            .filter(filter)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn promote_to_admin(&self, id: Uuid) -> AppResult<u64> {
        let active = ActiveModel {
            role: Set(Some("admin".into())),
            ..Default::default()
        };
        let result = Users::update_many()
            .set(active)
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = Users::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }
}

/// Accepts RFC 3339, the RFC 2822 form browsers produce from `Date#toUTCString`,
/// and a bare `YYYY-MM-DD` date.
pub fn is_valid_timestamp(raw: &str) -> bool {
    DateTime::parse_from_rfc3339(raw).is_ok()
        || DateTime::parse_from_rfc2822(raw).is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::is_valid_timestamp;

    #[test]
    fn sign_in_timestamps() {
        assert!(is_valid_timestamp("2024-05-01T10:00:00Z"));
        assert!(is_valid_timestamp("Wed, 01 May 2024 10:00:00 GMT"));
        assert!(is_valid_timestamp("2024-05-01"));
        assert!(!is_valid_timestamp("2024-13-01"));
        assert!(!is_valid_timestamp("yesterday"));
        assert!(!is_valid_timestamp(""));
    }
}
