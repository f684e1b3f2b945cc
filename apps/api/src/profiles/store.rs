use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{ProfileRow, UserType};

/// Fields captured at registration.
pub struct NewProfile<'a> {
    pub user_type: UserType,
    pub full_name: &'a str,
    pub email: &'a str,
    pub company_name: &'a str,
    pub skills: &'a [String],
    pub experience: &'a str,
}

/// Fields a profile owner may change. `None` leaves the column unchanged;
/// `user_type` is fixed at registration.
#[derive(Debug, Default, PartialEq)]
pub struct ProfileUpdate<'a> {
    pub full_name: Option<&'a str>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<&'a str>,
}

pub async fn insert_profile(pool: &PgPool, new: NewProfile<'_>) -> Result<ProfileRow, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (user_type, full_name, email, company_name, skills, experience)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(new.user_type.as_str())
    .bind(new.full_name)
    .bind(new.email)
    .bind(new.company_name)
    .bind(new.skills)
    .bind(new.experience)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
}

pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    update: ProfileUpdate<'_>,
) -> Result<ProfileRow, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        UPDATE profiles
        SET full_name = COALESCE($1, full_name),
            skills = COALESCE($2, skills),
            experience = COALESCE($3, experience),
            updated_at = NOW()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(update.full_name)
    .bind(update.skills)
    .bind(update.experience)
    .bind(id)
    .fetch_one(pool)
    .await
}
