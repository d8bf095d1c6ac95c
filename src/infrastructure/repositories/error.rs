use crate::domain::errors::DomainError;

const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_TITLE: &str = "articles_title_not_blank_chk";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_LIKE_ARTICLE: &str = "likes_article_id_fkey";
const CNT_LIKE_UNIQUE: &str = "likes_article_user_key";
const CNT_USER_EXTERNAL_ID: &str = "users_external_id_key";

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::Database(db_err) => map_database(db_err.as_ref()),
        err @ (sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::WorkerCrashed) => DomainError::StoreUnavailable(err.to_string()),
        other => DomainError::Persistence(other.to_string()),
    }
}

fn map_database(db_err: &dyn sqlx::error::DatabaseError) -> DomainError {
    if let Some(constraint) = db_err.constraint() {
        return match constraint {
            CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
            CNT_ARTICLE_TITLE => DomainError::Validation("title cannot be empty".into()),
            CNT_COMMENT_ARTICLE | CNT_LIKE_ARTICLE => {
                DomainError::NotFound("article not found".into())
            }
            CNT_LIKE_UNIQUE => DomainError::Conflict("article already liked".into()),
            CNT_USER_EXTERNAL_ID => DomainError::Conflict("user already exists".into()),
            other => DomainError::Persistence(format!("database constraint violation: {other}")),
        };
    }

    match db_err.code().as_deref() {
        Some("23505") => DomainError::Conflict("unique constraint violated".into()),
        Some("23503") => DomainError::NotFound("referenced record not found".into()),
        Some("23514") => DomainError::Validation("check constraint violated".into()),
        // statement timeout, admin shutdown, connection exceptions
        Some(code) if is_unavailable_code(code) => {
            DomainError::StoreUnavailable(db_err.message().to_string())
        }
        _ => DomainError::Persistence(db_err.message().to_string()),
    }
}

fn is_unavailable_code(code: &str) -> bool {
    matches!(code, "57014" | "57P01" | "57P02" | "57P03") || code.starts_with("08")
}

/// ILIKE pattern matching `term` as a literal substring.
#[must_use]
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
