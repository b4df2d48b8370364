use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entities::{movie, review, user},
    error::{AppError, AppResult, is_unique_violation},
};

/// One review per (movie, user). A resubmission is rejected with
/// `DuplicateReview` rather than silently overwriting the first one.
pub async fn submit_review<C: ConnectionTrait>(
    db: &C,
    movie_id: i32,
    user_id: i32,
    rating: i32,
    comment: &str,
) -> AppResult<review::Model> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::InvalidSelection);
    }

    movie::Entity::find_by_id(movie_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    let existing = review::Entity::find()
        .filter(review::Column::MovieId.eq(movie_id))
        .filter(review::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(AppError::DuplicateReview);
    }

    let now = crate::now_sec();
    let inserted = review::ActiveModel {
        movie_id: Set(movie_id),
        user_id: Set(user_id),
        rating: Set(rating),
        comment: Set(comment.trim().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await;

    match inserted {
        Ok(review) => Ok(review),
        // The unique index catches a racing duplicate the existence check
        // missed.
        Err(err) if is_unique_violation(&err) => Err(AppError::DuplicateReview),
        Err(err) => Err(err.into()),
    }
}

/// Reviews for a movie, newest first, with the reviewer's username.
pub async fn reviews_for_movie<C: ConnectionTrait>(
    db: &C,
    movie_id: i32,
) -> AppResult<Vec<(review::Model, String)>> {
    let rows = review::Entity::find()
        .filter(review::Column::MovieId.eq(movie_id))
        .order_by_desc(review::Column::CreatedAt)
        .find_also_related(user::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(review, user)| {
            let username = user.map(|u| u.username).unwrap_or_else(|| "deleted".to_string());
            (review, username)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn second_review_for_same_pair_is_rejected() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 4, 4, 1000).await;
        let user = test_support::seed_user(&db, "erin", false).await;

        submit_review(&db, fixture.movie.id, user.id, 4, "solid").await.unwrap();
        let result = submit_review(&db, fixture.movie.id, user.id, 5, "changed my mind").await;
        assert!(matches!(result, Err(AppError::DuplicateReview)));

        let reviews = reviews_for_movie(&db, fixture.movie.id).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].0.rating, 4);
    }

    #[tokio::test]
    async fn rating_must_be_one_to_five() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 4, 4, 1000).await;
        let user = test_support::seed_user(&db, "frank", false).await;

        assert!(submit_review(&db, fixture.movie.id, user.id, 0, "").await.is_err());
        assert!(submit_review(&db, fixture.movie.id, user.id, 6, "").await.is_err());
    }

    #[tokio::test]
    async fn review_for_missing_movie_is_not_found() {
        let db = test_support::db().await;
        let user = test_support::seed_user(&db, "gail", false).await;
        let result = submit_review(&db, 999, user.id, 3, "").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
