use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::{
    entities::{booking_item, seat, showtime, theater},
    error::AppResult,
};

/// Seat ids already committed to any booking for this showtime.
pub async fn booked_seat_ids<C: ConnectionTrait>(db: &C, showtime_id: i32) -> AppResult<Vec<i32>> {
    let ids = booking_item::Entity::find()
        .filter(booking_item::Column::ShowtimeId.eq(showtime_id))
        .select_only()
        .column(booking_item::Column::SeatId)
        .distinct()
        .into_tuple::<i32>()
        .all(db)
        .await?;
    Ok(ids)
}

/// Theater capacity minus seats already committed, floored at zero.
///
/// A missing theater row falls back to counting its seats, so an orphaned
/// showtime reports zero availability instead of failing the read path.
pub async fn available_count<C: ConnectionTrait>(
    db: &C,
    showtime: &showtime::Model,
) -> AppResult<i64> {
    let total = match theater::Entity::find_by_id(showtime.theater_id).one(db).await? {
        Some(theater) => i64::from(theater.total_seats),
        None => seat::Entity::find()
            .filter(seat::Column::TheaterId.eq(showtime.theater_id))
            .count(db)
            .await? as i64,
    };

    let booked = booking_item::Entity::find()
        .filter(booking_item::Column::ShowtimeId.eq(showtime.id))
        .count(db)
        .await? as i64;

    Ok((total - booked).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn full_theater_when_nothing_booked() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 12, 12, 1500).await;

        assert_eq!(available_count(&db, &fixture.showtime).await.unwrap(), 12);
        assert!(booked_seat_ids(&db, fixture.showtime.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn booked_seats_reduce_availability() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 10, 10, 1500).await;
        let user = test_support::seed_user(&db, "alice", false).await;

        let seat_ids: Vec<i32> = fixture.seats[..3].iter().map(|s| s.id).collect();
        crate::booking::commit_booking(&db, user.id, fixture.showtime.id, &seat_ids)
            .await
            .unwrap();

        assert_eq!(available_count(&db, &fixture.showtime).await.unwrap(), 7);

        let mut booked = booked_seat_ids(&db, fixture.showtime.id).await.unwrap();
        booked.sort_unstable();
        let mut expected = seat_ids.clone();
        expected.sort_unstable();
        assert_eq!(booked, expected);
    }

    #[tokio::test]
    async fn undersized_capacity_floors_at_zero() {
        let db = test_support::db().await;
        // Theater claims 2 seats but has 5 physical ones; book 3 of them.
        let fixture = test_support::seed_cinema(&db, 2, 5, 1000).await;
        let user = test_support::seed_user(&db, "bob", false).await;

        let seat_ids: Vec<i32> = fixture.seats[..3].iter().map(|s| s.id).collect();
        crate::booking::commit_booking(&db, user.id, fixture.showtime.id, &seat_ids)
            .await
            .unwrap();

        assert_eq!(available_count(&db, &fixture.showtime).await.unwrap(), 0);
    }
}
