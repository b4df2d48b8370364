use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use crate::{
    auth::CurrentUser,
    entities::{booking, booking_item, movie, seat, showtime, theater},
    error::{AppError, AppResult, is_unique_violation},
};

/// A checkout selection that has passed every validation gate: the
/// showtime exists and every requested seat belongs to its theater.
pub struct SeatSelection {
    pub showtime: showtime::Model,
    pub seats: Vec<seat::Model>,
}

pub struct CheckoutQuote {
    pub showtime: showtime::Model,
    pub seats: Vec<seat::Model>,
    pub total_price_cents: i64,
}

/// A committed booking joined with everything the confirmation and ticket
/// pages display.
pub struct BookingView {
    pub booking: booking::Model,
    pub showtime: showtime::Model,
    pub movie: movie::Model,
    pub theater: theater::Model,
    pub items: Vec<(booking_item::Model, seat::Model)>,
}

/// Parses the comma-separated `seat_ids` form field. Empty or malformed
/// input is `InvalidSelection`; duplicates collapse to one.
pub fn parse_seat_ids(raw: &str) -> AppResult<Vec<i32>> {
    let mut ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        ids.push(part.parse::<i32>().map_err(|_| AppError::InvalidSelection)?);
    }
    if ids.is_empty() {
        return Err(AppError::InvalidSelection);
    }
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}

pub async fn validate_selection<C: ConnectionTrait>(
    db: &C,
    showtime_id: i32,
    seat_ids: &[i32],
) -> AppResult<SeatSelection> {
    let showtime = showtime::Entity::find_by_id(showtime_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    if seat_ids.is_empty() {
        return Err(AppError::InvalidSelection);
    }

    let seats = seat::Entity::find()
        .filter(seat::Column::Id.is_in(seat_ids.to_vec()))
        .filter(seat::Column::TheaterId.eq(showtime.theater_id))
        .all(db)
        .await?;

    // Any id that is unknown or points at another theater invalidates the
    // whole selection.
    if seats.len() != seat_ids.len() {
        return Err(AppError::InvalidSelection);
    }

    Ok(SeatSelection { showtime, seats })
}

/// Prices a selection without touching the database. Calling it twice with
/// the same arguments yields the same quote.
pub async fn begin_checkout<C: ConnectionTrait>(
    db: &C,
    showtime_id: i32,
    seat_ids: &[i32],
) -> AppResult<CheckoutQuote> {
    let selection = validate_selection(db, showtime_id, seat_ids).await?;
    let total_price_cents = selection.showtime.ticket_price_cents * selection.seats.len() as i64;
    Ok(CheckoutQuote { showtime: selection.showtime, seats: selection.seats, total_price_cents })
}

/// The core write path. Runs the whole check-and-create sequence in one
/// transaction:
///
/// 1. re-validate the selection;
/// 2. conflict check against existing booking items for this showtime —
///    the cached `available_seats` counter is never consulted;
/// 3. insert the confirmed booking and one item per seat at the current
///    ticket price;
/// 4. recompute the booking's total and seat count from its items;
/// 5. recompute the showtime's cached availability.
///
/// For any (showtime, seat) pair at most one concurrent call can succeed:
/// the loser either sees the conflict here or trips the unique index on
/// (showtime_id, seat_id), which is reported as `SeatUnavailable` too.
pub async fn commit_booking(
    db: &DatabaseConnection,
    user_id: i32,
    showtime_id: i32,
    seat_ids: &[i32],
) -> AppResult<booking::Model> {
    if seat_ids.is_empty() {
        return Err(AppError::InvalidSelection);
    }

    let txn = db.begin().await?;

    let selection = validate_selection(&txn, showtime_id, seat_ids).await?;

    let conflicts = booking_item::Entity::find()
        .filter(booking_item::Column::ShowtimeId.eq(showtime_id))
        .filter(booking_item::Column::SeatId.is_in(seat_ids.to_vec()))
        .count(&txn)
        .await?;
    if conflicts > 0 {
        txn.rollback().await?;
        tracing::debug!(showtime_id, ?seat_ids, "seat conflict detected, rejecting booking");
        return Err(AppError::SeatUnavailable);
    }

    let now = crate::now_sec();

    let booking = booking::ActiveModel {
        user_id: Set(user_id),
        showtime_id: Set(showtime_id),
        booking_date: Set(now),
        status: Set(booking::STATUS_CONFIRMED.to_string()),
        total_price_cents: Set(0),
        number_of_seats: Set(0),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for seat in &selection.seats {
        let item = booking_item::ActiveModel {
            booking_id: Set(booking.id),
            showtime_id: Set(showtime_id),
            seat_id: Set(seat.id),
            price_cents: Set(selection.showtime.ticket_price_cents),
            booked_at: Set(now),
            ..Default::default()
        };
        if let Err(err) = item.insert(&txn).await {
            txn.rollback().await?;
            return if is_unique_violation(&err) {
                Err(AppError::SeatUnavailable)
            } else {
                Err(err.into())
            };
        }
    }

    let items = booking_item::Entity::find()
        .filter(booking_item::Column::BookingId.eq(booking.id))
        .all(&txn)
        .await?;
    let total: i64 = items.iter().map(|item| item.price_cents).sum();

    let mut update: booking::ActiveModel = booking.into();
    update.total_price_cents = Set(total);
    update.number_of_seats = Set(items.len() as i32);
    let booking = update.update(&txn).await?;

    let available = crate::availability::available_count(&txn, &selection.showtime).await?;
    let mut showtime_update: showtime::ActiveModel = selection.showtime.clone().into();
    showtime_update.available_seats = Set(available as i32);
    showtime_update.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        booking_id = booking.id,
        showtime_id,
        seats = booking.number_of_seats,
        total_cents = booking.total_price_cents,
        "booking committed"
    );

    Ok(booking)
}

/// Ownership gate for booking reads. Staff may pass only where the caller
/// opts in (the ticket-download path).
pub async fn load_owned<C: ConnectionTrait>(
    db: &C,
    booking_id: i32,
    viewer: &CurrentUser,
    allow_staff: bool,
) -> AppResult<booking::Model> {
    let booking = booking::Entity::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    if booking.user_id != viewer.id && !(allow_staff && viewer.is_staff) {
        return Err(AppError::Forbidden);
    }

    Ok(booking)
}

/// Owner-only projection of a committed booking for the confirmation page.
pub async fn confirm<C: ConnectionTrait>(
    db: &C,
    booking_id: i32,
    viewer: &CurrentUser,
) -> AppResult<BookingView> {
    let booking = load_owned(db, booking_id, viewer, false).await?;
    booking_view(db, booking).await
}

/// Owner-or-staff projection for the ticket download.
pub async fn ticket<C: ConnectionTrait>(
    db: &C,
    booking_id: i32,
    viewer: &CurrentUser,
) -> AppResult<BookingView> {
    let booking = load_owned(db, booking_id, viewer, true).await?;
    booking_view(db, booking).await
}

pub async fn booking_view<C: ConnectionTrait>(
    db: &C,
    booking: booking::Model,
) -> AppResult<BookingView> {
    let showtime = showtime::Entity::find_by_id(booking.showtime_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;
    let movie = movie::Entity::find_by_id(showtime.movie_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;
    let theater = theater::Entity::find_by_id(showtime.theater_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    let rows = booking_item::Entity::find()
        .filter(booking_item::Column::BookingId.eq(booking.id))
        .find_also_related(seat::Entity)
        .all(db)
        .await?;

    let mut items = Vec::with_capacity(rows.len());
    for (item, seat) in rows {
        let seat = seat.ok_or(AppError::NotFound)?;
        items.push((item, seat));
    }
    items.sort_by(|(_, a), (_, b)| a.row.cmp(&b.row).then(a.column.cmp(&b.column)));

    Ok(BookingView { booking, showtime, movie, theater, items })
}

#[cfg(test)]
mod tests {
    use sea_orm::PaginatorTrait;

    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn parse_accepts_comma_separated_ids() {
        assert_eq!(parse_seat_ids("3,1,2").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_seat_ids(" 7 , 7 ,8,").unwrap(), vec![7, 8]);
    }

    #[tokio::test]
    async fn parse_rejects_empty_and_malformed() {
        assert!(matches!(parse_seat_ids(""), Err(AppError::InvalidSelection)));
        assert!(matches!(parse_seat_ids(" , ,"), Err(AppError::InvalidSelection)));
        assert!(matches!(parse_seat_ids("1,x,3"), Err(AppError::InvalidSelection)));
    }

    #[tokio::test]
    async fn begin_checkout_prices_without_writing() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 10, 10, 30000).await;
        let seat_ids: Vec<i32> = fixture.seats[..2].iter().map(|s| s.id).collect();

        let first = begin_checkout(&db, fixture.showtime.id, &seat_ids).await.unwrap();
        let second = begin_checkout(&db, fixture.showtime.id, &seat_ids).await.unwrap();
        assert_eq!(first.total_price_cents, 60000);
        assert_eq!(second.total_price_cents, first.total_price_cents);

        assert_eq!(booking::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(booking_item::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn begin_checkout_missing_showtime_is_not_found() {
        let db = test_support::db().await;
        test_support::seed_cinema(&db, 4, 4, 1000).await;
        let result = begin_checkout(&db, 999, &[1, 2]).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn foreign_theater_seat_invalidates_selection() {
        let db = test_support::db().await;
        let first = test_support::seed_cinema(&db, 4, 4, 1000).await;
        let second = test_support::seed_cinema(&db, 4, 4, 1000).await;

        let foreign = second.seats[0].id;
        let result = begin_checkout(&db, first.showtime.id, &[first.seats[0].id, foreign]).await;
        assert!(matches!(result, Err(AppError::InvalidSelection)));
    }

    #[tokio::test]
    async fn commit_round_trip() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 8, 8, 30000).await;
        let user = test_support::seed_user(&db, "carol", false).await;
        let seat_ids: Vec<i32> = fixture.seats[6..8].iter().map(|s| s.id).collect();

        let committed = commit_booking(&db, user.id, fixture.showtime.id, &seat_ids)
            .await
            .unwrap();
        assert_eq!(committed.status, booking::STATUS_CONFIRMED);

        let viewer = test_support::viewer(&user);
        let view = confirm(&db, committed.id, &viewer).await.unwrap();
        assert_eq!(view.booking.number_of_seats, 2);
        assert_eq!(view.booking.total_price_cents, 2 * 30000);
        assert_eq!(view.items.len(), 2);

        let showtime = showtime::Entity::find_by_id(fixture.showtime.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(showtime.available_seats, 6);
    }

    #[tokio::test]
    async fn empty_selection_writes_nothing() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 4, 4, 1000).await;
        let user = test_support::seed_user(&db, "dave", false).await;

        let result = commit_booking(&db, user.id, fixture.showtime.id, &[]).await;
        assert!(matches!(result, Err(AppError::InvalidSelection)));
        assert_eq!(booking::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(booking_item::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn overlapping_commit_is_rejected() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 6, 6, 2000).await;
        let alice = test_support::seed_user(&db, "alice", false).await;
        let bob = test_support::seed_user(&db, "bob", false).await;

        let first: Vec<i32> = fixture.seats[..3].iter().map(|s| s.id).collect();
        // Overlaps on the middle seat only.
        let second: Vec<i32> = fixture.seats[2..5].iter().map(|s| s.id).collect();

        commit_booking(&db, alice.id, fixture.showtime.id, &first).await.unwrap();
        let result = commit_booking(&db, bob.id, fixture.showtime.id, &second).await;
        assert!(matches!(result, Err(AppError::SeatUnavailable)));

        // All-or-nothing: the loser left no partial booking behind.
        assert_eq!(booking::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(booking_item::Entity::find().count(&db).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn concurrent_commits_have_one_winner() {
        let db = test_support::db().await;
        // Theater T has one seat "A1"; two users race for it.
        let fixture = test_support::seed_cinema(&db, 1, 1, 30000).await;
        let u1 = test_support::seed_user(&db, "u1", false).await;
        let u2 = test_support::seed_user(&db, "u2", false).await;
        let contested = vec![fixture.seats[0].id];

        let (a, b) = tokio::join!(
            commit_booking(&db, u1.id, fixture.showtime.id, &contested),
            commit_booking(&db, u2.id, fixture.showtime.id, &contested),
        );

        let winners = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        let loser = if a.is_ok() { b } else { a };
        assert!(matches!(loser, Err(AppError::SeatUnavailable)));

        assert_eq!(booking::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(booking_item::Entity::find().count(&db).await.unwrap(), 1);

        let showtime = showtime::Entity::find_by_id(fixture.showtime.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(showtime.available_seats, 0);
    }

    #[tokio::test]
    async fn confirmation_is_owner_only() {
        let db = test_support::db().await;
        let fixture = test_support::seed_cinema(&db, 4, 4, 1000).await;
        let owner = test_support::seed_user(&db, "owner", false).await;
        let stranger = test_support::seed_user(&db, "stranger", false).await;
        let staff = test_support::seed_user(&db, "staff", true).await;

        let committed =
            commit_booking(&db, owner.id, fixture.showtime.id, &[fixture.seats[0].id])
                .await
                .unwrap();

        let result = confirm(&db, committed.id, &test_support::viewer(&stranger)).await;
        assert!(matches!(result, Err(AppError::Forbidden)));

        // Staff override applies to the ticket path only.
        let result = confirm(&db, committed.id, &test_support::viewer(&staff)).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
        assert!(ticket(&db, committed.id, &test_support::viewer(&staff)).await.is_ok());
        assert!(ticket(&db, committed.id, &test_support::viewer(&stranger)).await.is_err());
    }
}
