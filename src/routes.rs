use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    AppState, availability, booking,
    auth::{CurrentUser, OptionalUser},
    entities::{booking as booking_entity, booking_item, movie, seat, showtime, theater},
    error::{AppError, AppResult},
    models::{
        BookingSummary, CheckoutForm, DashboardStats, GenreQuery, ReviewFormData,
        SearchQuery, SeatAvailability, SeatMapRow, SeatStatus, SeatsQuery,
    },
    reviews, templates,
};

/* ---------- catalog ---------- */

pub async fn home(
    State(state): State<Arc<AppState>>,
    OptionalUser(user): OptionalUser,
) -> AppResult<Html<String>> {
    let featured = movie::Entity::find()
        .filter(movie::Column::Status.eq(movie::STATUS_ACTIVE))
        .order_by_desc(movie::Column::ReleaseDate)
        .limit(8)
        .all(&state.db)
        .await?;

    Ok(Html(templates::home_page(user.as_ref(), &featured)))
}

pub async fn movie_list(
    State(state): State<Arc<AppState>>,
    OptionalUser(user): OptionalUser,
    Query(query): Query<GenreQuery>,
) -> AppResult<Html<String>> {
    let mut finder = movie::Entity::find()
        .filter(movie::Column::Status.eq(movie::STATUS_ACTIVE))
        .order_by_desc(movie::Column::ReleaseDate);

    let selected = query.genre.as_deref().map(str::trim).filter(|g| !g.is_empty());
    if let Some(genre) = selected {
        finder = finder.filter(movie::Column::Genre.eq(genre));
    }
    let movies = finder.all(&state.db).await?;

    let genres: Vec<String> = movie::Entity::find()
        .filter(movie::Column::Status.eq(movie::STATUS_ACTIVE))
        .select_only()
        .column(movie::Column::Genre)
        .distinct()
        .into_tuple()
        .all(&state.db)
        .await?;

    Ok(Html(templates::movie_list_page(user.as_ref(), &movies, &genres, selected, None)))
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    OptionalUser(user): OptionalUser,
    Path(movie_id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = movie::Entity::find_by_id(movie_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;

    // Showtimes within the next 30 days, inclusive of today. ISO date
    // strings order lexicographically.
    let today = jiff::Zoned::now().date();
    let horizon = today
        .checked_add(jiff::Span::new().days(30))
        .map_err(|err| anyhow::anyhow!("date overflow: {err}"))?;

    let showtimes = showtime::Entity::find()
        .filter(showtime::Column::MovieId.eq(movie_id))
        .filter(showtime::Column::ShowDate.gte(today.to_string()))
        .filter(showtime::Column::ShowDate.lte(horizon.to_string()))
        .order_by_asc(showtime::Column::ShowDate)
        .order_by_asc(showtime::Column::ShowTime)
        .find_also_related(theater::Entity)
        .all(&state.db)
        .await?;

    let mut listings = Vec::with_capacity(showtimes.len());
    for (showtime, theater) in showtimes {
        let theater = theater.ok_or(AppError::NotFound)?;
        listings.push(crate::models::ShowtimeListing { showtime, theater });
    }

    let reviews = reviews::reviews_for_movie(&state.db, movie_id).await?;
    let can_review = match &user {
        Some(viewer) => !reviews.iter().any(|(r, _)| r.user_id == viewer.id),
        None => false,
    };

    Ok(Html(templates::movie_detail_page(user.as_ref(), &movie, &listings, &reviews, can_review)))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    OptionalUser(user): OptionalUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Html<String>> {
    let q = query.q.unwrap_or_default().trim().to_string();

    let mut finder = movie::Entity::find().filter(movie::Column::Status.eq(movie::STATUS_ACTIVE));
    if !q.is_empty() {
        finder = finder.filter(
            Condition::any()
                .add(movie::Column::Title.contains(&q))
                .add(movie::Column::Description.contains(&q)),
        );
    }
    let movies = finder.order_by_desc(movie::Column::ReleaseDate).all(&state.db).await?;

    Ok(Html(templates::movie_list_page(user.as_ref(), &movies, &[], None, Some(q.as_str()))))
}

/* ---------- booking flow ---------- */

pub async fn seat_selection(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(showtime_id): Path<i32>,
) -> AppResult<Html<String>> {
    let showtime = showtime::Entity::find_by_id(showtime_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;
    let movie = movie::Entity::find_by_id(showtime.movie_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;
    let theater = theater::Entity::find_by_id(showtime.theater_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;

    let seats = seat::Entity::find()
        .filter(seat::Column::TheaterId.eq(showtime.theater_id))
        .order_by_asc(seat::Column::Row)
        .order_by_asc(seat::Column::Column)
        .all(&state.db)
        .await?;

    let booked: HashSet<i32> =
        availability::booked_seat_ids(&state.db, showtime_id).await?.into_iter().collect();

    let mut rows: Vec<SeatMapRow> = Vec::new();
    for seat in seats {
        let status = SeatStatus { is_booked: booked.contains(&seat.id), seat };
        match rows.last_mut() {
            Some(last) if last.row == status.seat.row => last.seats.push(status),
            _ => rows.push(SeatMapRow { row: status.seat.row.clone(), seats: vec![status] }),
        }
    }

    Ok(Html(templates::seat_selection_page(&user, &movie, &theater, &showtime, &rows)))
}

pub async fn checkout_page(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(showtime_id): Path<i32>,
    Query(query): Query<SeatsQuery>,
) -> AppResult<Response> {
    let showtime = showtime::Entity::find_by_id(showtime_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;

    let raw = query.seats.unwrap_or_default();
    let seat_ids = match booking::parse_seat_ids(&raw) {
        Ok(ids) => ids,
        Err(_) => return Ok(Redirect::to(&movie_url(showtime.movie_id)).into_response()),
    };

    let quote = match booking::begin_checkout(&state.db, showtime_id, &seat_ids).await {
        Ok(quote) => quote,
        Err(AppError::InvalidSelection) => {
            return Ok(Redirect::to(&movie_url(showtime.movie_id)).into_response());
        }
        Err(err) => return Err(err),
    };

    let movie = movie::Entity::find_by_id(showtime.movie_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Html(templates::checkout_page(&user, &movie, &quote, None)).into_response())
}

pub async fn checkout_submit(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(showtime_id): Path<i32>,
    Form(form): Form<CheckoutForm>,
) -> AppResult<Response> {
    let showtime = showtime::Entity::find_by_id(showtime_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;

    let seat_ids = match booking::parse_seat_ids(&form.seat_ids) {
        Ok(ids) => ids,
        Err(_) => return Ok(Redirect::to(&movie_url(showtime.movie_id)).into_response()),
    };

    match booking::commit_booking(&state.db, user.id, showtime_id, &seat_ids).await {
        Ok(committed) => {
            Ok(Redirect::to(&format!("/bookings/confirmation/{}/", committed.id)).into_response())
        }
        Err(AppError::InvalidSelection) => {
            Ok(Redirect::to(&movie_url(showtime.movie_id)).into_response())
        }
        Err(AppError::SeatUnavailable) => {
            // Zero rows were written; offer a fresh seat map.
            let movie = movie::Entity::find_by_id(showtime.movie_id)
                .one(&state.db)
                .await?
                .ok_or(AppError::NotFound)?;
            let quote = booking::begin_checkout(&state.db, showtime_id, &seat_ids).await?;
            Ok(Html(templates::checkout_page(
                &user,
                &movie,
                &quote,
                Some("One or more seats are no longer available. Please select again."),
            ))
            .into_response())
        }
        Err(err) => Err(err),
    }
}

pub async fn confirmation(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(booking_id): Path<i32>,
) -> AppResult<Html<String>> {
    let view = booking::confirm(&state.db, booking_id, &user).await?;
    Ok(Html(templates::confirmation_page(&user, &view)))
}

pub async fn ticket(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(booking_id): Path<i32>,
) -> AppResult<Html<String>> {
    let view = booking::ticket(&state.db, booking_id, &user).await?;
    Ok(Html(templates::ticket_page(&view)))
}

pub async fn history(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> AppResult<Html<String>> {
    let bookings = booking_entity::Entity::find()
        .filter(booking_entity::Column::UserId.eq(user.id))
        .order_by_desc(booking_entity::Column::BookingDate)
        .all(&state.db)
        .await?;

    let summaries = booking_summaries(&state.db, bookings).await?;
    Ok(Html(templates::history_page(&user, &summaries)))
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> AppResult<Html<String>> {
    let all = booking_entity::Entity::find()
        .filter(booking_entity::Column::UserId.eq(user.id))
        .order_by_desc(booking_entity::Column::BookingDate)
        .all(&state.db)
        .await?;

    let total_bookings = all.len() as u64;
    let total_spent_cents = all.iter().map(|b| b.total_price_cents).sum();
    let recent = booking_summaries(&state.db, all.into_iter().take(5).collect()).await?;

    let stats = DashboardStats { recent, total_bookings, total_spent_cents };
    Ok(Html(templates::dashboard_page(&user, &stats)))
}

pub async fn seat_availability(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<i32>,
) -> AppResult<Json<SeatAvailability>> {
    let showtime = showtime::Entity::find_by_id(showtime_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;

    let booked_seats = availability::booked_seat_ids(&state.db, showtime_id).await?;
    let available_seats = availability::available_count(&state.db, &showtime).await?;

    Ok(Json(SeatAvailability { available_seats, booked_seats }))
}

/* ---------- reviews ---------- */

pub async fn add_review_page(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(movie_id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = movie::Entity::find_by_id(movie_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(templates::review_page(&user, &movie, None)))
}

pub async fn add_review(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(movie_id): Path<i32>,
    Form(form): Form<ReviewFormData>,
) -> AppResult<Response> {
    let comment = form.comment.unwrap_or_default();
    match reviews::submit_review(&state.db, movie_id, user.id, form.rating, &comment).await {
        Ok(_) => Ok(Redirect::to(&movie_url(movie_id)).into_response()),
        Err(AppError::DuplicateReview) => {
            let movie = movie::Entity::find_by_id(movie_id)
                .one(&state.db)
                .await?
                .ok_or(AppError::NotFound)?;
            Ok(Html(templates::review_page(
                &user,
                &movie,
                Some("You have already reviewed this movie."),
            ))
            .into_response())
        }
        Err(err) => Err(err),
    }
}

/* ---------- helpers ---------- */

fn movie_url(movie_id: i32) -> String {
    format!("/movie/{movie_id}/")
}

async fn booking_summaries<C: ConnectionTrait>(
    db: &C,
    bookings: Vec<booking_entity::Model>,
) -> AppResult<Vec<BookingSummary>> {
    let mut summaries = Vec::with_capacity(bookings.len());
    for booking in bookings {
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
        let mut seat_numbers: Vec<String> =
            rows.into_iter().filter_map(|(_, seat)| seat.map(|s| s.seat_number)).collect();
        seat_numbers.sort();

        summaries.push(BookingSummary {
            booking,
            movie_title: movie.title,
            theater_name: theater.name,
            show_date: showtime.show_date,
            show_time: showtime.show_time,
            seat_numbers,
        });
    }
    Ok(summaries)
}
