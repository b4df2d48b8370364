use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Set,
    Statement,
};

use crate::{
    auth::CurrentUser,
    entities::{movie, seat, showtime, theater, user},
};

pub struct CinemaFixture {
    pub theater: theater::Model,
    pub seats: Vec<seat::Model>,
    pub movie: movie::Model,
    pub showtime: showtime::Model,
}

/// Fresh in-memory database. One connection only, so every query and
/// transaction in a test sees the same SQLite instance.
pub async fn db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await.expect("connect in-memory sqlite");

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys=ON".to_string(),
    ))
    .await
    .expect("enable foreign keys");

    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn seed_user(db: &DatabaseConnection, username: &str, is_staff: bool) -> user::Model {
    user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{username}@example.com")),
        password_hash: Set("unused".to_string()),
        is_staff: Set(is_staff),
        created_at: Set(crate::now_sec()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert user")
}

pub fn viewer(user: &user::Model) -> CurrentUser {
    CurrentUser { id: user.id, username: user.username.clone(), is_staff: user.is_staff }
}

/// A theater claiming `total_seats` capacity with `seat_count` physical
/// seats in row "A", plus one movie and one showtime playing there.
pub async fn seed_cinema(
    db: &DatabaseConnection,
    total_seats: i32,
    seat_count: usize,
    ticket_price_cents: i64,
) -> CinemaFixture {
    let now = crate::now_sec();

    let theater = theater::ActiveModel {
        name: Set(format!("Hall {now}-{total_seats}-{seat_count}")),
        location: Set("Test City".to_string()),
        total_seats: Set(total_seats),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert theater");

    let mut seats = Vec::with_capacity(seat_count);
    for column in 1..=seat_count as i32 {
        let seat = seat::ActiveModel {
            theater_id: Set(theater.id),
            seat_number: Set(format!("A{column}")),
            row: Set("A".to_string()),
            column: Set(column),
            seat_type: Set(seat::TYPE_STANDARD.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("insert seat");
        seats.push(seat);
    }

    let movie = movie::ActiveModel {
        title: Set(format!("Test Movie {}", theater.id)),
        description: Set("A movie for tests.".to_string()),
        genre: Set("Drama".to_string()),
        director: Set("Nobody".to_string()),
        duration_minutes: Set(100),
        rating: Set(7.0),
        status: Set(movie::STATUS_ACTIVE.to_string()),
        poster_path: Set(None),
        release_date: Set("2026-01-01".to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert movie");

    let showtime = showtime::ActiveModel {
        movie_id: Set(movie.id),
        theater_id: Set(theater.id),
        show_date: Set("2026-09-01".to_string()),
        show_time: Set("19:30".to_string()),
        ticket_price_cents: Set(ticket_price_cents),
        available_seats: Set(total_seats),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert showtime");

    CinemaFixture { theater, seats, movie, showtime }
}
