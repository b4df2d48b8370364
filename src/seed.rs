use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::{
    entities::{movie, seat, showtime, theater},
    error::AppResult,
};

const DEMO_MOVIES: &[(&str, &str, &str, &str, i32, f64)] = &[
    (
        "The Silent Harbor",
        "A retired detective is pulled back for one last case in a fog-bound port town.",
        "Thriller",
        "Mara Ellison",
        128,
        7.9,
    ),
    (
        "Starlight Express Lane",
        "Two rival couriers race across a neon megacity to deliver a package neither understands.",
        "Action",
        "Deon Vargas",
        112,
        7.1,
    ),
    (
        "Paper Lanterns",
        "Three generations of a family reunite for a festival that changes all of them.",
        "Drama",
        "Akemi Watanabe",
        104,
        8.3,
    ),
    (
        "Galaxy of Crumbs",
        "A space station's last baker must feed a crew of very picky aliens.",
        "Comedy",
        "Felix Okafor",
        96,
        6.8,
    ),
];

/// Creates a small demo catalog when the database is empty. Safe to call
/// on every startup.
pub async fn ensure_demo_data(db: &DatabaseConnection) -> AppResult<()> {
    if movie::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let now = crate::now_sec();
    let today = jiff::Zoned::now().date();

    let theater = theater::ActiveModel {
        name: Set("CinePass Grand Hall".to_string()),
        location: Set("Level 4, Riverside Mall".to_string()),
        total_seats: Set(40),
        ..Default::default()
    }
    .insert(db)
    .await?;

    // 5 rows x 8 columns; the back row is VIP, the one before it premium.
    for (row_index, row) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        for column in 1..=8 {
            let seat_type = match row_index {
                4 => seat::TYPE_VIP,
                3 => seat::TYPE_PREMIUM,
                _ => seat::TYPE_STANDARD,
            };
            seat::ActiveModel {
                theater_id: Set(theater.id),
                seat_number: Set(format!("{row}{column}")),
                row: Set(row.to_string()),
                column: Set(column),
                seat_type: Set(seat_type.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    for (index, (title, description, genre, director, duration, rating)) in
        DEMO_MOVIES.iter().enumerate()
    {
        let release = today
            .checked_sub(jiff::Span::new().days(30 + index as i64 * 7))
            .map_err(|err| anyhow::anyhow!("date overflow: {err}"))?;

        let movie = movie::ActiveModel {
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            genre: Set(genre.to_string()),
            director: Set(director.to_string()),
            duration_minutes: Set(*duration),
            rating: Set(*rating),
            status: Set(movie::STATUS_ACTIVE.to_string()),
            poster_path: Set(None),
            release_date: Set(release.to_string()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        // A week of evening screenings per movie.
        for day in 1..=7 {
            let date = today
                .checked_add(jiff::Span::new().days(day))
                .map_err(|err| anyhow::anyhow!("date overflow: {err}"))?;
            let time = if index % 2 == 0 { "19:30" } else { "21:00" };

            showtime::ActiveModel {
                movie_id: Set(movie.id),
                theater_id: Set(theater.id),
                show_date: Set(date.to_string()),
                show_time: Set(time.to_string()),
                ticket_price_cents: Set(30000),
                available_seats: Set(theater.total_seats),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    tracing::info!(
        movies = DEMO_MOVIES.len(),
        theater = %theater.name,
        "seeded demo catalog"
    );
    Ok(())
}
