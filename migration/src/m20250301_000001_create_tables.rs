use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Username))
                    .col(string(User::Email))
                    .col(string(User::PasswordHash))
                    .col(boolean(User::IsStaff).default(false))
                    .col(big_integer(User::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_username_unique")
                    .table(User::Table)
                    .col(User::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_email_unique")
                    .table(User::Table)
                    .col(User::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(string(Session::Token).primary_key())
                    .col(integer(Session::UserId))
                    .col(big_integer(Session::CreatedAt))
                    .col(big_integer(Session::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_user")
                            .from(Session::Table, Session::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string(Movie::Title))
                    .col(text(Movie::Description))
                    .col(string(Movie::Genre))
                    .col(string(Movie::Director))
                    .col(integer(Movie::DurationMinutes))
                    .col(double(Movie::Rating).default(0.0))
                    .col(string(Movie::Status))
                    .col(string_null(Movie::PosterPath))
                    .col(string(Movie::ReleaseDate))
                    .col(big_integer(Movie::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_status")
                    .table(Movie::Table)
                    .col(Movie::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Theater::Table)
                    .if_not_exists()
                    .col(pk_auto(Theater::Id))
                    .col(string(Theater::Name))
                    .col(string(Theater::Location))
                    .col(integer(Theater::TotalSeats))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Seat::Table)
                    .if_not_exists()
                    .col(pk_auto(Seat::Id))
                    .col(integer(Seat::TheaterId))
                    .col(string(Seat::SeatNumber))
                    .col(string(Seat::Row))
                    .col(integer(Seat::Column))
                    .col(string(Seat::SeatType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_theater")
                            .from(Seat::Table, Seat::TheaterId)
                            .to(Theater::Table, Theater::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seat_theater_number_unique")
                    .table(Seat::Table)
                    .col(Seat::TheaterId)
                    .col(Seat::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Showtime::Table)
                    .if_not_exists()
                    .col(pk_auto(Showtime::Id))
                    .col(integer(Showtime::MovieId))
                    .col(integer(Showtime::TheaterId))
                    .col(string(Showtime::ShowDate))
                    .col(string(Showtime::ShowTime))
                    .col(big_integer(Showtime::TicketPriceCents))
                    .col(integer(Showtime::AvailableSeats))
                    .col(big_integer(Showtime::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtime_movie")
                            .from(Showtime::Table, Showtime::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtime_theater")
                            .from(Showtime::Table, Showtime::TheaterId)
                            .to(Theater::Table, Theater::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_showtime_screening_unique")
                    .table(Showtime::Table)
                    .col(Showtime::MovieId)
                    .col(Showtime::TheaterId)
                    .col(Showtime::ShowDate)
                    .col(Showtime::ShowTime)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_showtime_date")
                    .table(Showtime::Table)
                    .col(Showtime::ShowDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::ShowtimeId))
                    .col(big_integer(Booking::BookingDate))
                    .col(string(Booking::Status))
                    .col(big_integer(Booking::TotalPriceCents).default(0))
                    .col(integer(Booking::NumberOfSeats).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_showtime")
                            .from(Booking::Table, Booking::ShowtimeId)
                            .to(Showtime::Table, Showtime::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingItem::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingItem::Id))
                    .col(integer(BookingItem::BookingId))
                    .col(integer(BookingItem::ShowtimeId))
                    .col(integer(BookingItem::SeatId))
                    .col(big_integer(BookingItem::PriceCents))
                    .col(big_integer(BookingItem::BookedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_item_booking")
                            .from(BookingItem::Table, BookingItem::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_item_showtime")
                            .from(BookingItem::Table, BookingItem::ShowtimeId)
                            .to(Showtime::Table, Showtime::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_item_seat")
                            .from(BookingItem::Table, BookingItem::SeatId)
                            .to(Seat::Table, Seat::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_item_booking_seat_unique")
                    .table(BookingItem::Table)
                    .col(BookingItem::BookingId)
                    .col(BookingItem::SeatId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_item_showtime")
                    .table(BookingItem::Table)
                    .col(BookingItem::ShowtimeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::MovieId))
                    .col(integer(Review::UserId))
                    .col(integer(Review::Rating))
                    .col(text(Review::Comment))
                    .col(big_integer(Review::CreatedAt))
                    .col(big_integer(Review::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_movie")
                            .from(Review::Table, Review::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_movie_user_unique")
                    .table(Review::Table)
                    .col(Review::MovieId)
                    .col(Review::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Review::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(BookingItem::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Showtime::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Seat::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Theater::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Session::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    IsStaff,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Session {
    Table,
    Token,
    UserId,
    CreatedAt,
    ExpiresAt,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    Description,
    Genre,
    Director,
    DurationMinutes,
    Rating,
    Status,
    PosterPath,
    ReleaseDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Theater {
    Table,
    Id,
    Name,
    Location,
    TotalSeats,
}

#[derive(DeriveIden)]
enum Seat {
    Table,
    Id,
    TheaterId,
    SeatNumber,
    Row,
    Column,
    SeatType,
}

#[derive(DeriveIden)]
enum Showtime {
    Table,
    Id,
    MovieId,
    TheaterId,
    ShowDate,
    ShowTime,
    TicketPriceCents,
    AvailableSeats,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    UserId,
    ShowtimeId,
    BookingDate,
    Status,
    TotalPriceCents,
    NumberOfSeats,
}

#[derive(DeriveIden)]
enum BookingItem {
    Table,
    Id,
    BookingId,
    ShowtimeId,
    SeatId,
    PriceCents,
    BookedAt,
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    MovieId,
    UserId,
    Rating,
    CreatedAt,
    UpdatedAt,
    Comment,
}
