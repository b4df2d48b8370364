use sea_orm_migration::prelude::*;

// The (booking_id, seat_id) uniqueness alone does not stop two different
// bookings from taking the same seat for the same screening. This index is
// the storage-level backstop for the conflict check in the commit path.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_item_showtime_seat_unique")
                    .table(BookingItem::Table)
                    .col(BookingItem::ShowtimeId)
                    .col(BookingItem::SeatId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_item_showtime_seat_unique")
                    .table(BookingItem::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BookingItem {
    Table,
    ShowtimeId,
    SeatId,
}
