use crate::models::region;
use sea_orm::*;

/// Greek administrative regions, inserted in this order so IDs are stable
pub const REGIONS: [&str; 13] = [
    "Attica",
    "Central Greece",
    "Central Macedonia",
    "Crete",
    "Eastern Macedonia and Thrace",
    "Epirus",
    "Ionian Islands",
    "North Aegean",
    "Peloponnese",
    "South Aegean",
    "Thessaly",
    "Western Greece",
    "Western Macedonia",
];

/// Insert the reference regions, skipping names already present.
/// Returns the number of rows actually inserted.
pub async fn seed_regions(db: &DatabaseConnection) -> Result<u64, DbErr> {
    let regions = REGIONS.iter().map(|name| region::ActiveModel {
        name: Set((*name).to_owned()),
        ..Default::default()
    });

    region::Entity::insert_many(regions)
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(region::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
}
