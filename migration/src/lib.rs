pub use sea_orm_migration::prelude::*;

mod m20250310_091402_create_users_table;
mod m20250310_093015_create_table_profiles;
mod m20250311_101200_create_table_posts;
mod m20250311_102244_create_table_comments;
mod m20250311_102931_create_table_post_likes;
mod m20250312_114500_create_table_jobs;
mod m20250313_090114_create_table_events;
mod m20250313_091647_create_table_donations;
mod m20250314_100833_create_table_stories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_091402_create_users_table::Migration),
            Box::new(m20250310_093015_create_table_profiles::Migration),
            Box::new(m20250311_101200_create_table_posts::Migration),
            Box::new(m20250311_102244_create_table_comments::Migration),
            Box::new(m20250311_102931_create_table_post_likes::Migration),
            Box::new(m20250312_114500_create_table_jobs::Migration),
            Box::new(m20250313_090114_create_table_events::Migration),
            Box::new(m20250313_091647_create_table_donations::Migration),
            Box::new(m20250314_100833_create_table_stories::Migration),
        ]
    }
}
