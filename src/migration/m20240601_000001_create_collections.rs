use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{
    Addresses, CartItems, Checkouts, Coupons, Favorites, Orders, Payments, Products, Reviews,
    Users,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create(manager, Users).await?;
        create(manager, Products).await?;
        create(manager, Reviews).await?;
        create(manager, CartItems).await?;
        create(manager, Favorites).await?;
        create(manager, Addresses).await?;
        create(manager, Coupons).await?;
        create(manager, Checkouts).await?;
        create(manager, Orders).await?;
        create(manager, Payments).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_entity(manager, Payments).await?;
        drop_entity(manager, Orders).await?;
        drop_entity(manager, Checkouts).await?;
        drop_entity(manager, Coupons).await?;
        drop_entity(manager, Addresses).await?;
        drop_entity(manager, Favorites).await?;
        drop_entity(manager, CartItems).await?;
        drop_entity(manager, Reviews).await?;
        drop_entity(manager, Products).await?;
        drop_entity(manager, Users).await?;
        Ok(())
    }
}

// Tables and their `indexed` columns come straight from the entity definitions.
async fn create<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
    let schema = Schema::new(manager.get_database_backend());
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned(),
        )
        .await?;
    for mut index in schema.create_index_from_entity(entity) {
        manager.create_index(index.if_not_exists().to_owned()).await?;
    }
    Ok(())
}

async fn drop_entity<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}
