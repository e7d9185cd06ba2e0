use std::collections::{BTreeMap, HashMap};

use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

use crate::{
    dto::stats::{AdminStats, CategoryStat},
    entity::{Payments, Products, Users},
    error::AppResult,
    models::{Payment, Product},
    state::AppState,
};

pub async fn admin_stats(state: &AppState) -> AppResult<AdminStats> {
    let user = Users::find().count(&state.orm).await?;
    let product_items = Products::find().count(&state.orm).await?;
    let order_items = Payments::find().count(&state.orm).await?;
    let revenue = state.repos.payments.revenue().await?;

    Ok(AdminStats {
        user,
        product_items,
        order_items,
        revenue,
    })
}

pub async fn order_stats(state: &AppState) -> AppResult<Vec<CategoryStat>> {
    let payments = state.repos.payments.list(None).await?;

    let mut ids: Vec<Uuid> = purchased_ids(&payments).collect();
    ids.sort_unstable();
    ids.dedup();

    let products: HashMap<Uuid, Product> = state
        .repos
        .products
        .find_many(&ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    Ok(group_by_category(&payments, &products))
}

/// Every product id referenced by a payment, one entry per reference.
/// Ids that are not UUIDs cannot match a product and are skipped.
fn purchased_ids(payments: &[Payment]) -> impl Iterator<Item = Uuid> + '_ {
    payments
        .iter()
        .flat_map(|p| p.product_item_ids.0.iter())
        .filter_map(|raw| Uuid::parse_str(raw).ok())
}

fn group_by_category(payments: &[Payment], products: &HashMap<Uuid, Product>) -> Vec<CategoryStat> {
    let mut groups: BTreeMap<Option<String>, (u64, f64)> = BTreeMap::new();
    for id in purchased_ids(payments) {
        let Some(product) = products.get(&id) else {
            continue;
        };
        let entry = groups.entry(product.category.clone()).or_default();
        entry.0 += 1;
        entry.1 += product.new_price.unwrap_or(0.0);
    }

    groups
        .into_iter()
        .map(|(category, (quantity, revenue))| CategoryStat {
            category,
            quantity,
            revenue,
        })
        .collect()
}
