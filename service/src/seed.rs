use sea_orm::{DbErr, TransactionTrait};

use crate::{ActorService, DirectorService};

/// Fills empty actor and director tables with development data. Tables that
/// already hold rows are left alone.
pub async fn ensure_dev_seed<C>(db: &C) -> Result<(), DbErr>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    let directors = DirectorService::ensure_dev_seed(&txn).await?;
    let actors = ActorService::ensure_dev_seed(&txn).await?;

    txn.commit().await?;

    if directors == 0 && actors == 0 {
        tracing::debug!("Development data already present");
    }
    Ok(())
}
