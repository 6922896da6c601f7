use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityName, EntityTrait, IntoActiveModel,
    PaginatorTrait, PrimaryKeyTrait, Select,
};

pub type ModelOf<S> = <<S as CrudService>::Entity as EntityTrait>::Model;
pub type ActiveModelOf<S> = <<S as CrudService>::Entity as EntityTrait>::ActiveModel;
pub type IdOf<S> =
    <<<S as CrudService>::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Identifier-keyed create/read/update/delete over a single entity.
///
/// Implementors pick the entity and may override [`CrudService::find_all_query`]
/// to give listings a stable order. Every operation takes the connection it
/// runs on, so the same service works against a pool or inside a transaction.
#[async_trait]
pub trait CrudService {
    type Entity: EntityTrait;

    /// The statement behind [`CrudService::find_all`]. Storage order unless
    /// overridden.
    fn find_all_query() -> Select<Self::Entity> {
        Self::Entity::find()
    }

    /// Looks a row up by primary key. A missing row is `Ok(None)`.
    async fn find_by_id<C>(db: &C, id: IdOf<Self>) -> Result<Option<ModelOf<Self>>, DbErr>
    where
        C: ConnectionTrait,
        IdOf<Self>: Send,
    {
        Self::Entity::find_by_id(id).one(db).await
    }

    async fn find_all<C>(db: &C) -> Result<Vec<ModelOf<Self>>, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::find_all_query().all(db).await
    }

    /// Inserts a new row and returns it with its assigned id.
    async fn create<C>(db: &C, model: ActiveModelOf<Self>) -> Result<ModelOf<Self>, DbErr>
    where
        C: ConnectionTrait,
        ModelOf<Self>: IntoActiveModel<ActiveModelOf<Self>>,
        ActiveModelOf<Self>: Send,
    {
        model.insert(db).await
    }

    /// Writes every column of `model` over the stored row with the same id
    /// and returns the stored copy. Fails if no such row exists.
    async fn update<C>(db: &C, model: ModelOf<Self>) -> Result<ModelOf<Self>, DbErr>
    where
        C: ConnectionTrait,
        ModelOf<Self>: IntoActiveModel<ActiveModelOf<Self>>,
        ActiveModelOf<Self>: Send,
    {
        let active: ActiveModelOf<Self> = model.into_active_model();
        active.reset_all().update(db).await
    }

    /// Removes the row behind `model`. Deleting a row that is already gone
    /// is an error rather than a no-op.
    async fn delete<C>(db: &C, model: ModelOf<Self>) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
        ModelOf<Self>: IntoActiveModel<ActiveModelOf<Self>>,
        ActiveModelOf<Self>: Send,
    {
        let active: ActiveModelOf<Self> = model.into_active_model();
        let res = active.delete(db).await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "No {} row to delete",
                Self::Entity::default().table_name()
            )));
        }
        Ok(())
    }

    async fn count<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
        ModelOf<Self>: Sync,
    {
        Self::Entity::find().count(db).await
    }
}
