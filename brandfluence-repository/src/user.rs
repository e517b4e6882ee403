use brandfluence_error::StorageResult;
use brandfluence_models::entities::prelude::{User, UserActiveModel, UserColumn, UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter,
};

pub struct UserRepository;

impl UserRepository {
    pub async fn create<C>(user: UserActiveModel, db: &C) -> StorageResult<UserModel>
    where
        C: ConnectionTrait,
    {
        Ok(user.insert(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<UserModel>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_username<C>(username: &str, db: &C) -> StorageResult<Option<UserModel>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find()
            .filter(UserColumn::Username.eq(username))
            .one(db)
            .await?)
    }

    /// Looks a user up by either login identifier.
    pub async fn find_by_login<C>(login: &str, db: &C) -> StorageResult<Option<UserModel>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find()
            .filter(
                Condition::any()
                    .add(UserColumn::Username.eq(login))
                    .add(UserColumn::Email.eq(login)),
            )
            .one(db)
            .await?)
    }

    pub async fn exists_by_username_or_email<C>(
        username: &str,
        email: &str,
        db: &C,
    ) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        Ok(User::find()
            .filter(
                Condition::any()
                    .add(UserColumn::Username.eq(username))
                    .add(UserColumn::Email.eq(email)),
            )
            .count(db)
            .await?
            > 0)
    }

    pub async fn exists_by_id<C>(id: i32, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        Ok(User::find_by_id(id).count(db).await? > 0)
    }
}
