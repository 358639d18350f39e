//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use board_core::domain::Provider;

use super::{format_ts, parse_ts};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: Option<String>,
    pub image: Option<String>,
    pub provider: String,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: String,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for board_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password: model.password,
            image: model.image,
            provider: Provider::parse(&model.provider),
            created_at: parse_ts(&model.created_at),
            updated_at: parse_ts(&model.updated_at),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<board_core::domain::User> for ActiveModel {
    fn from(user: board_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
            image: Set(user.image),
            provider: Set(user.provider.to_string()),
            created_at: Set(format_ts(user.created_at)),
            updated_at: Set(format_ts(user.updated_at)),
        }
    }
}
