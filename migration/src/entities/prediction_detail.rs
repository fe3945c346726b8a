//! Prediction log entity (`details` table)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patient_name: String,
    pub age: i32,
    pub disease_predicted: String,
    /// Capitalized tier: Mild / Moderate / Severe
    pub severity: String,
    pub predicted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
