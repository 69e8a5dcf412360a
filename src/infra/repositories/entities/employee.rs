//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Employee;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Employees")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "employeeID")]
    pub employee_id: i64,
    pub name: String,
    #[sea_orm(column_name = "baseSalary", column_type = "Double")]
    pub base_salary: f64,
    pub address: Option<String>,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.employee_id,
            name: model.name,
            base_salary: model.base_salary,
            address: model.address,
            role: model.role,
        }
    }
}
