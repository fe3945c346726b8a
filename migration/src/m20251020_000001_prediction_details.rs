//! 预测记录表迁移
//!
//! 创建 details 表，记录每次预测的患者姓名、年龄、首位诊断和严重程度。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Details::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Details::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Details::PatientName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Details::Age).integer().not_null())
                    .col(
                        ColumnDef::new(Details::DiseasePredicted)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Details::Severity).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Details::PredictedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 按时间查询最近记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_details_predicted_at")
                    .table(Details::Table)
                    .col(Details::PredictedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_details_predicted_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Details::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Details {
    Table,
    Id,
    PatientName,
    Age,
    DiseasePredicted,
    Severity,
    PredictedAt,
}
