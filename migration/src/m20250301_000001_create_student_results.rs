use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 成绩记录表：每个 (学生, 科目) 一行，另有不含科目信息的档案行
        manager
            .create_table(
                Table::create()
                    .table(StudentResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentResults::Regno).string().not_null())
                    .col(ColumnDef::new(StudentResults::Name).string().not_null())
                    .col(ColumnDef::new(StudentResults::Department).string().null())
                    .col(ColumnDef::new(StudentResults::Year).string().null())
                    .col(ColumnDef::new(StudentResults::Photo).string().null())
                    .col(ColumnDef::new(StudentResults::Semester).string().null())
                    .col(ColumnDef::new(StudentResults::SubjectCode).string().null())
                    .col(ColumnDef::new(StudentResults::SubjectTitle).string().null())
                    .col(ColumnDef::new(StudentResults::Ia).double().null())
                    .col(ColumnDef::new(StudentResults::Ea).double().null())
                    .col(ColumnDef::new(StudentResults::Total).double().null())
                    .col(ColumnDef::new(StudentResults::Result).string().null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_results_regno")
                    .table(StudentResults::Table)
                    .col(StudentResults::Regno)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_results_subject_title")
                    .table(StudentResults::Table)
                    .col(StudentResults::SubjectTitle)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_results_year_semester")
                    .table(StudentResults::Table)
                    .col(StudentResults::Year)
                    .col(StudentResults::Semester)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentResults::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudentResults {
    #[sea_orm(iden = "student_results")]
    Table,
    Id,
    Regno,
    Name,
    Department,
    Year,
    Photo,
    Semester,
    SubjectCode,
    SubjectTitle,
    Ia,
    Ea,
    Total,
    Result,
}
