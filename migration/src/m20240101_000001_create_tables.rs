use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(integer(Staff::Uid).primary_key())
                    .col(string(Staff::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(string(Person::Nm).primary_key())
                    .col(string(Person::Name))
                    .col(string_null(Person::Birthdate))
                    .col(integer_null(Person::Addedby))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_addedby")
                            .from(Person::Table, Person::Addedby)
                            .to(Staff::Table, Staff::Uid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_person_name")
                    .table(Person::Table)
                    .col(Person::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(string(Movie::Tt).primary_key())
                    .col(string(Movie::Title))
                    .col(string(Movie::Release))
                    .col(string_null(Movie::Director))
                    .col(integer_null(Movie::Addedby))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_director")
                            .from(Movie::Table, Movie::Director)
                            .to(Person::Table, Person::Nm),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_addedby")
                            .from(Movie::Table, Movie::Addedby)
                            .to(Staff::Table, Staff::Uid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_title")
                    .table(Movie::Table)
                    .col(Movie::Title)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Credit::Table)
                    .if_not_exists()
                    .col(string(Credit::Tt))
                    .col(string(Credit::Nm))
                    .primary_key(Index::create().col(Credit::Tt).col(Credit::Nm))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_credit_tt")
                            .from(Credit::Table, Credit::Tt)
                            .to(Movie::Table, Movie::Tt),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_credit_nm")
                            .from(Credit::Table, Credit::Nm)
                            .to(Person::Table, Person::Nm),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Credit::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Person::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Staff::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Staff {
    Table,
    Uid,
    Name,
}

#[derive(DeriveIden)]
enum Person {
    Table,
    Nm,
    Name,
    Birthdate,
    Addedby,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Tt,
    Title,
    Release,
    Director,
    Addedby,
}

#[derive(DeriveIden)]
enum Credit {
    Table,
    Tt,
    Nm,
}
