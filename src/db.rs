use migration::Migrator;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

const PRAGMAS: [&str; 3] =
    ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA cache_size=-64000"];

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Migrator::up(&db, None).await?;
    tracing::debug!("schema is up to date");
    Ok(db)
}

#[cfg(test)]
pub mod testing {
    use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

    use super::{Migrator, MigratorTrait};
    use crate::entities::{credit, movie, person, staff};

    /// Fresh migrated in-memory database. One connection, so every query
    /// sees the same database.
    pub async fn memory_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    pub async fn seed_staff(db: &DatabaseConnection, uid: i32, name: &str) -> staff::Model {
        staff::ActiveModel { uid: Set(uid), name: Set(name.to_string()) }
            .insert(db)
            .await
            .unwrap()
    }

    pub async fn seed_person(
        db: &DatabaseConnection,
        nm: &str,
        name: &str,
        birthdate: Option<&str>,
        addedby: Option<i32>,
    ) -> person::Model {
        person::ActiveModel {
            nm: Set(nm.to_string()),
            name: Set(name.to_string()),
            birthdate: Set(birthdate.map(str::to_string)),
            addedby: Set(addedby),
        }
        .insert(db)
        .await
        .unwrap()
    }

    pub async fn seed_movie(
        db: &DatabaseConnection,
        tt: &str,
        title: &str,
        release: &str,
        director: Option<&str>,
        addedby: Option<i32>,
    ) -> movie::Model {
        movie::ActiveModel {
            tt: Set(tt.to_string()),
            title: Set(title.to_string()),
            release: Set(release.to_string()),
            director: Set(director.map(str::to_string)),
            addedby: Set(addedby),
        }
        .insert(db)
        .await
        .unwrap()
    }

    pub async fn seed_credit(db: &DatabaseConnection, tt: &str, nm: &str) {
        credit::ActiveModel { tt: Set(tt.to_string()), nm: Set(nm.to_string()) }
            .insert(db)
            .await
            .unwrap();
    }
}
