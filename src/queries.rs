//! Read-only lookups over the `person`, `movie`, `credit` and `staff` tables.
//!
//! Searches are `LIKE '%fragment%'` with the fragment bound as a parameter, so
//! `%` and `_` inside a fragment still act as wildcards. Case sensitivity is
//! whatever the store's collation gives; on SQLite that means ASCII letters
//! match case-insensitively and everything else matches exactly.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    sea_query::{Alias, Expr, Func, Query, SimpleExpr},
};

use crate::{
    entities::{credit, movie, person, staff},
    error::AppResult,
    models::{MovieOrder, PersonOrder, Stats},
};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count_people(&self) -> AppResult<u64> {
        Ok(person::Entity::find().count(&self.db).await?)
    }

    pub async fn count_movies(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }

    pub async fn stats(&self) -> AppResult<Stats> {
        let people = self.count_people().await?;
        let movies = self.count_movies().await?;
        let now = jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string();
        Ok(Stats { now, people, movies })
    }

    pub async fn random_person(&self) -> AppResult<Option<person::Model>> {
        Ok(person::Entity::find().order_by(random(), Order::Asc).one(&self.db).await?)
    }

    pub async fn random_movie(&self) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find().order_by(random(), Order::Asc).one(&self.db).await?)
    }

    pub async fn get_person(&self, nm: &str) -> AppResult<Option<person::Model>> {
        Ok(person::Entity::find_by_id(nm.to_string()).one(&self.db).await?)
    }

    pub async fn get_movie(&self, tt: &str) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(tt.to_string()).one(&self.db).await?)
    }

    /// Name of the staff member who added an entry, or "N/A" when unknown.
    pub async fn get_staff_name(&self, uid: Option<i32>) -> AppResult<String> {
        let Some(uid) = uid else {
            return Ok(NOT_AVAILABLE.to_string());
        };
        let staff = staff::Entity::find_by_id(uid).one(&self.db).await?;
        Ok(staff.map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.name))
    }

    /// `None` when the movie has no director or the director row is missing.
    pub async fn get_director(&self, nm: Option<&str>) -> AppResult<Option<person::Model>> {
        match nm {
            Some(nm) => self.get_person(nm).await,
            None => Ok(None),
        }
    }

    pub async fn search_people(
        &self,
        fragment: &str,
        order: PersonOrder,
    ) -> AppResult<Vec<person::Model>> {
        let query = person::Entity::find().filter(person::Column::Name.contains(fragment));
        let query = match order {
            PersonOrder::Name => query.order_by(
                SimpleExpr::from(Func::cust(Alias::new("LTRIM")).arg(Expr::col(person::Column::Name))),
                Order::Asc,
            ),
            PersonOrder::OldestFirst => query.order_by_asc(person::Column::Birthdate),
            PersonOrder::YoungestFirst => query.order_by_desc(person::Column::Birthdate),
            PersonOrder::Unordered => query,
        };
        Ok(query.all(&self.db).await?)
    }

    pub async fn search_movies(
        &self,
        fragment: &str,
        order: MovieOrder,
    ) -> AppResult<Vec<movie::Model>> {
        let query = movie::Entity::find().filter(movie::Column::Title.contains(fragment));
        let query = match order {
            MovieOrder::ReleaseOldestFirst => query.order_by(release_year(), Order::Asc),
            MovieOrder::ReleaseNewestFirst => query.order_by(release_year(), Order::Desc),
            MovieOrder::Title => query.order_by_asc(movie::Column::Title),
        };
        Ok(query.all(&self.db).await?)
    }

    pub async fn get_cast(&self, tt: &str) -> AppResult<Vec<person::Model>> {
        let credited = Query::select()
            .distinct()
            .column(credit::Column::Nm)
            .from(credit::Entity)
            .and_where(credit::Column::Tt.eq(tt))
            .to_owned();

        Ok(person::Entity::find()
            .filter(person::Column::Nm.in_subquery(credited))
            .order_by_asc(person::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn get_past_movies(&self, nm: &str) -> AppResult<Vec<movie::Model>> {
        let credited = Query::select()
            .distinct()
            .column(credit::Column::Tt)
            .from(credit::Entity)
            .and_where(credit::Column::Nm.eq(nm))
            .to_owned();

        Ok(movie::Entity::find()
            .filter(movie::Column::Tt.in_subquery(credited))
            .order_by(release_year(), Order::Asc)
            .all(&self.db)
            .await?)
    }
}

fn random() -> SimpleExpr {
    Expr::cust("RANDOM()")
}

fn release_year() -> SimpleExpr {
    Expr::col(movie::Column::Release).cast_as(Alias::new("INTEGER"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::{self, seed_credit, seed_movie, seed_person, seed_staff};

    async fn catalog() -> Catalog {
        Catalog::new(testing::memory_db().await)
    }

    fn names(people: &[person::Model]) -> Vec<&str> {
        people.iter().map(|p| p.name.as_str()).collect()
    }

    fn titles(movies: &[movie::Model]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[tokio::test]
    async fn counts_and_random_rows() {
        let catalog = catalog().await;
        assert_eq!(catalog.count_people().await.unwrap(), 0);
        assert!(catalog.random_person().await.unwrap().is_none());
        assert!(catalog.random_movie().await.unwrap().is_none());

        seed_person(&catalog.db, "nm001", "Jane Doe", Some("1970-01-01"), None).await;
        seed_person(&catalog.db, "nm002", "John Roe", None, None).await;
        seed_movie(&catalog.db, "tt001", "Alpha", "1990", None, None).await;

        let stats = catalog.stats().await.unwrap();
        assert_eq!((stats.people, stats.movies), (2, 1));
        assert!(!stats.now.is_empty());

        let person = catalog.random_person().await.unwrap().unwrap();
        assert!(["nm001", "nm002"].contains(&person.nm.as_str()));
        assert_eq!(catalog.random_movie().await.unwrap().unwrap().tt, "tt001");
    }

    #[tokio::test]
    async fn get_person_returns_stored_row() {
        let catalog = catalog().await;
        let stored = seed_person(&catalog.db, "nm001", "Jane Doe", Some("1970-01-01"), None).await;

        assert_eq!(catalog.get_person("nm001").await.unwrap(), Some(stored));
        assert_eq!(catalog.get_person("nm999").await.unwrap(), None);
        assert_eq!(catalog.get_movie("tt999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn staff_name_falls_back_to_na() {
        let catalog = catalog().await;
        seed_staff(&catalog.db, 7, "Scott").await;

        assert_eq!(catalog.get_staff_name(None).await.unwrap(), "N/A");
        assert_eq!(catalog.get_staff_name(Some(7)).await.unwrap(), "Scott");
        assert_eq!(catalog.get_staff_name(Some(8)).await.unwrap(), "N/A");
    }

    #[tokio::test]
    async fn director_is_optional() {
        let catalog = catalog().await;
        seed_person(&catalog.db, "nm010", "Ida Lupino", None, None).await;

        assert_eq!(catalog.get_director(None).await.unwrap(), None);
        assert_eq!(catalog.get_director(Some("nm404")).await.unwrap(), None);
        let director = catalog.get_director(Some("nm010")).await.unwrap().unwrap();
        assert_eq!(director.name, "Ida Lupino");
    }

    #[tokio::test]
    async fn search_people_orders() {
        let catalog = catalog().await;
        seed_person(&catalog.db, "nm1", "  Zed Ann", Some("1980-05-01"), None).await;
        seed_person(&catalog.db, "nm2", "Ann Bell", Some("1950-02-03"), None).await;
        seed_person(&catalog.db, "nm3", "Mary Ann", Some("2001-11-30"), None).await;
        seed_person(&catalog.db, "nm4", "Bob", Some("1960-01-01"), None).await;

        let by_name = catalog.search_people("Ann", PersonOrder::Name).await.unwrap();
        assert_eq!(names(&by_name), ["Ann Bell", "Mary Ann", "  Zed Ann"]);

        let oldest = catalog.search_people("Ann", PersonOrder::OldestFirst).await.unwrap();
        assert_eq!(names(&oldest), ["Ann Bell", "  Zed Ann", "Mary Ann"]);

        let youngest = catalog.search_people("Ann", PersonOrder::YoungestFirst).await.unwrap();
        assert_eq!(names(&youngest), ["Mary Ann", "  Zed Ann", "Ann Bell"]);

        let mut unordered = catalog.search_people("Ann", PersonOrder::Unordered).await.unwrap();
        assert!(unordered.iter().all(|p| p.name.contains("Ann")));
        unordered.sort_by(|a, b| a.nm.cmp(&b.nm));
        assert_eq!(names(&unordered), ["  Zed Ann", "Ann Bell", "Mary Ann"]);

        assert!(catalog.search_people("Nobody", PersonOrder::Name).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_movies_orders_by_numeric_release() {
        let catalog = catalog().await;
        seed_movie(&catalog.db, "001", "Alpha", "1990", None, None).await;
        seed_movie(&catalog.db, "002", "Alphabet", "2000", None, None).await;
        seed_movie(&catalog.db, "003", "Alphaville", "965", None, None).await;
        seed_movie(&catalog.db, "004", "Omega", "1980", None, None).await;

        let oldest = catalog.search_movies("Alpha", MovieOrder::ReleaseOldestFirst).await.unwrap();
        assert_eq!(titles(&oldest), ["Alphaville", "Alpha", "Alphabet"]);

        let newest = catalog.search_movies("Alpha", MovieOrder::ReleaseNewestFirst).await.unwrap();
        assert_eq!(titles(&newest), ["Alphabet", "Alpha", "Alphaville"]);

        let by_title = catalog.search_movies("Alpha", MovieOrder::Title).await.unwrap();
        assert_eq!(titles(&by_title), ["Alpha", "Alphabet", "Alphaville"]);
    }

    #[tokio::test]
    async fn search_case_follows_sqlite_like() {
        let catalog = catalog().await;
        seed_person(&catalog.db, "nm001", "Jane Doe", None, None).await;

        let found = catalog.search_people("jane", PersonOrder::Name).await.unwrap();
        assert_eq!(names(&found), ["Jane Doe"]);
    }

    #[tokio::test]
    async fn cast_and_past_movies_follow_credits() {
        let catalog = catalog().await;
        seed_person(&catalog.db, "nm1", "Bea", None, None).await;
        seed_person(&catalog.db, "nm2", "Al", None, None).await;
        seed_person(&catalog.db, "nm3", "Cy", None, None).await;
        seed_movie(&catalog.db, "tt1", "Later", "2010", None, None).await;
        seed_movie(&catalog.db, "tt2", "Earlier", "1999", None, None).await;
        seed_credit(&catalog.db, "tt1", "nm1").await;
        seed_credit(&catalog.db, "tt1", "nm2").await;
        seed_credit(&catalog.db, "tt2", "nm1").await;

        let cast = catalog.get_cast("tt1").await.unwrap();
        assert_eq!(names(&cast), ["Al", "Bea"]);

        let past = catalog.get_past_movies("nm1").await.unwrap();
        assert_eq!(titles(&past), ["Earlier", "Later"]);

        assert!(catalog.get_past_movies("nm3").await.unwrap().is_empty());
        assert!(catalog.get_cast("tt404").await.unwrap().is_empty());
    }
}
