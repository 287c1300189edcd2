use crate::entities::{movie, person};

pub fn person_url(nm: &str) -> String {
    format!("/nm/{}", urlencoding::encode(nm))
}

pub fn movie_url(tt: &str) -> String {
    format!("/tt/{}", urlencoding::encode(tt))
}

/// A record that has a canonical detail page.
pub trait Linkable {
    fn detail_url(&self) -> String;
}

impl Linkable for person::Model {
    fn detail_url(&self) -> String {
        person_url(&self.nm)
    }
}

impl Linkable for movie::Model {
    fn detail_url(&self) -> String {
        movie_url(&self.tt)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Linked<T> {
    pub item: T,
    pub url: String,
}

impl<T: Linkable> Linked<T> {
    pub fn new(item: T) -> Self {
        let url = item.detail_url();
        Self { item, url }
    }
}

pub fn attach_links<T: Linkable>(rows: Vec<T>) -> Vec<Linked<T>> {
    rows.into_iter().map(Linked::new).collect()
}
