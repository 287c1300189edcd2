use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::{movie, person},
    links::Linked,
    models::{MovieOrder, PersonOrder, SearchKind, Stats},
    queries::NOT_AVAILABLE,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn home_page(
    stats: &Stats,
    flashes: &[String],
    person: Option<&Linked<person::Model>>,
    movie: Option<&Linked<movie::Model>>,
) -> String {
    page(
        "WMDb",
        stats,
        flashes,
        html! {
            h1 class="text-3xl font-bold text-gray-900" { "Search the WMDb" }
            p class="mt-2 text-gray-600" {
                "Look up people by name or movies by title. Partial names work too."
            }

            div class="mt-8 grid gap-4 md:grid-cols-2" {
                div class="bg-white shadow rounded-lg p-6" {
                    h2 class="text-sm font-semibold text-gray-500 uppercase" { "Random person" }
                    @if let Some(person) = person {
                        a class="mt-2 block text-lg text-blue-600 hover:text-blue-800" href=(person.url) { (person.item.name) }
                        p class="text-sm text-gray-500" { "Born " (or_na(person.item.birthdate.as_deref())) }
                    } @else {
                        p class="mt-2 text-gray-500" { "No people in the database yet." }
                    }
                }
                div class="bg-white shadow rounded-lg p-6" {
                    h2 class="text-sm font-semibold text-gray-500 uppercase" { "Random movie" }
                    @if let Some(movie) = movie {
                        a class="mt-2 block text-lg text-blue-600 hover:text-blue-800" href=(movie.url) { (movie.item.title) }
                        p class="text-sm text-gray-500" { "Released " (movie.item.release) }
                    } @else {
                        p class="mt-2 text-gray-500" { "No movies in the database yet." }
                    }
                }
            }
        },
    )
}

pub fn people_list(
    stats: &Stats,
    flashes: &[String],
    text: &str,
    people: &[Linked<person::Model>],
) -> String {
    page(
        "People",
        stats,
        flashes,
        html! {
            h1 class="text-2xl font-bold text-gray-900" {
                (people.len()) " people matching '" (text) "'"
            }
            ul class="mt-6 bg-white shadow rounded-lg divide-y divide-gray-100" {
                @for person in people {
                    li class="px-6 py-3 flex justify-between" {
                        a class="text-blue-600 hover:text-blue-800" href=(person.url) { (person.item.name) }
                        span class="text-sm text-gray-500" { (or_na(person.item.birthdate.as_deref())) }
                    }
                }
            }
        },
    )
}

pub fn movie_list(
    stats: &Stats,
    flashes: &[String],
    text: &str,
    movies: &[Linked<movie::Model>],
) -> String {
    page(
        "Movies",
        stats,
        flashes,
        html! {
            h1 class="text-2xl font-bold text-gray-900" {
                (movies.len()) " movies matching '" (text) "'"
            }
            ul class="mt-6 bg-white shadow rounded-lg divide-y divide-gray-100" {
                @for movie in movies {
                    li class="px-6 py-3 flex justify-between" {
                        a class="text-blue-600 hover:text-blue-800" href=(movie.url) { (movie.item.title) }
                        span class="text-sm text-gray-500" { (movie.item.release) }
                    }
                }
            }
        },
    )
}

pub fn person_detail(
    stats: &Stats,
    flashes: &[String],
    person: &person::Model,
    addedby: &str,
    movies: &[Linked<movie::Model>],
) -> String {
    page(
        &person.name,
        stats,
        flashes,
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-3xl font-bold text-gray-900" { (person.name) }
                dl class="mt-4 grid grid-cols-2 gap-2 text-sm" {
                    dt class="text-gray-500" { "ID" }
                    dd { (person.nm) }
                    dt class="text-gray-500" { "Born" }
                    dd { (or_na(person.birthdate.as_deref())) }
                    dt class="text-gray-500" { "Added by" }
                    dd { (addedby) }
                }

                h2 class="mt-8 text-lg font-semibold text-gray-900" { "Filmography" }
                @if movies.is_empty() {
                    p class="mt-2 text-gray-500" { "No credited movies." }
                } @else {
                    ul class="mt-2 space-y-1" {
                        @for movie in movies {
                            li {
                                a class="text-blue-600 hover:text-blue-800" href=(movie.url) { (movie.item.title) }
                                span class="ml-2 text-gray-500" { "(" (movie.item.release) ")" }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn movie_detail(
    stats: &Stats,
    flashes: &[String],
    movie: &movie::Model,
    director: Option<&Linked<person::Model>>,
    addedby: &str,
    cast: &[Linked<person::Model>],
) -> String {
    page(
        &movie.title,
        stats,
        flashes,
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-3xl font-bold text-gray-900" {
                    (movie.title)
                    span class="ml-2 font-normal text-gray-500" { "(" (movie.release) ")" }
                }
                dl class="mt-4 grid grid-cols-2 gap-2 text-sm" {
                    dt class="text-gray-500" { "ID" }
                    dd { (movie.tt) }
                    dt class="text-gray-500" { "Director" }
                    dd {
                        @if let Some(director) = director {
                            a class="text-blue-600 hover:text-blue-800" href=(director.url) { (director.item.name) }
                        } @else {
                            (NOT_AVAILABLE)
                        }
                    }
                    dt class="text-gray-500" { "Added by" }
                    dd { (addedby) }
                }

                h2 class="mt-8 text-lg font-semibold text-gray-900" { "Cast" }
                @if cast.is_empty() {
                    p class="mt-2 text-gray-500" { "No credited cast." }
                } @else {
                    ul class="mt-2 space-y-1" {
                        @for person in cast {
                            li {
                                a class="text-blue-600 hover:text-blue-800" href=(person.url) { (person.item.name) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found(stats: &Stats, flashes: &[String], kind: SearchKind) -> String {
    page(
        "Not found",
        stats,
        flashes,
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-2xl font-bold text-gray-900" { "No " (kind.as_str()) " found" }
                p class="mt-4 text-gray-700" {
                    "Try a shorter fragment of the "
                    @match kind {
                        SearchKind::Person => "name",
                        SearchKind::Movie => "title",
                    }
                    ", or search for something else."
                }
                a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Error" }
                script src=(TAILWIND_CDN) {}
            }
            body {
                div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                    div class="max-w-xl w-full px-6" {
                        div class="bg-white shadow rounded-lg p-8" {
                            h1 class="text-2xl font-bold text-gray-900" { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
                            p class="mt-4 text-gray-700" { (message) }
                            a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

fn page(title: &str, stats: &Stats, flashes: &[String], body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · WMDb" }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-gray-50" {
                header class="bg-white shadow" {
                    div class="max-w-4xl mx-auto px-6 py-4" {
                        a class="text-xl font-bold text-gray-900" href="/" { "WMDb" }
                        (search_form())
                    }
                }
                main class="max-w-4xl mx-auto px-6 py-10" {
                    @for message in flashes {
                        div class="mb-6 rounded-md border border-yellow-300 bg-yellow-50 px-4 py-3 text-yellow-800" role="alert" {
                            (message)
                        }
                    }
                    (body)
                }
                footer class="max-w-4xl mx-auto px-6 pb-10 text-xs text-gray-500" {
                    "As of " (stats.now) ", the WMDb holds " (stats.people) " people and " (stats.movies) " movies."
                }
            }
        }
    }
    .into_string()
}

fn search_form() -> Markup {
    html! {
        form class="mt-3 flex flex-wrap items-center gap-3" method="get" action="/query/" {
            input class="flex-1 rounded-md border border-gray-300 px-3 py-2" type="text" name="query" placeholder="Name or title" required;
            label class="text-sm text-gray-700" {
                input type="radio" name="kind" value="person" checked;
                " person"
            }
            label class="text-sm text-gray-700" {
                input type="radio" name="kind" value="movie";
                " movie"
            }
            select class="rounded-md border border-gray-300 px-2 py-2 text-sm" name="order" {
                optgroup label="People" {
                    @for choice in PersonOrder::CHOICES {
                        option value=(choice) { (choice) }
                    }
                }
                optgroup label="Movies" {
                    @for choice in MovieOrder::CHOICES {
                        option value=(choice) { (choice) }
                    }
                }
            }
            button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
        }
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}
