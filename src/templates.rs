use maud::{DOCTYPE, Markup, html};

use crate::models::{Movie, Rating};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[Movie]) -> String {
    page(
        "Movie Catalog",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "Movie Catalog" }
                            p class="mt-2 text-gray-600" { (movies.len()) " movie" @if movies.len() != 1 { "s" } " in the catalog." }
                        }
                        div class="flex gap-4 text-sm" {
                            a class="text-blue-600 hover:text-blue-800" href="/seed" { "Seed" }
                            a class="text-blue-600 hover:text-blue-800" href="/update-demo" { "Update demo" }
                            a class="text-blue-600 hover:text-blue-800" href="/delete-demo" { "Delete demo" }
                        }
                    }

                    @if movies.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Seed the catalog or add one below." }
                        }
                    } @else {
                        div class="mt-8 bg-white shadow rounded-lg overflow-hidden" {
                            table class="w-full text-left" {
                                thead class="bg-gray-100 text-sm text-gray-700" {
                                    tr {
                                        th class="px-6 py-3" { "Title" }
                                        th class="px-6 py-3" { "Year" }
                                        th class="px-6 py-3" { "Rating" }
                                    }
                                }
                                tbody class="divide-y divide-gray-100" {
                                    @for movie in movies {
                                        tr {
                                            td class="px-6 py-3 font-medium text-gray-900" { (movie.title) }
                                            td class="px-6 py-3 text-gray-700" { (movie.year) }
                                            td class="px-6 py-3 text-gray-700" { (movie.rating) }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    (add_movie_form())
                }
            }
        },
    )
}

pub fn result_page(title: &str, payload: &str, hint: &str) -> String {
    page(
        title,
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (title) }
                        pre class="mt-4 rounded-md bg-gray-900 p-4 text-sm text-gray-100 overflow-x-auto" { (payload) }
                        p class="mt-4 text-sm text-gray-500" { (hint) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back to catalog" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn add_movie_form() -> Markup {
    html! {
        div class="mt-8 bg-white shadow rounded-lg p-8" {
            h2 class="text-xl font-semibold text-gray-900" { "Add a movie" }

            form class="mt-6 space-y-4" method="post" action="/movies" {
                div {
                    label class="block text-sm font-medium text-gray-700" for="title" { "Title" }
                    input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title" required;
                }

                div {
                    label class="block text-sm font-medium text-gray-700" for="year" { "Year" }
                    input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" type="number" name="year" id="year" min="1888" required;
                }

                div {
                    label class="block text-sm font-medium text-gray-700" for="rating" { "Rating" }
                    select class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" {
                        @for rating in Rating::ALL {
                            option value=(rating.as_str()) { (rating) }
                        }
                    }
                }

                button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add" }
            }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
