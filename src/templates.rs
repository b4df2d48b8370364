use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{
    auth::CurrentUser,
    booking::{BookingView, CheckoutQuote},
    entities::{movie, review, seat, showtime, theater},
    models::{BookingSummary, DashboardStats, SeatMapRow, ShowtimeListing},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn format_cents(cents: i64) -> String {
    format!("₱{}.{:02}", cents / 100, (cents % 100).abs())
}

pub fn home_page(user: Option<&CurrentUser>, featured: &[movie::Model]) -> String {
    page(
        "CinePass",
        user,
        html! {
            div class="max-w-6xl mx-auto px-6 py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "Now Showing" }
                p class="mt-2 text-gray-600" { "Book your seats before they're gone." }

                @if featured.is_empty() {
                    div class="mt-10 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "No movies are currently showing." }
                    }
                } @else {
                    div class="mt-10 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6" {
                        @for movie in featured {
                            (movie_card(movie))
                        }
                    }
                }

                div class="mt-10" {
                    a class="text-blue-600 hover:text-blue-800" href="/movies/" { "Browse all movies →" }
                }
            }
        },
    )
}

pub fn movie_list_page(
    user: Option<&CurrentUser>,
    movies: &[movie::Model],
    genres: &[String],
    selected_genre: Option<&str>,
    search_query: Option<&str>,
) -> String {
    let heading = match search_query {
        Some(q) if !q.is_empty() => format!("Search results for \"{q}\""),
        Some(_) => "Search".to_string(),
        None => "Movies".to_string(),
    };

    page(
        &heading,
        user,
        html! {
            div class="max-w-6xl mx-auto px-6 py-12" {
                div class="flex items-start justify-between gap-6" {
                    h1 class="text-3xl font-bold text-gray-900" { (heading) }
                    form class="flex gap-2" method="get" action="/search/" {
                        input class="rounded-md border border-gray-300 px-3 py-2" type="text" name="q" placeholder="Search movies..." value=[search_query];
                        button class="rounded-md bg-blue-600 px-4 py-2 text-white hover:bg-blue-700" type="submit" { "Search" }
                    }
                }

                @if !genres.is_empty() {
                    div class="mt-6 flex flex-wrap gap-2" {
                        a class=(genre_pill(selected_genre.is_none())) href="/movies/" { "All" }
                        @for genre in genres {
                            a class=(genre_pill(selected_genre == Some(genre.as_str())))
                                href=(format!("/movies/?genre={}", urlencoding::encode(genre))) { (genre) }
                        }
                    }
                }

                @if movies.is_empty() {
                    div class="mt-10 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "No movies found." }
                    }
                } @else {
                    div class="mt-10 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6" {
                        @for movie in movies {
                            (movie_card(movie))
                        }
                    }
                }
            }
        },
    )
}

pub fn movie_detail_page(
    user: Option<&CurrentUser>,
    movie: &movie::Model,
    showtimes: &[ShowtimeListing],
    reviews: &[(review::Model, String)],
    can_review: bool,
) -> String {
    page(
        &movie.title,
        user,
        html! {
            div class="max-w-4xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                    p class="mt-1 text-sm text-gray-500" {
                        (movie.genre) " · " (movie.duration_minutes) " min · directed by " (movie.director)
                    }
                    p class="mt-1 text-sm text-yellow-600" { "★ " (format!("{:.1}", movie.rating)) }
                    p class="mt-4 text-gray-700" { (movie.description) }
                    p class="mt-2 text-sm text-gray-500" { "Released " (movie.release_date) }
                }

                div class="mt-10" {
                    h2 class="text-2xl font-semibold text-gray-900" { "Showtimes" }
                    @if showtimes.is_empty() {
                        p class="mt-4 text-gray-600" { "No showtimes in the next 30 days." }
                    } @else {
                        div class="mt-4 space-y-3" {
                            @for listing in showtimes {
                                div class="bg-white shadow rounded-lg p-4 flex items-center justify-between" {
                                    div {
                                        p class="font-medium text-gray-900" {
                                            (listing.showtime.show_date) " at " (listing.showtime.show_time)
                                        }
                                        p class="text-sm text-gray-500" {
                                            (listing.theater.name) " · " (listing.theater.location)
                                            " · " (listing.showtime.available_seats) " seats left"
                                        }
                                    }
                                    div class="text-right" {
                                        p class="font-semibold text-gray-900" {
                                            (format_cents(listing.showtime.ticket_price_cents))
                                        }
                                        a class="mt-1 inline-block rounded-md bg-blue-600 px-4 py-2 text-sm text-white hover:bg-blue-700"
                                            href=(format!("/bookings/seat-selection/{}/", listing.showtime.id)) { "Book" }
                                    }
                                }
                            }
                        }
                    }
                }

                div class="mt-10" {
                    div class="flex items-center justify-between" {
                        h2 class="text-2xl font-semibold text-gray-900" { "Reviews" }
                        @if can_review {
                            a class="text-blue-600 hover:text-blue-800"
                                href=(format!("/bookings/add-review/{}/", movie.id)) { "Write a review" }
                        }
                    }
                    @if reviews.is_empty() {
                        p class="mt-4 text-gray-600" { "No reviews yet." }
                    } @else {
                        div class="mt-4 space-y-3" {
                            @for (review, username) in reviews {
                                div class="bg-white shadow rounded-lg p-4" {
                                    p class="text-yellow-600" { (stars(review.rating)) }
                                    @if !review.comment.is_empty() {
                                        p class="mt-2 text-gray-700" { (review.comment) }
                                    }
                                    p class="mt-2 text-sm text-gray-500" { "— " (username) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn seat_selection_page(
    user: &CurrentUser,
    movie: &movie::Model,
    theater: &theater::Model,
    showtime: &showtime::Model,
    rows: &[SeatMapRow],
) -> String {
    page(
        "Select seats",
        Some(user),
        html! {
            div class="max-w-4xl mx-auto px-6 py-12" {
                h1 class="text-3xl font-bold text-gray-900" { "Select your seats" }
                p class="mt-2 text-gray-600" {
                    (movie.title) " · " (theater.name) " · " (showtime.show_date) " at " (showtime.show_time)
                    " · " (format_cents(showtime.ticket_price_cents)) " per seat"
                }

                div class="mt-8 bg-white shadow rounded-lg p-8" {
                    div class="mx-auto mb-8 h-2 max-w-lg rounded bg-gray-300 text-center text-xs text-gray-500" { "SCREEN" }
                    div class="space-y-3" {
                        @for row in rows {
                            div class="flex items-center gap-2" {
                                span class="w-6 text-sm font-medium text-gray-500" { (row.row) }
                                @for status in &row.seats {
                                    @if status.is_booked {
                                        button type="button" disabled
                                            class="h-9 w-9 rounded bg-gray-400 text-xs text-white cursor-not-allowed" {
                                            (status.seat.column)
                                        }
                                    } @else {
                                        button type="button"
                                            class=(format!("seat h-9 w-9 rounded text-xs text-white hover:opacity-80 {}", seat_color(&status.seat)))
                                            onclick=(format!("toggleSeat(this, {})", status.seat.id)) {
                                            (status.seat.column)
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div class="mt-8 flex flex-wrap gap-4 text-sm text-gray-600" {
                        span { span class="inline-block h-3 w-3 rounded bg-blue-600 mr-1" {} "Standard" }
                        span { span class="inline-block h-3 w-3 rounded bg-purple-600 mr-1" {} "Premium" }
                        span { span class="inline-block h-3 w-3 rounded bg-amber-500 mr-1" {} "VIP" }
                        span { span class="inline-block h-3 w-3 rounded bg-gray-400 mr-1" {} "Booked" }
                    }

                    form class="mt-8 flex items-center justify-between" method="get"
                        action=(format!("/bookings/checkout/{}/", showtime.id)) {
                        p class="text-gray-700" { span id="seat-count" { "0" } " seat(s) selected" }
                        input type="hidden" id="seat-ids" name="seats" value="";
                        button class="rounded-md bg-blue-600 px-6 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Continue" }
                    }
                }
            }
            script { (PreEscaped(SEAT_PICKER_JS)) }
        },
    )
}

const SEAT_PICKER_JS: &str = r#"
const selected = new Set();
function toggleSeat(btn, id) {
  if (selected.has(id)) {
    selected.delete(id);
    btn.classList.remove('ring-4', 'ring-green-400');
  } else {
    selected.add(id);
    btn.classList.add('ring-4', 'ring-green-400');
  }
  document.getElementById('seat-ids').value = Array.from(selected).join(',');
  document.getElementById('seat-count').textContent = selected.size;
}
"#;

pub fn checkout_page(
    user: &CurrentUser,
    movie: &movie::Model,
    quote: &CheckoutQuote,
    error: Option<&str>,
) -> String {
    let seat_ids =
        quote.seats.iter().map(|s| s.id.to_string()).collect::<Vec<_>>().join(",");

    page(
        "Checkout",
        Some(user),
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                h1 class="text-3xl font-bold text-gray-900" { "Confirm your booking" }

                @if let Some(message) = error {
                    div class="mt-6 rounded-md bg-red-50 border border-red-200 p-4 text-red-700" {
                        p { (message) }
                        a class="mt-2 inline-block text-blue-600 hover:text-blue-800"
                            href=(format!("/bookings/seat-selection/{}/", quote.showtime.id)) { "Pick different seats" }
                    }
                }

                div class="mt-8 bg-white shadow rounded-lg p-8" {
                    h2 class="text-xl font-semibold text-gray-900" { (movie.title) }
                    p class="mt-1 text-gray-600" {
                        (quote.showtime.show_date) " at " (quote.showtime.show_time)
                    }

                    table class="mt-6 w-full text-left" {
                        thead {
                            tr class="text-sm text-gray-500" {
                                th class="py-2" { "Seat" }
                                th class="py-2" { "Type" }
                                th class="py-2 text-right" { "Price" }
                            }
                        }
                        tbody {
                            @for seat in &quote.seats {
                                tr class="border-t" {
                                    td class="py-2 font-medium" { (seat.seat_number) }
                                    td class="py-2 text-gray-600" { (seat.seat_type) }
                                    td class="py-2 text-right" { (format_cents(quote.showtime.ticket_price_cents)) }
                                }
                            }
                        }
                        tfoot {
                            tr class="border-t" {
                                td class="py-3 font-semibold" colspan="2" { "Total" }
                                td class="py-3 text-right font-semibold" { (format_cents(quote.total_price_cents)) }
                            }
                        }
                    }

                    form class="mt-6" method="post" action=(format!("/bookings/checkout/{}/", quote.showtime.id)) {
                        input type="hidden" name="seat_ids" value=(seat_ids);
                        button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" {
                            "Confirm booking"
                        }
                    }
                }
            }
        },
    )
}

pub fn confirmation_page(user: &CurrentUser, view: &BookingView) -> String {
    page(
        "Booking confirmed",
        Some(user),
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8 text-center" {
                    div class="mx-auto flex h-12 w-12 items-center justify-center rounded-full bg-green-100 text-green-600 text-2xl" { "✓" }
                    h1 class="mt-4 text-2xl font-bold text-gray-900" { "Booking confirmed" }
                    p class="mt-1 text-gray-500" { "BOOKING-" (view.booking.id) }
                }

                div class="mt-6 bg-white shadow rounded-lg p-8" {
                    (booking_details(view))
                    div class="mt-6 flex gap-3" {
                        a class="rounded-md bg-blue-600 px-4 py-2 text-white hover:bg-blue-700"
                            href=(format!("/bookings/ticket/{}/", view.booking.id)) { "Download ticket" }
                        a class="rounded-md border border-gray-300 px-4 py-2 text-gray-700 hover:bg-gray-50"
                            href="/bookings/history/" { "Booking history" }
                    }
                }
            }
        },
    )
}

pub fn ticket_page(view: &BookingView) -> String {
    let seats = view
        .items
        .iter()
        .map(|(_, seat)| seat.seat_number.clone())
        .collect::<Vec<_>>()
        .join(", ");

    page(
        "Your ticket",
        None,
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="overflow-hidden rounded-lg shadow" {
                    div class="bg-blue-600 p-6 text-white" {
                        h1 class="text-xl font-bold" { "CinePass — Ticket" }
                        p class="text-sm opacity-80" { "BOOKING-" (view.booking.id) }
                    }
                    div class="bg-white p-6" {
                        h2 class="text-2xl font-bold text-gray-900" { (view.movie.title) }
                        p class="mt-2 text-gray-700" { "Theater: " (view.theater.name) }
                        p class="text-gray-700" { "Date: " (view.showtime.show_date) }
                        p class="text-gray-700" { "Time: " (view.showtime.show_time) }
                        p class="mt-4 text-gray-900" { "Seats: " (seats) }
                        p class="mt-2 text-lg font-semibold text-emerald-600" {
                            "Total paid: " (format_cents(view.booking.total_price_cents))
                        }
                        p class="mt-6 text-sm text-indigo-500" { "Present this ticket at the theater entrance." }
                    }
                }
                div class="mt-6 text-center" {
                    button class="rounded-md bg-blue-600 px-4 py-2 text-white hover:bg-blue-700"
                        onclick="window.print()" { "Print ticket" }
                }
            }
        },
    )
}

pub fn history_page(user: &CurrentUser, bookings: &[BookingSummary]) -> String {
    page(
        "Booking history",
        Some(user),
        html! {
            div class="max-w-4xl mx-auto px-6 py-12" {
                h1 class="text-3xl font-bold text-gray-900" { "Booking history" }

                @if bookings.is_empty() {
                    div class="mt-10 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "You have no bookings yet." }
                        a class="mt-2 inline-block text-blue-600 hover:text-blue-800" href="/movies/" { "Browse movies" }
                    }
                } @else {
                    div class="mt-10 space-y-4" {
                        @for summary in bookings {
                            (booking_row(summary))
                        }
                    }
                }
            }
        },
    )
}

pub fn dashboard_page(user: &CurrentUser, stats: &DashboardStats) -> String {
    page(
        "Dashboard",
        Some(user),
        html! {
            div class="max-w-4xl mx-auto px-6 py-12" {
                h1 class="text-3xl font-bold text-gray-900" { "Hi, " (user.username) }

                div class="mt-8 grid grid-cols-1 sm:grid-cols-2 gap-6" {
                    div class="bg-white shadow rounded-lg p-6" {
                        p class="text-sm text-gray-500" { "Total bookings" }
                        p class="mt-1 text-3xl font-bold text-gray-900" { (stats.total_bookings) }
                    }
                    div class="bg-white shadow rounded-lg p-6" {
                        p class="text-sm text-gray-500" { "Total spent" }
                        p class="mt-1 text-3xl font-bold text-gray-900" { (format_cents(stats.total_spent_cents)) }
                    }
                }

                h2 class="mt-10 text-2xl font-semibold text-gray-900" { "Recent bookings" }
                @if stats.recent.is_empty() {
                    p class="mt-4 text-gray-600" { "Nothing here yet." }
                } @else {
                    div class="mt-4 space-y-4" {
                        @for summary in &stats.recent {
                            (booking_row(summary))
                        }
                    }
                }
            }
        },
    )
}

pub fn review_page(user: &CurrentUser, movie: &movie::Model, error: Option<&str>) -> String {
    page(
        "Write a review",
        Some(user),
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                h1 class="text-3xl font-bold text-gray-900" { "Review " (movie.title) }

                @if let Some(message) = error {
                    div class="mt-6 rounded-md bg-red-50 border border-red-200 p-4 text-red-700" { (message) }
                }

                form class="mt-8 bg-white shadow rounded-lg p-8 space-y-6" method="post"
                    action=(format!("/bookings/add-review/{}/", movie.id)) {
                    div {
                        label class="block text-sm font-medium text-gray-700" { "Rating" }
                        div class="mt-2 flex gap-4" {
                            @for value in 1..=5 {
                                label class="flex items-center gap-1 text-gray-700" {
                                    input type="radio" name="rating" value=(value) required;
                                    (value)
                                }
                            }
                        }
                    }
                    div {
                        label class="block text-sm font-medium text-gray-700" for="comment" { "Comment" }
                        textarea class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" name="comment" id="comment" rows="4"
                            placeholder="Share your thoughts about this movie..." {}
                    }
                    button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Submit review" }
                }
            }
        },
    )
}

pub fn login_page(error: Option<&str>) -> String {
    auth_page("Log in", "/login/", error, html! {
        div {
            label class="block text-sm font-medium text-gray-700" for="username" { "Username" }
            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" name="username" id="username" required;
        }
        div {
            label class="block text-sm font-medium text-gray-700" for="password" { "Password" }
            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" type="password" name="password" id="password" required;
        }
    }, html! {
        p class="mt-6 text-sm text-gray-600" {
            "No account yet? " a class="text-blue-600 hover:text-blue-800" href="/register/" { "Register" }
        }
    })
}

pub fn register_page(error: Option<&str>) -> String {
    auth_page("Register", "/register/", error, html! {
        div {
            label class="block text-sm font-medium text-gray-700" for="username" { "Username" }
            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" name="username" id="username" required;
        }
        div {
            label class="block text-sm font-medium text-gray-700" for="email" { "Email" }
            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" type="email" name="email" id="email" required;
        }
        div {
            label class="block text-sm font-medium text-gray-700" for="password1" { "Password" }
            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" type="password" name="password1" id="password1" required;
        }
        div {
            label class="block text-sm font-medium text-gray-700" for="password2" { "Confirm password" }
            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" type="password" name="password2" id="password2" required;
        }
    }, html! {
        p class="mt-6 text-sm text-gray-600" {
            "Already registered? " a class="text-blue-600 hover:text-blue-800" href="/login/" { "Log in" }
        }
    })
}

pub fn error_page(message: &str) -> String {
    page(
        "Error",
        None,
        html! {
            div class="min-h-[60vh] flex items-center justify-center" {
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

/* ---------- shared chrome ---------- */

fn page(title: &str, user: Option<&CurrentUser>, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · CinePass" }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-gray-50" {
                (nav(user))
                (body)
            }
        }
    }
    .into_string()
}

fn nav(user: Option<&CurrentUser>) -> Markup {
    html! {
        nav class="bg-white shadow" {
            div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between" {
                a class="text-xl font-bold text-blue-600" href="/" { "CinePass" }
                div class="flex items-center gap-4 text-sm" {
                    a class="text-gray-700 hover:text-blue-600" href="/movies/" { "Movies" }
                    @if let Some(user) = user {
                        a class="text-gray-700 hover:text-blue-600" href="/bookings/dashboard/" { "Dashboard" }
                        a class="text-gray-700 hover:text-blue-600" href="/bookings/history/" { "My bookings" }
                        form method="post" action="/logout/" {
                            button class="text-gray-700 hover:text-blue-600" type="submit" {
                                "Log out (" (user.username) ")"
                            }
                        }
                    } @else {
                        a class="text-gray-700 hover:text-blue-600" href="/login/" { "Log in" }
                        a class="rounded-md bg-blue-600 px-3 py-1.5 text-white hover:bg-blue-700" href="/register/" { "Register" }
                    }
                }
            }
        }
    }
}

fn auth_page(
    title: &str,
    action: &str,
    error: Option<&str>,
    fields: Markup,
    footer: Markup,
) -> String {
    page(
        title,
        None,
        html! {
            div class="max-w-md mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { (title) }

                    @if let Some(message) = error {
                        div class="mt-4 rounded-md bg-red-50 border border-red-200 p-3 text-sm text-red-700" { (message) }
                    }

                    form class="mt-6 space-y-5" method="post" action=(action) {
                        (fields)
                        button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { (title) }
                    }
                    (footer)
                }
            }
        },
    )
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        a class="block bg-white shadow rounded-lg overflow-hidden hover:shadow-md"
            href=(format!("/movie/{}/", movie.id)) {
            div class="flex h-40 items-center justify-center bg-gray-200 text-4xl" { "🎬" }
            div class="p-4" {
                h2 class="font-semibold text-gray-900" { (movie.title) }
                p class="mt-1 text-sm text-gray-500" { (movie.genre) " · " (movie.duration_minutes) " min" }
                p class="mt-1 text-sm text-yellow-600" { "★ " (format!("{:.1}", movie.rating)) }
            }
        }
    }
}

fn booking_row(summary: &BookingSummary) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-4 flex items-center justify-between" {
            div {
                p class="font-medium text-gray-900" { (summary.movie_title) }
                p class="text-sm text-gray-500" {
                    (summary.theater_name) " · " (summary.show_date) " at " (summary.show_time)
                }
                p class="text-sm text-gray-500" { "Seats: " (summary.seat_numbers.join(", ")) }
            }
            div class="text-right" {
                p class="font-semibold text-gray-900" { (format_cents(summary.booking.total_price_cents)) }
                p class="text-sm text-gray-500" { (summary.booking.status) }
                a class="text-sm text-blue-600 hover:text-blue-800"
                    href=(format!("/bookings/confirmation/{}/", summary.booking.id)) { "Details" }
            }
        }
    }
}

fn booking_details(view: &BookingView) -> Markup {
    html! {
        h2 class="text-xl font-semibold text-gray-900" { (view.movie.title) }
        p class="mt-1 text-gray-600" {
            (view.theater.name) " · " (view.showtime.show_date) " at " (view.showtime.show_time)
        }
        table class="mt-4 w-full text-left" {
            tbody {
                @for (item, seat) in &view.items {
                    tr class="border-t" {
                        td class="py-2 font-medium" { (seat.seat_number) }
                        td class="py-2 text-gray-600" { (seat.seat_type) }
                        td class="py-2 text-right" { (format_cents(item.price_cents)) }
                    }
                }
            }
            tfoot {
                tr class="border-t" {
                    td class="py-3 font-semibold" colspan="2" {
                        (view.booking.number_of_seats) " seat(s)"
                    }
                    td class="py-3 text-right font-semibold" {
                        (format_cents(view.booking.total_price_cents))
                    }
                }
            }
        }
    }
}

fn seat_color(seat: &seat::Model) -> &'static str {
    match seat.seat_type.as_str() {
        crate::entities::seat::TYPE_VIP => "bg-amber-500",
        crate::entities::seat::TYPE_PREMIUM => "bg-purple-600",
        _ => "bg-blue-600",
    }
}

fn genre_pill(active: bool) -> &'static str {
    if active {
        "rounded-full bg-blue-600 px-3 py-1 text-sm text-white"
    } else {
        "rounded-full bg-white px-3 py-1 text-sm text-gray-700 shadow hover:bg-gray-100"
    }
}

fn stars(rating: i32) -> String {
    "★".repeat(rating.clamp(0, 5) as usize)
}
