//! Wire types for the movie backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// TMDB image CDN prefix; sizes are appended per use site.
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";

/// Every backend response wraps its payload in a `data` envelope.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Account identity as the auth endpoints report it. The login and Google
/// exchange responses carry a partial shape, so every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Raw `data` object of the login, register, and Google exchange responses.
/// The token is optional because the backend has been seen returning 2xx
/// bodies without one.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(flatten)]
    pub user: User,
}

impl AuthData {
    /// Lifts the payload into a success, or flags the token gap.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingToken`] when the 2xx body carried no token.
    pub fn into_success(self) -> Result<AuthSuccess, ApiError> {
        match self.token {
            Some(token) => Ok(AuthSuccess { token, user: self.user }),
            None => Err(ApiError::MissingToken),
        }
    }
}

/// A login or Google exchange that actually produced a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSuccess {
    pub token: String,
    pub user: User,
}

/// Raw outcome of a registration call that reached the backend and came
/// back 2xx. Interpretation (which status counts as created) is left to
/// the form logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterResponse {
    pub status: u16,
    pub token: Option<String>,
}

/// Body of the login request.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of the registration request. The backend expects the username
/// under the `name` key.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Body of the Google token exchange request.
#[derive(Clone, Debug, Serialize)]
pub struct GoogleTokenRequest {
    pub access_token: String,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// One movie as it appears in listing, search, and detail responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    /// Full CDN URL of the card-sized poster, when the movie has one.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{IMAGE_BASE}w342{path}"))
    }

    /// Full CDN URL of the wide backdrop, when the movie has one.
    #[must_use]
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_ref()
            .map(|path| format!("{IMAGE_BASE}w1280{path}"))
    }

    /// Year part of the release date.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|date| date.get(..4))
    }

    /// Vote average formatted to one decimal, when present.
    #[must_use]
    pub fn rating_label(&self) -> Option<String> {
        self.vote_average.map(|avg| format!("{avg:.1}"))
    }
}

/// One genre tag on a movie detail response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Genre {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// The detail endpoint returns the listing shape plus genres and runtime.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime: Option<u32>,
}

impl MovieDetail {
    /// Genre names joined for display, or `None` when the list is empty.
    #[must_use]
    pub fn genre_label(&self) -> Option<String> {
        if self.genres.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.genres.iter().map(|g| g.name.as_str()).collect();
        Some(names.join(", "))
    }

    /// Runtime formatted as hours and minutes, when present.
    #[must_use]
    pub fn runtime_label(&self) -> Option<String> {
        self.runtime.map(|mins| format!("{}h {:02}m", mins / 60, mins % 60))
    }
}

/// The four curated movie listings the backend exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieCategory {
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
}

impl MovieCategory {
    /// Path segment under `/movie/` for this listing.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::Upcoming => "upcoming",
            Self::NowPlaying => "now_playing",
        }
    }

    /// Heading shown above the listing.
    #[must_use]
    pub fn display_title(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::TopRated => "Top Rated",
            Self::Upcoming => "Upcoming",
            Self::NowPlaying => "Now Playing",
        }
    }

    /// App route that shows the full paginated listing.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Popular => "/Popular",
            Self::TopRated => "/TopRated",
            Self::Upcoming => "/UpComing",
            Self::NowPlaying => "/NowPlaying",
        }
    }
}
