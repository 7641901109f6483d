//! REST calls against the movie backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error, since the live
//! endpoints are only reachable from the browser.
//!
//! All fetchers funnel failures into [`ApiError`], classifying backend
//! error bodies exactly once in `error_from_response`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AuthSuccess, LoginRequest, Movie, MovieCategory, MovieDetail, RegisterRequest,
    RegisterResponse, User,
};

/// Base of the public movie backend. Fixed; the API is a remote third
/// party and carries no environment-specific configuration.
pub const API_BASE: &str = "https://shy-cloud-3319.fly.dev/api/v1";

// ===== URL builders =====

/// URL of a curated listing page.
#[must_use]
pub fn category_url(category: MovieCategory, page: u32) -> String {
    format!("{API_BASE}/movie/{}?page={page}", category.path_segment())
}

/// URL of a search results page.
#[must_use]
pub fn search_url(query: &str, page: u32) -> String {
    format!(
        "{API_BASE}/search/movie?page={page}&query={}",
        urlencoding::encode(query)
    )
}

/// URL of a single movie's detail document.
#[must_use]
pub fn detail_url(id: i64) -> String {
    format!("{API_BASE}/movie/{id}")
}

/// URL of an auth endpoint (`login`, `register`, `google`, `me`).
#[must_use]
pub fn auth_url(leaf: &str) -> String {
    format!("{API_BASE}/auth/{leaf}")
}

// ===== Auth endpoints =====

/// Exchange email and password for a session token via `POST /auth/login`.
///
/// # Errors
///
/// [`ApiError::MissingToken`] when the backend answers 2xx without a
/// token; otherwise the transport or status failure that occurred.
pub async fn login(request: &LoginRequest) -> Result<AuthSuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{ApiEnvelope, AuthData};

        let resp = post_json(&auth_url("login"), request).await?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        let envelope = resp
            .json::<ApiEnvelope<AuthData>>()
            .await
            .map_err(|_| ApiError::Decode)?;
        envelope.data.into_success()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// Create an account via `POST /auth/register`.
///
/// Any 2xx comes back as a [`RegisterResponse`]; which status counts as
/// an actual account creation is the form's decision, not this layer's.
///
/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{ApiEnvelope, AuthData};

        let resp = post_json(&auth_url("register"), request).await?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        // Lenient body parse: a 204 or an empty body simply yields no token.
        let token = resp
            .json::<ApiEnvelope<AuthData>>()
            .await
            .ok()
            .and_then(|envelope| envelope.data.token);
        Ok(RegisterResponse { status: resp.status(), token })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// Exchange a Google access token for a backend session token via
/// `POST /auth/google`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn google_exchange(access_token: &str) -> Result<AuthSuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{ApiEnvelope, AuthData, GoogleTokenRequest};

        let body = GoogleTokenRequest { access_token: access_token.to_owned() };
        let resp = post_json(&auth_url("google"), &body).await?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        let envelope = resp
            .json::<ApiEnvelope<AuthData>>()
            .await
            .map_err(|_| ApiError::Decode)?;
        envelope.data.into_success()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(ApiError::Network)
    }
}

/// Fetch the signed-in account's profile via `GET /auth/me`.
///
/// # Errors
///
/// Transport failures, non-2xx statuses (including 401 for a stale
/// token), and undecodable bodies.
pub async fn fetch_profile(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ApiEnvelope;

        let resp = gloo_net::http::Request::get(&auth_url("me"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        let envelope = resp
            .json::<ApiEnvelope<User>>()
            .await
            .map_err(|_| ApiError::Decode)?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}

// ===== Movie endpoints =====

/// Fetch one page of a curated listing.
///
/// # Errors
///
/// Transport failures, non-2xx statuses, and undecodable bodies.
pub async fn fetch_category(category: MovieCategory, page: u32) -> Result<Vec<Movie>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_movie_list(&category_url(category, page)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (category, page);
        Err(ApiError::Network)
    }
}

/// Fetch one page of title search results.
///
/// # Errors
///
/// Transport failures, non-2xx statuses, and undecodable bodies.
pub async fn search_movies(query: &str, page: u32) -> Result<Vec<Movie>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_movie_list(&search_url(query, page)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, page);
        Err(ApiError::Network)
    }
}

/// Fetch one movie's full detail document.
///
/// # Errors
///
/// Transport failures, non-2xx statuses (404 for an unknown id), and
/// undecodable bodies.
pub async fn fetch_movie(id: i64) -> Result<MovieDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ApiEnvelope;

        let resp = gloo_net::http::Request::get(&detail_url(id))
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        let envelope = resp
            .json::<ApiEnvelope<MovieDetail>>()
            .await
            .map_err(|_| ApiError::Decode)?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network)
    }
}

// ===== Transport plumbing (browser only) =====

#[cfg(feature = "hydrate")]
async fn get_movie_list(url: &str) -> Result<Vec<Movie>, ApiError> {
    use super::types::ApiEnvelope;

    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(error_from_response(&resp).await);
    }
    let envelope = resp
        .json::<ApiEnvelope<Vec<Movie>>>()
        .await
        .map_err(|_| ApiError::Decode)?;
    Ok(envelope.data)
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|_| ApiError::Decode)?
        .send()
        .await
        .map_err(|_| ApiError::Network)
}

/// Reads the error body (if any) off a non-2xx response and classifies
/// the backend message. This is the single point that looks at backend
/// error strings.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: &gloo_net::http::Response) -> ApiError {
    let message = resp
        .json::<super::types::BackendErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Status {
        status: resp.status(),
        kind: super::error::BackendErrorKind::classify(message.as_deref()),
    }
}
