//! Typed client for the backend REST surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each preceded by a
//! fresh bearer token from `SessionService`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is fire-and-await: no retry, no de-duplication, no queueing.
//! Non-success statuses map through `schema::error_from_status` and bodies
//! decode through the typed schema, so callers see one `ApiError` per call
//! and decide locally between a toast and the access-denied panel.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::{
    AdminSuggestionsResponse, AdminUser, AdminUsersResponse, ApiError, Endpoint, GeneratedRecipe, MealPlanEntry,
    MealPlanResponse, MessageResponse, RecipeRequest, ReportKind, SignupRequest, SignupResponse, Suggestion,
    SuggestionRequest, UpdateProfileRequest, UpdateProfileResponse, UserProfile, WorkoutLogRequest, decode_json,
    decode_recipe,
};

use super::identity::SessionService;

/// Split a finished response into its body or a typed failure.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16, body: Vec<u8>) -> Result<Vec<u8>, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(schema::error_from_status(status, &body))
    }
}

/// Shared API handle; `Copy` so handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base_url: &'static str,
    session: SessionService,
}

impl ApiClient {
    pub fn new(base_url: &'static str, session: SessionService) -> Self {
        Self { base_url, session }
    }

    /// `POST /api/signup`: create the profile for the just-registered identity.
    ///
    /// # Errors
    ///
    /// Returns the call's [`ApiError`].
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        decode_json(&self.post(Endpoint::Signup, request).await?)
    }

    /// # Errors
    ///
    /// Returns the call's [`ApiError`].
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        decode_json(&self.get(Endpoint::Profile).await?)
    }

    /// # Errors
    ///
    /// Returns the call's [`ApiError`].
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<UpdateProfileResponse, ApiError> {
        decode_json(&self.post(Endpoint::UpdateProfile, request).await?)
    }

    /// # Errors
    ///
    /// Returns the call's [`ApiError`].
    pub async fn meal_plan(&self) -> Result<Vec<MealPlanEntry>, ApiError> {
        let body: MealPlanResponse = decode_json(&self.get(Endpoint::MealPlan).await?)?;
        Ok(body.meal_plan)
    }

    /// # Errors
    ///
    /// Returns the call's [`ApiError`].
    pub async fn log_workout(&self, request: &WorkoutLogRequest) -> Result<MessageResponse, ApiError> {
        decode_json(&self.post(Endpoint::Workout, request).await?)
    }

    /// # Errors
    ///
    /// Returns the call's [`ApiError`].
    pub async fn submit_suggestion(&self, request: &SuggestionRequest) -> Result<MessageResponse, ApiError> {
        decode_json(&self.post(Endpoint::Suggestion, request).await?)
    }

    /// Generate one recipe for `meal_name`.
    ///
    /// # Errors
    ///
    /// A `{"recipe": {"error": ...}}` body is a [`ApiError::Validation`]
    /// carrying the generator's message.
    pub async fn generate_recipe(&self, meal_name: &str) -> Result<GeneratedRecipe, ApiError> {
        let request = RecipeRequest { meal_name: meal_name.to_owned() };
        decode_recipe(&self.post(Endpoint::GenerateRecipe, &request).await?)
    }

    /// Fetch a report and check it is a PDF.
    ///
    /// # Errors
    ///
    /// Returns the call's [`ApiError`], or a validation error for non-PDF bodies.
    pub async fn download_report(&self, kind: ReportKind) -> Result<Vec<u8>, ApiError> {
        let body = self.get(kind.endpoint()).await?;
        schema::validate_pdf(&body)?;
        Ok(body)
    }

    /// # Errors
    ///
    /// `Forbidden` for non-admin callers.
    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let body: AdminUsersResponse = decode_json(&self.get(Endpoint::AdminUsers).await?)?;
        Ok(body.users)
    }

    /// # Errors
    ///
    /// `Forbidden` for non-admin callers.
    pub async fn admin_suggestions(&self) -> Result<Vec<Suggestion>, ApiError> {
        let body: AdminSuggestionsResponse = decode_json(&self.get(Endpoint::AdminSuggestions).await?)?;
        Ok(body.suggestions)
    }

    async fn get(&self, endpoint: Endpoint) -> Result<Vec<u8>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let token = self.session.id_token().await?;
            let request = gloo_net::http::Request::get(&endpoint.url(self.base_url))
                .header("Authorization", &schema::bearer(&token))
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Self::dispatch(endpoint, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, self.base_url, self.session);
            Err(ApiError::Unavailable)
        }
    }

    async fn post<B: serde::Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<Vec<u8>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let token = self.session.id_token().await?;
            let request = gloo_net::http::Request::post(&endpoint.url(self.base_url))
                .header("Authorization", &schema::bearer(&token))
                .json(body)
                .map_err(|e| ApiError::Validation(e.to_string()))?;
            Self::dispatch(endpoint, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, body, self.base_url, self.session);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch(endpoint: Endpoint, request: gloo_net::http::Request) -> Result<Vec<u8>, ApiError> {
        let resp = request.send().await.map_err(|e| {
            log::warn!("{} {} failed: {e}", endpoint.method().as_str(), endpoint.path());
            ApiError::Transport(e.to_string())
        })?;
        let status = resp.status();
        let body = resp.binary().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(status, body).inspect_err(|e| {
            log::warn!("{} {} -> {status}: {e}", endpoint.method().as_str(), endpoint.path());
        })
    }
}
