// ABOUTME: Route handlers for the exercises REST API
// ABOUTME: Translates HTTP requests into lifecycle service calls and rejections into invalid-input errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercises routes
//!
//! Thin presentation layer: parse, call the service, serialize. Extractor
//! rejections are reported as invalid-input errors so every failure shares the
//! same JSON error body.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::RequestContext;
use crate::pagination::PageRequest;
use crate::resources::ServerResources;
use crate::schemas::{CreateExerciseRequest, UpdateExerciseRequest};

/// Query parameters for listing exercises
#[derive(Debug, Deserialize, Default)]
pub struct ListExercisesQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<i64>,
    /// Page size, defaults to the configured page size
    pub size: Option<i64>,
}

/// Exercises routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/exercises",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/exercises/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /exercises - One page of exercise summaries
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        query: Result<Query<ListExercisesQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(|e| invalid(&context, &e.body_text()))?;
        let request = PageRequest::new(
            query.page.unwrap_or(1),
            query.size.unwrap_or(resources.config.default_page_size),
        )
        .map_err(|e| tag(&context, e))?;

        let page = resources
            .exercises
            .list(request)
            .await
            .map_err(|e| tag(&context, e))?;
        Ok((StatusCode::OK, Json(page)).into_response())
    }

    /// Handle GET /exercises/:id - Full view of one exercise
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        id: Result<Path<Uuid>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id.map_err(|e| invalid(&context, &e.body_text()))?;

        let exercise = resources
            .exercises
            .get(id)
            .await
            .map_err(|e| tag(&context, e))?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle POST /exercises - Create an exercise
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        body: Result<Json<CreateExerciseRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(body) = body.map_err(|e| invalid(&context, &e.body_text()))?;

        let created = resources
            .exercises
            .create(body)
            .await
            .map_err(|e| tag(&context, e))?;
        Ok((StatusCode::OK, Json(created)).into_response())
    }

    /// Handle PATCH /exercises/:id - Sparse update of an exercise
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        id: Result<Path<Uuid>, PathRejection>,
        body: Result<Json<UpdateExerciseRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id.map_err(|e| invalid(&context, &e.body_text()))?;
        let Json(body) = body.map_err(|e| invalid(&context, &e.body_text()))?;

        let updated = resources
            .exercises
            .update(id, body)
            .await
            .map_err(|e| tag(&context, e))?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    /// Handle DELETE /exercises/:id - Remove an exercise
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        context: RequestContext,
        id: Result<Path<Uuid>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id.map_err(|e| invalid(&context, &e.body_text()))?;

        let deleted = resources
            .exercises
            .delete(id)
            .await
            .map_err(|e| tag(&context, e))?;
        Ok((StatusCode::OK, Json(deleted)).into_response())
    }
}

/// Attach the request correlation id to an error
fn tag(context: &RequestContext, error: AppError) -> AppError {
    match &context.request_id {
        Some(request_id) => error.with_request_id(request_id.clone()),
        None => error,
    }
}

fn invalid(context: &RequestContext, detail: &str) -> AppError {
    tag(context, AppError::invalid_input(detail))
}
