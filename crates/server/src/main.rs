// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use clap::Parser;
use contract_desk::{edit_contract, filter_contracts, new_contract, sort_contracts};
use contract_desk_api::{
    ApiError, AuthenticationService, ContractResponse, CreateContractRequest, EditContractRequest,
    HistoryEntryResponse, HistoryResponse, LoginRequest, LoginResponse, OrgInfoResponse,
    RegisterUserRequest, RegisterUserResponse, RegistryClient, RegistryConfig,
    translate_core_error, translate_domain_error,
};
use contract_desk_domain::{ContractField, ContractRow, Inn, UserProfile};
use contract_desk_persistence::{
    ContractStore, HistoryStore, PersistenceError, UserStore, exists_by_inn,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// ContractDesk Server - HTTP server for the contract register
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the CSV tables
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Organization registry endpoint URL
    #[arg(long, default_value = RegistryConfig::DEFAULT_URL)]
    registry_url: String,
}

/// The three CSV-backed tables, guarded together.
///
/// One lock covers all of them so a contract save and its history
/// append cannot interleave with another request's load.
struct Stores {
    /// The contract table.
    contracts: ContractStore,
    /// The user table.
    users: UserStore,
    /// The change-history table.
    history: HistoryStore,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer wrapped in a Mutex for safe concurrent access.
    stores: Arc<Mutex<Stores>>,
    /// The registry client, absent when credentials are not configured.
    registry: Option<RegistryClient>,
}

/// Query parameters for listing contracts.
#[derive(Debug, Deserialize)]
struct ListContractsQuery {
    /// The column to sort by.
    sort_by: Option<String>,
    /// Sort direction; ascending when absent.
    ascending: Option<bool>,
    /// Case-insensitive substring filter.
    search: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::DuplicateUsername { .. } => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ContractNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::LookupFailed { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Returns the current calendar date, preferring local time.
fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Handler for POST `/api/login` endpoint.
///
/// Authenticates a username/password pair.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %req.username, "Handling login request");

    let stores = app_state.stores.lock().await;
    let profile: UserProfile =
        AuthenticationService::login(&stores.users, &req.username, &req.password)
            .map_err(|err| HttpError::from(ApiError::from(err)))?;
    drop(stores);

    Ok(Json(LoginResponse {
        username: profile.username,
        role: profile.role.as_str().to_string(),
        full_name: profile.full_name,
    }))
}

/// Handler for POST `/api/users` endpoint.
///
/// Registers a new user.
async fn handle_register_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<Json<RegisterUserResponse>, HttpError> {
    info!(username = %req.username, role = %req.role, "Handling register_user request");

    let stores = app_state.stores.lock().await;
    AuthenticationService::register_user(&stores.users, &req)?;
    drop(stores);

    Ok(Json(RegisterUserResponse {
        username: req.username.trim().to_string(),
    }))
}

/// Handler for GET `/api/contracts` endpoint.
///
/// Lists contracts, optionally filtered by a search term and sorted by
/// a column. Statuses are derived against today's date on every call.
async fn handle_list_contracts(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListContractsQuery>,
) -> Result<Json<Vec<ContractResponse>>, HttpError> {
    let stores = app_state.stores.lock().await;
    let rows: Vec<ContractRow> = stores.contracts.load(today())?;
    drop(stores);

    let filtered: Vec<ContractRow> = match &query.search {
        Some(term) => filter_contracts(&rows, term),
        None => rows,
    };
    let sorted: Vec<ContractRow> = match &query.sort_by {
        Some(column) => sort_contracts(&filtered, column, query.ascending.unwrap_or(true)),
        None => filtered,
    };

    let response: Vec<ContractResponse> = sorted.iter().map(ContractResponse::from).collect();
    Ok(Json(response))
}

/// Handler for POST `/api/contracts` endpoint.
///
/// Inserts a new contract. When requested, empty organization fields
/// are pre-filled from the registry first; a failed lookup only skips
/// the pre-fill.
async fn handle_create_contract(
    AxumState(app_state): AxumState<AppState>,
    Json(mut req): Json<CreateContractRequest>,
) -> Result<Json<ContractResponse>, HttpError> {
    info!(inn = %req.inn, "Handling create_contract request");

    if req.prefill_from_registry {
        if let Some(registry) = &app_state.registry {
            let inn: Inn = Inn::new(&req.inn);
            match registry.find_by_inn(&inn).await {
                Ok(Some(org)) => req.apply_prefill(&org),
                Ok(None) => info!(inn = %inn, "Registry has no match, skipping pre-fill"),
                Err(err) => warn!(error = %err, "Registry lookup failed, skipping pre-fill"),
            }
        } else {
            warn!("Registry not configured, skipping pre-fill");
        }
    }

    let input = req.to_new_contract()?;
    let current: Date = today();

    let stores = app_state.stores.lock().await;
    let mut rows: Vec<ContractRow> = stores.contracts.load(current)?;
    if exists_by_inn(&rows, &input.inn) {
        warn!(inn = %input.inn, "Another contract already carries this tax identifier");
    }
    let row: ContractRow = new_contract(input, current);
    let response: ContractResponse = ContractResponse::from(&row);
    rows.push(row);
    stores.contracts.save(&rows)?;
    drop(stores);

    info!(contract_id = %response.contract_id, "Successfully created contract");
    Ok(Json(response))
}

/// Handler for PATCH `/api/contracts/{id}` endpoint.
///
/// Applies field edits to one contract and records every actual change
/// in the history table.
async fn handle_edit_contract(
    AxumState(app_state): AxumState<AppState>,
    Path(contract_id): Path<String>,
    Json(req): Json<EditContractRequest>,
) -> Result<Json<ContractResponse>, HttpError> {
    info!(
        contract_id = %contract_id,
        user = %req.user,
        edits = req.edits.len(),
        "Handling edit_contract request"
    );

    let mut edits: Vec<(ContractField, String)> = Vec::with_capacity(req.edits.len());
    for (field, value) in &req.edits {
        let field: ContractField =
            ContractField::from_str(field).map_err(translate_domain_error)?;
        edits.push((field, value.clone()));
    }

    let current: Date = today();

    let stores = app_state.stores.lock().await;
    let mut rows: Vec<ContractRow> = stores.contracts.load(current)?;
    let entries = edit_contract(&mut rows, &contract_id, &edits, &req.user, current)
        .map_err(translate_core_error)?;
    stores.contracts.save(&rows)?;
    for entry in &entries {
        stores.history.append(entry)?;
    }

    let updated: ContractResponse = rows
        .iter()
        .find(|row| row.contract.contract_id.value() == contract_id)
        .map(ContractResponse::from)
        .ok_or_else(|| {
            HttpError::from(ApiError::ContractNotFound {
                contract_id: contract_id.clone(),
            })
        })?;
    drop(stores);

    info!(
        contract_id = %contract_id,
        changes = entries.len(),
        "Successfully edited contract"
    );
    Ok(Json(updated))
}

/// Handler for GET `/api/contracts/{id}/history` endpoint.
///
/// Returns the change history of one contract in append order.
async fn handle_contract_history(
    AxumState(app_state): AxumState<AppState>,
    Path(contract_id): Path<String>,
) -> Result<Json<HistoryResponse>, HttpError> {
    let stores = app_state.stores.lock().await;
    let rows: Vec<ContractRow> = stores.contracts.load(today())?;
    if !rows
        .iter()
        .any(|row| row.contract.contract_id.value() == contract_id)
    {
        return Err(HttpError::from(ApiError::ContractNotFound { contract_id }));
    }
    let entries = stores.history.history_for(&contract_id)?;
    drop(stores);

    Ok(Json(HistoryResponse {
        contract_id,
        entries: entries.iter().map(HistoryEntryResponse::from).collect(),
    }))
}

/// Handler for GET `/api/org/{inn}` endpoint.
///
/// Resolves a tax identifier to organization details via the registry.
async fn handle_org_lookup(
    AxumState(app_state): AxumState<AppState>,
    Path(inn): Path<String>,
) -> Result<Json<OrgInfoResponse>, HttpError> {
    info!(inn = %inn, "Handling org_lookup request");

    let Some(registry) = &app_state.registry else {
        return Err(HttpError::from(ApiError::LookupFailed {
            message: String::from("Registry credentials are not configured"),
        }));
    };

    let inn: Inn = Inn::new(&inn);
    let org = registry
        .find_by_inn(&inn)
        .await
        .map_err(|err| {
            HttpError::from(ApiError::LookupFailed {
                message: err.to_string(),
            })
        })?
        .ok_or_else(|| HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("No organization found for tax identifier '{inn}'"),
        })?;

    Ok(Json(OrgInfoResponse::from(org)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(handle_login))
        .route("/api/users", post(handle_register_user))
        .route("/api/contracts", get(handle_list_contracts))
        .route("/api/contracts", post(handle_create_contract))
        .route("/api/contracts/{id}", patch(handle_edit_contract))
        .route("/api/contracts/{id}/history", get(handle_contract_history))
        .route("/api/org/{inn}", get(handle_org_lookup))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ContractDesk Server");
    info!("Using data directory: {}", args.data_dir.display());

    let users: UserStore = UserStore::new(&args.data_dir);
    users.init()?;

    let registry: Option<RegistryClient> = match RegistryConfig::from_env(args.registry_url) {
        Ok(config) => match RegistryClient::new(config) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, "Registry client unavailable, lookups disabled");
                None
            }
        },
        Err(err) => {
            warn!(error = %err, "Registry lookups disabled");
            None
        }
    };

    let app_state: AppState = AppState {
        stores: Arc::new(Mutex::new(Stores {
            contracts: ContractStore::new(&args.data_dir),
            users,
            history: HistoryStore::new(&args.data_dir),
        })),
        registry,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
