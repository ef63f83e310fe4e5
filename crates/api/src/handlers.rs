//! API Handlers
//!
//! Request/response schemas keep the wire field names of the original
//! service (`numero`, `titular`, `saldo`, ...); internally everything is the
//! domain model.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use minibank_business::{AccountService, StatementService, TransactionService};
use minibank_core::{Account, Statement, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::{sign_jwt, AuthUser};
use crate::error::ApiError;
use crate::state::AppState;

// ============ Request Types ============

#[derive(Deserialize)]
pub struct LoginRequest {
    pub user_id: i64,
}

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub numero: String,
    pub titular: String,
}

#[derive(Deserialize)]
pub struct CreateTransactionRequest {
    pub tipo: TransactionKind,
    pub valor: Decimal,
    pub descricao: Option<String>,
}

// ============ Response Types ============

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub numero: String,
    pub titular: String,
    pub saldo: Decimal,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            numero: account.number,
            titular: account.holder,
            saldo: account.balance,
        }
    }
}

#[derive(Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub conta_id: i64,
    pub tipo: TransactionKind,
    pub valor: Decimal,
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            conta_id: tx.account_id,
            tipo: tx.kind,
            valor: tx.amount,
            descricao: tx.description,
            created_at: tx.created_at,
        }
    }
}

/// Account summary embedded in a statement (no balance field; the statement
/// carries `saldo_atual` at the top level)
#[derive(Serialize)]
pub struct StatementAccount {
    pub id: i64,
    pub numero: String,
    pub titular: String,
}

#[derive(Serialize)]
pub struct StatementResponse {
    pub conta: StatementAccount,
    pub transacoes: Vec<TransactionResponse>,
    pub saldo_atual: Decimal,
}

impl From<Statement> for StatementResponse {
    fn from(statement: Statement) -> Self {
        Self {
            conta: StatementAccount {
                id: statement.account.id,
                numero: statement.account.number,
                titular: statement.account.holder,
            },
            transacoes: statement
                .transactions
                .into_iter()
                .map(TransactionResponse::from)
                .collect(),
            saldo_atual: statement.current_balance,
        }
    }
}

// ============ Handlers ============

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Authenticate a user and issue an access token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.user_id <= 0 {
        return Err(ApiError::bad_request("user_id must be a positive integer"));
    }
    let access_token =
        sign_jwt(payload.user_id, &state.config).map_err(|_| ApiError::internal())?;
    Ok(Json(LoginResponse { access_token }))
}

/// Create a new checking account with a zero balance
pub async fn create_conta(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    if payload.numero.chars().count() > Account::MAX_NUMBER_LEN {
        return Err(ApiError::bad_request(format!(
            "numero must be at most {} characters",
            Account::MAX_NUMBER_LEN
        )));
    }
    if payload.titular.chars().count() > Account::MAX_HOLDER_LEN {
        return Err(ApiError::bad_request(format!(
            "titular must be at most {} characters",
            Account::MAX_HOLDER_LEN
        )));
    }

    let account = AccountService::create(&state.pool, &payload.numero, &payload.titular).await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Fetch an account by id
pub async fn get_conta(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(conta_id): Path<i64>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = AccountService::get(&state.pool, conta_id).await?;
    Ok(Json(account.into()))
}

/// Record a deposit or withdrawal against an account
pub async fn create_transacao(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(conta_id): Path<i64>,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    if let Some(descricao) = &payload.descricao {
        if descricao.chars().count() > Transaction::MAX_DESCRIPTION_LEN {
            return Err(ApiError::bad_request(format!(
                "descricao must be at most {} characters",
                Transaction::MAX_DESCRIPTION_LEN
            )));
        }
    }

    let transaction = TransactionService::apply(
        &state.pool,
        conta_id,
        payload.tipo,
        payload.valor,
        payload.descricao,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(transaction.into())))
}

/// Fetch the statement of an account
pub async fn get_extrato(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(conta_id): Path<i64>,
) -> Result<Json<StatementResponse>, ApiError> {
    let statement = StatementService::build(&state.pool, conta_id).await?;
    Ok(Json(statement.into()))
}
