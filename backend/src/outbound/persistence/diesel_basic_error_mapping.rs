//! Diesel and pool error mapping for the order repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::OrderRepositoryError;

/// Pool failures mean the database could not be reached.
pub(crate) fn map_pool_error(error: PoolError) -> OrderRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    OrderRepositoryError::connection(message)
}

/// Map Diesel errors, keeping database detail out of the returned message.
pub(crate) fn map_diesel_error(error: DieselError) -> OrderRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            OrderRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UnableToSendCommand, _) => {
            OrderRepositoryError::connection("unable to send command to database")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _)
        | DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, _) => {
            OrderRepositoryError::query("order violates a table constraint")
        }
        DieselError::NotFound => OrderRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => OrderRepositoryError::query("database query error"),
        _ => OrderRepositoryError::query("database error"),
    }
}
