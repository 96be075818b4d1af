//! Collision-free code resolution.
//!
//! Uniqueness is scoped per table, so each entity type runs its own
//! resolution with its own existence check. The pre-check only reduces how
//! often the store rejects an insert; the unique constraint is what actually
//! keeps codes unique under concurrent creation. [`insert_with_unique_code`]
//! therefore treats a rejected insert as one more collision and retries with
//! a fresh code.

use std::future::Future;

use serde_json::json;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Default bound on generation attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

fn exhausted(max_attempts: usize) -> AppError {
    AppError::internal(
        "Failed to generate unique code",
        json!({ "reason": "Too many collisions", "attempts": max_attempts }),
    )
}

/// Generates codes until `exists` reports one as free.
///
/// # Errors
///
/// Returns [`AppError::Internal`] after `max_attempts` collisions, or the
/// error of the existence check.
pub async fn resolve_unique_code<F, Fut>(
    generator: &CodeGenerator,
    max_attempts: usize,
    mut exists: F,
) -> Result<String, AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    for attempt in 1..=max_attempts {
        let code = generator.generate();

        if !exists(code.clone()).await? {
            return Ok(code);
        }

        debug!(attempt, code = %code, "Generated code already taken");
    }

    Err(exhausted(max_attempts))
}

/// Resolves a free code and inserts with it, retrying on insert conflicts.
///
/// `insert` receives the candidate code. A unique-constraint rejection from it
/// (an [`AppError::Conflict`] naming the violated constraint) means another
/// request took the code between the check and the insert; a new code is
/// resolved and the insert repeated. Conflicts without a constraint name are
/// returned unchanged. Every round draws from the same budget, so the
/// combined number of generated codes never exceeds `max_attempts`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] when the attempts run out, or any
/// non-conflict error from `exists` or `insert` unchanged.
pub async fn insert_with_unique_code<T, E, EFut, I, IFut>(
    generator: &CodeGenerator,
    max_attempts: usize,
    mut exists: E,
    mut insert: I,
) -> Result<T, AppError>
where
    E: FnMut(String) -> EFut,
    EFut: Future<Output = Result<bool, AppError>>,
    I: FnMut(String) -> IFut,
    IFut: Future<Output = Result<T, AppError>>,
{
    let mut spent = 0;

    while spent < max_attempts {
        let mut checked = 0;
        let code = resolve_unique_code(generator, max_attempts - spent, |code| {
            checked += 1;
            exists(code)
        })
        .await
        .map_err(|e| match e {
            AppError::Internal { .. } => exhausted(max_attempts),
            other => other,
        })?;
        spent += checked;

        match insert(code.clone()).await {
            Ok(record) => return Ok(record),
            Err(e) if e.violated_constraint().is_some() => {
                warn!(
                    attempt = spent,
                    code = %code,
                    constraint = e.violated_constraint(),
                    "Insert lost a race for code, retrying"
                );
            }
            Err(e) => return Err(e),
        }
    }

    Err(exhausted(max_attempts))
}
