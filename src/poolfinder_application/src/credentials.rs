//! Async wrappers that keep password hashing off the async executor threads.

use poolfinder_core::{CredentialHasher, HashingError, Password, PasswordHash};

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash<H>(
    hasher: &H,
    password: Password,
) -> Result<PasswordHash, HashingError>
where
    H: CredentialHasher,
{
    let hasher = hasher.clone();
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || current_span.in_scope(|| hasher.hash(&password)))
        .await
        .map_err(|e| HashingError::TaskFailed(e.to_string()))?
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash<H>(
    hasher: &H,
    password_candidate: Password,
    expected_password_hash: PasswordHash,
) -> Result<bool, HashingError>
where
    H: CredentialHasher,
{
    let hasher = hasher.clone();
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| hasher.verify(&password_candidate, &expected_password_hash))
    })
    .await
    .map_err(|e| HashingError::TaskFailed(e.to_string()))
}
