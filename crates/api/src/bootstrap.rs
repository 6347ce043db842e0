//! First-start seeding of the admin console account.

use wedsite_core::accounts::MIN_PASSWORD_LENGTH;
use wedsite_core::error::CoreError;
use wedsite_core::roles::ROLE_ADMIN;
use wedsite_core::types::DbId;
use wedsite_db::models::user::CreateUser;
use wedsite_db::repositories::UserRepo;
use wedsite_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create `admin` with the admin role if no users exist yet.
///
/// Returns the new user's id, or `None` when accounts already exist.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<Option<DbId>> {
    if UserRepo::count(pool).await? > 0 {
        return Ok(None);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create_with_role(
        pool,
        &CreateUser {
            email: admin.email.to_lowercase(),
            password_hash,
        },
        ROLE_ADMIN,
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "Bootstrap admin created");
    Ok(Some(user.id))
}
