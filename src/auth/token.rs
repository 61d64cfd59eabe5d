use crate::error::AppError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a login token (32 hex characters).
pub const LOGIN_TOKEN_BYTES: usize = 16;

/// Generates a random token of `length` bytes, hex-encoded.
///
/// The bytes come from the operating system's secure random source. The result is
/// lowercase hex and exactly `2 * length` characters long.
///
/// The token carries no server-side state: it is not stored anywhere and no
/// endpoint checks it.
///
/// # Returns
/// Returns `AppError::InvalidArgument` if `length` is zero.
pub fn generate_token(length: usize) -> Result<String, AppError> {
    if length == 0 {
        return Err(AppError::InvalidArgument(
            "token length must be a positive number of bytes".into(),
        ));
    }

    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);
    Ok(hex::encode(bytes))
}
