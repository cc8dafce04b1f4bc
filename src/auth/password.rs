use bcrypt::{hash, verify};

/// Produces the digest stored in `users.password`.
pub fn hash_password(password: &str, cost: u32) -> Result<String, anyhow::Error> {
    let hashed =
        hash(password, cost).map_err(|e| anyhow::anyhow!("Password hashing error: {:?}", e))?;
    Ok(hashed)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, anyhow::Error> {
    match verify(password, hash) {
        Ok(is_valid) => Ok(is_valid),
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn digest_verifies_only_the_original_password() {
        let digest = hash_password("hunter2", TEST_COST).unwrap();
        assert_ne!(digest, "hunter2");
        assert!(verify_password("hunter2", &digest).unwrap());
        assert!(!verify_password("hunter3", &digest).unwrap());
    }

    #[test]
    fn malformed_digest_does_not_verify() {
        assert!(!verify_password("hunter2", "not-a-bcrypt-digest").unwrap());
    }
}
