use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::config::PBKDF2_ITERATIONS;

pub const KEY_LENGTH: usize = 32;
pub const SALT_LENGTH: usize = 32;

/// Salted PBKDF2-SHA256 digest of a password, zeroed on drop
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedCredential {
    salt: [u8; SALT_LENGTH],
    digest: [u8; KEY_LENGTH],
    iterations: u32,
}

impl DerivedCredential {
    fn derive_digest(
        password: &str,
        salt: &[u8; SALT_LENGTH],
        iterations: u32,
    ) -> Zeroizing<[u8; KEY_LENGTH]> {
        let mut digest = Zeroizing::new([0u8; KEY_LENGTH]);
        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, digest.as_mut_slice());
        digest
    }

    fn verify(&self, candidate: &str) -> bool {
        let candidate = Self::derive_digest(candidate, &self.salt, self.iterations);
        candidate.as_slice().ct_eq(self.digest.as_slice()).into()
    }
}

/// Secret gating access to a patient's history.
///
/// `Plaintext` keeps the password itself (wiped on drop) and checks by
/// equality. `Derived` keeps only a salted PBKDF2 digest.
pub enum Credential {
    Plaintext(Zeroizing<String>),
    Derived(DerivedCredential),
}

impl Credential {
    pub fn plaintext(password: &str) -> Self {
        Self::Plaintext(Zeroizing::new(password.to_string()))
    }

    /// Salted PBKDF2-SHA256 with a random salt and [`PBKDF2_ITERATIONS`] rounds.
    pub fn derived(password: &str) -> Self {
        Self::derived_with(password, &generate_salt(), PBKDF2_ITERATIONS)
    }

    pub fn derived_with(password: &str, salt: &[u8; SALT_LENGTH], iterations: u32) -> Self {
        let digest = DerivedCredential::derive_digest(password, salt, iterations);
        Self::Derived(DerivedCredential {
            salt: *salt,
            digest: *digest,
            iterations,
        })
    }

    /// Constant-time check of `candidate` against the stored secret.
    pub fn verify(&self, candidate: &str) -> bool {
        match self {
            Self::Plaintext(stored) => stored.as_bytes().ct_eq(candidate.as_bytes()).into(),
            Self::Derived(derived) => derived.verify(candidate),
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Derived(_))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plaintext(_) => f.write_str("Credential::Plaintext(<redacted>)"),
            Self::Derived(d) => write!(f, "Credential::Derived(<redacted>, {} rounds)", d.iterations),
        }
    }
}

/// Generate a cryptographically random salt
pub fn generate_salt() -> [u8; SALT_LENGTH] {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}
