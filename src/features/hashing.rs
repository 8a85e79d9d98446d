use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512, Sha512_256};
use sha3::Sha3_512;
use std::fmt;
use std::str::FromStr;

/// Iteration count used for PBKDF2 unless the caller asks otherwise.
pub const PBKDF2_ITERATIONS: u32 = 350_000;
pub const PBKDF2_SALT_LEN: usize = 16;
/// Derived key length in bytes (256 bits).
pub const PBKDF2_KEY_LEN: usize = 32;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    /// SHA3-512
    Sha3,
    Sha512_256,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3,
        HashAlgorithm::Sha512_256,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3 => "sha3",
            HashAlgorithm::Sha512_256 => "sha512_256",
        }
    }

    /// Get the output size in bytes for this algorithm.
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
            HashAlgorithm::Sha3 => 64,
            HashAlgorithm::Sha512_256 => 32,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            "sha3" | "sha3-512" | "sha3_512" => Ok(HashAlgorithm::Sha3),
            "sha512_256" | "sha512/256" | "sha-512/256" => Ok(HashAlgorithm::Sha512_256),
            _ => Err(format!("Unknown hash algorithm: {}", s)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn digest_with<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the raw digest of data using the specified algorithm.
pub fn hash(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Md5 => digest_with::<Md5>(data),
        HashAlgorithm::Sha1 => digest_with::<Sha1>(data),
        HashAlgorithm::Sha256 => digest_with::<Sha256>(data),
        HashAlgorithm::Sha512 => digest_with::<Sha512>(data),
        HashAlgorithm::Sha3 => digest_with::<Sha3_512>(data),
        HashAlgorithm::Sha512_256 => digest_with::<Sha512_256>(data),
    }
}

/// Lowercase hex digest.
pub fn hash_hex(data: &[u8], algorithm: HashAlgorithm) -> String {
    hex::encode(hash(data, algorithm))
}

/// Parameters for PBKDF2-HMAC-SHA256.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbkdf2Params {
    pub salt: [u8; PBKDF2_SALT_LEN],
    pub iterations: u32,
}

impl Pbkdf2Params {
    /// Fresh random salt, default iteration count.
    pub fn random() -> Self {
        Self::with_salt(rand::random())
    }

    pub fn with_salt(salt: [u8; PBKDF2_SALT_LEN]) -> Self {
        Self {
            salt,
            iterations: PBKDF2_ITERATIONS,
        }
    }

    /// Parse a salt given as 32 hex digits.
    pub fn from_salt_hex(salt: &str) -> Result<Self, String> {
        let bytes = hex::decode(salt).map_err(|e| format!("Invalid salt: {}", e))?;
        let salt: [u8; PBKDF2_SALT_LEN] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            format!(
                "Salt must be {} bytes, got {}",
                PBKDF2_SALT_LEN,
                bytes.len()
            )
        })?;
        Ok(Self::with_salt(salt))
    }
}

/// Derive a key with PBKDF2-HMAC-SHA256 and render it as
/// `pbkdf2$sha256$<iterations>$<salt-hex>$<digest-hex>`.
pub fn pbkdf2_sha256(data: &[u8], params: &Pbkdf2Params) -> String {
    let mut key = [0u8; PBKDF2_KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(data, &params.salt, params.iterations, &mut key);
    format!(
        "pbkdf2$sha256${}${}${}",
        params.iterations,
        hex::encode(params.salt),
        hex::encode(key)
    )
}
