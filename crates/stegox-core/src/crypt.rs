//! The password based payload cipher.
//!
//! Messages are encrypted before they ever touch a pixel. The construction is
//! the OpenSSL style password scheme: a fresh 8 byte salt, key and IV derived
//! via `EVP_BytesToKey` with MD5, AES-256-CBC with PKCS#7 padding, and the
//! whole thing framed as `"Salted__" || salt || ciphertext`. That is the
//! exact byte layout the original stegoX web client produces, so artifacts
//! remain interchangeable in both directions.
//!
//! There is deliberately no authentication tag. A wrong password will
//! usually trip the padding check and surface as
//! [`StegoXError::DecryptionFailed`], but roughly one in 256 attempts the
//! padding happens to parse and garbage bytes come back as a "success".
//! Treat every decrypt result as untrusted display text, never as proof the
//! password was right.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::StegoXError;
use crate::result::Result;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const MAGIC: &[u8; 8] = b"Salted__";
const SALT_LEN: usize = 8;
const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;

/// Encrypts `plaintext` under `password` with a fresh random salt.
///
/// Two calls with identical inputs yield different ciphertexts.
pub fn encrypt(plaintext: &[u8], password: &str) -> Vec<u8> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    encrypt_with_salt(plaintext, password, &salt)
}

fn encrypt_with_salt(plaintext: &[u8], password: &str, salt: &[u8; SALT_LEN]) -> Vec<u8> {
    let (key, iv) = evp_bytes_to_key(password.as_bytes(), salt);

    let ciphertext =
        Aes256CbcEnc::new(&key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut framed = Vec::with_capacity(MAGIC.len() + SALT_LEN + ciphertext.len());
    framed.extend_from_slice(MAGIC);
    framed.extend_from_slice(salt);
    framed.extend_from_slice(&ciphertext);

    framed
}

/// Decrypts a `"Salted__"` framed ciphertext under `password`.
///
/// Fails with [`StegoXError::DecryptionFailed`] on a broken frame or when the
/// padding does not check out. See the module docs for the missing
/// authentication caveat.
pub fn decrypt(data: &[u8], password: &str) -> Result<Vec<u8>> {
    if data.len() < MAGIC.len() + SALT_LEN + BLOCK_LEN || !data.starts_with(MAGIC) {
        return Err(StegoXError::DecryptionFailed);
    }

    let salt: [u8; SALT_LEN] = data[MAGIC.len()..MAGIC.len() + SALT_LEN]
        .try_into()
        .expect("slice length is fixed");
    let ciphertext = &data[MAGIC.len() + SALT_LEN..];
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(StegoXError::DecryptionFailed);
    }

    let (key, iv) = evp_bytes_to_key(password.as_bytes(), &salt);

    Aes256CbcDec::new(&key.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| StegoXError::DecryptionFailed)
}

/// `EVP_BytesToKey` with one MD5 round per chunk: D_1 = MD5(password || salt),
/// D_n = MD5(D_{n-1} || password || salt), concatenated until 48 bytes of key
/// material (32 key + 16 IV) are available.
fn evp_bytes_to_key(password: &[u8], salt: &[u8; SALT_LEN]) -> ([u8; KEY_LEN], [u8; IV_LEN]) {
    let mut material = Vec::with_capacity(KEY_LEN + IV_LEN);
    let mut previous: Vec<u8> = Vec::new();

    while material.len() < KEY_LEN + IV_LEN {
        let mut hasher = Md5::new();
        hasher.update(&previous);
        hasher.update(password);
        hasher.update(salt);
        previous = hasher.finalize().to_vec();
        material.extend_from_slice(&previous);
    }

    let mut key = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    key.copy_from_slice(&material[..KEY_LEN]);
    iv.copy_from_slice(&material[KEY_LEN..KEY_LEN + IV_LEN]);

    (key, iv)
}
