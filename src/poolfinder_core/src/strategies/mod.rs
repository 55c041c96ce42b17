pub mod credential_hasher;
pub mod role_guard;
pub mod token_codec;
