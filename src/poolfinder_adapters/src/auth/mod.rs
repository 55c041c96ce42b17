pub mod bcrypt_hasher;
pub mod jwt_codec;

pub use bcrypt_hasher::BcryptHasher;
pub use jwt_codec::{JwtCodecConfig, JwtTokenCodec};
