pub mod hashmap_user_store;
pub mod hashmap_verification_store;

pub use hashmap_user_store::HashMapUserStore;
pub use hashmap_verification_store::HashMapVerificationStore;
