pub mod argon2;
pub mod errors;

pub use self::argon2::PasswordHasher;
pub use self::argon2::DEFAULT_ITERATIONS;
pub use self::argon2::DEFAULT_MEMORY_KIB;
pub use self::argon2::DEFAULT_PARALLELISM;
pub use errors::PasswordError;
