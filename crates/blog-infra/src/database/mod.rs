//! Repository implementations - PostgreSQL and in-memory fallback.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use memory::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConfig, connect};
#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresPostRepository, PostgresUserRepository};


/// Mask an email for logging: `ada@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match (chars.next(), chars.next()) {
                (Some(first), Some(_)) => format!("{first}***@{domain}"),
                _ => format!("***@{domain}"),
            }
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod mask_tests {
    use super::mask_email;

    #[test]
    fn keeps_first_character_and_domain() {
        assert_eq!(mask_email("ada@example.com"), "a***@example.com");
    }

    #[test]
    fn single_character_local_part_is_fully_masked() {
        assert_eq!(mask_email("a@example.com"), "***@example.com");
    }

    #[test]
    fn non_ascii_local_part_does_not_split_characters() {
        assert_eq!(mask_email("éva@example.com"), "é***@example.com");
    }

    #[test]
    fn no_at_sign() {
        assert_eq!(mask_email("nobody"), "***");
    }
}
