use blog_shared::dto::{AuthData, UserData, UserInputData};

use super::BlogService;
use crate::domain::User;
use crate::error::{DomainError, RepoError};
use crate::guard::{require_authenticated, require_found};
use crate::identity::CallerIdentity;
use crate::validation::{INVALID_USER_INPUT, validate_user_input};

impl BlogService {
    /// `createUser` - register a new account.
    #[tracing::instrument(skip_all)]
    pub async fn create_user(&self, input: UserInputData) -> Result<UserData, DomainError> {
        validate_user_input(&input).into_result(INVALID_USER_INPUT)?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(duplicate_user());
        }

        let password_hash = self.passwords.hash(&input.password)?;
        let user = User::new(input.email, input.name, password_hash);

        // A concurrent registration can win between the lookup and the insert
        let created = self.users.save(user).await.map_err(|e| match e {
            RepoError::Constraint(_) => duplicate_user(),
            other => other.into(),
        })?;

        tracing::info!(user_id = %created.id, "User registered");
        Ok(created.to_data())
    }

    /// `login` - exchange credentials for a signed token.
    #[tracing::instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthData, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Unauthorized("User not found"))?;

        if !self.passwords.verify(password, &user.password_hash)? {
            return Err(DomainError::Unauthorized("Password is incorrect"));
        }

        let token = self.tokens.generate_token(user.id, &user.email)?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(AuthData {
            token,
            user_id: user.id.to_string(),
        })
    }

    /// `user` - the caller's own profile.
    #[tracing::instrument(skip(self))]
    pub async fn user(&self, identity: &CallerIdentity) -> Result<UserData, DomainError> {
        let caller = require_authenticated(identity)?;
        let user = require_found(self.find_user(caller).await?, "User")?;
        Ok(user.to_data())
    }

    /// `updateStatus` - replace the caller's status line.
    #[tracing::instrument(skip(self, status))]
    pub async fn update_status(
        &self,
        identity: &CallerIdentity,
        status: String,
    ) -> Result<UserData, DomainError> {
        let caller = require_authenticated(identity)?;
        let mut user = require_found(self.find_user(caller).await?, "User")?;

        user.set_status(status);
        let updated = self.users.save(user).await?;

        Ok(updated.to_data())
    }
}

fn duplicate_user() -> DomainError {
    DomainError::Duplicate("User already exists".to_string())
}
