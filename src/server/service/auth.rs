//! Authentication service: registration, login, and password hashing.
//!
//! Registration decides the new account's permission tier: a valid one-time
//! setup code grants admin, a roster match grants capstone student, anything
//! else registers as a visitor. Login failures for unknown emails and wrong
//! passwords are indistinguishable to the caller.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{roster::RosterRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParams, Role, User},
    service::setup::SetupCodeService,
    util::parse::normalize_email,
};

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub setup_code: Option<String>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    setup_codes: &'a SetupCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, setup_codes: &'a SetupCodeService) -> Self {
        Self { db, setup_codes }
    }

    /// Registers a new account and returns the created user.
    ///
    /// The role is decided here: setup code → admin, roster match →
    /// capstone student, otherwise visitor.
    ///
    /// # Returns
    /// - `Ok(User)` - The newly created account
    /// - `Err(AppError::BadRequest)` - Invalid email, name, password, or
    ///   setup code
    /// - `Err(AppError::Conflict)` - An account with this email already exists
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = normalize_email(&params.email);
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::BadRequest(
                "A valid email address is required.".to_string(),
            ));
        }

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("A display name is required.".to_string()));
        }

        if params.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            )));
        }

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(
                "An account with this email already exists.".to_string(),
            ));
        }

        let role = self.resolve_role(&email, params.setup_code.as_deref()).await?;

        let password_hash = hash_password(&params.password)?;

        let entity = user_repo
            .create(CreateUserParams {
                email,
                password_hash,
                name,
                role,
            })
            .await?;

        tracing::info!("Registered new {} account {}", role, entity.id);

        User::from_entity(entity)
    }

    /// Authenticates an email/password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong
    ///   password (indistinguishable by design)
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = normalize_email(email);
        let Some(entity) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        User::from_entity(entity)
    }

    /// Decides the permission tier for a registering account.
    async fn resolve_role(
        &self,
        email: &str,
        setup_code: Option<&str>,
    ) -> Result<Role, AppError> {
        if let Some(code) = setup_code {
            if self.setup_codes.validate_and_consume(code).await {
                return Ok(Role::Admin);
            }
            return Err(AppError::BadRequest(
                "Invalid or expired setup code.".to_string(),
            ));
        }

        let roster_repo = RosterRepository::new(self.db);
        if roster_repo.find_by_email(email).await?.is_some() {
            return Ok(Role::CapstoneStudent);
        }

        Ok(Role::Visitor)
    }
}

/// Hashes a password into a PHC-format Argon2 string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC-format hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalErr(PasswordHash))` - Stored hash is malformed
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::PasswordHash(e.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that hashing and verifying round-trips.
    ///
    /// Expected: correct password verifies, wrong password does not
    #[test]
    fn password_hash_round_trips() {
        let hash = hash_password("correct horse battery").unwrap();

        assert!(verify_password("correct horse battery", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    /// Tests that a malformed stored hash surfaces as an error, not a
    /// mismatch.
    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    mod register {
        use super::*;
        use entity::prelude::{RegisteredStudent, Semester, Team, User as UserEntity};
        use test_utils::{builder::TestBuilder, error::TestError, factory};

        fn params(email: &str, setup_code: Option<&str>) -> RegisterParams {
            RegisterParams {
                email: email.to_string(),
                password: "correct horse battery".to_string(),
                name: "Ada".to_string(),
                setup_code: setup_code.map(|c| c.to_string()),
            }
        }

        async fn auth_tables() -> Result<test_utils::context::TestContext, TestError> {
            TestBuilder::new()
                .with_table(Semester)
                .with_table(Team)
                .with_table(UserEntity)
                .with_table(RegisteredStudent)
                .build()
                .await
        }

        /// Tests that a roster email registers as a capstone student, with
        /// case-insensitive matching.
        ///
        /// Expected: role capstone_student, email stored lowercased
        #[tokio::test]
        async fn roster_email_becomes_student() -> Result<(), TestError> {
            let test = auth_tables().await?;
            let db = test.db.as_ref().unwrap();

            let semester = factory::create_semester(db).await?;
            factory::registered_student::create_registered_student_with_email(
                db,
                semester.id,
                "ada@example.edu",
            )
            .await?;

            let codes = SetupCodeService::new();
            let service = AuthService::new(db, &codes);

            let user = service
                .register(params("Ada@Example.EDU", None))
                .await
                .unwrap();

            assert_eq!(user.role, Role::CapstoneStudent);
            assert_eq!(user.email, "ada@example.edu");

            Ok(())
        }

        /// Tests that an email missing from the roster registers as a
        /// visitor.
        ///
        /// Expected: role visitor
        #[tokio::test]
        async fn unknown_email_becomes_visitor() -> Result<(), TestError> {
            let test = auth_tables().await?;
            let db = test.db.as_ref().unwrap();

            let codes = SetupCodeService::new();
            let service = AuthService::new(db, &codes);

            let user = service
                .register(params("guest@example.com", None))
                .await
                .unwrap();

            assert_eq!(user.role, Role::Visitor);

            Ok(())
        }

        /// Tests that a valid setup code registers an admin and is consumed.
        ///
        /// Expected: role admin; a second use of the code fails
        #[tokio::test]
        async fn setup_code_grants_admin_once() -> Result<(), TestError> {
            let test = auth_tables().await?;
            let db = test.db.as_ref().unwrap();

            let codes = SetupCodeService::new();
            let code = codes.generate().await;
            let service = AuthService::new(db, &codes);

            let admin = service
                .register(params("ops@example.edu", Some(&code)))
                .await
                .unwrap();
            assert_eq!(admin.role, Role::Admin);

            let reuse = service
                .register(params("second@example.edu", Some(&code)))
                .await;
            assert!(matches!(reuse, Err(AppError::BadRequest(_))));

            Ok(())
        }

        /// Tests that registering an already-used email conflicts.
        ///
        /// Expected: Err(Conflict)
        #[tokio::test]
        async fn duplicate_email_conflicts() -> Result<(), TestError> {
            let test = auth_tables().await?;
            let db = test.db.as_ref().unwrap();

            let codes = SetupCodeService::new();
            let service = AuthService::new(db, &codes);

            service
                .register(params("ada@example.edu", None))
                .await
                .unwrap();

            let duplicate = service.register(params("ada@example.edu", None)).await;
            assert!(matches!(duplicate, Err(AppError::Conflict(_))));

            Ok(())
        }

        /// Tests the login round trip against a registered account.
        ///
        /// Expected: correct password logs in; wrong password and unknown
        /// email both fail with InvalidCredentials
        #[tokio::test]
        async fn login_round_trips() -> Result<(), TestError> {
            let test = auth_tables().await?;
            let db = test.db.as_ref().unwrap();

            let codes = SetupCodeService::new();
            let service = AuthService::new(db, &codes);

            let registered = service
                .register(params("ada@example.edu", None))
                .await
                .unwrap();

            let logged_in = service
                .login("ada@example.edu", "correct horse battery")
                .await
                .unwrap();
            assert_eq!(logged_in.id, registered.id);

            let wrong_password = service.login("ada@example.edu", "nope").await;
            assert!(matches!(
                wrong_password,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));

            let unknown_email = service
                .login("ghost@example.edu", "correct horse battery")
                .await;
            assert!(matches!(
                unknown_email,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));

            Ok(())
        }
    }
}
