/// A stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    account: String,
    password: String,
    email: String,
}

impl User {
    pub fn new(
        account: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}
