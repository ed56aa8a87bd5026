use super::mock::AuthRequest;

/// Longest value a form field accepts.
pub const MAX_FIELD_LENGTH: usize = 64;

/// Which credential form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// A single text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    label: &'static str,
    placeholder: &'static str,
    value: String,
    secret: bool,
}

impl Field {
    fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            secret: false,
        }
    }

    fn secret(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::text(label, placeholder)
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The value as it should appear on screen; secrets are masked.
    pub fn display(&self) -> String {
        if self.secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn push(&mut self, c: char) {
        if self.value.chars().count() < MAX_FIELD_LENGTH {
            self.value.push(c);
        }
    }

    fn pop(&mut self) {
        self.value.pop();
    }
}

/// Input state of the login or signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    fields: Vec<Field>,
    focus: usize,
}

impl AuthForm {
    pub fn login() -> Self {
        Self {
            mode: AuthMode::Login,
            fields: vec![
                Field::text("Email", "Enter your email"),
                Field::secret("Password", "Enter your password"),
            ],
            focus: 0,
        }
    }

    pub fn signup() -> Self {
        Self {
            mode: AuthMode::Signup,
            fields: vec![
                Field::text("Full Name", "Enter your full name"),
                Field::text("Email", "Enter your email"),
                Field::secret("Password", "Create a password"),
                Field::secret("Confirm Password", "Confirm your password"),
            ],
            focus: 0,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn is_last_field(&self) -> bool {
        self.focus + 1 == self.fields.len()
    }

    pub fn push(&mut self, c: char) {
        self.fields[self.focus].push(c);
    }

    pub fn pop(&mut self) {
        self.fields[self.focus].pop();
    }

    /// Build the request the form currently describes. Values are trimmed
    /// except for passwords.
    pub fn request(&self) -> AuthRequest {
        let value = |index: usize| self.fields[index].value().to_string();
        let trimmed = |index: usize| self.fields[index].value().trim().to_string();

        match self.mode {
            AuthMode::Login => AuthRequest::Login {
                email: trimmed(0),
                password: value(1),
            },
            AuthMode::Signup => AuthRequest::Signup {
                name: trimmed(0),
                email: trimmed(1),
                password: value(2),
                confirm_password: value(3),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut AuthForm, text: &str) {
        for c in text.chars() {
            form.push(c);
        }
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut form = AuthForm::signup();
        form.focus_previous();
        assert_eq!(form.focus(), 3);
        assert!(form.is_last_field());
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_login_request_from_typed_values() {
        let mut form = AuthForm::login();
        type_into(&mut form, " ada@example.com ");
        form.focus_next();
        type_into(&mut form, "secret!");
        form.pop();

        assert_eq!(
            form.request(),
            AuthRequest::Login {
                email: "ada@example.com".to_string(),
                password: "secret".to_string(),
            }
        );
        assert_eq!(form.fields()[1].display(), "••••••");
    }

    #[test]
    fn test_field_length_is_bounded() {
        let mut form = AuthForm::login();
        type_into(&mut form, &"x".repeat(MAX_FIELD_LENGTH + 10));
        assert_eq!(form.fields()[0].value().len(), MAX_FIELD_LENGTH);
    }
}
