//! Model behind the viewing-registration form.
//!
//! The form only collects values locally; submitting it cancels the browser's
//! default navigation and sends nothing anywhere.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Phone, Self::Email];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Native input type; the browser does whatever validation it implies.
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Phone => "tel",
            Self::Email => "email",
        }
    }

    pub const fn autocomplete(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "tel",
            Self::Email => "email",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "姓名 / Name",
            Self::Phone => "電話 / Mobile",
            Self::Email => "電郵 / Email",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Phone => "+852",
            Self::Email => "example@email.com",
        }
    }
}

impl Registration {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).trim().is_empty())
    }
}

/// An event whose default browser action can be cancelled.
#[cfg_attr(test, mockall::automock)]
pub trait DefaultAction {
    fn prevent_default(&self);
}

impl DefaultAction for web_sys::SubmitEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Handles a submit attempt: the page never navigates, whatever was typed.
pub fn suppress_submit<E: DefaultAction>(event: &E, registration: &Registration) {
    event.prevent_default();
    tracing::debug!(
        blank = registration.is_blank(),
        "registration submit suppressed; no backend is wired up"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Registration {
        Registration {
            name: "Chan Tai Man".to_owned(),
            phone: "+852 9123 4567".to_owned(),
            email: "not-an-email".to_owned(),
        }
    }

    #[test]
    fn submit_always_prevents_default() {
        for registration in [Registration::default(), filled()] {
            let mut event = MockDefaultAction::new();
            event.expect_prevent_default().times(1).return_const(());
            suppress_submit(&event, &registration);
        }
    }

    #[test]
    fn fields_use_native_input_hints() {
        let types: Vec<_> = Field::ALL.iter().map(|field| field.input_type()).collect();
        assert_eq!(types, ["text", "tel", "email"]);
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut registration = Registration::default();
        assert!(registration.is_blank());

        registration.set(Field::Phone, "+852 6000 0000".to_owned());
        assert_eq!(registration.get(Field::Phone), "+852 6000 0000");
        assert_eq!(registration.get(Field::Name), "");
        assert!(!registration.is_blank());
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut registration = Registration::default();
        registration.set(Field::Email, "   ".to_owned());
        assert!(registration.is_blank());
    }

    #[test]
    fn suppression_leaves_values_untouched() {
        let registration = filled();
        let mut event = MockDefaultAction::new();
        event.expect_prevent_default().times(1).return_const(());
        suppress_submit(&event, &registration);
        assert_eq!(registration, filled());
    }
}
