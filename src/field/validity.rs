/// Outcome of validating a field value.
///
/// An invalid result may carry a message; the controller keeps it while the
/// row is in the error state so the row renderer can show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(Option<String>),
}

pub const REQUIRED_MESSAGE: &str = "This field is required";

impl Validity {
    pub fn invalid(message: impl Into<String>) -> Self {
        Validity::Invalid(Some(message.into()))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(message) => message.as_deref(),
        }
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid(None)
        }
    }
}

/// Custom check consulted by `is_valid` once the required check passed.
pub trait Validator {
    fn validate(&self, value: &str) -> Validity;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Validity,
{
    fn validate(&self, value: &str) -> Validity {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_maps_to_validity_without_message() {
        assert_eq!(Validity::from(true), Validity::Valid);
        assert_eq!(Validity::from(false), Validity::Invalid(None));
        assert_eq!(Validity::from(false).message(), None);
    }

    #[test]
    fn closures_act_as_validators() {
        let not_bad = |value: &str| {
            if value == "bad" {
                Validity::invalid("no bad values")
            } else {
                Validity::Valid
            }
        };
        assert!(not_bad.validate("good").is_valid());
        assert_eq!(not_bad.validate("bad").message(), Some("no bad values"));
    }
}
