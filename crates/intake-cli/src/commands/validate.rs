use anyhow::{Result, bail};
use clap::ValueEnum;
use intake_core::validation::{
    ExperienceError, parse_experience, validate_email, validate_name, validate_phone,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Field {
    Name,
    Email,
    Phone,
    Experience,
}

pub fn run(field: Field, value: &str) -> Result<()> {
    let verdict = match field {
        Field::Name => validate_name(value).then(|| "valid name".to_string()),
        Field::Email => validate_email(value).then(|| "valid email".to_string()),
        Field::Phone => validate_phone(value).then(|| "valid phone number".to_string()),
        Field::Experience => match parse_experience(value) {
            Ok(years) => Some(format!("valid experience: {} years", years)),
            Err(ExperienceError::NotANumber) => bail!("'{}' is not a number", value),
            Err(ExperienceError::OutOfRange) => bail!("'{}' is out of range", value),
        },
    };

    match verdict {
        Some(message) => {
            println!("{}", message);
            Ok(())
        }
        None => bail!("'{}' is not a valid {:?}", value, field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fields() {
        assert!(run(Field::Name, "Jane Smith").is_ok());
        assert!(run(Field::Email, "not-an-email").is_err());
        assert!(run(Field::Phone, "+1 (555) 123-4567").is_ok());
        assert!(run(Field::Experience, "51").is_err());
        assert!(run(Field::Experience, "3.5").is_ok());
    }
}
