//! Client-side form validation: errors are collected per field and shown
//! inline before anything is sent.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    /// Adds `message` for `field` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &'static str, message: &'static str) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message in field order, for a single banner.
    pub fn first(&self) -> Option<&'static str> {
        self.0.values().next().copied()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub const REQUIRED: &str = "Trường này là bắt buộc";

/// Vietnamese mobile numbers: 10 digits starting with 0.
pub fn is_valid_phone(phone: &str) -> bool {
    let p = phone.trim();
    p.len() == 10 && p.starts_with('0') && p.chars().all(|c| c.is_ascii_digit())
}

/// Citizen identity card (CCCD): 12 digits.
pub fn is_valid_national_id(id: &str) -> bool {
    let id = id.trim();
    id.len() == 12 && id.chars().all(|c| c.is_ascii_digit())
}

/// Tax code: 10 digits, optionally followed by `-` and a 3-digit branch suffix.
pub fn is_valid_tax_code(code: &str) -> bool {
    let code = code.trim();
    let (head, branch) = match code.split_once('-') {
        Some((h, b)) => (h, Some(b)),
        None => (code, None),
    };
    let digits = |s: &str, n: usize| s.len() == n && s.chars().all(|c| c.is_ascii_digit());
    digits(head, 10) && branch.map_or(true, |b| digits(b, 3))
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_formats() {
        assert!(is_valid_phone("0912345678"));
        assert!(!is_valid_phone("912345678"));
        assert!(is_valid_national_id("001203004567"));
        assert!(!is_valid_national_id("00120300456"));
        assert!(is_valid_tax_code("0101234567"));
        assert!(is_valid_tax_code("0101234567-001"));
        assert!(!is_valid_tax_code("0101234567-1"));
        assert!(is_valid_email("ops@partner.vn"));
        assert!(!is_valid_email("ops@partner"));
    }

    #[test]
    fn test_first_error_wins_per_field() {
        let mut errors = FieldErrors::new();
        errors.check(false, "phone", "first");
        errors.check(false, "phone", "second");
        assert_eq!(errors.get("phone"), Some("first"));
        assert_eq!(errors.len(), 1);
        assert!(errors.into_result().is_err());
    }
}
