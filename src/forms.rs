//! Address Form State
//!
//! Controlled-form values with per-field validation errors.

use std::collections::BTreeMap;

use crate::api::AddressData;
use crate::models::Address;

const DEFAULT_COUNTRY: &str = "Việt Nam";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressField {
    PhoneNumber,
    AddressLine1,
    AddressLine2,
    City,
    PostalCode,
    Country,
}

impl AddressField {
    /// Error shown when a required field is blank; `None` for optional fields
    pub fn required_message(&self) -> Option<&'static str> {
        match self {
            Self::PhoneNumber => Some("Vui lòng nhập số điện thoại"),
            Self::AddressLine1 => Some("Vui lòng nhập địa chỉ"),
            Self::AddressLine2 => None,
            Self::City => Some("Vui lòng nhập thành phố"),
            Self::PostalCode => Some("Vui lòng nhập mã bưu điện"),
            Self::Country => Some("Vui lòng nhập quốc gia"),
        }
    }
}

/// Validation errors keyed by field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<AddressField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: AddressField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: AddressField) {
        self.0.remove(&field);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressDraft {
    pub phone_number: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub is_default_shipping: bool,
}

impl Default for AddressDraft {
    fn default() -> Self {
        Self {
            phone_number: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            is_default_shipping: false,
        }
    }
}

impl AddressDraft {
    /// Pre-populate from an existing address
    pub fn from_address(address: &Address) -> Self {
        Self {
            phone_number: address.phone_number.clone(),
            address_line1: address.address_line1.clone(),
            address_line2: address.address_line2.clone().unwrap_or_default(),
            city: address.city.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
            is_default_shipping: address.is_default_shipping,
        }
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::PhoneNumber => &self.phone_number,
            AddressField::AddressLine1 => &self.address_line1,
            AddressField::AddressLine2 => &self.address_line2,
            AddressField::City => &self.city,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: AddressField, value: String) {
        let slot = match field {
            AddressField::PhoneNumber => &mut self.phone_number,
            AddressField::AddressLine1 => &mut self.address_line1,
            AddressField::AddressLine2 => &mut self.address_line2,
            AddressField::City => &mut self.city,
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::Country => &mut self.country,
        };
        *slot = value;
    }

    pub fn validate(&self) -> FieldErrors {
        let fields = [
            AddressField::PhoneNumber,
            AddressField::AddressLine1,
            AddressField::City,
            AddressField::PostalCode,
            AddressField::Country,
        ];
        let mut errors = FieldErrors::default();
        for field in fields {
            if let Some(message) = field.required_message() {
                if self.get(field).trim().is_empty() {
                    errors.0.insert(field, message);
                }
            }
        }
        errors
    }

    /// Request body with trimmed values
    pub fn to_data(&self) -> AddressData {
        let line2 = self.address_line2.trim();
        AddressData {
            phone_number: self.phone_number.trim().to_string(),
            address_line1: self.address_line1.trim().to_string(),
            address_line2: (!line2.is_empty()).then(|| line2.to_string()),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            country: self.country.trim().to_string(),
            is_default_shipping: self.is_default_shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AddressDraft {
        AddressDraft {
            phone_number: "0901234567".into(),
            address_line1: "12 Lê Lợi".into(),
            address_line2: "  ".into(),
            city: "Huế".into(),
            postal_code: "530000".into(),
            country: "Việt Nam".into(),
            is_default_shipping: true,
        }
    }

    #[test]
    fn test_blank_form_errors_per_field() {
        let mut form = AddressDraft::default();
        form.country.clear();
        let errors = form.validate();
        assert_eq!(errors.get(AddressField::PhoneNumber), Some("Vui lòng nhập số điện thoại"));
        assert_eq!(errors.get(AddressField::AddressLine1), Some("Vui lòng nhập địa chỉ"));
        assert_eq!(errors.get(AddressField::City), Some("Vui lòng nhập thành phố"));
        assert_eq!(errors.get(AddressField::PostalCode), Some("Vui lòng nhập mã bưu điện"));
        assert_eq!(errors.get(AddressField::Country), Some("Vui lòng nhập quốc gia"));
        assert_eq!(errors.get(AddressField::AddressLine2), None);
    }

    #[test]
    fn test_whitespace_is_blank() {
        let mut form = filled();
        form.set(AddressField::City, "   ".into());
        let mut errors = form.validate();
        assert!(!errors.is_empty());
        errors.clear(AddressField::City);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_valid_form_to_data() {
        let form = filled();
        assert!(form.validate().is_empty());
        let data = form.to_data();
        assert_eq!(data.address_line2, None);
        assert_eq!(data.address_line1, "12 Lê Lợi");
        assert!(data.is_default_shipping);
    }

    #[test]
    fn test_from_address_prepopulates() {
        let address = Address {
            address_id: 4,
            phone_number: "0911".into(),
            address_line1: "1 Trần Phú".into(),
            address_line2: Some("Tầng 3".into()),
            city: "Đà Nẵng".into(),
            postal_code: "550000".into(),
            country: "Việt Nam".into(),
            is_default_shipping: false,
        };
        let form = AddressDraft::from_address(&address);
        assert_eq!(form.get(AddressField::AddressLine2), "Tầng 3");
        assert_eq!(form.get(AddressField::City), "Đà Nẵng");
    }
}
