//! Field identifiers and the fixed field set of the registration form

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text input
    Text,
    /// Free-text input, masked while rendering
    Password,
    /// One of a fixed list of options
    Select,
}

/// The eleven registration fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    CountryCode,
    PhoneNumber,
    Country,
    City,
    PanNumber,
    AadharNumber,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::CountryCode,
        Field::PhoneNumber,
        Field::Country,
        Field::City,
        Field::PanNumber,
        Field::AadharNumber,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::CountryCode => "Code",
            Field::PhoneNumber => "Phone Number",
            Field::Country => "Country",
            Field::City => "City",
            Field::PanNumber => "PAN Number",
            Field::AadharNumber => "Aadhar Number",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FirstName => "Enter your first name",
            Field::LastName => "Enter your last name",
            Field::Username => "Enter your username",
            Field::Email => "Enter your email",
            Field::Password => "Enter your password",
            Field::CountryCode => "Code",
            Field::PhoneNumber => "Enter 10-digit number",
            Field::Country => "Select Country",
            Field::City => "Select City",
            Field::PanNumber => "ABCDE1234F",
            Field::AadharNumber => "123456789012",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Password => FieldKind::Password,
            Field::CountryCode | Field::Country | Field::City => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    /// Maximum accepted input length, enforced at the input layer
    pub fn max_input_len(&self) -> Option<usize> {
        match self {
            Field::PanNumber => Some(10),
            Field::AadharNumber => Some(12),
            _ => None,
        }
    }
}

/// Values for the fixed field set.
///
/// Exactly these eleven entries exist for the life of a form session; they
/// are only ever mutated, never added or removed.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub country_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan_number: String,
    pub aadhar_number: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::CountryCode => &self.country_code,
            Field::PhoneNumber => &self.phone_number,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::PanNumber => &self.pan_number,
            Field::AadharNumber => &self.aadhar_number,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::CountryCode => self.country_code = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Country => self.country = value,
            Field::City => self.city = value,
            Field::PanNumber => self.pan_number = value,
            Field::AadharNumber => self.aadhar_number = value,
        }
    }
}
