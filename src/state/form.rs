//! Registration form state and submission handling

use crate::reference::ReferenceData;
use crate::state::{Field, FieldValues};
use crate::validation::{self, ErrorMap};
use std::collections::HashSet;

/// Immutable copy of the form data at the moment of successful submission,
/// enriched with the resolved country name and dial code. Owned by the
/// success view after handoff; the form keeps no reference to it.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct SubmissionSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub country_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    /// Uppercased at snapshot time
    pub pan_number: String,
    pub aadhar_number: String,
    /// Display name resolved from reference data; empty if the country
    /// code did not resolve
    pub country_name: String,
    /// Dial code resolved from reference data; empty if the country code
    /// did not resolve
    pub dial_code: String,
}

impl SubmissionSnapshot {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Owns the field values, the touched set, and the derived error map, and
/// decides when the form as a whole is submittable.
///
/// One instance per form session; errors are only surfaced for fields the
/// user has blurred or that a failed submit swept into the touched set.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    values: FieldValues,
    touched: HashSet<Field>,
    errors: ErrorMap,
    reference: ReferenceData,
}

impl RegistrationForm {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            values: FieldValues::default(),
            touched: HashSet::new(),
            errors: ErrorMap::new(),
            reference,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The surfaced error for a field, if any
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[allow(dead_code)]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// City options for the currently selected country; empty while no
    /// country is chosen
    pub fn city_options(&self) -> &[String] {
        self.reference.cities_for(&self.values.country)
    }

    /// Update a field's value.
    ///
    /// Selecting a new country clears the chosen city in the same update,
    /// since city options are country-scoped. A touched field's error
    /// entry is dropped immediately on edit; the field is not re-validated
    /// until the next submit.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());

        if field == Field::Country {
            self.values.set(Field::City, String::new());
        }

        if self.touched.contains(&field) {
            self.errors.remove(&field);
        }
    }

    /// Mark a field as touched. Does not re-validate; errors for the field
    /// refresh on the next submit.
    pub fn on_field_blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Run full validation. On success, returns the enriched snapshot and
    /// leaves the form error-free. On failure, replaces the error map and
    /// marks every field touched so all outstanding errors render.
    pub fn submit(&mut self) -> Option<SubmissionSnapshot> {
        let errors = validation::validate_all(&self.values);

        if errors.is_empty() {
            self.errors.clear();
            Some(self.build_snapshot())
        } else {
            self.errors = errors;
            self.touched.extend(Field::ALL);
            None
        }
    }

    /// Whether a submit would currently succeed. Recomputed from the live
    /// values; independent of which errors have been surfaced.
    pub fn is_submittable(&self) -> bool {
        validation::validate_all(&self.values).is_empty()
    }

    /// Return to the initial state for a fresh registration
    pub fn reset(&mut self) {
        self.values = FieldValues::default();
        self.touched.clear();
        self.errors.clear();
    }

    fn build_snapshot(&self) -> SubmissionSnapshot {
        let country = self.reference.country(&self.values.country);

        SubmissionSnapshot {
            first_name: self.values.first_name.clone(),
            last_name: self.values.last_name.clone(),
            username: self.values.username.clone(),
            email: self.values.email.clone(),
            password: self.values.password.clone(),
            country_code: self.values.country_code.clone(),
            phone_number: self.values.phone_number.clone(),
            country: self.values.country.clone(),
            city: self.values.city.clone(),
            pan_number: self.values.pan_number.to_uppercase(),
            aadhar_number: self.values.aadhar_number.clone(),
            country_name: country.map(|c| c.display_name.clone()).unwrap_or_default(),
            dial_code: country.map(|c| c.dial_code.clone()).unwrap_or_default(),
        }
    }
}
