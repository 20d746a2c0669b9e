//! The nine inputs of the signup form, in the order they are rendered.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Prefix,
    FirstName,
    MiddleName,
    LastName,
    Email,
    Phone,
    Gender,
    Password,
    DateOfBirth,
}

impl Field {
    /// Every field, top to bottom.
    pub const ALL: [Field; 9] = [
        Field::Prefix,
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Gender,
        Field::Password,
        Field::DateOfBirth,
    ];

    /// Key used on the wire and as the input's `name`.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Prefix => "prefix",
            Field::FirstName => "firstName",
            Field::MiddleName => "middleName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::Password => "password",
            Field::DateOfBirth => "dateOfBirth",
        }
    }

    /// Human label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Prefix => "Prefix",
            Field::FirstName => "First Name",
            Field::MiddleName => "Middle Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone No.",
            Field::Gender => "Gender",
            Field::Password => "Password",
            Field::DateOfBirth => "Date Of Birth",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw, unvalidated input for every field. This is the draft under edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub prefix: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub password: String,
    pub date_of_birth: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Prefix => &self.prefix,
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Gender => &self.gender,
            Field::Password => &self.password,
            Field::DateOfBirth => &self.date_of_birth,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Prefix => &mut self.prefix,
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Gender => &mut self.gender,
            Field::Password => &mut self.password,
            Field::DateOfBirth => &mut self.date_of_birth,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
