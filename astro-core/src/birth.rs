//! Birth data as typed by the user, and the payload derived from it.

use crate::error::{InputError, Result};
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
/// UTC-12 through UTC+14
pub const TIMEZONE_RANGE: (f64, f64) = (-12.0, 14.0);

/// Named field of the birth data form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    BirthDate,
    BirthTime,
    City,
    Latitude,
    Longitude,
    Timezone,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::BirthDate,
        FormField::BirthTime,
        FormField::City,
        FormField::Latitude,
        FormField::Longitude,
        FormField::Timezone,
    ];

    /// Wire/form name of the field
    pub fn name(&self) -> &'static str {
        match self {
            FormField::BirthDate => "birthDate",
            FormField::BirthTime => "birthTime",
            FormField::City => "city",
            FormField::Latitude => "latitude",
            FormField::Longitude => "longitude",
            FormField::Timezone => "timezone",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw text of every birth data field, exactly as entered.
///
/// Starts empty and is only ever mutated one field at a time (or, for a city
/// pick, through [`BirthForm::apply_location`]). No validation happens here;
/// see [`RequestPayload::try_from_form`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BirthForm {
    pub birth_date: String,
    pub birth_time: String,
    pub city: String,
    pub latitude: String,
    pub longitude: String,
    pub timezone: String,
}

impl BirthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::BirthDate => &self.birth_date,
            FormField::BirthTime => &self.birth_time,
            FormField::City => &self.city,
            FormField::Latitude => &self.latitude,
            FormField::Longitude => &self.longitude,
            FormField::Timezone => &self.timezone,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::BirthDate => &mut self.birth_date,
            FormField::BirthTime => &mut self.birth_time,
            FormField::City => &mut self.city,
            FormField::Latitude => &mut self.latitude,
            FormField::Longitude => &mut self.longitude,
            FormField::Timezone => &mut self.timezone,
        };
        *slot = value.into();
    }

    /// Overwrite the four location fields in one step.
    pub fn apply_location(&mut self, city: &str, latitude: f64, longitude: f64, timezone: f64) {
        self.city = city.to_string();
        self.latitude = latitude.to_string();
        self.longitude = longitude.to_string();
        self.timezone = timezone.to_string();
    }
}

/// Validated, typed projection of a [`BirthForm`], built once per submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestPayload {
    pub birth_date: NaiveDate,
    pub birth_time: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    /// Hours from UTC, fractional allowed
    pub timezone: f64,
}

impl RequestPayload {
    /// Validate the form and build a payload, or report the first problem found.
    pub fn try_from_form(form: &BirthForm) -> Result<Self> {
        let birth_date = parse_birth_date(&form.birth_date)?;
        let birth_time = parse_birth_time(&form.birth_time)?;
        let latitude = parse_coordinate("latitude", &form.latitude, LATITUDE_RANGE)?;
        let longitude = parse_coordinate("longitude", &form.longitude, LONGITUDE_RANGE)?;
        let timezone = parse_coordinate("timezone", &form.timezone, TIMEZONE_RANGE)?;
        Ok(Self {
            birth_date,
            birth_time,
            latitude,
            longitude,
            timezone,
        })
    }
}

fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::MissingBirthDate);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| InputError::InvalidBirthDate(raw.to_string()))
}

fn parse_birth_time(raw: &str) -> Result<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::MissingBirthTime);
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, TIME_FORMAT_SECONDS))
        .map_err(|_| InputError::InvalidBirthTime(raw.to_string()))
}

fn parse_coordinate(field: &'static str, raw: &str, (min, max): (f64, f64)) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidNumber {
            field,
            value: raw.to_string(),
        })?;
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
