//! Bus ticket booking.
//!
//! A fixed [`BusSchedule`], validation of [`BookingRequest`]s against it,
//! and a CSV [`BookingLog`] of confirmed [`Booking`]s. There is no seat
//! capacity and no double-booking check.

mod log;
mod schedule;

pub use log::BookingLog;
pub use schedule::{Bus, BusSchedule};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Please enter your name to book a ticket")]
    EmptyName,

    #[error("Unknown bus '{0}'")]
    UnknownBus(String),

    #[error("Bus {bus_id} does not run from {from} to {to}")]
    RouteMismatch {
        bus_id: String,
        from: String,
        to: String,
    },

    #[error("Travel date {date} is before today ({today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// What a traveller asks for.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub source: String,
    pub destination: String,
    pub bus_id: String,
    pub travel_date: NaiveDate,
}

impl BookingRequest {
    /// Validate the request and stamp it with `now`.
    ///
    /// # Errors
    /// The name must not be blank, the bus must exist and run the requested
    /// route, and `travel_date` must not be before `today`.
    pub fn confirm(
        &self,
        schedule: &BusSchedule,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<Booking, BookingError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BookingError::EmptyName);
        }

        let bus = schedule
            .find(&self.bus_id)
            .ok_or_else(|| BookingError::UnknownBus(self.bus_id.clone()))?;
        if !bus.serves(&self.source, &self.destination) {
            return Err(BookingError::RouteMismatch {
                bus_id: bus.id.clone(),
                from: self.source.clone(),
                to: self.destination.clone(),
            });
        }

        if self.travel_date < today {
            return Err(BookingError::DateInPast {
                date: self.travel_date,
                today,
            });
        }

        Ok(Booking {
            name: name.to_string(),
            bus_id: bus.id.clone(),
            travel_date: self.travel_date,
            booking_time: now,
        })
    }
}

/// A confirmed booking, one row of the [`BookingLog`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Bus ID")]
    pub bus_id: String,
    #[serde(rename = "Date")]
    pub travel_date: NaiveDate,
    #[serde(rename = "Booking Time", with = "booking_time")]
    pub booking_time: NaiveDateTime,
}

impl Booking {
    /// The confirmation line shown after a successful booking.
    pub fn confirmation(&self) -> String {
        format!(
            "Ticket booked successfully for {} on {} in Bus {}",
            self.name,
            self.travel_date.format("%Y-%m-%d"),
            self.bus_id
        )
    }
}

/// `%Y-%m-%d %H:%M:%S`, without the `T` of chrono's default encoding.
mod booking_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}
