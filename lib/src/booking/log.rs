//! Append-only CSV log of confirmed bookings.

use super::{Booking, BookingError};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Bookings stored as CSV with the header `Name,Bus ID,Date,Booking Time`.
#[derive(Clone, Debug)]
pub struct BookingLog {
    path: PathBuf,
}

impl BookingLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one booking, writing the header first if the file is new or
    /// empty.
    pub fn append(&self, booking: &Booking) -> Result<(), BookingError> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => return Err(err.into()),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        wtr.serialize(booking)?;
        wtr.flush()?;

        info!(
            path = %self.path.display(),
            name = %booking.name,
            bus_id = %booking.bus_id,
            date = %booking.travel_date,
            "booking saved"
        );
        Ok(())
    }

    /// All bookings in file order. A missing file is an empty log.
    pub fn load(&self) -> Result<Vec<Booking>, BookingError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);
        let bookings = rdr.deserialize().collect::<Result<Vec<Booking>, _>>()?;
        Ok(bookings)
    }
}
