//! The fixed bus timetable.

use serde::Serialize;

/// One scheduled bus service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bus {
    #[serde(rename = "Bus ID")]
    pub id: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    /// Departure time as shown to travellers, e.g. `08:00 AM`.
    #[serde(rename = "Departure")]
    pub departure: String,
    #[serde(rename = "Arrival")]
    pub arrival: String,
    /// Fare in rupees.
    #[serde(rename = "Price")]
    pub price: u32,
}

impl Bus {
    pub fn new(
        id: &str,
        source: &str,
        destination: &str,
        departure: &str,
        arrival: &str,
        price: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            price,
        }
    }

    pub fn serves(&self, source: &str, destination: &str) -> bool {
        self.source == source && self.destination == destination
    }
}

/// Every bus that can be booked, in timetable order.
#[derive(Clone, Debug, PartialEq)]
pub struct BusSchedule {
    buses: Vec<Bus>,
}

impl Default for BusSchedule {
    fn default() -> Self {
        Self::new(vec![
            Bus::new("B001", "Pune", "Mumbai", "08:00 AM", "12:00 PM", 500),
            Bus::new("B002", "Pune", "Mumbai", "02:00 PM", "06:00 PM", 550),
            Bus::new("B003", "Pune", "Mumbai", "06:00 PM", "10:00 PM", 600),
            Bus::new("B004", "Pune", "Delhi", "09:00 AM", "09:00 PM", 1500),
            Bus::new("B005", "Pune", "Delhi", "09:00 PM", "09:00 AM", 1600),
        ])
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut unique: Vec<&str> = Vec::new();
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

impl BusSchedule {
    pub fn new(buses: Vec<Bus>) -> Self {
        Self { buses }
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn find(&self, bus_id: &str) -> Option<&Bus> {
        self.buses.iter().find(|bus| bus.id == bus_id)
    }

    /// Distinct departure cities, in timetable order.
    pub fn sources(&self) -> Vec<&str> {
        unique_in_order(self.buses.iter().map(|bus| bus.source.as_str()))
    }

    /// Distinct destination cities, in timetable order.
    pub fn destinations(&self) -> Vec<&str> {
        unique_in_order(self.buses.iter().map(|bus| bus.destination.as_str()))
    }

    /// Buses running from `source` to `destination`; empty when the route
    /// has no service.
    pub fn available(&self, source: &str, destination: &str) -> Vec<&Bus> {
        self.buses
            .iter()
            .filter(|bus| bus.serves(source, destination))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timetable() {
        let schedule = BusSchedule::default();
        assert_eq!(schedule.buses().len(), 5);
        let b005 = schedule.find("B005").unwrap();
        assert_eq!(b005.departure, "09:00 PM");
        assert_eq!(b005.arrival, "09:00 AM");
        assert_eq!(b005.price, 1600);
        assert!(schedule.find("B999").is_none());
    }

    #[test]
    fn test_sources_and_destinations_unique() {
        let schedule = BusSchedule::default();
        assert_eq!(schedule.sources(), vec!["Pune"]);
        assert_eq!(schedule.destinations(), vec!["Mumbai", "Delhi"]);
    }

    #[test]
    fn test_available_routes() {
        let schedule = BusSchedule::default();
        let ids: Vec<_> = schedule
            .available("Pune", "Mumbai")
            .iter()
            .map(|bus| bus.id.as_str())
            .collect();
        assert_eq!(ids, vec!["B001", "B002", "B003"]);
        assert_eq!(schedule.available("Pune", "Delhi").len(), 2);
        assert!(schedule.available("Mumbai", "Pune").is_empty());
    }
}
