//! Mutations still waiting for the backend, keyed by the record they act on.
//! A key is taken before the request goes out and released when it settles,
//! so a second click on the same row is dropped instead of sent twice.

use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    keys: HashSet<String>,
}

impl InFlight {
    /// Takes `key`. Returns `false` when a request for it is already out.
    pub fn begin(&mut self, key: &str) -> bool {
        self.keys.insert(key.to_string())
    }

    pub fn finish(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_for_same_key_is_refused() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.begin("user-1"));
        assert!(!in_flight.begin("user-1"));
        assert!(in_flight.contains("user-1"));

        // Other rows stay usable.
        assert!(in_flight.begin("user-2"));
    }

    #[test]
    fn finish_releases_the_key() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.begin("booking-7"));
        in_flight.finish("booking-7");
        assert!(!in_flight.contains("booking-7"));
        assert_eq!(in_flight, InFlight::default());
        assert!(in_flight.begin("booking-7"));

        in_flight.finish("unknown");
        assert!(in_flight.contains("booking-7"));
    }
}
