/// Identifies one department fetch: the faculty it was issued for and its
/// position in the issue order
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DepartmentTicket {
    faculty_id: String,
    generation: u64,
}

impl DepartmentTicket {
    pub fn faculty_id(&self) -> &str {
        &self.faculty_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tracks department fetches so a slow response for an earlier faculty
/// selection can never replace the list for the current one
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepartmentRequests {
    generation: u64,
    latest: Option<DepartmentTicket>,
    in_flight: bool,
}

impl DepartmentRequests {
    /// Issue a ticket for `faculty_id`, superseding any earlier one
    pub fn begin(&mut self, faculty_id: &str) -> DepartmentTicket {
        self.generation += 1;
        let ticket = DepartmentTicket {
            faculty_id: faculty_id.to_string(),
            generation: self.generation,
        };
        self.latest = Some(ticket.clone());
        self.in_flight = true;
        ticket
    }

    /// Drop the outstanding request; any response still in flight becomes stale
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.latest = None;
        self.in_flight = false;
    }

    pub fn latest(&self) -> Option<&DepartmentTicket> {
        self.latest.as_ref()
    }

    pub fn is_current(&self, ticket: &DepartmentTicket) -> bool {
        self.latest.as_ref() == Some(ticket)
    }

    /// Settle a response. Returns false when the response is stale and must be discarded.
    pub fn complete(&mut self, ticket: &DepartmentTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut requests = DepartmentRequests::default();

        let first = requests.begin("1");
        let second = requests.begin("2");
        assert!(requests.is_loading());

        // The slower, earlier request arrives last and is ignored
        assert!(requests.complete(&second));
        assert!(!requests.complete(&first));
        assert!(!requests.is_loading());
        assert_eq!(requests.latest(), Some(&second));
    }

    #[test]
    fn test_reselecting_same_faculty_issues_new_ticket() {
        let mut requests = DepartmentRequests::default();

        let first = requests.begin("1");
        let second = requests.begin("1");
        assert_ne!(first, second);
        assert!(!requests.is_current(&first));
        assert!(requests.is_current(&second));
    }

    #[test]
    fn test_cancel_discards_in_flight_response() {
        let mut requests = DepartmentRequests::default();

        let ticket = requests.begin("3");
        requests.cancel();

        assert!(!requests.complete(&ticket));
        assert_eq!(requests.latest(), None);
        assert!(!requests.is_loading());
    }
}
