/// Hands out increasing tickets for requests that can be superseded.
///
/// A panel takes a ticket when it fires a request and checks it when the
/// response arrives; only the response for the latest ticket may touch state.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = RequestSequence::default();
        let first = seq.next();
        assert!(seq.is_current(first));

        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn fresh_sequence_accepts_nothing() {
        let seq = RequestSequence::default();
        assert!(!seq.is_current(1));
    }
}
