//! Explorer domain: indexed transaction lookups.

pub mod client;
pub mod wire;

use wire::TxDetailData;

impl TxDetailData {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Values of `key` on every event of type `event_type`, in event order.
    pub fn event_attributes<'a>(
        &'a self,
        event_type: &'a str,
        key: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.events
            .iter()
            .filter(move |e| e.r#type == event_type)
            .filter_map(move |e| e.attributes.get(key).map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::wire::Event;
    use super::*;

    fn event(kind: &str, attrs: &[(&str, &str)]) -> Event {
        Event {
            r#type: kind.to_string(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_event_attributes() {
        let tx = TxDetailData {
            events: vec![
                event("message", &[("sender", "inj1a")]),
                event("transfer", &[("amount", "10inj")]),
                event("message", &[("module", "bank")]),
                event("message", &[("sender", "inj1b")]),
            ],
            ..Default::default()
        };
        let senders: Vec<_> = tx.event_attributes("message", "sender").collect();
        assert_eq!(senders, vec!["inj1a", "inj1b"]);
        assert!(tx.is_success());
    }

    #[test]
    fn test_failed_tx() {
        let tx = TxDetailData {
            code: 5,
            codespace: "sdk".to_string(),
            ..Default::default()
        };
        assert!(!tx.is_success());
    }
}
