//! Interface record and classification types.

/// One extracted interface record.
///
/// String fields start empty and stay empty until the corresponding
/// attribute line is seen inside the interface's block. `name` is set at
/// creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    /// Interface name (first token after the `interface ` keyword).
    pub name: String,

    /// VRF binding from ` ip vrf forwarding`.
    pub vrf: String,

    /// Primary IP address (first token of ` ip address`).
    pub address: String,

    /// Raw bandwidth text from ` bandwidth`.
    pub bandwidth: String,

    /// Raw description text from ` description`.
    pub description: String,

    /// Administrative shutdown marker. Once set it stays set.
    pub shutdown: bool,
}

impl InterfaceRecord {
    /// Creates an empty record for the given interface name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vrf: String::new(),
            address: String::new(),
            bandwidth: String::new(),
            description: String::new(),
            shutdown: false,
        }
    }

    /// Rendered form of the shutdown marker.
    pub fn shutdown_marker(&self) -> &'static str {
        if self.shutdown {
            "shutdown"
        } else {
            ""
        }
    }
}

/// Interface category classification.
///
/// Categories are recognized by case-sensitive prefix match on the
/// interface name; names outside the three tracked families have no
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntfCategory {
    /// Multilink bundle (e.g., Multilink1).
    Multilink,

    /// Loopback interface (e.g., Loopback0).
    Loopback,

    /// Port channel / LAG (e.g., Port-channel2).
    PortChannel,
}

impl IntfCategory {
    /// Classifies an interface name by prefix.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.starts_with("Multi") {
            Some(IntfCategory::Multilink)
        } else if name.starts_with("Loop") {
            Some(IntfCategory::Loopback)
        } else if name.starts_with("Port") {
            Some(IntfCategory::PortChannel)
        } else {
            None
        }
    }
}

/// Per-category interface line counters.
///
/// Every qualifying `interface` line counts, including repeated stanzas
/// for the same interface name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounters {
    /// Count of Multilink interface lines.
    pub multilink: u64,

    /// Count of Loopback interface lines.
    pub loopback: u64,

    /// Count of Port-channel interface lines.
    pub port_channel: u64,
}

impl CategoryCounters {
    /// Bumps the counter matching the given interface name, if any.
    pub fn count(&mut self, name: &str) {
        match IntfCategory::from_name(name) {
            Some(IntfCategory::Multilink) => self.multilink += 1,
            Some(IntfCategory::Loopback) => self.loopback += 1,
            Some(IntfCategory::PortChannel) => self.port_channel += 1,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_record_new() {
        let rec = InterfaceRecord::new("GigabitEthernet0/1");
        assert_eq!(rec.name, "GigabitEthernet0/1");
        assert!(rec.vrf.is_empty());
        assert!(rec.address.is_empty());
        assert!(rec.bandwidth.is_empty());
        assert!(rec.description.is_empty());
        assert!(!rec.shutdown);
    }

    #[test]
    fn test_shutdown_marker() {
        let mut rec = InterfaceRecord::new("Serial0/0");
        assert_eq!(rec.shutdown_marker(), "");
        rec.shutdown = true;
        assert_eq!(rec.shutdown_marker(), "shutdown");
    }

    #[test]
    fn test_category_from_name_multilink() {
        assert_eq!(
            IntfCategory::from_name("Multilink1"),
            Some(IntfCategory::Multilink)
        );
    }

    #[test]
    fn test_category_from_name_loopback() {
        assert_eq!(
            IntfCategory::from_name("Loopback0"),
            Some(IntfCategory::Loopback)
        );
    }

    #[test]
    fn test_category_from_name_port_channel() {
        assert_eq!(
            IntfCategory::from_name("Port-channel2"),
            Some(IntfCategory::PortChannel)
        );
    }

    #[test]
    fn test_category_from_name_unclassified() {
        assert_eq!(IntfCategory::from_name("GigabitEthernet0/1"), None);
        assert_eq!(IntfCategory::from_name("Vlan100"), None);
        // Prefix match is case-sensitive.
        assert_eq!(IntfCategory::from_name("multilink1"), None);
    }

    #[test]
    fn test_counters_count_repeats() {
        let mut counters = CategoryCounters::default();
        counters.count("Multilink1");
        counters.count("Multilink1");
        counters.count("Loopback0");
        counters.count("Port-channel2");
        counters.count("GigabitEthernet0/1");

        assert_eq!(counters.multilink, 2);
        assert_eq!(counters.loopback, 1);
        assert_eq!(counters.port_channel, 1);
    }
}
