//! Static catalog of available widget kinds.
//!
//! The catalog is the single source of truth for which widget ids exist,
//! how they are titled in the UI, and which configuration keys each widget
//! needs before it can render. It is defined once at compile time and never
//! persisted; persisted state that references an id missing from the
//! catalog degrades to a placeholder cell at render time.

/// Static description of one widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// Stable identifier used in the selection, layout, and config maps.
    pub id: &'static str,
    /// Human-readable title shown in the sidebar and cell header.
    pub title: &'static str,
    /// Icon shown next to the title.
    pub icon: &'static str,
    /// Configuration keys that must be present and non-empty before the
    /// widget renders. Order determines form field order.
    pub required_config_keys: &'static [&'static str],
}

/// All widget kinds known to this build, in sidebar display order.
pub const CATALOG: &[WidgetDescriptor] = &[
    WidgetDescriptor {
        id: "overview",
        title: "Dashboard Overview",
        icon: "📊",
        required_config_keys: &[],
    },
    WidgetDescriptor {
        id: "analytics",
        title: "Analytics",
        icon: "📈",
        required_config_keys: &["trackingId"],
    },
    WidgetDescriptor {
        id: "settings",
        title: "Settings",
        icon: "⚙️",
        required_config_keys: &[],
    },
    WidgetDescriptor {
        id: "profile",
        title: "User Profile",
        icon: "👤",
        required_config_keys: &[],
    },
    WidgetDescriptor {
        id: "notifications",
        title: "Notifications",
        icon: "🔔",
        required_config_keys: &[],
    },
    WidgetDescriptor {
        id: "reports",
        title: "Reports",
        icon: "📋",
        required_config_keys: &["dataSource"],
    },
];

/// Looks up a descriptor by widget id.
///
/// Returns `None` for ids outside the catalog (e.g. stale persisted data
/// referencing a widget kind that no longer exists).
pub fn descriptor(id: &str) -> Option<&'static WidgetDescriptor> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Returns `true` if the id names a widget kind in the catalog.
pub fn is_known(id: &str) -> bool {
    descriptor(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_widgets() {
        assert_eq!(CATALOG.len(), 6);
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id");
            }
        }
    }

    #[test]
    fn descriptor_finds_known_ids() {
        for expected in &[
            "overview",
            "analytics",
            "settings",
            "profile",
            "notifications",
            "reports",
        ] {
            let d = descriptor(expected);
            assert!(d.is_some(), "expected descriptor for '{expected}'");
            assert_eq!(d.expect("already checked").id, *expected);
        }
    }

    #[test]
    fn descriptor_returns_none_for_unknown() {
        assert!(descriptor("nonexistent").is_none());
        assert!(descriptor("").is_none());
    }

    #[test]
    fn analytics_requires_tracking_id() {
        let d = descriptor("analytics").expect("analytics exists");
        assert_eq!(d.required_config_keys, &["trackingId"]);
    }

    #[test]
    fn reports_requires_data_source() {
        let d = descriptor("reports").expect("reports exists");
        assert_eq!(d.required_config_keys, &["dataSource"]);
    }

    #[test]
    fn overview_requires_nothing() {
        let d = descriptor("overview").expect("overview exists");
        assert!(d.required_config_keys.is_empty());
    }

    #[test]
    fn is_known_matches_descriptor() {
        assert!(is_known("profile"));
        assert!(!is_known("stale-widget"));
    }
}
