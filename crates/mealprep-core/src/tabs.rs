//! Tabs of the plan viewer

/// The fixed set of views, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Shopping,
    Prep,
    Week,
    Notes,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Overview, Tab::Shopping, Tab::Prep, Tab::Week, Tab::Notes];

    /// Stable identifier used for the tab button's DOM id
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Shopping => "shopping",
            Tab::Prep => "prep",
            Tab::Week => "week",
            Tab::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Shopping => "Shopping",
            Tab::Prep => "Sunday Prep",
            Tab::Week => "This Week",
            Tab::Notes => "Notes",
        }
    }
}
