//! Todo Models
//!
//! Persisted item record and the small enums around it.

use serde::{Deserialize, Serialize};

/// Item priority, chosen when the item is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities in selector order
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse the wire/select value; unknown strings yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// Label shown in the priority selector
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "低优先级",
            Priority::Medium => "中优先级",
            Priority::High => "高优先级",
        }
    }
}

/// Which slice of the list is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in tab order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Whether an item belongs to this slice
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "全部",
            Filter::Active => "进行中",
            Filter::Completed => "已完成",
        }
    }
}

/// A single todo entry as stored in local storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier (UUID v4 for items created here)
    pub id: String,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    pub priority: Priority,
}

impl Item {
    pub fn new(id: String, text: String, created_at: i64, priority: Priority) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
            priority,
        }
    }
}
