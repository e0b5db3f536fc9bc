//! Savings goals the user funds from their available balance.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SavingsGoal {
    pub fn new(id: impl Into<String>, name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            color: None,
        }
    }
}

/// Payload for a goal that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: f64,
    pub color: Option<String>,
}

impl NewSavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            name: name.into(),
            target_amount,
            color: None,
        }
    }

    pub fn into_goal(self, id: impl Into<String>) -> SavingsGoal {
        SavingsGoal {
            id: id.into(),
            name: self.name.trim().to_string(),
            target_amount: self.target_amount,
            current_amount: 0.0,
            color: self.color,
        }
    }
}
