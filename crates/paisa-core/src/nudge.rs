//! Nudge prompt context
//!
//! The demo facts that go into the nudge prompt live here so they sit in one
//! place instead of inline in the handler. `Default` carries the hackathon
//! demo values.

/// Facts rendered into the nudge prompt
#[derive(Debug, Clone, PartialEq)]
pub struct NudgeContext {
    /// User's display name
    pub user: String,
    /// Current balance, preformatted for the prompt (e.g. "₹35,000")
    pub balance: String,
    /// Upcoming rent amount, preformatted (e.g. "₹50,000")
    pub upcoming_rent: String,
    /// Days until the rent is due
    pub due_in_days: u32,
    /// Risk label shown alongside the nudge
    pub risk_level: String,
}

impl Default for NudgeContext {
    fn default() -> Self {
        Self {
            user: "Rahul".to_string(),
            balance: "₹35,000".to_string(),
            upcoming_rent: "₹50,000".to_string(),
            due_in_days: 3,
            risk_level: "Critical".to_string(),
        }
    }
}

impl NudgeContext {
    /// Render the prompt sent to the text-generation backend
    pub fn render(&self) -> String {
        format!(
            "User: {}. Current Balance: {}. Upcoming Rent: {} due in {} days. \
             Risk Level: {}. Write a short, urgent, emojis-included behavioral \
             nudge to stop him from ordering food delivery right now.",
            self.user, self.balance, self.upcoming_rent, self.due_in_days, self.risk_level
        )
    }
}
