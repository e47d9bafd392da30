//! Keyword heuristic that suggests an expense category from a free-text
//! transaction description.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Groceries,
    Dining,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Income,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "groceries",
            Category::Dining => "dining",
            Category::Transport => "transport",
            Category::Housing => "housing",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Shopping => "shopping",
            Category::Income => "income",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Checked top to bottom; the first rule with a matching keyword wins.
const RULES: &[(Category, &[&str])] = &[
    (Category::Income, &["salary", "payroll", "paycheck", "refund", "dividend", "interest"]),
    (Category::Groceries, &["grocery", "groceries", "supermarket", "market", "aldi", "costco", "trader joe"]),
    (Category::Dining, &["restaurant", "cafe", "coffee", "starbucks", "pizza", "burger", "takeout", "doordash", "uber eats"]),
    (Category::Transport, &["uber", "lyft", "taxi", "fuel", "gas station", "petrol", "parking", "metro", "train", "bus", "airline"]),
    (Category::Housing, &["rent", "mortgage", "landlord", "hoa"]),
    (Category::Utilities, &["electric", "water bill", "internet", "phone", "utility", "comcast", "verizon"]),
    (Category::Entertainment, &["netflix", "spotify", "cinema", "movie", "concert", "steam", "game"]),
    (Category::Health, &["pharmacy", "doctor", "dentist", "hospital", "clinic", "gym", "insurance"]),
    (Category::Shopping, &["amazon", "target", "walmart", "ikea", "store", "shop"]),
];

/// Suggest a category for `description`. Matching is case-insensitive;
/// blank or unrecognised descriptions yield [`Category::Other`].
pub fn categorize(description: &str) -> Category {
    let text = description.trim().to_lowercase();
    if text.is_empty() {
        return Category::Other;
    }

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_common_merchants() {
        assert_eq!(categorize("STARBUCKS #1234"), Category::Dining);
        assert_eq!(categorize("Monthly rent - March"), Category::Housing);
        assert_eq!(categorize("Netflix.com"), Category::Entertainment);
        assert_eq!(categorize("Whole Foods Market"), Category::Groceries);
        assert_eq!(categorize("Shell gas station"), Category::Transport);
    }

    #[test]
    fn first_rule_wins() {
        // "uber eats" is dining even though "uber" is also a transport keyword
        assert_eq!(categorize("Uber Eats order"), Category::Dining);
        assert_eq!(categorize("Amazon refund"), Category::Income);
    }

    #[test]
    fn blank_and_unknown_fall_back_to_other() {
        assert_eq!(categorize(""), Category::Other);
        assert_eq!(categorize("   "), Category::Other);
        assert_eq!(categorize("xq-7781"), Category::Other);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_value(Category::Groceries).unwrap(), "groceries");
        assert_eq!(Category::Utilities.to_string(), "utilities");
    }
}
