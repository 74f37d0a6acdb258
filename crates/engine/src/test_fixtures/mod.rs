//! Common test helpers for building battles and judges.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::battle;
//!
//! #[tokio::test]
//! async fn stronger_side_wins() {
//!     let battle = battle("b-1", 90.0, 10.0);
//!     // ... test logic
//! }
//! ```

use yonokomae_domain::{Battle, BattleStatus, Judge, Narrative, Neta, PublishState, Significance};

/// A valid, successful battle with the given powers.
pub fn battle(id: &str, yono_power: f64, komae_power: f64) -> Battle {
    Battle {
        id: id.to_string(),
        title: "Station Rivalry".to_string(),
        subtitle: "Which platform is busier?".to_string(),
        theme_id: "test".to_string(),
        significance: Significance::Medium,
        narrative: Narrative::new("Two towns compare.", "A crowded morning."),
        yono: Neta::new("Yono", "Saitama", "Home of the super arena.", yono_power),
        komae: Neta::new("Komae", "Tokyo", "Smallest city in Tokyo.", komae_power),
        provenance: None,
        publish_state: PublishState::Published,
        status: BattleStatus::Success,
    }
}

pub fn judge(code_name: &str) -> Judge {
    Judge::new(
        format!("judge-{}", code_name.trim().to_lowercase()),
        format!("Judge {code_name}"),
        code_name,
    )
}
