//! Template-driven demo battles, one repository per locale.
//!
//! Each locale ships a [`LocalePack`] of fully authored templates. The
//! generator picks one at random and rolls an independent power in
//! `[0, 100]` for each side.

mod de;
mod en;
mod ja;

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{
    Battle, BattleStatus, DelayOption, Narrative, Neta, PublishState, Significance,
};

use crate::infrastructure::delay::Delayer;
use crate::infrastructure::ports::{BattleReportRepo, RandomPort, RepoError};

/// Upper bound for a demo side's power.
pub const MAX_DEMO_POWER: i64 = 100;

#[derive(Debug, Clone, Copy)]
pub struct SideTemplate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BattleTemplate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub overview: &'static str,
    pub scenario: &'static str,
    pub yono: SideTemplate,
    pub komae: SideTemplate,
}

#[derive(Debug, Clone, Copy)]
pub struct LocalePack {
    pub locale: &'static str,
    pub templates: &'static [BattleTemplate],
}

impl LocalePack {
    pub const JA: LocalePack = ja::PACK;
    pub const EN: LocalePack = en::PACK;
    pub const DE: LocalePack = de::PACK;
}

/// Demo battle generator for one locale pack.
pub struct DemoBattleReportRepo {
    pack: LocalePack,
    random: Arc<dyn RandomPort>,
    delayer: Arc<Delayer>,
    delay: Option<DelayOption>,
}

impl DemoBattleReportRepo {
    pub fn new(
        pack: LocalePack,
        random: Arc<dyn RandomPort>,
        delayer: Arc<Delayer>,
        delay: Option<DelayOption>,
    ) -> Self {
        Self {
            pack,
            random,
            delayer,
            delay,
        }
    }

    fn roll_power(&self) -> f64 {
        self.random.gen_range(0, MAX_DEMO_POWER).clamp(0, MAX_DEMO_POWER) as f64
    }

    fn side(&self, template: &SideTemplate, image: &str) -> Neta {
        Neta::new(
            template.title,
            template.subtitle,
            template.description,
            self.roll_power(),
        )
        .with_image_url(format!("/images/demo/{image}.webp"))
    }

    fn instantiate(&self, template: &BattleTemplate) -> Battle {
        Battle {
            id: format!("demo-{}-{}", self.pack.locale, self.random.gen_uuid()),
            title: template.title.to_string(),
            subtitle: template.subtitle.to_string(),
            theme_id: "demo".to_string(),
            significance: Significance::Low,
            narrative: Narrative::new(template.overview, template.scenario),
            yono: self.side(&template.yono, "yono"),
            komae: self.side(&template.komae, "komae"),
            provenance: None,
            publish_state: PublishState::Published,
            status: BattleStatus::Success,
        }
    }
}

#[async_trait]
impl BattleReportRepo for DemoBattleReportRepo {
    async fn generate_report(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Battle, RepoError> {
        self.delayer.apply(self.delay.as_ref(), cancel).await?;

        let templates = self.pack.templates;
        if templates.is_empty() {
            return Err(RepoError::not_found("demo template", self.pack.locale));
        }
        let last = templates.len() as i64 - 1;
        let index = self.random.gen_range(0, last).clamp(0, last) as usize;
        let battle = self.instantiate(&templates[index]);

        tracing::debug!(
            locale = self.pack.locale,
            template = index,
            battle_id = %battle.id,
            "Generated demo battle"
        );
        Ok(battle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedRandom, SequenceRandom, SystemRandom};

    fn repo(pack: LocalePack, random: Arc<dyn RandomPort>) -> DemoBattleReportRepo {
        DemoBattleReportRepo::new(
            pack,
            random.clone(),
            Arc::new(Delayer::immediate(random)),
            Some(DelayOption::fixed(800)),
        )
    }

    #[test]
    fn every_pack_template_is_complete() {
        for pack in [LocalePack::JA, LocalePack::EN, LocalePack::DE] {
            assert!(!pack.templates.is_empty());
            let demo = repo(pack, Arc::new(SystemRandom::new()));
            for template in pack.templates {
                let battle = demo.instantiate(template);
                assert!(battle.validate().is_ok(), "{} template invalid", pack.locale);
            }
        }
    }

    #[tokio::test]
    async fn powers_stay_in_bounds() {
        let demo = repo(LocalePack::EN, Arc::new(SystemRandom::new()));
        for _ in 0..50 {
            let battle = demo.generate_report(None).await.unwrap();
            for power in [battle.yono.power, battle.komae.power] {
                assert!((0.0..=100.0).contains(&power));
            }
        }
    }

    #[tokio::test]
    async fn uses_template_text_from_locale() {
        let demo = repo(LocalePack::DE, Arc::new(FixedRandom(0.0)));
        let battle = demo.generate_report(None).await.unwrap();
        assert_eq!(battle.title, "Ramen am Bahnhof");
        assert_eq!(battle.komae.title, "Komae Miso-Ramen");
        assert!(battle.id.starts_with("demo-de-"));
        assert_eq!(battle.status, BattleStatus::Success);
    }

    #[tokio::test]
    async fn sides_are_rolled_independently() {
        // template pick, yono power, komae power
        let random = Arc::new(SequenceRandom::new(vec![0.0, 0.99, 0.1]));
        let demo = repo(LocalePack::JA, random);
        let battle = demo.generate_report(None).await.unwrap();
        assert_eq!(battle.yono.power, 99.0);
        assert_eq!(battle.komae.power, 10.0);
    }

    #[tokio::test]
    async fn cancellation_propagates() {
        let demo = repo(LocalePack::JA, Arc::new(SystemRandom::new()));
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(
            demo.generate_report(Some(&cancel)).await,
            Err(RepoError::Cancelled)
        );
    }
}
