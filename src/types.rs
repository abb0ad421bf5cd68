use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::NightError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Villager,
    Minion,
    Werewolf,
    Doppelganger,
    Troublemaker,
    Robber,
    Bandit,
    Seer,
    Mason,
    Hunter,
    Bodyguard,
    Tanner,
    Sentinel,
    Drunk,
    Fool,
    VillageIdiot,
    AlphaWolf,
    MysticWolf,
    DreamWolf,
    ApprenticeSeer,
    Insomniac,
    Revealer,
    Witch,
    #[serde(rename = "PI")]
    Pi,
    Curator,
    LucidWolf,
    God,
    MadSeer,
    LoverWolf,
    LoverVillager,
    EnemyOfReason,
    Medium,
    Trickster,
    Merlin,
    Imposter,
}

impl RoleKind {
    pub const ALL: [RoleKind; 35] = [
        Self::Villager,
        Self::Minion,
        Self::Werewolf,
        Self::Doppelganger,
        Self::Troublemaker,
        Self::Robber,
        Self::Bandit,
        Self::Seer,
        Self::Mason,
        Self::Hunter,
        Self::Bodyguard,
        Self::Tanner,
        Self::Sentinel,
        Self::Drunk,
        Self::Fool,
        Self::VillageIdiot,
        Self::AlphaWolf,
        Self::MysticWolf,
        Self::DreamWolf,
        Self::ApprenticeSeer,
        Self::Insomniac,
        Self::Revealer,
        Self::Witch,
        Self::Pi,
        Self::Curator,
        Self::LucidWolf,
        Self::God,
        Self::MadSeer,
        Self::LoverWolf,
        Self::LoverVillager,
        Self::EnemyOfReason,
        Self::Medium,
        Self::Trickster,
        Self::Merlin,
        Self::Imposter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Villager => "villager",
            Self::Minion => "minion",
            Self::Werewolf => "werewolf",
            Self::Doppelganger => "doppelganger",
            Self::Troublemaker => "troublemaker",
            Self::Robber => "robber",
            Self::Bandit => "bandit",
            Self::Seer => "seer",
            Self::Mason => "mason",
            Self::Hunter => "hunter",
            Self::Bodyguard => "bodyguard",
            Self::Tanner => "tanner",
            Self::Sentinel => "sentinel",
            Self::Drunk => "drunk",
            Self::Fool => "fool",
            Self::VillageIdiot => "villageidiot",
            Self::AlphaWolf => "alphawolf",
            Self::MysticWolf => "mysticwolf",
            Self::DreamWolf => "dreamwolf",
            Self::ApprenticeSeer => "apprenticeseer",
            Self::Insomniac => "insomniac",
            Self::Revealer => "revealer",
            Self::Witch => "witch",
            Self::Pi => "PI",
            Self::Curator => "curator",
            Self::LucidWolf => "lucidwolf",
            Self::God => "god",
            Self::MadSeer => "madseer",
            Self::LoverWolf => "loverwolf",
            Self::LoverVillager => "lovervillager",
            Self::EnemyOfReason => "enemyofreason",
            Self::Medium => "medium",
            Self::Trickster => "trickster",
            Self::Merlin => "merlin",
            Self::Imposter => "imposter",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == value)
    }

    pub fn in_category(self, category: &[RoleKind]) -> bool {
        category.contains(&self)
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoleKind {
    type Err = NightError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| NightError::UnknownRole(value.to_string()))
    }
}

/// Index of a physical card in the night's card arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardId(pub usize);

/// A physical card. `copied` points at the card whose identity this one
/// assumed during the night (doppelganger, PI, medium).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleCard {
    pub kind: RoleKind,
    pub copied: Option<CardId>,
}

impl RoleCard {
    pub fn new(kind: RoleKind) -> Self {
        Self { kind, copied: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NightConfig {
    pub lonewolf: bool,
}

impl Default for NightConfig {
    fn default() -> Self {
        Self { lonewolf: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerLog {
    pub name: String,
    pub messages: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WakeEntry {
    pub role: RoleKind,
    pub count: usize,
}

impl fmt::Display for WakeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.role)
        } else {
            write!(f, "{} (x{})", self.role, self.count)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinalRole {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<String>,
}

impl fmt::Display for FinalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.role)?;
        if let Some(mark) = &self.mark {
            write!(f, " ({mark})")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NightOutcome {
    pub seed: u32,
    pub seating: Vec<String>,
    #[serde(rename = "privateLogs")]
    pub private_logs: Vec<PlayerLog>,
    #[serde(rename = "sharedLog")]
    pub shared_log: Vec<String>,
    #[serde(rename = "wakeOrder")]
    pub wake_order: Vec<WakeEntry>,
    #[serde(rename = "finalRoles")]
    pub final_roles: Vec<FinalRole>,
}

impl NightOutcome {
    pub fn seating_text(&self) -> String {
        format!("Seating order: {}", self.seating.join(", "))
    }

    pub fn wake_order_text(&self) -> String {
        let lines: Vec<String> = self
            .wake_order
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("{}. {entry}", idx + 1))
            .collect();
        format!("Wake order:\n\n{}", lines.join("\n"))
    }

    pub fn reveal_text(&self) -> String {
        let mut lines = self.shared_log.clone();
        lines.push("\nFinal roles:".to_string());
        lines.extend(self.final_roles.iter().map(|role| role.to_string()));
        lines.join("\n")
    }
}
