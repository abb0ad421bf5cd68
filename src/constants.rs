use crate::types::RoleKind;
use crate::types::RoleKind::*;

pub const CENTER_CARDS: usize = 3;

pub const AWAKE_WOLVES: &[RoleKind] = &[Werewolf, AlphaWolf, MysticWolf, LoverWolf];
pub const SLEEPY_WOLVES: &[RoleKind] = &[LucidWolf, DreamWolf];
pub const ALL_WOLVES: &[RoleKind] = &[
    Werewolf, AlphaWolf, MysticWolf, LoverWolf, LucidWolf, DreamWolf,
];
pub const SEEN_AS_WOLVES: &[RoleKind] = &[
    Werewolf, AlphaWolf, MysticWolf, LoverWolf, LucidWolf, DreamWolf, Imposter,
];
pub const SEE_WOLVES: &[RoleKind] = &[Werewolf, AlphaWolf, MysticWolf, LoverWolf, Minion, Merlin];
pub const EVIL: &[RoleKind] = &[
    Werewolf, AlphaWolf, MysticWolf, LoverWolf, LucidWolf, DreamWolf, Minion,
];
pub const SUSPICIOUS: &[RoleKind] = &[
    Werewolf,
    AlphaWolf,
    MysticWolf,
    LoverWolf,
    LucidWolf,
    DreamWolf,
    Minion,
    Tanner,
    LoverVillager,
    God,
];
// Loverwolves never show up in the lovers reveal.
pub const LOVERS: &[RoleKind] = &[LoverVillager];

pub const MARKS: &[&str] = &[
    "mark of villager",
    "mark of werewolf",
    "mark of tanner",
    "mark of nothing",
    "mark of shame",
    "mark of muting",
];

/// Phases in the order roles wake. The werewolf reveal runs between
/// doppelganger and werewolf and is not listed here. Enemyofreason has
/// no phase of its own.
pub const WAKE_ORDER: &[RoleKind] = &[
    Villager,
    Sentinel,
    Doppelganger,
    Werewolf,
    Imposter,
    DreamWolf,
    AlphaWolf,
    MysticWolf,
    Minion,
    Merlin,
    Mason,
    LoverWolf,
    LoverVillager,
    Seer,
    MadSeer,
    ApprenticeSeer,
    LucidWolf,
    Pi,
    Medium,
    Robber,
    Bandit,
    Witch,
    Trickster,
    Troublemaker,
    VillageIdiot,
    Fool,
    Drunk,
    Insomniac,
    Revealer,
    Curator,
    God,
    EnemyOfReason,
];

/// Roles whose copied action waits for their own phase.
pub const WRAP_UP_ROLES: &[RoleKind] = &[Curator, Revealer, Insomniac, God, EnemyOfReason];

pub const SEER_PLAYER_LOOK_CHANCE: f32 = 0.5;
pub const WITCH_SELF_CLAIM_CHANCE: f32 = 0.5;
pub const INSPECT_STOP_CHANCE: f32 = 0.5;
pub const INSPECT_MAX_LOOKS: usize = 2;
pub const VILLAGE_IDIOT_REVERSE_CHANCE: f32 = 0.5;
pub const VILLAGE_IDIOT_SKIP_CHANCE: f32 = 0.2;

pub const THINKING_SECS: u64 = 60;
pub const DISCUSSING_SECS: u64 = 5 * 60;
pub const WARNING_SECS: u64 = 30;

pub fn countdown_events() -> Vec<(u64, &'static str)> {
    vec![
        (
            0,
            "One minute to think before starting discussion... (press ctrl-c at any time to see the results)",
        ),
        (THINKING_SECS, "Five minutes to discuss until voting..."),
        (
            THINKING_SECS + DISCUSSING_SECS - WARNING_SECS,
            "Thirty seconds until voting...",
        ),
        (THINKING_SECS + DISCUSSING_SECS, "Time to vote!"),
    ]
}
