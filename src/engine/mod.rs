use std::collections::BTreeMap;

use crate::constants::{
    AWAKE_WOLVES, CENTER_CARDS, EVIL, INSPECT_MAX_LOOKS, INSPECT_STOP_CHANCE, LOVERS, MARKS,
    SEER_PLAYER_LOOK_CHANCE, SEEN_AS_WOLVES, SEE_WOLVES, SLEEPY_WOLVES, SUSPICIOUS,
    VILLAGE_IDIOT_REVERSE_CHANCE, VILLAGE_IDIOT_SKIP_CHANCE, WAKE_ORDER, WITCH_SELF_CLAIM_CHANCE,
    WRAP_UP_ROLES,
};
use crate::error::{NightError, Result};
use crate::rng::Rng;
use crate::types::{
    CardId, FinalRole, NightConfig, NightOutcome, PlayerLog, RoleCard, RoleKind, WakeEntry,
};

mod actions;
mod log;
mod utils;
mod wake;

use self::log::NightLog;
pub use self::utils::{reveal_msg, rotate, select_target};

/// Parses role names, failing on the first one that is not a known kind.
pub fn parse_roster<S: AsRef<str>>(names: &[S]) -> Result<Vec<RoleKind>> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

fn validate(players: &[String], roles: &[RoleKind]) -> Result<()> {
    if players.is_empty() {
        return Err(NightError::EmptyTable);
    }
    if roles.len() != players.len() + CENTER_CARDS {
        return Err(NightError::RosterSize {
            players: players.len(),
            roles: roles.len(),
        });
    }
    Ok(())
}

/// All state of one night. Slots `0..n` are seats, `n..n+3` the center,
/// and `n+3` holds the wolf card.
#[derive(Clone, Debug)]
pub struct Night {
    players: Vec<String>,
    config: NightConfig,
    rng: Rng,

    cards: Vec<RoleCard>,
    layout: Vec<CardId>,
    dealt: Vec<CardId>,
    original_by_role: BTreeMap<RoleKind, Vec<usize>>,
    believed_by_role: BTreeMap<RoleKind, Vec<usize>>,

    shielded: Vec<usize>,
    revealed: Vec<usize>,
    marked: BTreeMap<usize, &'static str>,
    wrap_up: Vec<(usize, CardId)>,

    log: NightLog,
    wake_order: Vec<RoleKind>,
    resolved: bool,
}

impl Night {
    /// Shuffles `roles` and seats the first `players.len()` cards.
    pub fn deal(
        players: Vec<String>,
        mut roles: Vec<RoleKind>,
        config: NightConfig,
        mut rng: Rng,
    ) -> Result<Self> {
        validate(&players, &roles)?;
        rng.shuffle(&mut roles);
        Self::from_layout(players, roles, config, rng)
    }

    /// Seats `roles` in the given order without shuffling.
    pub fn from_layout(
        players: Vec<String>,
        roles: Vec<RoleKind>,
        config: NightConfig,
        rng: Rng,
    ) -> Result<Self> {
        validate(&players, &roles)?;
        let player_count = players.len();

        let mut cards: Vec<RoleCard> = roles.iter().map(|&kind| RoleCard::new(kind)).collect();
        cards.push(RoleCard::new(RoleKind::Werewolf));
        let layout: Vec<CardId> = (0..cards.len()).map(CardId).collect();
        let dealt = layout[..player_count].to_vec();

        let mut original_by_role: BTreeMap<RoleKind, Vec<usize>> = BTreeMap::new();
        for (seat, &kind) in roles.iter().take(player_count).enumerate() {
            original_by_role.entry(kind).or_default().push(seat);
        }
        let believed_by_role = original_by_role.clone();
        let log = NightLog::new(players.clone());

        Ok(Self {
            players,
            config,
            rng,
            cards,
            layout,
            dealt,
            original_by_role,
            believed_by_role,
            shielded: Vec::new(),
            revealed: Vec::new(),
            marked: BTreeMap::new(),
            wrap_up: Vec::new(),
            log,
            wake_order: Vec::new(),
            resolved: false,
        })
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn seed(&self) -> u32 {
        self.rng.initial_seed()
    }

    /// Kinds in every slot, wolf card last.
    pub fn kinds(&self) -> Vec<RoleKind> {
        self.layout.iter().map(|&id| self.cards[id.0].kind).collect()
    }

    pub fn run(mut self) -> NightOutcome {
        self.resolve();
        self.outcome()
    }

    /// Runs every phase once. Calling it again does nothing.
    pub fn resolve(&mut self) {
        if self.resolved {
            return;
        }
        self.resolved = true;
        for seat in 0..self.player_count() {
            let kind = self.cards[self.dealt[seat].0].kind;
            self.log.record(seat, format!("began the night as {kind}"));
        }
        for &kind in WAKE_ORDER {
            if kind == RoleKind::Werewolf {
                self.reveal_wolves();
            }
            self.wake(kind);
        }
    }

    pub fn outcome(&self) -> NightOutcome {
        let wake_order = self
            .wake_order
            .iter()
            .map(|&role| WakeEntry {
                role,
                count: self.table().iter().filter(|&&id| self.cards[id.0].kind == role).count(),
            })
            .collect();
        let private_logs = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, name)| PlayerLog {
                name: name.clone(),
                messages: self.log.private(seat).to_vec(),
            })
            .collect();
        let final_roles = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, name)| FinalRole {
                name: name.clone(),
                role: self.describe(self.layout[seat]),
                mark: self.marked.get(&seat).map(|mark| mark.to_string()),
            })
            .collect();

        NightOutcome {
            seed: self.seed(),
            seating: self.players.clone(),
            private_logs,
            shared_log: self.log.shared().to_vec(),
            wake_order,
            final_roles,
        }
    }

    // Seats plus center, without the wolf card.
    fn table(&self) -> &[CardId] {
        &self.layout[..self.player_count() + CENTER_CARDS]
    }

    fn wolf_slot(&self) -> usize {
        self.player_count() + CENTER_CARDS
    }

    fn center(&self, index: usize) -> usize {
        self.player_count() + index
    }

    fn name(&self, seat: usize) -> &str {
        &self.players[seat]
    }

    fn kind_at(&self, slot: usize) -> RoleKind {
        self.cards[self.layout[slot].0].kind
    }

    fn rotate(&mut self, slots: &[usize]) {
        rotate(&mut self.layout, slots);
    }

    fn new_card(&mut self, kind: RoleKind) -> CardId {
        self.cards.push(RoleCard::new(kind));
        CardId(self.cards.len() - 1)
    }

    /// Card name with its copied chain, e.g. `doppelganger (PI (minion))`.
    fn describe(&self, id: CardId) -> String {
        let card = &self.cards[id.0];
        match card.copied {
            Some(copied) => format!("{} ({})", card.kind, self.describe(copied)),
            None => card.kind.to_string(),
        }
    }

    /// Seats whose holder believes they are one of `category`.
    fn players_in_category(&self, category: &[RoleKind]) -> Vec<usize> {
        category
            .iter()
            .filter_map(|kind| self.believed_by_role.get(kind))
            .flatten()
            .copied()
            .collect()
    }

    fn with_shielded(&self, base: &[usize]) -> Vec<usize> {
        let mut excluded = base.to_vec();
        excluded.extend(&self.shielded);
        excluded
    }

    /// A random center index not in `seen`; callers pass at most two.
    fn pick_center(&mut self, seen: &[usize]) -> usize {
        let options: Vec<usize> = (0..CENTER_CARDS)
            .filter(|index| !seen.contains(index))
            .collect();
        options[self.rng.pick_index(options.len())]
    }
}
