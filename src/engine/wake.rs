use super::*;

impl Night {
    /// Wakes everyone dealt `kind`, then any copied actions of that kind
    /// that were deferred to this phase.
    pub(super) fn wake(&mut self, kind: RoleKind) {
        let actors = self.original_by_role.get(&kind).cloned().unwrap_or_default();
        for actor in actors {
            let card = self.dealt[actor];
            self.act(actor, card, &[]);
        }

        let deferred: Vec<(usize, CardId)> = self
            .wrap_up
            .iter()
            .copied()
            .filter(|(_, card)| self.cards[card.0].kind == kind)
            .collect();
        for (actor, card) in deferred {
            self.act(actor, card, &[]);
        }

        if self.table().iter().any(|id| self.cards[id.0].kind == kind) {
            self.wake_order.push(kind);
        }
    }

    /// Shows wolves to those who see wolves, tells awake wolves who is
    /// asleep, and lets a lone awake wolf peek at the center.
    pub(super) fn reveal_wolves(&mut self) {
        let seen = self.players_in_category(SEEN_AS_WOLVES);
        let wolves = reveal_msg("wolf", "wolves", &self.players, &seen);
        for seat in self.players_in_category(SEE_WOLVES) {
            self.log.tell(seat, wolves.clone());
        }

        let awake = self.players_in_category(AWAKE_WOLVES);
        let sleepy = self.players_in_category(SLEEPY_WOLVES);
        let sleeping = reveal_msg("sleeping wolf", "sleeping wolves", &self.players, &sleepy);
        for &seat in &awake {
            self.log.tell(seat, sleeping.clone());
        }

        if let [wolf] = *seen.as_slice() {
            if self.config.lonewolf && awake.contains(&wolf) {
                let index = self.pick_center(&[]);
                self.log_center_look(wolf, index);
            }
        }
    }
}
